//! Static style tokens shared across the dashboard.
//!
//! Trend and status rendering goes through these lookup tables so no
//! component ever branches on display strings.

use empleo_data::models::{MetricIcon, PostingStatus, Trend};

/// Primary series color (jobs created, sector bars, total employment).
pub const CHART_BLUE: &str = "#2196F3";
/// Unemployment rate series color.
pub const CHART_RED: &str = "#F44336";
/// Postings published series color.
pub const CHART_ORANGE: &str = "#FF9800";
/// Positive accent (growth tile, upward trends).
pub const ACCENT_GREEN: &str = "#2E7D32";

/// Display attributes for a posting status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BadgeStyle {
    pub background: &'static str,
    pub border: &'static str,
    pub text: &'static str,
}

/// Badge colors per posting status.
pub fn badge_style(status: PostingStatus) -> BadgeStyle {
    match status {
        PostingStatus::Active => BadgeStyle {
            background: "#E8F5E9",
            border: "#4CAF50",
            text: "#2E7D32",
        },
        PostingStatus::UnderReview => BadgeStyle {
            background: "#FFF8E1",
            border: "#FFB300",
            text: "#8D6E63",
        },
        PostingStatus::Closed => BadgeStyle {
            background: "#FFEBEE",
            border: "#EF5350",
            text: "#C62828",
        },
    }
}

/// Arrow glyph for a trend indicator.
pub fn trend_glyph(trend: Trend) -> &'static str {
    match trend {
        Trend::Up => "▲",
        Trend::Down => "▼",
    }
}

/// Text color for a trend indicator.
pub fn trend_color(trend: Trend) -> &'static str {
    match trend {
        Trend::Up => "#2E7D32",
        Trend::Down => "#C62828",
    }
}

/// Glyph for a headline metric icon.
pub fn metric_glyph(icon: MetricIcon) -> &'static str {
    match icon {
        MetricIcon::Workforce => "👥",
        MetricIcon::Salary => "💰",
        MetricIcon::Hiring => "💼",
        MetricIcon::Companies => "🏢",
    }
}
