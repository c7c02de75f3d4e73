//! Reusable Dioxus RSX components for the dashboard sections.

mod chart_container;
mod metric_card;
mod section_card;
mod skeleton;
mod status_badge;

pub use chart_container::ChartContainer;
pub use metric_card::MetricCard;
pub use section_card::SectionCard;
pub use skeleton::Skeleton;
pub use status_badge::StatusBadge;
