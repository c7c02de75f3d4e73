//! Summary figures derived from the historical series.
//!
//! The three tiles under the historical chart are computed from the fixed
//! 2015-2024 series rather than stored alongside it, so they can never
//! drift from the data they summarize.

use crate::datasets::HISTORICAL_SERIES;

/// Ten-year headline figures shown under the historical chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HistoricalSummary {
    /// Mean unemployment rate across the series, in percent.
    pub mean_unemployment: f64,
    /// Total-employment growth from the first to the last year, in percent.
    pub employment_growth: f64,
    /// Postings published across all years.
    pub total_postings: u32,
}

/// Compute the summary over the fixed historical series.
pub fn historical_summary() -> HistoricalSummary {
    let first = HISTORICAL_SERIES[0];
    let last = HISTORICAL_SERIES[HISTORICAL_SERIES.len() - 1];

    let mean_unemployment = HISTORICAL_SERIES
        .iter()
        .map(|p| p.unemployment_rate)
        .sum::<f64>()
        / HISTORICAL_SERIES.len() as f64;

    let employment_growth = (last.total_employment as f64 - first.total_employment as f64)
        / first.total_employment as f64
        * 100.0;

    let total_postings = HISTORICAL_SERIES.iter().map(|p| p.postings_published).sum();

    HistoricalSummary {
        mean_unemployment,
        employment_growth,
        total_postings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format;

    #[test]
    fn mean_unemployment_over_ten_years() {
        let summary = historical_summary();
        assert!((summary.mean_unemployment - 8.04).abs() < 1e-9);
        assert_eq!(format::percent1(summary.mean_unemployment), "8.0%");
    }

    #[test]
    fn employment_growth_since_2015() {
        let summary = historical_summary();
        // 7,850,000 -> 8,850,000
        assert!((summary.employment_growth - 12.738_853_503_184_714).abs() < 1e-9);
        assert_eq!(format::signed_percent1(summary.employment_growth), "+12.7%");
    }

    #[test]
    fn total_postings_accumulated() {
        let summary = historical_summary();
        assert_eq!(summary.total_postings, 545_000);
        assert_eq!(format::compact_k(summary.total_postings), "545K");
    }
}
