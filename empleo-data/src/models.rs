//! Record types for the employability dashboard.
//!
//! All structs derive `Serialize` so they can be passed to D3.js as JSON
//! from the Dioxus WASM frontend or bundled into the data export.

use serde::Serialize;

/// Direction of a metric's period-over-period change.
///
/// Kept as a tagged variant so the UI resolves glyph and color through a
/// lookup table instead of comparing strings in render code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
}

/// Icon identity for a headline metric card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricIcon {
    Workforce,
    Salary,
    Hiring,
    Companies,
}

/// A headline statistic with a period-over-period change indicator.
///
/// `value` and `change` are pre-formatted display strings; the metric set
/// is fixed and never recomputed at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MetricRecord {
    pub title: &'static str,
    /// Formatted headline value (e.g. "8.7%", "$720.450").
    pub value: &'static str,
    /// Signed percent change vs the previous quarter (e.g. "+4.2%").
    pub change: &'static str,
    pub trend: Trend,
    pub icon: MetricIcon,
}

/// One monthly observation in the employment time series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EmploymentSeriesPoint {
    /// Abbreviated Spanish month label ("Ene".."Ago").
    pub month: &'static str,
    /// National unemployment rate in percent.
    pub unemployment_rate: f64,
    /// Jobs created during the month.
    pub jobs_created: u32,
    /// Average salary in thousands of CLP.
    pub average_salary: u32,
}

/// Employment head count for one economic sector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SectorRecord {
    pub sector: &'static str,
    pub jobs: u32,
}

/// One yearly observation in the 2015-2024 historical series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HistoricalPoint {
    pub year: i32,
    /// Annual average unemployment rate in percent.
    pub unemployment_rate: f64,
    /// Total employed persons.
    pub total_employment: u32,
    /// Job postings published during the year.
    pub postings_published: u32,
}

/// Publication status of a job posting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PostingStatus {
    #[serde(rename = "Activa")]
    Active,
    #[serde(rename = "En Revisión")]
    UnderReview,
    #[serde(rename = "Cerrada")]
    Closed,
}

impl PostingStatus {
    /// Spanish display label, matching the serialized form.
    pub fn label(&self) -> &'static str {
        match self {
            PostingStatus::Active => "Activa",
            PostingStatus::UnderReview => "En Revisión",
            PostingStatus::Closed => "Cerrada",
        }
    }
}

/// One row of the job postings table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct JobPosting {
    /// Unique posting identifier ("EMP001".."EMP008").
    pub id: &'static str,
    /// Publication date as an ISO "YYYY-MM-DD" string.
    ///
    /// ISO dates order lexicographically, so the table sorts them as
    /// plain strings.
    pub date: &'static str,
    pub company: &'static str,
    pub position: &'static str,
    /// Monthly salary in CLP.
    pub salary: u32,
    pub sector: &'static str,
    pub status: PostingStatus,
}
