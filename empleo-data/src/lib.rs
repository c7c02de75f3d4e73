//! Core data layer for the Chilean employability dashboard.
//!
//! This crate holds everything the dashboard knows that is not UI:
//! - `models`: typed records for metrics, time series and job postings
//! - `datasets`: the fixed in-source tables backing every section
//! - `sort`: the job postings table ordering (the only stateful behavior)
//! - `format`: es-CL display formatting helpers
//! - `stats`: summary figures derived from the historical series
//!
//! All datasets are `const` tables of `'static` records; nothing is
//! created, updated or deleted after compile time. The sort routine never
//! mutates the source table, it derives a fresh ordered copy per call.
//!
//! # Usage
//!
//! ```rust
//! use empleo_data::sort::{sorted_postings, SortField, SortState};
//!
//! let mut state = SortState::default();
//! state.toggle(SortField::Salary);
//! let rows = sorted_postings(state);
//! assert_eq!(rows[0].salary, 2_200_000);
//! ```

pub mod datasets;
pub mod format;
pub mod models;
pub mod sort;
pub mod stats;
