//! Client-side ordering of the job postings table.
//!
//! The table never mutates the posting data. `sorted_postings` derives a
//! fresh ordered copy of the fixed dataset on every call; `SortState` is
//! owned by the table component alone and dies with it.

use crate::datasets::JOB_POSTINGS;
use crate::models::JobPosting;
use std::cmp::Ordering;

/// Posting attribute the table can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Date,
    Salary,
}

/// Ordering polarity applied to the active sort field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// Current table ordering.
///
/// `field` is `None` until the first header click; the table then shows
/// declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState {
    pub field: Option<SortField>,
    pub direction: SortDirection,
}

impl Default for SortState {
    fn default() -> Self {
        Self {
            field: None,
            direction: SortDirection::Descending,
        }
    }
}

impl SortState {
    /// Apply a header click: the active field flips direction, a new
    /// field becomes active with direction reset to descending.
    pub fn toggle(&mut self, field: SortField) {
        if self.field == Some(field) {
            self.direction = self.direction.flipped();
        } else {
            self.field = Some(field);
            self.direction = SortDirection::Descending;
        }
    }
}

/// Compare two postings under the active sort field.
///
/// With no field selected every pair compares equal, which keeps the
/// declaration order: no sort was requested, so this is a pass-through
/// rather than a stable re-sort by some default key.
fn compare(a: &JobPosting, b: &JobPosting, state: SortState) -> Ordering {
    let ord = match state.field {
        None => return Ordering::Equal,
        // ISO "YYYY-MM-DD" strings order lexicographically
        Some(SortField::Date) => a.date.cmp(b.date),
        Some(SortField::Salary) => a.salary.cmp(&b.salary),
    };
    match state.direction {
        SortDirection::Ascending => ord,
        SortDirection::Descending => ord.reverse(),
    }
}

/// Derive the ordered view of the postings table for the given state.
pub fn sorted_postings(state: SortState) -> Vec<JobPosting> {
    let mut rows = JOB_POSTINGS.to_vec();
    rows.sort_by(|a, b| compare(a, b, state));
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datasets::JOB_POSTINGS;

    fn ids(rows: &[JobPosting]) -> Vec<&'static str> {
        rows.iter().map(|p| p.id).collect()
    }

    /// Start from the initial state and apply a sequence of header clicks.
    fn after_clicks(clicks: &[SortField]) -> (SortState, Vec<JobPosting>) {
        let mut state = SortState::default();
        for &field in clicks {
            state.toggle(field);
        }
        let rows = sorted_postings(state);
        (state, rows)
    }

    // ───────────────────── default (no field) ─────────────────────

    #[test]
    fn default_order_is_declaration_order() {
        let rows = sorted_postings(SortState::default());
        assert_eq!(
            ids(&rows),
            vec!["EMP001", "EMP002", "EMP003", "EMP004", "EMP005", "EMP006", "EMP007", "EMP008"]
        );
    }

    // ───────────────────── toggle-or-reset rule ─────────────────────

    #[test]
    fn first_click_sorts_descending() {
        let (state, _) = after_clicks(&[SortField::Salary]);
        assert_eq!(state.field, Some(SortField::Salary));
        assert_eq!(state.direction, SortDirection::Descending);
    }

    #[test]
    fn second_click_on_same_field_flips_direction() {
        let (state, _) = after_clicks(&[SortField::Salary, SortField::Salary]);
        assert_eq!(state.field, Some(SortField::Salary));
        assert_eq!(state.direction, SortDirection::Ascending);
    }

    #[test]
    fn switching_field_resets_direction_to_descending() {
        let mut state = SortState {
            field: Some(SortField::Salary),
            direction: SortDirection::Ascending,
        };
        state.toggle(SortField::Date);
        assert_eq!(state.field, Some(SortField::Date));
        assert_eq!(state.direction, SortDirection::Descending);
    }

    // ───────────────────── derived ordering ─────────────────────

    #[test]
    fn salary_descending_matches_expected_sequence() {
        let (_, rows) = after_clicks(&[SortField::Salary]);
        let salaries: Vec<u32> = rows.iter().map(|p| p.salary).collect();
        assert_eq!(
            salaries,
            vec![2_200_000, 1_800_000, 1_750_000, 1_650_000, 1_600_000, 1_500_000, 1_400_000, 950_000]
        );
    }

    #[test]
    fn salary_ascending_is_exact_reverse_of_descending() {
        // Salaries are duplicate-free, so the two orders are mirror images.
        let desc = sorted_postings(SortState {
            field: Some(SortField::Salary),
            direction: SortDirection::Descending,
        });
        let (_, asc) = after_clicks(&[SortField::Salary, SortField::Salary]);
        let mut reversed = ids(&desc);
        reversed.reverse();
        assert_eq!(ids(&asc), reversed);
    }

    #[test]
    fn date_descending_puts_newest_first() {
        let (_, rows) = after_clicks(&[SortField::Date]);
        assert_eq!(rows[0].date, "2024-01-15");
        assert_eq!(rows[rows.len() - 1].date, "2024-01-12");
        for pair in rows.windows(2) {
            assert!(pair[0].date >= pair[1].date);
        }
    }

    #[test]
    fn sorting_is_a_permutation_of_the_fixed_ids() {
        let cases: [&[SortField]; 4] = [
            &[],
            &[SortField::Date],
            &[SortField::Salary],
            &[SortField::Salary, SortField::Salary],
        ];
        let mut want = ids(&JOB_POSTINGS);
        want.sort_unstable();
        for clicks in cases {
            let (_, rows) = after_clicks(clicks);
            assert_eq!(rows.len(), JOB_POSTINGS.len());
            let mut got = ids(&rows);
            got.sort_unstable();
            assert_eq!(got, want);
        }
    }
}
