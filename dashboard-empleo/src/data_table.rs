//! Sortable job postings table.

use dioxus::prelude::*;
use empleo_chart_ui::components::{SectionCard, StatusBadge};
use empleo_data::format;
use empleo_data::sort::{sorted_postings, SortDirection, SortField, SortState};

const TH: &str = "text-align: left; padding: 10px 12px; font-size: 12px; font-weight: 600; color: #616161; border-bottom: 1px solid #E0E0E0; background: #F5F5F5; white-space: nowrap;";
const TD: &str = "padding: 10px 12px; border-bottom: 1px solid #EEEEEE;";
const SORT_BUTTON: &str = "border: none; background: none; padding: 0; font: inherit; color: inherit; cursor: pointer; display: flex; align-items: center; gap: 4px;";

/// Header indicator: direction arrow for the active field, neutral glyph
/// otherwise.
fn sort_indicator(state: SortState, field: SortField) -> &'static str {
    match (state.field, state.direction) {
        (Some(f), SortDirection::Ascending) if f == field => "▲",
        (Some(f), SortDirection::Descending) if f == field => "▼",
        _ => "⇅",
    }
}

/// The postings table with clickable date and salary headers.
///
/// Sort state lives in a signal owned by this component alone; every
/// render derives a fresh ordered copy of the fixed postings table, so
/// the source data is never touched.
#[component]
pub fn DataTable() -> Element {
    let mut sort = use_signal(SortState::default);
    let state = sort();
    let rows = sorted_postings(state);

    let date_indicator = sort_indicator(state, SortField::Date);
    let salary_indicator = sort_indicator(state, SortField::Salary);

    rsx! {
        SectionCard {
            title: "Ofertas Laborales Recientes".to_string(),
            description: "Últimas ofertas de empleo publicadas en el mercado chileno".to_string(),

            div {
                style: "border: 1px solid #E0E0E0; border-radius: 6px; overflow-x: auto;",
                table {
                    style: "width: 100%; border-collapse: collapse; font-size: 14px;",
                    thead {
                        tr {
                            th { style: TH, "ID" }
                            th {
                                style: TH,
                                button {
                                    style: SORT_BUTTON,
                                    onclick: move |_| sort.write().toggle(SortField::Date),
                                    "Fecha {date_indicator}"
                                }
                            }
                            th { style: TH, "Empresa" }
                            th { style: TH, "Cargo" }
                            th {
                                style: "{TH} text-align: right;",
                                button {
                                    style: "{SORT_BUTTON} margin-left: auto;",
                                    onclick: move |_| sort.write().toggle(SortField::Salary),
                                    "Sueldo {salary_indicator}"
                                }
                            }
                            th { style: TH, "Sector" }
                            th { style: TH, "Estado" }
                        }
                    }
                    tbody {
                        for posting in rows {
                            tr {
                                key: "{posting.id}",
                                td { style: "{TD} font-family: monospace; font-size: 13px;", "{posting.id}" }
                                td { style: TD, "{posting.date}" }
                                td { style: "{TD} font-weight: 500;", "{posting.company}" }
                                td { style: TD, "{posting.position}" }
                                td {
                                    style: "{TD} text-align: right; font-weight: 600;",
                                    {format::clp(posting.salary)}
                                }
                                td { style: TD, "{posting.sector}" }
                                td {
                                    style: TD,
                                    StatusBadge { status: posting.status }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
