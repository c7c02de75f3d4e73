//! Ten-year historical trends section.

use dioxus::prelude::*;
use empleo_chart_ui::components::{ChartContainer, SectionCard};
use empleo_chart_ui::{js_bridge, theme};
use empleo_data::datasets::HISTORICAL_SERIES;
use empleo_data::{format, stats};

/// Chart container DOM element ID used by D3.js to render into.
const CHART_ID: &str = "historical-trends-chart";

/// Historical chart (2015-2024) with three derived summary tiles.
#[component]
pub fn HistoricalTrends() -> Element {
    let summary = stats::historical_summary();

    use_effect(|| render_chart());

    rsx! {
        SectionCard {
            title: "Evolución Histórica del Mercado Laboral (2015-2024)".to_string(),
            description: "Análisis de 10 años de datos: tasa de desempleo, empleo total y ofertas laborales publicadas".to_string(),

            ChartContainer {
                id: CHART_ID.to_string(),
                min_height: 340,
            }

            div {
                style: "margin-top: 20px; display: grid; grid-template-columns: repeat(auto-fit, minmax(180px, 1fr)); gap: 16px;",
                SummaryTile {
                    label: "Desempleo Promedio".to_string(),
                    value: format::percent1(summary.mean_unemployment),
                    note: "Últimos 10 años".to_string(),
                }
                SummaryTile {
                    label: "Crecimiento Empleo".to_string(),
                    value: format::signed_percent1(summary.employment_growth),
                    note: "Desde 2015".to_string(),
                    accent: true,
                }
                SummaryTile {
                    label: "Ofertas Totales".to_string(),
                    value: format::compact_k(summary.total_postings),
                    note: "Acumuladas 2015-2024".to_string(),
                }
            }
        }
    }
}

fn render_chart() {
    let data: Vec<serde_json::Value> = HISTORICAL_SERIES
        .iter()
        .map(|p| {
            serde_json::json!({
                "year": p.year.to_string(),
                "desempleo": p.unemployment_rate,
                "empleo": p.total_employment,
                "ofertas": p.postings_published,
            })
        })
        .collect();

    let data_json = serde_json::to_string(&data).unwrap_or_default();
    let config_json = serde_json::json!({
        "xKey": "year",
        "series": [
            {"key": "desempleo", "label": "Tasa de Desempleo", "color": theme::CHART_RED, "strokeWidth": 3, "axis": "left", "format": "percent"},
            {"key": "empleo", "label": "Empleo Total", "color": theme::CHART_BLUE, "strokeWidth": 3, "axis": "right", "format": "thousands"},
            {"key": "ofertas", "label": "Ofertas Publicadas", "color": theme::CHART_ORANGE, "strokeWidth": 3, "axis": "right", "format": "thousands"},
        ],
        "leftFormat": "percent",
        "rightFormat": "M",
    })
    .to_string();

    js_bridge::render_line_series(CHART_ID, &data_json, &config_json);
}

/// Props for SummaryTile
#[derive(Props, Clone, PartialEq)]
struct SummaryTileProps {
    label: String,
    value: String,
    note: String,
    #[props(default = false)]
    accent: bool,
}

/// One bordered tile under the historical chart.
#[component]
fn SummaryTile(props: SummaryTileProps) -> Element {
    let value_color = if props.accent { theme::ACCENT_GREEN } else { "#212121" };

    rsx! {
        div {
            style: "border: 1px solid #E0E0E0; border-radius: 8px; background: #FFFFFF; padding: 14px 16px;",
            div {
                style: "font-size: 13px; color: #757575;",
                "{props.label}"
            }
            div {
                style: "font-size: 24px; font-weight: 700; color: {value_color};",
                "{props.value}"
            }
            div {
                style: "font-size: 11px; color: #9E9E9E; margin-top: 2px;",
                "{props.note}"
            }
        }
    }
}
