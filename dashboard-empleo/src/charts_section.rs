//! Monthly employment and sector comparison charts.

use dioxus::prelude::*;
use empleo_chart_ui::components::{ChartContainer, SectionCard};
use empleo_chart_ui::{js_bridge, theme};
use empleo_data::datasets::{EMPLOYMENT_SERIES, SECTORS};

/// DOM id for the monthly employment line chart.
const EMPLOYMENT_CHART_ID: &str = "employment-trends-chart";
/// DOM id for the jobs-by-sector bar chart.
const SECTOR_CHART_ID: &str = "sector-jobs-chart";

/// Two side-by-side comparative charts.
#[component]
pub fn ChartsSection() -> Element {
    use_effect(|| {
        render_employment_chart();
        render_sector_chart();
    });

    rsx! {
        div {
            style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(420px, 1fr)); gap: 24px;",

            SectionCard {
                title: "Tendencias del Mercado Laboral".to_string(),
                description: "Evolución mensual de tasa de desempleo y empleos creados".to_string(),
                ChartContainer {
                    id: EMPLOYMENT_CHART_ID.to_string(),
                    min_height: 320,
                }
            }

            SectionCard {
                title: "Empleos por Sector Económico".to_string(),
                description: "Distribución de empleados por sector en Chile".to_string(),
                ChartContainer {
                    id: SECTOR_CHART_ID.to_string(),
                    min_height: 320,
                }
            }
        }
    }
}

fn render_employment_chart() {
    let data: Vec<serde_json::Value> = EMPLOYMENT_SERIES
        .iter()
        .map(|p| {
            serde_json::json!({
                "month": p.month,
                "desempleo": p.unemployment_rate,
                "empleos": p.jobs_created,
            })
        })
        .collect();

    let data_json = serde_json::to_string(&data).unwrap_or_default();
    let config_json = serde_json::json!({
        "xKey": "month",
        "series": [
            {"key": "desempleo", "label": "Tasa Desempleo", "color": theme::CHART_RED, "strokeWidth": 2, "axis": "left", "format": "percent"},
            {"key": "empleos", "label": "Empleos Creados", "color": theme::CHART_BLUE, "strokeWidth": 2, "axis": "right", "format": "thousands"},
        ],
        "leftFormat": "percent",
        "rightFormat": "k",
    })
    .to_string();

    js_bridge::render_line_series(EMPLOYMENT_CHART_ID, &data_json, &config_json);
}

fn render_sector_chart() {
    let data: Vec<serde_json::Value> = SECTORS
        .iter()
        .map(|s| {
            serde_json::json!({
                "sector": s.sector,
                "empleos": s.jobs,
            })
        })
        .collect();

    let data_json = serde_json::to_string(&data).unwrap_or_default();
    let config_json = serde_json::json!({
        "xKey": "sector",
        "key": "empleos",
        "label": "Empleos",
        "color": theme::CHART_BLUE,
        "format": "k",
    })
    .to_string();

    js_bridge::render_bar_series(SECTOR_CHART_ID, &data_json, &config_json);
}
