//! Dashboard de Empleabilidad en Chile
//!
//! Single-page dashboard over the fixed Chilean labor market dataset:
//! headline metrics, ten-year historical trends, monthly and sector
//! charts, and a sortable job postings table.
//!
//! Every section renders synchronously from in-source data; the charts
//! are painted by D3.js through `empleo_chart_ui::js_bridge`. There is no
//! fetching, no routing and no persisted state.

mod charts_section;
mod data_table;
mod header;
mod historical_trends;
mod metrics_grid;

use dioxus::prelude::*;
use empleo_chart_ui::js_bridge;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("empleo-dashboard-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    // Load D3 and evaluate the chart scripts once; each chart section
    // issues its own render call from its mount effect.
    use_effect(|| {
        js_bridge::ensure_d3();
        js_bridge::init_charts();
        web_sys::console::log_1(&"[empleo] dashboard mounted".into());
    });

    rsx! {
        div {
            style: "min-height: 100vh; background: #FAFAFA; color: #212121; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",

            header::DashboardHeader {}

            main {
                style: "max-width: 1100px; margin: 0 auto; padding: 24px 16px; display: flex; flex-direction: column; gap: 24px;",

                metrics_grid::MetricsGrid {}
                historical_trends::HistoricalTrends {}
                charts_section::ChartsSection {}
                data_table::DataTable {}
            }
        }
    }
}
