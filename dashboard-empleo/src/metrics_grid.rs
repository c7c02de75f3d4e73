//! Headline metrics grid.

use dioxus::prelude::*;
use empleo_chart_ui::components::MetricCard;
use empleo_data::datasets::METRICS;

/// Four summary cards, one per headline metric.
#[component]
pub fn MetricsGrid() -> Element {
    rsx! {
        div {
            style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(220px, 1fr)); gap: 16px;",
            for metric in METRICS {
                MetricCard { key: "{metric.title}", metric }
            }
        }
    }
}
