//! Headline metric card.

use crate::theme;
use dioxus::prelude::*;
use empleo_data::models::MetricRecord;

/// Props for MetricCard
#[derive(Props, Clone, PartialEq)]
pub struct MetricCardProps {
    pub metric: MetricRecord,
}

/// A summary card showing one headline metric with its trend indicator.
#[component]
pub fn MetricCard(props: MetricCardProps) -> Element {
    let metric = props.metric;
    let glyph = theme::trend_glyph(metric.trend);
    let color = theme::trend_color(metric.trend);

    rsx! {
        div {
            style: "background: #FFFFFF; border: 1px solid #E0E0E0; border-radius: 10px; padding: 16px 20px;",
            div {
                style: "display: flex; justify-content: space-between; align-items: center; margin-bottom: 8px;",
                span {
                    style: "font-size: 13px; font-weight: 500; color: #757575;",
                    "{metric.title}"
                }
                span {
                    style: "font-size: 16px;",
                    "{theme::metric_glyph(metric.icon)}"
                }
            }
            div {
                style: "font-size: 26px; font-weight: 700; margin-bottom: 4px;",
                "{metric.value}"
            }
            div {
                style: "display: flex; align-items: center; gap: 4px; font-size: 13px; color: {color};",
                span { "{glyph}" }
                span { "{metric.change}" }
                span {
                    style: "color: #9E9E9E;",
                    "vs trimestre anterior"
                }
            }
        }
    }
}
