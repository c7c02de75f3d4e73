//! Chart container component with skeleton fallback.

use crate::components::Skeleton;
use dioxus::prelude::*;

/// Props for ChartContainer
#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// The DOM id for the chart container (D3 will render into this)
    pub id: String,
    /// Whether to show the skeleton fallback instead of the chart
    #[props(default = false)]
    pub loading: bool,
    /// Minimum height in pixels
    #[props(default = 320)]
    pub min_height: u32,
}

/// A container div for D3.js charts with a skeleton placeholder.
///
/// All dashboard data is in-source, so `loading` stays false in practice;
/// the fallback exists for sections that one day load asynchronously.
#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    let style = format!(
        "min-height: {}px; position: relative; width: 100%;",
        props.min_height
    );

    rsx! {
        div {
            style: "{style}",
            if props.loading {
                Skeleton { height: props.min_height }
            } else {
                div {
                    id: "{props.id}",
                    style: "width: 100%;",
                }
            }
        }
    }
}
