//! Skeleton placeholder block.

use dioxus::prelude::*;

/// Props for Skeleton
#[derive(Props, Clone, PartialEq)]
pub struct SkeletonProps {
    /// Block height in pixels
    #[props(default = 128)]
    pub height: u32,
}

/// Gray placeholder block shown while a section's content is pending.
#[component]
pub fn Skeleton(props: SkeletonProps) -> Element {
    rsx! {
        div {
            style: "height: {props.height}px; width: 100%; background: #ECEFF1; border-radius: 8px;",
        }
    }
}
