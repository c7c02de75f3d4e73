//! Posting status badge.

use crate::theme;
use dioxus::prelude::*;
use empleo_data::models::PostingStatus;

/// Props for StatusBadge
#[derive(Props, Clone, PartialEq)]
pub struct StatusBadgeProps {
    pub status: PostingStatus,
}

/// Pill badge colored by posting status.
#[component]
pub fn StatusBadge(props: StatusBadgeProps) -> Element {
    let style = theme::badge_style(props.status);

    rsx! {
        span {
            style: "display: inline-block; padding: 2px 10px; border-radius: 999px; font-size: 12px; font-weight: 500; background: {style.background}; border: 1px solid {style.border}; color: {style.text};",
            "{props.status.label()}"
        }
    }
}
