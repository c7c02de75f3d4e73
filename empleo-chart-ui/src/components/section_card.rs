//! Card wrapper for a dashboard section.

use dioxus::prelude::*;

/// Props for SectionCard
#[derive(Props, Clone, PartialEq)]
pub struct SectionCardProps {
    /// Section title
    pub title: String,
    /// One-line description shown under the title
    #[props(default = String::new())]
    pub description: String,
    pub children: Element,
}

/// A bordered card with title, description and arbitrary content.
#[component]
pub fn SectionCard(props: SectionCardProps) -> Element {
    rsx! {
        section {
            style: "background: #FFFFFF; border: 1px solid #E0E0E0; border-radius: 10px; padding: 20px;",
            h2 {
                style: "margin: 0 0 4px 0; font-size: 17px; font-weight: 600;",
                "{props.title}"
            }
            if !props.description.is_empty() {
                p {
                    style: "margin: 0 0 16px 0; font-size: 13px; color: #757575;",
                    "{props.description}"
                }
            }
            {props.children}
        }
    }
}
