//! Error display component.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub title: String,
    /// Optional second line under the title
    #[props(default)]
    pub detail: Option<String>,
}

/// Displays a failure message in place of the dashboard.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    rsx! {
        h2 {
            i { class: "fas fa-exclamation-triangle" }
            " {props.title}"
        }
        if let Some(detail) = props.detail.as_ref() {
            p { "{detail}" }
        }
    }
}
