//! Small card with an icon, a title and a value.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct StatCardProps {
    /// Font Awesome classes for the icon
    pub icon: String,
    pub title: String,
    pub value: String,
}

#[component]
pub fn StatCard(props: StatCardProps) -> Element {
    rsx! {
        div {
            class: "stat-card",
            i { class: "{props.icon}" }
            div {
                class: "stat-card-info",
                h3 { "{props.title}" }
                p { "{props.value}" }
            }
        }
    }
}
