//! Loading placeholder shown while stats are being fetched.

use dioxus::prelude::*;
use wx_core::dashboard::LOADING_TITLE;

#[component]
pub fn LoadingSpinner() -> Element {
    rsx! {
        h2 {
            i { class: "fas fa-satellite-dish" }
            " {LOADING_TITLE}"
        }
        div { class: "loader" }
    }
}
