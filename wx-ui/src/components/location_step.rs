//! Step 3: pick a location on the map and read the dashboard.

use super::DashboardPanel;
use crate::js_bridge::MAP_CONTAINER_ID;
use crate::state::AppState;
use dioxus::prelude::*;
use wx_core::wizard::{Concern, PanelId, Step, WizardAction};

const PANEL: PanelId = PanelId::new(Step::Location, Concern::Location);

/// The map container is always in the DOM so Leaflet can attach to it the
/// first time this step is entered.
#[component]
pub fn LocationStep() -> Element {
    let mut state = use_context::<AppState>();
    let class = state.panel_class(PANEL);

    rsx! {
        div {
            id: "{PANEL.dom_id()}",
            class: "{class}",
            h2 { "Where?" }
            p {
                class: "step-hint",
                "Click anywhere on the map, or search for a place."
            }
            div { id: MAP_CONTAINER_ID, class: "map" }
            button {
                id: "location-back-btn",
                onclick: move |_| state.dispatch(WizardAction::LocationBack),
                "Back"
            }
            DashboardPanel {}
        }
    }
}
