//! Step 1: choose an activity.

use crate::state::AppState;
use dioxus::prelude::*;
use wx_core::activity::ACTIVITIES;
use wx_core::wizard::{Concern, PanelId, Step, WizardAction};

const PANEL: PanelId = PanelId::new(Step::Activity, Concern::Activity);

#[component]
pub fn ActivityStep() -> Element {
    let mut state = use_context::<AppState>();
    let class = state.panel_class(PANEL);

    rsx! {
        div {
            id: "{PANEL.dom_id()}",
            class: "{class}",
            h2 { "What are you planning?" }
            div {
                class: "activity-grid",
                for activity in ACTIVITIES.iter() {
                    button {
                        key: "{activity.slug}",
                        class: "activity-btn",
                        "data-activity": activity.slug,
                        onclick: move |_| {
                            state.dispatch(WizardAction::ChooseActivity(activity.slug.to_string()));
                        },
                        i { class: "{activity.icon}" }
                        " {activity.label}"
                    }
                }
            }
        }
    }
}
