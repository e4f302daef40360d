//! Step 2: pick a month and day.

use crate::state::AppState;
use dioxus::prelude::*;
use wx_core::wizard::{Concern, PanelId, Step, WizardAction};
use wx_utils::dates::{days_in_month, month_options};

const PANEL: PanelId = PanelId::new(Step::Date, Concern::Date);

#[component]
pub fn DateStep() -> Element {
    let mut state = use_context::<AppState>();
    let mut month = use_signal(|| "1".to_string());
    let mut day = use_signal(|| "1".to_string());
    let class = state.panel_class(PANEL);
    let max_day = month()
        .parse::<u32>()
        .ok()
        .and_then(days_in_month)
        .unwrap_or(31);

    let on_month_change = move |evt: Event<FormData>| {
        month.set(evt.value());
    };

    let on_day_input = move |evt: Event<FormData>| {
        day.set(evt.value());
    };

    rsx! {
        div {
            id: "{PANEL.dom_id()}",
            class: "{class}",
            h2 { "When are you going?" }
            div {
                class: "date-inputs",
                label {
                    r#for: "month-select",
                    "Month: "
                }
                select {
                    id: "month-select",
                    onchange: on_month_change,
                    for (value, name) in month_options() {
                        option {
                            key: "{value}",
                            value: "{value}",
                            selected: value == month(),
                            "{name}"
                        }
                    }
                }
                label {
                    r#for: "day-input",
                    "Day: "
                }
                input {
                    id: "day-input",
                    r#type: "number",
                    min: "1",
                    max: "{max_day}",
                    value: "{day}",
                    oninput: on_day_input,
                }
            }
            div {
                class: "wizard-nav",
                button {
                    id: "date-back-btn",
                    onclick: move |_| state.dispatch(WizardAction::DateBack),
                    "Back"
                }
                button {
                    id: "date-next-btn",
                    onclick: move |_| {
                        state.dispatch(WizardAction::DateNext {
                            month: month(),
                            day: day(),
                        });
                    },
                    "Next"
                }
            }
        }
    }
}
