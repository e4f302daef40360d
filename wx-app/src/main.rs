//! Climate probability wizard.
//!
//! Walks the user through activity, date and location, then shows the odds
//! of hot, rainy and windy days there, with a trend chart when the
//! statistics service provides one.
//!
//! Data flow:
//! 1. Step buttons dispatch `WizardAction`s; entering the location step the
//!    first time initializes the Leaflet map.
//! 2. Map clicks and search results arrive from JS as `LocationEvent`s on a
//!    coroutine, which shows the loading view and spawns the stats request.
//! 3. Each completed request replaces the dashboard; an effect then redraws
//!    the trend chart once the new markup is on the page.

use dioxus::prelude::*;
use futures::StreamExt;
use log::info;
use wx_core::client::ClientConfig;
use wx_core::geo::LocationEvent;
use wx_ui::components::{ActivityStep, DateStep, LocationStep};
use wx_ui::js_bridge;
use wx_ui::state::AppState;

const LEAFLET_CSS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.css";
const LEAFLET_JS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.js";
const GEOSEARCH_CSS: &str = "https://unpkg.com/leaflet-geosearch@3.11.0/dist/geosearch.css";
const GEOSEARCH_JS: &str = "https://unpkg.com/leaflet-geosearch@3.11.0/dist/bundle.min.js";
const CHART_JS: &str = "https://cdn.jsdelivr.net/npm/chart.js@4.4.1/dist/chart.umd.min.js";
const FONT_AWESOME_CSS: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.1/css/all.min.css";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("wx-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(|| {
        let config = js_bridge::page_origin()
            .map(ClientConfig::new)
            .unwrap_or_default();
        info!("Using stats service at {}", config.base_url);
        AppState::new(config)
    });

    // ─── Location picks from the map ───
    // Each pick starts its own request; nothing waits for the previous one.
    let picks = use_coroutine(move |mut rx: UnboundedReceiver<LocationEvent>| async move {
        while let Some(event) = rx.next().await {
            state.pick_location(event);
        }
    });
    use_hook(move || js_bridge::register_location_handler(move |event| picks.send(event)));

    // ─── Trend chart ───
    // Re-runs whenever the dashboard changes, after the new markup is committed.
    use_effect(move || state.refresh_trend_chart());

    rsx! {
        document::Stylesheet { href: LEAFLET_CSS }
        document::Stylesheet { href: GEOSEARCH_CSS }
        document::Stylesheet { href: FONT_AWESOME_CSS }
        document::Script { src: LEAFLET_JS }
        document::Script { src: GEOSEARCH_JS }
        document::Script { src: CHART_JS }

        div {
            class: "wizard",
            h1 {
                i { class: "fas fa-globe-americas" }
                " Climate Odds Planner"
            }
            ActivityStep {}
            DateStep {}
            LocationStep {}
        }
    }
}
