//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`
//! and change it only through [`AppState::dispatch`] and [`AppState::pick_location`].

use crate::js_bridge::{JsChartSurface, LeafletMap};
use dioxus::prelude::*;
use wx_core::client::{ClientConfig, StatsClient};
use wx_core::dashboard::DashboardState;
use wx_core::geo::LocationEvent;
use wx_core::pipeline::{begin_fetch, complete_fetch};
use wx_core::trend::{render_trend, ChartHandle};
use wx_core::wizard::{PanelId, Wizard, WizardAction};

#[derive(Clone, Copy)]
pub struct AppState {
    /// Current step and the choices made so far
    pub wizard: Signal<Wizard>,
    /// What the dashboard region shows
    pub dashboard: Signal<DashboardState>,
    /// The live trend chart, if any
    pub chart: Signal<Option<ChartHandle>>,
    pub client: Signal<StatsClient>,
}

impl AppState {
    /// Fresh session on the activity step.
    pub fn new(config: ClientConfig) -> Self {
        Self {
            wizard: Signal::new(Wizard::start()),
            dashboard: Signal::new(DashboardState::Idle),
            chart: Signal::new(None),
            client: Signal::new(StatsClient::new(config)),
        }
    }

    /// CSS class for a wizard panel.
    pub fn panel_class(&self, panel: PanelId) -> &'static str {
        if self.wizard.read().is_active(panel) {
            "wizard-step active"
        } else {
            "wizard-step"
        }
    }

    /// Apply a wizard action, initializing the map if the transition asks for it.
    pub fn dispatch(&mut self, action: WizardAction) {
        let next = self.wizard.read().apply_with(&mut LeafletMap, action);
        self.wizard.set(next);
    }

    /// Record a picked location, show the loading view, and fetch stats in
    /// the background. Overlapping fetches are not cancelled.
    pub fn pick_location(&mut self, event: LocationEvent) {
        let pending = begin_fetch(&self.wizard.read(), event);
        self.wizard.set(pending.wizard.clone());
        self.dashboard.set(pending.placeholder.clone());

        let client = self.client.read().clone();
        let mut dashboard = self.dashboard;
        spawn(async move {
            let state = complete_fetch(client.http(), client.config(), &pending).await;
            dashboard.set(state);
        });
    }

    /// Redraw the trend chart for the current dashboard, if it has one.
    /// Must run after the dashboard markup is on the page.
    pub fn refresh_trend_chart(&mut self) {
        let Some(trend) = self.dashboard.read().trend().cloned() else {
            return;
        };
        let previous = self.chart.write().take();
        let next = render_trend(&mut JsChartSurface, previous, &trend);
        self.chart.set(next);
    }
}
