//! The dashboard region under the map.

use super::{ErrorDisplay, LoadingSpinner, StatCard, TrendChartCard};
use crate::state::AppState;
use dioxus::prelude::*;
use wx_core::dashboard::{
    DashboardState, DashboardView, COMFORT_TITLE, CONNECTION_LOST_TITLE, DASHBOARD_ID,
    DOWNLOAD_LABEL, SUGGESTION_TITLE, TELEMETRY_ERROR_DETAIL, TELEMETRY_ERROR_TITLE,
};

/// Renders whatever the current `DashboardState` is. The whole content is
/// replaced on every state change.
#[component]
pub fn DashboardPanel() -> Element {
    let state = use_context::<AppState>();
    let dashboard = state.dashboard.read().clone();

    let body = match dashboard {
        DashboardState::Idle => rsx! {
            p { class: "dashboard-hint", "Click the map or search for a place to see its climate odds." }
        },
        DashboardState::Loading => rsx! { LoadingSpinner {} },
        DashboardState::NoData => rsx! {
            ErrorDisplay {
                title: TELEMETRY_ERROR_TITLE.to_string(),
                detail: TELEMETRY_ERROR_DETAIL.to_string(),
            }
        },
        DashboardState::ConnectionLost => rsx! {
            ErrorDisplay { title: CONNECTION_LOST_TITLE.to_string() }
        },
        DashboardState::Ready(view) => rsx! { DashboardContent { view: *view } },
    };

    rsx! {
        div {
            id: DASHBOARD_ID,
            class: "dashboard",
            {body}
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct DashboardContentProps {
    pub view: DashboardView,
}

/// A loaded stats result. Optional sections are omitted, not left empty.
#[component]
pub fn DashboardContent(props: DashboardContentProps) -> Element {
    let view = &props.view;
    let recommendation = &view.recommendation;

    rsx! {
        div {
            class: "recommendation-card",
            h3 { "{recommendation.title}" }
            if let Some(subtitle) = recommendation.subtitle.as_ref() {
                p { class: "report-date", "{subtitle}" }
            }
            p { "{recommendation.text}" }
        }

        if let Some(suggestion) = view.suggestion.as_ref() {
            div {
                class: "suggestion-card",
                h3 {
                    i { class: "fas fa-lightbulb" }
                    " {SUGGESTION_TITLE}"
                }
                p { "{suggestion}" }
            }
        }

        if let Some(comfort) = view.comfort.as_ref() {
            StatCard {
                icon: "fas fa-smile-beam comfort".to_string(),
                title: COMFORT_TITLE.to_string(),
                value: comfort.clone(),
            }
        }

        for card in view.cards.iter() {
            StatCard {
                key: "{card.metric.title()}",
                icon: card.metric.icon().to_string(),
                title: card.metric.title().to_string(),
                value: card.value.clone(),
            }
        }

        if view.trend.is_some() {
            TrendChartCard {}
        }

        a {
            href: "{view.download_url}",
            class: "download-btn",
            i { class: "fas fa-download" }
            " {DOWNLOAD_LABEL}"
        }
    }
}
