//! Trend chart section of the dashboard.

use dioxus::prelude::*;
use wx_core::dashboard::TREND_TITLE;
use wx_core::trend::TREND_CANVAS_ID;

/// Card holding the canvas Chart.js draws the trend into. The chart itself
/// is created after render, see `AppState::refresh_trend_chart`.
#[component]
pub fn TrendChartCard() -> Element {
    rsx! {
        div {
            class: "chart-card",
            h3 { "{TREND_TITLE}" }
            canvas { id: TREND_CANVAS_ID }
        }
    }
}
