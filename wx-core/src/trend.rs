//! Trend chart for the year -> hot-day probability series.
//!
//! The chart instance lives in the browser; Rust holds a [`ChartHandle`] to
//! it. The handle is not `Clone`, and [`render_trend`] consumes the previous
//! one before creating the next, so at most one chart is alive at a time.

use log::debug;
use serde_json::{json, Value};
use std::collections::HashMap;

/// DOM id of the chart canvas inside the dashboard's trend section.
pub const TREND_CANVAS_ID: &str = "trend-chart";
pub const SERIES_LABEL: &str = "Probability of Hot Day (%)";
const LINE_COLOR: &str = "rgba(230, 57, 149, 1)";
const FILL_COLOR: &str = "rgba(230, 57, 149, 0.2)";
const TICK_COLOR: &str = "#c9d1d9";
const GRID_COLOR: &str = "#30363d";

/// Years in ascending numeric order with their probabilities.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendSeries {
    pub years: Vec<i32>,
    pub probabilities: Vec<f64>,
}

impl TrendSeries {
    pub fn from_mapping(mapping: &HashMap<i32, f64>) -> Self {
        let mut years: Vec<i32> = mapping.keys().copied().collect();
        years.sort_unstable();
        let probabilities = years.iter().map(|year| mapping[year]).collect();
        Self {
            years,
            probabilities,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }

    pub fn points(&self) -> impl Iterator<Item = (i32, f64)> + '_ {
        self.years.iter().copied().zip(self.probabilities.iter().copied())
    }
}

/// Chart.js configuration for a series: single line, legend hidden,
/// y axis fixed to 0..100 percent.
pub fn chart_config(series: &TrendSeries) -> Value {
    json!({
        "type": "line",
        "data": {
            "labels": series.years,
            "datasets": [{
                "label": SERIES_LABEL,
                "data": series.probabilities,
                "borderColor": LINE_COLOR,
                "backgroundColor": FILL_COLOR,
                "fill": true,
                "tension": 0.4,
            }],
        },
        "options": {
            "plugins": { "legend": { "display": false } },
            "scales": {
                "y": {
                    "beginAtZero": true,
                    "min": 0,
                    "max": 100,
                    "ticks": { "color": TICK_COLOR },
                    "grid": { "color": GRID_COLOR },
                },
                "x": {
                    "ticks": { "color": TICK_COLOR },
                    "grid": { "color": GRID_COLOR },
                },
            },
        },
    })
}

/// A live chart instance.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct ChartHandle(u32);

impl ChartHandle {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn id(&self) -> u32 {
        self.0
    }
}

/// The charting capability.
pub trait ChartSurface {
    /// Whether the canvas with this id is currently on the page.
    fn has_target(&self, canvas_id: &str) -> bool;
    fn create(&mut self, canvas_id: &str, config: &Value) -> Option<ChartHandle>;
    fn destroy(&mut self, handle: ChartHandle);
}

/// Replace the trend chart.
///
/// The previous chart is destroyed first. If the canvas is not on the page
/// yet, nothing is drawn and `None` is returned.
pub fn render_trend<S: ChartSurface>(
    surface: &mut S,
    previous: Option<ChartHandle>,
    mapping: &HashMap<i32, f64>,
) -> Option<ChartHandle> {
    if let Some(handle) = previous {
        surface.destroy(handle);
    }
    if !surface.has_target(TREND_CANVAS_ID) {
        debug!("No #{} canvas on the page, skipping trend chart", TREND_CANVAS_ID);
        return None;
    }
    let series = TrendSeries::from_mapping(mapping);
    surface.create(TREND_CANVAS_ID, &chart_config(&series))
}
