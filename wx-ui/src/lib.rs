//! Dioxus components and JS bridge for the climate probability wizard.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for Leaflet and Chart.js via `js_sys::eval()`
//! - `state`: `AppState` with Dioxus Signals, and the actions that drive it
//! - `components`: the three wizard panels and the dashboard

pub mod components;
pub mod js_bridge;
pub mod state;
