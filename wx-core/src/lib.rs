//! Core of the climate probability wizard.
//!
//! Everything here is platform-neutral so it runs the same under WASM and in
//! native tests:
//! - `selection` / `wizard`: the step state machine and the choices it accumulates
//! - `client` / `stats`: the statistics service request and its typed response
//! - `dashboard` / `trend`: pure view model and the chart instance lifecycle
//! - `geo`: the map capability the location step consumes
//! - `pipeline`: glue from a picked location to a rendered dashboard

pub mod activity;
pub mod client;
pub mod dashboard;
pub mod error;
pub mod geo;
pub mod pipeline;
pub mod selection;
pub mod stats;
pub mod trend;
pub mod wizard;
