//! Reusable Dioxus RSX components for the climate wizard.

mod activity_step;
mod chart_container;
mod dashboard_panel;
mod date_step;
mod error_display;
mod loading_spinner;
mod location_step;
mod stat_card;

pub use activity_step::ActivityStep;
pub use chart_container::TrendChartCard;
pub use dashboard_panel::{DashboardContent, DashboardPanel};
pub use date_step::DateStep;
pub use error_display::ErrorDisplay;
pub use loading_spinner::LoadingSpinner;
pub use location_step::LocationStep;
pub use stat_card::StatCard;
