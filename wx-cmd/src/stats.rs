//! The `stats`, `download-url` and `activities` subcommands.

use crate::report::render_text;
use log::info;
use wx_core::activity::ACTIVITIES;
use wx_core::client::{ClientConfig, StatsClient};
use wx_core::geo::LocationEvent;
use wx_core::pipeline::{begin_fetch, complete_fetch};
use wx_core::selection::GeoPoint;
use wx_core::wizard::{Step, Wizard, WizardAction};

/// What the user would have entered on the first two steps.
#[derive(Debug, Clone, Default)]
pub struct Choices {
    pub activity: Option<String>,
    pub month: Option<String>,
    pub day: Option<String>,
}

/// Walk the wizard up to the location step. Omitted choices are submitted
/// empty, like an untouched input in the browser.
pub fn walk_wizard(choices: Choices) -> Wizard {
    let actions = [
        WizardAction::ChooseActivity(choices.activity.unwrap_or_default()),
        WizardAction::DateNext {
            month: choices.month.unwrap_or_default(),
            day: choices.day.unwrap_or_default(),
        },
    ];
    actions
        .into_iter()
        .fold(Wizard::start(), |wizard, action| wizard.apply(action).wizard)
}

pub async fn run_stats(
    choices: Choices,
    lat: f64,
    lon: f64,
    base_url: &str,
) -> anyhow::Result<()> {
    let client = StatsClient::new(ClientConfig::new(base_url));
    let wizard = walk_wizard(choices);
    debug_assert_eq!(wizard.step(), Step::Location);

    let pending = begin_fetch(&wizard, LocationEvent::Click(GeoPoint::new(lat, lon)));
    eprintln!("{}", render_text(&pending.placeholder));

    let state = complete_fetch(client.http(), client.config(), &pending).await;
    info!("Dashboard ready for ({}, {})", lat, lon);
    println!("{}", render_text(&state));
    Ok(())
}

pub fn run_download_url(lat: f64, lon: f64, base_url: &str) {
    let config = ClientConfig::new(base_url);
    println!("{}", config.download_url(GeoPoint::new(lat, lon)));
}

pub fn run_activities() {
    for activity in ACTIVITIES.iter() {
        println!("{:<12} {}", activity.slug, activity.label);
    }
}
