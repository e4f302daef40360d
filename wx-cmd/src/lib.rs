//! Command implementations for the WX CLI.
//!
//! Drives the same wizard and fetch pipeline as the web app, printing the
//! dashboard as text instead of rendering it.

use clap::Subcommand;
use wx_core::client::DEFAULT_BASE_URL;

pub mod report;
pub mod stats;

#[derive(Subcommand)]
pub enum Command {
    /// Run the wizard for one location and print the climate dashboard
    Stats {
        /// Activity slug (see `activities`); sent empty if omitted
        #[arg(short = 'a', long)]
        activity: Option<String>,

        /// Month, 1-12; sent empty if omitted
        #[arg(short = 'm', long)]
        month: Option<String>,

        /// Day of month; sent empty if omitted
        #[arg(short = 'd', long)]
        day: Option<String>,

        /// Latitude in degrees
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,

        /// Longitude in degrees
        #[arg(long, allow_negative_numbers = true)]
        lon: f64,

        /// Origin of the statistics service
        #[arg(long, default_value = DEFAULT_BASE_URL)]
        base_url: String,
    },

    /// Print the CSV download link for a location
    DownloadUrl {
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,

        #[arg(long, allow_negative_numbers = true)]
        lon: f64,

        /// Origin of the statistics service
        #[arg(long, default_value = DEFAULT_BASE_URL)]
        base_url: String,
    },

    /// List the activities the wizard offers
    Activities,
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Stats {
            activity,
            month,
            day,
            lat,
            lon,
            base_url,
        } => {
            let choices = stats::Choices {
                activity,
                month,
                day,
            };
            stats::run_stats(choices, lat, lon, &base_url).await
        }
        Command::DownloadUrl { lat, lon, base_url } => {
            stats::run_download_url(lat, lon, &base_url);
            Ok(())
        }
        Command::Activities => {
            stats::run_activities();
            Ok(())
        }
    }
}
