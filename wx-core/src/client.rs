//! HTTP client for the statistics service.
//!
//! Two endpoints are involved:
//! - `GET /get_weather_stats?lat&lon&activity&month&day` returns a
//!   [`StatsResult`](crate::stats::StatsResult) or a falsy JSON value
//! - `GET /download?lat&lon` serves the raw dataset as CSV; the client only
//!   ever builds the link

use crate::error::FetchError;
use crate::selection::{GeoPoint, Selection};
use crate::stats::{interpret_body, StatsOutcome};
use log::{info, warn};
use std::future::Future;

/// Development address of the statistics service.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";
pub const STATS_PATH: &str = "/get_weather_stats";
pub const DOWNLOAD_PATH: &str = "/download";

#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Origin both endpoints are resolved against, without trailing slash
    pub base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Link to the CSV export for a location.
    pub fn download_url(&self, point: GeoPoint) -> String {
        format!(
            "{}?lat={}&lon={}",
            self.endpoint(DOWNLOAD_PATH),
            point.lat,
            point.lon
        )
    }
}

/// Query parameters for one stats request.
///
/// Values are taken from the selection as-is. Missing activity, month or day
/// go out as empty values and the service decides what to make of them.
#[derive(Debug, Clone, PartialEq)]
pub struct StatsQuery {
    pub lat: f64,
    pub lon: f64,
    pub activity: String,
    pub month: String,
    pub day: String,
}

impl StatsQuery {
    pub fn new(selection: &Selection, point: GeoPoint) -> Self {
        Self {
            lat: point.lat,
            lon: point.lon,
            activity: selection.activity.clone().unwrap_or_default(),
            month: selection.month.clone().unwrap_or_default(),
            day: selection.day.clone().unwrap_or_default(),
        }
    }

    pub fn params(&self) -> [(&'static str, String); 5] {
        [
            ("lat", self.lat.to_string()),
            ("lon", self.lon.to_string()),
            ("activity", self.activity.clone()),
            ("month", self.month.clone()),
            ("day", self.day.clone()),
        ]
    }

    pub fn url(&self, config: &ClientConfig) -> Result<String, FetchError> {
        reqwest::Url::parse_with_params(&config.endpoint(STATS_PATH), self.params())
            .map(String::from)
            .map_err(|e| FetchError::Transport(format!("invalid stats URL: {}", e)))
    }
}

/// Anything that can GET a URL and hand back the body text.
pub trait StatsTransport {
    fn get_text(&self, url: &str) -> impl Future<Output = Result<String, FetchError>>;
}

impl StatsTransport for reqwest::Client {
    async fn get_text(&self, url: &str) -> Result<String, FetchError> {
        let response = self.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            // The body still decides the outcome; an error page fails to parse.
            warn!("Stats service answered {} for {}", status, url);
        }
        Ok(response.text().await?)
    }
}

/// Issue one stats request and interpret the reply.
///
/// Each call is independent: nothing is cancelled or de-duplicated, so
/// overlapping calls complete in whatever order the network delivers them.
pub async fn fetch_stats<T: StatsTransport>(
    transport: &T,
    config: &ClientConfig,
    query: &StatsQuery,
) -> Result<StatsOutcome, FetchError> {
    let url = query.url(config)?;
    info!("Requesting stats: {}", url);
    let body = transport.get_text(&url).await?;
    let outcome = interpret_body(&body)?;
    if outcome == StatsOutcome::NoData {
        warn!("No stats available at ({}, {})", query.lat, query.lon);
    }
    Ok(outcome)
}

/// A `reqwest` client bundled with its configuration.
#[derive(Debug, Clone, Default)]
pub struct StatsClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl StatsClient {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn http(&self) -> &reqwest::Client {
        &self.http
    }

    pub async fn fetch(&self, query: &StatsQuery) -> Result<StatsOutcome, FetchError> {
        fetch_stats(&self.http, &self.config, query).await
    }
}
