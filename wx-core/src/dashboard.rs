//! Dashboard view model.
//!
//! [`render`] is a pure function from a stats result to what the dashboard
//! shows. Sections for absent optional fields are left out entirely.

use crate::activity::capitalize_first;
use crate::client::{ClientConfig, StatsQuery};
use crate::error::FetchError;
use crate::selection::GeoPoint;
use crate::stats::{StatsOutcome, StatsResult};
use log::warn;
use std::collections::HashMap;
use wx_utils::dates::target_date_label;

/// DOM id of the container whose content is replaced on every render.
pub const DASHBOARD_ID: &str = "dashboard";

pub const LOADING_TITLE: &str = "Analyzing 30 Years of NASA Data...";
pub const TELEMETRY_ERROR_TITLE: &str = "Telemetry Error";
pub const TELEMETRY_ERROR_DETAIL: &str =
    "Could not retrieve data for this location. Please try another spot.";
pub const CONNECTION_LOST_TITLE: &str = "Connection Lost";
pub const SUGGESTION_TITLE: &str = "A Better Idea?";
pub const COMFORT_TITLE: &str = "Comfort Index";
pub const TREND_TITLE: &str = "Climate Trend: Chance of Hot Day";
pub const DOWNLOAD_LABEL: &str = "Download Full Dataset (CSV)";

/// The three thresholded quantities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    Temperature,
    Precipitation,
    Wind,
}

impl Metric {
    pub const ALL: [Metric; 3] = [Metric::Temperature, Metric::Precipitation, Metric::Wind];

    pub fn title(self) -> &'static str {
        match self {
            Metric::Temperature => "Chance of Hot Day (>30°C)",
            Metric::Precipitation => "Chance of Rainy Day (>1mm)",
            Metric::Wind => "Chance of Windy Day (>25km/h)",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Metric::Temperature => "fas fa-temperature-high temp",
            Metric::Precipitation => "fas fa-cloud-showers-heavy precip",
            Metric::Wind => "fas fa-wind wind",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecommendationBlock {
    /// "Climate Report for Hiking"
    pub title: String,
    /// Target date label, e.g. "July 15"
    pub subtitle: Option<String>,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProbabilityCard {
    pub metric: Metric,
    /// Formatted percentage, e.g. "63.5%"
    pub value: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub recommendation: RecommendationBlock,
    pub suggestion: Option<String>,
    /// "85/100 (Comfortable)"
    pub comfort: Option<String>,
    pub cards: [ProbabilityCard; 3],
    /// Raw year -> probability mapping; present iff the trend section is shown
    pub trend: Option<HashMap<i32, f64>>,
    pub download_url: String,
}

/// One decimal place and a percent sign: 63.456 -> "63.5%".
///
/// Rounding is done on the exact binary value, with ties going away from
/// zero. The only exact ties are multiples of 0.25 with an odd quarter
/// count (x.25, x.75); `{:.1}` alone would round those half-to-even.
pub fn format_probability(value: f64) -> String {
    let quarters = value * 4.0;
    if quarters.fract() == 0.0 && quarters % 2.0 != 0.0 {
        // value * 10 is exact here, so `round` sees the true tie
        return format!("{:.1}%", (value * 10.0).round() / 10.0);
    }
    format!("{:.1}%", value)
}

pub fn render(result: &StatsResult, query: &StatsQuery, config: &ClientConfig) -> DashboardView {
    let probabilities = &result.probabilities;
    let card = |metric: Metric, value: f64| ProbabilityCard {
        metric,
        value: format_probability(value),
    };
    DashboardView {
        recommendation: RecommendationBlock {
            title: format!("Climate Report for {}", capitalize_first(&query.activity)),
            subtitle: result
                .date_str
                .clone()
                .filter(|s| !s.is_empty())
                .or_else(|| target_date_label(&query.month, &query.day)),
            text: result.recommendation.clone(),
        },
        suggestion: result.suggestion_text().map(str::to_string),
        comfort: result
            .comfort_index
            .as_ref()
            .map(|c| format!("{} ({})", c.score, c.label)),
        cards: [
            card(Metric::Temperature, probabilities.temperature),
            card(Metric::Precipitation, probabilities.precipitation),
            card(Metric::Wind, probabilities.wind),
        ],
        trend: result.trend_data.clone(),
        download_url: config.download_url(GeoPoint::new(query.lat, query.lon)),
    }
}

/// Everything the dashboard region can show.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum DashboardState {
    /// Nothing picked yet
    #[default]
    Idle,
    Loading,
    Ready(Box<DashboardView>),
    /// The service had no data for the location
    NoData,
    /// The request failed or the reply was unreadable
    ConnectionLost,
}

impl DashboardState {
    pub fn from_result(
        result: Result<StatsOutcome, FetchError>,
        query: &StatsQuery,
        config: &ClientConfig,
    ) -> Self {
        match result {
            Ok(StatsOutcome::Loaded(stats)) => {
                DashboardState::Ready(Box::new(render(&stats, query, config)))
            }
            Ok(StatsOutcome::NoData) => DashboardState::NoData,
            Err(e) => {
                warn!("Fetch error: {}", e);
                DashboardState::ConnectionLost
            }
        }
    }

    /// Trend data to hand to the chart after this state is on the page.
    pub fn trend(&self) -> Option<&HashMap<i32, f64>> {
        match self {
            DashboardState::Ready(view) => view.trend.as_ref(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::Selection;
    use crate::stats::{ComfortIndex, ComfortScore, Probabilities};

    fn query() -> StatsQuery {
        let selection = Selection::default().with_activity("hiking").with_date("7", "15");
        StatsQuery::new(&selection, GeoPoint::new(23.8103, 90.4125))
    }

    fn minimal_result() -> StatsResult {
        StatsResult {
            recommendation: "Looks like a great window for a hike!".to_string(),
            suggestion: None,
            comfort_index: None,
            probabilities: Probabilities {
                temperature: 63.456,
                precipitation: 0.0,
                wind: 99.96,
            },
            trend_data: None,
            date_str: None,
        }
    }

    #[test]
    fn test_format_probability() {
        assert_eq!(format_probability(63.456), "63.5%");
        assert_eq!(format_probability(0.0), "0.0%");
        assert_eq!(format_probability(100.0), "100.0%");
        assert_eq!(format_probability(12.04), "12.0%");
    }

    #[test]
    fn test_format_probability_ties_round_up() {
        let values = [0.25, 12.25, 0.75, 2.5, 99.75].map(format_probability);
        assert_eq!(values, ["0.3%", "12.3%", "0.8%", "2.5%", "99.8%"]);
        assert_eq!(format_probability(-0.25), "-0.3%");
        // Stored as 1.4499..., so not a tie
        assert_eq!(format_probability(1.45), "1.4%");
        assert_eq!(format_probability(0.05), "0.1%");
    }

    #[test]
    fn test_minimal_result_has_only_required_sections() {
        let view = render(&minimal_result(), &query(), &ClientConfig::default());
        assert_eq!(view.recommendation.title, "Climate Report for Hiking");
        assert_eq!(view.recommendation.text, "Looks like a great window for a hike!");
        assert!(view.suggestion.is_none());
        assert!(view.comfort.is_none());
        assert!(view.trend.is_none());
        let values: Vec<&str> = view.cards.iter().map(|c| c.value.as_str()).collect();
        assert_eq!(values, ["63.5%", "0.0%", "100.0%"]);
        let metrics: Vec<Metric> = view.cards.iter().map(|c| c.metric).collect();
        assert_eq!(metrics, Metric::ALL);
        assert_eq!(
            view.download_url,
            "http://127.0.0.1:5000/download?lat=23.8103&lon=90.4125"
        );
    }

    #[test]
    fn test_optional_sections() {
        let result = StatsResult {
            suggestion: Some("Try October instead.".to_string()),
            comfort_index: Some(ComfortIndex {
                score: ComfortScore::Text("85/100".to_string()),
                label: "Comfortable".to_string(),
            }),
            trend_data: Some([(2019, 7.0), (2018, 5.0)].into_iter().collect()),
            ..minimal_result()
        };
        let view = render(&result, &query(), &ClientConfig::default());
        assert_eq!(view.suggestion.as_deref(), Some("Try October instead."));
        assert_eq!(view.comfort.as_deref(), Some("85/100 (Comfortable)"));
        assert_eq!(view.trend.as_ref().map(HashMap::len), Some(2));
    }

    #[test]
    fn test_subtitle_prefers_service_label() {
        let result = StatsResult {
            date_str: Some("July 15".to_string()),
            ..minimal_result()
        };
        let view = render(&result, &query(), &ClientConfig::default());
        assert_eq!(view.recommendation.subtitle.as_deref(), Some("July 15"));

        let view = render(&minimal_result(), &query(), &ClientConfig::default());
        assert_eq!(view.recommendation.subtitle.as_deref(), Some("July 15"));
    }

    #[test]
    fn test_missing_activity_does_not_fail() {
        let incomplete = StatsQuery::new(&Selection::default(), GeoPoint::new(1.0, 2.0));
        let view = render(&minimal_result(), &incomplete, &ClientConfig::default());
        assert_eq!(view.recommendation.title, "Climate Report for ");
        assert!(view.recommendation.subtitle.is_none());
    }

    #[test]
    fn test_state_from_result() {
        let config = ClientConfig::default();
        let loaded = DashboardState::from_result(
            Ok(StatsOutcome::Loaded(Box::new(minimal_result()))),
            &query(),
            &config,
        );
        assert!(matches!(loaded, DashboardState::Ready(_)));
        assert!(loaded.trend().is_none());

        let no_data = DashboardState::from_result(Ok(StatsOutcome::NoData), &query(), &config);
        assert_eq!(no_data, DashboardState::NoData);

        let lost = DashboardState::from_result(
            Err(FetchError::Parse("expected value".to_string())),
            &query(),
            &config,
        );
        assert_eq!(lost, DashboardState::ConnectionLost);
    }

    #[test]
    fn test_failure_messages_are_distinct() {
        assert_ne!(TELEMETRY_ERROR_TITLE, CONNECTION_LOST_TITLE);
    }
}
