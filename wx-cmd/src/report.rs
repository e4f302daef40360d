//! Plain-text rendering of a dashboard state.

use wx_core::dashboard::{
    format_probability, DashboardState, DashboardView, COMFORT_TITLE, CONNECTION_LOST_TITLE,
    DOWNLOAD_LABEL, LOADING_TITLE, SUGGESTION_TITLE, TELEMETRY_ERROR_DETAIL, TELEMETRY_ERROR_TITLE,
    TREND_TITLE,
};
use wx_core::trend::TrendSeries;

pub fn render_text(state: &DashboardState) -> String {
    match state {
        DashboardState::Idle => String::new(),
        DashboardState::Loading => LOADING_TITLE.to_string(),
        DashboardState::NoData => format!("{}\n{}", TELEMETRY_ERROR_TITLE, TELEMETRY_ERROR_DETAIL),
        DashboardState::ConnectionLost => CONNECTION_LOST_TITLE.to_string(),
        DashboardState::Ready(view) => render_view(view),
    }
}

fn render_view(view: &DashboardView) -> String {
    let mut lines = vec![view.recommendation.title.clone()];
    if let Some(subtitle) = &view.recommendation.subtitle {
        lines.push(subtitle.clone());
    }
    lines.push(view.recommendation.text.clone());
    lines.push(String::new());

    if let Some(suggestion) = &view.suggestion {
        lines.push(format!("{} {}", SUGGESTION_TITLE, suggestion));
    }
    if let Some(comfort) = &view.comfort {
        lines.push(format!("{}: {}", COMFORT_TITLE, comfort));
    }
    for card in &view.cards {
        lines.push(format!("{}: {}", card.metric.title(), card.value));
    }

    if let Some(trend) = &view.trend {
        lines.push(String::new());
        lines.push(TREND_TITLE.to_string());
        for (year, probability) in TrendSeries::from_mapping(trend).points() {
            lines.push(format!("  {}  {:>6}", year, format_probability(probability)));
        }
    }

    lines.push(String::new());
    lines.push(format!("{}: {}", DOWNLOAD_LABEL, view.download_url));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use wx_core::client::{ClientConfig, StatsQuery};
    use wx_core::dashboard::render;
    use wx_core::selection::{GeoPoint, Selection};
    use wx_core::stats::StatsResult;

    fn ready(body: &str) -> DashboardState {
        let result: StatsResult = serde_json::from_str(body).unwrap();
        let selection = Selection::default().with_activity("picnic").with_date("4", "9");
        let query = StatsQuery::new(&selection, GeoPoint::new(48.85, 2.35));
        DashboardState::Ready(Box::new(render(&result, &query, &ClientConfig::default())))
    }

    #[test]
    fn test_minimal_report() {
        let text = render_text(&ready(
            r#"{"recommendation": "Excellent conditions for a picnic!", "probabilities": {"temperature": 4.44, "precipitation": 21.05, "wind": 0}}"#,
        ));
        let expected = [
            "Climate Report for Picnic",
            "April 09",
            "Excellent conditions for a picnic!",
            "",
            "Chance of Hot Day (>30°C): 4.4%",
            "Chance of Rainy Day (>1mm): 21.1%",
            "Chance of Windy Day (>25km/h): 0.0%",
            "",
            "Download Full Dataset (CSV): http://127.0.0.1:5000/download?lat=48.85&lon=2.35",
        ]
        .join("\n");
        assert_eq!(text, expected);
    }

    #[test]
    fn test_trend_lines_are_sorted() {
        let text = render_text(&ready(
            r#"{"recommendation": "ok", "probabilities": {"temperature": 1, "precipitation": 1, "wind": 1}, "trend_data": {"2020": 10, "2018": 5, "2019": 7}}"#,
        ));
        let trend: Vec<&str> = text
            .lines()
            .skip_while(|l| *l != TREND_TITLE)
            .skip(1)
            .take(3)
            .collect();
        assert_eq!(trend, ["  2018    5.0%", "  2019    7.0%", "  2020   10.0%"]);
    }

    #[test]
    fn test_failure_reports_differ() {
        let no_data = render_text(&DashboardState::NoData);
        let lost = render_text(&DashboardState::ConnectionLost);
        assert!(no_data.starts_with(TELEMETRY_ERROR_TITLE));
        assert_eq!(lost, CONNECTION_LOST_TITLE);
        assert_ne!(no_data, lost);
    }
}
