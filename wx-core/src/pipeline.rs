//! From a picked location to a dashboard state.
//!
//! Split in two so the loading placeholder can be shown before anything is
//! awaited:
//!
//! 1. [`begin_fetch`] is synchronous. It records the location and returns
//!    the query plus the `Loading` placeholder to show right away.
//! 2. [`complete_fetch`] performs the request and maps its outcome to the
//!    final dashboard state.
//!
//! Fetches are not sequenced. When two are in flight, whichever completes
//! last decides what the dashboard ends up showing, even if it belongs to
//! the older pick.

use crate::client::{fetch_stats, ClientConfig, StatsQuery, StatsTransport};
use crate::dashboard::DashboardState;
use crate::geo::LocationEvent;
use crate::wizard::Wizard;
use log::info;

#[derive(Debug, Clone, PartialEq)]
pub struct PendingFetch {
    /// Wizard with the picked location recorded
    pub wizard: Wizard,
    pub query: StatsQuery,
    /// What to show until the request completes
    pub placeholder: DashboardState,
}

pub fn begin_fetch(wizard: &Wizard, event: LocationEvent) -> PendingFetch {
    let point = event.point();
    info!("Location picked via {:?}", event);
    let wizard = wizard.locate(point);
    let query = StatsQuery::new(wizard.selection(), point);
    PendingFetch {
        wizard,
        query,
        placeholder: DashboardState::Loading,
    }
}

pub async fn complete_fetch<T: StatsTransport>(
    transport: &T,
    config: &ClientConfig,
    pending: &PendingFetch,
) -> DashboardState {
    let result = fetch_stats(transport, config, &pending.query).await;
    DashboardState::from_result(result, &pending.query, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FetchError;
    use crate::selection::GeoPoint;
    use crate::wizard::WizardAction;
    use std::cell::Cell;
    use std::collections::HashMap;

    const OK_BODY: &str = r#"{"recommendation": "ok", "probabilities": {"temperature": 1, "precipitation": 2, "wind": 3}, "trend_data": {"2020": 10, "2018": 5, "2019": 7}}"#;

    /// Replies by latitude and counts requests.
    struct ByLatitude {
        replies: HashMap<String, Result<String, FetchError>>,
        calls: Cell<usize>,
    }

    impl ByLatitude {
        fn new(replies: &[(&str, Result<&str, FetchError>)]) -> Self {
            Self {
                replies: replies
                    .iter()
                    .map(|(lat, r)| (lat.to_string(), r.clone().map(str::to_string)))
                    .collect(),
                calls: Cell::new(0),
            }
        }
    }

    impl StatsTransport for ByLatitude {
        async fn get_text(&self, url: &str) -> Result<String, FetchError> {
            self.calls.set(self.calls.get() + 1);
            let lat = url
                .split("lat=")
                .nth(1)
                .and_then(|rest| rest.split('&').next())
                .unwrap_or_default();
            self.replies
                .get(lat)
                .cloned()
                .unwrap_or_else(|| Err(FetchError::Transport("unreachable".to_string())))
        }
    }

    fn location_step() -> Wizard {
        Wizard::start()
            .apply(WizardAction::ChooseActivity("hiking".to_string()))
            .wizard
            .apply(WizardAction::DateNext {
                month: "7".to_string(),
                day: "15".to_string(),
            })
            .wizard
    }

    #[test]
    fn test_begin_fetch_is_loading_before_any_request() {
        let pending = begin_fetch(&location_step(), LocationEvent::Click(GeoPoint::new(1.5, 2.5)));
        assert_eq!(pending.placeholder, DashboardState::Loading);
        assert_eq!(pending.wizard.selection().location(), Some(GeoPoint::new(1.5, 2.5)));
        assert_eq!(pending.query.activity, "hiking");
        assert_eq!(pending.query.lat, 1.5);
    }

    #[cfg(not(target_family = "wasm"))]
    #[tokio::test]
    async fn test_loading_shown_before_completion() {
        let transport = ByLatitude::new(&[("1", Ok(OK_BODY))]);
        let config = ClientConfig::default();
        let mut shown = Vec::new();

        let pending = begin_fetch(&location_step(), LocationEvent::SearchResult(GeoPoint::new(1.0, 2.0)));
        shown.push(pending.placeholder.clone());
        assert_eq!(transport.calls.get(), 0);
        shown.push(complete_fetch(&transport, &config, &pending).await);

        assert_eq!(shown[0], DashboardState::Loading);
        assert!(matches!(shown[1], DashboardState::Ready(_)));
        let trend = shown[1].trend().unwrap();
        assert_eq!(trend[&2019], 7.0);
    }

    #[cfg(not(target_family = "wasm"))]
    #[tokio::test]
    async fn test_failure_states() {
        let transport = ByLatitude::new(&[("1", Ok("null")), ("2", Ok("not json"))]);
        let config = ClientConfig::default();
        let wizard = location_step();

        let no_data = begin_fetch(&wizard, LocationEvent::Click(GeoPoint::new(1.0, 0.0)));
        let garbled = begin_fetch(&wizard, LocationEvent::Click(GeoPoint::new(2.0, 0.0)));
        let unreachable = begin_fetch(&wizard, LocationEvent::Click(GeoPoint::new(3.0, 0.0)));

        assert_eq!(complete_fetch(&transport, &config, &no_data).await, DashboardState::NoData);
        assert_eq!(
            complete_fetch(&transport, &config, &garbled).await,
            DashboardState::ConnectionLost
        );
        assert_eq!(
            complete_fetch(&transport, &config, &unreachable).await,
            DashboardState::ConnectionLost
        );
    }

    #[cfg(not(target_family = "wasm"))]
    #[tokio::test]
    async fn test_overlapping_fetches_last_completion_wins() {
        // Known limitation: an older request that completes later overwrites
        // the newer result.
        let transport = ByLatitude::new(&[("1", Ok(OK_BODY)), ("2", Ok("null"))]);
        let config = ClientConfig::default();

        let first = begin_fetch(&location_step(), LocationEvent::Click(GeoPoint::new(1.0, 0.0)));
        let second = begin_fetch(&first.wizard, LocationEvent::Click(GeoPoint::new(2.0, 0.0)));
        assert_eq!(second.wizard.selection().latitude, Some(2.0));

        let mut dashboard = second.placeholder.clone();
        assert_eq!(dashboard, DashboardState::Loading);
        dashboard = complete_fetch(&transport, &config, &second).await;
        assert_eq!(dashboard, DashboardState::NoData);
        dashboard = complete_fetch(&transport, &config, &first).await;

        assert!(matches!(dashboard, DashboardState::Ready(_)));
        assert_eq!(transport.calls.get(), 2);
    }
}
