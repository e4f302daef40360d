//! The user's accumulated wizard choices.
//!
//! `Selection` is a value: each step produces a new one instead of mutating a
//! shared record. Fields only ever go from `None` to `Some`; a fresh session
//! starts again from `Selection::default()`.

use serde::{Deserialize, Serialize};

/// A point in WGS84 degrees as emitted by the map.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    pub activity: Option<String>,
    pub month: Option<String>,
    pub day: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl Selection {
    pub fn with_activity(&self, activity: impl Into<String>) -> Self {
        Self {
            activity: Some(activity.into()),
            ..self.clone()
        }
    }

    pub fn with_date(&self, month: impl Into<String>, day: impl Into<String>) -> Self {
        Self {
            month: Some(month.into()),
            day: Some(day.into()),
            ..self.clone()
        }
    }

    /// Record the picked location. Repeated picks overwrite the previous one.
    pub fn with_location(&self, point: GeoPoint) -> Self {
        Self {
            latitude: Some(point.lat),
            longitude: Some(point.lon),
            ..self.clone()
        }
    }

    pub fn location(&self) -> Option<GeoPoint> {
        Some(GeoPoint::new(self.latitude?, self.longitude?))
    }

    /// True once all five fields have been filled in.
    pub fn is_complete(&self) -> bool {
        self.activity.is_some()
            && self.month.is_some()
            && self.day.is_some()
            && self.location().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fields_fill_in_order() {
        let s0 = Selection::default();
        let s1 = s0.with_activity("hiking");
        let s2 = s1.with_date("7", "15");
        let s3 = s2.with_location(GeoPoint::new(23.81, 90.41));

        assert_eq!(s0, Selection::default());
        assert_eq!(s1.activity.as_deref(), Some("hiking"));
        assert!(s1.month.is_none());
        assert_eq!(s2.activity.as_deref(), Some("hiking"));
        assert_eq!(s2.month.as_deref(), Some("7"));
        assert_eq!(s2.day.as_deref(), Some("15"));
        assert!(!s2.is_complete());
        assert!(s3.is_complete());
        assert_eq!(s3.location(), Some(GeoPoint::new(23.81, 90.41)));
    }

    #[test]
    fn test_location_last_write_wins() {
        let s = Selection::default()
            .with_location(GeoPoint::new(1.0, 2.0))
            .with_location(GeoPoint::new(-33.9, 151.2));
        assert_eq!(s.latitude, Some(-33.9));
        assert_eq!(s.longitude, Some(151.2));
    }

    #[test]
    fn test_revisiting_a_step_keeps_other_fields() {
        let s = Selection::default()
            .with_activity("beach")
            .with_date("1", "2")
            .with_activity("skiing");
        assert_eq!(s.activity.as_deref(), Some("skiing"));
        assert_eq!(s.month.as_deref(), Some("1"));
        assert_eq!(s.day.as_deref(), Some("2"));
    }
}
