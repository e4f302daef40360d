//! The map capability used on the location step.
//!
//! The actual map lives in the browser. From the wizard's side it is
//! something that can be initialized once and then reports picked points,
//! either from a direct click or from a search result.

use crate::selection::GeoPoint;

pub const DEFAULT_CENTER: GeoPoint = GeoPoint {
    lat: 23.8103,
    lon: 90.4125,
};
pub const DEFAULT_ZOOM: u8 = 5;
pub const TILE_URL: &str = "https://{s}.basemaps.cartocdn.com/dark_all/{z}/{x}/{y}{r}.png";
pub const TILE_ATTRIBUTION: &str = "&copy; OpenStreetMap &copy; CARTO";

/// How the map is first presented.
#[derive(Debug, Clone, PartialEq)]
pub struct MapView {
    pub center: GeoPoint,
    pub zoom: u8,
    pub tile_url: String,
    pub attribution: String,
}

impl Default for MapView {
    fn default() -> Self {
        Self {
            center: DEFAULT_CENTER,
            zoom: DEFAULT_ZOOM,
            tile_url: TILE_URL.to_string(),
            attribution: TILE_ATTRIBUTION.to_string(),
        }
    }
}

/// A point picked on the map. Both kinds are handled identically.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LocationEvent {
    Click(GeoPoint),
    SearchResult(GeoPoint),
}

impl LocationEvent {
    pub fn point(&self) -> GeoPoint {
        match self {
            LocationEvent::Click(p) | LocationEvent::SearchResult(p) => *p,
        }
    }
}

/// Renders the interactive map and search control into the page.
///
/// `initialize` is called at most once per session, through
/// [`Wizard::apply_with`](crate::wizard::Wizard::apply_with).
pub trait CoordinateSource {
    fn initialize(&mut self, view: &MapView);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_view() {
        let view = MapView::default();
        assert_eq!(view.center, GeoPoint::new(23.8103, 90.4125));
        assert_eq!(view.zoom, 5);
        assert!(view.tile_url.contains("dark_all"));
    }

    #[test]
    fn test_events_yield_their_point() {
        let p = GeoPoint::new(51.5, -0.12);
        assert_eq!(LocationEvent::Click(p).point(), p);
        assert_eq!(LocationEvent::SearchResult(p).point(), p);
    }
}
