//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! Leaflet, Leaflet-GeoSearch and Chart.js are loaded from CDN script tags
//! and used as globals. Map clicks and search results come back into Rust
//! through a single closure registered as `window.__wxOnLocation`.

use std::sync::atomic::{AtomicU32, Ordering};
use wasm_bindgen::prelude::*;
use wx_core::geo::{CoordinateSource, LocationEvent, MapView};
use wx_core::selection::GeoPoint;
use wx_core::trend::{ChartHandle, ChartSurface};

/// DOM id of the map container on the location step.
pub const MAP_CONTAINER_ID: &str = "map";

static NEXT_CHART_ID: AtomicU32 = AtomicU32::new(1);

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('WX JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Quote a string as a JS literal.
fn js_string(s: &str) -> String {
    serde_json::to_string(s).unwrap_or_else(|_| "''".to_string())
}

/// `window.location.origin`, if running in a browser.
pub fn page_origin() -> Option<String> {
    web_sys::window().and_then(|w| w.location().origin().ok())
}

/// Whether a script-provided global such as `Chart` has loaded.
pub fn global_defined(name: &str) -> bool {
    js_sys::eval(&format!("typeof {} !== 'undefined'", name))
        .ok()
        .and_then(|v| v.as_bool())
        .unwrap_or(false)
}

pub fn element_exists(id: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
        .is_some()
}

/// Route map clicks and search results to `on_pick`. Call once at startup,
/// before the map is initialized.
pub fn register_location_handler(mut on_pick: impl FnMut(LocationEvent) + 'static) {
    let handler = Closure::<dyn FnMut(String, f64, f64)>::new(move |kind: String, lat: f64, lon: f64| {
        let point = GeoPoint::new(lat, lon);
        let event = if kind == "search" {
            LocationEvent::SearchResult(point)
        } else {
            LocationEvent::Click(point)
        };
        on_pick(event);
    });
    let installed = js_sys::Reflect::set(
        &js_sys::global(),
        &JsValue::from_str("__wxOnLocation"),
        handler.as_ref(),
    );
    if installed.is_err() {
        log::warn!("Could not install the location handler");
    }
    // Lives for the whole session
    handler.forget();
}

/// Render the Leaflet map with a GeoSearch bar into `container_id`.
///
/// Uses a polling loop to wait for Leaflet and GeoSearch to load and the
/// container DOM element to exist.
pub fn init_map(container_id: &str, view: &MapView) {
    let container = js_string(container_id);
    let tile_url = js_string(&view.tile_url);
    let attribution = js_string(&view.attribution);
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (typeof L !== 'undefined' &&
                    typeof GeoSearch !== 'undefined' &&
                    document.getElementById({container})) {{
                    clearInterval(poll);
                    try {{
                        var map = L.map({container}).setView([{lat}, {lon}], {zoom});
                        L.tileLayer({tile_url}, {{ attribution: {attribution} }}).addTo(map);
                        var search = new GeoSearch.GeoSearchControl({{
                            provider: new GeoSearch.OpenStreetMapProvider(),
                            style: 'bar',
                            showMarker: false,
                            autoClose: true
                        }});
                        map.addControl(search);
                        map.on('click', function(e) {{
                            window.__wxOnLocation('click', e.latlng.lat, e.latlng.lng);
                        }});
                        map.on('geosearch/showlocation', function(e) {{
                            window.__wxOnLocation('search', e.location.y, e.location.x);
                        }});
                        window.__wxMap = map;
                    }} catch(e) {{ console.error('[WX] map init error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
        lat = view.center.lat,
        lon = view.center.lon,
        zoom = view.zoom,
    ));
}

/// The Leaflet map on the location step.
#[derive(Debug, Default)]
pub struct LeafletMap;

impl CoordinateSource for LeafletMap {
    fn initialize(&mut self, view: &MapView) {
        log::info!("Initializing map at ({}, {})", view.center.lat, view.center.lon);
        init_map(MAP_CONTAINER_ID, view);
    }
}

/// Chart.js instances kept in `window.__wxCharts`, keyed by handle id.
#[derive(Debug, Default)]
pub struct JsChartSurface;

impl ChartSurface for JsChartSurface {
    fn has_target(&self, canvas_id: &str) -> bool {
        element_exists(canvas_id)
    }

    fn create(&mut self, canvas_id: &str, config: &serde_json::Value) -> Option<ChartHandle> {
        if !global_defined("Chart") {
            log::warn!("Chart.js not loaded yet, skipping trend chart");
            return None;
        }
        let config_json = serde_json::to_string(config).ok()?;
        let id = NEXT_CHART_ID.fetch_add(1, Ordering::Relaxed);
        call_js(&format!(
            r#"
            var cfg = {config_json};
            cfg.options.scales.y.ticks.callback = function(value) {{ return value + '%'; }};
            var ctx = document.getElementById({canvas}).getContext('2d');
            window.__wxCharts = window.__wxCharts || {{}};
            window.__wxCharts[{id}] = new Chart(ctx, cfg);
            "#,
            canvas = js_string(canvas_id),
        ));
        Some(ChartHandle::new(id))
    }

    fn destroy(&mut self, handle: ChartHandle) {
        call_js(&format!(
            "var c = window.__wxCharts && window.__wxCharts[{id}]; if (c) {{ c.destroy(); delete window.__wxCharts[{id}]; }}",
            id = handle.id()
        ));
    }
}
