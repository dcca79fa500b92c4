//! Google Maps JS Bindings
//!
//! The narrow slice of the `google.maps` surface the page consumes: map,
//! marker, info window, and event registration. Option objects are built
//! from serde structs; the live map handle is attached via `Reflect`.

use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// google.maps.Map
    #[wasm_bindgen(js_namespace = ["google", "maps"], js_name = Map)]
    #[derive(Clone)]
    pub type Map;

    #[wasm_bindgen(constructor, js_namespace = ["google", "maps"], js_class = "Map")]
    pub fn new(container: &web_sys::Element, opts: &JsValue) -> Map;

    #[wasm_bindgen(method, js_name = setZoom)]
    pub fn set_zoom(this: &Map, zoom: f64);

    #[wasm_bindgen(method, js_name = setCenter)]
    pub fn set_center(this: &Map, center: &JsValue);

    /// google.maps.Marker
    #[wasm_bindgen(js_namespace = ["google", "maps"], js_name = Marker)]
    #[derive(Clone)]
    pub type Marker;

    #[wasm_bindgen(constructor, js_namespace = ["google", "maps"], js_class = "Marker")]
    pub fn new(opts: &JsValue) -> Marker;

    /// Passing `None` detaches the marker from the map.
    #[wasm_bindgen(method, js_name = setMap)]
    pub fn set_map(this: &Marker, map: Option<&Map>);

    #[wasm_bindgen(method, js_name = getPosition)]
    pub fn get_position(this: &Marker) -> JsValue;

    /// google.maps.InfoWindow
    #[wasm_bindgen(js_namespace = ["google", "maps"], js_name = InfoWindow)]
    #[derive(Clone)]
    pub type InfoWindow;

    #[wasm_bindgen(constructor, js_namespace = ["google", "maps"], js_class = "InfoWindow")]
    pub fn new(opts: &JsValue) -> InfoWindow;

    #[wasm_bindgen(method)]
    pub fn open(this: &InfoWindow, map: &Map, anchor: &Marker);

    #[wasm_bindgen(method)]
    pub fn close(this: &InfoWindow);

    /// google.maps.event.addListener
    #[wasm_bindgen(js_namespace = ["google", "maps", "event"], js_name = addListener)]
    pub fn add_listener(target: &JsValue, event: &str, handler: &js_sys::Function);

    /// Mouse event delivered to map click handlers.
    pub type MapMouseEvent;

    #[wasm_bindgen(method, getter, js_name = latLng)]
    pub fn lat_lng(this: &MapMouseEvent) -> LatLng;

    /// google.maps.LatLng
    pub type LatLng;

    #[wasm_bindgen(method)]
    pub fn lat(this: &LatLng) -> f64;

    #[wasm_bindgen(method)]
    pub fn lng(this: &LatLng) -> f64;
}

#[derive(Serialize)]
struct LatLngLiteral {
    lat: f64,
    lng: f64,
}

#[derive(Serialize)]
struct MapOptions {
    center: LatLngLiteral,
    zoom: f64,
}

#[derive(Serialize)]
struct MarkerOptions<'a> {
    position: LatLngLiteral,
    title: &'a str,
}

/// `{lat, lng}` literal accepted wherever the API takes a position.
pub fn lat_lng_literal(lat: f64, lng: f64) -> JsValue {
    serde_wasm_bindgen::to_value(&LatLngLiteral { lat, lng }).unwrap_or(JsValue::UNDEFINED)
}

pub fn map_options(lat: f64, lng: f64, zoom: f64) -> JsValue {
    serde_wasm_bindgen::to_value(&MapOptions {
        center: LatLngLiteral { lat, lng },
        zoom,
    })
    .unwrap_or(JsValue::UNDEFINED)
}

/// Marker options with the live map handle attached.
pub fn marker_options(map: &Map, lat: f64, lng: f64, title: &str) -> JsValue {
    let opts = serde_wasm_bindgen::to_value(&MarkerOptions {
        position: LatLngLiteral { lat, lng },
        title,
    })
    .unwrap_or(JsValue::UNDEFINED);
    let _ = js_sys::Reflect::set(&opts, &JsValue::from_str("map"), map.as_ref());
    opts
}

/// Info window options around a prebuilt content node.
pub fn info_window_options(content: &web_sys::Element) -> JsValue {
    let opts = js_sys::Object::new();
    let _ = js_sys::Reflect::set(&opts, &JsValue::from_str("content"), content.as_ref());
    opts.into()
}
