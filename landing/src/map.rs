//! Location widget backed by Leaflet.
//!
//! Leaflet is loaded by `index.html` as the global `L`. If it is missing or
//! throws, the widget is skipped and the rest of the page carries on.

use electrotools_core::config::MapConfig;
use js_sys::{Array, Object, Reflect};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[derive(Clone)]
    pub type LeafletMap;

    #[wasm_bindgen(catch, js_namespace = L, js_name = map)]
    fn leaflet_map(container_id: &str) -> Result<LeafletMap, JsValue>;

    #[wasm_bindgen(method, js_name = setView)]
    fn set_view(this: &LeafletMap, center: &Array, zoom: f64) -> LeafletMap;

    #[wasm_bindgen(method, js_name = invalidateSize)]
    fn invalidate_size(this: &LeafletMap);

    type TileLayer;

    #[wasm_bindgen(catch, js_namespace = L, js_name = tileLayer)]
    fn tile_layer(url: &str, options: &Object) -> Result<TileLayer, JsValue>;

    #[wasm_bindgen(method, js_name = addTo)]
    fn add_to(this: &TileLayer, map: &LeafletMap) -> TileLayer;

    type Marker;

    #[wasm_bindgen(catch, js_namespace = L, js_name = marker)]
    fn marker(at: &Array) -> Result<Marker, JsValue>;

    #[wasm_bindgen(method, js_name = addTo)]
    fn add_to(this: &Marker, map: &LeafletMap) -> Marker;

    #[wasm_bindgen(method, js_name = bindPopup)]
    fn bind_popup(this: &Marker, html: &str) -> Marker;

    #[wasm_bindgen(method, js_name = openPopup)]
    fn open_popup(this: &Marker) -> Marker;
}

/// Element id of the map container.
pub const MAP_CONTAINER_ID: &str = "map";

/// A mounted Leaflet map showing the business location.
#[derive(Clone)]
pub struct SiteMap {
    inner: LeafletMap,
}

impl SiteMap {
    /// Build the map inside `#map` with one marker and an open popup.
    pub fn mount(config: &MapConfig) -> Result<Self, JsValue> {
        let center = Array::of2(
            &JsValue::from_f64(config.latitude),
            &JsValue::from_f64(config.longitude),
        );

        let map = leaflet_map(MAP_CONTAINER_ID)?;
        map.set_view(&center, f64::from(config.zoom));

        let options = Object::new();
        Reflect::set(
            &options,
            &JsValue::from_str("attribution"),
            &JsValue::from_str(&config.attribution),
        )?;
        tile_layer(&config.tile_url, &options)?.add_to(&map);

        marker(&center)?
            .add_to(&map)
            .bind_popup(&config.popup_html())
            .open_popup();

        Ok(Self { inner: map })
    }

    /// Recompute the widget's size; needed after it was laid out while hidden.
    pub fn refresh(&self) {
        self.inner.invalidate_size();
    }
}
