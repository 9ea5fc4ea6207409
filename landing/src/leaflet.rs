//! Minimal bindings to the Leaflet global (`L`) loaded from index.html.

use chaos::config::MapConfig;
use chaos::map::{MapMarker, ICON_SIZE};
use js_sys::{Array, Object, Reflect};
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

#[wasm_bindgen]
unsafe extern "C" {
    type Layer;

    #[wasm_bindgen(method, js_name = addTo)]
    fn add_to(this: &Layer, map: &LeafletMap) -> Layer;

    type LeafletMap;

    #[wasm_bindgen(catch, js_namespace = L, js_name = map)]
    fn create_map(element: &HtmlElement, options: &Object) -> Result<LeafletMap, JsValue>;

    #[wasm_bindgen(method, js_name = setView)]
    fn set_view(this: &LeafletMap, center: &Array, zoom: u8) -> LeafletMap;

    #[wasm_bindgen(method, js_name = flyTo)]
    fn fly_to(this: &LeafletMap, center: &Array, zoom: u8, options: &Object) -> LeafletMap;

    #[wasm_bindgen(method)]
    fn remove(this: &LeafletMap) -> LeafletMap;

    #[wasm_bindgen(extends = Layer)]
    type TileLayer;

    #[wasm_bindgen(js_namespace = L, js_name = tileLayer)]
    fn tile_layer(url: &str, options: &Object) -> TileLayer;

    #[wasm_bindgen(extends = Layer)]
    type LayerGroup;

    #[wasm_bindgen(js_namespace = L, js_name = layerGroup)]
    fn layer_group() -> LayerGroup;

    #[wasm_bindgen(method, js_name = addLayer)]
    fn add_layer(this: &LayerGroup, layer: &Layer) -> LayerGroup;

    #[wasm_bindgen(method, js_name = clearLayers)]
    fn clear_layers(this: &LayerGroup) -> LayerGroup;

    type Icon;

    #[wasm_bindgen(js_namespace = L, js_name = icon)]
    fn icon(options: &Object) -> Icon;

    #[wasm_bindgen(extends = Layer)]
    type Marker;

    #[wasm_bindgen(js_namespace = L, js_name = marker)]
    fn marker(lat_lng: &Array, options: &Object) -> Marker;

    #[wasm_bindgen(method, js_name = bindPopup)]
    fn bind_popup(this: &Marker, content: &str) -> Marker;

    #[wasm_bindgen(method)]
    fn on(this: &Marker, event: &str, handler: &js_sys::Function) -> Marker;
}

fn lat_lng(lat: f64, lng: f64) -> Array {
    Array::of2(&JsValue::from_f64(lat), &JsValue::from_f64(lng))
}

fn options(entries: &[(&str, JsValue)]) -> Object {
    let object = Object::new();
    for (key, value) in entries {
        let _ = Reflect::set(&object, &JsValue::from_str(key), value);
    }
    object
}

/// A mounted map with one replaceable marker layer.
pub struct MapHandle {
    map: LeafletMap,
    markers: LayerGroup,
    focus_zoom: u8,
    fly_duration_secs: f64,
    handlers: Vec<Closure<dyn FnMut()>>,
}

impl MapHandle {
    /// Create the map inside `element`. Fails when Leaflet is not loaded.
    pub fn mount(element: &HtmlElement, config: &MapConfig) -> Result<Self, JsValue> {
        let map = create_map(element, &Object::new())?;
        let [lat, lng] = config.center;
        map.set_view(&lat_lng(lat, lng), config.zoom);

        tile_layer(
            &config.tile_url,
            &options(&[("attribution", JsValue::from_str(&config.attribution))]),
        )
        .add_to(&map);

        let markers = layer_group();
        markers.add_to(&map);

        Ok(Self {
            map,
            markers,
            focus_zoom: config.focus_zoom,
            fly_duration_secs: config.fly_duration_secs,
            handlers: Vec::new(),
        })
    }

    /// Replace every marker. `on_click` receives the marker id.
    pub fn show_markers(&mut self, markers: &[MapMarker], on_click: impl Fn(String) + Clone + 'static) {
        self.markers.clear_layers();
        self.handlers.clear();

        let size = JsValue::from_f64(f64::from(ICON_SIZE));
        let half = JsValue::from_f64(f64::from(ICON_SIZE / 2));
        for record in markers {
            let pin = icon(&options(&[
                ("iconUrl", JsValue::from_str(&record.icon_url)),
                ("iconSize", Array::of2(&size, &size).into()),
                ("iconAnchor", Array::of2(&half, &size).into()),
                ("popupAnchor", Array::of2(&JsValue::from_f64(0.0), &(-f64::from(ICON_SIZE)).into()).into()),
            ]));
            let pin_marker = marker(
                &lat_lng(record.lat, record.lng),
                &options(&[("icon", pin.into()), ("title", JsValue::from_str(record.title))]),
            );
            pin_marker.bind_popup(&record.popup_html);

            let id = record.id.to_string();
            let on_click = on_click.clone();
            let handler = Closure::<dyn FnMut()>::new(move || on_click(id.clone()));
            pin_marker.on("click", handler.as_ref().unchecked_ref());
            self.handlers.push(handler);

            self.markers.add_layer(&pin_marker);
        }
        tracing::debug!(count = markers.len(), "map markers replaced");
    }

    /// Animate to a position at the focus zoom.
    pub fn fly_to(&self, (lat, lng): (f64, f64)) {
        self.map.fly_to(
            &lat_lng(lat, lng),
            self.focus_zoom,
            &options(&[("duration", JsValue::from_f64(self.fly_duration_secs))]),
        );
    }
}

impl Drop for MapHandle {
    fn drop(&mut self) {
        self.map.remove();
    }
}
