//! Marker records for the map widget.
//!
//! The widget itself is Leaflet, driven from the landing crate. It only ever
//! sees [`MapMarker`] values: position, pin icon, popup markup and the
//! destination id it reports back on click.

use crate::destinations::Destination;

/// Pin SVG; `{color}` is substituted per category.
const PIN_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="{color}" width="32" height="32"><path d="M12 2C8.13 2 5 5.13 5 9c0 5.25 7 13 7 13s7-7.75 7-13c0-3.87-3.13-7-7-7zm0 9.5c-1.38 0-2.5-1.12-2.5-2.5s1.12-2.5 2.5-2.5 2.5 1.12 2.5 2.5-1.12 2.5-2.5 2.5z"/></svg>"#;

/// Pin size in pixels (square).
pub const ICON_SIZE: u32 = 32;

/// One marker as handed to the map widget.
#[derive(Clone, Debug, PartialEq)]
pub struct MapMarker {
    /// Destination id, reported back on click
    pub id: &'static str,
    /// Latitude in degrees
    pub lat: f64,
    /// Longitude in degrees
    pub lng: f64,
    /// Hover title
    pub title: &'static str,
    /// Pin color
    pub color: &'static str,
    /// `data:` URL of the tinted pin
    pub icon_url: String,
    /// Popup content (escaped HTML)
    pub popup_html: String,
}

/// Build markers for the given destinations, order preserved.
pub fn markers_for<'a, I>(destinations: I) -> Vec<MapMarker>
where
    I: IntoIterator<Item = &'a Destination>,
{
    destinations.into_iter().map(marker_for).collect()
}

/// Build the marker of a single destination.
pub fn marker_for(destination: &Destination) -> MapMarker {
    let color = destination.category.marker_color();
    let (lat, lng) = destination.coordinates;
    MapMarker {
        id: destination.id,
        lat,
        lng,
        title: destination.name,
        color,
        icon_url: marker_icon_url(color),
        popup_html: popup_html(destination),
    }
}

/// `data:image/svg+xml` URL of a pin filled with `color`.
pub fn marker_icon_url(color: &str) -> String {
    let svg = PIN_SVG.replace("{color}", color);
    format!("data:image/svg+xml;charset=utf-8,{}", urlencoding::encode(&svg))
}

/// Popup markup: name, country, description and rating.
pub fn popup_html(destination: &Destination) -> String {
    format!(
        r#"<div class="map-popup"><h3 class="map-popup-title">{}</h3><p class="map-popup-country">📍 {}</p><p class="map-popup-description">{}</p><div class="map-popup-rating">⭐ {}</div></div>"#,
        escape_html(destination.name),
        escape_html(destination.country),
        escape_html(destination.description),
        destination.rating,
    )
}

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::destinations::{self, DestinationCategory};

    #[test]
    fn marker_carries_id_and_position() {
        let kyoto = destinations::find("2").unwrap();
        let marker = marker_for(kyoto);
        assert_eq!(marker.id, "2");
        assert_eq!((marker.lat, marker.lng), (35.0116, 135.7681));
        assert_eq!(marker.color, DestinationCategory::Culture.marker_color());
    }

    #[test]
    fn icon_url_is_encoded_svg() {
        let url = marker_icon_url("#ef4444");
        assert!(url.starts_with("data:image/svg+xml;charset=utf-8,"));
        assert!(url.contains("%23ef4444"));
        assert!(!url.contains('<'));
    }

    #[test]
    fn popup_escapes_text() {
        let mut patagonia = destinations::find("3").unwrap().clone();
        patagonia.name = "<Patagonia & co>";
        let html = popup_html(&patagonia);
        assert!(html.contains("&lt;Patagonia &amp; co&gt;"));
        assert!(html.contains("Chile/Argentina"));
        assert!(html.contains("4.7"));
    }

    #[test]
    fn markers_follow_input_order() {
        let ids: Vec<_> = markers_for(destinations::all()).into_iter().map(|m| m.id).collect();
        assert_eq!(ids, ["1", "2", "3", "4", "5"]);
    }
}
