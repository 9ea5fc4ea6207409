use chaos::map::MapMarker;
use chaos::SiteConfig;
use leptos::html;
use leptos::prelude::*;

use crate::leaflet::MapHandle;

/// Leaflet map showing `markers`.
///
/// Marker clicks report the destination id through `on_select`; a change of
/// `focus` flies the map to that position.
#[component]
pub fn MapWidget(
    #[prop(into)] markers: Signal<Vec<MapMarker>>,
    #[prop(into)] focus: Signal<Option<(f64, f64)>>,
    on_select: Callback<String>,
) -> impl IntoView {
    let config = use_context::<SiteConfig>().unwrap_or_default().map;
    let container = NodeRef::<html::Div>::new();
    let handle = StoredValue::new_local(None::<MapHandle>);

    Effect::new(move |_| {
        let Some(element) = container.get() else {
            return;
        };
        let markers = markers.get();

        handle.update_value(|slot| {
            if slot.is_none() {
                match MapHandle::mount(&element, &config) {
                    Ok(map) => *slot = Some(map),
                    Err(e) => {
                        tracing::error!(error = ?e, "leaflet map could not be created");
                        return;
                    }
                }
            }
            if let Some(map) = slot.as_mut() {
                map.show_markers(&markers, move |id| on_select.run(id));
            }
        });
    });

    Effect::new(move |_| {
        if let Some(position) = focus.get() {
            handle.with_value(|slot| {
                if let Some(map) = slot {
                    map.fly_to(position);
                }
            });
        }
    });

    on_cleanup(move || {
        handle.try_update_value(|slot| slot.take());
    });

    view! { <div class="map-canvas" node_ref=container></div> }
}
