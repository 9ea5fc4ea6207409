// Map page - destination filters, Leaflet map, detail sidebar
use chaos::destinations::{self, filter_destinations, Destination, DestinationFilter};
use chaos::map::markers_for;
use leptos::prelude::*;

use crate::sections::MapWidget;

#[component]
pub fn MapPage() -> impl IntoView {
    let (filter, set_filter) = signal(DestinationFilter::All);
    let (selected, set_selected) = signal(None::<&'static str>);

    let visible = Memo::new(move |_| filter_destinations(destinations::all(), filter.get()));
    let markers = Signal::derive(move || visible.with(|v| markers_for(v.iter().copied())));
    let selected_destination = Memo::new(move |_| selected.get().and_then(destinations::find));
    let focus = Signal::derive(move || selected_destination.get().map(|d| d.coordinates));
    let on_select = Callback::new(move |id: String| {
        set_selected.set(destinations::find(&id).map(|d| d.id));
    });

    view! {
        <section class="page-header">
            <div class="container">
                <h1 class="page-title">"Interactive Travel Map"</h1>
                <p class="page-description">
                    "Explore destinations around the world. Click a pin for details and insider tips."
                </p>
            </div>
        </section>

        <section class="map-section">
            <div class="container">
                <div class="category-filters">
                    {DestinationFilter::choices()
                        .map(|choice| {
                            view! {
                                <button
                                    class=move || {
                                        if filter.get() == choice { "filter-btn active" } else { "filter-btn" }
                                    }
                                    on:click=move |_| set_filter.set(choice)
                                >
                                    {choice.icon()}" "{choice.label()}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>

                <div class="map-layout">
                    <div class="map-container">
                        <MapWidget markers=markers focus=focus on_select=on_select />
                    </div>
                    <aside class="map-sidebar">
                        {move || match selected_destination.get() {
                            Some(destination) => view! {
                                <DestinationDetail
                                    destination=destination
                                    on_close=Callback::new(move |_: ()| set_selected.set(None))
                                />
                            }
                            .into_any(),
                            None => view! {
                                <div class="map-placeholder">
                                    <div class="map-placeholder-icon">"🗺️"</div>
                                    <h3>"Explore Destinations"</h3>
                                    <p>"Click any pin on the map or pick a place from the list below."</p>
                                </div>
                            }
                            .into_any(),
                        }}
                    </aside>
                </div>

                <h2 class="section-title">"Destinations"</h2>
                <div class="destination-grid">
                    {move || {
                        visible.with(|v| {
                            v.iter()
                                .map(|destination| {
                                    let id = destination.id;
                                    view! {
                                        <button
                                            class=move || {
                                                if selected.get() == Some(id) {
                                                    "destination-card active"
                                                } else {
                                                    "destination-card"
                                                }
                                            }
                                            on:click=move |_| set_selected.set(Some(id))
                                        >
                                            <span class="destination-icon">{destination.category.icon()}</span>
                                            <span class="destination-name">{destination.name}</span>
                                            <span class="destination-country">{destination.country}</span>
                                            <span class="destination-rating">"⭐ "{destination.rating}</span>
                                        </button>
                                    }
                                })
                                .collect::<Vec<_>>()
                        })
                    }}
                </div>
            </div>
        </section>
    }
}

#[component]
fn DestinationDetail(destination: &'static Destination, on_close: Callback<()>) -> impl IntoView {
    view! {
        <div class="destination-detail">
            <button class="detail-close" aria-label="Close" on:click=move |_| on_close.run(())>"✕"</button>
            <span class="post-tag">{destination.category.icon()}" "{destination.category.label()}</span>
            <h3 class="detail-title">{destination.name}</h3>
            <p class="detail-country">"📍 "{destination.country}</p>
            <p class="detail-rating">"⭐ "{destination.rating}" / 5"</p>
            <p class="detail-description">{destination.description}</p>
            <h4 class="detail-heading">"Best time to visit"</h4>
            <p>{destination.best_time}</p>
            <h4 class="detail-heading">"Insider tips"</h4>
            <ul class="detail-tips">
                {destination.tips.iter().map(|tip| view! { <li>{*tip}</li> }).collect::<Vec<_>>()}
            </ul>
        </div>
    }
}
