// Weather page - city search, popular destinations, widget and tips
use chaos::weather::{popular_destinations, DemoWeather, WeatherReport, TRAVEL_TIPS};
use leptos::prelude::*;

use crate::sections::{WeatherCard, WeatherWidget};

/// Outcome of the last search.
#[derive(Clone, Debug, PartialEq)]
enum SearchResult {
    Found(WeatherReport),
    NotFound(String),
}

#[component]
pub fn WeatherPage() -> impl IntoView {
    let (search, set_search) = signal(String::new());
    let (result, set_result) = signal(None::<SearchResult>);

    let run_search = move || {
        let query = search.get_untracked();
        if query.trim().is_empty() {
            set_result.set(None);
            return;
        }
        let found = match DemoWeather.find(&query) {
            Some(report) => SearchResult::Found(report.clone()),
            None => {
                tracing::debug!(query = %query, "no demo weather for search");
                SearchResult::NotFound(query.trim().to_string())
            }
        };
        set_result.set(Some(found));
    };

    view! {
        <section class="page-header">
            <div class="container">
                <h1 class="page-title">"Weather Forecast"</h1>
                <p class="page-description">
                    "Check current conditions for popular destinations before you travel"
                </p>
            </div>
        </section>

        <section class="weather-search">
            <div class="container">
                <form
                    class="search-form"
                    on:submit=move |ev| {
                        ev.prevent_default();
                        run_search();
                    }
                >
                    <input
                        type="search"
                        class="search-input"
                        placeholder="Search for a city..."
                        prop:value=move || search.get()
                        on:input=move |ev| set_search.set(event_target_value(&ev))
                    />
                    <button type="submit" class="btn btn-primary">"Search"</button>
                </form>
                {move || match result.get() {
                    Some(SearchResult::Found(report)) => view! { <WeatherCard report=report /> }.into_any(),
                    Some(SearchResult::NotFound(city)) => view! {
                        <p class="search-miss">
                            "No weather data for \"" {city} "\". Try one of the popular destinations below."
                        </p>
                    }
                    .into_any(),
                    None => ().into_any(),
                }}
            </div>
        </section>

        <section class="popular-destinations">
            <div class="container">
                <h2 class="section-title">"Popular Destinations"</h2>
                <div class="weather-grid">
                    {popular_destinations()
                        .iter()
                        .map(|destination| {
                            let report = DemoWeather.lookup(destination.name);
                            let (lat, lng) = destination.coordinates;
                            view! {
                                <div class="weather-tile">
                                    <h3 class="weather-tile-name">{destination.name}</h3>
                                    <p class="weather-tile-country">{destination.country}</p>
                                    <div class="weather-main">
                                        <span class="weather-icon">{report.condition.icon()}</span>
                                        <span class="weather-temp">{report.temperature_c}"°C"</span>
                                    </div>
                                    <p class="weather-description">{report.condition.description()}</p>
                                    <p class="weather-coords">{format!("{lat:.2}, {lng:.2}")}</p>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>

        <section class="weather-extras">
            <div class="container weather-extras-grid">
                <WeatherWidget />
                <div class="travel-tips">
                    <h3 class="travel-tips-title">"💡 Travel Weather Tips"</h3>
                    <ul>
                        {TRAVEL_TIPS.iter().map(|tip| view! { <li>{*tip}</li> }).collect::<Vec<_>>()}
                    </ul>
                </div>
            </div>
        </section>
    }
}
