use std::time::Duration;

use chaos::weather::{DemoWeather, WeatherReport, WeatherSource};
use chaos::SiteConfig;
use leptos::prelude::*;

/// Current weather for a selectable city.
///
/// Lookups are answered from the demo table after an artificial delay. A
/// newer selection cancels the pending timer, so a slow answer for an older
/// city never overwrites the current one.
#[component]
pub fn WeatherWidget() -> impl IntoView {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let latency = Duration::from_millis(config.weather.latency_ms);
    let (city, set_city) = signal(config.weather.default_city);
    let (report, set_report) = signal(None::<WeatherReport>);
    let pending = StoredValue::new(None::<TimeoutHandle>);

    Effect::new(move |_| {
        let city = city.get();
        set_report.set(None);
        if let Some(handle) = pending.get_value() {
            handle.clear();
        }

        let lookup = set_timeout_with_handle(
            move || set_report.set(Some(DemoWeather.report(&city))),
            latency,
        );
        match lookup {
            Ok(handle) => pending.set_value(Some(handle)),
            Err(e) => tracing::warn!(error = ?e, "could not schedule weather lookup"),
        }
    });

    on_cleanup(move || {
        if let Some(handle) = pending.try_get_value().flatten() {
            handle.clear();
        }
    });

    view! {
        <div class="weather-widget">
            <div class="weather-widget-header">
                <h3 class="weather-widget-title">"🌤️ Weather"</h3>
                <select
                    class="weather-select"
                    aria-label="City"
                    on:change=move |ev| set_city.set(event_target_value(&ev))
                >
                    {DemoWeather
                        .cities()
                        .map(|name| {
                            view! {
                                <option value=name selected=move || city.with(|c| c == name)>
                                    {name}
                                </option>
                            }
                        })
                        .collect::<Vec<_>>()}
                </select>
            </div>
            {move || match report.get() {
                None => view! {
                    <div class="weather-loading">
                        <div class="skeleton skeleton-line"></div>
                        <div class="skeleton skeleton-block"></div>
                        <div class="skeleton skeleton-line short"></div>
                    </div>
                }
                .into_any(),
                Some(report) => view! { <WeatherCard report=report /> }.into_any(),
            }}
        </div>
    }
}

/// One report: temperature, condition and details.
#[component]
pub fn WeatherCard(report: WeatherReport) -> impl IntoView {
    view! {
        <div class="weather-card">
            <div class="weather-location">"📍 "{report.location}</div>
            <div class="weather-main">
                <span class="weather-icon">{report.condition.icon()}</span>
                <span class="weather-temp">{report.temperature_c}"°C"</span>
            </div>
            <div class="weather-description">{report.condition.description()}</div>
            <div class="weather-details">
                <div class="weather-detail">
                    <span class="weather-detail-label">"💧 Humidity"</span>
                    <span class="weather-detail-value">{report.humidity}"%"</span>
                </div>
                <div class="weather-detail">
                    <span class="weather-detail-label">"💨 Wind"</span>
                    <span class="weather-detail-value">{report.wind_kmh}" km/h"</span>
                </div>
            </div>
        </div>
    }
}
