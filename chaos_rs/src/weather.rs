//! Weather lookup backed by a static demo table.
//!
//! There is no provider integration: [`DemoWeather`] answers from the table
//! below and the widget adds an artificial delay on top.

/// Sky condition, with the icon and wording the widget shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Condition {
    /// Clear sky
    Clear,
    /// Sunny
    Sunny,
    /// Partly cloudy
    PartlyCloudy,
    /// Overcast
    Cloudy,
    /// Light rain
    LightRain,
    /// Rain
    Rain,
    /// Thunderstorm
    Thunderstorm,
    /// Snow
    Snow,
}

impl Condition {
    /// Emoji icon.
    pub fn icon(self) -> &'static str {
        match self {
            Condition::Clear | Condition::Sunny => "☀️",
            Condition::PartlyCloudy => "⛅",
            Condition::Cloudy => "☁️",
            Condition::LightRain => "🌦️",
            Condition::Rain => "🌧️",
            Condition::Thunderstorm => "⛈️",
            Condition::Snow => "❄️",
        }
    }

    /// Human description.
    pub fn description(self) -> &'static str {
        match self {
            Condition::Clear => "Clear sky",
            Condition::Sunny => "Sunny",
            Condition::PartlyCloudy => "Partly cloudy",
            Condition::Cloudy => "Cloudy",
            Condition::LightRain => "Light rain",
            Condition::Rain => "Rain",
            Condition::Thunderstorm => "Thunderstorm",
            Condition::Snow => "Snow",
        }
    }

    /// Map a provider's "main" condition name (OpenWeatherMap style) onto a
    /// condition. Unknown names read as partly cloudy.
    pub fn from_api_main(main: &str) -> Self {
        match main.to_lowercase().as_str() {
            "clear" => Condition::Clear,
            "clouds" => Condition::Cloudy,
            "rain" => Condition::Rain,
            "thunderstorm" => Condition::Thunderstorm,
            "snow" => Condition::Snow,
            _ => Condition::PartlyCloudy,
        }
    }
}

/// Current conditions for one city.
#[derive(Clone, Debug, PartialEq)]
pub struct WeatherReport {
    /// City key of the lookup table
    pub city: &'static str,
    /// Display location, e.g. `"Paris, FR"`
    pub location: &'static str,
    /// Temperature in °C
    pub temperature_c: i32,
    /// Sky condition
    pub condition: Condition,
    /// Relative humidity in percent
    pub humidity: u8,
    /// Wind speed in km/h
    pub wind_kmh: u32,
}

/// Where weather reports come from.
pub trait WeatherSource {
    /// Report for `city`. Sources without data for the city return a fallback.
    fn report(&self, city: &str) -> WeatherReport;
}

static DEMO_REPORTS: &[WeatherReport] = &[
    WeatherReport {
        city: "Paris",
        location: "Paris, FR",
        temperature_c: 22,
        condition: Condition::PartlyCloudy,
        humidity: 65,
        wind_kmh: 12,
    },
    WeatherReport {
        city: "Tokyo",
        location: "Tokyo, JP",
        temperature_c: 28,
        condition: Condition::Sunny,
        humidity: 70,
        wind_kmh: 8,
    },
    WeatherReport {
        city: "New York",
        location: "New York, US",
        temperature_c: 25,
        condition: Condition::LightRain,
        humidity: 80,
        wind_kmh: 15,
    },
    WeatherReport {
        city: "London",
        location: "London, UK",
        temperature_c: 18,
        condition: Condition::Cloudy,
        humidity: 75,
        wind_kmh: 10,
    },
    WeatherReport {
        city: "Sydney",
        location: "Sydney, AU",
        temperature_c: 24,
        condition: Condition::Clear,
        humidity: 60,
        wind_kmh: 14,
    },
    WeatherReport {
        city: "Rio de Janeiro",
        location: "Rio de Janeiro, BR",
        temperature_c: 30,
        condition: Condition::Thunderstorm,
        humidity: 85,
        wind_kmh: 20,
    },
];

/// Static demo table. Unknown cities fall back to Paris.
#[derive(Clone, Copy, Debug, Default)]
pub struct DemoWeather;

impl DemoWeather {
    /// Cities with demo data, in selector order.
    pub fn cities(&self) -> impl Iterator<Item = &'static str> {
        DEMO_REPORTS.iter().map(|r| r.city)
    }

    /// Exact-key lookup, falling back to the first entry (Paris).
    pub fn lookup(&self, city: &str) -> &'static WeatherReport {
        match DEMO_REPORTS.iter().find(|r| r.city == city) {
            Some(report) => report,
            None => {
                tracing::warn!(city, "no demo weather for city, using fallback");
                &DEMO_REPORTS[0]
            }
        }
    }

    /// Case-insensitive, trimmed lookup for free-text search. No fallback.
    pub fn find(&self, query: &str) -> Option<&'static WeatherReport> {
        let query = query.trim();
        if query.is_empty() {
            return None;
        }
        DEMO_REPORTS
            .iter()
            .find(|r| r.city.eq_ignore_ascii_case(query))
    }
}

impl WeatherSource for DemoWeather {
    fn report(&self, city: &str) -> WeatherReport {
        self.lookup(city).clone()
    }
}

/// A city card on the weather page.
#[derive(Clone, Debug, PartialEq)]
pub struct PopularDestination {
    /// City name, also the weather lookup key
    pub name: &'static str,
    /// Country
    pub country: &'static str,
    /// `(latitude, longitude)`
    pub coordinates: (f64, f64),
}

static POPULAR: &[PopularDestination] = &[
    PopularDestination { name: "Paris", country: "France", coordinates: (48.8566, 2.3522) },
    PopularDestination { name: "Tokyo", country: "Japan", coordinates: (35.6762, 139.6503) },
    PopularDestination { name: "New York", country: "USA", coordinates: (40.7128, -74.0060) },
    PopularDestination { name: "London", country: "UK", coordinates: (51.5074, -0.1278) },
    PopularDestination { name: "Sydney", country: "Australia", coordinates: (-33.8688, 151.2093) },
    PopularDestination { name: "Rio de Janeiro", country: "Brazil", coordinates: (-22.9068, -43.1729) },
];

/// Cities featured on the weather page.
pub fn popular_destinations() -> &'static [PopularDestination] {
    POPULAR
}

/// Short advice list shown next to the widget.
pub const TRAVEL_TIPS: [&str; 5] = [
    "Check weather 7-10 days before your trip",
    "Pack layers for temperature changes",
    "Consider seasonal patterns for your destination",
    "Download offline weather apps for remote areas",
    "Check local weather alerts and warnings",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_known_city() {
        let report = DemoWeather.lookup("Tokyo");
        assert_eq!(report.location, "Tokyo, JP");
        assert_eq!(report.temperature_c, 28);
        assert_eq!(report.condition, Condition::Sunny);
    }

    #[test]
    fn unknown_city_falls_back_to_paris() {
        assert_eq!(DemoWeather.lookup("Atlantis").city, "Paris");
        assert_eq!(DemoWeather.report("").city, "Paris");
    }

    #[test]
    fn lookup_key_is_exact() {
        assert_eq!(DemoWeather.lookup("tokyo").city, "Paris");
    }

    #[test]
    fn find_ignores_case_and_padding() {
        assert_eq!(DemoWeather.find("  rio de janeiro ").map(|r| r.city), Some("Rio de Janeiro"));
        assert!(DemoWeather.find("Atlantis").is_none());
        assert!(DemoWeather.find("   ").is_none());
    }

    #[test]
    fn every_popular_destination_has_demo_data() {
        for destination in popular_destinations() {
            assert!(DemoWeather.find(destination.name).is_some(), "{}", destination.name);
        }
    }

    #[test]
    fn api_condition_mapping() {
        assert_eq!(Condition::from_api_main("Clear"), Condition::Clear);
        assert_eq!(Condition::from_api_main("clouds").icon(), "☁️");
        assert_eq!(Condition::from_api_main("Drizzle"), Condition::PartlyCloudy);
    }

    #[test]
    fn cities_in_selector_order() {
        let cities: Vec<_> = DemoWeather.cities().collect();
        assert_eq!(cities, ["Paris", "Tokyo", "New York", "London", "Sydney", "Rio de Janeiro"]);
    }
}
