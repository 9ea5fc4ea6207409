//! Destinations shown on the interactive map.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Kind of trip a destination is known for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DestinationCategory {
    /// Hiking, glaciers, wilderness
    Adventure,
    /// Temples, history, traditions
    Culture,
    /// Landscapes and wildlife
    Nature,
    /// City breaks
    City,
    /// Islands and coastlines
    Beach,
}

impl DestinationCategory {
    /// All categories in filter bar order.
    pub const ALL: [DestinationCategory; 5] = [
        DestinationCategory::Adventure,
        DestinationCategory::Culture,
        DestinationCategory::Nature,
        DestinationCategory::City,
        DestinationCategory::Beach,
    ];

    /// Lowercase id, as used in the filter state.
    pub fn id(self) -> &'static str {
        match self {
            DestinationCategory::Adventure => "adventure",
            DestinationCategory::Culture => "culture",
            DestinationCategory::Nature => "nature",
            DestinationCategory::City => "city",
            DestinationCategory::Beach => "beach",
        }
    }

    /// Button label.
    pub fn label(self) -> &'static str {
        match self {
            DestinationCategory::Adventure => "Adventure",
            DestinationCategory::Culture => "Culture",
            DestinationCategory::Nature => "Nature",
            DestinationCategory::City => "City",
            DestinationCategory::Beach => "Beach",
        }
    }

    /// Button icon.
    pub fn icon(self) -> &'static str {
        match self {
            DestinationCategory::Adventure => "🏔️",
            DestinationCategory::Culture => "🏛️",
            DestinationCategory::Nature => "🌲",
            DestinationCategory::City => "🏙️",
            DestinationCategory::Beach => "🏖️",
        }
    }

    /// Map pin color.
    pub fn marker_color(self) -> &'static str {
        match self {
            DestinationCategory::Adventure => "#ef4444",
            DestinationCategory::Culture => "#8b5cf6",
            DestinationCategory::Nature => "#22c55e",
            DestinationCategory::City => "#3b82f6",
            DestinationCategory::Beach => "#f59e0b",
        }
    }
}

impl fmt::Display for DestinationCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for DestinationCategory {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DestinationCategory::ALL
            .into_iter()
            .find(|c| c.id() == s)
            .ok_or_else(|| Error::UnknownDestinationCategory(s.to_string()))
    }
}

/// Category selection of the map page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DestinationFilter {
    /// Every destination
    #[default]
    All,
    /// One category
    Only(DestinationCategory),
}

impl DestinationFilter {
    /// Filter bar choices, "All Destinations" first.
    pub fn choices() -> impl Iterator<Item = DestinationFilter> {
        std::iter::once(DestinationFilter::All)
            .chain(DestinationCategory::ALL.into_iter().map(DestinationFilter::Only))
    }

    /// Stable id for keys and state.
    pub fn id(self) -> &'static str {
        match self {
            DestinationFilter::All => "all",
            DestinationFilter::Only(category) => category.id(),
        }
    }

    /// Button label.
    pub fn label(self) -> &'static str {
        match self {
            DestinationFilter::All => "All Destinations",
            DestinationFilter::Only(category) => category.label(),
        }
    }

    /// Button icon.
    pub fn icon(self) -> &'static str {
        match self {
            DestinationFilter::All => "🌍",
            DestinationFilter::Only(category) => category.icon(),
        }
    }

    /// Whether a destination in `category` is shown.
    pub fn matches(self, category: DestinationCategory) -> bool {
        match self {
            DestinationFilter::All => true,
            DestinationFilter::Only(selected) => selected == category,
        }
    }
}

/// A place pinned on the map.
#[derive(Clone, Debug, PartialEq)]
pub struct Destination {
    /// Unique identifier, carried by marker click events
    pub id: &'static str,
    /// Display name
    pub name: &'static str,
    /// Country or region
    pub country: &'static str,
    /// `(latitude, longitude)` in degrees
    pub coordinates: (f64, f64),
    /// One-paragraph pitch
    pub description: &'static str,
    /// Average rating out of 5
    pub rating: f32,
    /// Insider tips for the sidebar
    pub tips: &'static [&'static str],
    /// Free-text season recommendation
    pub best_time: &'static str,
    /// Trip kind
    pub category: DestinationCategory,
}

static DESTINATIONS: &[Destination] = &[
    Destination {
        id: "1",
        name: "Santorini",
        country: "Greece",
        coordinates: (36.3932, 25.4615),
        description: "A stunning Greek island known for its white-washed buildings and incredible sunsets.",
        rating: 4.8,
        tips: &[
            "Visit during sunset for the best views",
            "Book accommodation in Oia for premium sunset views",
            "Try local wines at sunset viewpoints",
        ],
        best_time: "April to October",
        category: DestinationCategory::Beach,
    },
    Destination {
        id: "2",
        name: "Kyoto",
        country: "Japan",
        coordinates: (35.0116, 135.7681),
        description: "Ancient capital with thousands of temples, traditional gardens, and geisha districts.",
        rating: 4.9,
        tips: &[
            "Visit temples early morning to avoid crowds",
            "Try traditional kaiseki cuisine",
            "Rent a kimono for authentic photos",
        ],
        best_time: "March to May, September to November",
        category: DestinationCategory::Culture,
    },
    Destination {
        id: "3",
        name: "Patagonia",
        country: "Chile/Argentina",
        coordinates: (-50.9423, -73.4068),
        description: "Vast wilderness with glaciers, mountains, and incredible hiking opportunities.",
        rating: 4.7,
        tips: &[
            "Pack layers - weather changes quickly",
            "Book accommodations well in advance",
            "Bring good hiking boots",
        ],
        best_time: "December to March",
        category: DestinationCategory::Adventure,
    },
    Destination {
        id: "4",
        name: "Bali",
        country: "Indonesia",
        coordinates: (-8.4095, 115.1889),
        description: "Tropical paradise with temples, rice terraces, and beautiful beaches.",
        rating: 4.6,
        tips: &[
            "Rent a scooter to explore freely",
            "Visit rice terraces early morning",
            "Respect local temple customs",
        ],
        best_time: "April to October",
        category: DestinationCategory::Beach,
    },
    Destination {
        id: "5",
        name: "Iceland",
        country: "Iceland",
        coordinates: (64.9631, -19.0208),
        description: "Land of fire and ice with geysers, waterfalls, and northern lights.",
        rating: 4.8,
        tips: &[
            "Rent a 4WD for Ring Road trip",
            "Visit Blue Lagoon early or late",
            "Check aurora forecasts for northern lights",
        ],
        best_time: "June to August, September to March (aurora)",
        category: DestinationCategory::Nature,
    },
];

/// Every destination, in display order.
pub fn all() -> &'static [Destination] {
    DESTINATIONS
}

/// Look up a destination by id.
pub fn find(id: &str) -> Option<&'static Destination> {
    DESTINATIONS.iter().find(|d| d.id == id)
}

/// Destinations passing `filter`, order preserved.
pub fn filter_destinations(
    destinations: &[Destination],
    filter: DestinationFilter,
) -> Vec<&Destination> {
    destinations
        .iter()
        .filter(|d| filter.matches(d.category))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_by_category() {
        let beaches: Vec<_> = filter_destinations(all(), DestinationFilter::Only(DestinationCategory::Beach))
            .into_iter()
            .map(|d| d.name)
            .collect();
        assert_eq!(beaches, ["Santorini", "Bali"]);
    }

    #[test]
    fn empty_category_filters_everything() {
        assert!(filter_destinations(all(), DestinationFilter::Only(DestinationCategory::City)).is_empty());
    }

    #[test]
    fn all_keeps_order() {
        let names: Vec<_> = filter_destinations(all(), DestinationFilter::All)
            .into_iter()
            .map(|d| d.name)
            .collect();
        assert_eq!(names, ["Santorini", "Kyoto", "Patagonia", "Bali", "Iceland"]);
    }

    #[test]
    fn category_ids_parse() {
        assert_eq!("nature".parse::<DestinationCategory>().unwrap(), DestinationCategory::Nature);
        assert!(matches!(
            "Nature".parse::<DestinationCategory>(),
            Err(Error::UnknownDestinationCategory(_))
        ));
    }

    #[test]
    fn find_by_id() {
        assert_eq!(find("2").map(|d| d.name), Some("Kyoto"));
        assert!(find("99").is_none());
    }

    #[test]
    fn choices_start_with_all() {
        let ids: Vec<_> = DestinationFilter::choices().map(DestinationFilter::id).collect();
        assert_eq!(ids, ["all", "adventure", "culture", "nature", "city", "beach"]);
    }
}
