//! Site configuration.
//!
//! The landing crate embeds `landing/site.toml` at build time and parses it
//! with [`SiteConfig::from_toml_str`]. Every field has a default, so a partial
//! file only overrides what it names.

use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::listing::DEFAULT_PAGE_SIZE;

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Max log level for the browser console (trace, debug, info, warn, error)
    pub log_level: String,
    /// Branding and contact details
    pub site: BrandConfig,
    /// Blog listing
    pub blog: BlogConfig,
    /// Weather widget
    pub weather: WeatherConfig,
    /// Map widget
    pub map: MapConfig,
    /// Contact form
    pub contact: ContactConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            site: BrandConfig::default(),
            blog: BlogConfig::default(),
            weather: WeatherConfig::default(),
            map: MapConfig::default(),
            contact: ContactConfig::default(),
        }
    }
}

/// Branding
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct BrandConfig {
    /// Brand name in nav and footer
    pub name: String,
    /// Footer blurb
    pub tagline: String,
    /// Public contact address
    pub contact_email: String,
    /// Canonical site URL
    pub base_url: String,
}

impl Default for BrandConfig {
    fn default() -> Self {
        Self {
            name: "Just Embrace Chaos".to_string(),
            tagline: "Your ultimate travel companion for discovering amazing destinations, \
                      getting weather updates, and embracing the beautiful chaos of wanderlust."
                .to_string(),
            contact_email: "hello@justembracechaos.com".to_string(),
            base_url: "https://just-embrace-chaos.github.io".to_string(),
        }
    }
}

/// Blog listing
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BlogConfig {
    /// Articles per listing page
    pub page_size: usize,
    /// How many featured stories the featured strip shows
    pub featured_limit: usize,
    /// How many recent posts the home page previews
    pub preview_count: usize,
}

impl Default for BlogConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            featured_limit: 2,
            preview_count: 2,
        }
    }
}

/// Weather widget
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct WeatherConfig {
    /// City selected when the widget mounts
    pub default_city: String,
    /// Artificial lookup delay in milliseconds
    pub latency_ms: u64,
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            default_city: "Paris".to_string(),
            latency_ms: 500,
        }
    }
}

/// Map widget
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    /// Tile URL template
    pub tile_url: String,
    /// Tile attribution HTML
    pub attribution: String,
    /// Initial `[lat, lng]`
    pub center: [f64; 2],
    /// Initial zoom
    pub zoom: u8,
    /// Zoom used when flying to a selected destination
    pub focus_zoom: u8,
    /// Fly animation length in seconds
    pub fly_duration_secs: f64,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            tile_url: "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png".to_string(),
            attribution: r#"&copy; <a href="https://www.openstreetmap.org/copyright">OpenStreetMap</a> contributors"#
                .to_string(),
            center: [20.0, 0.0],
            zoom: 2,
            focus_zoom: 8,
            fly_duration_secs: 1.5,
        }
    }
}

/// Contact form
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    /// Formspree form id
    pub formspree_form_id: String,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            formspree_form_id: "YOUR_FORMSPREE_ID".to_string(),
        }
    }
}

impl SiteConfig {
    /// Parse a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Parse a TOML document, falling back to defaults on error.
    pub fn from_toml_str_or_default(content: &str) -> Self {
        Self::from_toml_str(content).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "invalid site config, using defaults");
            Self::default()
        })
    }

    /// Read and parse a config file.
    pub fn read(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Load config from a specific path.
    /// Returns default config if the file doesn't exist or is invalid.
    pub fn load_from_path(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match Self::read(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "using default site config");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.log_level, "info");
        assert_eq!(config.blog.page_size, 6);
        assert_eq!(config.blog.featured_limit, 2);
        assert_eq!(config.weather.default_city, "Paris");
        assert_eq!(config.weather.latency_ms, 500);
        assert_eq!(config.map.center, [20.0, 0.0]);
        assert_eq!(config.map.zoom, 2);
        assert_eq!(config.contact.formspree_form_id, "YOUR_FORMSPREE_ID");
    }

    #[test]
    fn test_load_missing_file() {
        let temp = TempDir::new().expect("temp dir");
        let config = SiteConfig::load_from_path(&temp.path().join("site.toml"));
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn test_load_partial_config() {
        let temp = TempDir::new().expect("temp dir");
        let config_path = temp.path().join("site.toml");
        let mut file = std::fs::File::create(&config_path).expect("create config");
        writeln!(
            file,
            r#"
log_level = "debug"

[blog]
page_size = 3

[contact]
formspree_form_id = "mzzbqwer"
"#
        )
        .expect("write config");

        let config = SiteConfig::load_from_path(&config_path);
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.blog.page_size, 3);
        assert_eq!(config.blog.featured_limit, 2);
        assert_eq!(config.contact.formspree_form_id, "mzzbqwer");
        assert_eq!(config.map, MapConfig::default());
    }

    #[test]
    fn test_load_invalid_config() {
        let temp = TempDir::new().expect("temp dir");
        let config_path = temp.path().join("site.toml");
        std::fs::write(&config_path, "[blog\npage_size = ").expect("write config");

        assert!(matches!(SiteConfig::read(&config_path), Err(Error::ConfigParse(_))));
        assert_eq!(SiteConfig::load_from_path(&config_path), SiteConfig::default());
    }

    #[test]
    fn test_read_missing_file_is_error() {
        let temp = TempDir::new().expect("temp dir");
        let err = SiteConfig::read(&temp.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, Error::ConfigRead { .. }));
        assert!(err.to_string().contains("nope.toml"));
    }

    #[test]
    fn test_wrong_type_falls_back() {
        let config = SiteConfig::from_toml_str_or_default("[weather]\nlatency_ms = \"soon\"\n");
        assert_eq!(config.weather.latency_ms, 500);
    }
}
