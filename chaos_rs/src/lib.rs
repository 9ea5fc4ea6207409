//! # chaos
//!
//! Domain core for the **Just Embrace Chaos** travel site.
//!
//! Everything the site shows is fixed demo data compiled into the binary. This
//! crate holds that data together with the small amount of logic that sits on
//! top of it, so the Leptos front end in `landing/` stays a thin view layer and
//! the logic can be tested natively.
//!
//! ## Modules
//!
//! - [`content`] - Blog article model and category enums
//! - [`catalog`] - The demo article catalog
//! - [`listing`] - Category filter, text search and pagination for the blog
//! - [`destinations`] - Map destinations and their categories
//! - [`map`] - Marker records handed to the map widget
//! - [`weather`] - Static weather lookup table
//! - [`contact`] - Contact form model and Formspree response handling
//! - [`config`] - `site.toml` configuration
//!
//! ## Quick Start
//!
//! ```rust
//! use chaos::catalog;
//! use chaos::content::CategoryFilter;
//! use chaos::listing::{compute_visible_items, ListingQuery};
//!
//! let mut query = ListingQuery::default();
//! query.select_category(CategoryFilter::All);
//! query.set_search("iceland");
//!
//! let listing = compute_visible_items(catalog::posts(), &query);
//! assert_eq!(listing.page_items.len(), 1);
//! assert_eq!(listing.total_pages, 1);
//! ```

#![warn(missing_docs)]

pub mod catalog;
pub mod config;
pub mod contact;
pub mod content;
pub mod destinations;
mod error;
pub mod listing;
pub mod map;
pub mod weather;

pub use config::SiteConfig;
pub use error::{Error, Result};
