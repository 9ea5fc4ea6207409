// Shared page sections

mod blog_preview;
mod footer;
mod hero;
mod map_widget;
mod nav;
mod pager;
mod post_card;
mod weather_widget;

pub use blog_preview::BlogPreview;
pub use footer::Footer;
pub use hero::Hero;
pub use map_widget::MapWidget;
pub use nav::Nav;
pub use pager::Pager;
pub use post_card::{FeaturedCard, PostCard};
pub use weather_widget::{WeatherCard, WeatherWidget};
