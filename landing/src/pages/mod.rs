// Routed pages

mod blog;
mod contact;
mod home;
mod map;
mod not_found;
mod post;
mod weather;

pub use blog::BlogPage;
pub use contact::ContactPage;
pub use home::HomePage;
pub use map::MapPage;
pub use not_found::NotFoundPage;
pub use post::PostPage;
pub use weather::WeatherPage;
