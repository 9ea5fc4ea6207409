// Just Embrace Chaos - travel site, Leptos 0.8 CSR

mod formspree;
mod leaflet;
mod logging;
mod pages;
mod sections;

use chaos::SiteConfig;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;
use pages::*;
use sections::{Footer, Nav};

/// Embedded at build time; edit and rebuild to reconfigure.
const SITE_TOML: &str = include_str!("../site.toml");

fn main() {
    console_error_panic_hook::set_once();

    let config = SiteConfig::from_toml_str_or_default(SITE_TOML);
    logging::init(&config.log_level);
    tracing::info!(version = env!("CARGO_PKG_VERSION"), site = %config.site.name, "mounting");

    leptos::mount::mount_to_body(move || {
        provide_context(config);
        view! { <App /> }
    });
}

#[component]
fn App() -> impl IntoView {
    view! {
        <Router>
            <Nav />
            <main class="main">
                <Routes fallback=|| view! { <NotFoundPage /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/blog") view=BlogPage />
                    <Route path=path!("/blog/:slug") view=PostPage />
                    <Route path=path!("/map") view=MapPage />
                    <Route path=path!("/weather") view=WeatherPage />
                    <Route path=path!("/contact") view=ContactPage />
                </Routes>
            </main>
            <Footer />
        </Router>
    }
}
