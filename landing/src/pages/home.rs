// Home page - hero, quick access cards, latest stories
use crate::sections::{BlogPreview, Hero, WeatherWidget};
use leptos::prelude::*;

const QUICK_LINKS: [(&str, &str, &str, &str); 3] = [
    ("/map", "🗺️", "Interactive Map", "Browse destinations by category and fly straight to them."),
    ("/weather", "🌤️", "Weather", "Check conditions in popular cities before you pack."),
    ("/contact", "✉️", "Plan a Trip", "Tell us where you want to go and we'll help you get there."),
];

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Hero />
        <section class="quick-access">
            <div class="container quick-access-grid">
                <div class="quick-links">
                    {QUICK_LINKS
                        .into_iter()
                        .map(|(href, icon, title, text)| {
                            view! {
                                <a href=href class="quick-card">
                                    <span class="quick-card-icon">{icon}</span>
                                    <h3 class="quick-card-title">{title}</h3>
                                    <p class="quick-card-text">{text}</p>
                                </a>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
                <WeatherWidget />
            </div>
        </section>
        <BlogPreview />
        <section class="cta">
            <div class="container">
                <h2 class="cta-title">"Ready to embrace the chaos?"</h2>
                <p class="cta-text">"Pick a destination on the map or send us your travel questions."</p>
                <div class="hero-actions">
                    <a href="/map" class="btn btn-primary">"Start Exploring"</a>
                    <a href="/contact" class="btn btn-secondary">"Get in Touch"</a>
                </div>
            </div>
        </section>
    }
}
