use leptos::prelude::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="hero">
            <div class="container">
                <div class="hero-content">
                    <div class="hero-badge">
                        <span class="hero-badge-dot"></span>
                        "Stories, maps and weather for your next trip"
                    </div>
                    <h1 class="hero-title">
                        "Embrace the "
                        <span class="hero-title-accent">"beautiful chaos"</span>
                        <br />
                        "of travel."
                    </h1>
                    <p class="hero-description">
                        "Discover hidden gems, plan with the interactive map, check the weather "
                        "before you pack, and read honest stories from the road."
                    </p>
                    <div class="hero-actions">
                        <a href="/blog" class="btn btn-primary">"Explore Blog"</a>
                        <a href="/map" class="btn btn-secondary">"Open the Map →"</a>
                    </div>
                </div>
            </div>
        </section>
    }
}
