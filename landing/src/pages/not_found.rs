// Fallback for unknown routes and slugs
use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <section class="not-found">
            <div class="container">
                <div class="not-found-code">"404"</div>
                <h1 class="page-title">"Lost in transit"</h1>
                <p class="page-description">"This page took a detour we can't follow."</p>
                <a href="/" class="btn btn-primary">"Back to Home"</a>
            </div>
        </section>
    }
}
