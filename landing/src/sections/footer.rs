use chaos::SiteConfig;
use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let year = js_sys::Date::new_0().get_full_year();
    let mailto = format!("mailto:{}", config.site.contact_email);

    view! {
        <footer class="footer">
            <div class="container footer-grid">
                <div class="footer-brand">
                    <div class="footer-title">
                        <span class="footer-logo">"🌍"</span>
                        {config.site.name.clone()}
                    </div>
                    <p class="footer-tagline">{config.site.tagline}</p>
                </div>
                <div class="footer-column">
                    <h4 class="footer-heading">"Quick Links"</h4>
                    <a href="/blog" class="footer-link">"Travel Blog"</a>
                    <a href="/map" class="footer-link">"Interactive Map"</a>
                    <a href="/weather" class="footer-link">"Weather"</a>
                    <a href="/contact" class="footer-link">"Contact"</a>
                </div>
                <div class="footer-column">
                    <h4 class="footer-heading">"Contact"</h4>
                    <a href=mailto class="footer-link">{config.site.contact_email}</a>
                    <span class="footer-muted">"We reply within 24 hours"</span>
                </div>
            </div>
            <p class="footer-copyright">
                "© " {year} " " {config.site.name} ". All rights reserved."
            </p>
        </footer>
    }
}
