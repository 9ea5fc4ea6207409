use chaos::SiteConfig;
use leptos::prelude::*;
use leptos_router::hooks::use_location;

const LINKS: [(&str, &str); 5] = [
    ("/", "Home"),
    ("/blog", "Blog"),
    ("/map", "Map"),
    ("/weather", "Weather"),
    ("/contact", "Contact"),
];

/// Whether the link for `href` is the current page. `/blog` stays active on
/// article pages.
pub fn is_active(href: &str, pathname: &str) -> bool {
    if href == "/" {
        return pathname == "/";
    }
    pathname == href || pathname.starts_with(&format!("{href}/"))
}

#[component]
pub fn Nav() -> impl IntoView {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let location = use_location();
    let (menu_open, set_menu_open) = signal(false);

    view! {
        <nav class="nav">
            <div class="container nav-inner">
                <a href="/" class="nav-brand" on:click=move |_| set_menu_open.set(false)>
                    <span class="nav-logo">"🌍"</span>
                    <span class="nav-title">{config.site.name}</span>
                </a>
                <button
                    class="nav-toggle"
                    aria-label="Toggle navigation"
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    {move || if menu_open.get() { "✕" } else { "☰" }}
                </button>
                <div class=move || if menu_open.get() { "nav-links open" } else { "nav-links" }>
                    {LINKS
                        .into_iter()
                        .map(|(href, label)| {
                            view! {
                                <a
                                    href=href
                                    class=move || {
                                        if location.pathname.with(|path| is_active(href, path)) {
                                            "nav-link active"
                                        } else {
                                            "nav-link"
                                        }
                                    }
                                    on:click=move |_| set_menu_open.set(false)
                                >
                                    {label}
                                </a>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::is_active;

    #[test]
    fn home_is_exact() {
        assert!(is_active("/", "/"));
        assert!(!is_active("/", "/blog"));
    }

    #[test]
    fn section_links_cover_subpages() {
        assert!(is_active("/blog", "/blog"));
        assert!(is_active("/blog", "/blog/japan-by-rail"));
        assert!(!is_active("/blog", "/blogroll"));
        assert!(!is_active("/map", "/weather"));
    }
}
