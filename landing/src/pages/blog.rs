// Blog page - filterable, searchable, paginated article listing
use chaos::catalog;
use chaos::content::CategoryFilter;
use chaos::listing::{compute_visible_items, ListingQuery};
use chaos::SiteConfig;
use leptos::prelude::*;

use crate::sections::{FeaturedCard, Pager, PostCard};

#[component]
pub fn BlogPage() -> impl IntoView {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let featured_limit = config.blog.featured_limit;
    let query = RwSignal::new(ListingQuery::new(config.blog.page_size));
    let listing = Memo::new(move |_| query.with(|q| compute_visible_items(catalog::posts(), q)));
    let total_pages = Signal::derive(move || listing.with(|l| l.total_pages));

    view! {
        <section class="page-header">
            <div class="container">
                <h1 class="page-title">"Travel Blog"</h1>
                <p class="page-description">
                    "Stories, guides and hard-won lessons from the road"
                </p>
            </div>
        </section>

        <section class="featured">
            <div class="container">
                <h2 class="section-title">"Featured Stories"</h2>
                <div class="featured-grid">
                    {move || {
                        listing.with(|l| {
                            l.featured
                                .iter()
                                .take(featured_limit)
                                .map(|post| view! { <FeaturedCard post=*post /> })
                                .collect::<Vec<_>>()
                        })
                    }}
                </div>
            </div>
        </section>

        <section class="listing">
            <div class="container">
                <div class="listing-controls">
                    <input
                        type="search"
                        class="search-input"
                        placeholder="Search articles..."
                        prop:value=move || query.with(|q| q.search().to_string())
                        on:input=move |ev| query.update(|q| q.set_search(event_target_value(&ev)))
                    />
                    <div class="category-filters">
                        {CategoryFilter::choices()
                            .map(|choice| {
                                view! {
                                    <button
                                        class=move || {
                                            if query.with(|q| q.category() == choice) {
                                                "filter-btn active"
                                            } else {
                                                "filter-btn"
                                            }
                                        }
                                        on:click=move |_| query.update(|q| q.select_category(choice))
                                    >
                                        {choice.label()}
                                    </button>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                </div>

                <Show
                    when=move || !listing.with(|l| l.is_empty())
                    fallback=move || {
                        view! {
                            <div class="empty-state">
                                <div class="empty-state-icon">"🔍"</div>
                                <h3>"No articles found"</h3>
                                <p>"Try a different search term or category."</p>
                                <button
                                    class="btn btn-secondary"
                                    on:click=move |_| query.update(|q| {
                                        q.select_category(CategoryFilter::All);
                                        q.set_search("");
                                    })
                                >
                                    "Clear filters"
                                </button>
                            </div>
                        }
                    }
                >
                    <div class="post-grid">
                        {move || {
                            listing.with(|l| {
                                l.page_items
                                    .iter()
                                    .map(|post| view! { <PostCard post=*post /> })
                                    .collect::<Vec<_>>()
                            })
                        }}
                    </div>
                </Show>

                <Pager query=query total_pages=total_pages />
            </div>
        </section>
    }
}
