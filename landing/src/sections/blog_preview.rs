use chaos::catalog;
use chaos::SiteConfig;
use leptos::prelude::*;

use super::PostCard;

/// Most recent articles, for the home page.
#[component]
pub fn BlogPreview() -> impl IntoView {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    let posts = catalog::recent(config.blog.preview_count);

    view! {
        <section class="blog-preview">
            <div class="container">
                <div class="section-header">
                    <p class="section-eyebrow">"From the Blog"</p>
                    <h2 class="section-title">"Latest Travel Stories"</h2>
                </div>
                <div class="post-grid">
                    {posts.into_iter().map(|post| view! { <PostCard post=post /> }).collect::<Vec<_>>()}
                </div>
                <div class="section-actions">
                    <a href="/blog" class="btn btn-secondary">"View All Posts →"</a>
                </div>
            </div>
        </section>
    }
}
