use chaos::content::ContentItem;
use leptos::prelude::*;

fn post_href(post: &ContentItem) -> String {
    format!("/blog/{}", post.slug)
}

/// Listing card.
#[component]
pub fn PostCard(post: &'static ContentItem) -> impl IntoView {
    view! {
        <a href=post_href(post) class="post-card">
            <div class="post-card-header">
                <span class="post-tag">{post.category.label()}</span>
                <span class="post-meta">{post.published_short()}" · "{post.read_minutes}" min read"</span>
            </div>
            <h3 class="post-title">{post.title}</h3>
            <p class="post-summary">{post.summary}</p>
            <div class="post-footer">
                <span class="post-author">"By "{post.author}</span>
                <span class="post-cta">
                    "Read More"
                    <span class="arrow">"→"</span>
                </span>
            </div>
        </a>
    }
}

/// Larger card for the featured strip.
#[component]
pub fn FeaturedCard(post: &'static ContentItem) -> impl IntoView {
    view! {
        <a href=post_href(post) class="featured-card">
            <span class="featured-badge">"⭐ Featured"</span>
            <span class="post-tag">{post.category.label()}</span>
            <h3 class="featured-title">{post.title}</h3>
            <p class="post-summary">{post.summary}</p>
            <div class="post-meta">
                {post.author}" · "{post.published_label()}" · "{post.read_minutes}" min read"
            </div>
        </a>
    }
}
