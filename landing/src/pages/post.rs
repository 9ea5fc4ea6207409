// Article page - /blog/:slug
use chaos::catalog;
use chaos::content::{BodyBlock, ContentItem};
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use super::NotFoundPage;

#[component]
pub fn PostPage() -> impl IntoView {
    let params = use_params_map();
    let post = Memo::new(move |_| {
        params
            .with(|p| p.get("slug"))
            .and_then(|slug| catalog::find_by_slug(&slug))
    });

    move || match post.get() {
        Some(post) => view! { <Article post=post /> }.into_any(),
        None => view! { <NotFoundPage /> }.into_any(),
    }
}

#[component]
fn Article(post: &'static ContentItem) -> impl IntoView {
    view! {
        <article class="article">
            <header class="page-header">
                <div class="container">
                    <a href="/blog" class="article-back">"← Back to Blog"</a>
                    <span class="post-tag">{post.category.label()}</span>
                    <h1 class="page-title">{post.title}</h1>
                    <p class="article-meta">
                        "By "{post.author}" · "{post.published_label()}" · "{post.read_minutes}" min read"
                    </p>
                </div>
            </header>
            <div class="container article-body">
                {post
                    .blocks()
                    .into_iter()
                    .map(|block| match block {
                        BodyBlock::Heading(text) => view! { <h2>{text}</h2> }.into_any(),
                        BodyBlock::Paragraph(text) => view! { <p>{text}</p> }.into_any(),
                    })
                    .collect::<Vec<_>>()}
                <div class="article-tags">
                    {post.tags.iter().map(|tag| view! { <span class="tag">"#"{*tag}</span> }).collect::<Vec<_>>()}
                </div>
            </div>
        </article>
    }
}
