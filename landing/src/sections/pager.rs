use chaos::listing::{page_numbers, ListingQuery};
use leptos::prelude::*;

/// "Page 2 of 3".
pub fn page_summary(page: usize, total_pages: usize) -> String {
    format!("Page {page} of {total_pages}")
}

/// Page buttons for a listing. Hidden unless there is more than one page.
#[component]
pub fn Pager(query: RwSignal<ListingQuery>, #[prop(into)] total_pages: Signal<usize>) -> impl IntoView {
    view! {
        <Show when=move || { total_pages.get() > 1 }>
            <nav class="pager" aria-label="Pagination">
                <button
                    class="pager-btn"
                    disabled=move || query.with(|q| q.page() <= 1)
                    on:click=move |_| query.update(|q| {
                        q.previous_page(total_pages.get_untracked());
                    })
                >
                    "← Prev"
                </button>
                {move || {
                    page_numbers(total_pages.get())
                        .map(|page| {
                            view! {
                                <button
                                    class=move || {
                                        if query.with(|q| q.page() == page) { "pager-btn active" } else { "pager-btn" }
                                    }
                                    on:click=move |_| query.update(|q| {
                                        q.go_to_page(page, total_pages.get_untracked());
                                    })
                                >
                                    {page}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
                <button
                    class="pager-btn"
                    disabled=move || query.with(|q| q.page() >= total_pages.get())
                    on:click=move |_| query.update(|q| {
                        q.next_page(total_pages.get_untracked());
                    })
                >
                    "Next →"
                </button>
                <span class="pager-summary">
                    {move || page_summary(query.with(|q| q.page()), total_pages.get())}
                </span>
            </nav>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::page_summary;

    #[test]
    fn summary_label() {
        assert_eq!(page_summary(1, 2), "Page 1 of 2");
        assert_eq!(page_summary(3, 3), "Page 3 of 3");
    }
}
