//! Listing filter/paginator for the blog view.
//!
//! [`ListingQuery`] is the per-view state (category, search text, page).
//! [`compute_visible_items`] is a pure function of the article collection and
//! that state. Keeping the page reset inside the named transitions means the
//! computation itself never has to clamp or correct the page.
//!
//! # Empty results
//!
//! When nothing matches, [`Listing::total_pages`] is `0` and the view renders
//! its "no articles found" branch instead of a pager. A page number beyond the
//! last page yields an empty slice rather than an error.

use std::ops::RangeInclusive;

use crate::content::{CategoryFilter, ContentItem};

/// Articles per page unless `site.toml` says otherwise.
pub const DEFAULT_PAGE_SIZE: usize = 6;

/// Mutable filter/search/page state of one listing view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListingQuery {
    category: CategoryFilter,
    search: String,
    page: usize,
    page_size: usize,
}

impl Default for ListingQuery {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl ListingQuery {
    /// Fresh state: no filter, empty search, page 1.
    ///
    /// A `page_size` of zero is treated as one.
    pub fn new(page_size: usize) -> Self {
        Self {
            category: CategoryFilter::All,
            search: String::new(),
            page: 1,
            page_size: page_size.max(1),
        }
    }

    /// Selected category filter.
    pub fn category(&self) -> CategoryFilter {
        self.category
    }

    /// Current search text, untrimmed.
    pub fn search(&self) -> &str {
        &self.search
    }

    /// Current 1-based page.
    pub fn page(&self) -> usize {
        self.page
    }

    /// Articles per page.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Change the category filter and go back to page 1.
    pub fn select_category(&mut self, category: CategoryFilter) {
        self.category = category;
        self.page = 1;
    }

    /// Change the search text and go back to page 1.
    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
        self.page = 1;
    }

    /// Move to `page` if it lies in `1..=total_pages`.
    ///
    /// Returns `false` and leaves the state untouched otherwise.
    pub fn go_to_page(&mut self, page: usize, total_pages: usize) -> bool {
        if page == 0 || page > total_pages {
            return false;
        }
        self.page = page;
        true
    }

    /// Step forward one page, bounded by `total_pages`.
    pub fn next_page(&mut self, total_pages: usize) -> bool {
        self.go_to_page(self.page.saturating_add(1), total_pages)
    }

    /// Step back one page, bounded by page 1.
    pub fn previous_page(&mut self, total_pages: usize) -> bool {
        match self.page.checked_sub(1) {
            Some(page) => self.go_to_page(page, total_pages),
            None => false,
        }
    }
}

/// Everything a listing view renders for one state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Listing<'a> {
    /// Items passing both the category and the search filter, input order
    pub filtered: Vec<&'a ContentItem>,
    /// The current page's slice of `filtered`
    pub page_items: Vec<&'a ContentItem>,
    /// `ceil(filtered.len() / page_size)`; zero when nothing matches
    pub total_pages: usize,
    /// Featured items of the unfiltered input, input order
    pub featured: Vec<&'a ContentItem>,
}

impl Listing<'_> {
    /// Whether the view should show its empty-state message.
    pub fn is_empty(&self) -> bool {
        self.filtered.is_empty()
    }

    /// Whether a pager is worth rendering.
    pub fn has_pager(&self) -> bool {
        self.total_pages > 1
    }
}

/// Filter, search and paginate `items` for `query`.
pub fn compute_visible_items<'a>(items: &'a [ContentItem], query: &ListingQuery) -> Listing<'a> {
    let filtered = filter_items(items, query.category, &query.search);
    let total_pages = total_pages(filtered.len(), query.page_size);
    let page_items = page_slice(&filtered, query.page, query.page_size).to_vec();

    tracing::debug!(
        category = query.category.label(),
        search = %query.search,
        page = query.page,
        matched = filtered.len(),
        total_pages,
        "computed listing"
    );

    Listing {
        filtered,
        page_items,
        total_pages,
        featured: featured(items),
    }
}

/// Category filter first, then text search, preserving input order.
pub fn filter_items<'a>(
    items: &'a [ContentItem],
    category: CategoryFilter,
    search: &str,
) -> Vec<&'a ContentItem> {
    let needle = search.to_lowercase();
    items
        .iter()
        .filter(|item| category.matches(item.category))
        .filter(|item| matches_search(item, &needle))
        .collect()
}

/// `needle` must already be lowercased.
fn matches_search(item: &ContentItem, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    item.title.to_lowercase().contains(needle)
        || item.summary.to_lowercase().contains(needle)
        || item.tags.iter().any(|tag| tag.to_lowercase().contains(needle))
}

/// Featured items, unaffected by any filter.
pub fn featured(items: &[ContentItem]) -> Vec<&ContentItem> {
    items.iter().filter(|item| item.featured).collect()
}

/// Number of pages needed for `count` items.
pub fn total_pages(count: usize, page_size: usize) -> usize {
    count.div_ceil(page_size.max(1))
}

/// Page numbers for the pager buttons.
pub fn page_numbers(total_pages: usize) -> RangeInclusive<usize> {
    1..=total_pages
}

fn page_slice<'s, T>(items: &'s [T], page: usize, page_size: usize) -> &'s [T] {
    let Some(start) = page.checked_sub(1).map(|p| p.saturating_mul(page_size)) else {
        return &[];
    };
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Category;
    use pretty_assertions::assert_eq;
    use time::macros::date;

    fn item(id: &'static str, category: Category, featured: bool) -> ContentItem {
        ContentItem {
            id,
            slug: id,
            title: id,
            summary: "",
            body: "",
            published: date!(2024 - 01 - 01),
            author: "Test",
            category,
            tags: &[],
            read_minutes: 1,
            featured,
        }
    }

    #[test]
    fn new_query_starts_on_first_page() {
        let query = ListingQuery::default();
        assert_eq!(query.category(), CategoryFilter::All);
        assert_eq!(query.search(), "");
        assert_eq!(query.page(), 1);
        assert_eq!(query.page_size(), DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn zero_page_size_is_bumped_to_one() {
        assert_eq!(ListingQuery::new(0).page_size(), 1);
        assert_eq!(total_pages(3, 0), 3);
    }

    #[test]
    fn go_to_page_rejects_out_of_range() {
        let mut query = ListingQuery::default();
        assert!(!query.go_to_page(0, 3));
        assert!(!query.go_to_page(4, 3));
        assert_eq!(query.page(), 1);
        assert!(query.go_to_page(3, 3));
        assert_eq!(query.page(), 3);
    }

    #[test]
    fn next_and_previous_stop_at_edges() {
        let mut query = ListingQuery::default();
        assert!(!query.previous_page(2));
        assert!(query.next_page(2));
        assert_eq!(query.page(), 2);
        assert!(!query.next_page(2));
        assert!(query.previous_page(2));
        assert_eq!(query.page(), 1);
    }

    #[test]
    fn page_change_keeps_filters() {
        let mut query = ListingQuery::default();
        query.select_category(CategoryFilter::Only(Category::Safety));
        query.set_search("solo");
        query.go_to_page(2, 2);
        assert_eq!(query.category(), CategoryFilter::Only(Category::Safety));
        assert_eq!(query.search(), "solo");
        assert_eq!(query.page(), 2);
    }

    #[test]
    fn page_slice_clamps_to_length() {
        let items = [1, 2, 3, 4, 5, 6, 7, 8];
        assert_eq!(page_slice(&items, 1, 6), &[1, 2, 3, 4, 5, 6]);
        assert_eq!(page_slice(&items, 2, 6), &[7, 8]);
        assert!(page_slice(&items, 3, 6).is_empty());
        assert!(page_slice(&items, 0, 6).is_empty());
        assert!(page_slice(&items, usize::MAX, 6).is_empty());
    }

    #[test]
    fn empty_collection_has_no_pages() {
        let listing = compute_visible_items(&[], &ListingQuery::default());
        assert!(listing.is_empty());
        assert!(!listing.has_pager());
        assert_eq!(listing.total_pages, 0);
        assert!(listing.page_items.is_empty());
        assert!(listing.featured.is_empty());
    }

    #[test]
    fn category_filter_preserves_order() {
        let items = [
            item("a", Category::Safety, false),
            item("b", Category::Photography, false),
            item("c", Category::Safety, false),
        ];
        let ids: Vec<_> = filter_items(&items, CategoryFilter::Only(Category::Safety), "")
            .iter()
            .map(|i| i.id)
            .collect();
        assert_eq!(ids, ["a", "c"]);
    }

    #[test]
    fn search_is_not_trimmed() {
        let mut iceland = item("iceland", Category::Photography, false);
        iceland.title = "Iceland";
        let items = [iceland];
        assert_eq!(filter_items(&items, CategoryFilter::All, "iceland").len(), 1);
        assert!(filter_items(&items, CategoryFilter::All, " iceland").is_empty());
    }

    #[test]
    fn page_numbers_cover_every_page() {
        assert_eq!(page_numbers(3).collect::<Vec<_>>(), [1, 2, 3]);
        assert_eq!(page_numbers(0).count(), 0);
    }

    #[test]
    fn next_page_at_max_page_stays_put() {
        let mut query = ListingQuery::default();
        assert!(query.go_to_page(usize::MAX, usize::MAX));
        query.next_page(usize::MAX);
        assert_eq!(query.page(), usize::MAX);
        assert!(!query.next_page(3));
        assert_eq!(query.page(), usize::MAX);
    }
}
