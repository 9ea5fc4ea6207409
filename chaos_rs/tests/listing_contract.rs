//! Behavioral contract of the blog listing: filtering, search, pagination and
//! the featured strip, exercised through the public API only.

use chaos::catalog;
use chaos::content::{Category, CategoryFilter, ContentItem};
use chaos::listing::{compute_visible_items, filter_items, ListingQuery};
use pretty_assertions::assert_eq;
use time::macros::date;

fn article(id: &'static str, title: &'static str, category: Category) -> ContentItem {
    ContentItem {
        id,
        slug: id,
        title,
        summary: "",
        body: "",
        published: date!(2024 - 08 - 01),
        author: "Test Author",
        category,
        tags: &[],
        read_minutes: 5,
        featured: false,
    }
}

fn eight_articles() -> Vec<ContentItem> {
    let ids = ["a1", "a2", "a3", "a4", "a5", "a6", "a7", "a8"];
    ids.into_iter()
        .enumerate()
        .map(|(i, id)| {
            let category = Category::ALL[i % Category::ALL.len()];
            let mut item = article(id, id, category);
            item.featured = i % 3 == 0;
            item
        })
        .collect()
}

fn ids<'a>(items: &[&'a ContentItem]) -> Vec<&'a str> {
    items.iter().map(|i| i.id).collect()
}

#[test]
fn search_is_case_insensitive_on_title() {
    let items = [
        article("iceland", "Iceland Photography", Category::Photography),
        article("europe", "Europe Budget", Category::TipsAndGuides),
    ];
    let mut query = ListingQuery::default();
    query.set_search("iceland");

    let listing = compute_visible_items(&items, &query);
    assert_eq!(ids(&listing.filtered), ["iceland"]);
    assert_eq!(ids(&listing.page_items), ["iceland"]);
}

#[test]
fn search_matches_summary_and_tags() {
    let mut by_summary = article("s", "First", Category::Safety);
    by_summary.summary = "Night markets of TAIPEI";
    let mut by_tag = article("t", "Second", Category::Safety);
    by_tag.tags = &["Rail Travel", "Taipei Metro"];
    let other = article("o", "Third", Category::Safety);
    let items = [by_summary, by_tag, other];

    let found = filter_items(&items, CategoryFilter::All, "taipei");
    assert_eq!(ids(&found), ["s", "t"]);
}

#[test]
fn category_then_search() {
    let items = [
        article("p1", "Iceland light", Category::Photography),
        article("d1", "Iceland roads", Category::Destinations),
        article("p2", "Tokyo neon", Category::Photography),
    ];
    let mut query = ListingQuery::default();
    query.select_category(CategoryFilter::Only(Category::Photography));
    query.set_search("ICELAND");

    let listing = compute_visible_items(&items, &query);
    assert_eq!(ids(&listing.filtered), ["p1"]);
}

#[test]
fn eight_items_make_two_pages() {
    let items = eight_articles();
    let mut query = ListingQuery::new(6);

    let first = compute_visible_items(&items, &query);
    assert_eq!(first.total_pages, 2);
    assert_eq!(ids(&first.page_items), ["a1", "a2", "a3", "a4", "a5", "a6"]);
    assert!(first.has_pager());

    assert!(query.go_to_page(2, first.total_pages));
    let second = compute_visible_items(&items, &query);
    assert_eq!(ids(&second.page_items), ["a7", "a8"]);
}

#[test]
fn page_never_exceeds_page_size() {
    let items = eight_articles();
    for size in 1..=10 {
        for page in 0..=10 {
            for filter in CategoryFilter::choices() {
                let mut query = ListingQuery::new(size);
                query.select_category(filter);
                query.go_to_page(page, usize::MAX);
                let listing = compute_visible_items(&items, &query);
                assert!(
                    listing.page_items.len() <= size,
                    "size {size}, page {page}, filter {filter:?}"
                );
            }
        }
    }
}

#[test]
fn out_of_range_page_is_empty_not_clamped() {
    let items = eight_articles();
    let mut query = ListingQuery::new(6);
    query.go_to_page(2, 2);
    query.set_search("a1");
    // set_search reset the page; force it past the end again
    query.go_to_page(5, usize::MAX);

    let listing = compute_visible_items(&items, &query);
    assert_eq!(listing.total_pages, 1);
    assert!(listing.page_items.is_empty());
    assert_eq!(query.page(), 5);
}

#[test]
fn filtering_is_idempotent() {
    let posts = catalog::posts();
    for filter in CategoryFilter::choices() {
        for search in ["", "travel", "ICE", "zzz"] {
            let once = filter_items(posts, filter, search);
            let twice = filter_items(posts, filter, search);
            assert_eq!(once, twice);

            let owned: Vec<ContentItem> = once.iter().map(|i| (*i).clone()).collect();
            let refiltered = filter_items(&owned, filter, search);
            assert_eq!(ids(&refiltered), ids(&once));
        }
    }
}

#[test]
fn filter_changes_reset_page() {
    let mut query = ListingQuery::default();

    assert!(query.go_to_page(2, 2));
    query.select_category(CategoryFilter::Only(Category::Photography));
    assert_eq!(query.page(), 1);

    assert!(query.go_to_page(2, 2));
    query.set_search("iceland");
    assert_eq!(query.page(), 1);

    assert!(query.go_to_page(2, 2));
    query.select_category(CategoryFilter::All);
    assert_eq!(query.page(), 1);

    assert!(query.go_to_page(2, 2));
    query.set_search("");
    assert_eq!(query.page(), 1);
}

#[test]
fn empty_category_keeps_featured() {
    let items = [
        article("a", "A", Category::Photography),
        ContentItem {
            featured: true,
            ..article("b", "B", Category::Destinations)
        },
    ];
    let baseline = compute_visible_items(&items, &ListingQuery::default());

    let mut query = ListingQuery::default();
    query.select_category(CategoryFilter::Only(Category::Sustainability));
    let listing = compute_visible_items(&items, &query);

    assert!(listing.is_empty());
    assert_eq!(listing.total_pages, 0);
    assert_eq!(ids(&listing.featured), ["b"]);
    assert_eq!(listing.featured, baseline.featured);
}

#[test]
fn all_returns_input_order() {
    let posts = catalog::posts();
    let listing = compute_visible_items(posts, &ListingQuery::new(posts.len()));
    let expected: Vec<&ContentItem> = posts.iter().collect();
    assert_eq!(listing.filtered, expected);
    assert_eq!(listing.page_items, expected);
}

#[test]
fn demo_catalog_featured_strip() {
    let listing = compute_visible_items(catalog::posts(), &ListingQuery::default());
    let slugs: Vec<_> = listing.featured.iter().map(|p| p.slug).collect();
    assert_eq!(slugs, ["hidden-gems-southeast-asia", "iceland-photography-spots"]);
    assert_eq!(listing.total_pages, 2);
}
