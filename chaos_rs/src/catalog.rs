//! The demo article catalog.
//!
//! Fixed for the lifetime of the process. A CMS would replace this module;
//! nothing else in the crate mutates or reorders the slice.

use time::macros::date;

use crate::content::{Category, ContentItem};

static POSTS: &[ContentItem] = &[
    ContentItem {
        id: "1",
        slug: "hidden-gems-southeast-asia",
        title: "Hidden Gems of Southeast Asia: Beyond the Tourist Trail",
        summary: "Discover breathtaking locations off the beaten path in Southeast Asia that will leave you mesmerized and wanting more.",
        body: "# Hidden Gems of Southeast Asia\n\n\
               Southeast Asia is known for its popular destinations like Bali, Thailand, and Singapore. \
               But venture off the beaten path, and you'll discover hidden treasures.\n\n\
               # Where to start\n\n\
               Take the slow boat down the Mekong, spend a week in the limestone valleys of northern Vietnam, \
               and leave room in the plan for the village nobody told you about.",
        published: date!(2024 - 08 - 20),
        author: "Sarah Chen",
        category: Category::Destinations,
        tags: &["Southeast Asia", "Hidden Gems", "Adventure"],
        read_minutes: 8,
        featured: true,
    },
    ContentItem {
        id: "2",
        slug: "budget-travel-europe",
        title: "Budget Travel Tips for Europe: Exploring Without Breaking the Bank",
        summary: "Learn how to explore Europe affordably with insider tips on accommodation, transportation, and dining.",
        body: "# Budget Travel Tips for Europe\n\n\
               Europe doesn't have to be expensive. With these proven strategies, you can explore the continent \
               on a shoestring budget.\n\n\
               # Getting around\n\n\
               Night trains double as accommodation, regional rail passes beat point-to-point tickets, \
               and lunch menus cost half of what dinner does.",
        published: date!(2024 - 08 - 18),
        author: "Mike Rodriguez",
        category: Category::TipsAndGuides,
        tags: &["Budget Travel", "Europe", "Money Saving"],
        read_minutes: 12,
        featured: false,
    },
    ContentItem {
        id: "3",
        slug: "iceland-photography-spots",
        title: "Best Photography Spots in Iceland: Capturing the Land of Fire and Ice",
        summary: "From dramatic waterfalls to stunning northern lights, discover Iceland's most photogenic locations.",
        body: "# Photography in Iceland\n\n\
               Iceland is a photographer's paradise. From the otherworldly landscapes to the dancing northern lights, \
               every turn of the Ring Road is a frame.\n\n\
               # Light\n\n\
               Summer gives you a sun that barely sets; winter gives you the aurora. Plan for both.",
        published: date!(2024 - 08 - 15),
        author: "Emma Thompson",
        category: Category::Photography,
        tags: &["Iceland", "Photography", "Landscape"],
        read_minutes: 10,
        featured: true,
    },
    ContentItem {
        id: "4",
        slug: "solo-female-travel-safety",
        title: "Solo Female Travel Safety: Essential Tips for Confident Adventures",
        summary: "Comprehensive guide to staying safe while traveling solo as a woman, with practical tips from experienced travelers.",
        body: "# Solo Female Travel Safety\n\n\
               Traveling solo as a woman can be incredibly empowering and rewarding. Here are essential safety tips.\n\n\
               # Before you go\n\n\
               Share your itinerary, book the first night in advance, and save offline maps of every city you land in.",
        published: date!(2024 - 08 - 12),
        author: "Lisa Park",
        category: Category::Safety,
        tags: &["Solo Travel", "Female Travel", "Safety"],
        read_minutes: 15,
        featured: false,
    },
    ContentItem {
        id: "5",
        slug: "sustainable-travel-guide",
        title: "Sustainable Travel: How to Explore the World Responsibly",
        summary: "Learn how to minimize your environmental impact while traveling and support local communities.",
        body: "# Sustainable Travel Guide\n\n\
               Traveling sustainably is more important than ever. Here's how you can explore the world \
               while being environmentally conscious.\n\n\
               # Spend locally\n\n\
               Family-run guesthouses, local guides and market food keep your money in the places you visit.",
        published: date!(2024 - 08 - 10),
        author: "David Kim",
        category: Category::Sustainability,
        tags: &["Sustainable Travel", "Eco-friendly", "Responsible Tourism"],
        read_minutes: 9,
        featured: false,
    },
    ContentItem {
        id: "6",
        slug: "street-food-capitals",
        title: "Food Adventures: Street Food Capitals of the World",
        summary: "Embark on a culinary journey through the world's best street food destinations and learn what to try.",
        body: "# World's Best Street Food\n\n\
               Street food offers an authentic taste of local culture. Here are the top destinations for food lovers.\n\n\
               # Follow the queue\n\n\
               The stall with the longest line of locals is almost always the right one.",
        published: date!(2024 - 08 - 08),
        author: "Maria Garcia",
        category: Category::FoodAndCulture,
        tags: &["Street Food", "Culinary Travel", "Food Culture"],
        read_minutes: 11,
        featured: false,
    },
    ContentItem {
        id: "7",
        slug: "japan-by-rail",
        title: "Slow Travel by Rail: Crossing Japan on Local Trains",
        summary: "Skip the bullet train and see rural Japan from the window of a two-car local line.",
        body: "# Japan by Rail\n\n\
               The shinkansen is fast, but the local lines are where the country opens up.\n\n\
               # Passes\n\n\
               Seasonal regional passes cover unlimited local trains for a fraction of a national pass.",
        published: date!(2024 - 08 - 05),
        author: "Kenji Watanabe",
        category: Category::Destinations,
        tags: &["Japan", "Rail Travel", "Slow Travel"],
        read_minutes: 7,
        featured: false,
    },
    ContentItem {
        id: "8",
        slug: "one-bag-packing",
        title: "Packing Light: One Bag for Every Climate",
        summary: "A tested carry-on packing list that works from the tropics to the Arctic circle.",
        body: "# Packing Light\n\n\
               Everything you need fits in one bag once you stop packing for imaginary situations.\n\n\
               # Layers\n\n\
               A merino base, a fleece and a shell cover more climates than any single heavy jacket.",
        published: date!(2024 - 08 - 02),
        author: "Mike Rodriguez",
        category: Category::TipsAndGuides,
        tags: &["Packing", "Carry-on", "Gear"],
        read_minutes: 6,
        featured: false,
    },
];

/// Every article, in catalog order.
pub fn posts() -> &'static [ContentItem] {
    POSTS
}

/// Look up an article by its URL slug.
pub fn find_by_slug(slug: &str) -> Option<&'static ContentItem> {
    let found = POSTS.iter().find(|post| post.slug == slug);
    if found.is_none() {
        tracing::debug!(slug, "no article for slug");
    }
    found
}

/// The `count` most recently published articles, newest first.
pub fn recent(count: usize) -> Vec<&'static ContentItem> {
    let mut posts: Vec<_> = POSTS.iter().collect();
    posts.sort_by(|a, b| b.published.cmp(&a.published));
    posts.truncate(count);
    posts
}

/// Categories that have at least one article, in first-seen catalog order.
pub fn categories() -> Vec<Category> {
    let mut seen = Vec::new();
    for post in POSTS {
        if !seen.contains(&post.category) {
            seen.push(post.category);
        }
    }
    seen
}
