//! Blog article model.
//!
//! Articles are `'static` demo data, so every text field borrows from the
//! binary. Categories are a closed enum; the "no filter" choice is modelled
//! separately by [`CategoryFilter`] so it can never be stored on an article.

use std::fmt;
use std::str::FromStr;

use time::Date;
use time::macros::format_description;

use crate::error::Error;

/// Topic an article is filed under.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    /// Destination guides
    Destinations,
    /// Practical how-tos
    TipsAndGuides,
    /// Photography spots and technique
    Photography,
    /// Staying safe on the road
    Safety,
    /// Responsible travel
    Sustainability,
    /// Food and culture
    FoodAndCulture,
}

impl Category {
    /// All categories in the order the filter bar shows them.
    pub const ALL: [Category; 6] = [
        Category::Destinations,
        Category::TipsAndGuides,
        Category::Photography,
        Category::Safety,
        Category::Sustainability,
        Category::FoodAndCulture,
    ];

    /// Display label, also the exact string accepted by [`FromStr`].
    pub fn label(self) -> &'static str {
        match self {
            Category::Destinations => "Destinations",
            Category::TipsAndGuides => "Tips & Guides",
            Category::Photography => "Photography",
            Category::Safety => "Safety",
            Category::Sustainability => "Sustainability",
            Category::FoodAndCulture => "Food & Culture",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = Error;

    /// Case-sensitive: `"photography"` is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.label() == s)
            .ok_or_else(|| Error::UnknownCategory(s.to_string()))
    }
}

/// Category selection of a listing view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CategoryFilter {
    /// No filter
    #[default]
    All,
    /// Only articles in this category
    Only(Category),
}

impl CategoryFilter {
    /// Label of the sentinel entry in the filter bar.
    pub const ALL_LABEL: &'static str = "All";

    /// Every choice of the filter bar, sentinel first.
    pub fn choices() -> impl Iterator<Item = CategoryFilter> {
        std::iter::once(CategoryFilter::All).chain(Category::ALL.into_iter().map(CategoryFilter::Only))
    }

    /// Whether an article in `category` passes this filter.
    pub fn matches(self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(selected) => selected == category,
        }
    }

    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            CategoryFilter::All => Self::ALL_LABEL,
            CategoryFilter::Only(category) => category.label(),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == Self::ALL_LABEL {
            return Ok(CategoryFilter::All);
        }
        s.parse().map(CategoryFilter::Only)
    }
}

/// One blog article.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContentItem {
    /// Unique identifier
    pub id: &'static str,
    /// URL slug under `/blog/`
    pub slug: &'static str,
    /// Headline
    pub title: &'static str,
    /// Teaser shown on cards
    pub summary: &'static str,
    /// Article text: `# ` headings and blank-line separated paragraphs
    pub body: &'static str,
    /// Publication date
    pub published: Date,
    /// Author display name
    pub author: &'static str,
    /// Topic
    pub category: Category,
    /// Free-text tags, also searched
    pub tags: &'static [&'static str],
    /// Estimated reading time in minutes
    pub read_minutes: u32,
    /// Promoted in the featured strip regardless of filters
    pub featured: bool,
}

/// A block of an article body.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BodyBlock {
    /// `# ` heading line, marker stripped
    Heading(&'static str),
    /// Paragraph text
    Paragraph(&'static str),
}

impl ContentItem {
    /// Split the body into headings and paragraphs.
    ///
    /// Blocks are separated by blank lines; a block starting with `# ` is a
    /// heading. Empty blocks are dropped.
    pub fn blocks(&self) -> Vec<BodyBlock> {
        self.body
            .split("\n\n")
            .map(str::trim)
            .filter(|block| !block.is_empty())
            .map(|block| match block.strip_prefix("# ") {
                Some(heading) => BodyBlock::Heading(heading.trim()),
                None => BodyBlock::Paragraph(block),
            })
            .collect()
    }

    /// Publication date as `Aug 20, 2024`.
    pub fn published_label(&self) -> String {
        self.published
            .format(format_description!("[month repr:short] [day padding:none], [year]"))
            .unwrap_or_else(|_| self.published.to_string())
    }

    /// Publication date as `Aug 20`.
    pub fn published_short(&self) -> String {
        self.published
            .format(format_description!("[month repr:short] [day padding:none]"))
            .unwrap_or_else(|_| self.published.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_labels_round_trip() {
        for category in Category::ALL {
            assert_eq!(category.label().parse::<Category>().unwrap(), category);
        }
    }

    #[test]
    fn category_parse_is_case_sensitive() {
        assert!(matches!(
            "photography".parse::<Category>(),
            Err(Error::UnknownCategory(label)) if label == "photography"
        ));
        assert!("Tips & guides".parse::<Category>().is_err());
    }

    #[test]
    fn filter_parses_sentinel() {
        assert_eq!("All".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
        assert_eq!(
            "Safety".parse::<CategoryFilter>().unwrap(),
            CategoryFilter::Only(Category::Safety)
        );
        assert!("all".parse::<CategoryFilter>().is_err());
    }

    #[test]
    fn filter_choices_start_with_all() {
        let labels: Vec<_> = CategoryFilter::choices().map(CategoryFilter::label).collect();
        assert_eq!(
            labels,
            [
                "All",
                "Destinations",
                "Tips & Guides",
                "Photography",
                "Safety",
                "Sustainability",
                "Food & Culture"
            ]
        );
    }

    #[test]
    fn body_splits_into_blocks() {
        let post = crate::catalog::find_by_slug("iceland-photography-spots").unwrap();
        let blocks = post.blocks();
        assert_eq!(blocks[0], BodyBlock::Heading("Photography in Iceland"));
        assert!(matches!(blocks[1], BodyBlock::Paragraph(p) if p.starts_with("Iceland is")));
        assert_eq!(blocks[2], BodyBlock::Heading("Light"));
        assert_eq!(blocks.len(), 4);
    }

    #[test]
    fn date_labels() {
        let post = crate::catalog::find_by_slug("hidden-gems-southeast-asia").unwrap();
        assert_eq!(post.published_label(), "Aug 20, 2024");
        assert_eq!(post.published_short(), "Aug 20");
    }

    #[test]
    fn all_matches_every_category() {
        assert!(Category::ALL.into_iter().all(|c| CategoryFilter::All.matches(c)));
        let only = CategoryFilter::Only(Category::Safety);
        assert!(only.matches(Category::Safety));
        assert!(!only.matches(Category::Photography));
    }
}
