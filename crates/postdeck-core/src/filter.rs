//! Category filter
//!
//! Narrows a post collection to the posts carrying at least one category
//! whose name contains the query, ignoring case. An empty query is the
//! identity filter.

use postdeck_types::Post;

/// Substring filter over category names
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryFilter {
    /// Uppercased query; empty means no filtering
    needle: String,
}

impl CategoryFilter {
    /// Build a filter for `query`. The query is used as typed, not trimmed.
    pub fn new(query: &str) -> Self {
        Self {
            needle: query.to_uppercase(),
        }
    }

    /// True when the filter lets every post through
    pub fn is_identity(&self) -> bool {
        self.needle.is_empty()
    }

    /// Check if a post matches this filter
    pub fn matches(&self, post: &Post) -> bool {
        self.is_identity() || post.has_category_containing(&self.needle)
    }

    /// Apply the filter, keeping input order
    pub fn apply<'a>(&self, posts: &'a [Post]) -> Vec<&'a Post> {
        if self.is_identity() {
            return posts.iter().collect();
        }
        posts.iter().filter(|post| self.matches(post)).collect()
    }

    /// Number of posts the filter lets through
    pub fn count(&self, posts: &[Post]) -> usize {
        if self.is_identity() {
            return posts.len();
        }
        posts.iter().filter(|post| self.matches(post)).count()
    }
}

/// Filter `posts` by `query`
pub fn filter_posts<'a>(posts: &'a [Post], query: &str) -> Vec<&'a Post> {
    CategoryFilter::new(query).apply(posts)
}
