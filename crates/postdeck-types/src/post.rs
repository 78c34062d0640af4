//! Post records as delivered by the collection endpoint

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::{CategoryId, PostId};

/// A single content item.
///
/// Records are immutable once fetched. Identity is [`Post::id`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Post identifier
    pub id: PostId,
    /// Headline
    pub title: String,
    /// When the post was published
    pub publish_date: DateTime<Utc>,
    /// Short description shown in listings
    pub summary: String,
    /// Post author
    pub author: Author,
    /// Category tags, in feed order
    pub categories: Vec<Category>,
}

impl Post {
    /// True if any category name contains `needle_upper`.
    ///
    /// `needle_upper` must already be uppercased.
    pub fn has_category_containing(&self, needle_upper: &str) -> bool {
        self.categories
            .iter()
            .any(|category| category.name.to_uppercase().contains(needle_upper))
    }

    /// Category names in feed order.
    pub fn category_names(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|c| c.name.as_str())
    }
}

/// Post author
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    /// Display name
    pub name: String,
    /// Avatar image URL
    pub avatar: String,
}

/// A named tag attached to a post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
}

impl Category {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: CategoryId::new(id),
            name: name.into(),
        }
    }
}

/// Response body of the collection endpoint.
///
/// `posts` is optional on the wire so that callers can tell a missing field
/// apart from an empty collection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostsDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub posts: Option<Vec<Post>>,
}

impl PostsDocument {
    pub fn new(posts: Vec<Post>) -> Self {
        Self { posts: Some(posts) }
    }
}
