//! Strongly-typed identifiers for posts and categories
//!
//! Upstream feeds are inconsistent about id encoding: some send strings,
//! some send integers. Both are accepted and held as strings.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Wire form of an identifier.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Signed(i64),
    Unsigned(u64),
}

impl From<RawId> for String {
    fn from(raw: RawId) -> Self {
        match raw {
            RawId::Text(s) => s,
            RawId::Signed(n) => n.to_string(),
            RawId::Unsigned(n) => n.to_string(),
        }
    }
}

/// Unique identifier for a post
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "RawId", into = "String")]
pub struct PostId(String);

impl PostId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<RawId> for PostId {
    fn from(raw: RawId) -> Self {
        Self(raw.into())
    }
}

impl From<PostId> for String {
    fn from(id: PostId) -> Self {
        id.0
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "post:{}", self.0)
    }
}

/// Unique identifier for a category
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "RawId", into = "String")]
pub struct CategoryId(String);

impl CategoryId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<RawId> for CategoryId {
    fn from(raw: RawId) -> Self {
        Self(raw.into())
    }
}

impl From<CategoryId> for String {
    fn from(id: CategoryId) -> Self {
        id.0
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "category:{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_id_accepts_string_and_integer() {
        let from_text: PostId = serde_json::from_str("\"a1\"").unwrap();
        let from_int: PostId = serde_json::from_str("42").unwrap();

        assert_eq!(from_text.as_str(), "a1");
        assert_eq!(from_int.as_str(), "42");
    }

    #[test]
    fn test_ids_serialize_as_strings() {
        let id = CategoryId::new("7");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"7\"");
    }

    #[test]
    fn test_id_display() {
        assert_eq!(PostId::new("x").to_string(), "post:x");
        assert_eq!(CategoryId::new("y").to_string(), "category:y");
    }
}
