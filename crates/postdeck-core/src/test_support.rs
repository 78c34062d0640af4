//! Fixtures shared by unit tests

use chrono::{TimeZone, Utc};
use postdeck_types::{Author, Category, Post, PostId};

pub(crate) fn post_with_categories(id: &str, categories: &[&str]) -> Post {
    Post {
        id: PostId::new(id),
        title: format!("Post {id}"),
        publish_date: Utc.with_ymd_and_hms(2021, 3, 1, 12, 0, 0).unwrap(),
        summary: format!("Summary of post {id}"),
        author: Author {
            name: "Grace".into(),
            avatar: "https://example.com/grace.png".into(),
        },
        categories: categories
            .iter()
            .enumerate()
            .map(|(i, name)| Category::new(i.to_string(), *name))
            .collect(),
    }
}

/// Posts "1" through "n", all in "General"
pub(crate) fn numbered_posts(n: usize) -> Vec<Post> {
    (1..=n)
        .map(|i| post_with_categories(&i.to_string(), &["General"]))
        .collect()
}
