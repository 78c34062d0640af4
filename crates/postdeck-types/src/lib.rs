//! Postdeck Types - data model for the post browser
//!
//! ## Key Concepts
//!
//! - **Post**: a content item with title, author, summary, publish date and
//!   category tags
//! - **Category**: a named tag; the dimension posts are filtered on
//! - **PostsDocument**: the body returned by the collection endpoint

#![deny(unsafe_code)]
#![cfg_attr(feature = "strict-docs", warn(missing_docs))]
#![cfg_attr(not(feature = "strict-docs"), allow(missing_docs))]

pub mod ids;
pub mod post;

pub use ids::{CategoryId, PostId};
pub use post::{Author, Category, Post, PostsDocument};
