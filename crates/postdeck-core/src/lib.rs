//! # Postdeck Core - data shaping for the post browser
//!
//! This crate decides which posts are visible at any time. Rendering is left
//! to whoever consumes the [`ViewModel`].
//!
//! ## Pipeline
//!
//! - **[`LoadController`]**: fetches the collection once per mount from a
//!   [`PostSource`] and settles to `Ready` or `Failed`
//! - **[`CategoryFilter`]**: case-insensitive substring match on category
//!   names; an empty query lets everything through
//! - **[`paginate`]**: fixed-size 1-based page windows
//! - **[`BrowserStore`]**: single state container with a reducer; a query
//!   change resets the page in the same transition
//! - **[`ViewModel`]**: loading / error / ready page, published to
//!   subscribers on every change
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use postdeck_core::{BrowserStore, HttpPostSource, LoadController, PageTarget};
//! use tokio::sync::mpsc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let source = Arc::new(HttpPostSource::new("http://localhost:3000/api/posts")?);
//! let mut store = BrowserStore::default();
//!
//! let (tx, mut rx) = mpsc::unbounded_channel();
//! let _load = LoadController::new(source).spawn(tx);
//!
//! if let Some(action) = rx.recv().await {
//!     store.dispatch(action);
//! }
//! store.on_query_change("tech");
//! store.on_page_change(PageTarget::Next);
//! println!("{}", serde_json::to_string_pretty(&store.view())?);
//! # Ok(())
//! # }
//! ```
//!
//! ## Failure handling
//!
//! Transport errors, non-success statuses, undecodable bodies and documents
//! without a `posts` field all end in `LoadState::Failed` with the error
//! message. There is no retry; a new mount starts over.

pub mod config;
pub mod error;
pub mod filter;
pub mod load;
pub mod paginate;
pub mod source;
pub mod store;
pub mod view;

#[cfg(test)]
mod test_support;

// Re-export main types
pub use config::{BrowserConfig, DEFAULT_ENDPOINT};
pub use error::{ConfigError, ConfigResult, FetchError, FetchResult};
pub use filter::{filter_posts, CategoryFilter};
pub use load::{LoadController, LoadHandle, LoadOutcome, LoadState};
pub use paginate::{clamp_page, paginate, total_pages, PageWindow, DEFAULT_PAGE_SIZE};
pub use source::{HttpPostSource, PostSource, StaticPostSource};
pub use store::{reduce, Action, BrowserState, BrowserStore, FilterState, PageState, PageTarget};
pub use view::{PageView, ViewModel};

pub use postdeck_types as types;
