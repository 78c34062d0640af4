//! Browser state store
//!
//! All browser state lives in one [`BrowserState`] value updated by
//! [`reduce`]. A query change and its page reset land in the same
//! transition, so no consumer ever sees one without the other.
//!
//! [`BrowserStore`] owns the state for one mount and publishes a fresh
//! [`ViewModel`] whenever a dispatched action changes what would be
//! rendered.

use std::num::NonZeroUsize;

use postdeck_types::Post;
use serde::{Deserialize, Serialize};
use tokio::sync::watch;

use crate::filter::CategoryFilter;
use crate::load::LoadState;
use crate::paginate::{clamp_page, total_pages, DEFAULT_PAGE_SIZE};
use crate::view::ViewModel;

/// Text the user typed into the category filter
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub query: String,
}

/// Current page, 1-based
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    pub current_page: usize,
}

impl Default for PageState {
    fn default() -> Self {
        Self { current_page: 1 }
    }
}

/// Page navigation target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageTarget {
    First,
    Previous,
    Next,
    Last,
}

/// State transitions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Fetch settled with the collection
    LoadSucceeded(Vec<Post>),
    /// Fetch settled with an error
    LoadFailed(String),
    /// Filter text edited
    QueryChanged(String),
    /// Page navigation
    Navigate(PageTarget),
}

/// Complete browser state for one mount
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowserState {
    pub load: LoadState,
    pub filter: FilterState,
    pub page: PageState,
    page_size: NonZeroUsize,
}

impl Default for BrowserState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl BrowserState {
    /// Fresh state: loading, no filter, page 1
    pub fn new(page_size: NonZeroUsize) -> Self {
        Self {
            load: LoadState::Loading,
            filter: FilterState::default(),
            page: PageState::default(),
            page_size,
        }
    }

    pub fn page_size(&self) -> NonZeroUsize {
        self.page_size
    }

    /// Total pages of the filtered collection; `None` unless loaded
    pub fn total_pages(&self) -> Option<usize> {
        let posts = self.load.posts()?;
        let matching = CategoryFilter::new(&self.filter.query).count(posts);
        Some(total_pages(matching, self.page_size))
    }
}

/// Apply `action` to `state`
pub fn reduce(mut state: BrowserState, action: Action) -> BrowserState {
    match action {
        Action::LoadSucceeded(posts) => {
            if state.load.is_loading() {
                state.load = LoadState::Ready(posts);
            } else {
                tracing::warn!("Ignoring load result: posts already settled");
            }
        }
        Action::LoadFailed(message) => {
            if state.load.is_loading() {
                state.load = LoadState::Failed(message);
            } else {
                tracing::warn!(error = %message, "Ignoring load failure: posts already settled");
            }
        }
        Action::QueryChanged(query) => {
            state.filter.query = query;
            state.page.current_page = 1;
        }
        Action::Navigate(target) => {
            let Some(total) = state.total_pages() else {
                tracing::debug!(nav = ?target, "Ignoring navigation: posts not loaded");
                return state;
            };
            let last = total.max(1);
            let current = state.page.current_page;
            state.page.current_page = match target {
                PageTarget::First => 1,
                PageTarget::Previous => current.saturating_sub(1).max(1),
                PageTarget::Next => (current + 1).min(last),
                PageTarget::Last => last,
            };
        }
    }

    // Result count may have changed; keep the page in range.
    if let Some(total) = state.total_pages() {
        state.page.current_page = clamp_page(state.page.current_page, total);
    }
    state
}

/// State container for one mount
pub struct BrowserStore {
    state: BrowserState,
    publisher: watch::Sender<ViewModel>,
}

impl Default for BrowserStore {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl BrowserStore {
    pub fn new(page_size: NonZeroUsize) -> Self {
        let state = BrowserState::new(page_size);
        let (publisher, _) = watch::channel(ViewModel::compose(&state));
        Self { state, publisher }
    }

    pub fn state(&self) -> &BrowserState {
        &self.state
    }

    /// Current view-model
    pub fn view(&self) -> ViewModel {
        ViewModel::compose(&self.state)
    }

    /// Subscribe to view-model updates
    pub fn subscribe(&self) -> watch::Receiver<ViewModel> {
        self.publisher.subscribe()
    }

    /// Apply an action. Returns true if the view-model changed.
    pub fn dispatch(&mut self, action: Action) -> bool {
        tracing::debug!(action = action_name(&action), "Dispatch");

        let state = std::mem::take(&mut self.state);
        self.state = reduce(state, action);

        let view = ViewModel::compose(&self.state);
        self.publisher.send_if_modified(|current| {
            if *current == view {
                false
            } else {
                *current = view;
                true
            }
        })
    }

    /// Filter text changed
    pub fn on_query_change(&mut self, query: impl Into<String>) -> bool {
        self.dispatch(Action::QueryChanged(query.into()))
    }

    /// Navigation requested
    pub fn on_page_change(&mut self, target: PageTarget) -> bool {
        self.dispatch(Action::Navigate(target))
    }
}

fn action_name(action: &Action) -> &'static str {
    match action {
        Action::LoadSucceeded(_) => "load_succeeded",
        Action::LoadFailed(_) => "load_failed",
        Action::QueryChanged(_) => "query_changed",
        Action::Navigate(_) => "navigate",
    }
}
