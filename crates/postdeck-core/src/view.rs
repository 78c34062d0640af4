//! Render-ready view-model
//!
//! Serializes to the shape renderers consume:
//!
//! ```json
//! {"status":"loading"}
//! {"status":"error","message":"network error: ..."}
//! {"status":"ready","visible":[...],"resultCount":12,"currentPage":1,"totalPages":3}
//! ```

use postdeck_types::Post;
use serde::{Deserialize, Serialize};

use crate::filter::CategoryFilter;
use crate::load::LoadState;
use crate::paginate::{clamp_page, paginate, total_pages};
use crate::store::BrowserState;

/// What the renderer should show
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ViewModel {
    Loading,
    Error { message: String },
    Ready(PageView),
}

/// A page of filtered posts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageView {
    /// Posts on the current page
    pub visible: Vec<Post>,
    /// Posts matching the filter, across all pages
    pub result_count: usize,
    /// Current page after clamping
    pub current_page: usize,
    /// Pages in the filtered result; 0 when nothing matches
    pub total_pages: usize,
}

impl ViewModel {
    /// Derive the view-model from browser state.
    ///
    /// Filtering and pagination only run once posts are loaded.
    pub fn compose(state: &BrowserState) -> Self {
        match &state.load {
            LoadState::Loading => ViewModel::Loading,
            LoadState::Failed(message) => ViewModel::Error {
                message: message.clone(),
            },
            LoadState::Ready(posts) => {
                let filtered = CategoryFilter::new(&state.filter.query).apply(posts);
                let total = total_pages(filtered.len(), state.page_size());
                let current_page = clamp_page(state.page.current_page, total);
                let window = paginate(&filtered, current_page, state.page_size());

                ViewModel::Ready(PageView {
                    visible: window.visible.iter().map(|post| (*post).clone()).collect(),
                    result_count: filtered.len(),
                    current_page,
                    total_pages: window.total_pages,
                })
            }
        }
    }

    pub fn page(&self) -> Option<&PageView> {
        match self {
            ViewModel::Ready(page) => Some(page),
            _ => None,
        }
    }

    pub fn current_page(&self) -> Option<usize> {
        self.page().map(|page| page.current_page)
    }

    /// Loaded, but nothing matches the filter
    pub fn is_empty_result(&self) -> bool {
        self.page().is_some_and(|page| page.result_count == 0)
    }
}

impl PageView {
    pub fn can_go_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn can_go_next(&self) -> bool {
        self.current_page < self.total_pages
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{reduce, Action, PageTarget};
    use crate::test_support::{numbered_posts, post_with_categories};

    fn ids(view: &ViewModel) -> Vec<String> {
        view.page()
            .map(|page| page.visible.iter().map(|p| p.id.as_str().to_string()).collect())
            .unwrap_or_default()
    }

    #[test]
    fn test_loading_view() {
        let view = ViewModel::compose(&BrowserState::default());
        assert_eq!(view, ViewModel::Loading);
        assert_eq!(serde_json::to_value(&view).unwrap(), serde_json::json!({"status": "loading"}));
    }

    #[test]
    fn test_error_view_has_no_visible_posts() {
        let state = reduce(BrowserState::default(), Action::LoadFailed("network error: refused".into()));
        let view = ViewModel::compose(&state);

        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["status"], "error");
        assert_eq!(json["message"], "network error: refused");
        assert!(json.get("visible").is_none());
    }

    #[test]
    fn test_twelve_posts_scenario() {
        let mut state = reduce(BrowserState::default(), Action::LoadSucceeded(numbered_posts(12)));

        let view = ViewModel::compose(&state);
        assert_eq!(ids(&view), vec!["1", "2", "3", "4", "5"]);
        let page = view.page().unwrap();
        assert_eq!((page.result_count, page.current_page, page.total_pages), (12, 1, 3));
        assert!(!page.can_go_previous());
        assert!(page.can_go_next());

        state = reduce(state, Action::Navigate(PageTarget::Next));
        assert_eq!(ids(&ViewModel::compose(&state)), vec!["6", "7", "8", "9", "10"]);

        state = reduce(state, Action::Navigate(PageTarget::Next));
        assert_eq!(ids(&ViewModel::compose(&state)), vec!["11", "12"]);

        state = reduce(state, Action::Navigate(PageTarget::Next));
        let view = ViewModel::compose(&state);
        assert_eq!(view.current_page(), Some(3));
        assert!(!view.page().unwrap().can_go_next());
    }

    #[test]
    fn test_filter_scenario() {
        let posts = vec![
            post_with_categories("tech", &["Technology"]),
            post_with_categories("life", &["Lifestyle"]),
        ];
        let state = reduce(BrowserState::default(), Action::LoadSucceeded(posts));
        let state = reduce(state, Action::QueryChanged("TECH".into()));

        let view = ViewModel::compose(&state);
        assert_eq!(ids(&view), vec!["tech"]);
        assert_eq!(view.page().unwrap().result_count, 1);
    }

    #[test]
    fn test_empty_result_view() {
        let state = reduce(BrowserState::default(), Action::LoadSucceeded(numbered_posts(3)));
        let state = reduce(state, Action::QueryChanged("nothing matches this".into()));

        let view = ViewModel::compose(&state);
        assert!(view.is_empty_result());
        let page = view.page().unwrap();
        assert_eq!((page.current_page, page.total_pages), (1, 0));
        assert!(!page.can_go_next());
    }

    #[test]
    fn test_ready_json_shape() {
        let state = reduce(BrowserState::default(), Action::LoadSucceeded(numbered_posts(1)));
        let json = serde_json::to_value(ViewModel::compose(&state)).unwrap();

        assert_eq!(json["status"], "ready");
        assert_eq!(json["resultCount"], 1);
        assert_eq!(json["currentPage"], 1);
        assert_eq!(json["totalPages"], 1);
        assert_eq!(json["visible"][0]["publishDate"], "2021-03-01T12:00:00Z");
    }

    #[test]
    fn test_view_model_round_trips_through_json() {
        let state = reduce(BrowserState::default(), Action::LoadSucceeded(numbered_posts(2)));
        let view = ViewModel::compose(&state);

        let parsed: ViewModel = serde_json::from_str(&serde_json::to_string(&view).unwrap()).unwrap();
        assert_eq!(parsed, view);
    }
}
