//! One-shot loading of the post collection
//!
//! A [`LoadController`] fetches once per mount. Running it consumes the
//! controller, so a second fetch needs a new mount. The outcome is either
//! delivered directly from [`LoadController::run`] or, when spawned, sent
//! to the store's event loop as an [`Action`].
//!
//! Loading can be cancelled. A fetch that settles after cancellation is
//! discarded and never reaches the store.

use std::sync::Arc;

use postdeck_types::Post;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

use crate::source::PostSource;
use crate::store::Action;

/// Load lifecycle of the post collection.
///
/// Transitions only go `Loading -> Ready` or `Loading -> Failed`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadState {
    /// Fetch in flight
    #[default]
    Loading,
    /// Collection fetched
    Ready(Vec<Post>),
    /// Fetch or decode failed
    Failed(String),
}

impl LoadState {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    /// Posts, if loaded
    pub fn posts(&self) -> Option<&[Post]> {
        match self {
            LoadState::Ready(posts) => Some(posts),
            _ => None,
        }
    }
}

/// Settled result of a load
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    Ready(Vec<Post>),
    Failed(String),
}

impl From<LoadOutcome> for LoadState {
    fn from(outcome: LoadOutcome) -> Self {
        match outcome {
            LoadOutcome::Ready(posts) => LoadState::Ready(posts),
            LoadOutcome::Failed(message) => LoadState::Failed(message),
        }
    }
}

impl From<LoadOutcome> for Action {
    fn from(outcome: LoadOutcome) -> Self {
        match outcome {
            LoadOutcome::Ready(posts) => Action::LoadSucceeded(posts),
            LoadOutcome::Failed(message) => Action::LoadFailed(message),
        }
    }
}

/// Fetches the post collection once
pub struct LoadController {
    source: Arc<dyn PostSource>,
}

impl LoadController {
    pub fn new(source: Arc<dyn PostSource>) -> Self {
        Self { source }
    }

    /// Fetch the collection, racing the fetch against `cancel`.
    ///
    /// Returns `None` when cancelled first. A dropped cancel sender counts as
    /// cancellation: nobody is left to receive the result.
    pub async fn run(self, mut cancel: watch::Receiver<bool>) -> Option<LoadOutcome> {
        tracing::debug!("Loading posts");

        tokio::select! {
            biased;
            _ = cancelled(&mut cancel) => {
                tracing::debug!("Load cancelled before completion");
                None
            }
            result = self.source.fetch_posts() => {
                if *cancel.borrow() {
                    tracing::debug!("Load settled after cancellation; discarding");
                    return None;
                }
                Some(match result {
                    Ok(posts) => {
                        tracing::info!(count = posts.len(), "Posts loaded");
                        LoadOutcome::Ready(posts)
                    }
                    Err(e) => {
                        tracing::error!(error = %e, "Failed to load posts");
                        LoadOutcome::Failed(e.to_string())
                    }
                })
            }
        }
    }

    /// Run on a background task, sending the outcome to `actions`
    pub fn spawn(self, actions: mpsc::UnboundedSender<Action>) -> LoadHandle {
        let (cancel_tx, cancel_rx) = watch::channel(false);

        let task = tokio::spawn(async move {
            if let Some(outcome) = self.run(cancel_rx).await {
                if actions.send(outcome.into()).is_err() {
                    tracing::debug!("Store dropped before load settled");
                }
            }
        });

        LoadHandle {
            cancel: cancel_tx,
            task: Some(task),
        }
    }
}

async fn cancelled(cancel: &mut watch::Receiver<bool>) {
    // Err means the sender is gone, which is treated the same way.
    let _ = cancel.wait_for(|flag| *flag).await;
}

/// Handle to a spawned load. Dropping it cancels the load.
pub struct LoadHandle {
    cancel: watch::Sender<bool>,
    task: Option<JoinHandle<()>>,
}

impl LoadHandle {
    /// Signal cancellation. The outcome, if any arrives later, is discarded.
    pub fn cancel(&self) {
        self.cancel.send_replace(true);
    }

    pub fn is_finished(&self) -> bool {
        self.task.as_ref().map_or(true, JoinHandle::is_finished)
    }

    /// Wait for the background task to end
    pub async fn join(mut self) {
        if let Some(task) = self.task.take() {
            if let Err(e) = task.await {
                tracing::warn!(error = %e, "Load task ended abnormally");
            }
        }
    }
}

impl Drop for LoadHandle {
    fn drop(&mut self) {
        if self.task.is_some() {
            self.cancel.send_replace(true);
        }
    }
}
