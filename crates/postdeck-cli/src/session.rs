//! Browsing sessions
//!
//! A session owns the store and is the only place actions are dispatched.
//! The background load reports back over a channel, so every state change
//! goes through this loop.

use postdeck_core::{Action, BrowserStore, LoadHandle, PageTarget, ViewModel};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::mpsc;

use crate::commands::{Command, HELP};
use crate::error::{CliError, CliResult};
use crate::output::{self, OutputFormat};

/// Wait for the load, move to `page`, print one view.
///
/// A failed load is returned as an error after the view is printed.
pub async fn run_once(
    mut store: BrowserStore,
    mut actions: mpsc::UnboundedReceiver<Action>,
    load: LoadHandle,
    page: Option<usize>,
    format: OutputFormat,
) -> CliResult<()> {
    if let Some(action) = actions.recv().await {
        store.dispatch(action);
    }
    load.join().await;

    if let Some(page) = page {
        go_to_page(&mut store, page);
    }

    let view = store.view();
    output::print_view(&view, format)?;

    match view {
        ViewModel::Error { message } => Err(CliError::LoadFailed(message)),
        _ => Ok(()),
    }
}

/// Render on every change and apply commands read from `input` until quit
/// or end of input. Commands are held until the load settles. Returns the
/// view last rendered. Leaving the loop cancels a load still in flight.
pub async fn run_interactive<R>(
    mut store: BrowserStore,
    mut actions: mpsc::UnboundedReceiver<Action>,
    load: LoadHandle,
    input: R,
    format: OutputFormat,
) -> CliResult<ViewModel>
where
    R: AsyncBufRead + Unpin,
{
    let mut views = store.subscribe();
    let mut lines = input.lines();

    let mut shown = views.borrow_and_update().clone();
    output::print_view(&shown, format)?;

    loop {
        let settled = !store.state().load.is_loading();

        tokio::select! {
            biased;

            action = actions.recv(), if !settled => {
                let Some(action) = action else {
                    tracing::warn!("Load ended without a result");
                    break;
                };
                store.dispatch(action);
            }
            Ok(()) = views.changed() => {
                shown = views.borrow_and_update().clone();
                output::print_view(&shown, format)?;
            }
            line = lines.next_line(), if settled => {
                let Some(line) = line? else {
                    tracing::debug!("End of input");
                    break;
                };
                match Command::parse(&line) {
                    Ok(Some(Command::Filter(query))) => {
                        store.on_query_change(query);
                    }
                    Ok(Some(Command::Page(target))) => {
                        if !store.on_page_change(target) {
                            tracing::debug!(nav = ?target, "Navigation had no effect");
                        }
                    }
                    Ok(Some(Command::Help)) => output::print_info(HELP),
                    Ok(Some(Command::Quit)) => break,
                    Ok(None) => {}
                    Err(message) => output::print_warning(&message),
                }
            }
        }
    }

    load.cancel();
    Ok(shown)
}

/// Step forward from page 1 to `page`, stopping at the last page
fn go_to_page(store: &mut BrowserStore, page: usize) {
    store.on_page_change(PageTarget::First);
    for _ in 1..page {
        if !store.on_page_change(PageTarget::Next) {
            break;
        }
    }
}
