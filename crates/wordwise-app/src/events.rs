use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use tokio::task::{JoinError, JoinSet};
use tokio_util::sync::CancellationToken;
use wordwise_types::{AppEvent, Operation, UiEvent};

use crate::state::AppState;

pub mod favorites;
pub mod improve;
pub mod search;

use favorites::{handle_favorite_removal, handle_favorite_toggle, handle_favorites_listing};
use improve::handle_improve;
use search::handle_search;

/// App's main loop
pub async fn event_loop(
    state: Arc<AppState>,
    ui_to_app_rx: AsyncReceiver<UiEvent>,
    app_to_ui_tx: AsyncSender<AppEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    app_to_ui_tx.send(AppEvent::BackendReady).await?;

    // Search/improve handlers in flight; dropping the set aborts them
    let mut handlers: JoinSet<()> = JoinSet::new();

    tracing::info!("[EVENT_LOOP] Starting main loop, waiting for events");
    loop {
        let event = tokio::select! {
            _ = cancel.cancelled() => break,
            Some(joined) = handlers.join_next(), if !handlers.is_empty() => {
                log_join(joined);
                continue;
            }
            event = ui_to_app_rx.recv() => match event {
                Ok(event) => event,
                Err(_) => {
                    tracing::debug!("[EVENT_LOOP] UI channel closed");
                    drain(&mut handlers, &cancel).await;
                    break;
                }
            },
        };

        tracing::debug!(
            "[EVENT_LOOP] EVENT RECEIVED: {:?}",
            std::mem::discriminant(&event)
        );

        if matches!(event, UiEvent::Close) {
            tracing::info!(
                "[EVENT_LOOP] Close requested, {} request(s) pending",
                handlers.len()
            );
            drain(&mut handlers, &cancel).await;
            cancel.cancel();
            break;
        }

        handle_events(state.clone(), &app_to_ui_tx, &mut handlers, event).await?;
    }

    Ok(())
}

/// Let pending handlers publish their results. Cancellation aborts them.
async fn drain(handlers: &mut JoinSet<()>, cancel: &CancellationToken) {
    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                handlers.abort_all();
                return;
            }
            joined = handlers.join_next() => match joined {
                Some(joined) => log_join(joined),
                None => return,
            },
        }
    }
}

fn log_join(joined: Result<(), JoinError>) {
    if let Err(e) = joined
        && e.is_panic()
    {
        tracing::error!("[EVENT_LOOP] request handler panicked: {e}");
    }
}

async fn handle_events(
    state: Arc<AppState>,
    app_to_ui_tx: &AsyncSender<AppEvent>,
    handlers: &mut JoinSet<()>,
    event: UiEvent,
) -> anyhow::Result<()> {
    match event {
        UiEvent::Search(text) => {
            let Some(term) = non_empty(text) else {
                tracing::debug!("Ignoring empty search");
                return Ok(());
            };

            // Token is taken here so tokens follow the order the user acted in;
            // the network call runs off the loop and may be superseded.
            let token = state.requests.begin(Operation::Lookup);
            let tx = app_to_ui_tx.clone();
            handlers.spawn(async move {
                if let Err(e) = handle_search(state, token, term, &tx).await {
                    tracing::error!("search handler failed: {e}");
                }
            });
        }
        UiEvent::Improve(text) => {
            let Some(sentence) = non_empty(text) else {
                tracing::debug!("Ignoring empty sentence");
                return Ok(());
            };

            let token = state.requests.begin(Operation::Improve);
            let tx = app_to_ui_tx.clone();
            handlers.spawn(async move {
                if let Err(e) = handle_improve(state, token, sentence, &tx).await {
                    tracing::error!("improve handler failed: {e}");
                }
            });
        }
        UiEvent::ToggleFavorite(record) => {
            handle_favorite_toggle(state, record, app_to_ui_tx).await?;
        }
        UiEvent::RemoveFavorite(word) => {
            handle_favorite_removal(state, word, app_to_ui_tx).await?;
        }
        UiEvent::ListFavorites => {
            handle_favorites_listing(state, app_to_ui_tx).await?;
        }
        UiEvent::Close => {}
    }

    Ok(())
}

fn non_empty(text: String) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
