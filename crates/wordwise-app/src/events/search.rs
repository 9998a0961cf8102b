use std::sync::Arc;

use kanal::AsyncSender;
use wordwise_types::{AppEvent, Operation};

use crate::requests::RequestToken;
use crate::state::AppState;

pub async fn handle_search(
    state: Arc<AppState>,
    token: RequestToken,
    term: String,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    app_to_ui_tx
        .send(AppEvent::Loading {
            operation: Operation::Lookup,
            loading: true,
        })
        .await?;

    let outcome = state.client.lookup_word(&term).await;

    if !state.requests.is_latest(token) {
        tracing::info!("Discarding stale lookup for {:?}", term);
        return Ok(());
    }

    let is_favorite = state.with_favorites(|favorites| favorites.contains(&outcome.get().word))?;

    app_to_ui_tx
        .send(AppEvent::ShowWord {
            record: outcome,
            is_favorite,
        })
        .await?;
    app_to_ui_tx
        .send(AppEvent::Loading {
            operation: Operation::Lookup,
            loading: false,
        })
        .await?;

    Ok(())
}
