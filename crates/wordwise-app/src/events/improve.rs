use std::sync::Arc;

use kanal::AsyncSender;
use wordwise_types::{AppEvent, Operation};

use crate::requests::RequestToken;
use crate::state::AppState;

pub async fn handle_improve(
    state: Arc<AppState>,
    token: RequestToken,
    sentence: String,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    app_to_ui_tx
        .send(AppEvent::Loading {
            operation: Operation::Improve,
            loading: true,
        })
        .await?;

    let outcome = state.client.improve_sentence(&sentence).await;

    if !state.requests.is_latest(token) {
        tracing::info!("Discarding stale sentence improvement");
        return Ok(());
    }

    app_to_ui_tx.send(AppEvent::ShowImprovement(outcome)).await?;
    app_to_ui_tx
        .send(AppEvent::Loading {
            operation: Operation::Improve,
            loading: false,
        })
        .await?;

    Ok(())
}
