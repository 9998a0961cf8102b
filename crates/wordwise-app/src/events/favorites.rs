use std::sync::Arc;

use kanal::AsyncSender;
use wordwise_types::{AppEvent, WordRecord};

use crate::state::AppState;

pub async fn handle_favorite_toggle(
    state: Arc<AppState>,
    record: WordRecord,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let word = record.word.clone();

    match state.with_favorites(|favorites| favorites.toggle(record))? {
        Ok(saved) => {
            tracing::info!("Favorite {:?} saved={}", word, saved);
            app_to_ui_tx
                .send(AppEvent::FavoriteToggled { word, saved })
                .await?;
        }
        Err(_) => {
            // Already logged by the store
            app_to_ui_tx
                .send(AppEvent::Status(format!("Couldn't update favorites for \"{word}\"")))
                .await?;
        }
    }

    Ok(())
}

pub async fn handle_favorite_removal(
    state: Arc<AppState>,
    word: String,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let (removed, records) = state.with_favorites(|favorites| {
        let removed = favorites.remove(&word);
        (removed, favorites.records().to_vec())
    })?;

    match removed {
        Ok(true) => {
            app_to_ui_tx
                .send(AppEvent::FavoriteToggled { word, saved: false })
                .await?;
            app_to_ui_tx.send(AppEvent::ShowFavorites(records)).await?;
        }
        Ok(false) => {
            app_to_ui_tx
                .send(AppEvent::Status(format!("\"{word}\" is not in favorites")))
                .await?;
        }
        Err(_) => {
            app_to_ui_tx
                .send(AppEvent::Status(format!("Couldn't remove \"{word}\"")))
                .await?;
        }
    }

    Ok(())
}

pub async fn handle_favorites_listing(
    state: Arc<AppState>,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let records = state.with_favorites(|favorites| favorites.load_all().to_vec())?;
    tracing::debug!("Listing {} favorites", records.len());

    app_to_ui_tx.send(AppEvent::ShowFavorites(records)).await?;
    Ok(())
}
