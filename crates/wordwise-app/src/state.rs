use std::sync::{Arc, Mutex};

use anyhow::{Context, anyhow};
use tokio::sync::RwLock;
use wordwise_completion::CompletionClient;
use wordwise_config::Config;
use wordwise_store::{FavoritesStore, FileStore, KeyValueStore};

use crate::profile::default_storage_path;
use crate::requests::RequestTracker;

pub type Favorites = FavoritesStore<Box<dyn KeyValueStore>>;

pub struct AppState {
    pub config: Arc<RwLock<Config>>,
    pub client: CompletionClient,
    pub favorites: Mutex<Favorites>,
    pub requests: RequestTracker,
}

impl AppState {
    pub fn new(config: Config, client: CompletionClient, kv: Box<dyn KeyValueStore>) -> Self {
        let favorites = FavoritesStore::open(kv, config.storage.favorites_key.clone());
        tracing::debug!("Loaded {} favorites", favorites.len());

        Self {
            config: Arc::new(RwLock::new(config)),
            client,
            favorites: Mutex::new(favorites),
            requests: RequestTracker::new(),
        }
    }

    /// HTTP client and file-backed favorites as configured
    pub fn from_config(config: Config) -> anyhow::Result<Self> {
        if config.completion.api_key.is_empty() {
            tracing::warn!(
                "No API key configured (set WORDWISE_API_KEY or GROQ_API_KEY); results will be placeholders"
            );
        }

        let client = CompletionClient::from_config(config.completion.clone())
            .context("failed to build completion client")?;

        let path = config
            .storage
            .path
            .clone()
            .unwrap_or_else(default_storage_path);
        tracing::info!("Favorites stored in {}", path.display());

        Ok(Self::new(config, client, Box::new(FileStore::new(path))))
    }

    /// Run `f` with the favorites store locked
    pub fn with_favorites<T>(&self, f: impl FnOnce(&mut Favorites) -> T) -> anyhow::Result<T> {
        let mut favorites = self
            .favorites
            .lock()
            .map_err(|_| anyhow!("favorites lock poisoned"))?;
        Ok(f(&mut favorites))
    }
}
