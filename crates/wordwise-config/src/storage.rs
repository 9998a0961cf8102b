use std::path::PathBuf;

use serde::{Deserialize, Serialize};

fn default_favorites_key() -> String {
    "@favorites".to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct StorageConfig {
    /// Key-value file location, platform data dir when unset
    #[serde(default)]
    pub path: Option<PathBuf>,
    #[serde(default = "default_favorites_key")]
    pub favorites_key: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: None,
            favorites_key: default_favorites_key(),
        }
    }
}
