use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use self::completion::CompletionConfig;
use self::storage::StorageConfig;
use self::ui::UiConfig;

pub mod completion;
pub mod storage;
pub mod ui;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub completion: CompletionConfig,
    pub storage: StorageConfig,
    pub ui: UiConfig,
}

impl Config {
    /// Defaults with environment overrides applied
    pub fn new() -> Self {
        let mut config = Config::default();
        config.apply_env();
        config
    }

    pub fn apply_env(&mut self) {
        self.apply_env_with(|key| env::var(key).ok());
    }

    /// Overlay runtime values. The API key only ever arrives this way.
    pub fn apply_env_with(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(key) = non_empty("WORDWISE_API_KEY").or_else(|| non_empty("GROQ_API_KEY")) {
            self.completion.api_key = key.trim().to_string();
        }

        if let Some(url) = non_empty("WORDWISE_API_URL") {
            self.completion.api_url = url;
        }

        if let Some(model) = non_empty("WORDWISE_MODEL") {
            self.completion.model = model;
        }

        if let Some(timeout) = non_empty("WORDWISE_TIMEOUT_SECONDS").and_then(|v| v.parse().ok()) {
            self.completion.timeout_seconds = Some(timeout);
        }

        if let Some(path) = non_empty("WORDWISE_STORAGE_PATH") {
            self.storage.path = Some(PathBuf::from(path));
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_match_provider_settings() {
        let config = Config::default();
        assert_eq!(config.completion.model, "llama-3.3-70b-versatile");
        assert_eq!(config.completion.temperature, 0.3);
        assert_eq!(config.completion.lookup_max_tokens, 800);
        assert_eq!(config.completion.improve_max_tokens, 200);
        assert!(config.completion.json_mode);
        assert!(config.completion.api_key.is_empty());
        assert_eq!(config.storage.favorites_key, "@favorites");
        assert_eq!(config.ui.max_synonyms, 4);
    }

    #[test]
    fn env_overrides() {
        let mut config = Config::default();
        config.apply_env_with(lookup(&[
            ("GROQ_API_KEY", "gsk_test"),
            ("WORDWISE_MODEL", "mixtral"),
            ("WORDWISE_TIMEOUT_SECONDS", "12"),
            ("WORDWISE_STORAGE_PATH", "/tmp/ww.json"),
        ]));

        assert_eq!(config.completion.api_key, "gsk_test");
        assert_eq!(config.completion.model, "mixtral");
        assert_eq!(config.completion.timeout_seconds, Some(12));
        assert_eq!(config.storage.path, Some(PathBuf::from("/tmp/ww.json")));
    }

    #[test]
    fn wordwise_key_wins_over_groq_key() {
        let mut config = Config::default();
        config.apply_env_with(lookup(&[
            ("GROQ_API_KEY", "groq"),
            ("WORDWISE_API_KEY", "wordwise"),
        ]));
        assert_eq!(config.completion.api_key, "wordwise");
    }

    #[test]
    fn api_key_is_never_serialized() {
        let mut config = Config::default();
        config.completion.api_key = "secret".to_string();

        let json = serde_json::to_string(&config).unwrap();
        assert!(!json.contains("secret"));

        let parsed: Config = serde_json::from_str(r#"{"completion":{"model":"m"}}"#).unwrap();
        assert_eq!(parsed.completion.model, "m");
        assert_eq!(parsed.completion.lookup_max_tokens, 800);
    }
}
