use serde::{Deserialize, Serialize};

fn default_api_url() -> String {
    "https://api.groq.com/openai/v1/chat/completions".to_string()
}

fn default_model() -> String {
    "llama-3.3-70b-versatile".to_string()
}

fn default_temperature() -> f32 {
    0.3
}

fn default_lookup_max_tokens() -> u32 {
    800
}

fn default_improve_max_tokens() -> u32 {
    200
}

fn default_json_mode() -> bool {
    true
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct CompletionConfig {
    /// OpenAI-compatible chat completions endpoint
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default = "default_model")]
    pub model: String,
    /// Injected at runtime, never written to a profile
    #[serde(skip_serializing, default)]
    pub api_key: String,
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    #[serde(default = "default_lookup_max_tokens")]
    pub lookup_max_tokens: u32,
    #[serde(default = "default_improve_max_tokens")]
    pub improve_max_tokens: u32,
    /// Ask the provider for `response_format: json_object`
    #[serde(default = "default_json_mode")]
    pub json_mode: bool,
    #[serde(default)]
    pub timeout_seconds: Option<u64>,
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            model: default_model(),
            api_key: String::new(),
            temperature: default_temperature(),
            lookup_max_tokens: default_lookup_max_tokens(),
            improve_max_tokens: default_improve_max_tokens(),
            json_mode: default_json_mode(),
            timeout_seconds: None,
        }
    }
}
