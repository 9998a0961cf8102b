use serde::{Deserialize, Serialize};

fn default_max_synonyms() -> usize {
    4
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct UiConfig {
    #[serde(default = "default_max_synonyms")]
    pub max_synonyms: usize,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            max_synonyms: default_max_synonyms(),
        }
    }
}
