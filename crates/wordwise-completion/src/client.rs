use std::sync::Arc;

use wordwise_config::completion::CompletionConfig;
use wordwise_types::{ImprovementRecord, Outcome, WordRecord};

use crate::backend::{ChatBackend, ChatMessage, ChatRequest, HttpChatBackend, ResponseFormat};
use crate::error::CompletionError;
use crate::normalize::{improvement_from_content, word_record_from_content};
use crate::prompt;

/// Word lookups and sentence rewrites over a chat-completion backend.
///
/// Every call is a single stateless request; clones share the backend.
#[derive(Clone)]
pub struct CompletionClient {
    backend: Arc<dyn ChatBackend>,
    config: CompletionConfig,
}

impl CompletionClient {
    pub fn new(backend: Arc<dyn ChatBackend>, config: CompletionConfig) -> Self {
        Self { backend, config }
    }

    /// Client talking to the configured HTTP endpoint
    pub fn from_config(config: CompletionConfig) -> Result<Self, CompletionError> {
        let backend = HttpChatBackend::new(&config)?;
        Ok(Self::new(Arc::new(backend), config))
    }

    /// Never fails: a provider problem yields `Outcome::Fallback`
    pub async fn lookup_word(&self, term: &str) -> Outcome<WordRecord> {
        match self.try_lookup_word(term).await {
            Ok(record) => Outcome::Fetched(record),
            Err(e) => {
                tracing::warn!("lookup of {:?} failed: {}", term.trim(), e);
                Outcome::Fallback(WordRecord::fallback(term))
            }
        }
    }

    pub async fn try_lookup_word(&self, term: &str) -> Result<WordRecord, CompletionError> {
        let word = term.trim();
        let request = self.request(
            prompt::WORD_SYSTEM,
            prompt::word_prompt(word),
            self.config.lookup_max_tokens,
        );

        let content = self.backend.complete(&request).await?;
        tracing::debug!("lookup content for {:?}: {} bytes", word, content.len());

        word_record_from_content(word, &content)
    }

    /// Never fails: a provider problem yields `Outcome::Fallback`
    pub async fn improve_sentence(&self, text: &str) -> Outcome<ImprovementRecord> {
        match self.try_improve_sentence(text).await {
            Ok(record) => Outcome::Fetched(record),
            Err(e) => {
                tracing::warn!("sentence improvement failed: {}", e);
                Outcome::Fallback(ImprovementRecord::fallback())
            }
        }
    }

    pub async fn try_improve_sentence(&self, text: &str) -> Result<ImprovementRecord, CompletionError> {
        let request = self.request(
            prompt::SENTENCE_SYSTEM,
            prompt::sentence_prompt(text.trim()),
            self.config.improve_max_tokens,
        );

        let content = self.backend.complete(&request).await?;
        improvement_from_content(&content)
    }

    fn request(&self, system: &str, user: String, max_tokens: u32) -> ChatRequest {
        ChatRequest {
            model: self.config.model.clone(),
            messages: vec![ChatMessage::system(system), ChatMessage::user(user)],
            temperature: self.config.temperature,
            max_tokens,
            response_format: self.config.json_mode.then(ResponseFormat::json_object),
        }
    }
}
