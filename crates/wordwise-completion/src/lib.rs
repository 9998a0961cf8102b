mod backend;
mod client;
mod error;
mod normalize;
mod prompt;

pub use backend::{ChatBackend, ChatMessage, ChatRequest, HttpChatBackend, ResponseFormat};
pub use client::CompletionClient;
pub use error::CompletionError;
pub use normalize::{improvement_from_content, word_record_from_content};
