#[derive(Debug, thiserror::Error)]
pub enum CompletionError {
    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("API error ({status}): {message}")]
    ApiError { status: u16, message: String },

    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    #[error("Authentication error")]
    AuthenticationError,

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("No message content in response")]
    MissingContent,

    #[error("Malformed content: {0}")]
    MalformedContent(String),
}
