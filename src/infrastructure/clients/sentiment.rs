use crate::domain::sentiment::SentimentLabel;
use async_trait::async_trait;

/// Client for a sentiment analysis backend.
#[async_trait]
pub trait SentimentClient: Send + Sync {
    /// Classify the overall sentiment of a text
    ///
    /// # Errors
    /// Returns error if the service rejects the request, cannot be reached,
    /// or answers with something the client cannot interpret
    async fn analyze(&self, text: &str) -> Result<SentimentLabel, SentimentError>;
}

/// Failures reported by a sentiment backend.
#[derive(Debug, thiserror::Error)]
pub enum SentimentError {
    /// The service refused the request.
    #[error("{0}")]
    Rejected(String),

    /// The service could not be reached at all.
    #[error("{0}")]
    Transport(String),

    /// The response did not contain a usable document score.
    #[error("{0}")]
    Malformed(String),
}
