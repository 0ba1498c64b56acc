use super::error::SentimentServiceError;
use super::model::SentimentLabel;
use crate::infrastructure::clients::{SentimentClient, SentimentError};
use async_trait::async_trait;
use std::sync::Arc;

pub struct SentimentService {
    sentiment_client: Arc<dyn SentimentClient>,
}

impl SentimentService {
    pub fn new(sentiment_client: Arc<dyn SentimentClient>) -> Self {
        Self { sentiment_client }
    }
}

#[async_trait]
pub trait SentimentServiceApi: Send + Sync {
    /// Classify the overall sentiment of a text
    ///
    /// This operation:
    /// - Rejects blank input before any network call
    /// - Sends the text to the analytics backend as a single document
    async fn analyze(&self, text: &str) -> Result<SentimentLabel, SentimentServiceError>;
}

#[async_trait]
impl SentimentServiceApi for SentimentService {
    async fn analyze(&self, text: &str) -> Result<SentimentLabel, SentimentServiceError> {
        // 1. Guard against blank input
        if text.trim().is_empty() {
            return Err(SentimentServiceError::Invalid(
                "Text cannot be empty".to_string(),
            ));
        }

        tracing::info!(text_length = text.len(), "Sentiment analysis request");

        // 2. Ask the analytics backend for a classification
        let label = self
            .sentiment_client
            .analyze(text)
            .await
            .map_err(|e| match e {
                SentimentError::Rejected(msg) => SentimentServiceError::Rejected(msg),
                SentimentError::Transport(msg) => SentimentServiceError::Transport(msg),
                SentimentError::Malformed(msg) => {
                    SentimentServiceError::Other(anyhow::anyhow!(msg))
                }
            })?;

        tracing::info!(sentiment = %label, "Sentiment analysis completed");

        Ok(label)
    }
}
