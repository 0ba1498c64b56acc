use super::sentiment::{SentimentClient, SentimentError};
use crate::domain::sentiment::SentimentLabel;
use crate::infrastructure::config::Config;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Azure Text Analytics implementation of the sentiment client.
///
/// Uses the v3.1 sentiment endpoint with a single-document batch:
/// `{"documents": [{"id": "1", "text": "..."}]}`.
pub struct AzureSentimentClient {
    http_client: reqwest::Client,
    subscription_key: String,
    sentiment_url: String,
}

#[derive(Debug, Serialize)]
struct DocumentBatch<'a> {
    documents: Vec<Document<'a>>,
}

#[derive(Debug, Serialize)]
struct Document<'a> {
    id: &'a str,
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct SentimentResponse {
    #[serde(default)]
    documents: Vec<ScoredDocument>,
    #[serde(default)]
    errors: Vec<DocumentError>,
}

#[derive(Debug, Deserialize)]
struct ScoredDocument {
    sentiment: String,
}

#[derive(Debug, Deserialize)]
struct DocumentError {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    message: String,
}

impl AzureSentimentClient {
    pub fn new(http_client: reqwest::Client, config: &Config) -> Self {
        Self {
            http_client,
            subscription_key: config.language_key.clone(),
            sentiment_url: config.sentiment_url(),
        }
    }
}

#[async_trait]
impl SentimentClient for AzureSentimentClient {
    async fn analyze(&self, text: &str) -> Result<SentimentLabel, SentimentError> {
        let body = DocumentBatch {
            documents: vec![Document { id: "1", text }],
        };

        let response = self
            .http_client
            .post(&self.sentiment_url)
            .header("Ocp-Apim-Subscription-Key", &self.subscription_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Text analytics service unreachable");
                SentimentError::Transport(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let detail = response
                .text()
                .await
                .unwrap_or_else(|_| "no details provided".to_string());
            tracing::error!(
                status = %status.as_u16(),
                detail = %detail,
                "Sentiment analysis rejected"
            );
            return Err(SentimentError::Rejected(format!(
                "{} {} - {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("unknown status"),
                detail
            )));
        }

        let scored: SentimentResponse = response
            .json()
            .await
            .map_err(|e| SentimentError::Malformed(e.to_string()))?;

        extract_label(&scored)
    }
}

/// Pull the single document score out of a batch response.
/// A per-document error entry counts as a rejection even under HTTP 200.
fn extract_label(response: &SentimentResponse) -> Result<SentimentLabel, SentimentError> {
    if let Some(failed) = response.errors.first() {
        return Err(SentimentError::Rejected(failed.error.message.clone()));
    }

    let document = response
        .documents
        .first()
        .ok_or_else(|| SentimentError::Malformed("response contained no documents".to_string()))?;

    SentimentLabel::parse(&document.sentiment).ok_or_else(|| {
        SentimentError::Malformed(format!("unknown sentiment label: {}", document.sentiment))
    })
}
