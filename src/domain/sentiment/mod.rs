pub mod error;
pub mod model;
pub mod service;

pub use error::SentimentServiceError;
pub use model::SentimentLabel;
use serde::{Deserialize, Serialize};
pub use service::{SentimentService, SentimentServiceApi};

/// Request for POST /api/sentiment/analyze
#[derive(Debug, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    pub text: String,
}

/// Response for POST /api/sentiment/analyze
#[derive(Debug, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    pub sentiment: SentimentLabel,
}
