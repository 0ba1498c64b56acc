use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum SentimentServiceError {
    #[error("invalid input: {0}")]
    Invalid(String),
    #[error("analysis rejected: {0}")]
    Rejected(String),
    #[error("transport failure: {0}")]
    Transport(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<SentimentServiceError> for AppError {
    fn from(err: SentimentServiceError) -> Self {
        match err {
            SentimentServiceError::Invalid(msg) => AppError::BadRequest(msg),
            SentimentServiceError::Rejected(msg) => AppError::BackendCanceled(msg),
            SentimentServiceError::Transport(msg) => AppError::Transport(msg),
            SentimentServiceError::Other(e) => AppError::Internal(e.to_string()),
        }
    }
}
