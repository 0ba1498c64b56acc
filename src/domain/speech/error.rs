use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum SpeechServiceError {
    #[error("invalid input: {0}")]
    Invalid(String),
    #[error("{reason} - {detail}")]
    Canceled { reason: String, detail: String },
    #[error("transport failure: {0}")]
    Transport(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<SpeechServiceError> for AppError {
    fn from(err: SpeechServiceError) -> Self {
        match err {
            SpeechServiceError::Invalid(msg) => AppError::BadRequest(msg),
            SpeechServiceError::Canceled { reason, detail } => {
                AppError::BackendCanceled(format!("{reason} - {detail}"))
            }
            SpeechServiceError::Transport(msg) => AppError::Transport(msg),
            SpeechServiceError::Other(e) => AppError::Internal(e.to_string()),
        }
    }
}
