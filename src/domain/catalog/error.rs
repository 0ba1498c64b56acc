use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("unknown language: {0}")]
    UnknownLanguage(String),
    #[error("unknown page: {0}")]
    UnknownPage(String),
}

impl From<CatalogError> for AppError {
    fn from(err: CatalogError) -> Self {
        AppError::NotFound(err.to_string())
    }
}
