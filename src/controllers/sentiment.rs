use axum::{extract::State, Json};
use std::sync::Arc;

use crate::{
    domain::sentiment::{AnalyzeRequest, AnalyzeResponse, SentimentService, SentimentServiceApi},
    error::{AppError, AppResult},
};

pub struct SentimentController {
    sentiment_service: Arc<SentimentService>,
}

impl SentimentController {
    pub fn new(sentiment_service: Arc<SentimentService>) -> Self {
        Self { sentiment_service }
    }

    /// POST /api/sentiment/analyze - Score the sentiment of a text
    pub async fn analyze(
        State(controller): State<Arc<SentimentController>>,
        Json(request): Json<AnalyzeRequest>,
    ) -> AppResult<Json<AnalyzeResponse>> {
        let sentiment = controller
            .sentiment_service
            .analyze(&request.text)
            .await
            .map_err(AppError::from)?;

        Ok(Json(AnalyzeResponse { sentiment }))
    }
}
