use axum::{
    body::Body,
    extract::State,
    http::{header, HeaderMap, StatusCode},
    Json,
};
use std::sync::Arc;

use crate::{
    domain::speech::{SpeechService, SpeechServiceApi, SynthesizeRequest},
    error::{AppError, AppResult},
};

pub struct SpeechController {
    speech_service: Arc<SpeechService>,
}

impl SpeechController {
    pub fn new(speech_service: Arc<SpeechService>) -> Self {
        Self { speech_service }
    }

    /// POST /api/speech/synthesize - Convert text to speech
    pub async fn synthesize(
        State(controller): State<Arc<SpeechController>>,
        Json(request): Json<SynthesizeRequest>,
    ) -> AppResult<(StatusCode, HeaderMap, Body)> {
        let result = controller
            .speech_service
            .synthesize(request)
            .await
            .map_err(AppError::from)?;

        // Build headers
        let mut headers = HeaderMap::new();
        headers.insert(header::CONTENT_TYPE, "audio/mpeg".parse().unwrap());
        headers.insert("X-Voice-Used", result.voice_id.parse().unwrap());
        headers.insert("X-Speed", format!("{:.1}", result.speed).parse().unwrap());
        headers.insert(
            "X-Character-Count",
            result.char_count.to_string().parse().unwrap(),
        );

        Ok((StatusCode::OK, headers, Body::from(result.audio_data)))
    }
}
