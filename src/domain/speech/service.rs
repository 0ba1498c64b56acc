use super::error::SpeechServiceError;
use super::SynthesizeRequest;
use crate::domain::catalog::VoiceCatalog;
use crate::infrastructure::clients::{SpeechSynthesisClient, SynthesisError};
use async_trait::async_trait;
use std::sync::Arc;

/// Range of the speed slider.
pub const MIN_SPEED: f32 = 0.5;
pub const MAX_SPEED: f32 = 2.0;
const SPEED_STEP: f32 = 0.1;

#[derive(Debug, Clone)]
pub struct SynthesizedSpeech {
    pub audio_data: Vec<u8>,
    pub voice_id: String,
    pub speed: f32,
    pub char_count: usize,
}

pub struct SpeechService {
    catalog: Arc<VoiceCatalog>,
    synthesis_client: Arc<dyn SpeechSynthesisClient>,
}

impl SpeechService {
    pub fn new(
        catalog: Arc<VoiceCatalog>,
        synthesis_client: Arc<dyn SpeechSynthesisClient>,
    ) -> Self {
        Self {
            catalog,
            synthesis_client,
        }
    }
}

#[async_trait]
pub trait SpeechServiceApi: Send + Sync {
    /// Synthesize text to speech with a catalog voice
    ///
    /// This operation:
    /// - Rejects blank text before any network call
    /// - Rejects voices the catalog does not offer
    /// - Clamps speed onto the slider scale
    ///
    /// Returns audio data along with the resolved voice and speed
    async fn synthesize(
        &self,
        request: SynthesizeRequest,
    ) -> Result<SynthesizedSpeech, SpeechServiceError>;
}

#[async_trait]
impl SpeechServiceApi for SpeechService {
    async fn synthesize(
        &self,
        request: SynthesizeRequest,
    ) -> Result<SynthesizedSpeech, SpeechServiceError> {
        // 1. Guard against blank input
        if request.text.trim().is_empty() {
            return Err(SpeechServiceError::Invalid(
                "Text cannot be empty".to_string(),
            ));
        }

        // 2. Only catalog voices are allowed through
        if !self.catalog.contains_voice(&request.voice_id) {
            return Err(SpeechServiceError::Invalid(format!(
                "Unknown voice: {}",
                request.voice_id
            )));
        }

        // 3. Normalize speed
        let speed = clamp_speed(request.speed);
        let char_count = request.text.chars().count();

        tracing::info!(
            voice_id = %request.voice_id,
            speed = speed,
            char_count = char_count,
            "Speech synthesis request"
        );

        // 4. Call the synthesis backend
        let audio_data = self
            .synthesis_client
            .synthesize(&request.text, &request.voice_id, speed)
            .await
            .map_err(|e| match e {
                SynthesisError::Canceled { reason, detail } => {
                    SpeechServiceError::Canceled { reason, detail }
                }
                SynthesisError::Transport(msg) => SpeechServiceError::Transport(msg),
                SynthesisError::Unknown(msg) => SpeechServiceError::Other(anyhow::anyhow!(msg)),
            })?;

        tracing::info!(
            voice_id = %request.voice_id,
            audio_size = audio_data.len(),
            "Speech synthesis completed"
        );

        Ok(SynthesizedSpeech {
            audio_data,
            voice_id: request.voice_id,
            speed,
            char_count,
        })
    }
}

/// Clamp a requested speed into the slider range and snap it to 0.1 steps.
pub fn clamp_speed(speed: f32) -> f32 {
    let clamped = speed.clamp(MIN_SPEED, MAX_SPEED);
    (clamped / SPEED_STEP).round() * SPEED_STEP
}
