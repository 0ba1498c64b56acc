use async_trait::async_trait;

/// Client for a speech synthesis backend.
/// Abstracts the underlying provider so the domain layer never sees HTTP details.
///
/// Implementations are responsible for:
/// - Building the provider-specific request body (SSML or otherwise)
/// - Authentication against the provider
/// - Classifying failures into [`SynthesisError`]
#[async_trait]
pub trait SpeechSynthesisClient: Send + Sync {
    /// Synthesize text with the given voice
    ///
    /// Returns MP3 audio data ready for playback
    ///
    /// # Arguments
    /// * `text` - The text to synthesize
    /// * `voice_id` - Provider voice name (e.g. "hi-IN-SwaraNeural")
    /// * `speed` - Speaking rate multiplier, 1.0 is normal
    async fn synthesize(
        &self,
        text: &str,
        voice_id: &str,
        speed: f32,
    ) -> Result<Vec<u8>, SynthesisError>;
}

/// Failures reported by a synthesis backend.
#[derive(Debug, thiserror::Error)]
pub enum SynthesisError {
    /// The service accepted the connection but refused to synthesize.
    #[error("{reason} - {detail}")]
    Canceled { reason: String, detail: String },

    /// The service could not be reached at all.
    #[error("{0}")]
    Transport(String),

    /// Anything the client could not classify.
    #[error("{0}")]
    Unknown(String),
}
