pub mod error;
pub mod service;

pub use error::SpeechServiceError;
use serde::{Deserialize, Serialize};
pub use service::{clamp_speed, SpeechService, SpeechServiceApi, SynthesizedSpeech};

/// Request for POST /api/speech/synthesize
#[derive(Debug, Serialize, Deserialize)]
pub struct SynthesizeRequest {
    pub text: String,
    pub voice_id: String,
    #[serde(default = "default_speed")]
    pub speed: f32,
}

fn default_speed() -> f32 {
    1.0
}
