use super::synthesis::{SpeechSynthesisClient, SynthesisError};
use crate::infrastructure::config::Config;
use async_trait::async_trait;

/// MP3 keeps responses small enough to embed in a rendered page.
const OUTPUT_FORMAT: &str = "audio-24khz-96kbitrate-mono-mp3";

const USER_AGENT: &str = "polyvox";

const DEFAULT_LANGUAGE: &str = "en-US";

/// Azure Cognitive Services implementation of the synthesis client.
///
/// Talks to the Speech REST API:
/// - URL: `https://{region}.tts.speech.microsoft.com/cognitiveservices/v1`
/// - Authentication: `Ocp-Apim-Subscription-Key` header
/// - Body: SSML document with voice and optional prosody settings
pub struct AzureSpeechClient {
    http_client: reqwest::Client,
    subscription_key: String,
    synthesis_url: String,
}

impl AzureSpeechClient {
    pub fn new(http_client: reqwest::Client, config: &Config) -> Self {
        Self {
            http_client,
            subscription_key: config.speech_key.clone(),
            synthesis_url: config.speech_synthesis_url(),
        }
    }
}

#[async_trait]
impl SpeechSynthesisClient for AzureSpeechClient {
    async fn synthesize(
        &self,
        text: &str,
        voice_id: &str,
        speed: f32,
    ) -> Result<Vec<u8>, SynthesisError> {
        let ssml = build_ssml(text, voice_id, speed);

        tracing::debug!(
            voice_id = voice_id,
            ssml_length = ssml.len(),
            "Sending synthesis request to Azure"
        );

        let response = self
            .http_client
            .post(&self.synthesis_url)
            .header("Ocp-Apim-Subscription-Key", &self.subscription_key)
            .header("Content-Type", "application/ssml+xml")
            .header("X-Microsoft-OutputFormat", OUTPUT_FORMAT)
            .header("User-Agent", USER_AGENT)
            .body(ssml)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Speech service unreachable");
                SynthesisError::Transport(e.to_string())
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
                voice_id = voice_id,
                "Speech service canceled synthesis"
            );
            return Err(SynthesisError::Canceled {
                reason: format!(
                    "{} {}",
                    status.as_u16(),
                    status.canonical_reason().unwrap_or("unknown status")
                ),
                detail,
            });
        }

        let audio = response
            .bytes()
            .await
            .map_err(|e| SynthesisError::Transport(e.to_string()))?
            .to_vec();

        if audio.is_empty() {
            return Err(SynthesisError::Unknown(
                "service returned no audio data".to_string(),
            ));
        }

        Ok(audio)
    }
}

/// Build the SSML document for a synthesis request.
/// A speed within 1% of normal skips the prosody element entirely.
fn build_ssml(text: &str, voice_id: &str, speed: f32) -> String {
    let escaped_text = escape_xml(text);

    let inner_content = if (speed - 1.0).abs() > 0.01 {
        // Rate multiplier to percentage (1.0 = 100%, 1.5 = 150%)
        let rate_percent = (speed * 100.0).round() as i32;
        format!("<prosody rate=\"{rate_percent}%\">{escaped_text}</prosody>")
    } else {
        escaped_text
    };

    format!(
        "<speak version='1.0' xmlns='http://www.w3.org/2001/10/synthesis' xml:lang='{}'><voice name='{}'>{}</voice></speak>",
        language_code(voice_id),
        voice_id,
        inner_content
    )
}

/// Derive the BCP-47 language code from an Azure voice name.
/// "hi-IN-SwaraNeural" speaks hi-IN; anything unparseable falls back to en-US.
fn language_code(voice_id: &str) -> String {
    let mut parts = voice_id.split('-');
    if let (Some(language), Some(region)) = (parts.next(), parts.next()) {
        if region.len() == 2 && region.chars().all(|c| c.is_ascii_uppercase()) {
            return format!("{language}-{region}");
        }
    }
    DEFAULT_LANGUAGE.to_string()
}

fn escape_xml(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&apos;"),
            _ => result.push(c),
        }
    }
    result
}
