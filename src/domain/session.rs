use crate::domain::catalog::LanguageEntry;
use crate::domain::speech::clamp_speed;

/// Form state carried between a converter page render and its next submission.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    pub voice_id: String,
    pub text: String,
    pub speed: f32,
    pub summarize: bool,
    pub sentiment: bool,
}

impl SessionState {
    /// Fresh state for a first page visit: default voice, empty text, normal speed.
    pub fn initial(entry: &LanguageEntry) -> Self {
        Self {
            voice_id: entry.voice_ids.first().copied().unwrap_or_default().to_string(),
            text: String::new(),
            speed: 1.0,
            summarize: false,
            sentiment: false,
        }
    }

    /// Rebuild state from a form submission.
    ///
    /// A submitted voice outside the page's own list falls back to the
    /// default voice; speed is clamped onto the slider scale.
    pub fn from_submission(
        entry: &LanguageEntry,
        voice_id: Option<&str>,
        text: String,
        speed: f32,
        summarize: bool,
        sentiment: bool,
    ) -> Self {
        let voice_id = voice_id
            .filter(|v| entry.voice_ids.contains(v))
            .unwrap_or_else(|| entry.voice_ids.first().copied().unwrap_or_default())
            .to_string();

        Self {
            voice_id,
            text,
            speed: clamp_speed(speed),
            summarize,
            sentiment,
        }
    }

    /// Whether the text holds anything besides whitespace.
    pub fn has_text(&self) -> bool {
        !self.text.trim().is_empty()
    }
}
