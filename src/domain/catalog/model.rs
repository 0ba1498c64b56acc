use serde::Serialize;

/// A supported language with its selectable voices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LanguageEntry {
    /// Display label, e.g. "Hindi (India)".
    pub label: &'static str,
    /// Voices offered for this language, selection order preserved.
    /// The first voice is the default.
    pub voice_ids: &'static [&'static str],
    /// Set for dialects that borrow another language's voice models.
    pub note: Option<&'static str>,
}

/// A converter page in the navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LanguagePage {
    /// URL path segment, e.g. "hindi".
    pub slug: &'static str,
    /// Short name shown in the navigation, e.g. "Hindi".
    pub name: &'static str,
    /// Page heading shown to the user.
    pub title: &'static str,
    /// Catalog label this page synthesizes with.
    pub label: &'static str,
}
