use super::error::CatalogError;
use super::model::{LanguageEntry, LanguagePage};

pub const HOME_TITLE: &str = "🌍Multilingual Text-to-Speech Converter🌍";

const BORROWED_HINDI_NOTE: &str = "No dedicated voice model; spoken with Hindi voices";

/// Supported languages, in the order they are presented to the user.
///
/// The Rajasthani, Malwi and Haryanvi dialects have no voice models of their
/// own and are mapped to Hindi voices.
const LANGUAGES: &[LanguageEntry] = &[
    LanguageEntry {
        label: "English (US)",
        voice_ids: &["en-US-JennyNeural", "en-US-GuyNeural"],
        note: None,
    },
    LanguageEntry {
        label: "Spanish (Spain)",
        voice_ids: &["es-ES-ElviraNeural", "es-ES-AlvaroNeural"],
        note: None,
    },
    LanguageEntry {
        label: "French (France)",
        voice_ids: &["fr-FR-DeniseNeural", "fr-FR-HenriNeural"],
        note: None,
    },
    LanguageEntry {
        label: "German (Germany)",
        voice_ids: &["de-DE-KatjaNeural", "de-DE-ConradNeural"],
        note: None,
    },
    LanguageEntry {
        label: "Hindi (India)",
        voice_ids: &["hi-IN-SwaraNeural", "hi-IN-MadhurNeural"],
        note: None,
    },
    LanguageEntry {
        label: "Tamil (India)",
        voice_ids: &["ta-IN-PallaviNeural"],
        note: None,
    },
    LanguageEntry {
        label: "Telugu (India)",
        voice_ids: &["te-IN-MohanNeural"],
        note: None,
    },
    LanguageEntry {
        label: "Kannada (India)",
        voice_ids: &["kn-IN-GaganNeural"],
        note: None,
    },
    LanguageEntry {
        label: "Gujarati (India)",
        voice_ids: &["gu-IN-DhwaniNeural"],
        note: None,
    },
    LanguageEntry {
        label: "Assamese (India)",
        voice_ids: &["as-IN-JintiNeural"],
        note: None,
    },
    LanguageEntry {
        label: "Rajasthani (India, using Hindi TTS)",
        voice_ids: &["hi-IN-MadhurNeural"],
        note: Some(BORROWED_HINDI_NOTE),
    },
    LanguageEntry {
        label: "Malwi (India, using Hindi TTS)",
        voice_ids: &["hi-IN-MadhurNeural"],
        note: Some(BORROWED_HINDI_NOTE),
    },
    LanguageEntry {
        label: "Haryanvi (India, using Hindi TTS)",
        voice_ids: &["hi-IN-SwaraNeural"],
        note: Some(BORROWED_HINDI_NOTE),
    },
    LanguageEntry {
        label: "Bengali (India)",
        voice_ids: &["bn-IN-BashkarNeural"],
        note: None,
    },
    LanguageEntry {
        label: "Punjabi (India)",
        voice_ids: &["pa-IN-JagtarNeural"],
        note: None,
    },
    LanguageEntry {
        label: "Marathi (India)",
        voice_ids: &["mr-IN-AarohiNeural"],
        note: None,
    },
];

/// Converter pages, in navigation order.
const PAGES: &[LanguagePage] = &[
    LanguagePage {
        slug: "english",
        name: "English",
        title: "🇺🇸 English Text-to-Speech Converter",
        label: "English (US)",
    },
    LanguagePage {
        slug: "spanish",
        name: "Spanish",
        title: "🇪🇸 🤖 Spanish Text-to-Speech Converter",
        label: "Spanish (Spain)",
    },
    LanguagePage {
        slug: "french",
        name: "French",
        title: "🇫🇷 🤖 French Text-to-Speech Converter",
        label: "French (France)",
    },
    LanguagePage {
        slug: "german",
        name: "German",
        title: "🇩🇪 🤖 German Text-to-Speech Converter",
        label: "German (Germany)",
    },
    LanguagePage {
        slug: "hindi",
        name: "Hindi",
        title: "🇮🇳 🤖 Hindi Text-to-Speech Converter",
        label: "Hindi (India)",
    },
    LanguagePage {
        slug: "tamil",
        name: "Tamil",
        title: "🇮🇳 🤖 Tamil Text-to-Speech Converter",
        label: "Tamil (India)",
    },
    LanguagePage {
        slug: "kannada",
        name: "Kannada",
        title: "🇮🇳 🤖 Kannada Text-to-Speech Converter",
        label: "Kannada (India)",
    },
    LanguagePage {
        slug: "telugu",
        name: "Telugu",
        title: "🇮🇳 🤖 Telugu Text-to-Speech Converter",
        label: "Telugu (India)",
    },
    LanguagePage {
        slug: "gujarati",
        name: "Gujarati",
        title: "🇮🇳 🤖 Gujarati Text-to-Speech Converter",
        label: "Gujarati (India)",
    },
    LanguagePage {
        slug: "marathi",
        name: "Marathi",
        title: "🇮🇳 🤖 Marathi Text-to-Speech Converter",
        label: "Marathi (India)",
    },
    LanguagePage {
        slug: "assamese",
        name: "Assamese",
        title: "🇮🇳 🤖 Assamese Text-to-Speech Converter",
        label: "Assamese (India)",
    },
    LanguagePage {
        slug: "rajasthani",
        name: "Rajasthani",
        title: "🇮🇳 🤖 Rajasthani Text-to-Speech Converter",
        label: "Rajasthani (India, using Hindi TTS)",
    },
    LanguagePage {
        slug: "malwi",
        name: "Malwi",
        title: "🇮🇳 🤖 Malwi Text-to-Speech Converter",
        label: "Malwi (India, using Hindi TTS)",
    },
    LanguagePage {
        slug: "haryanvi",
        name: "Haryanvi",
        title: "🇮🇳 🤖 Haryanvi Text-to-Speech Converter",
        label: "Haryanvi (India, using Hindi TTS)",
    },
    LanguagePage {
        slug: "bengali",
        name: "Bengali",
        title: "🇮🇳 🤖 Bengali Text-to-Speech Converter",
        label: "Bengali (India)",
    },
    LanguagePage {
        slug: "punjabi",
        name: "Punjabi",
        title: "🇮🇳 🤖 Punjabi Text-to-Speech Converter",
        label: "Punjabi (India)",
    },
];

/// Read model over the static language and page tables.
pub struct VoiceCatalog;

impl VoiceCatalog {
    pub fn new() -> Self {
        Self
    }

    /// All languages in declaration order.
    pub fn languages(&self) -> &'static [LanguageEntry] {
        LANGUAGES
    }

    /// All converter pages in navigation order.
    pub fn pages(&self) -> &'static [LanguagePage] {
        PAGES
    }

    pub fn entry(&self, label: &str) -> Result<&'static LanguageEntry, CatalogError> {
        LANGUAGES
            .iter()
            .find(|entry| entry.label == label)
            .ok_or_else(|| CatalogError::UnknownLanguage(label.to_string()))
    }

    /// Selectable voices for a language.
    pub fn voices_for(&self, label: &str) -> Result<&'static [&'static str], CatalogError> {
        Ok(self.entry(label)?.voice_ids)
    }

    pub fn page(&self, slug: &str) -> Result<&'static LanguagePage, CatalogError> {
        PAGES
            .iter()
            .find(|page| page.slug == slug)
            .ok_or_else(|| CatalogError::UnknownPage(slug.to_string()))
    }

    /// Whether any language offers this voice.
    pub fn contains_voice(&self, voice_id: &str) -> bool {
        LANGUAGES
            .iter()
            .any(|entry| entry.voice_ids.contains(&voice_id))
    }
}

impl Default for VoiceCatalog {
    fn default() -> Self {
        Self::new()
    }
}
