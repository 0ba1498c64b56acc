use std::sync::Arc;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use tera::{Context, Tera};
use thiserror::Error;

use crate::domain::catalog::{LanguageEntry, LanguagePage, VoiceCatalog, HOME_TITLE};
use crate::domain::sentiment::SentimentLabel;
use crate::domain::session::SessionState;
use crate::error::AppError;

/// Error raised while compiling or rendering the embedded templates.
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("template rendering failed: {0}")]
    Render(#[from] tera::Error),
}

impl From<TemplateError> for AppError {
    fn from(err: TemplateError) -> Self {
        AppError::Internal(err.to_string())
    }
}

/// Everything a converter page needs to render itself after a request.
///
/// A fresh GET renders with [`PageView::fresh`]; a form submission fills in
/// the result fields the submitted options asked for.
pub struct PageView {
    pub page: &'static LanguagePage,
    pub entry: &'static LanguageEntry,
    pub state: SessionState,
    /// Condensed text, present whenever summarization was requested.
    /// `Some("")` still renders the summary block.
    pub summary: Option<String>,
    /// Sentiment outcome. An `Err` renders inline and never fails the page.
    pub sentiment: Option<Result<SentimentLabel, String>>,
    /// Synthesized MP3, embedded in the page as a data URI.
    pub audio: Option<Vec<u8>>,
    pub warning: Option<String>,
    pub error: Option<String>,
}

impl PageView {
    /// View for a page that has not been submitted yet.
    pub fn fresh(page: &'static LanguagePage, entry: &'static LanguageEntry) -> Self {
        Self::with_state(page, entry, SessionState::initial(entry))
    }

    /// View carrying the selection state rebuilt from a form submission.
    pub fn with_state(
        page: &'static LanguagePage,
        entry: &'static LanguageEntry,
        state: SessionState,
    ) -> Self {
        Self {
            page,
            entry,
            state,
            summary: None,
            sentiment: None,
            audio: None,
            warning: None,
            error: None,
        }
    }
}

/// Renders the server-side HTML from templates embedded in the binary.
#[derive(Clone)]
pub struct TemplateEngine {
    tera: Arc<Tera>,
    catalog: Arc<VoiceCatalog>,
}

impl TemplateEngine {
    pub fn new(catalog: Arc<VoiceCatalog>) -> Result<Self, TemplateError> {
        let mut tera = Tera::default();
        tera.add_raw_templates(vec![
            ("base.html", embedded::BASE),
            ("landing.html", embedded::LANDING),
            ("converter.html", embedded::CONVERTER),
        ])?;
        tera.autoescape_on(vec![".html", ".htm", ".xml"]);
        Ok(Self {
            tera: Arc::new(tera),
            catalog,
        })
    }

    /// Landing page: navigation plus the full language table.
    pub fn render_landing(&self) -> Result<String, TemplateError> {
        let mut ctx = self.base_context("");
        ctx.insert("home_title", HOME_TITLE);
        ctx.insert("languages", self.catalog.languages());
        Ok(self.tera.render("landing.html", &ctx)?)
    }

    /// Converter page for one language, including any submission results.
    pub fn render_language_page(&self, view: &PageView) -> Result<String, TemplateError> {
        let mut ctx = self.base_context(view.page.slug);
        ctx.insert("title", view.page.title);
        ctx.insert("slug", view.page.slug);
        ctx.insert("note", &view.entry.note);
        ctx.insert("voices", view.entry.voice_ids);
        ctx.insert("selected_voice", &view.state.voice_id);
        ctx.insert("text", &view.state.text);
        ctx.insert("speed", &format!("{:.1}", view.state.speed));
        ctx.insert("summarize", &view.state.summarize);
        ctx.insert("sentiment", &view.state.sentiment);
        ctx.insert("summary", &view.summary);

        let (sentiment_label, sentiment_error) = match &view.sentiment {
            Some(Ok(label)) => (Some(label.to_string()), None),
            Some(Err(reason)) => (None, Some(reason.clone())),
            None => (None, None),
        };
        ctx.insert("sentiment_label", &sentiment_label);
        ctx.insert("sentiment_error", &sentiment_error);

        ctx.insert("warning", &view.warning);
        ctx.insert("error", &view.error);
        ctx.insert(
            "audio_b64",
            &view.audio.as_deref().map(|audio| STANDARD.encode(audio)),
        );
        Ok(self.tera.render("converter.html", &ctx)?)
    }

    fn base_context(&self, active_slug: &str) -> Context {
        let mut ctx = Context::new();
        ctx.insert("pages", self.catalog.pages());
        ctx.insert("active_slug", active_slug);
        ctx
    }
}

/// Templates compiled into the binary so the server ships as a single file.
mod embedded {
    pub const BASE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>Text-to-Speech Converter</title>
    <link rel="icon" href="data:image/svg+xml,<svg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 100 100'><text y='.9em' font-size='90'>🗣️</text></svg>">
    <style>
        body {
            margin: 0;
            display: flex;
            min-height: 100vh;
            font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif;
            background-color: #433878;
            color: #ffffff;
        }
        nav {
            width: 230px;
            flex-shrink: 0;
            margin: 12px;
            padding: 10px;
            background-color: #1abc9c;
            border-radius: 10px;
        }
        nav h2 { margin: 6px 4px 10px; }
        nav .prompt { margin: 0 4px 6px; font-weight: bold; }
        nav a {
            display: block;
            color: white;
            text-decoration: none;
            padding: 4px 10px;
            border-radius: 6px;
        }
        nav a:hover { background-color: #16a085; }
        nav a.active { background-color: #148f77; font-weight: bold; }
        main { flex-grow: 1; padding: 20px 40px; }
        form label { display: block; margin: 16px 0 4px; }
        form label.toggle { margin-top: 10px; }
        select, textarea {
            width: 100%;
            max-width: 640px;
            padding: 8px;
            border: none;
            border-radius: 6px;
            font-size: 15px;
        }
        textarea { height: 200px; }
        input[type="range"] { width: 320px; vertical-align: middle; }
        output { margin-left: 10px; }
        button {
            border: 1px solid #3498db;
            background-color: #CB80AB;
            color: white;
            padding: 8px 16px;
            font-size: 16px;
            border-radius: 10px;
            cursor: pointer;
            margin-right: 8px;
        }
        button:hover { background-color: #E6D9A2; }
        .actions { margin-top: 20px; }
        .note { color: #d7c9f5; }
        .banner {
            max-width: 640px;
            margin-top: 16px;
            padding: 10px 14px;
            border-radius: 8px;
        }
        .banner.success { background-color: #1e8449; }
        .banner.info { background-color: #2471a3; }
        .banner.warning { background-color: #b9770e; }
        .banner.error { background-color: #922b21; }
        .summary {
            max-width: 640px;
            margin-top: 16px;
            padding: 12px 14px;
            background-color: #5b4b8a;
            border-radius: 8px;
            white-space: pre-wrap;
        }
        table { border-collapse: collapse; margin-top: 16px; }
        th, td { text-align: left; padding: 8px 14px; border-bottom: 1px solid #5b4b8a; }
        audio { display: block; margin-top: 12px; }
    </style>
</head>
<body>
    <nav>
        <h2>🌐 Navigation</h2>
        <p class="prompt">Choose a Language</p>
        <a href="/"{% if active_slug == "" %} class="active"{% endif %}>Home</a>
        {% for page in pages %}
        <a href="/pages/{{ page.slug }}"{% if page.slug == active_slug %} class="active"{% endif %}>{{ page.name }}</a>
        {% endfor %}
    </nav>
    <main>
        {% block content %}{% endblock content %}
    </main>
</body>
</html>
"##;

    pub const LANDING: &str = r##"{% extends "base.html" %}

{% block content %}
<h1>{{ home_title }}</h1>
<p>
    This application allows you to convert text to speech in multiple languages.
    Choose a language from the sidebar to explore the features for that language.
</p>

<table>
    <thead>
        <tr>
            <th>Language</th>
            <th>Voices</th>
            <th>Notes</th>
        </tr>
    </thead>
    <tbody>
        {% for language in languages %}
        <tr>
            <td>{{ language.label }}</td>
            <td>{{ language.voice_ids | join(sep=", ") }}</td>
            <td>{% if language.note %}{{ language.note }}{% endif %}</td>
        </tr>
        {% endfor %}
    </tbody>
</table>
{% endblock content %}
"##;

    pub const CONVERTER: &str = r##"{% extends "base.html" %}

{% block content %}
<h1>{{ title }}</h1>
{% if note %}
<p class="note">{{ note }}</p>
{% endif %}

<form method="post" action="/pages/{{ slug }}">
    <label for="voice">Select Voice</label>
    <select id="voice" name="voice">
        {% for voice in voices %}
        <option value="{{ voice }}"{% if voice == selected_voice %} selected{% endif %}>{{ voice }}</option>
        {% endfor %}
    </select>

    <label for="text">Enter your text here:</label>
    <textarea id="text" name="text">{{ text }}</textarea>

    <label for="speed">Adjust Speech Speed</label>
    <input type="range" id="speed" name="speed" min="0.5" max="2.0" step="0.1" value="{{ speed }}"
           oninput="this.nextElementSibling.value = this.value">
    <output>{{ speed }}</output>

    <label class="toggle"><input type="checkbox" name="summarize" value="on"{% if summarize %} checked{% endif %}> Enable Text Summarization</label>
    <label class="toggle"><input type="checkbox" name="sentiment" value="on"{% if sentiment %} checked{% endif %}> Perform Sentiment Analysis</label>

    <div class="actions">
        <button type="submit" name="action" value="preview">Update Preview</button>
        <button type="submit" name="action" value="convert">Convert to Speech</button>
    </div>
</form>

{% if summary is string %}
<div class="summary">{{ summary }}</div>
<p class="banner success">Text summarized successfully!</p>
{% endif %}

{% if sentiment_label %}
<p class="banner info">Sentiment of the text: {{ sentiment_label }}</p>
{% endif %}
{% if sentiment_error %}
<p class="banner error">Sentiment analysis failed: {{ sentiment_error }}</p>
{% endif %}

{% if warning %}
<p class="banner warning">{{ warning }}</p>
{% endif %}
{% if error %}
<p class="banner error">{{ error }}</p>
{% endif %}

{% if audio_b64 %}
<p class="banner success">Speech synthesis completed!</p>
<audio controls src="data:audio/mpeg;base64,{{ audio_b64 }}"></audio>
{% endif %}
{% endblock content %}
"##;
}
