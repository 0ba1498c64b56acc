use axum::{
    extract::{Path, State},
    response::Html,
    Form,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::{
    domain::{
        catalog::VoiceCatalog,
        sentiment::{SentimentService, SentimentServiceApi},
        session::SessionState,
        speech::{SpeechService, SpeechServiceApi, SynthesizeRequest},
        summary::{condense, SUMMARY_MAX_CHARS},
    },
    error::AppResult,
    views::{PageView, TemplateEngine},
};

/// Form body for POST /pages/{slug}
///
/// Checkboxes only appear in the body when ticked, so they land here as
/// `Option<String>`; `action` tells apart the preview and convert buttons.
#[derive(Debug, Deserialize)]
pub struct PageForm {
    #[serde(default)]
    pub text: String,
    pub voice: Option<String>,
    pub speed: Option<f32>,
    pub summarize: Option<String>,
    pub sentiment: Option<String>,
    pub action: Option<String>,
}

pub struct PageController {
    catalog: Arc<VoiceCatalog>,
    speech_service: Arc<SpeechService>,
    sentiment_service: Arc<SentimentService>,
    templates: TemplateEngine,
}

impl PageController {
    pub fn new(
        catalog: Arc<VoiceCatalog>,
        speech_service: Arc<SpeechService>,
        sentiment_service: Arc<SentimentService>,
        templates: TemplateEngine,
    ) -> Self {
        Self {
            catalog,
            speech_service,
            sentiment_service,
            templates,
        }
    }

    /// GET / - Landing page with the language overview
    pub async fn home(State(controller): State<Arc<PageController>>) -> AppResult<Html<String>> {
        Ok(Html(controller.templates.render_landing()?))
    }

    /// GET /pages/:slug - Converter page in its initial state
    pub async fn show(
        State(controller): State<Arc<PageController>>,
        Path(slug): Path<String>,
    ) -> AppResult<Html<String>> {
        let page = controller.catalog.page(&slug)?;
        let entry = controller.catalog.entry(page.label)?;

        let view = PageView::fresh(page, entry);
        Ok(Html(controller.templates.render_language_page(&view)?))
    }

    /// POST /pages/:slug - Process a submission and re-render the page
    ///
    /// One strictly sequential pass: rebuild the selection state, condense if
    /// asked, score sentiment if asked, synthesize only when the convert
    /// button sent the form. A sentiment failure renders inline and never
    /// aborts the page.
    pub async fn submit(
        State(controller): State<Arc<PageController>>,
        Path(slug): Path<String>,
        Form(form): Form<PageForm>,
    ) -> AppResult<Html<String>> {
        let page = controller.catalog.page(&slug)?;
        let entry = controller.catalog.entry(page.label)?;

        // 1. Rebuild the selection state from the submitted form
        let state = SessionState::from_submission(
            entry,
            form.voice.as_deref(),
            form.text,
            form.speed.unwrap_or(1.0),
            form.summarize.is_some(),
            form.sentiment.is_some(),
        );
        let convert_requested = form.action.as_deref() == Some("convert");
        let mut view = PageView::with_state(page, entry, state);

        // 2. Summarization is plain truncation of whatever was typed
        if view.state.summarize {
            view.summary = Some(condense(&view.state.text, SUMMARY_MAX_CHARS));
        }

        // 3. Sentiment, non-fatal: a failure becomes an inline message
        if view.state.sentiment {
            view.sentiment = Some(
                controller
                    .sentiment_service
                    .analyze(&view.state.text)
                    .await
                    .map_err(|e| e.to_string()),
            );
        }

        // 4. Synthesis runs only on an explicit convert with non-empty text
        if convert_requested {
            if !view.state.has_text() {
                view.warning = Some("Please enter some text.".to_string());
            } else {
                let request = SynthesizeRequest {
                    text: view.state.text.clone(),
                    voice_id: view.state.voice_id.clone(),
                    speed: view.state.speed,
                };
                match controller.speech_service.synthesize(request).await {
                    Ok(result) => view.audio = Some(result.audio_data),
                    Err(e) => view.error = Some(format!("Error during speech synthesis: {}", e)),
                }
            }
        }

        Ok(Html(controller.templates.render_language_page(&view)?))
    }
}
