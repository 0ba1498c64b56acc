use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::domain::catalog::VoiceCatalog;
use crate::error::AppResult;

/// One entry in GET /api/languages
#[derive(Debug, Serialize, Deserialize)]
pub struct LanguageResponse {
    pub label: String,
    pub voices: Vec<String>,
    pub note: Option<String>,
}

pub struct CatalogController {
    catalog: Arc<VoiceCatalog>,
}

impl CatalogController {
    pub fn new(catalog: Arc<VoiceCatalog>) -> Self {
        Self { catalog }
    }

    /// GET /api/languages - List supported languages and their voices
    pub async fn list_languages(
        State(controller): State<Arc<CatalogController>>,
    ) -> AppResult<Json<Vec<LanguageResponse>>> {
        let languages = controller
            .catalog
            .languages()
            .iter()
            .map(|entry| LanguageResponse {
                label: entry.label.to_string(),
                voices: entry.voice_ids.iter().map(|v| v.to_string()).collect(),
                note: entry.note.map(|n| n.to_string()),
            })
            .collect();

        Ok(Json(languages))
    }
}
