use axum::Json;

use crate::domain::{language::LANGUAGES, translation::dto::LanguageDto};

/// GET /api/languages - Supported target languages in presentation order
pub async fn list_languages() -> Json<Vec<LanguageDto>> {
    Json(LANGUAGES.iter().map(LanguageDto::from).collect())
}
