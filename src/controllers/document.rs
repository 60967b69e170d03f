use axum::{extract::Multipart, Json};
use serde::{Deserialize, Serialize};

use super::upload::UploadForm;
use crate::{
    domain::{document::FileKind, shared::preview},
    error::AppResult,
};

/// Response for POST /api/documents/extract
#[derive(Debug, Serialize, Deserialize)]
pub struct ExtractResponse {
    pub file_name: String,
    pub kind: FileKind,
    pub char_count: usize,
    pub preview: String,
    pub text: String,
}

/// POST /api/documents/extract - Read an uploaded file into plain text
pub async fn extract(multipart: Multipart) -> AppResult<Json<ExtractResponse>> {
    let mut form = UploadForm::read(multipart).await?;
    let document = form.take_document()?;

    let file_name = document.file_name.clone();
    let kind = document.kind;
    let text = document.extract()?;

    tracing::info!(
        file_name = %file_name,
        kind = ?kind,
        char_count = text.char_count(),
        "File loaded successfully"
    );

    Ok(Json(ExtractResponse {
        file_name,
        kind,
        char_count: text.char_count(),
        preview: preview(text.as_str()),
        text: text.into_string(),
    }))
}
