use axum::extract::Multipart;
use std::collections::HashMap;

use crate::domain::document::SourceDocument;
use crate::error::{AppError, AppResult};

pub const FILE_FIELD: &str = "file";

/// Parts of a multipart form: the uploaded file (if any) and the text fields
#[derive(Debug, Default)]
pub struct UploadForm {
    pub file: Option<(String, Vec<u8>)>,
    pub fields: HashMap<String, String>,
}

impl UploadForm {
    /// Drain the multipart stream. Only the first `file` part is kept.
    pub async fn read(mut multipart: Multipart) -> AppResult<Self> {
        let mut form = UploadForm::default();

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| AppError::BadRequest(format!("Invalid multipart body: {}", e)))?
        {
            let name = field.name().unwrap_or_default().to_string();

            if name == FILE_FIELD {
                let file_name = field.file_name().unwrap_or_default().to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(format!("Failed to read upload: {}", e)))?;
                if form.file.is_none() {
                    form.file = Some((file_name, bytes.to_vec()));
                }
            } else {
                let value = field
                    .text()
                    .await
                    .map_err(|e| AppError::BadRequest(format!("Invalid form field '{}': {}", name, e)))?;
                form.fields.insert(name, value);
            }
        }

        Ok(form)
    }

    /// Take the uploaded file as a document typed by its extension
    pub fn take_document(&mut self) -> AppResult<SourceDocument> {
        let (file_name, bytes) = self
            .file
            .take()
            .ok_or_else(|| AppError::BadRequest("Please upload a file.".to_string()))?;

        let document = SourceDocument::from_upload(file_name, bytes)?;

        tracing::info!(
            file_name = %document.file_name,
            kind = ?document.kind,
            size_bytes = document.size(),
            "File uploaded"
        );

        Ok(document)
    }
}
