use axum::{
    body::Body,
    extract::{Multipart, State},
    http::{header, HeaderMap, HeaderValue, StatusCode},
    Extension, Json,
};
use std::sync::Arc;

use super::upload::UploadForm;
use crate::{
    domain::{
        language::DEFAULT_LANGUAGE,
        translation::{
            dto::{TranslateRequest, TranslateResponse},
            AudioArtifact, Credential, TranslationService, TranslationServiceApi,
        },
    },
    error::{AppError, AppResult},
};

pub const TARGET_LANGUAGE_FIELD: &str = "target_language";

pub struct TranslationController {
    translation_service: Arc<TranslationService>,
}

impl TranslationController {
    pub fn new(translation_service: Arc<TranslationService>) -> Self {
        Self {
            translation_service,
        }
    }

    /// POST /api/translate - Translate text and synthesize the translation
    pub async fn translate(
        State(controller): State<Arc<TranslationController>>,
        Extension(credential): Extension<Credential>,
        Json(request): Json<TranslateRequest>,
    ) -> AppResult<Json<TranslateResponse>> {
        let outcome = controller
            .translation_service
            .translate_and_synthesize(&credential, &request.text, &request.target_language)
            .await?;

        Ok(Json(TranslateResponse::new(&request.text, outcome)))
    }

    /// POST /api/translate/file - Extract an uploaded document, then translate it
    pub async fn translate_file(
        State(controller): State<Arc<TranslationController>>,
        Extension(credential): Extension<Credential>,
        multipart: Multipart,
    ) -> AppResult<Json<TranslateResponse>> {
        let mut form = UploadForm::read(multipart).await?;
        let target_language = form
            .fields
            .remove(TARGET_LANGUAGE_FIELD)
            .unwrap_or_else(|| DEFAULT_LANGUAGE.name.to_string());

        let document = form.take_document()?;
        let text = document.extract()?.into_string();

        let outcome = controller
            .translation_service
            .translate_and_synthesize(&credential, &text, &target_language)
            .await?;

        Ok(Json(TranslateResponse::new(&text, outcome)))
    }

    /// POST /api/translate/audio - Translate text and return the MP3 as a download
    pub async fn translate_audio(
        State(controller): State<Arc<TranslationController>>,
        Extension(credential): Extension<Credential>,
        Json(request): Json<TranslateRequest>,
    ) -> AppResult<(StatusCode, HeaderMap, Body)> {
        let outcome = controller
            .translation_service
            .translate_and_synthesize(&credential, &request.text, &request.target_language)
            .await?;

        let mut headers = audio_headers(&outcome.audio)?;
        headers.insert(
            "x-target-language",
            HeaderValue::from_static(outcome.language.code),
        );
        headers.insert(
            "x-character-count",
            HeaderValue::from(outcome.translated_text.chars().count()),
        );

        Ok((StatusCode::OK, headers, Body::from(outcome.audio.bytes)))
    }
}

/// Content type and attachment disposition for an audio artifact
fn audio_headers(audio: &AudioArtifact) -> AppResult<HeaderMap> {
    let disposition = format!(
        "attachment; filename=\"{}\"; filename*=UTF-8''{}",
        audio.suggested_filename.replace('"', ""),
        urlencoding::encode(&audio.suggested_filename)
    );

    let mut headers = HeaderMap::new();
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static(audio.mime_type));
    headers.insert(
        header::CONTENT_DISPOSITION,
        HeaderValue::from_str(&disposition)
            .map_err(|e| AppError::Internal(format!("Invalid download filename: {}", e)))?,
    );
    Ok(headers)
}
