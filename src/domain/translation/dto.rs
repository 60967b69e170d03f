use base64::{engine::general_purpose::STANDARD, Engine};
use serde::{Deserialize, Serialize};

use super::service::TranslationOutcome;
use crate::domain::language::{LanguageEntry, DEFAULT_LANGUAGE};
use crate::domain::shared::preview;

fn default_target_language() -> String {
    DEFAULT_LANGUAGE.name.to_string()
}

/// Request for POST /api/translate and POST /api/translate/audio
#[derive(Debug, Serialize, Deserialize)]
pub struct TranslateRequest {
    #[serde(default)]
    pub text: String,
    #[serde(default = "default_target_language")]
    pub target_language: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LanguageDto {
    pub name: String,
    pub code: String,
}

impl From<&LanguageEntry> for LanguageDto {
    fn from(entry: &LanguageEntry) -> Self {
        Self {
            name: entry.name.to_string(),
            code: entry.code.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AudioPayload {
    pub filename: String,
    pub mime_type: String,
    pub size_bytes: usize,
    pub data_base64: String,
}

/// Response for the JSON translate endpoints
#[derive(Debug, Serialize, Deserialize)]
pub struct TranslateResponse {
    pub original_preview: String,
    pub translated_text: String,
    pub language: LanguageDto,
    pub audio: AudioPayload,
}

impl TranslateResponse {
    pub fn new(source_text: &str, outcome: TranslationOutcome) -> Self {
        let audio = AudioPayload {
            size_bytes: outcome.audio.bytes.len(),
            data_base64: STANDARD.encode(&outcome.audio.bytes),
            filename: outcome.audio.suggested_filename,
            mime_type: outcome.audio.mime_type.to_string(),
        };

        Self {
            original_preview: preview(source_text),
            translated_text: outcome.translated_text,
            language: LanguageDto::from(outcome.language),
            audio,
        }
    }
}
