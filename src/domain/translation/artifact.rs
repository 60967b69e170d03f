use chrono::NaiveDateTime;

use crate::domain::language::LanguageEntry;

pub const AUDIO_MIME_TYPE: &str = "audio/mp3";

/// Synthesized speech ready to be played or downloaded
#[derive(Debug, Clone)]
pub struct AudioArtifact {
    pub bytes: Vec<u8>,
    pub suggested_filename: String,
    pub mime_type: &'static str,
}

impl AudioArtifact {
    pub fn new(bytes: Vec<u8>, language: &LanguageEntry, created_at: NaiveDateTime) -> Self {
        Self {
            bytes,
            suggested_filename: artifact_filename(language.name, created_at),
            mime_type: AUDIO_MIME_TYPE,
        }
    }
}

/// `translation_<language>_<YYYYMMDD_HHMMSS>.mp3`
pub fn artifact_filename(language_name: &str, created_at: NaiveDateTime) -> String {
    format!(
        "translation_{}_{}.mp3",
        language_name,
        created_at.format("%Y%m%d_%H%M%S")
    )
}
