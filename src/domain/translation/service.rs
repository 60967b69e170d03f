use super::artifact::AudioArtifact;
use super::credential::Credential;
use super::error::{PipelineError, Stage};
use super::validator::validate;
use crate::domain::language::{find_by_name, LanguageEntry};
use crate::domain::shared::{Clock, SystemClock};
use crate::infrastructure::repositories::{TranslationRepository, TtsRepository};
use async_trait::async_trait;
use std::sync::Arc;

/// Everything produced by one completed translate action
#[derive(Debug, Clone)]
pub struct TranslationOutcome {
    pub translated_text: String,
    pub language: &'static LanguageEntry,
    pub audio: AudioArtifact,
}

pub struct TranslationService {
    translation_repo: Arc<dyn TranslationRepository>,
    tts_repo: Arc<dyn TtsRepository>,
    clock: Arc<dyn Clock>,
}

impl TranslationService {
    pub fn new(
        translation_repo: Arc<dyn TranslationRepository>,
        tts_repo: Arc<dyn TtsRepository>,
    ) -> Self {
        Self::with_clock(translation_repo, tts_repo, Arc::new(SystemClock))
    }

    pub fn with_clock(
        translation_repo: Arc<dyn TranslationRepository>,
        tts_repo: Arc<dyn TtsRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            translation_repo,
            tts_repo,
            clock,
        }
    }
}

#[async_trait]
pub trait TranslationServiceApi: Send + Sync {
    /// Translate text and speak the translation
    ///
    /// This operation runs, in order and stopping at the first failure:
    /// - Validating: text length rules and target language lookup
    /// - Translating: one call to the translation backend
    /// - Synthesizing: one call to the speech backend with the translated text
    ///
    /// Returns the translated text with its MP3 artifact
    async fn translate_and_synthesize(
        &self,
        credential: &Credential,
        text: &str,
        target_language: &str,
    ) -> Result<TranslationOutcome, PipelineError>;
}

#[async_trait]
impl TranslationServiceApi for TranslationService {
    async fn translate_and_synthesize(
        &self,
        credential: &Credential,
        text: &str,
        target_language: &str,
    ) -> Result<TranslationOutcome, PipelineError> {
        let result = self.run(credential, text, target_language).await;

        if let Err(error) = &result {
            tracing::warn!(
                stage = ?error.stage(),
                error = %error,
                target_language = target_language,
                "Translation pipeline failed"
            );
        }

        result
    }
}

impl TranslationService {
    async fn run(
        &self,
        credential: &Credential,
        text: &str,
        target_language: &str,
    ) -> Result<TranslationOutcome, PipelineError> {
        // 1. Validate input
        tracing::debug!(
            stage = %Stage::Validating,
            text_length = text.chars().count(),
            "Validating input"
        );
        validate(text)?;
        let language = find_by_name(target_language)
            .ok_or_else(|| PipelineError::UnknownLanguage(target_language.to_string()))?;

        // 2. Translate
        tracing::info!(
            stage = %Stage::Translating,
            target_language = language.name,
            text_length = text.chars().count(),
            "Translating text"
        );
        let translated_text = self
            .translation_repo
            .translate(text, language.name, credential)
            .await?;

        // 3. Synthesize the translation, not the source
        tracing::info!(
            stage = %Stage::Synthesizing,
            language_code = language.code,
            text_length = translated_text.chars().count(),
            "Synthesizing translated text"
        );
        let audio_data = self
            .tts_repo
            .synthesize(&translated_text, language.code)
            .await?;

        let audio = AudioArtifact::new(audio_data, language, self.clock.now());

        tracing::info!(
            filename = %audio.suggested_filename,
            audio_size_bytes = audio.bytes.len(),
            "Translation pipeline completed"
        );

        Ok(TranslationOutcome {
            translated_text,
            language,
            audio,
        })
    }
}
