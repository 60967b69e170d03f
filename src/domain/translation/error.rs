use serde::Serialize;

use crate::error::AppError;

/// Rejections raised before any backend is contacted
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please enter text or upload a file before translating.")]
    Empty,
    #[error("Text is too short. Please enter at least 3 characters.")]
    TooShort,
    #[error("Text is too long. Please limit to 10,000 characters.")]
    TooLong,
}

#[derive(Debug, thiserror::Error)]
pub enum TranslationError {
    #[error("Translation error: {0}")]
    Transport(String),
    #[error("Translation error: authentication failed: {0}")]
    Auth(String),
    #[error("Translation error: empty response: {0}")]
    EmptyResponse(String),
}

#[derive(Debug, thiserror::Error)]
pub enum SynthesisError {
    #[error("Text-to-speech error: {0}")]
    Transport(String),
    #[error("Text-to-speech error: language not supported: {0}")]
    UnsupportedLanguage(String),
    #[error("Text-to-speech error: no text to speak")]
    EmptyText,
}

/// Unit of work in the translate action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Validating,
    Translating,
    Synthesizing,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Stage::Validating => "validating",
            Stage::Translating => "translating",
            Stage::Synthesizing => "synthesizing",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("Please enter your Gemini API key to continue.")]
    MissingCredential,
    #[error("Unsupported target language: {0}")]
    UnknownLanguage(String),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Translation(#[from] TranslationError),
    #[error(transparent)]
    Synthesis(#[from] SynthesisError),
}

impl PipelineError {
    /// Stage that produced the failure, `None` when the action never started
    pub fn stage(&self) -> Option<Stage> {
        match self {
            PipelineError::MissingCredential => None,
            PipelineError::UnknownLanguage(_) | PipelineError::Validation(_) => {
                Some(Stage::Validating)
            }
            PipelineError::Translation(_) => Some(Stage::Translating),
            PipelineError::Synthesis(_) => Some(Stage::Synthesizing),
        }
    }
}

impl From<PipelineError> for AppError {
    fn from(err: PipelineError) -> Self {
        let message = err.to_string();
        match err {
            PipelineError::MissingCredential => AppError::Unauthorized(message),
            PipelineError::UnknownLanguage(_) => AppError::BadRequest(message),
            PipelineError::Validation(ValidationError::TooLong) => {
                AppError::PayloadTooLarge(message)
            }
            PipelineError::Validation(_) => AppError::BadRequest(message),
            PipelineError::Translation(TranslationError::Auth(_)) => {
                AppError::Unauthorized(message)
            }
            PipelineError::Translation(_) => AppError::ExternalService(message),
            PipelineError::Synthesis(SynthesisError::UnsupportedLanguage(_)) => {
                AppError::BadRequest(message)
            }
            PipelineError::Synthesis(_) => AppError::ExternalService(message),
        }
    }
}
