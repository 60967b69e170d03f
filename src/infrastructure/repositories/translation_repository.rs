use crate::domain::translation::{Credential, TranslationError};
use async_trait::async_trait;

/// Repository for text translation backed by a generative language model.
#[async_trait]
pub trait TranslationRepository: Send + Sync {
    /// Translate `text` into the language named `target_language` (a display
    /// name such as "Hindi", not a code).
    ///
    /// Returns only the translated text with surrounding whitespace trimmed.
    /// The credential is supplied per call and never stored.
    async fn translate(
        &self,
        text: &str,
        target_language: &str,
        credential: &Credential,
    ) -> Result<String, TranslationError>;
}
