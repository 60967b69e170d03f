use crate::domain::translation::SynthesisError;
use async_trait::async_trait;

/// Repository for speech synthesis.
/// Abstracts the underlying TTS provider.
///
/// Implementations are responsible for:
/// - Handling provider-specific text length limitations
/// - Merging audio chunks into a single MP3 stream
/// - Rejecting language codes the provider cannot speak
#[async_trait]
pub trait TtsRepository: Send + Sync {
    /// Synthesize `text` at normal speed in the language identified by `language_code`
    /// (for example "hi" or "zh-CN").
    ///
    /// Returns the complete MP3 audio, buffered in memory.
    async fn synthesize(&self, text: &str, language_code: &str) -> Result<Vec<u8>, SynthesisError>;
}
