use super::tts_repository::TtsRepository;
use crate::domain::language::find_by_code;
use crate::domain::translation::SynthesisError;
use async_trait::async_trait;
use regex::Regex;
use std::sync::LazyLock;

pub const DEFAULT_TTS_BASE_URL: &str = "https://translate.google.com";

/// The Translate speech endpoint rejects requests longer than 100 characters
const MAX_BATCH_SIZE: usize = 100;

/// Normal (non-slow) speaking rate
const NORMAL_SPEED: &str = "1";

static SENTENCE_END: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?;:,。！？、]+\s*").expect("sentence pattern is valid"));

/// Google Translate speech implementation of the TTS repository
pub struct GoogleTtsRepository {
    http_client: reqwest::Client,
    base_url: String,
}

impl GoogleTtsRepository {
    pub fn new(base_url: String) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            base_url,
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/translate_tts", self.base_url.trim_end_matches('/'))
    }

    /// Call the speech endpoint for a single text batch
    async fn call_google(
        &self,
        text: &str,
        language_code: &str,
        index: usize,
        total: usize,
    ) -> Result<Vec<u8>, SynthesisError> {
        tracing::debug!(
            language = language_code,
            batch_index = index,
            text_length = text.chars().count(),
            "Calling Google TTS"
        );

        let text_length = text.chars().count().to_string();
        let index = index.to_string();
        let total = total.to_string();

        let response = self
            .http_client
            .get(self.endpoint())
            .query(&[
                ("ie", "UTF-8"),
                ("client", "tw-ob"),
                ("tl", language_code),
                ("ttsspeed", NORMAL_SPEED),
                ("q", text),
                ("textlen", text_length.as_str()),
                ("idx", index.as_str()),
                ("total", total.as_str()),
            ])
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, language = language_code, "Google TTS request failed");
                SynthesisError::Transport(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            tracing::error!(
                status = status.as_u16(),
                language = language_code,
                "Google TTS returned an error"
            );
            return Err(SynthesisError::Transport(format!(
                "{} {}",
                status.as_u16(),
                body.chars().take(200).collect::<String>()
            )));
        }

        let audio = response
            .bytes()
            .await
            .map_err(|e| SynthesisError::Transport(e.to_string()))?;

        if audio.is_empty() {
            return Err(SynthesisError::Transport(
                "speech service returned no audio".to_string(),
            ));
        }

        Ok(audio.to_vec())
    }

    /// Synthesize batches one after another and concatenate the MP3 frames in order
    async fn synthesize_batches(
        &self,
        batches: &[String],
        language_code: &str,
    ) -> Result<Vec<u8>, SynthesisError> {
        let mut merged_audio = Vec::new();

        for (index, batch) in batches.iter().enumerate() {
            let audio = self
                .call_google(batch, language_code, index, batches.len())
                .await?;
            merged_audio.extend(audio);
        }

        Ok(merged_audio)
    }
}

fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Break text into pieces of at most `MAX_BATCH_SIZE` characters, preferring
/// sentence punctuation, then whitespace, then raw character boundaries.
fn split_pieces(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut last_end = 0;
    for mat in SENTENCE_END.find_iter(text) {
        sentences.push(&text[last_end..mat.end()]);
        last_end = mat.end();
    }
    if last_end < text.len() {
        sentences.push(&text[last_end..]);
    }

    let mut pieces = Vec::new();
    for sentence in sentences {
        if char_len(sentence) <= MAX_BATCH_SIZE {
            pieces.push(sentence);
            continue;
        }
        for word in sentence.split_inclusive(char::is_whitespace) {
            if char_len(word) <= MAX_BATCH_SIZE {
                pieces.push(word);
                continue;
            }
            let mut start = 0;
            for (count, (offset, _)) in word.char_indices().enumerate() {
                if count > 0 && count % MAX_BATCH_SIZE == 0 {
                    pieces.push(&word[start..offset]);
                    start = offset;
                }
            }
            pieces.push(&word[start..]);
        }
    }

    pieces
}

/// Group pieces into batches of at most `MAX_BATCH_SIZE` characters
pub(crate) fn split_into_batches(text: &str) -> Vec<String> {
    let text = text.trim();
    if char_len(text) <= MAX_BATCH_SIZE {
        return vec![text.to_string()];
    }

    let mut batches = Vec::new();
    let mut current_batch = String::new();

    for piece in split_pieces(text) {
        if !current_batch.is_empty() && char_len(&current_batch) + char_len(piece) > MAX_BATCH_SIZE
        {
            batches.push(current_batch.trim().to_string());
            current_batch = String::new();
        }
        current_batch.push_str(piece);
    }

    if !current_batch.trim().is_empty() {
        batches.push(current_batch.trim().to_string());
    }

    batches.retain(|batch| !batch.is_empty());
    batches
}

#[async_trait]
impl TtsRepository for GoogleTtsRepository {
    async fn synthesize(&self, text: &str, language_code: &str) -> Result<Vec<u8>, SynthesisError> {
        let start_time = std::time::Instant::now();

        if find_by_code(language_code).is_none() {
            return Err(SynthesisError::UnsupportedLanguage(language_code.to_string()));
        }
        if text.trim().is_empty() {
            return Err(SynthesisError::EmptyText);
        }

        let batches = split_into_batches(text);
        tracing::info!(
            language = language_code,
            batch_count = batches.len(),
            text_length = char_len(text),
            "Starting Google TTS synthesis"
        );

        let audio_data = self.synthesize_batches(&batches, language_code).await?;

        tracing::info!(
            provider = "google",
            language = language_code,
            latency_ms = start_time.elapsed().as_millis(),
            batch_count = batches.len(),
            audio_size_bytes = audio_data.len(),
            "TTS synthesis completed"
        );

        Ok(audio_data)
    }
}
