use super::translation_repository::TranslationRepository;
use crate::domain::translation::{Credential, TranslationError};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-flash-latest";

const API_KEY_HEADER: &str = "x-goog-api-key";

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<Content>,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorEnvelope {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

impl GenerateContentResponse {
    /// Text parts of the first candidate, concatenated
    fn first_candidate_text(&self) -> String {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(|content| {
                content
                    .parts
                    .iter()
                    .filter_map(|p| p.text.as_deref())
                    .collect::<String>()
            })
            .unwrap_or_default()
    }

    fn empty_reason(&self) -> String {
        if let Some(reason) = self
            .prompt_feedback
            .as_ref()
            .and_then(|f| f.block_reason.as_deref())
        {
            return format!("prompt blocked ({})", reason);
        }
        match self.candidates.first().and_then(|c| c.finish_reason.as_deref()) {
            Some(reason) => format!("model returned no text (finish reason: {})", reason),
            None => "model returned no text".to_string(),
        }
    }
}

/// Gemini `generateContent` implementation of the translation repository
pub struct GeminiTranslationRepository {
    http_client: reqwest::Client,
    base_url: String,
    model: String,
}

impl GeminiTranslationRepository {
    pub fn new(base_url: String, model: String) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            base_url,
            model,
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        )
    }

    /// Map a non-success HTTP reply to a translation error
    fn classify_failure(status: reqwest::StatusCode, body: &str) -> TranslationError {
        let message = serde_json::from_str::<ApiErrorEnvelope>(body)
            .map(|envelope| envelope.error.message)
            .unwrap_or_else(|_| body.trim().to_string());
        let detail = format!("{} {}", status.as_u16(), message);

        let rejected_key = status == reqwest::StatusCode::UNAUTHORIZED
            || status == reqwest::StatusCode::FORBIDDEN
            || body.contains("API_KEY_INVALID");

        if rejected_key {
            TranslationError::Auth(detail)
        } else {
            TranslationError::Transport(detail)
        }
    }
}

/// Instruction asking the model for the bare translation
pub fn build_prompt(text: &str, target_language: &str) -> String {
    format!(
        "Translate the following text to {}.\n\
         Provide ONLY the translation without any explanations or additional text.\n\
         \n\
         Text to translate:\n\
         {}\n",
        target_language, text
    )
}

#[async_trait]
impl TranslationRepository for GeminiTranslationRepository {
    async fn translate(
        &self,
        text: &str,
        target_language: &str,
        credential: &Credential,
    ) -> Result<String, TranslationError> {
        let start_time = std::time::Instant::now();

        tracing::info!(
            model = %self.model,
            target_language = target_language,
            text_length = text.chars().count(),
            "Calling Gemini generateContent"
        );

        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: Some(build_prompt(text, target_language)),
                }],
            }],
        };

        let response = self
            .http_client
            .post(self.endpoint())
            .header(API_KEY_HEADER, credential.expose())
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, model = %self.model, "Gemini request failed");
                TranslationError::Transport(e.to_string())
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| TranslationError::Transport(e.to_string()))?;

        if !status.is_success() {
            let error = Self::classify_failure(status, &body);
            tracing::error!(
                error = %error,
                status = status.as_u16(),
                model = %self.model,
                "Gemini returned an error"
            );
            return Err(error);
        }

        let parsed: GenerateContentResponse = serde_json::from_str(&body).map_err(|e| {
            TranslationError::EmptyResponse(format!("malformed response body: {}", e))
        })?;

        let translated = parsed.first_candidate_text().trim().to_string();
        if translated.is_empty() {
            return Err(TranslationError::EmptyResponse(parsed.empty_reason()));
        }

        tracing::info!(
            provider = "gemini",
            model = %self.model,
            latency_ms = start_time.elapsed().as_millis(),
            translated_length = translated.chars().count(),
            "Translation completed"
        );

        Ok(translated)
    }
}
