use crate::e2e::helpers;

use base64::{engine::general_purpose::STANDARD, Engine};
use helpers::api_client::FormPart;
use helpers::fixtures::{sample_csv, DEFAULT_REPLY, FAKE_MP3};
use helpers::{TestContext, TEST_API_KEY};
use hyper::StatusCode;
use polyglot_backend::domain::translation::dto::TranslateResponse;
use polyglot_backend::domain::translation::{SynthesisError, TranslationError};
use pretty_assertions::assert_eq;
use serde_json::json;
use test_context::test_context;

const SAMPLE_TEXT: &str = "Hello, how are you? I hope you have a great day!!!";
const FROZEN_STAMP: &str = "20251022_174530";

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_translation_without_credential(ctx: &TestContext) {
    let response = ctx
        .client
        .post(
            "/api/translate",
            &json!({"text": SAMPLE_TEXT, "target_language": "Spanish"}),
        )
        .await
        .unwrap();

    response
        .assert_status(StatusCode::UNAUTHORIZED)
        .assert_error_message("Please enter your Gemini API key to continue.");

    assert!(ctx.translator.calls().is_empty());
    assert!(ctx.synthesizer.calls().is_empty());
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_blank_credential_header(ctx: &TestContext) {
    let response = ctx
        .client
        .post_with_key(
            "/api/translate",
            &json!({"text": SAMPLE_TEXT, "target_language": "Spanish"}),
            "   ",
        )
        .await
        .unwrap();

    response.assert_status(StatusCode::UNAUTHORIZED);
    assert!(ctx.translator.calls().is_empty());
}

#[tokio::test]
async fn it_should_fall_back_to_configured_key() {
    let ctx = TestContext::start(Some("server-side-key")).await;

    let response = ctx
        .client
        .post(
            "/api/translate",
            &json!({"text": SAMPLE_TEXT, "target_language": "Spanish"}),
        )
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    assert_eq!(ctx.translator.calls()[0].credential, "server-side-key");
}

#[tokio::test]
async fn it_should_prefer_header_key_over_configured_key() {
    let ctx = TestContext::start(Some("server-side-key")).await;

    let response = ctx
        .client
        .post_with_key(
            "/api/translate",
            &json!({"text": SAMPLE_TEXT, "target_language": "Spanish"}),
            "caller-key",
        )
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    assert_eq!(ctx.translator.calls()[0].credential, "caller-key");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_translate_and_synthesize_text(ctx: &TestContext) {
    let response = ctx
        .client
        .post_with_key(
            "/api/translate",
            &json!({"text": SAMPLE_TEXT, "target_language": "Spanish"}),
            TEST_API_KEY,
        )
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);

    let body: TranslateResponse = response.json().unwrap();
    assert_eq!(body.original_preview, SAMPLE_TEXT);
    assert_eq!(body.translated_text, DEFAULT_REPLY);
    assert_eq!(body.language.name, "Spanish");
    assert_eq!(body.language.code, "es");
    assert_eq!(
        body.audio.filename,
        format!("translation_Spanish_{}.mp3", FROZEN_STAMP)
    );
    assert_eq!(body.audio.mime_type, "audio/mp3");
    assert_eq!(body.audio.size_bytes, FAKE_MP3.len());
    assert_eq!(STANDARD.decode(&body.audio.data_base64).unwrap(), FAKE_MP3);

    let translate_calls = ctx.translator.calls();
    assert_eq!(translate_calls.len(), 1);
    assert_eq!(translate_calls[0].text, SAMPLE_TEXT);
    assert_eq!(translate_calls[0].target_language, "Spanish");
    assert_eq!(translate_calls[0].credential, TEST_API_KEY);

    // Speech gets the translation, not the source text
    assert_eq!(
        ctx.synthesizer.calls(),
        vec![(DEFAULT_REPLY.to_string(), "es".to_string())]
    );
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_default_to_hindi(ctx: &TestContext) {
    let response = ctx
        .client
        .post_with_key("/api/translate", &json!({"text": SAMPLE_TEXT}), TEST_API_KEY)
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);

    let body: TranslateResponse = response.json().unwrap();
    assert_eq!(body.language.code, "hi");
    assert_eq!(ctx.synthesizer.calls()[0].1, "hi");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_empty_text(ctx: &TestContext) {
    let response = ctx
        .client
        .post_with_key(
            "/api/translate",
            &json!({"text": "", "target_language": "French"}),
            TEST_API_KEY,
        )
        .await
        .unwrap();

    response
        .assert_status(StatusCode::BAD_REQUEST)
        .assert_error_message("Please enter text or upload a file before translating.");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_short_text_without_calling_backends(ctx: &TestContext) {
    let response = ctx
        .client
        .post_with_key(
            "/api/translate",
            &json!({"text": "Hi", "target_language": "French"}),
            TEST_API_KEY,
        )
        .await
        .unwrap();

    response
        .assert_status(StatusCode::BAD_REQUEST)
        .assert_error_message("Text is too short. Please enter at least 3 characters.");

    assert!(ctx.translator.calls().is_empty());
    assert!(ctx.synthesizer.calls().is_empty());
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_text_over_limit(ctx: &TestContext) {
    let text = "a".repeat(10_001);
    let response = ctx
        .client
        .post_with_key(
            "/api/translate",
            &json!({"text": text, "target_language": "French"}),
            TEST_API_KEY,
        )
        .await
        .unwrap();

    response
        .assert_status(StatusCode::PAYLOAD_TOO_LARGE)
        .assert_error_message("Text is too long. Please limit to 10,000 characters.");
    assert!(ctx.translator.calls().is_empty());
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_accept_text_at_limit(ctx: &TestContext) {
    let text = "a".repeat(10_000);
    let response = ctx
        .client
        .post_with_key(
            "/api/translate",
            &json!({"text": text, "target_language": "French"}),
            TEST_API_KEY,
        )
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_unknown_language(ctx: &TestContext) {
    let response = ctx
        .client
        .post_with_key(
            "/api/translate",
            &json!({"text": SAMPLE_TEXT, "target_language": "Klingon"}),
            TEST_API_KEY,
        )
        .await
        .unwrap();

    response
        .assert_status(StatusCode::BAD_REQUEST)
        .assert_error_message("Klingon");
    assert!(ctx.translator.calls().is_empty());
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_surface_translation_auth_failure(ctx: &TestContext) {
    *ctx.translator.fail_next.lock() = Some(TranslationError::Auth("API key not valid".into()));

    let response = ctx
        .client
        .post_with_key(
            "/api/translate",
            &json!({"text": SAMPLE_TEXT, "target_language": "German"}),
            "wrong-key",
        )
        .await
        .unwrap();

    response
        .assert_status(StatusCode::UNAUTHORIZED)
        .assert_error_message("API key not valid");
    assert!(ctx.synthesizer.calls().is_empty());
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_surface_translation_transport_failure(ctx: &TestContext) {
    *ctx.translator.fail_next.lock() =
        Some(TranslationError::Transport("connection refused".into()));

    let response = ctx
        .client
        .post_with_key(
            "/api/translate",
            &json!({"text": SAMPLE_TEXT, "target_language": "German"}),
            TEST_API_KEY,
        )
        .await
        .unwrap();

    response
        .assert_status(StatusCode::BAD_GATEWAY)
        .assert_error_message("Translation error: connection refused");
    assert!(ctx.synthesizer.calls().is_empty());
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_surface_synthesis_failure(ctx: &TestContext) {
    *ctx.synthesizer.fail_next.lock() = Some(SynthesisError::Transport("timed out".into()));

    let response = ctx
        .client
        .post_with_key(
            "/api/translate",
            &json!({"text": SAMPLE_TEXT, "target_language": "Japanese"}),
            TEST_API_KEY,
        )
        .await
        .unwrap();

    response
        .assert_status(StatusCode::BAD_GATEWAY)
        .assert_error_message("Text-to-speech error: timed out");
    assert_eq!(ctx.translator.calls().len(), 1);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_recover_after_a_failed_action(ctx: &TestContext) {
    *ctx.translator.fail_next.lock() = Some(TranslationError::Transport("flaky".into()));
    let body = json!({"text": SAMPLE_TEXT, "target_language": "Italian"});

    ctx.client
        .post_with_key("/api/translate", &body, TEST_API_KEY)
        .await
        .unwrap()
        .assert_status(StatusCode::BAD_GATEWAY);

    ctx.client
        .post_with_key("/api/translate", &body, TEST_API_KEY)
        .await
        .unwrap()
        .assert_status(StatusCode::OK);

    assert_eq!(ctx.translator.calls().len(), 2);
    assert_eq!(ctx.synthesizer.calls().len(), 1);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_return_audio_download(ctx: &TestContext) {
    let response = ctx
        .client
        .post_with_key(
            "/api/translate/audio",
            &json!({"text": SAMPLE_TEXT, "target_language": "Chinese (Simplified)"}),
            TEST_API_KEY,
        )
        .await
        .unwrap();

    response
        .assert_status(StatusCode::OK)
        .assert_header("content-type", "audio/mp3")
        .assert_header("x-target-language", "zh-CN")
        .assert_header(
            "x-character-count",
            &DEFAULT_REPLY.chars().count().to_string(),
        );

    let disposition = response.header("content-disposition").unwrap();
    assert!(disposition.starts_with(&format!(
        "attachment; filename=\"translation_Chinese (Simplified)_{}.mp3\"",
        FROZEN_STAMP
    )));
    assert_eq!(response.body_bytes, FAKE_MP3);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_translate_uploaded_csv(ctx: &TestContext) {
    let csv = sample_csv();
    let response = ctx
        .client
        .post_multipart(
            "/api/translate/file",
            &[
                FormPart::Text {
                    name: "target_language",
                    value: "French",
                },
                FormPart::File {
                    name: "file",
                    file_name: "inventory.csv",
                    bytes: &csv,
                },
            ],
            Some(TEST_API_KEY),
        )
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);

    let body: TranslateResponse = response.json().unwrap();
    assert_eq!(body.language.code, "fr");
    assert_eq!(
        body.audio.filename,
        format!("translation_French_{}.mp3", FROZEN_STAMP)
    );

    let calls = ctx.translator.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].target_language, "French");
    assert!(calls[0].text.contains("Keyboard"));
    assert!(body.original_preview.contains("product"));
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_validate_text_extracted_from_upload(ctx: &TestContext) {
    let response = ctx
        .client
        .post_multipart(
            "/api/translate/file",
            &[FormPart::File {
                name: "file",
                file_name: "tiny.txt",
                bytes: b"Hi",
            }],
            Some(TEST_API_KEY),
        )
        .await
        .unwrap();

    response.assert_status(StatusCode::BAD_REQUEST);
    assert!(ctx.translator.calls().is_empty());
}
