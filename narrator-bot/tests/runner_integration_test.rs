//! Integration tests for the assembled bot (NarratorBot, handle_core_message).
//!
//! Gemini is imitated by a `mockito` server; a recording Bot replaces Telegram delivery.

mod common;

use std::env;
use std::sync::Arc;

use common::{init_tracing, setup_test_config, text_message, RecordingBot, Sent, AUDIO_RESPONSE, MODEL_PATH, TEST_KEY};
use narration_handlers::{DEFAULT_CAPTION, DEFAULT_GREETING};
use narrator_bot::{BotConfig, NarratorBot};
use serial_test::serial;
use wav_encoder::{PcmFormat, WavHeader, WAV_HEADER_LEN};

fn build_bot(config: BotConfig) -> (NarratorBot, Arc<RecordingBot>) {
    let recorder = Arc::new(RecordingBot::default());
    let bot = NarratorBot::with_handler_bot(config, Some(recorder.clone()))
        .expect("bot must build from test config");
    (bot, recorder)
}

/// **Test: A text message is narrated and delivered as a captioned WAV voice message.**
///
/// **Setup:** Mock Gemini returns 6 PCM bytes.
/// **Expected:** Progress text, then one voice message whose bytes are header + those 6 bytes.
#[tokio::test]
#[serial]
async fn test_text_message_is_narrated() {
    init_tracing();
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", MODEL_PATH)
        .match_header("x-goog-api-key", TEST_KEY)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(AUDIO_RESPONSE)
        .expect(1)
        .create_async()
        .await;

    let (bot, recorder) = build_bot(setup_test_config(&server.url()));
    bot.handle_core_message(&text_message("Once upon a time there was a fox."))
        .await
        .unwrap();

    mock.assert_async().await;
    let sent = recorder.sent();
    assert_eq!(sent.len(), 2, "progress + voice, got {:?}", sent);
    assert!(matches!(&sent[0], Sent::Text(t) if t.starts_with("Generating")));
    match &sent[1] {
        Sent::Voice { audio, caption } => {
            assert_eq!(audio.len(), WAV_HEADER_LEN + 6);
            assert_eq!(&audio[WAV_HEADER_LEN..], &[0, 0, 1, 0, 2, 0]);
            let header = WavHeader::parse(audio).unwrap();
            assert_eq!(header.format(), PcmFormat::NARRATION);
            assert_eq!(caption.as_deref(), Some(DEFAULT_CAPTION));
        }
        other => panic!("expected voice, got {:?}", other),
    }
}

/// **Test: /start gets the greeting and never reaches the speech model.**
#[tokio::test]
#[serial]
async fn test_start_command_greets_without_synthesis() {
    init_tracing();
    let mut server = mockito::Server::new_async().await;
    let mock = server.mock("POST", MODEL_PATH).expect(0).create_async().await;

    let (bot, recorder) = build_bot(setup_test_config(&server.url()));
    bot.handle_core_message(&text_message("/start")).await.unwrap();

    mock.assert_async().await;
    assert_eq!(recorder.sent(), vec![Sent::Text(DEFAULT_GREETING.to_string())]);
}

/// **Test: Over-long text is rejected with the configured limit and no synthesis call.**
#[tokio::test]
#[serial]
async fn test_too_long_text_rejected() {
    init_tracing();
    let mut server = mockito::Server::new_async().await;
    let mock = server.mock("POST", MODEL_PATH).expect(0).create_async().await;

    let config = setup_test_config(&server.url());
    env::set_var("NARRATION_MAX_CHARS", "10");
    let config = BotConfig {
        narration: narrator_bot::NarrationConfig::from_env().unwrap(),
        ..config
    };
    env::remove_var("NARRATION_MAX_CHARS");

    let (bot, recorder) = build_bot(config);
    bot.handle_core_message(&text_message("Once upon a time, long ago"))
        .await
        .unwrap();

    mock.assert_async().await;
    let sent = recorder.sent();
    assert_eq!(sent.len(), 1);
    assert!(matches!(&sent[0], Sent::Text(t) if t.contains("max ~10 chars")));
}

/// **Test: A Gemini API error is reported to the user with its reason; nothing is delivered.**
#[tokio::test]
#[serial]
async fn test_gemini_error_is_reported() {
    init_tracing();
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", MODEL_PATH)
        .with_status(429)
        .with_header("content-type", "application/json")
        .with_body(r#"{"error": {"code": 429, "message": "Resource has been exhausted", "status": "RESOURCE_EXHAUSTED"}}"#)
        .create_async()
        .await;

    let (bot, recorder) = build_bot(setup_test_config(&server.url()));
    bot.handle_core_message(&text_message("A dragon slept.")).await.unwrap();

    let sent = recorder.sent();
    assert!(sent.iter().all(|s| matches!(s, Sent::Text(_))), "no voice expected: {:?}", sent);
    let last = match sent.last() {
        Some(Sent::Text(t)) => t.clone(),
        other => panic!("expected failure reply, got {:?}", other),
    };
    assert!(last.contains("narration failed"));
    assert!(last.contains("Resource has been exhausted"));
}

/// **Test: Invalid config is rejected before anything is built.**
#[test]
#[serial]
fn test_invalid_config_fails_build() {
    let mut config = setup_test_config("http://127.0.0.1:1");
    config.narration.max_chars = 0;
    assert!(NarratorBot::new(config).is_err());
}
