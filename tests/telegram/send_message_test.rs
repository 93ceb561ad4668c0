use homework_bot::services::telegram::{send_message, Notifier, NotifyError, TelegramBot};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, ResponseTemplate};

use crate::common::{send_message_path, telegram_ok, TestContext, CHAT_ID};

// =============================================================================
// INTEGRATION TESTS - TELEGRAM NOTIFIER
// =============================================================================

#[tokio::test]
async fn test_posts_chat_id_and_text() {
    let ctx = TestContext::new().await;

    Mock::given(method("POST"))
        .and(path(send_message_path()))
        .and(body_json(serde_json::json!({"chat_id": CHAT_ID, "text": "Привет"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(telegram_ok()))
        .expect(1)
        .mount(&ctx.telegram)
        .await;

    let bot = TelegramBot::from_config(&ctx.config());
    bot.send("Привет").await.unwrap();
}

#[tokio::test]
async fn test_api_error_status() {
    let ctx = TestContext::new().await;

    Mock::given(method("POST"))
        .and(path(send_message_path()))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "ok": false,
            "error_code": 400,
            "description": "Bad Request: chat not found"
        })))
        .mount(&ctx.telegram)
        .await;

    let bot = TelegramBot::from_config(&ctx.config());
    let err = bot.send("Привет").await.unwrap_err();

    match err {
        NotifyError::Api { status, body } => {
            assert_eq!(status, 400);
            assert!(body.contains("chat not found"));
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn test_ok_false_is_rejected() {
    let ctx = TestContext::new().await;

    Mock::given(method("POST"))
        .and(path(send_message_path()))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "ok": false,
            "description": "Forbidden: bot was blocked by the user"
        })))
        .mount(&ctx.telegram)
        .await;

    let bot = TelegramBot::from_config(&ctx.config());
    let err = bot.send("Привет").await.unwrap_err();
    assert!(matches!(err, NotifyError::Rejected(ref d) if d.contains("blocked")));
}

#[tokio::test]
async fn test_send_message_never_propagates() {
    let bot = TelegramBot::new(
        "http://127.0.0.1:1".to_string(),
        "123456:test-bot-token".to_string(),
        CHAT_ID.to_string(),
    );

    assert!(!send_message(&bot, "Привет").await);
}

#[tokio::test]
async fn test_network_error_hides_token() {
    let bot = TelegramBot::new(
        "http://127.0.0.1:1".to_string(),
        "123456:test-bot-token".to_string(),
        CHAT_ID.to_string(),
    );

    let err = bot.send("Привет").await.unwrap_err();
    assert!(!err.to_string().contains("test-bot-token"));
}
