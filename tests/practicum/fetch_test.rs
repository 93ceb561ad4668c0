use homework_bot::services::practicum::{FetchError, HomeworkApi, PracticumClient};
use reqwest::StatusCode;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

use crate::common::{homework_answer, TestContext, PRACTICUM_TOKEN, STATUSES_PATH};

// =============================================================================
// INTEGRATION TESTS - PRACTICUM FETCHER
// =============================================================================

fn client(ctx: &TestContext) -> PracticumClient {
    PracticumClient::from_config(&ctx.config())
}

#[tokio::test]
async fn test_sends_token_and_from_date() {
    let ctx = TestContext::new().await;

    Mock::given(method("GET"))
        .and(path(STATUSES_PATH))
        .and(header("Authorization", format!("OAuth {}", PRACTICUM_TOKEN).as_str()))
        .and(query_param("from_date", "1664843799"))
        .respond_with(ResponseTemplate::new(200).set_body_json(homework_answer("hw05_final", "approved")))
        .expect(1)
        .mount(&ctx.practicum)
        .await;

    let answer = client(&ctx).get_api_answer(1664843799).await.unwrap();
    assert_eq!(answer["homeworks"][0]["homework_name"], "hw05_final");
}

#[tokio::test]
async fn test_zero_timestamp_uses_current_time() {
    let ctx = TestContext::new().await;

    Mock::given(method("GET"))
        .and(path(STATUSES_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"homeworks": []})))
        .mount(&ctx.practicum)
        .await;

    let before = chrono::Utc::now().timestamp();
    client(&ctx).get_api_answer(0).await.unwrap();
    let after = chrono::Utc::now().timestamp();

    let requests = ctx.practicum.received_requests().await.unwrap();
    let from_date: i64 = requests[0]
        .url
        .query_pairs()
        .find(|(key, _)| key == "from_date")
        .map(|(_, value)| value.parse().unwrap())
        .expect("from_date should be sent");

    assert!(from_date >= before && from_date <= after);
}

#[tokio::test]
async fn test_non_200_is_an_error() {
    let ctx = TestContext::new().await;

    Mock::given(method("GET"))
        .and(path(STATUSES_PATH))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "code": "not_authenticated",
            "message": "Учетные данные не были предоставлены."
        })))
        .mount(&ctx.practicum)
        .await;

    let err = client(&ctx).get_api_answer(1664843799).await.unwrap_err();
    match err {
        FetchError::UnexpectedStatus { status } => assert_eq!(status, StatusCode::UNAUTHORIZED),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn test_non_json_body_is_an_error() {
    let ctx = TestContext::new().await;

    Mock::given(method("GET"))
        .and(path(STATUSES_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&ctx.practicum)
        .await;

    let err = client(&ctx).get_api_answer(1664843799).await.unwrap_err();
    assert!(matches!(err, FetchError::InvalidJson(_)));
}

#[tokio::test]
async fn test_unreachable_server_is_a_transport_error() {
    // Nothing listens on port 1
    let client = PracticumClient::new(
        PRACTICUM_TOKEN.to_string(),
        format!("http://127.0.0.1:1{}", STATUSES_PATH),
    );

    let err = client.get_api_answer(1664843799).await.unwrap_err();
    assert!(matches!(err, FetchError::Transport(_)));
    assert!(err.to_string().starts_with("Запрос на сервер не отправлен."));
}
