use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::{Value, json};
use quiz_notifier::api::handler::notify;
use quiz_notifier::core::config::AppConfig;
use quiz_notifier::errors::NotifierError;
use quiz_notifier::telegram::{SendMessageRequest, TelegramApi, TelegramResponse};

/// Records every outbound call and answers with a canned reply.
struct StubTelegram {
    reply: Value,
    calls: Mutex<Vec<(String, SendMessageRequest)>>,
}

impl StubTelegram {
    fn replying(reply: Value) -> Self {
        Self {
            reply,
            calls: Mutex::new(Vec::new()),
        }
    }

    fn calls(&self) -> Vec<(String, SendMessageRequest)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl TelegramApi for StubTelegram {
    async fn send_message(
        &self,
        bot_token: &str,
        request: &SendMessageRequest,
    ) -> Result<TelegramResponse, NotifierError> {
        self.calls
            .lock()
            .unwrap()
            .push((bot_token.to_string(), request.clone()));
        Ok(TelegramResponse::from_value(self.reply.clone()))
    }
}

/// Fails every call as a transport error would.
struct UnreachableTelegram;

#[async_trait]
impl TelegramApi for UnreachableTelegram {
    async fn send_message(
        &self,
        _bot_token: &str,
        _request: &SendMessageRequest,
    ) -> Result<TelegramResponse, NotifierError> {
        Err(NotifierError::Http("connection refused".to_string()))
    }
}

fn configured() -> AppConfig {
    AppConfig::from_lookup(|key| match key {
        "TELEGRAM_BOT_TOKEN" => Some("123:abc".to_string()),
        "TELEGRAM_CHAT_ID" => Some("-1001".to_string()),
        "RESULTS_TIMEZONE" => Some("UTC".to_string()),
        _ => None,
    })
    .unwrap()
}

fn unconfigured() -> AppConfig {
    AppConfig::from_lookup(|_| None).unwrap()
}

fn event(method: &str, body: &Value) -> Value {
    json!({
        "requestContext": { "http": { "method": method } },
        "body": body.to_string(),
        "isBase64Encoded": false
    })
}

fn submission() -> Value {
    json!({
        "name": "Ada",
        "surname": "Lee",
        "correctAnswers": 1,
        "totalQuestions": 2,
        "score": 50,
        "answers": [
            { "selected": "bigger", "correct": "bigger", "isCorrect": true },
            { "selected": "more good", "correct": "better", "isCorrect": false }
        ],
        "questions": [{ "id": 1 }, { "id": 2 }]
    })
}

fn status(response: &Value) -> u64 {
    response["statusCode"].as_u64().unwrap()
}

fn body(response: &Value) -> Value {
    serde_json::from_str(response["body"].as_str().unwrap()).unwrap()
}

#[tokio::test]
async fn options_is_answered_without_body() {
    let telegram = StubTelegram::replying(json!({ "ok": true }));
    let response = notify(&event("OPTIONS", &json!("garbage")), &configured(), &telegram).await;

    assert_eq!(status(&response), 200);
    assert_eq!(response["body"], "");
    assert_eq!(response["headers"]["Access-Control-Allow-Origin"], "*");
    assert!(telegram.calls().is_empty());
}

#[tokio::test]
async fn other_methods_are_not_allowed() {
    let telegram = StubTelegram::replying(json!({ "ok": true }));
    for method in ["GET", "PUT", "PATCH", "DELETE"] {
        let response = notify(&event(method, &submission()), &configured(), &telegram).await;
        assert_eq!(status(&response), 405, "{method}");
        assert_eq!(body(&response), json!({ "message": "Method not allowed" }));
        assert_eq!(
            response["headers"]["Access-Control-Allow-Methods"],
            "GET,OPTIONS,PATCH,DELETE,POST,PUT"
        );
    }
    assert!(telegram.calls().is_empty());
}

#[tokio::test]
async fn missing_name_is_a_bad_request() {
    let telegram = StubTelegram::replying(json!({ "ok": true }));
    let mut payload = submission();
    payload.as_object_mut().unwrap().remove("name");

    let response = notify(&event("POST", &payload), &configured(), &telegram).await;

    assert_eq!(status(&response), 400);
    assert_eq!(
        body(&response),
        json!({ "success": false, "error": "Missing required fields" })
    );
    assert!(telegram.calls().is_empty());
}

#[tokio::test]
async fn empty_surname_is_a_bad_request() {
    let telegram = StubTelegram::replying(json!({ "ok": true }));
    let mut payload = submission();
    payload["surname"] = json!("");

    let response = notify(&event("POST", &payload), &unconfigured(), &telegram).await;

    assert_eq!(status(&response), 400);
    assert!(telegram.calls().is_empty());
}

#[tokio::test]
async fn missing_credentials_fail_before_dispatch() {
    let telegram = StubTelegram::replying(json!({ "ok": true }));
    let response = notify(&event("POST", &submission()), &unconfigured(), &telegram).await;

    assert_eq!(status(&response), 500);
    assert_eq!(
        body(&response),
        json!({ "success": false, "error": "Telegram bot not configured" })
    );
    assert!(telegram.calls().is_empty());
}

#[tokio::test]
async fn accepted_message_is_reported_as_success() {
    let telegram = StubTelegram::replying(json!({ "ok": true, "result": { "message_id": 7 } }));
    let response = notify(&event("POST", &submission()), &configured(), &telegram).await;

    assert_eq!(status(&response), 200);
    assert_eq!(
        body(&response),
        json!({ "success": true, "message": "Results sent to Telegram successfully" })
    );

    let calls = telegram.calls();
    assert_eq!(calls.len(), 1);
    let (token, request) = &calls[0];
    assert_eq!(token, "123:abc");
    assert_eq!(request.chat_id, "-1001");
    assert_eq!(request.parse_mode, "Markdown");
    assert!(request.text.contains("👤 *Student:* Ada Lee"));
    assert!(request.text.contains("📊 *Score:* 1/2 (50%)"));
    assert!(request.text.contains("Q2: ❌ - Your answer: \"more good\" (Correct: \"better\")"));
    assert!(request.text.contains("Needs improvement! 📚"));
}

#[tokio::test]
async fn provider_rejection_surfaces_description() {
    let telegram = StubTelegram::replying(json!({ "ok": false, "description": "chat not found" }));
    let response = notify(&event("POST", &submission()), &configured(), &telegram).await;

    assert_eq!(status(&response), 500);
    assert_eq!(
        body(&response),
        json!({ "success": false, "error": "chat not found" })
    );
    assert_eq!(telegram.calls().len(), 1);
}

#[tokio::test]
async fn provider_rejection_without_description_uses_fallback() {
    let telegram = StubTelegram::replying(json!({ "ok": false }));
    let response = notify(&event("POST", &submission()), &configured(), &telegram).await;

    assert_eq!(status(&response), 500);
    assert_eq!(body(&response)["error"], "Telegram API error");
}

#[tokio::test]
async fn transport_failure_is_an_internal_error() {
    let response = notify(&event("POST", &submission()), &configured(), &UnreachableTelegram).await;

    assert_eq!(status(&response), 500);
    assert_eq!(
        body(&response),
        json!({ "success": false, "error": "Internal server error: connection refused" })
    );
}

#[tokio::test]
async fn null_answer_entry_is_an_internal_error() {
    let telegram = StubTelegram::replying(json!({ "ok": true }));
    let mut payload = submission();
    payload["answers"] = json!([{ "selected": "bigger" }, null]);

    let response = notify(&event("POST", &payload), &configured(), &telegram).await;

    assert_eq!(status(&response), 500);
    let error = body(&response)["error"].as_str().unwrap().to_string();
    assert!(error.starts_with("Internal server error: "), "{error}");
    assert!(telegram.calls().is_empty());
}

#[tokio::test]
async fn non_array_or_missing_answers_is_an_internal_error() {
    let telegram = StubTelegram::replying(json!({ "ok": true }));

    let mut payload = submission();
    payload["answers"] = json!("all correct");
    let response = notify(&event("POST", &payload), &configured(), &telegram).await;
    assert_eq!(status(&response), 500);

    payload.as_object_mut().unwrap().remove("answers");
    let response = notify(&event("POST", &payload), &configured(), &telegram).await;
    assert_eq!(status(&response), 500);

    assert!(telegram.calls().is_empty());
}

#[tokio::test]
async fn partial_answer_entry_is_still_delivered() {
    let telegram = StubTelegram::replying(json!({ "ok": true }));
    let mut payload = submission();
    payload["answers"] = json!([{ "selected": "bigger" }]);

    let response = notify(&event("POST", &payload), &configured(), &telegram).await;

    assert_eq!(status(&response), 200);
    let text = telegram.calls()[0].1.text.clone();
    assert!(text.contains("Q1: ❌ - Your answer: \"bigger\" (Correct: \"undefined\")"));
}

#[tokio::test]
async fn string_score_is_delivered() {
    let telegram = StubTelegram::replying(json!({ "ok": true }));
    let mut payload = submission();
    payload["score"] = json!("85");

    let response = notify(&event("POST", &payload), &configured(), &telegram).await;

    assert_eq!(status(&response), 200);
    let text = telegram.calls()[0].1.text.clone();
    assert!(text.contains("📊 *Score:* 1/2 (85%)"), "{text}");
    assert!(text.contains("Excellent! 🎉"));
}

#[tokio::test]
async fn float_and_negative_counts_are_delivered() {
    let telegram = StubTelegram::replying(json!({ "ok": true }));
    let mut payload = submission();
    payload["totalQuestions"] = json!(10.0);
    payload["correctAnswers"] = json!(-1);

    let response = notify(&event("POST", &payload), &configured(), &telegram).await;

    assert_eq!(status(&response), 200);
    let text = telegram.calls()[0].1.text.clone();
    assert!(text.contains("📊 *Score:* -1/10 (50%)"), "{text}");
}

#[tokio::test]
async fn missing_count_is_delivered_as_undefined() {
    let telegram = StubTelegram::replying(json!({ "ok": true }));
    let mut payload = submission();
    payload.as_object_mut().unwrap().remove("correctAnswers");

    let response = notify(&event("POST", &payload), &configured(), &telegram).await;

    assert_eq!(status(&response), 200);
    let text = telegram.calls()[0].1.text.clone();
    assert!(text.contains("📊 *Score:* undefined/2 (50%)"), "{text}");
}

#[tokio::test]
async fn non_string_name_passes_validation() {
    let telegram = StubTelegram::replying(json!({ "ok": true }));
    let mut payload = submission();
    payload["name"] = json!(5);

    let response = notify(&event("POST", &payload), &configured(), &telegram).await;

    assert_eq!(status(&response), 200);
    assert!(telegram.calls()[0].1.text.contains("👤 *Student:* 5 Lee"));
}

#[tokio::test]
async fn null_name_is_a_bad_request() {
    let telegram = StubTelegram::replying(json!({ "ok": true }));
    let mut payload = submission();
    payload["name"] = Value::Null;

    let response = notify(&event("POST", &payload), &configured(), &telegram).await;

    assert_eq!(status(&response), 400);
    assert!(telegram.calls().is_empty());
}

#[tokio::test]
async fn truthy_numeric_ok_is_a_success() {
    let telegram = StubTelegram::replying(json!({ "ok": 1 }));
    let response = notify(&event("POST", &submission()), &configured(), &telegram).await;

    assert_eq!(status(&response), 200);
    assert_eq!(body(&response)["success"], true);
}

#[tokio::test]
async fn identical_submissions_are_sent_twice() {
    let telegram = StubTelegram::replying(json!({ "ok": true }));
    let config = configured();
    let request = event("POST", &submission());

    let first = notify(&request, &config, &telegram).await;
    let second = notify(&request, &config, &telegram).await;

    assert_eq!(status(&first), 200);
    assert_eq!(status(&second), 200);
    assert_eq!(telegram.calls().len(), 2);
}

#[tokio::test]
async fn v1_event_with_base64_body_is_accepted() {
    use base64::Engine;

    let telegram = StubTelegram::replying(json!({ "ok": true }));
    let encoded = base64::engine::general_purpose::STANDARD.encode(submission().to_string());
    let request = json!({
        "httpMethod": "POST",
        "body": encoded,
        "isBase64Encoded": true
    });

    let response = notify(&request, &configured(), &telegram).await;

    assert_eq!(status(&response), 200);
    assert_eq!(telegram.calls().len(), 1);
}
