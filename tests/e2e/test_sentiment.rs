use crate::helpers;

use helpers::backends::{
    self, mock_sentiment_document_error, mock_sentiment_failure, mock_sentiment_garbage,
    mock_sentiment_label, SENTIMENT_PATH,
};
use helpers::TestContext;
use hyper::StatusCode;
use serde_json::json;
use test_context::test_context;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, ResponseTemplate};

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_analyze_sentiment(ctx: &TestContext) {

    // The backend expects a single-document batch with our subscription key
    Mock::given(method("POST"))
        .and(path(SENTIMENT_PATH))
        .and(header("Ocp-Apim-Subscription-Key", backends::LANGUAGE_KEY))
        .and(body_json(json!({
            "documents": [{ "id": "1", "text": "I love this" }]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "documents": [{
                "id": "1",
                "sentiment": "positive",
                "confidenceScores": { "positive": 0.98, "neutral": 0.01, "negative": 0.01 },
                "sentences": []
            }],
            "errors": [],
            "modelVersion": "2022-11-01"
        })))
        .expect(1)
        .mount(&ctx.sentiment_backend)
        .await;

    let response = ctx
        .client
        .post("/api/sentiment/analyze", &json!({ "text": "I love this" }))
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);

    let body = response.body.as_ref().unwrap();
    assert_eq!(
        body.get("sentiment").and_then(|v| v.as_str()),
        Some("positive")
    );
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_pass_through_mixed_sentiment(ctx: &TestContext) {

    mock_sentiment_label(&ctx.sentiment_backend, "mixed").await;

    let response = ctx
        .client
        .post(
            "/api/sentiment/analyze",
            &json!({ "text": "Great screen, terrible battery" }),
        )
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);

    let body = response.body.as_ref().unwrap();
    assert_eq!(body.get("sentiment").and_then(|v| v.as_str()), Some("mixed"));
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_empty_text_without_calling_the_backend(ctx: &TestContext) {

    let response = ctx
        .client
        .post("/api/sentiment/analyze", &json!({ "text": "  \n " }))
        .await
        .unwrap();

    response
        .assert_status(StatusCode::BAD_REQUEST)
        .assert_error_message("Text cannot be empty");

    let requests = ctx.sentiment_backend.received_requests().await.unwrap();
    assert!(requests.is_empty(), "backend should not have been called");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_treat_document_errors_as_rejections(ctx: &TestContext) {

    // Azure reports per-document failures under an HTTP 200 envelope
    mock_sentiment_document_error(&ctx.sentiment_backend, "Document text is invalid.").await;

    let response = ctx
        .client
        .post("/api/sentiment/analyze", &json!({ "text": "anything" }))
        .await
        .unwrap();

    response
        .assert_status(StatusCode::BAD_GATEWAY)
        .assert_error_message("Backend canceled the request")
        .assert_error_message("Document text is invalid.");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_surface_http_failures(ctx: &TestContext) {

    mock_sentiment_failure(&ctx.sentiment_backend, 503, "Service busy").await;

    let response = ctx
        .client
        .post("/api/sentiment/analyze", &json!({ "text": "anything" }))
        .await
        .unwrap();

    response
        .assert_status(StatusCode::BAD_GATEWAY)
        .assert_error_message("503 Service Unavailable")
        .assert_error_message("Service busy");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_fail_closed_on_malformed_responses(ctx: &TestContext) {

    mock_sentiment_garbage(&ctx.sentiment_backend).await;

    let response = ctx
        .client
        .post("/api/sentiment/analyze", &json!({ "text": "anything" }))
        .await
        .unwrap();

    response
        .assert_status(StatusCode::INTERNAL_SERVER_ERROR)
        .assert_error_message("Internal server error");
}
