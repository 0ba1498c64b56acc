use crate::helpers;

use helpers::TestContext;
use hyper::StatusCode;
use test_context::test_context;

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_return_ok_for_health_check(ctx: &TestContext) {

    let response = ctx.client.get("/health").await.unwrap();

    response.assert_status(StatusCode::OK);

    // Health endpoint returns plain text
    let body = String::from_utf8(response.body_bytes.clone()).unwrap();
    assert_eq!(body, "OK");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_return_ready_status(ctx: &TestContext) {

    let response = ctx.client.get("/health/ready").await.unwrap();

    response.assert_status(StatusCode::OK);

    let body = response.body.as_ref().unwrap();

    // Check readiness response structure
    assert_eq!(body.get("status").and_then(|v| v.as_str()), Some("ready"));
    assert_eq!(
        body.get("speech").and_then(|v| v.as_str()),
        Some("configured")
    );
    assert_eq!(
        body.get("sentiment").and_then(|v| v.as_str()),
        Some("configured")
    );
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_include_request_id_in_health_responses(ctx: &TestContext) {

    let response = ctx.client.get("/health").await.unwrap();
    response.assert_header_exists("x-request-id");

    let response = ctx.client.get("/health/ready").await.unwrap();
    response.assert_header_exists("x-request-id");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_handle_concurrent_health_checks(ctx: &TestContext) {

    // Simulate multiple concurrent health checks
    let mut futures = Vec::new();
    for _ in 0..10 {
        let client = ctx.client.clone();
        futures.push(async move { client.get("/health").await });
    }

    let results = futures::future::join_all(futures).await;

    // All health checks should succeed
    for result in results {
        let response = result.unwrap();
        response.assert_status(StatusCode::OK);
    }
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_use_different_endpoints_for_liveness_and_readiness(ctx: &TestContext) {

    // /health is for liveness (is the service running?)
    let liveness_response = ctx.client.get("/health").await.unwrap();
    liveness_response.assert_status(StatusCode::OK);

    // /health/ready is for readiness (is the service ready to handle requests?)
    let readiness_response = ctx.client.get("/health/ready").await.unwrap();
    readiness_response.assert_status(StatusCode::OK);

    // They should return different response types
    assert!(liveness_response.body.is_none()); // Plain text
    assert!(readiness_response.body.is_some()); // JSON
}
