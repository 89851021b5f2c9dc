mod common;

use std::sync::Arc;

use common::TEST_TOKEN;

#[tokio::test]
async fn test_write_then_resolve_round_trip() {
    let server = common::test_server(common::memory_state());

    let response = server
        .post("/new/bar")
        .add_header("Pbly-Token", TEST_TOKEN)
        .text("https://other.com")
        .await;

    assert_eq!(response.status_code(), 201);
    assert!(response.text().is_empty());

    let response = server.get("/bar").await;

    assert_eq!(response.status_code(), 303);
    assert_eq!(response.header("location"), "https://other.com");
}

#[tokio::test]
async fn test_wrong_token_is_forbidden() {
    let server = common::test_server(common::memory_state());

    let response = server
        .post("/new/bar")
        .add_header("Pbly-Token", "wrong-token")
        .text("https://other.com")
        .await;

    assert_eq!(response.status_code(), 403);
    assert!(response.text().is_empty());

    // Nothing was stored.
    server.get("/bar").await.assert_status_not_found();
}

#[tokio::test]
async fn test_missing_token_is_forbidden() {
    let server = common::test_server(common::memory_state());

    let response = server.post("/new/bar").text("https://other.com").await;

    assert_eq!(response.status_code(), 403);
}

#[tokio::test]
async fn test_token_is_checked_before_method() {
    // Wrong token AND wrong method: the token check runs first, so the
    // status is 403, not 422.
    let server = common::test_server(common::memory_state());

    let response = server
        .get("/new/bar")
        .add_header("Pbly-Token", "wrong-token")
        .await;

    assert_eq!(response.status_code(), 403);
}

#[tokio::test]
async fn test_non_post_with_valid_token_is_unprocessable() {
    let server = common::test_server(common::memory_state());

    let response = server
        .get("/new/bar")
        .add_header("Pbly-Token", TEST_TOKEN)
        .await;

    assert_eq!(response.status_code(), 422);

    let response = server
        .put("/new/bar")
        .add_header("Pbly-Token", TEST_TOKEN)
        .text("https://other.com")
        .await;

    assert_eq!(response.status_code(), 422);
}

#[tokio::test]
async fn test_repeated_writes_silently_overwrite() {
    let server = common::test_server(common::memory_state());

    common::seed_link(&server, "bar", "https://old.example").await;
    common::seed_link(&server, "bar", "https://new.example").await;

    let response = server.get("/bar").await;

    assert_eq!(response.status_code(), 303);
    assert_eq!(response.header("location"), "https://new.example");
}

#[tokio::test]
async fn test_empty_body_stores_empty_value() {
    let server = common::test_server(common::memory_state());

    let response = server
        .post("/new/blank")
        .add_header("Pbly-Token", TEST_TOKEN)
        .await;

    assert_eq!(response.status_code(), 201);

    // An empty stored value resolves like a missing key.
    server.get("/blank").await.assert_status_not_found();
}

#[tokio::test]
async fn test_empty_key_writes_under_trailing_slash_path() {
    let server = common::test_server(common::memory_state());

    let response = server
        .post("/new/")
        .add_header("Pbly-Token", TEST_TOKEN)
        .text("https://other.com")
        .await;

    assert_eq!(response.status_code(), 201);

    // The empty key is not reachable through the resolver: `/` serves
    // the banner before any lookup happens.
    let response = server.get("/").await;
    response.assert_status_ok();
}

#[tokio::test]
async fn test_store_failure_on_write_is_internal_error() {
    let server = common::test_server(common::create_test_state(Arc::new(common::FailingStore)));

    let response = server
        .post("/new/bar")
        .add_header("Pbly-Token", TEST_TOKEN)
        .text("https://other.com")
        .await;

    assert_eq!(response.status_code(), 500);
    assert!(response.text().is_empty());
}
