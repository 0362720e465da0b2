mod common;

use axum::http::StatusCode;
use axum_test::TestServer;
use short_links::infrastructure::persistence::InMemoryLinkRepository;
use short_links::routes::router;
use short_links::state::AppState;
use std::sync::Arc;

#[tokio::test]
async fn test_redirect_success() {
    let (server, stores) = common::create_test_server();
    common::create_test_link(stores.links.as_ref(), "redirect1", "https://example.com/target").await;

    let response = server.get("/redirect1").await;

    response.assert_status(StatusCode::MOVED_PERMANENTLY);

    let location = response.header("location");
    assert_eq!(location, "https://example.com/target");
}

#[tokio::test]
async fn test_redirect_not_found() {
    let (server, stores) = common::create_test_server();

    let response = server.get("/notfound").await;

    response.assert_status_not_found();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "not_found");

    assert_eq!(common::clicks_for(stores.metrics.as_ref(), "notfound").await, None);
}

#[tokio::test]
async fn test_redirect_records_click() {
    let (server, stores) = common::create_test_server();
    common::create_test_link(stores.links.as_ref(), "clickme", "https://example.com").await;

    server.get("/clickme").await;
    assert_eq!(common::clicks_for(stores.metrics.as_ref(), "clickme").await, Some(1));

    server.get("/clickme").await;
    server.get("/clickme").await;
    assert_eq!(common::clicks_for(stores.metrics.as_ref(), "clickme").await, Some(3));
}

#[tokio::test]
async fn test_redirect_short_code_rejected() {
    let (server, stores) = common::create_test_server();
    common::create_test_link(stores.links.as_ref(), "abc", "https://example.com").await;

    let response = server.get("/ab").await;

    response.assert_status_bad_request();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");

    assert_eq!(common::clicks_for(stores.metrics.as_ref(), "ab").await, None);
}

#[tokio::test]
async fn test_redirect_survives_metrics_outage() {
    let links = Arc::new(InMemoryLinkRepository::new());
    common::create_test_link(links.as_ref(), "resilient", "https://example.com/up").await;

    let state = AppState::new(links, Arc::new(common::UnreachableMetricsRepository));
    let server = TestServer::new(router(state)).unwrap();

    let response = server.get("/resilient").await;

    response.assert_status(StatusCode::MOVED_PERMANENTLY);
    assert_eq!(response.header("location"), "https://example.com/up");
}

#[tokio::test]
async fn test_redirect_counts_per_code() {
    let (server, stores) = common::create_test_server();
    common::create_test_link(stores.links.as_ref(), "first", "https://example.com/1").await;
    common::create_test_link(stores.links.as_ref(), "second", "https://example.com/2").await;

    server.get("/first").await;
    server.get("/first").await;
    server.get("/second").await;

    assert_eq!(common::clicks_for(stores.metrics.as_ref(), "first").await, Some(2));
    assert_eq!(common::clicks_for(stores.metrics.as_ref(), "second").await, Some(1));
}

#[tokio::test]
async fn test_redirect_unservable_stored_url() {
    let (server, stores) = common::create_test_server();
    // Written straight to the store, bypassing create-time validation
    common::create_test_link(stores.links.as_ref(), "broken", "https://example.com/a\nb").await;

    let response = server.get("/broken").await;

    response.assert_status_internal_server_error();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "internal_error");

    assert_eq!(common::clicks_for(stores.metrics.as_ref(), "broken").await, None);
}
