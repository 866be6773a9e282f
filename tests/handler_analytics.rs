mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use snaplink::api::handlers::{analytics_handler, redirect_handler};
use sqlx::SqlitePool;

fn analytics_app(pool: SqlitePool) -> Router {
    Router::new()
        .route("/analytics/{token}", get(analytics_handler))
        .route("/{token}", get(redirect_handler))
        .with_state(common::create_test_state(pool))
}

#[sqlx::test]
async fn test_analytics_renders_record(pool: SqlitePool) {
    let server = TestServer::new(analytics_app(pool.clone())).unwrap();

    common::create_test_record(&pool, "ab12CD", "https://example.com/page").await;

    let response = server.get("/analytics/ab12CD").await;

    response.assert_status_ok();

    let html = response.text();
    assert!(html.contains("ab12CD"));
    assert!(html.contains("https://example.com/page"));
}

#[sqlx::test]
async fn test_analytics_not_found(pool: SqlitePool) {
    let server = TestServer::new(analytics_app(pool)).unwrap();

    let response = server.get("/analytics/nope42").await;

    response.assert_status_not_found();
}

#[sqlx::test]
async fn test_analytics_shows_visit_count(pool: SqlitePool) {
    let server = TestServer::new(analytics_app(pool.clone())).unwrap();

    common::create_test_record(&pool, "stats1", "https://example.com").await;

    for _ in 0..3 {
        server.get("/stats1").await;
    }

    let response = server.get("/analytics/stats1").await;

    response.assert_status_ok();
    assert!(response.text().contains(">3<"));
}

#[sqlx::test]
async fn test_analytics_does_not_count_as_visit(pool: SqlitePool) {
    let server = TestServer::new(analytics_app(pool.clone())).unwrap();

    common::create_test_record(&pool, "quiet1", "https://example.com").await;

    server.get("/analytics/quiet1").await;
    server.get("/analytics/quiet1").await;

    assert_eq!(common::visit_count(&pool, "quiet1").await, 0);
}
