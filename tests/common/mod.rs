#![allow(dead_code)]

use chrono::Utc;
use snaplink::state::AppState;
use sqlx::SqlitePool;

pub const TEST_BASE_URL: &str = "http://localhost:8080";

pub fn create_test_state(pool: SqlitePool) -> AppState {
    AppState::new(pool, TEST_BASE_URL.to_string())
}

pub async fn create_test_record(pool: &SqlitePool, token: &str, url: &str) {
    sqlx::query("INSERT INTO urls (token, original_url, visits, created_at) VALUES (?1, ?2, 0, ?3)")
        .bind(token)
        .bind(url)
        .bind(Utc::now())
        .execute(pool)
        .await
        .unwrap();
}

pub async fn visit_count(pool: &SqlitePool, token: &str) -> i64 {
    sqlx::query_scalar("SELECT visits FROM urls WHERE token = ?1")
        .bind(token)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn record_count(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM urls")
        .fetch_one(pool)
        .await
        .unwrap()
}
