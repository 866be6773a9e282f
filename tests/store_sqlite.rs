mod common;

use chrono::Utc;
use snaplink::domain::entities::NewUrlRecord;
use snaplink::domain::repositories::MappingStore;
use snaplink::error::AppError;
use snaplink::infrastructure::persistence::SqliteMappingStore;
use sqlx::SqlitePool;
use std::sync::Arc;

fn store(pool: SqlitePool) -> SqliteMappingStore {
    SqliteMappingStore::new(Arc::new(pool))
}

fn new_record(token: &str, url: &str) -> NewUrlRecord {
    NewUrlRecord {
        token: token.to_string(),
        original_url: url.to_string(),
        created_at: Utc::now(),
    }
}

#[sqlx::test]
async fn test_insert_starts_with_zero_visits(pool: SqlitePool) {
    let store = store(pool);

    let record = store
        .insert(new_record("ab12CD", "https://example.com"))
        .await
        .unwrap();

    assert_eq!(record.token, "ab12CD");
    assert_eq!(record.original_url, "https://example.com");
    assert_eq!(record.visits, 0);
}

#[sqlx::test]
async fn test_insert_duplicate_token_conflicts(pool: SqlitePool) {
    let store = store(pool);

    store
        .insert(new_record("dupTok", "https://example.com/a"))
        .await
        .unwrap();

    let result = store
        .insert(new_record("dupTok", "https://example.com/b"))
        .await;

    assert!(result.is_err());
    assert!(matches!(result.unwrap_err(), AppError::Conflict { .. }));
}

#[sqlx::test]
async fn test_insert_conflict_leaves_original_intact(pool: SqlitePool) {
    let store = store(pool);

    store
        .insert(new_record("keepMe", "https://example.com/original"))
        .await
        .unwrap();

    let _ = store
        .insert(new_record("keepMe", "https://example.com/other"))
        .await;

    let found = store.find_by_token("keepMe").await.unwrap().unwrap();
    assert_eq!(found.original_url, "https://example.com/original");
}

#[sqlx::test]
async fn test_find_by_token(pool: SqlitePool) {
    let store = store(pool);

    let inserted = store
        .insert(new_record("findMe", "https://example.com"))
        .await
        .unwrap();

    let found = store.find_by_token("findMe").await.unwrap().unwrap();

    assert_eq!(found.token, inserted.token);
    assert_eq!(found.original_url, inserted.original_url);
    assert_eq!(found.visits, inserted.visits);
}

#[sqlx::test]
async fn test_find_by_token_missing(pool: SqlitePool) {
    let store = store(pool);

    let found = store.find_by_token("nope42").await.unwrap();

    assert!(found.is_none());
}

#[sqlx::test]
async fn test_increment_visits(pool: SqlitePool) {
    let store = store(pool);

    store
        .insert(new_record("countr", "https://example.com"))
        .await
        .unwrap();

    for _ in 0..3 {
        let updated = store.increment_visits("countr").await.unwrap();
        assert!(updated);
    }

    let found = store.find_by_token("countr").await.unwrap().unwrap();
    assert_eq!(found.visits, 3);
}

#[sqlx::test]
async fn test_increment_visits_unknown_token(pool: SqlitePool) {
    let store = store(pool);

    let updated = store.increment_visits("nope42").await.unwrap();

    assert!(!updated);
}

#[sqlx::test]
async fn test_created_at_round_trips(pool: SqlitePool) {
    let store = store(pool);

    let record = new_record("timedT", "https://example.com");
    let created_at = record.created_at;

    store.insert(record).await.unwrap();

    let found = store.find_by_token("timedT").await.unwrap().unwrap();
    // Compare at millisecond precision; the TEXT column may not keep nanoseconds.
    assert_eq!(
        found.created_at.timestamp_millis(),
        created_at.timestamp_millis()
    );
}
