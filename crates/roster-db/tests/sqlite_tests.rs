//! Integration tests for the `roster-db` schema bootstrap.
//!
//! These run against real `SQLite` databases (in-memory and temporary
//! files), so no external services are required.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use roster_db::{DbError, SqliteConfig, SqlitePool};

async fn students_table_count(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar::<_, i64>(
        "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'students'",
    )
    .fetch_one(pool.pool())
    .await
    .unwrap()
}

#[tokio::test]
async fn in_memory_schema_bootstrap() {
    let pool = SqlitePool::connect(&SqliteConfig::in_memory()).await.unwrap();
    assert_eq!(students_table_count(&pool).await, 0);

    pool.init_schema().await.unwrap();
    assert_eq!(students_table_count(&pool).await, 1);

    pool.close().await;
}

#[tokio::test]
async fn init_schema_is_idempotent() {
    let pool = SqlitePool::connect(&SqliteConfig::in_memory()).await.unwrap();
    pool.init_schema().await.unwrap();
    pool.init_schema().await.unwrap();
    assert_eq!(students_table_count(&pool).await, 1);
}

#[tokio::test]
async fn creates_missing_database_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("students.db");
    assert!(!path.exists());

    let config = SqliteConfig::new(path.to_str().unwrap());
    let pool = SqlitePool::connect(&config).await.unwrap();
    pool.init_schema().await.unwrap();
    pool.close().await;

    assert!(path.exists());

    // Reopening sees the table created by the first handle.
    let pool = SqlitePool::connect(&config).await.unwrap();
    assert_eq!(students_table_count(&pool).await, 1);
    pool.close().await;
}

#[tokio::test]
async fn unopenable_path_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no-such-dir").join("students.db");

    let result = SqlitePool::connect(&SqliteConfig::new(path.to_str().unwrap())).await;
    assert!(matches!(result, Err(DbError::Sqlite(_))));
}
