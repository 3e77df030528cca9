use std::time::Duration;

use sqlx::SqlitePool;
use sqlx::sqlite::{
    SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
};
use tempfile::TempDir;

/// Creates an in-memory SQLite pool with migrations run
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1) // In-memory needs single connection
        .connect_with(options)
        .await
        .expect("Failed to create test pool");

    vm_db::MIGRATOR
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Creates a file-backed WAL pool configured like the server's
///
/// The returned `TempDir` owns the database file and must outlive the pool.
pub async fn create_file_test_pool() -> (TempDir, SqlitePool) {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let options = SqliteConnectOptions::new()
        .filename(temp.path().join("volunteers.db"))
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .synchronous(SqliteSynchronous::Normal)
        .busy_timeout(Duration::from_secs(5));

    let pool = SqlitePoolOptions::new()
        .max_connections(8)
        .connect_with(options)
        .await
        .expect("Failed to create file test pool");

    vm_db::MIGRATOR
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    (temp, pool)
}
