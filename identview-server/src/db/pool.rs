//! Database connection pool management
//!
//! Opens the iDent cache file read-only through a sqlx `SqlitePool`.
//! A missing or unreadable file fails here, at startup, instead of on
//! the first request.

use std::path::Path;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

/// Default maximum connections for the pool.
/// Kept low for single-host tooling.
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Open a read-only pool on the cache file.
///
/// # Errors
/// Returns an error if the file does not exist or cannot be opened.
pub async fn create_pool(db_path: impl AsRef<Path>) -> Result<SqlitePool, sqlx::Error> {
    create_pool_with_options(db_path, DEFAULT_MAX_CONNECTIONS).await
}

/// Open a read-only pool with a custom connection limit.
pub async fn create_pool_with_options(
    db_path: impl AsRef<Path>,
    max_connections: u32,
) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::new()
        .filename(db_path.as_ref())
        .read_only(true);

    SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::testutil::create_cache_db;
    use tempfile::TempDir;

    #[tokio::test]
    async fn missing_cache_file_is_rejected() {
        let dir = TempDir::new().unwrap();
        let result = create_pool(dir.path().join("absent.db")).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn opens_existing_cache_and_refuses_writes() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("ident_cache.db");

        let seed = create_cache_db(&path).await;
        sqlx::query("INSERT INTO patients (id, patient_number) VALUES (1, 'A-001')")
            .execute(&seed)
            .await
            .unwrap();
        seed.close().await;

        let pool = create_pool(&path).await.expect("open cache");

        let row: (i64,) = sqlx::query_as("SELECT COUNT(id) FROM patients")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(row.0, 1);

        let denied = sqlx::query("INSERT INTO patients (id) VALUES (2)")
            .execute(&pool)
            .await;
        assert!(denied.is_err());
    }
}
