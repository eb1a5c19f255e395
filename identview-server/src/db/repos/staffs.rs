//! Staff repository
//!
//! Read-only queries against the `staffs` cache table. The `archive`
//! column is stored as SQLite INTEGER 0/1 and decodes to `bool`.

use sqlx::{Row, SqlitePool};

use identview_core::records::{Staff, TableStats};

use crate::models::ListParams;

/// Staff repository
pub struct StaffRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> StaffRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Row count and newest `datetime_changed`.
    pub async fn stats(&self) -> Result<TableStats, sqlx::Error> {
        let row = sqlx::query(
            "SELECT COUNT(id) AS count, MAX(datetime_changed) AS last_dt FROM staffs",
        )
        .fetch_one(self.pool)
        .await?;

        Ok(TableStats {
            count: row.get("count"),
            last_dt: row.get("last_dt"),
        })
    }

    /// List staff members, newest change first.
    pub async fn list(&self, params: ListParams) -> Result<Vec<Staff>, sqlx::Error> {
        let rows = sqlx::query(
            r#"
            SELECT id, db_username, archive, datetime_changed
            FROM staffs
            ORDER BY datetime_changed DESC, id DESC
            LIMIT ? OFFSET ?
            "#,
        )
        .bind(params.limit as i64)
        .bind(params.offset as i64)
        .fetch_all(self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|row| Staff {
                id: row.get("id"),
                db_username: row.get("db_username"),
                archive: row.get("archive"),
                datetime_changed: row.get("datetime_changed"),
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::testutil::create_cache_db;
    use tempfile::TempDir;

    #[tokio::test]
    async fn list_maps_columns_including_archive_flag() {
        let dir = TempDir::new().unwrap();
        let pool = create_cache_db(&dir.path().join("cache.db")).await;

        sqlx::query(
            "INSERT INTO staffs (id, db_username, archive, datetime_changed) VALUES \
             (1, 'svetlana', 0, '2024-04-28 18:05:59'), \
             (2, 'dr_ivanov', 1, '2024-05-02 08:15:00'), \
             (3, NULL, NULL, NULL)",
        )
        .execute(&pool)
        .await
        .unwrap();

        let repo = StaffRepo::new(&pool);

        let stats = repo.stats().await.unwrap();
        assert_eq!(stats.count, 3);

        let staffs = repo.list(ListParams::default()).await.unwrap();
        assert_eq!(staffs.len(), 3);
        assert_eq!(staffs[0].id, 2);
        assert_eq!(staffs[0].db_username.as_deref(), Some("dr_ivanov"));
        assert_eq!(staffs[0].archive, Some(true));
        assert_eq!(staffs[1].archive, Some(false));
        assert_eq!(staffs[2].archive, None);
    }
}
