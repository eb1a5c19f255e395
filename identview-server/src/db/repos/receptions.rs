//! Scheduled reception repository
//!
//! Read-only queries against the `scheduled_receptions` cache table.
//! `id_patients` and `id_staffs` are plain columns here, not enforced
//! foreign keys; the sync process copies them over as-is.

use sqlx::{Row, SqlitePool};

use identview_core::records::{ScheduledReception, TableStats};

use crate::models::ListParams;

/// Scheduled reception repository
pub struct ReceptionRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> ReceptionRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Row count and newest `datetime_added`.
    pub async fn stats(&self) -> Result<TableStats, sqlx::Error> {
        let row = sqlx::query(
            "SELECT COUNT(id) AS count, MAX(datetime_added) AS last_dt FROM scheduled_receptions",
        )
        .fetch_one(self.pool)
        .await?;

        Ok(TableStats {
            count: row.get("count"),
            last_dt: row.get("last_dt"),
        })
    }

    /// List scheduled receptions, newest first.
    pub async fn list(&self, params: ListParams) -> Result<Vec<ScheduledReception>, sqlx::Error> {
        let rows = sqlx::query(
            r#"
            SELECT id, id_patients, id_staffs, datetime_added
            FROM scheduled_receptions
            ORDER BY datetime_added DESC, id DESC
            LIMIT ? OFFSET ?
            "#,
        )
        .bind(params.limit as i64)
        .bind(params.offset as i64)
        .fetch_all(self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|row| ScheduledReception {
                id: row.get("id"),
                id_patients: row.get("id_patients"),
                id_staffs: row.get("id_staffs"),
                datetime_added: row.get("datetime_added"),
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
    async fn list_maps_reference_columns() {
        let dir = TempDir::new().unwrap();
        let pool = create_cache_db(&dir.path().join("cache.db")).await;

        sqlx::query(
            "INSERT INTO scheduled_receptions (id, id_patients, id_staffs, datetime_added) VALUES \
             (1, 17, 3, '2024-05-01 08:00:00'), \
             (2, 17, NULL, '2024-05-01 09:00:00')",
        )
        .execute(&pool)
        .await
        .unwrap();

        let repo = ReceptionRepo::new(&pool);

        let receptions = repo.list(ListParams::default()).await.unwrap();
        assert_eq!(receptions.len(), 2);
        assert_eq!(receptions[0].id, 2);
        assert_eq!(receptions[0].id_patients, Some(17));
        assert_eq!(receptions[0].id_staffs, None);
        assert_eq!(receptions[1].id_staffs, Some(3));
    }
}
