//! Call log repository
//!
//! Read-only queries against the `calls_cache` table, the telephony
//! call log mirrored from the clinic PBX.

use sqlx::{Row, SqlitePool};

use identview_core::records::{CallCache, TableStats};

use crate::models::ListParams;

/// Call log repository
pub struct CallRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> CallRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Row count and newest `datetime_call`.
    pub async fn stats(&self) -> Result<TableStats, sqlx::Error> {
        let row = sqlx::query(
            "SELECT COUNT(id) AS count, MAX(datetime_call) AS last_dt FROM calls_cache",
        )
        .fetch_one(self.pool)
        .await?;

        Ok(TableStats {
            count: row.get("count"),
            last_dt: row.get("last_dt"),
        })
    }

    /// List calls, newest first.
    pub async fn list(&self, params: ListParams) -> Result<Vec<CallCache>, sqlx::Error> {
        let rows = sqlx::query(
            r#"
            SELECT id, phone_in, phone_out, datetime_call
            FROM calls_cache
            ORDER BY datetime_call DESC, id DESC
            LIMIT ? OFFSET ?
            "#,
        )
        .bind(params.limit as i64)
        .bind(params.offset as i64)
        .fetch_all(self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|row| CallCache {
                id: row.get("id"),
                phone_in: row.get("phone_in"),
                phone_out: row.get("phone_out"),
                datetime_call: row.get("datetime_call"),
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
    async fn inbound_and_outbound_numbers_are_independent() {
        let dir = TempDir::new().unwrap();
        let pool = create_cache_db(&dir.path().join("cache.db")).await;

        sqlx::query(
            "INSERT INTO calls_cache (id, phone_in, phone_out, datetime_call) VALUES \
             (1, '+79160000001', NULL, '2024-05-01 12:00:00'), \
             (2, NULL, '84950000000', '2024-05-01 12:05:00')",
        )
        .execute(&pool)
        .await
        .unwrap();

        let calls = CallRepo::new(&pool)
            .list(ListParams::default())
            .await
            .unwrap();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].phone_in, None);
        assert_eq!(calls[0].phone_out.as_deref(), Some("84950000000"));
        assert_eq!(calls[1].phone_in.as_deref(), Some("+79160000001"));
        assert_eq!(calls[1].phone_out, None);
    }
}
