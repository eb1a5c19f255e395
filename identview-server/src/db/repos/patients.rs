//! Patient repository
//!
//! Read-only queries against the `patients` cache table.

use sqlx::{Row, SqlitePool};

use identview_core::records::{Patient, TableStats};

use crate::models::ListParams;

/// Patient repository
pub struct PatientRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> PatientRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Row count and newest `datetime_changed`.
    pub async fn stats(&self) -> Result<TableStats, sqlx::Error> {
        let row = sqlx::query(
            "SELECT COUNT(id) AS count, MAX(datetime_changed) AS last_dt FROM patients",
        )
        .fetch_one(self.pool)
        .await?;

        Ok(TableStats {
            count: row.get("count"),
            last_dt: row.get("last_dt"),
        })
    }

    /// List patients, newest change first. Ties break on id so a window
    /// walk never repeats or skips a row.
    pub async fn list(&self, params: ListParams) -> Result<Vec<Patient>, sqlx::Error> {
        let rows = sqlx::query(
            r#"
            SELECT id, patient_number, status, datetime_changed
            FROM patients
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
            .map(|row| Patient {
                id: row.get("id"),
                patient_number: row.get("patient_number"),
                status: row.get("status"),
                datetime_changed: row.get("datetime_changed"),
            })
            .collect())
    }
}
