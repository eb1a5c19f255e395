//! Online ticket repository
//!
//! Read-only queries against the `online_tickets` cache table (web
//! booking requests). Names arrive denormalized as free text.

use sqlx::{Row, SqlitePool};

use identview_core::records::{OnlineTicket, TableStats};

use crate::models::ListParams;

/// Online ticket repository
pub struct TicketRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> TicketRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Row count and newest `plan_start`.
    pub async fn stats(&self) -> Result<TableStats, sqlx::Error> {
        let row = sqlx::query(
            "SELECT COUNT(id) AS count, MAX(plan_start) AS last_dt FROM online_tickets",
        )
        .fetch_one(self.pool)
        .await?;

        Ok(TableStats {
            count: row.get("count"),
            last_dt: row.get("last_dt"),
        })
    }

    /// List tickets, newest planned start first.
    pub async fn list(&self, params: ListParams) -> Result<Vec<OnlineTicket>, sqlx::Error> {
        let rows = sqlx::query(
            r#"
            SELECT id, patient_fullname, staff_name, plan_start
            FROM online_tickets
            ORDER BY plan_start DESC, id DESC
            LIMIT ? OFFSET ?
            "#,
        )
        .bind(params.limit as i64)
        .bind(params.offset as i64)
        .fetch_all(self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|row| OnlineTicket {
                id: row.get("id"),
                patient_fullname: row.get("patient_fullname"),
                staff_name: row.get("staff_name"),
                plan_start: row.get("plan_start"),
            })
            .collect())
    }
}
