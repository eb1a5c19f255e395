//! Cache status endpoint
//!
//! GET /api/ident/status - row counts and newest timestamps for all five
//! cache tables. The quickest way to tell whether the sync process is
//! still feeding the cache.

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use identview_core::records::{format_datetime, CacheStatus, TableStats};

use crate::db::repos::cache_status;
use crate::http::error::ApiError;
use crate::http::server::AppState;

/// Count and newest timestamp for one table
#[derive(Debug, Serialize)]
pub struct TableStatsResponse {
    pub count: i64,
    pub last_dt: Option<String>,
}

impl From<TableStats> for TableStatsResponse {
    fn from(stats: TableStats) -> Self {
        Self {
            count: stats.count,
            last_dt: stats.last_dt.map(format_datetime),
        }
    }
}

/// Aggregate status over the whole cache
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub patients: TableStatsResponse,
    pub staffs: TableStatsResponse,
    pub scheduled_receptions: TableStatsResponse,
    pub calls_cache: TableStatsResponse,
    pub online_tickets: TableStatsResponse,
}

impl From<CacheStatus> for StatusResponse {
    fn from(status: CacheStatus) -> Self {
        Self {
            patients: status.patients.into(),
            staffs: status.staffs.into(),
            scheduled_receptions: status.scheduled_receptions.into(),
            calls_cache: status.calls_cache.into(),
            online_tickets: status.online_tickets.into(),
        }
    }
}

/// GET /status
async fn status(State(state): State<Arc<AppState>>) -> Result<Json<StatusResponse>, ApiError> {
    let status = cache_status(&state.pool).await?;
    Ok(Json(StatusResponse::from(status)))
}

/// Status routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/status", get(status))
}
