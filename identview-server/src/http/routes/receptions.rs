//! Scheduled reception listing endpoint
//!
//! GET /api/ident/scheduled_receptions - newest first, limit/offset
//! windowed. The path keeps the cache table name so existing portal
//! clients need no change.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::{routing::get, Json, Router};
use serde::Serialize;

use identview_core::records::{format_datetime, ScheduledReception};

use crate::db::repos::ReceptionRepo;
use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::models::{ListParams, ListQuery};

/// Scheduled reception as served to clients
#[derive(Debug, Serialize)]
pub struct ReceptionResponse {
    pub id: i64,
    pub id_patients: Option<i64>,
    pub id_staffs: Option<i64>,
    pub datetime_added: Option<String>,
}

impl From<ScheduledReception> for ReceptionResponse {
    fn from(reception: ScheduledReception) -> Self {
        Self {
            id: reception.id,
            id_patients: reception.id_patients,
            id_staffs: reception.id_staffs,
            datetime_added: reception.datetime_added.map(format_datetime),
        }
    }
}

/// GET /scheduled_receptions
async fn list_receptions(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<ReceptionResponse>>, ApiError> {
    let params = ListParams::from(query);
    let receptions = ReceptionRepo::new(&state.pool).list(params).await?;
    Ok(Json(receptions.into_iter().map(Into::into).collect()))
}

/// Scheduled reception routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/scheduled_receptions", get(list_receptions))
}
