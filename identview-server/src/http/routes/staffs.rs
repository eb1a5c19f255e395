//! Staff listing endpoint
//!
//! GET /api/ident/staffs - newest changes first, limit/offset windowed.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::{routing::get, Json, Router};
use serde::Serialize;

use identview_core::records::{format_datetime, Staff};

use crate::db::repos::StaffRepo;
use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::models::{ListParams, ListQuery};

/// Staff member as served to clients
#[derive(Debug, Serialize)]
pub struct StaffResponse {
    pub id: i64,
    pub db_username: Option<String>,
    pub archive: Option<bool>,
    pub datetime_changed: Option<String>,
}

impl From<Staff> for StaffResponse {
    fn from(staff: Staff) -> Self {
        Self {
            id: staff.id,
            db_username: staff.db_username,
            archive: staff.archive,
            datetime_changed: staff.datetime_changed.map(format_datetime),
        }
    }
}

/// GET /staffs
async fn list_staffs(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<StaffResponse>>, ApiError> {
    let params = ListParams::from(query);
    let staffs = StaffRepo::new(&state.pool).list(params).await?;
    Ok(Json(staffs.into_iter().map(Into::into).collect()))
}

/// Staff routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/staffs", get(list_staffs))
}
