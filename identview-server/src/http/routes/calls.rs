//! Call log listing endpoint
//!
//! GET /api/ident/calls_cache - newest calls first, limit/offset windowed.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::{routing::get, Json, Router};
use serde::Serialize;

use identview_core::records::{format_datetime, CallCache};

use crate::db::repos::CallRepo;
use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::models::{ListParams, ListQuery};

/// Call log entry as served to clients
#[derive(Debug, Serialize)]
pub struct CallResponse {
    pub id: i64,
    pub phone_in: Option<String>,
    pub phone_out: Option<String>,
    pub datetime_call: Option<String>,
}

impl From<CallCache> for CallResponse {
    fn from(call: CallCache) -> Self {
        Self {
            id: call.id,
            phone_in: call.phone_in,
            phone_out: call.phone_out,
            datetime_call: call.datetime_call.map(format_datetime),
        }
    }
}

/// GET /calls_cache
async fn list_calls(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<CallResponse>>, ApiError> {
    let params = ListParams::from(query);
    let calls = CallRepo::new(&state.pool).list(params).await?;
    Ok(Json(calls.into_iter().map(Into::into).collect()))
}

/// Call log routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/calls_cache", get(list_calls))
}
