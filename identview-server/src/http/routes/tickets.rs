//! Online ticket listing endpoint
//!
//! GET /api/ident/online_tickets - newest planned start first,
//! limit/offset windowed.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::{routing::get, Json, Router};
use serde::Serialize;

use identview_core::records::{format_datetime, OnlineTicket};

use crate::db::repos::TicketRepo;
use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::models::{ListParams, ListQuery};

/// Online ticket as served to clients
#[derive(Debug, Serialize)]
pub struct TicketResponse {
    pub id: i64,
    pub patient_fullname: Option<String>,
    pub staff_name: Option<String>,
    pub plan_start: Option<String>,
}

impl From<OnlineTicket> for TicketResponse {
    fn from(ticket: OnlineTicket) -> Self {
        Self {
            id: ticket.id,
            patient_fullname: ticket.patient_fullname,
            staff_name: ticket.staff_name,
            plan_start: ticket.plan_start.map(format_datetime),
        }
    }
}

/// GET /online_tickets
async fn list_tickets(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<TicketResponse>>, ApiError> {
    let params = ListParams::from(query);
    let tickets = TicketRepo::new(&state.pool).list(params).await?;
    Ok(Json(tickets.into_iter().map(Into::into).collect()))
}

/// Online ticket routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/online_tickets", get(list_tickets))
}
