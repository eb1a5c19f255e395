//! Route handlers organized by resource
//!
//! Each module exposes a `router()`; everything except health is nested
//! under `/api/ident` by the server. Listing responses are bare JSON
//! arrays, matching what the portal frontend already consumes.

pub mod calls;
pub mod health;
pub mod patients;
pub mod receptions;
pub mod staffs;
pub mod status;
pub mod tickets;

use std::sync::Arc;

use axum::Router;

use crate::http::server::AppState;

/// Routes mounted under the `/api/ident` prefix
pub fn api_router() -> Router<Arc<AppState>> {
    Router::new()
        .merge(status::router())
        .merge(patients::router())
        .merge(staffs::router())
        .merge(receptions::router())
        .merge(calls::router())
        .merge(tickets::router())
}
