//! HTTP server layer
//!
//! Axum server with:
//! - CORS (localhost only unless explicitly opened up)
//! - Request tracing
//! - Graceful shutdown
//! - JSON error responses

pub mod error;
pub mod routes;
pub mod server;

pub use error::ApiError;
pub use server::{build_router, run_server, AppState, ServerConfig, ServerError};
