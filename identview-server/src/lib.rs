//! identview-server: read-only HTTP API over the iDent cache database
//!
//! Serves row counts, newest timestamps, and paginated listings from the
//! cache tables that the external iDent sync process keeps fresh. Nothing
//! in this crate writes to the cache; the pool itself is opened read-only.

pub mod db;
pub mod http;
pub mod models;

pub use http::{build_router, run_server, ApiError, AppState, ServerConfig};
