//! Database layer - connection pool and repositories
//!
//! # Design Principles
//!
//! - The cache file is owned by the external iDent sync process; the pool
//!   is opened read-only and nothing here creates or migrates tables
//! - One repository per cache table, plain SELECTs only
//! - Connections are acquired per query and returned to the pool

pub mod pool;
pub mod repos;

pub use pool::create_pool;
pub use repos::*;
