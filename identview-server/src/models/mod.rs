//! Request/response support types shared by the route modules

pub mod pagination;

pub use pagination::{ListParams, ListQuery};
