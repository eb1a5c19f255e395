pub mod config;
pub mod error;
pub mod records;

pub use config::CacheConfig;
pub use error::{IdentError, Result};
pub use records::{
    format_datetime, CacheStatus, CallCache, OnlineTicket, Patient, ScheduledReception, Staff,
    TableStats,
};
