//! Record types for the iDent cache tables.
//!
//! The cache file is produced by an external sync process that mirrors an
//! iDent installation; this crate never creates or alters its schema. The
//! sync process declares every non-key column nullable, so all fields except
//! `id` are `Option`. Timestamps are naive local datetimes stored as
//! `YYYY-MM-DD HH:MM:SS[.ffffff]` text.

use chrono::NaiveDateTime;

/// Row from the `patients` table
#[derive(Debug, Clone, PartialEq)]
pub struct Patient {
    pub id: i64,
    pub patient_number: Option<String>,
    pub status: Option<i64>,
    pub datetime_changed: Option<NaiveDateTime>,
}

/// Row from the `staffs` table
#[derive(Debug, Clone, PartialEq)]
pub struct Staff {
    pub id: i64,
    pub db_username: Option<String>,
    pub archive: Option<bool>,
    pub datetime_changed: Option<NaiveDateTime>,
}

/// Row from the `scheduled_receptions` table
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduledReception {
    pub id: i64,
    pub id_patients: Option<i64>,
    pub id_staffs: Option<i64>,
    pub datetime_added: Option<NaiveDateTime>,
}

/// Row from the `calls_cache` table
#[derive(Debug, Clone, PartialEq)]
pub struct CallCache {
    pub id: i64,
    pub phone_in: Option<String>,
    pub phone_out: Option<String>,
    pub datetime_call: Option<NaiveDateTime>,
}

/// Row from the `online_tickets` table
#[derive(Debug, Clone, PartialEq)]
pub struct OnlineTicket {
    pub id: i64,
    pub patient_fullname: Option<String>,
    pub staff_name: Option<String>,
    pub plan_start: Option<NaiveDateTime>,
}

/// Row count and newest designated timestamp for one cache table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableStats {
    pub count: i64,
    /// Newest value of the table's designated timestamp column, None when
    /// the table is empty (or every timestamp is NULL)
    pub last_dt: Option<NaiveDateTime>,
}

/// Aggregate status across all five cache tables
#[derive(Debug, Clone, PartialEq)]
pub struct CacheStatus {
    pub patients: TableStats,
    pub staffs: TableStats,
    pub scheduled_receptions: TableStats,
    pub calls_cache: TableStats,
    pub online_tickets: TableStats,
}

/// Format a cache timestamp the way the cache itself stores it.
///
/// Second precision, no timezone designator.
pub fn format_datetime(dt: NaiveDateTime) -> String {
    dt.format("%Y-%m-%d %H:%M:%S").to_string()
}
