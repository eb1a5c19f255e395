//! Repository implementations for cache access
//!
//! One repository per cache table. Each exposes `stats()` (row count plus
//! newest timestamp) and `list()` (newest-first window).

pub mod calls;
pub mod patients;
pub mod receptions;
pub mod staffs;
pub mod tickets;

pub use calls::CallRepo;
pub use patients::PatientRepo;
pub use receptions::ReceptionRepo;
pub use staffs::StaffRepo;
pub use tickets::TicketRepo;

use identview_core::records::CacheStatus;
use sqlx::SqlitePool;

/// Row counts and newest timestamps across all five cache tables.
pub async fn cache_status(pool: &SqlitePool) -> Result<CacheStatus, sqlx::Error> {
    Ok(CacheStatus {
        patients: PatientRepo::new(pool).stats().await?,
        staffs: StaffRepo::new(pool).stats().await?,
        scheduled_receptions: ReceptionRepo::new(pool).stats().await?,
        calls_cache: CallRepo::new(pool).stats().await?,
        online_tickets: TicketRepo::new(pool).stats().await?,
    })
}
