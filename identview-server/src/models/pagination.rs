//! Listing window types - limit/offset pagination

use serde::Deserialize;

/// Maximum rows a single listing request may return
const MAX_LIMIT: u32 = 500;

/// Rows returned when no limit is given
const DEFAULT_LIMIT: u32 = 50;

/// Validated listing window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListParams {
    /// Rows to return (clamped to 1..=500)
    pub limit: u32,
    /// Rows to skip from the newest end
    pub offset: u32,
}

impl ListParams {
    /// Create a window with validation: limit clamped to 1..=MAX_LIMIT
    pub fn new(limit: u32, offset: u32) -> Self {
        Self {
            limit: limit.clamp(1, MAX_LIMIT),
            offset,
        }
    }
}

impl Default for ListParams {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            offset: 0,
        }
    }
}

/// Query parameters accepted by every listing endpoint
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListQuery {
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

impl From<ListQuery> for ListParams {
    fn from(query: ListQuery) -> Self {
        Self::new(
            query.limit.unwrap_or(DEFAULT_LIMIT),
            query.offset.unwrap_or(0),
        )
    }
}
