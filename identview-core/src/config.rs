//! Cache configuration - locating the iDent cache database
//!
//! Configuration is loaded from environment variables:
//! - `IDENT_DB_PATH`: Path to the SQLite cache file written by the iDent
//!   sync process. There is no default; the file location is
//!   deployment-specific.

use std::path::PathBuf;

use crate::error::{IdentError, Result};

/// Environment variable naming the cache database file
pub const DB_PATH_ENV: &str = "IDENT_DB_PATH";

/// Cache configuration
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Path to the SQLite cache file (e.g. /srv/ident/ident_cache.db)
    pub db_path: PathBuf,
}

impl CacheConfig {
    /// Create config from environment variables.
    ///
    /// Fails with an actionable error if `IDENT_DB_PATH` is not set.
    pub fn from_env() -> Result<Self> {
        let db_path = std::env::var(DB_PATH_ENV)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .ok_or_else(|| {
                IdentError::config(format!(
                    "{DB_PATH_ENV} not set. Set it to the iDent cache file or pass --db-path"
                ))
            })?;

        tracing::debug!(db_path = %db_path.display(), "cache config loaded from environment");
        Ok(Self { db_path })
    }

    /// Create config with an explicit cache path (flag override, tests)
    pub fn with_path(db_path: impl Into<PathBuf>) -> Self {
        Self {
            db_path: db_path.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_path_is_kept() {
        let config = CacheConfig::with_path("/srv/ident/ident_cache.db");
        assert_eq!(
            config.db_path,
            PathBuf::from("/srv/ident/ident_cache.db")
        );
    }

    #[test]
    fn missing_env_is_a_config_error() {
        std::env::remove_var(DB_PATH_ENV);
        let err = CacheConfig::from_env().unwrap_err();
        assert!(err.to_string().contains(DB_PATH_ENV));
    }
}
