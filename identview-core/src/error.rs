/// Structured error types for identview-core.
///
/// Uses `thiserror` for composable library errors. The binary crate
/// (identview-cli) wraps these with `anyhow` for convenience.
use thiserror::Error;

/// Main error type for identview-core operations
#[derive(Error, Debug)]
pub enum IdentError {
    /// Configuration error (missing or unusable cache location)
    #[error("Configuration error: {reason}")]
    Config { reason: String },
}

/// Result type alias for identview-core operations
pub type Result<T> = std::result::Result<T, IdentError>;

impl IdentError {
    /// Create a config error
    pub fn config(reason: impl Into<String>) -> Self {
        Self::Config {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IdentError::config("IDENT_DB_PATH not set");
        assert_eq!(
            err.to_string(),
            "Configuration error: IDENT_DB_PATH not set"
        );
    }
}
