//! Error types for recordctl-store

use thiserror::Error;

/// Result type alias for store operations
pub type Result<T> = std::result::Result<T, StoreError>;

#[derive(Error, Debug)]
pub enum StoreError {
    /// Statement preparation or execution failed
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A freshly inserted row could not be read back
    #[error("not found: record '{id}'")]
    NotFound { id: i64 },

    /// Connection string could not be parsed
    #[error("invalid connection string: {reason}")]
    InvalidDsn { reason: String },
}

impl StoreError {
    pub fn invalid_dsn(reason: impl Into<String>) -> Self {
        Self::InvalidDsn {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StoreError::NotFound { id: 42 };
        assert_eq!(err.to_string(), "not found: record '42'");

        let err = StoreError::invalid_dsn("missing '@'");
        assert_eq!(err.to_string(), "invalid connection string: missing '@'");
    }

    #[test]
    fn test_sqlx_error_conversion() {
        let err: StoreError = sqlx::Error::RowNotFound.into();
        assert!(matches!(err, StoreError::Database(_)));
    }
}
