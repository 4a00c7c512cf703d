//! Error types for store operations.

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Error type for store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The adapter could not durably read or write. The whole operation
    /// aborts; no partial record is left behind.
    #[error("Storage error: {message}")]
    Storage { message: String },

    /// A positional delete addressed a record that does not exist.
    #[error("No reservation at position {index} (store holds {len})")]
    NotFound { index: usize, len: usize },

    /// Store configuration could not be read or was invalid.
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl StoreError {
    /// Create a storage error.
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }

    /// Create a not-found error for a positional delete.
    pub fn not_found(index: usize, len: usize) -> Self {
        Self::NotFound { index, len }
    }

    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// Whether this error is a missing-record error (a reportable no-op for
    /// the caller, not a storage failure).
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        StoreError::storage(err.to_string())
    }
}
