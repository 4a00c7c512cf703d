//! Error types for the booking core.
//!
//! Conflict and policy rejections are not errors; they are carried as
//! [`Decision`](crate::booking::resolver::Decision) values so callers can
//! translate them into user-facing responses. Errors cover the paths where
//! the core could not produce a decision at all: a submission missing a
//! required field, or a store operation that failed.

use crate::store::StoreError;

/// Result type for booking-core operations.
pub type BookingResult<T> = Result<T, BookingError>;

/// Error type for booking-core operations.
#[derive(Debug, thiserror::Error)]
pub enum BookingError {
    /// A required field was missing or empty. Raised before any store access.
    #[error("Validation error: {0}")]
    Validation(String),

    /// A store operation failed. Propagated from the adapter, never swallowed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl BookingError {
    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Whether this error is a validation failure.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}
