//! Storage error model.

use thiserror::Error;

use sweetshop_core::DomainError;

/// Result type used across the storage layer.
pub type StoreResult<T> = Result<T, StoreError>;

/// Storage-layer error.
///
/// Domain failures (not found, conflict, insufficient stock) pass through
/// unchanged so the transport layer can map them; everything else collapses
/// into `Backend`.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("storage backend error: {0}")]
    Backend(String),
}

impl StoreError {
    pub fn backend(err: impl core::fmt::Display) -> Self {
        Self::Backend(err.to_string())
    }

    pub fn as_domain(&self) -> Option<&DomainError> {
        match self {
            StoreError::Domain(e) => Some(e),
            StoreError::Backend(_) => None,
        }
    }
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::RowNotFound => DomainError::NotFound.into(),
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                DomainError::conflict("unique constraint violated").into()
            }
            _ => StoreError::Backend(err.to_string()),
        }
    }
}
