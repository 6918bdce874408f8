//! Record store error types.

use thiserror::Error;

use super::types::Dataset;

/// Errors surfaced by a [`RecordStore`](super::RecordStore).
///
/// Messages are the adapter's own text, passed through unchanged. None of
/// these are retried automatically: an insert that failed on the way back
/// may already have been written.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Appending a row failed.
    #[error("Insert into {dataset} failed: {message}")]
    Insert {
        /// Target table.
        dataset: Dataset,
        /// Adapter message.
        message: String,
    },

    /// Reading rows failed.
    #[error("Query on {dataset} failed: {message}")]
    Query {
        /// Source table.
        dataset: Dataset,
        /// Adapter message.
        message: String,
    },

    /// The store could not be reached at all.
    #[error("Record store unavailable: {0}")]
    Connection(String),
}

impl StoreError {
    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Insert { .. } => "STORE_INSERT_FAILED",
            Self::Query { .. } => "STORE_QUERY_FAILED",
            Self::Connection(_) => "STORE_UNAVAILABLE",
        }
    }

    /// Returns the table involved, if the failure was table specific.
    #[must_use]
    pub const fn dataset(&self) -> Option<Dataset> {
        match self {
            Self::Insert { dataset, .. } | Self::Query { dataset, .. } => Some(*dataset),
            Self::Connection(_) => None,
        }
    }
}
