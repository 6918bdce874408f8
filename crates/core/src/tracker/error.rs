//! Pipeline errors.

use laba_shared::AppError;
use thiserror::Error;

use crate::ledger::ValidationError;
use crate::reports::ReportError;
use crate::store::StoreError;

/// Errors surfaced by the tracker pipeline.
#[derive(Debug, Error)]
pub enum TrackerError {
    /// The submitted entry is invalid; nothing was written.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The record store failed. The call is not retried.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The report could not be built.
    #[error(transparent)]
    Report(#[from] ReportError),
}

impl TrackerError {
    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(e) => e.error_code(),
            Self::Store(e) => e.error_code(),
            Self::Report(e) => e.error_code(),
        }
    }
}

impl From<TrackerError> for AppError {
    fn from(err: TrackerError) -> Self {
        match err {
            TrackerError::Validation(e) => Self::Validation(e.to_string()),
            TrackerError::Report(e) => Self::Validation(e.to_string()),
            TrackerError::Store(e) => Self::Database(e.to_string()),
        }
    }
}
