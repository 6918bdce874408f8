//! Ledger model.
//!
//! This module implements the read projection of the two record tables:
//! - Cost and sale entries with derived totals
//! - Date normalization and validation at ingest
//! - Partial-acceptance loading with per-row errors
//! - The empty-dataset warning

pub mod entry;
pub mod error;
pub mod model;


pub use entry::{CostEntry, LedgerEntry, MAX_AMOUNT, SaleEntry};
pub use error::{EmptyDatasetWarning, ValidationError, ValidationIssue};
pub use model::{Ledger, LoadOutcome};
