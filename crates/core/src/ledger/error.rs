//! Ledger validation errors and warnings.
//!
//! A `ValidationError` names the table, the row index inside the batch, the
//! field and the offending value, so the user can correct and resubmit.

use rust_decimal::Decimal;
use serde::Serialize;
use thiserror::Error;

use crate::store::Dataset;

/// What exactly is wrong with a field.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum ValidationIssue {
    /// Material or product name is empty.
    #[error("must not be empty")]
    EmptyName,

    /// Quantity is below zero.
    #[error("must not be negative, got {0}")]
    NegativeQuantity(i64),

    /// Unit price is below zero.
    #[error("must not be negative, got {0}")]
    NegativeUnitPrice(Decimal),

    /// Unit price is above the accepted maximum.
    #[error("must not exceed 10^18, got {0}")]
    AmountTooLarge(Decimal),

    /// Date could not be read as a calendar date.
    #[error("is not a valid calendar date: {0:?}")]
    InvalidDate(String),

    /// `quantity * unit_price` is above the accepted maximum.
    #[error("quantity {quantity} x unit price {unit_price} exceeds 10^18")]
    TotalOverflow {
        /// Quantity.
        quantity: u64,
        /// Unit price.
        unit_price: Decimal,
    },
}

impl ValidationIssue {
    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyName => "EMPTY_NAME",
            Self::NegativeQuantity(_) => "NEGATIVE_QUANTITY",
            Self::NegativeUnitPrice(_) => "NEGATIVE_UNIT_PRICE",
            Self::AmountTooLarge(_) => "AMOUNT_TOO_LARGE",
            Self::InvalidDate(_) => "INVALID_DATE",
            Self::TotalOverflow { .. } => "TOTAL_OVERFLOW",
        }
    }
}

/// A rejected input row.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("{dataset}{}: {field} {issue}", row_suffix(.row))]
pub struct ValidationError {
    /// Table the row belongs to.
    pub dataset: Dataset,
    /// Zero-based index of the row in its batch, when it came from a batch.
    pub row: Option<usize>,
    /// Field that failed.
    pub field: &'static str,
    /// What is wrong with it.
    pub issue: ValidationIssue,
}

impl ValidationError {
    /// Creates an error for a single submitted entry.
    #[must_use]
    pub const fn new(dataset: Dataset, field: &'static str, issue: ValidationIssue) -> Self {
        Self {
            dataset,
            row: None,
            field,
            issue,
        }
    }

    /// Attaches the batch row index.
    #[must_use]
    pub const fn at_row(mut self, row: usize) -> Self {
        self.row = Some(row);
        self
    }

    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        self.issue.error_code()
    }
}

fn row_suffix(row: &Option<usize>) -> String {
    row.map(|row| format!(" row {row}")).unwrap_or_default()
}

/// Not a failure: the ledger has no rows in one or both tables.
///
/// Totals over an empty table are zero. Callers show a "no data" state
/// instead of treating this as an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmptyDatasetWarning {
    /// Tables without any rows.
    pub datasets: Vec<Dataset>,
}

impl std::fmt::Display for EmptyDatasetWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self.datasets.iter().map(|d| d.table_name()).collect();
        write!(f, "No data yet in {}", names.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_error_display_with_row() {
        let err = ValidationError::new(
            Dataset::Cost,
            "quantity",
            ValidationIssue::NegativeQuantity(-3),
        )
        .at_row(4);
        assert_eq!(
            err.to_string(),
            "modal_produksi row 4: quantity must not be negative, got -3"
        );
        assert_eq!(err.error_code(), "NEGATIVE_QUANTITY");
    }

    #[test]
    fn test_error_display_without_row() {
        let err = ValidationError::new(
            Dataset::Sale,
            "unit_price",
            ValidationIssue::NegativeUnitPrice(dec!(-1.5)),
        );
        assert_eq!(
            err.to_string(),
            "data_penjualan: unit_price must not be negative, got -1.5"
        );
    }

    #[test]
    fn test_invalid_date_display() {
        let err = ValidationError::new(
            Dataset::Sale,
            "date",
            ValidationIssue::InvalidDate("31/02".to_string()),
        );
        assert_eq!(
            err.to_string(),
            "data_penjualan: date is not a valid calendar date: \"31/02\""
        );
    }

    #[test]
    fn test_empty_warning_display() {
        let warning = EmptyDatasetWarning {
            datasets: vec![Dataset::Cost, Dataset::Sale],
        };
        assert_eq!(warning.to_string(), "No data yet in modal_produksi, data_penjualan");
    }
}
