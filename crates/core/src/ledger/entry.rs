//! Cost and sale entries.
//!
//! Fields are private: the only way to get an entry is through `new`, which
//! validates the inputs and derives `total = quantity * unit_price`. A total
//! read back from storage is never copied into an entry.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use super::error::{ValidationError, ValidationIssue};
use crate::store::{Dataset, NewRecord};

/// Largest unit price or entry total accepted (10^18).
///
/// Sums of up to tens of billions of entries stay inside `Decimal` range,
/// so summaries and trends never overflow.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(0xA764_0000, 0x0DE0_B6B3, 0, false, 0);

/// Read access shared by both entry kinds, used by the aggregator.
pub trait LedgerEntry {
    /// Calendar date of the entry.
    fn date(&self) -> NaiveDate;
    /// Material or product name.
    fn label(&self) -> &str;
    /// Quantity.
    fn quantity(&self) -> u64;
    /// Unit price.
    fn unit_price(&self) -> Decimal;
    /// Derived total.
    fn total(&self) -> Decimal;
}

/// Checks the fields every entry shares and derives the total.
fn validate_line(
    dataset: Dataset,
    name: String,
    quantity: i64,
    unit_price: Decimal,
) -> Result<(String, u64, Decimal), ValidationError> {
    let name = name.trim().to_string();
    if name.is_empty() {
        return Err(ValidationError::new(
            dataset,
            dataset.name_field(),
            ValidationIssue::EmptyName,
        ));
    }

    let quantity = u64::try_from(quantity).map_err(|_| {
        ValidationError::new(dataset, "quantity", ValidationIssue::NegativeQuantity(quantity))
    })?;

    if unit_price.is_sign_negative() && !unit_price.is_zero() {
        return Err(ValidationError::new(
            dataset,
            "unit_price",
            ValidationIssue::NegativeUnitPrice(unit_price),
        ));
    }

    if unit_price > MAX_AMOUNT {
        return Err(ValidationError::new(
            dataset,
            "unit_price",
            ValidationIssue::AmountTooLarge(unit_price),
        ));
    }

    let total = Decimal::from(quantity)
        .checked_mul(unit_price)
        .filter(|total| *total <= MAX_AMOUNT)
        .ok_or_else(|| {
            ValidationError::new(
                dataset,
                "total",
                ValidationIssue::TotalOverflow {
                    quantity,
                    unit_price,
                },
            )
        })?;

    Ok((name, quantity, total))
}

macro_rules! ledger_entry {
    ($name:ident, $label:ident, $dataset:expr, $doc:expr) => {
        #[doc = $doc]
        #[derive(Debug, Clone, PartialEq, Eq, Serialize)]
        pub struct $name {
            date: NaiveDate,
            $label: String,
            quantity: u64,
            unit_price: Decimal,
            total: Decimal,
        }

        impl $name {
            /// The table entries of this kind live in.
            pub const DATASET: Dataset = $dataset;

            /// Validates the inputs and derives the total.
            ///
            /// # Errors
            ///
            /// Returns a `ValidationError` for an empty name, a negative
            /// quantity or unit price, or an amount above `MAX_AMOUNT`.
            pub fn new(
                date: NaiveDate,
                $label: impl Into<String>,
                quantity: i64,
                unit_price: Decimal,
            ) -> Result<Self, ValidationError> {
                let (name, quantity, total) =
                    validate_line(Self::DATASET, $label.into(), quantity, unit_price)?;
                Ok(Self {
                    date,
                    $label: name,
                    quantity,
                    unit_price,
                    total,
                })
            }

            /// Calendar date of the entry.
            #[must_use]
            pub const fn date(&self) -> NaiveDate {
                self.date
            }

            /// Trimmed, non-empty name.
            #[must_use]
            pub fn $label(&self) -> &str {
                &self.$label
            }

            /// Quantity.
            #[must_use]
            pub const fn quantity(&self) -> u64 {
                self.quantity
            }

            /// Unit price.
            #[must_use]
            pub const fn unit_price(&self) -> Decimal {
                self.unit_price
            }

            /// `quantity * unit_price`.
            #[must_use]
            pub const fn total(&self) -> Decimal {
                self.total
            }

            /// The row to append to the record store.
            #[must_use]
            pub fn to_record(&self) -> NewRecord {
                NewRecord {
                    date: self.date,
                    name: self.$label.clone(),
                    quantity: i64::try_from(self.quantity).unwrap_or(i64::MAX),
                    unit_price: self.unit_price,
                    total: self.total,
                }
            }
        }

        impl LedgerEntry for $name {
            fn date(&self) -> NaiveDate {
                self.date
            }

            fn label(&self) -> &str {
                &self.$label
            }

            fn quantity(&self) -> u64 {
                self.quantity
            }

            fn unit_price(&self) -> Decimal {
                self.unit_price
            }

            fn total(&self) -> Decimal {
                self.total
            }
        }
    };
}

ledger_entry!(
    CostEntry,
    material,
    Dataset::Cost,
    "One production-cost (modal) record: a material bought in some quantity."
);
ledger_entry!(
    SaleEntry,
    product,
    Dataset::Sale,
    "One sales (penjualan) record: a product sold at a sell price."
);
