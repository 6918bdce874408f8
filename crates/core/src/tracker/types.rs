//! Pipeline input types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::ledger::{CostEntry, SaleEntry, ValidationError, ValidationIssue};
use crate::reports::ReportError;
use crate::store::{Dataset, RawDate, RecordFilter};

/// A cost entry as submitted by a form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCostEntry {
    /// Purchase date.
    pub date: RawDate,
    /// Material bought.
    pub material: String,
    /// Quantity bought.
    pub quantity: i64,
    /// Price per unit.
    pub unit_price: Decimal,
}

/// A sale entry as submitted by a form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewSaleEntry {
    /// Sale date.
    pub date: RawDate,
    /// Product sold.
    pub product: String,
    /// Quantity sold.
    pub quantity: i64,
    /// Sell price per unit.
    pub unit_price: Decimal,
}

fn submitted_date(dataset: Dataset, date: &RawDate) -> Result<NaiveDate, ValidationError> {
    date.to_calendar_date().ok_or_else(|| {
        ValidationError::new(dataset, "date", ValidationIssue::InvalidDate(date.to_string()))
    })
}

impl TryFrom<NewCostEntry> for CostEntry {
    type Error = ValidationError;

    fn try_from(input: NewCostEntry) -> Result<Self, Self::Error> {
        let date = submitted_date(Self::DATASET, &input.date)?;
        Self::new(date, input.material, input.quantity, input.unit_price)
    }
}

impl TryFrom<NewSaleEntry> for SaleEntry {
    type Error = ValidationError;

    fn try_from(input: NewSaleEntry) -> Result<Self, Self::Error> {
        let date = submitted_date(Self::DATASET, &input.date)?;
        Self::new(date, input.product, input.quantity, input.unit_price)
    }
}

/// An inclusive date range with `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Creates a range.
    ///
    /// # Errors
    ///
    /// Returns `ReportError::InvalidDateRange` if `start > end`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, ReportError> {
        if start > end {
            return Err(ReportError::InvalidDateRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// A range covering one day.
    #[must_use]
    pub const fn day(date: NaiveDate) -> Self {
        Self {
            start: date,
            end: date,
        }
    }

    /// First day.
    #[must_use]
    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    /// Last day.
    #[must_use]
    pub const fn end(&self) -> NaiveDate {
        self.end
    }

    /// Store filter selecting this range, ascending.
    #[must_use]
    pub fn filter(&self) -> RecordFilter {
        RecordFilter::between(self.start, self.end)
    }
}
