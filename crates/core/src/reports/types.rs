//! Report data types.

use chrono::NaiveDate;
use laba_shared::types::{Currency, Money};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::ReportError;
use crate::ledger::Ledger;
use crate::summary::FinancialSummary;

/// One line of the cost detail table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostRow {
    /// Purchase date.
    pub date: NaiveDate,
    /// Material name.
    pub material: String,
    /// Quantity bought.
    pub quantity: u64,
    /// Price per unit.
    pub unit_price: Decimal,
    /// Line total.
    pub total: Decimal,
}

/// One line of the sales detail table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaleRow {
    /// Sale date.
    pub date: NaiveDate,
    /// Product name.
    pub product: String,
    /// Quantity sold.
    pub quantity: u64,
    /// Sell price per unit.
    pub unit_price: Decimal,
    /// Revenue of the line.
    pub total: Decimal,
}

/// A finished report.
///
/// Table rows keep full-precision decimals; only `summary_lines` and
/// [`Report::render_text`] are rounded for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    /// Report title.
    pub title: String,
    /// Human-readable period, e.g. `2024-01-01` or `All time`.
    pub period_label: String,
    /// First day covered.
    pub range_start: NaiveDate,
    /// Last day covered.
    pub range_end: NaiveDate,
    /// Currency used for display.
    pub currency: Currency,
    /// Raw totals.
    pub summary: FinancialSummary,
    /// `Total Cost`, `Total Revenue` and `Net Profit`, formatted.
    pub summary_lines: Vec<String>,
    /// Cost entries, ascending by date.
    pub cost_table: Vec<CostRow>,
    /// Sale entries, ascending by date.
    pub sale_table: Vec<SaleRow>,
}

impl Report {
    /// Renders the report as plain text, one line per printed row.
    #[must_use]
    pub fn render_text(&self) -> String {
        let mut lines = vec![
            self.title.clone(),
            format!("Period: {}", self.period_line()),
            String::new(),
        ];
        lines.extend(self.summary_lines.iter().cloned());
        lines.push(String::new());

        lines.push("Cost Details:".to_string());
        lines.extend(self.detail_lines(self.cost_table.iter().map(|row| {
            (row.date, row.material.as_str(), row.quantity, row.unit_price, row.total)
        })));
        lines.push(String::new());

        lines.push("Sales Details:".to_string());
        lines.extend(self.detail_lines(self.sale_table.iter().map(|row| {
            (row.date, row.product.as_str(), row.quantity, row.unit_price, row.total)
        })));

        let mut out = lines.join("\n");
        out.push('\n');
        out
    }

    /// `date | name | qty x price | total` per row, or `(no data)`.
    fn detail_lines<'a>(
        &self,
        rows: impl Iterator<Item = (NaiveDate, &'a str, u64, Decimal, Decimal)>,
    ) -> Vec<String> {
        let money = |amount: Decimal| Money::new(amount, self.currency);
        let lines: Vec<String> = rows
            .map(|(date, name, quantity, unit_price, total)| {
                format!(
                    "{date} | {name} | {quantity} x {} | {}",
                    money(unit_price),
                    money(total)
                )
            })
            .collect();
        if lines.is_empty() {
            vec!["(no data)".to_string()]
        } else {
            lines
        }
    }

    /// Suggested download name, e.g. `report_2024-01-01_2024-01-31.txt`.
    #[must_use]
    pub fn file_name(&self) -> String {
        format!("report_{}_{}.txt", self.range_start, self.range_end)
    }

    fn period_line(&self) -> String {
        let range = range_text(self.range_start, self.range_end);
        if range == self.period_label {
            range
        } else {
            format!("{} ({range})", self.period_label)
        }
    }
}

fn range_text(start: NaiveDate, end: NaiveDate) -> String {
    if start == end {
        start.to_string()
    } else {
        format!("{start} to {end}")
    }
}

/// Which entries a report covers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ReportPeriod {
    /// Every entry in the ledger.
    #[default]
    All,
    /// Entries dated exactly this day.
    Day {
        /// The day.
        date: NaiveDate,
    },
    /// Entries in the inclusive range.
    Range {
        /// First day.
        start: NaiveDate,
        /// Last day.
        end: NaiveDate,
    },
}

impl ReportPeriod {
    /// Returns the period label and the covered range.
    ///
    /// `All` covers the ledger's own date range, or only `today` when the
    /// ledger is empty.
    ///
    /// # Errors
    ///
    /// Returns `ReportError::InvalidDateRange` if a range starts after it ends.
    pub fn resolve(
        self,
        ledger: &Ledger,
        today: NaiveDate,
    ) -> Result<(String, NaiveDate, NaiveDate), ReportError> {
        match self {
            Self::All => {
                let (start, end) = ledger.date_range().unwrap_or((today, today));
                Ok(("All time".to_string(), start, end))
            }
            Self::Day { date } => Ok((date.to_string(), date, date)),
            Self::Range { start, end } => {
                if start > end {
                    return Err(ReportError::InvalidDateRange { start, end });
                }
                Ok((range_text(start, end), start, end))
            }
        }
    }
}
