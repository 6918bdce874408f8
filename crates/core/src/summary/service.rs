//! Summary computation.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::types::FinancialSummary;
use crate::ledger::{Ledger, LedgerEntry};

/// Computes financial summaries over ledger entries.
pub struct SummaryService;

impl SummaryService {
    /// Sums both collections. Empty input gives all zeros.
    #[must_use]
    pub fn summarize<'a, C, S>(
        costs: impl IntoIterator<Item = &'a C>,
        sales: impl IntoIterator<Item = &'a S>,
    ) -> FinancialSummary
    where
        C: LedgerEntry + 'a,
        S: LedgerEntry + 'a,
    {
        let total_cost: Decimal = costs.into_iter().map(LedgerEntry::total).sum();
        let total_revenue: Decimal = sales.into_iter().map(LedgerEntry::total).sum();
        FinancialSummary::new(total_cost, total_revenue)
    }

    /// Summary over the whole ledger.
    #[must_use]
    pub fn summarize_ledger(ledger: &Ledger) -> FinancialSummary {
        Self::summarize(ledger.costs(), ledger.sales())
    }

    /// Summary over entries dated exactly `date`.
    #[must_use]
    pub fn summarize_for_date(ledger: &Ledger, date: NaiveDate) -> FinancialSummary {
        Self::summarize(ledger.costs_on(date), ledger.sales_on(date))
    }

    /// Summary over the inclusive range `start..=end`.
    #[must_use]
    pub fn summarize_range(ledger: &Ledger, start: NaiveDate, end: NaiveDate) -> FinancialSummary {
        let in_range = |date: NaiveDate| date >= start && date <= end;
        Self::summarize(
            ledger.costs().iter().filter(|e| in_range(e.date())),
            ledger.sales().iter().filter(|e| in_range(e.date())),
        )
    }
}
