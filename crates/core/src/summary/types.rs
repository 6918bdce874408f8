//! Summary data types.

use laba_shared::types::{Currency, Money};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Totals over one set of cost entries and one set of sale entries.
///
/// `net_profit` is `total_revenue - total_cost` and is never clamped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinancialSummary {
    /// Sum of cost entry totals.
    pub total_cost: Decimal,
    /// Sum of sale entry totals.
    pub total_revenue: Decimal,
    /// Revenue minus cost, may be negative.
    pub net_profit: Decimal,
}

impl FinancialSummary {
    /// Builds a summary from the two totals.
    #[must_use]
    pub fn new(total_cost: Decimal, total_revenue: Decimal) -> Self {
        Self {
            total_cost,
            total_revenue,
            net_profit: total_revenue - total_cost,
        }
    }

    /// Display lines in the fixed order cost, revenue, profit.
    #[must_use]
    pub fn lines(&self, currency: Currency) -> [String; 3] {
        [
            format!("Total Cost: {}", Money::new(self.total_cost, currency)),
            format!("Total Revenue: {}", Money::new(self.total_revenue, currency)),
            format!("Net Profit: {}", Money::new(self.net_profit, currency)),
        ]
    }
}
