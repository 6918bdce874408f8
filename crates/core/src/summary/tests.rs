//! Tests for the summary module.

use chrono::NaiveDate;
use laba_shared::types::Currency;
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::service::SummaryService;
use super::types::FinancialSummary;
use crate::ledger::{CostEntry, Ledger, MAX_AMOUNT, SaleEntry};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn scenario_ledger() -> Ledger {
    Ledger::new(
        vec![CostEntry::new(date(2024, 1, 1), "Flour", 10, dec!(5000)).unwrap()],
        vec![SaleEntry::new(date(2024, 1, 1), "Bread", 20, dec!(3000)).unwrap()],
    )
}

#[test]
fn test_single_day_summary() {
    let summary = SummaryService::summarize_for_date(&scenario_ledger(), date(2024, 1, 1));

    assert_eq!(summary.total_cost, dec!(50000));
    assert_eq!(summary.total_revenue, dec!(60000));
    assert_eq!(summary.net_profit, dec!(10000));
    assert_eq!(
        summary.lines(Currency::Idr),
        [
            "Total Cost: Rp 50,000".to_string(),
            "Total Revenue: Rp 60,000".to_string(),
            "Net Profit: Rp 10,000".to_string(),
        ]
    );
}

#[test]
fn test_other_date_is_zero() {
    let summary = SummaryService::summarize_for_date(&scenario_ledger(), date(2024, 1, 2));
    assert_eq!(summary, FinancialSummary::default());
}

#[test]
fn test_loss_is_not_clamped() {
    let ledger = Ledger::new(
        vec![CostEntry::new(date(2024, 1, 1), "Flour", 10, dec!(5000)).unwrap()],
        vec![SaleEntry::new(date(2024, 1, 1), "Bread", 10, dec!(4000)).unwrap()],
    );

    let summary = SummaryService::summarize_ledger(&ledger);
    assert_eq!(summary.net_profit, dec!(-10000));
    assert_eq!(summary.lines(Currency::Idr)[2], "Net Profit: Rp -10,000");
}

#[test]
fn test_range_is_inclusive() {
    let ledger = Ledger::new(
        vec![
            CostEntry::new(date(2024, 1, 1), "Flour", 1, dec!(100)).unwrap(),
            CostEntry::new(date(2024, 1, 31), "Flour", 1, dec!(200)).unwrap(),
            CostEntry::new(date(2024, 2, 1), "Flour", 1, dec!(400)).unwrap(),
        ],
        vec![SaleEntry::new(date(2024, 1, 15), "Bread", 3, dec!(500)).unwrap()],
    );

    let summary = SummaryService::summarize_range(&ledger, date(2024, 1, 1), date(2024, 1, 31));
    assert_eq!(summary, FinancialSummary::new(dec!(300), dec!(1500)));
    assert_eq!(
        SummaryService::summarize_ledger(&ledger),
        FinancialSummary::new(dec!(700), dec!(1500))
    );
}

#[test]
fn test_summary_serializes_decimals_as_strings() {
    let json = serde_json::to_value(FinancialSummary::new(dec!(1.5), dec!(2))).unwrap();
    assert_eq!(json["total_cost"], "1.5");
    assert_eq!(json["net_profit"], "0.5");
}

#[test]
fn test_entries_at_maximum_amount_sum_without_overflow() {
    let day = date(2024, 1, 1);
    let sales: Vec<SaleEntry> = (0..10_000)
        .map(|_| SaleEntry::new(day, "Gold", 1, MAX_AMOUNT).unwrap())
        .collect();
    let costs = vec![CostEntry::new(day, "Ore", 1, MAX_AMOUNT).unwrap()];

    let summary = SummaryService::summarize(&costs, &sales);
    assert_eq!(summary.total_revenue, MAX_AMOUNT * dec!(10000));
    assert_eq!(summary.net_profit, MAX_AMOUNT * dec!(9999));

    let loss = SummaryService::summarize(&sales, &costs);
    assert_eq!(loss.net_profit, -(MAX_AMOUNT * dec!(9999)));
}

proptest! {
    /// Property 5: Empty input
    /// Summaries over no entries are zero, whatever the date or range.
    #[test]
    fn prop_empty_ledger_sums_to_zero(offset in 0i64..3650, span in 0i64..400) {
        let ledger = Ledger::default();
        let start = date(2020, 1, 1) + chrono::Duration::days(offset);
        let end = start + chrono::Duration::days(span);

        prop_assert_eq!(SummaryService::summarize_ledger(&ledger), FinancialSummary::default());
        prop_assert_eq!(
            SummaryService::summarize_for_date(&ledger, start),
            FinancialSummary::default()
        );
        prop_assert_eq!(
            SummaryService::summarize_range(&ledger, start, end),
            FinancialSummary::default()
        );
    }

    /// Net profit is always revenue minus cost.
    #[test]
    fn prop_net_profit_identity(
        costs in proptest::collection::vec((0i64..1000, 0i64..1_000_000), 0..30),
        sales in proptest::collection::vec((0i64..1000, 0i64..1_000_000), 0..30),
    ) {
        let day = date(2024, 6, 1);
        let ledger = Ledger::new(
            costs
                .iter()
                .map(|&(q, c)| CostEntry::new(day, "M", q, Decimal::new(c, 2)).unwrap())
                .collect(),
            sales
                .iter()
                .map(|&(q, c)| SaleEntry::new(day, "P", q, Decimal::new(c, 2)).unwrap())
                .collect(),
        );

        let summary = SummaryService::summarize_ledger(&ledger);
        prop_assert_eq!(summary.net_profit, summary.total_revenue - summary.total_cost);
        prop_assert_eq!(summary, SummaryService::summarize_for_date(&ledger, day));
    }
}
