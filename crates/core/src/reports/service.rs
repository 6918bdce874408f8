//! Report generation service.

use chrono::NaiveDate;
use laba_shared::config::ReportConfig;

use super::error::ReportError;
use super::types::{CostRow, Report, ReportPeriod, SaleRow};
use crate::ledger::Ledger;
use crate::summary::{FinancialSummary, SummaryService};

/// Service for generating reports.
pub struct ReportService;

impl ReportService {
    /// Builds a report with the default title and currency.
    ///
    /// Every entry of `ledger` goes into the tables; the range is only
    /// printed, so callers narrow the ledger first.
    ///
    /// # Errors
    ///
    /// Returns `ReportError::InvalidDateRange` if `range_start > range_end`.
    pub fn build(
        ledger: &Ledger,
        summary: FinancialSummary,
        period_label: impl Into<String>,
        range_start: NaiveDate,
        range_end: NaiveDate,
    ) -> Result<Report, ReportError> {
        Self::build_with(
            &ReportConfig::default(),
            ledger,
            summary,
            period_label,
            range_start,
            range_end,
        )
    }

    /// Builds a report using the configured title and currency.
    ///
    /// # Errors
    ///
    /// Returns `ReportError::InvalidDateRange` if `range_start > range_end`.
    pub fn build_with(
        config: &ReportConfig,
        ledger: &Ledger,
        summary: FinancialSummary,
        period_label: impl Into<String>,
        range_start: NaiveDate,
        range_end: NaiveDate,
    ) -> Result<Report, ReportError> {
        if range_start > range_end {
            return Err(ReportError::InvalidDateRange {
                start: range_start,
                end: range_end,
            });
        }

        let cost_table = ledger
            .costs()
            .iter()
            .map(|entry| CostRow {
                date: entry.date(),
                material: entry.material().to_string(),
                quantity: entry.quantity(),
                unit_price: entry.unit_price(),
                total: entry.total(),
            })
            .collect();

        let sale_table = ledger
            .sales()
            .iter()
            .map(|entry| SaleRow {
                date: entry.date(),
                product: entry.product().to_string(),
                quantity: entry.quantity(),
                unit_price: entry.unit_price(),
                total: entry.total(),
            })
            .collect();

        Ok(Report {
            title: config.title.clone(),
            period_label: period_label.into(),
            range_start,
            range_end,
            currency: config.currency,
            summary,
            summary_lines: summary.lines(config.currency).to_vec(),
            cost_table,
            sale_table,
        })
    }

    /// Resolves `period`, narrows the ledger to it, summarizes and builds.
    ///
    /// # Errors
    ///
    /// Returns `ReportError::InvalidDateRange` for a reversed range.
    pub fn for_period(
        config: &ReportConfig,
        ledger: &Ledger,
        period: ReportPeriod,
        today: NaiveDate,
    ) -> Result<Report, ReportError> {
        let (label, start, end) = period.resolve(ledger, today)?;
        let scoped = ledger.within(start, end);
        let summary = SummaryService::summarize_ledger(&scoped);
        Self::build_with(config, &scoped, summary, label, start, end)
    }
}
