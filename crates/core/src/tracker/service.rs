//! Pipeline functions.

use chrono::{NaiveDate, Utc};
use laba_shared::config::ReportConfig;
use tracing::{debug, error, info, warn};

use super::error::TrackerError;
use super::types::{DateRange, NewCostEntry, NewSaleEntry};
use crate::aggregation::{AggregationService, CategoryTotal, Granularity, TrendPoint};
use crate::dashboard::{DashboardMetrics, DashboardService};
use crate::ledger::{CostEntry, Ledger, LoadOutcome, SaleEntry};
use crate::reports::{Report, ReportPeriod, ReportService};
use crate::store::{Dataset, NewRecord, RecordFilter, RecordStore};
use crate::summary::{FinancialSummary, SummaryService};

async fn append(
    store: &dyn RecordStore,
    dataset: Dataset,
    record: &NewRecord,
) -> Result<(), TrackerError> {
    store.insert(dataset, record).await.map_err(|e| {
        error!(error = %e, table = %dataset, date = %record.date, "Insert failed");
        TrackerError::from(e)
    })
}

/// Validates a cost entry and appends it.
///
/// The store is called once; a failed insert is reported, not retried.
pub async fn record_cost(
    store: &dyn RecordStore,
    input: NewCostEntry,
) -> Result<CostEntry, TrackerError> {
    let entry = CostEntry::try_from(input)?;
    append(store, Dataset::Cost, &entry.to_record()).await?;

    info!(
        date = %entry.date(),
        material = entry.material(),
        total = %entry.total(),
        "Cost entry recorded"
    );
    Ok(entry)
}

/// Validates a sale entry and appends it.
///
/// The store is called once; a failed insert is reported, not retried.
pub async fn record_sale(
    store: &dyn RecordStore,
    input: NewSaleEntry,
) -> Result<SaleEntry, TrackerError> {
    let entry = SaleEntry::try_from(input)?;
    append(store, Dataset::Sale, &entry.to_record()).await?;

    info!(
        date = %entry.date(),
        product = entry.product(),
        total = %entry.total(),
        "Sale entry recorded"
    );
    Ok(entry)
}

/// Fetches both tables and builds a fresh ledger.
///
/// Rejected rows are logged and left out; they do not fail the call.
pub async fn load_ledger(
    store: &dyn RecordStore,
    filter: &RecordFilter,
) -> Result<LoadOutcome, TrackerError> {
    let raw_costs = store.query(Dataset::Cost, filter).await?;
    let raw_sales = store.query(Dataset::Sale, filter).await?;

    let outcome = Ledger::load(&raw_costs, &raw_sales);
    for rejected in &outcome.rejected {
        warn!(
            table = %rejected.dataset,
            row = ?rejected.row,
            field = rejected.field,
            code = rejected.error_code(),
            "Skipping invalid row: {rejected}"
        );
    }
    debug!(
        costs = outcome.ledger.costs().len(),
        sales = outcome.ledger.sales().len(),
        rejected = outcome.rejected.len(),
        recomputed = outcome.recomputed_totals,
        "Ledger loaded"
    );
    Ok(outcome)
}

fn range_filter(range: Option<DateRange>) -> RecordFilter {
    range.map_or_else(RecordFilter::all, |r| r.filter())
}

/// All-time summary, or the summary of one day.
pub async fn summary(
    store: &dyn RecordStore,
    date: Option<NaiveDate>,
) -> Result<FinancialSummary, TrackerError> {
    let filter = range_filter(date.map(DateRange::day));
    let ledger = load_ledger(store, &filter).await?.ledger;

    Ok(match date {
        Some(date) => SummaryService::summarize_for_date(&ledger, date),
        None => SummaryService::summarize_ledger(&ledger),
    })
}

/// Combined cost/sale trend.
pub async fn trend(
    store: &dyn RecordStore,
    granularity: Granularity,
    range: Option<DateRange>,
) -> Result<Vec<TrendPoint>, TrackerError> {
    let ledger = load_ledger(store, &range_filter(range)).await?.ledger;
    Ok(AggregationService::combined_trend(&ledger, granularity))
}

/// Totals per material (`Dataset::Cost`) or per product (`Dataset::Sale`).
pub async fn categories(
    store: &dyn RecordStore,
    dataset: Dataset,
    range: Option<DateRange>,
) -> Result<Vec<CategoryTotal>, TrackerError> {
    let ledger = load_ledger(store, &range_filter(range)).await?.ledger;
    Ok(match dataset {
        Dataset::Cost => AggregationService::group_by_label(ledger.costs()),
        Dataset::Sale => AggregationService::group_by_label(ledger.sales()),
    })
}

/// Dashboard metrics over the whole ledger or a date range.
pub async fn dashboard(
    store: &dyn RecordStore,
    granularity: Granularity,
    range: Option<DateRange>,
) -> Result<DashboardMetrics, TrackerError> {
    let ledger = load_ledger(store, &range_filter(range)).await?.ledger;
    Ok(DashboardService::build(&ledger, granularity))
}

/// Builds the report for `period`.
pub async fn report(
    store: &dyn RecordStore,
    period: ReportPeriod,
    config: &ReportConfig,
) -> Result<Report, TrackerError> {
    let range = match period {
        ReportPeriod::All => None,
        ReportPeriod::Day { date } => Some(DateRange::day(date)),
        ReportPeriod::Range { start, end } => Some(DateRange::new(start, end)?),
    };

    let ledger = load_ledger(store, &range_filter(range)).await?.ledger;
    let today = Utc::now().date_naive();
    let report = ReportService::for_period(config, &ledger, period, today)?;

    info!(
        period = %report.period_label,
        costs = report.cost_table.len(),
        sales = report.sale_table.len(),
        "Report built"
    );
    Ok(report)
}
