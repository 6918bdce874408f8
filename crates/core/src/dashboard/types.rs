//! Dashboard data types.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::aggregation::{BucketTotal, CategoryTotal, Granularity, TrendPoint};
use crate::ledger::EmptyDatasetWarning;
use crate::summary::FinancialSummary;

/// Dashboard metrics response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardMetrics {
    /// Bucket width used for every series.
    pub granularity: Granularity,
    /// Totals over the whole ledger.
    pub summary: FinancialSummary,
    /// Sales bucketed by time, sparse.
    pub revenue_series: Vec<BucketTotal>,
    /// Costs and sales merged per bucket, dense.
    pub trend: Vec<TrendPoint>,
    /// The trend as parallel vectors.
    pub chart: TrendChart,
    /// Materials by total spend, largest first.
    pub top_materials: Vec<CategoryTotal>,
    /// Products by revenue, largest first.
    pub top_products: Vec<CategoryTotal>,
    /// Number of entries per table.
    pub counts: EntryCounts,
    /// Set when a table has no rows.
    pub no_data: Option<EmptyDatasetWarning>,
}

/// Trend chart data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TrendChart {
    /// Labels (bucket names).
    pub labels: Vec<String>,
    /// Cost per bucket.
    pub cost: Vec<Decimal>,
    /// Revenue per bucket.
    pub sale: Vec<Decimal>,
    /// Revenue minus cost per bucket.
    pub net: Vec<Decimal>,
}

/// Entry counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct EntryCounts {
    /// Cost entries.
    pub costs: usize,
    /// Sale entries.
    pub sales: usize,
}
