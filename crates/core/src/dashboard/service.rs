//! Dashboard assembly.

use super::types::{DashboardMetrics, EntryCounts, TrendChart};
use crate::aggregation::{AggregationService, Granularity, TrendPoint};
use crate::ledger::Ledger;
use crate::summary::SummaryService;

/// Maximum number of materials and products listed.
pub const TOP_CATEGORIES: usize = 5;

/// Builds dashboard metrics from a ledger.
pub struct DashboardService;

impl DashboardService {
    /// Computes every dashboard series at `granularity`.
    ///
    /// An empty ledger gives zero totals, empty series, and `no_data` set.
    #[must_use]
    pub fn build(ledger: &Ledger, granularity: Granularity) -> DashboardMetrics {
        let trend = AggregationService::combined_trend(ledger, granularity);
        let chart = Self::chart(&trend, granularity);

        let mut top_materials = AggregationService::group_by_label(ledger.costs());
        top_materials.truncate(TOP_CATEGORIES);
        let mut top_products = AggregationService::group_by_label(ledger.sales());
        top_products.truncate(TOP_CATEGORIES);

        DashboardMetrics {
            granularity,
            summary: SummaryService::summarize_ledger(ledger),
            revenue_series: AggregationService::bucket_by(ledger.sales(), granularity),
            trend,
            chart,
            top_materials,
            top_products,
            counts: EntryCounts {
                costs: ledger.costs().len(),
                sales: ledger.sales().len(),
            },
            no_data: ledger.empty_datasets(),
        }
    }

    fn chart(trend: &[TrendPoint], granularity: Granularity) -> TrendChart {
        let mut chart = TrendChart::default();
        for point in trend {
            chart.labels.push(granularity.label(point.bucket_start));
            chart.cost.push(point.cost_total);
            chart.sale.push(point.sale_total);
            chart.net.push(point.net());
        }
        chart
    }
}
