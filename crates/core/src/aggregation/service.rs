//! Time and category bucketing.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::types::{BucketTotal, CategoryTotal, Granularity, TrendPoint};
use crate::ledger::{Ledger, LedgerEntry};

/// Service for bucketing and merging entry totals.
///
/// Every function is pure and deterministic: the same input always gives
/// the same output, in the same order.
pub struct AggregationService;

impl AggregationService {
    /// Sums entry totals per time bucket.
    ///
    /// The result is sparse (buckets without entries are left out) and
    /// sorted ascending by bucket start.
    #[must_use]
    pub fn bucket_by<E: LedgerEntry>(entries: &[E], granularity: Granularity) -> Vec<BucketTotal> {
        let mut buckets: BTreeMap<NaiveDate, Decimal> = BTreeMap::new();
        for entry in entries {
            *buckets
                .entry(granularity.bucket_start(entry.date()))
                .or_default() += entry.total();
        }

        buckets
            .into_iter()
            .map(|(bucket_start, total)| BucketTotal {
                bucket_start,
                total,
            })
            .collect()
    }

    /// Sums entry totals per category.
    ///
    /// Sorted by total descending; equal totals are ordered by category
    /// name ascending.
    #[must_use]
    pub fn group_by_category<E, F>(entries: &[E], key_fn: F) -> Vec<CategoryTotal>
    where
        E: LedgerEntry,
        F: Fn(&E) -> &str,
    {
        let mut groups: BTreeMap<&str, Decimal> = BTreeMap::new();
        for entry in entries {
            *groups.entry(key_fn(entry)).or_default() += entry.total();
        }

        let mut totals: Vec<CategoryTotal> = groups
            .into_iter()
            .map(|(category, total)| CategoryTotal {
                category: category.to_string(),
                total,
            })
            .collect();
        totals.sort_by(|a, b| {
            b.total
                .cmp(&a.total)
                .then_with(|| a.category.cmp(&b.category))
        });
        totals
    }

    /// Full outer join of a cost series and a sale series on bucket start.
    ///
    /// Every bucket present in either input appears once; the missing side
    /// is zero. Sorted ascending by bucket start.
    #[must_use]
    pub fn merge_trends(cost_series: &[BucketTotal], sale_series: &[BucketTotal]) -> Vec<TrendPoint> {
        let mut merged: BTreeMap<NaiveDate, (Decimal, Decimal)> = BTreeMap::new();
        for bucket in cost_series {
            merged.entry(bucket.bucket_start).or_default().0 += bucket.total;
        }
        for bucket in sale_series {
            merged.entry(bucket.bucket_start).or_default().1 += bucket.total;
        }

        merged
            .into_iter()
            .map(|(bucket_start, (cost_total, sale_total))| TrendPoint {
                bucket_start,
                cost_total,
                sale_total,
            })
            .collect()
    }

    /// Sums entry totals per material or product name.
    #[must_use]
    pub fn group_by_label<E: LedgerEntry>(entries: &[E]) -> Vec<CategoryTotal> {
        Self::group_by_category(entries, E::label)
    }

    /// Buckets both ledger collections and merges them.
    #[must_use]
    pub fn combined_trend(ledger: &Ledger, granularity: Granularity) -> Vec<TrendPoint> {
        Self::merge_trends(
            &Self::bucket_by(ledger.costs(), granularity),
            &Self::bucket_by(ledger.sales(), granularity),
        )
    }
}
