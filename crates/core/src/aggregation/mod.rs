//! Aggregation of ledger entries.
//!
//! Two orthogonal groupings over a set of entries:
//! - Time buckets (day, ISO week, calendar month, calendar year), sparse
//! - Categories (material or product), sorted by total
//!
//! and the dense merge of a cost series with a sale series.

pub mod service;
pub mod types;


pub use service::AggregationService;
pub use types::{BucketTotal, CategoryTotal, Granularity, ParseGranularityError, TrendPoint};
