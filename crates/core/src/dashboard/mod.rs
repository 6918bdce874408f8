//! Dashboard metrics.
//!
//! This module assembles everything the dashboard page shows:
//! - Key financial totals
//! - Revenue and cost/revenue trend series
//! - Top materials and products

pub mod service;
pub mod types;


pub use service::DashboardService;
pub use types::{DashboardMetrics, EntryCounts, TrendChart};
