//! Report generation.
//!
//! This module turns a ledger and its summary into a printable report:
//! - Summary lines with formatted currency values
//! - Cost and sales detail tables at full precision
//! - A plain-text rendering for download

pub mod error;
pub mod service;
pub mod types;


pub use error::ReportError;
pub use service::ReportService;
pub use types::{CostRow, Report, ReportPeriod, SaleRow};
