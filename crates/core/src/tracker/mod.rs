//! Request pipeline.
//!
//! Every function takes the record store it should use. Submissions are
//! validated, then appended with exactly one insert. Reads fetch both
//! tables, load a fresh ledger, and aggregate it.

pub mod error;
pub mod service;
pub mod types;


pub use error::TrackerError;
pub use service::{
    categories, dashboard, load_ledger, record_cost, record_sale, report, summary, trend,
};
pub use types::{DateRange, NewCostEntry, NewSaleEntry};
