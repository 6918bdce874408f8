//! Record store contract.
//!
//! The tracker never owns a connection. Every pipeline call receives the
//! store it should talk to, so tests and the server can hand in different
//! adapters without any process-wide client.

pub mod error;
pub mod memory;
pub mod types;

use async_trait::async_trait;

pub use error::StoreError;
pub use memory::MemoryRecordStore;
pub use types::{Dataset, NewRecord, OrderBy, RawDate, RawRecord, RecordFilter};

/// Append-only access to the two tracker tables.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Appends one row to `dataset`.
    ///
    /// Called exactly once per submitted entry; callers never retry.
    async fn insert(&self, dataset: Dataset, record: &NewRecord) -> Result<(), StoreError>;

    /// Fetches the rows of `dataset` that pass `filter`.
    async fn query(
        &self,
        dataset: Dataset,
        filter: &RecordFilter,
    ) -> Result<Vec<RawRecord>, StoreError>;
}
