//! In-memory record store.
//!
//! Used by tests and local runs. Rows are kept exactly as given, so mixed
//! date representations survive until the ledger normalizes them.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use tracing::debug;

use super::{Dataset, NewRecord, OrderBy, RawRecord, RecordFilter, RecordStore, StoreError};

#[derive(Debug, Default)]
struct Tables {
    costs: Vec<RawRecord>,
    sales: Vec<RawRecord>,
    insert_failure: Option<String>,
    query_failure: Option<String>,
}

impl Tables {
    fn rows_mut(&mut self, dataset: Dataset) -> &mut Vec<RawRecord> {
        match dataset {
            Dataset::Cost => &mut self.costs,
            Dataset::Sale => &mut self.sales,
        }
    }

    fn rows(&self, dataset: Dataset) -> &[RawRecord] {
        match dataset {
            Dataset::Cost => &self.costs,
            Dataset::Sale => &self.sales,
        }
    }
}

/// A [`RecordStore`] backed by two vectors.
#[derive(Debug, Default)]
pub struct MemoryRecordStore {
    tables: Mutex<Tables>,
    insert_attempts: AtomicUsize,
}

impl MemoryRecordStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends raw rows without any validation.
    pub fn seed(&self, dataset: Dataset, rows: impl IntoIterator<Item = RawRecord>) {
        let mut tables = self.lock_unchecked();
        tables.rows_mut(dataset).extend(rows);
    }

    /// Makes every following insert fail with `message`.
    pub fn fail_inserts_with(&self, message: impl Into<String>) {
        self.lock_unchecked().insert_failure = Some(message.into());
    }

    /// Makes every following query fail with `message`.
    pub fn fail_queries_with(&self, message: impl Into<String>) {
        self.lock_unchecked().query_failure = Some(message.into());
    }

    /// Number of insert calls received, successful or not.
    #[must_use]
    pub fn insert_attempts(&self) -> usize {
        self.insert_attempts.load(Ordering::SeqCst)
    }

    /// Number of rows currently stored in `dataset`.
    #[must_use]
    pub fn len(&self, dataset: Dataset) -> usize {
        self.lock_unchecked().rows(dataset).len()
    }

    /// Returns true if neither table holds a row.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        let tables = self.lock_unchecked();
        tables.costs.is_empty() && tables.sales.is_empty()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Tables>, StoreError> {
        self.tables
            .lock()
            .map_err(|_| StoreError::Connection("memory store lock poisoned".to_string()))
    }

    fn lock_unchecked(&self) -> std::sync::MutexGuard<'_, Tables> {
        self.tables
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

#[async_trait]
impl RecordStore for MemoryRecordStore {
    async fn insert(&self, dataset: Dataset, record: &NewRecord) -> Result<(), StoreError> {
        self.insert_attempts.fetch_add(1, Ordering::SeqCst);
        let mut tables = self.lock()?;

        if let Some(message) = &tables.insert_failure {
            return Err(StoreError::Insert {
                dataset,
                message: message.clone(),
            });
        }

        tables.rows_mut(dataset).push(RawRecord::from(record));
        debug!(table = %dataset, date = %record.date, "Row appended to memory store");
        Ok(())
    }

    async fn query(
        &self,
        dataset: Dataset,
        filter: &RecordFilter,
    ) -> Result<Vec<RawRecord>, StoreError> {
        let tables = self.lock()?;

        if let Some(message) = &tables.query_failure {
            return Err(StoreError::Query {
                dataset,
                message: message.clone(),
            });
        }

        // Rows with unreadable dates are always returned so the ledger can
        // report them instead of silently dropping them.
        let mut rows: Vec<RawRecord> = tables
            .rows(dataset)
            .iter()
            .filter(|row| {
                row.date
                    .to_calendar_date()
                    .is_none_or(|date| filter.contains(date))
            })
            .cloned()
            .collect();

        match filter.order {
            Some(OrderBy::DateAsc) => rows.sort_by_key(|row| row.date.to_calendar_date()),
            Some(OrderBy::DateDesc) => {
                rows.sort_by_key(|row| std::cmp::Reverse(row.date.to_calendar_date()));
            }
            None => {}
        }

        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::RawDate;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn record(day: u32) -> NewRecord {
        NewRecord {
            date: date(2024, 1, day),
            name: "Flour".to_string(),
            quantity: 1,
            unit_price: dec!(100),
            total: dec!(100),
        }
    }

    #[tokio::test]
    async fn test_insert_then_query() {
        let store = MemoryRecordStore::new();
        store.insert(Dataset::Cost, &record(2)).await.unwrap();
        store.insert(Dataset::Cost, &record(1)).await.unwrap();

        let rows = store
            .query(
                Dataset::Cost,
                &RecordFilter {
                    order: Some(OrderBy::DateAsc),
                    ..RecordFilter::all()
                },
            )
            .await
            .unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].date, RawDate::Date(date(2024, 1, 1)));
        assert!(store.query(Dataset::Sale, &RecordFilter::all()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_query_filters_by_date_but_keeps_unreadable_rows() {
        let store = MemoryRecordStore::new();
        store.seed(
            Dataset::Sale,
            [
                RawRecord::from(&record(1)),
                RawRecord::from(&record(20)),
                RawRecord {
                    date: RawDate::Text("not a date".to_string()),
                    ..RawRecord::from(&record(1))
                },
            ],
        );

        let rows = store
            .query(
                Dataset::Sale,
                &RecordFilter::between(date(2024, 1, 1), date(2024, 1, 10)),
            )
            .await
            .unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].date, RawDate::Date(date(2024, 1, 1)));
    }

    #[tokio::test]
    async fn test_failures_are_reported() {
        let store = MemoryRecordStore::new();
        store.fail_inserts_with("connection reset");
        let err = store.insert(Dataset::Sale, &record(1)).await.unwrap_err();
        assert_eq!(
            err,
            StoreError::Insert {
                dataset: Dataset::Sale,
                message: "connection reset".to_string()
            }
        );
        assert_eq!(store.insert_attempts(), 1);
        assert!(store.is_empty());

        store.fail_queries_with("relation does not exist");
        assert!(matches!(
            store.query(Dataset::Cost, &RecordFilter::all()).await,
            Err(StoreError::Query { dataset: Dataset::Cost, .. })
        ));
    }
}
