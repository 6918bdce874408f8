//! PostgreSQL record store.

use async_trait::async_trait;
use laba_core::store::{
    Dataset, NewRecord, OrderBy, RawDate, RawRecord, RecordFilter, RecordStore, StoreError,
};
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder, Select, Set,
};
use tracing::debug;

use crate::entities::{data_penjualan, modal_produksi};

/// A [`RecordStore`] over the `modal_produksi` and `data_penjualan` tables.
///
/// Each call runs one statement. Nothing is retried here; a failure is
/// returned with the driver's message.
#[derive(Debug)]
pub struct PgRecordStore {
    db: DatabaseConnection,
}

impl PgRecordStore {
    /// Creates a new record store.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Returns the underlying connection.
    #[must_use]
    pub const fn connection(&self) -> &DatabaseConnection {
        &self.db
    }
}

fn classify(err: &DbErr, otherwise: impl FnOnce(String) -> StoreError) -> StoreError {
    match err {
        DbErr::ConnectionAcquire(_) | DbErr::Conn(_) => StoreError::Connection(err.to_string()),
        _ => otherwise(err.to_string()),
    }
}

fn insert_error(dataset: Dataset, err: &DbErr) -> StoreError {
    classify(err, |message| StoreError::Insert { dataset, message })
}

fn query_error(dataset: Dataset, err: &DbErr) -> StoreError {
    classify(err, |message| StoreError::Query { dataset, message })
}

/// Applies the date bounds and ordering of `filter`, ties broken by id.
fn scoped<E, C>(mut select: Select<E>, date: C, id: C, filter: &RecordFilter) -> Select<E>
where
    E: EntityTrait,
    C: ColumnTrait,
{
    if let Some(from) = filter.from {
        select = select.filter(date.gte(from));
    }
    if let Some(to) = filter.to {
        select = select.filter(date.lte(to));
    }
    match filter.order {
        Some(OrderBy::DateAsc) => select.order_by_asc(date).order_by_asc(id),
        Some(OrderBy::DateDesc) => select.order_by_desc(date).order_by_desc(id),
        None => select.order_by_asc(id),
    }
}

impl From<modal_produksi::Model> for RawRecord {
    fn from(row: modal_produksi::Model) -> Self {
        Self {
            date: RawDate::Date(row.tanggal),
            name: row.bahan,
            quantity: row.qty,
            unit_price: row.harga_satuan,
            total: row.total_belanja,
        }
    }
}

impl From<data_penjualan::Model> for RawRecord {
    fn from(row: data_penjualan::Model) -> Self {
        Self {
            date: RawDate::Date(row.tanggal),
            name: row.produk,
            quantity: row.jumlah,
            unit_price: row.harga_jual,
            total: row.pendapatan,
        }
    }
}

#[async_trait]
impl RecordStore for PgRecordStore {
    async fn insert(&self, dataset: Dataset, record: &NewRecord) -> Result<(), StoreError> {
        let result = match dataset {
            Dataset::Cost => {
                let row = modal_produksi::ActiveModel {
                    tanggal: Set(record.date),
                    bahan: Set(record.name.clone()),
                    qty: Set(record.quantity),
                    harga_satuan: Set(record.unit_price),
                    total_belanja: Set(Some(record.total)),
                    ..Default::default()
                };
                modal_produksi::Entity::insert(row)
                    .exec_without_returning(&self.db)
                    .await
            }
            Dataset::Sale => {
                let row = data_penjualan::ActiveModel {
                    tanggal: Set(record.date),
                    produk: Set(record.name.clone()),
                    jumlah: Set(record.quantity),
                    harga_jual: Set(record.unit_price),
                    pendapatan: Set(Some(record.total)),
                    ..Default::default()
                };
                data_penjualan::Entity::insert(row)
                    .exec_without_returning(&self.db)
                    .await
            }
        };

        let rows = result.map_err(|e| insert_error(dataset, &e))?;
        debug!(table = %dataset, rows, "Row inserted");
        Ok(())
    }

    async fn query(
        &self,
        dataset: Dataset,
        filter: &RecordFilter,
    ) -> Result<Vec<RawRecord>, StoreError> {
        let rows: Vec<RawRecord> = match dataset {
            Dataset::Cost => scoped(
                modal_produksi::Entity::find(),
                modal_produksi::Column::Tanggal,
                modal_produksi::Column::Id,
                filter,
            )
            .all(&self.db)
            .await
            .map_err(|e| query_error(dataset, &e))?
            .into_iter()
            .map(RawRecord::from)
            .collect(),
            Dataset::Sale => scoped(
                data_penjualan::Entity::find(),
                data_penjualan::Column::Tanggal,
                data_penjualan::Column::Id,
                filter,
            )
            .all(&self.db)
            .await
            .map_err(|e| query_error(dataset, &e))?
            .into_iter()
            .map(RawRecord::from)
            .collect(),
        };

        debug!(table = %dataset, rows = rows.len(), "Rows fetched");
        Ok(rows)
    }
}
