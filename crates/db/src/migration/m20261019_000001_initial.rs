//! Initial database migration.
//!
//! Creates the production cost and sales tables. Rows are append-only; the
//! stored totals are a cache that readers recompute.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(MODAL_PRODUKSI_SQL).await?;
        db.execute_unprepared(DATA_PENJUALAN_SQL).await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared("DROP TABLE IF EXISTS data_penjualan CASCADE;")
            .await?;
        db.execute_unprepared("DROP TABLE IF EXISTS modal_produksi CASCADE;")
            .await?;
        Ok(())
    }
}

const MODAL_PRODUKSI_SQL: &str = r"
-- Production cost entries
CREATE TABLE modal_produksi (
    id BIGSERIAL PRIMARY KEY,
    tanggal DATE NOT NULL,
    bahan TEXT NOT NULL,
    qty BIGINT NOT NULL,
    harga_satuan NUMERIC NOT NULL,
    total_belanja NUMERIC,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    CONSTRAINT chk_modal_bahan_not_blank CHECK (length(trim(bahan)) > 0),
    CONSTRAINT chk_modal_qty_non_negative CHECK (qty >= 0),
    CONSTRAINT chk_modal_harga_non_negative CHECK (harga_satuan >= 0)
);

-- Date range scans for summaries and reports
CREATE INDEX idx_modal_produksi_tanggal ON modal_produksi(tanggal);
";

const DATA_PENJUALAN_SQL: &str = r"
-- Sales entries
CREATE TABLE data_penjualan (
    id BIGSERIAL PRIMARY KEY,
    tanggal DATE NOT NULL,
    produk TEXT NOT NULL,
    jumlah BIGINT NOT NULL,
    harga_jual NUMERIC NOT NULL,
    pendapatan NUMERIC,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    CONSTRAINT chk_penjualan_produk_not_blank CHECK (length(trim(produk)) > 0),
    CONSTRAINT chk_penjualan_jumlah_non_negative CHECK (jumlah >= 0),
    CONSTRAINT chk_penjualan_harga_non_negative CHECK (harga_jual >= 0)
);

-- Date range scans for summaries and reports
CREATE INDEX idx_data_penjualan_tanggal ON data_penjualan(tanggal);
";
