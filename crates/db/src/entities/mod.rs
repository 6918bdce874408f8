//! `SeaORM` entity definitions.

pub mod data_penjualan;
pub mod modal_produksi;
