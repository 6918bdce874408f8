//! `SeaORM` Entity for the sales table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "data_penjualan")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub tanggal: Date,
    pub produk: String,
    pub jumlah: i64,
    pub harga_jual: Decimal,
    pub pendapatan: Option<Decimal>,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
