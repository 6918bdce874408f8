//! `SeaORM` Entity for the production cost table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "modal_produksi")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub tanggal: Date,
    pub bahan: String,
    pub qty: i64,
    pub harga_satuan: Decimal,
    pub total_belanja: Option<Decimal>,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
