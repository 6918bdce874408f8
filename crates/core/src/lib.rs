//! Core business logic for Laba.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! All domain types, validation rules, and calculations live here.
//!
//! # Modules
//!
//! - `ledger` - Cost and sale entries, ingest and validation
//! - `aggregation` - Time buckets, categories and trend merge
//! - `summary` - Total cost, total revenue, net profit
//! - `reports` - Report building and plain-text rendering
//! - `dashboard` - Dashboard metrics and chart series
//! - `store` - Record store contract and in-memory adapter
//! - `tracker` - Per-request pipeline over a record store

pub mod aggregation;
pub mod dashboard;
pub mod ledger;
pub mod reports;
pub mod store;
pub mod summary;
pub mod tracker;
