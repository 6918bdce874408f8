//! Database seeder for Laba development and testing.
//!
//! Appends a month of sample production costs and sales through the same
//! pipeline the API uses, so every seeded row passed validation.
//!
//! Usage: cargo run --bin seeder

use anyhow::Context;
use chrono::{Days, NaiveDate};
use laba_core::store::RecordFilter;
use laba_core::tracker::{self, NewCostEntry, NewSaleEntry};
use laba_db::{PgRecordStore, connect};
use laba_shared::AppConfig;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Materials bought every Monday: name, quantity, unit price.
const MATERIALS: [(&str, i64, Decimal); 4] = [
    ("Tepung Terigu", 25, dec!(12500)),
    ("Gula Pasir", 10, dec!(16000)),
    ("Telur", 60, dec!(2200)),
    ("Mentega", 5, dec!(38000)),
];

/// Products sold every day: name, base quantity, sell price.
const PRODUCTS: [(&str, i64, Decimal); 3] = [
    ("Roti Tawar", 12, dec!(15000)),
    ("Donat", 30, dec!(5000)),
    ("Bolu Pandan", 4, dec!(45000)),
];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().context("Failed to load configuration")?;

    println!("Connecting to database...");
    let store = PgRecordStore::new(connect(&config.database).await?);

    let existing = tracker::load_ledger(&store, &RecordFilter::all()).await?;
    if !existing.ledger.is_empty() {
        println!("  Entries already present, skipping...");
        return Ok(());
    }

    let start = NaiveDate::from_ymd_opt(2024, 1, 1).context("invalid seed start date")?;

    println!("Seeding production costs...");
    let mut costs = 0;
    for offset in (0..28).step_by(7) {
        let date = start + Days::new(offset);
        for (material, quantity, unit_price) in MATERIALS {
            tracker::record_cost(
                &store,
                NewCostEntry {
                    date: date.into(),
                    material: material.to_string(),
                    quantity,
                    unit_price,
                },
            )
            .await?;
            costs += 1;
        }
    }
    println!("  {costs} cost entries");

    println!("Seeding sales...");
    let mut sales = 0;
    for offset in 0..28_i64 {
        let date = start + Days::new(offset.unsigned_abs());
        for (product, base, unit_price) in PRODUCTS {
            tracker::record_sale(
                &store,
                NewSaleEntry {
                    date: date.into(),
                    product: product.to_string(),
                    // Weekends sell a little more.
                    quantity: base + (offset % 7) / 5 * base / 2,
                    unit_price,
                },
            )
            .await?;
            sales += 1;
        }
    }
    println!("  {sales} sale entries");

    let summary = tracker::summary(&store, None).await?;
    println!(
        "Seeding complete! cost {} / revenue {} / profit {}",
        summary.total_cost, summary.total_revenue, summary.net_profit
    );

    Ok(())
}
