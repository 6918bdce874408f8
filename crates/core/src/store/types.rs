//! Record store data types.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The two logical tables the tracker reads and appends to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dataset {
    /// Production-cost ("modal") entries.
    #[serde(rename = "modal_produksi")]
    Cost,
    /// Sales ("penjualan") entries.
    #[serde(rename = "data_penjualan")]
    Sale,
}

impl Dataset {
    /// Returns the table name in the record store.
    #[must_use]
    pub const fn table_name(self) -> &'static str {
        match self {
            Self::Cost => "modal_produksi",
            Self::Sale => "data_penjualan",
        }
    }

    /// Returns the name of the categorical field for this dataset.
    #[must_use]
    pub const fn name_field(self) -> &'static str {
        match self {
            Self::Cost => "material",
            Self::Sale => "product",
        }
    }
}

impl std::fmt::Display for Dataset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.table_name())
    }
}

/// A date exactly as the record store handed it over.
///
/// Rows written by different clients disagree on the representation, so
/// every variant is normalized to one calendar date before aggregation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawDate {
    /// A plain calendar date.
    Date(NaiveDate),
    /// A timestamp with its own UTC offset.
    Timestamp(DateTime<FixedOffset>),
    /// Seconds since the Unix epoch.
    UnixSeconds(i64),
    /// Free text that still has to be parsed.
    Text(String),
}

impl RawDate {
    /// Normalizes this value to a calendar date.
    ///
    /// Timestamps keep the calendar date of their own offset; epoch seconds
    /// are read as UTC. Returns `None` when the value is not a date.
    #[must_use]
    pub fn to_calendar_date(&self) -> Option<NaiveDate> {
        match self {
            Self::Date(date) => Some(*date),
            Self::Timestamp(ts) => Some(ts.date_naive()),
            Self::UnixSeconds(secs) => {
                DateTime::<Utc>::from_timestamp(*secs, 0).map(|dt| dt.date_naive())
            }
            Self::Text(text) => parse_date_text(text),
        }
    }
}

impl std::fmt::Display for RawDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Date(date) => write!(f, "{date}"),
            Self::Timestamp(ts) => write!(f, "{}", ts.to_rfc3339()),
            Self::UnixSeconds(secs) => write!(f, "{secs}"),
            Self::Text(text) => f.write_str(text),
        }
    }
}

impl From<NaiveDate> for RawDate {
    fn from(date: NaiveDate) -> Self {
        Self::Date(date)
    }
}

fn parse_date_text(text: &str) -> Option<NaiveDate> {
    let text = text.trim();

    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(ts) = DateTime::parse_from_rfc3339(text) {
        return Some(ts.date_naive());
    }
    if let Ok(ts) = DateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S%.f%#z") {
        return Some(ts.date_naive());
    }
    ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
        .map(|dt| dt.date())
}

/// One row as returned by [`RecordStore::query`](super::RecordStore::query).
///
/// Nothing here is trusted yet: the ledger validates every field and
/// recomputes the total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRecord {
    /// Entry date in whatever representation the store used.
    pub date: RawDate,
    /// Material (cost) or product (sale) name.
    pub name: String,
    /// Quantity as stored; may be negative in a corrupted row.
    pub quantity: i64,
    /// Unit price (cost) or sell price (sale).
    pub unit_price: Decimal,
    /// Stored total, treated as a cache of `quantity * unit_price`.
    pub total: Option<Decimal>,
}

/// A validated row ready to be appended to the record store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewRecord {
    /// Entry date.
    pub date: NaiveDate,
    /// Material (cost) or product (sale) name.
    pub name: String,
    /// Quantity.
    pub quantity: i64,
    /// Unit price.
    pub unit_price: Decimal,
    /// Derived total.
    pub total: Decimal,
}

impl From<&NewRecord> for RawRecord {
    fn from(record: &NewRecord) -> Self {
        Self {
            date: RawDate::Date(record.date),
            name: record.name.clone(),
            quantity: record.quantity,
            unit_price: record.unit_price,
            total: Some(record.total),
        }
    }
}

/// Sort order for queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderBy {
    /// Oldest entries first.
    DateAsc,
    /// Newest entries first.
    DateDesc,
}

/// Optional filters for [`RecordStore::query`](super::RecordStore::query).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordFilter {
    /// Earliest date to include.
    pub from: Option<NaiveDate>,
    /// Latest date to include.
    pub to: Option<NaiveDate>,
    /// Requested ordering; store order when absent.
    pub order: Option<OrderBy>,
}

impl RecordFilter {
    /// A filter that matches every row.
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    /// A filter for the inclusive date range `from..=to`.
    #[must_use]
    pub fn between(from: NaiveDate, to: NaiveDate) -> Self {
        Self {
            from: Some(from),
            to: Some(to),
            order: Some(OrderBy::DateAsc),
        }
    }

    /// Returns true if `date` passes the date bounds.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.from.is_none_or(|from| date >= from) && self.to.is_none_or(|to| date <= to)
    }
}
