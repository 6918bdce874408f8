//! Aggregation data types.

use chrono::{Datelike, Days, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Width of a time bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    /// One bucket per calendar day.
    #[default]
    #[serde(alias = "daily")]
    Day,
    /// ISO weeks, starting on Monday.
    #[serde(rename = "week", alias = "weekly", alias = "isoweek")]
    IsoWeek,
    /// Calendar months, starting on the 1st.
    #[serde(rename = "month", alias = "monthly")]
    CalendarMonth,
    /// Calendar years, starting on January 1.
    #[serde(rename = "year", alias = "yearly")]
    CalendarYear,
}

impl Granularity {
    /// Returns the first day of the bucket containing `date`.
    #[must_use]
    pub fn bucket_start(self, date: NaiveDate) -> NaiveDate {
        let back = match self {
            Self::Day => 0,
            Self::IsoWeek => date.weekday().num_days_from_monday(),
            Self::CalendarMonth => date.day0(),
            Self::CalendarYear => date.ordinal0(),
        };
        date - Days::new(u64::from(back))
    }

    /// Returns a chart label for the bucket starting at `bucket_start`.
    #[must_use]
    pub fn label(self, bucket_start: NaiveDate) -> String {
        match self {
            Self::Day => bucket_start.format("%Y-%m-%d").to_string(),
            Self::IsoWeek => {
                let week = bucket_start.iso_week();
                format!("{}-W{:02}", week.year(), week.week())
            }
            Self::CalendarMonth => bucket_start.format("%Y-%m").to_string(),
            Self::CalendarYear => bucket_start.format("%Y").to_string(),
        }
    }

    /// Returns the canonical name, as accepted by `FromStr`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::IsoWeek => "week",
            Self::CalendarMonth => "month",
            Self::CalendarYear => "year",
        }
    }
}

impl std::fmt::Display for Granularity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a granularity name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown granularity: {0} (expected day, week, month or year)")]
pub struct ParseGranularityError(pub String);

impl std::str::FromStr for Granularity {
    type Err = ParseGranularityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "day" | "daily" => Ok(Self::Day),
            "week" | "weekly" | "isoweek" => Ok(Self::IsoWeek),
            "month" | "monthly" => Ok(Self::CalendarMonth),
            "year" | "yearly" => Ok(Self::CalendarYear),
            _ => Err(ParseGranularityError(s.to_string())),
        }
    }
}

/// Sum of entry totals inside one time bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BucketTotal {
    /// First day of the bucket.
    pub bucket_start: NaiveDate,
    /// Sum of entry totals.
    pub total: Decimal,
}

/// Sum of entry totals for one material or product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTotal {
    /// Material or product name.
    pub category: String,
    /// Sum of entry totals.
    pub total: Decimal,
}

/// One row of the merged cost/sale trend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendPoint {
    /// First day of the bucket.
    pub bucket_start: NaiveDate,
    /// Cost total, zero when the bucket had no cost entries.
    pub cost_total: Decimal,
    /// Sale total, zero when the bucket had no sale entries.
    pub sale_total: Decimal,
}

impl TrendPoint {
    /// Sales minus costs for this bucket.
    #[must_use]
    pub fn net(&self) -> Decimal {
        self.sale_total - self.cost_total
    }
}
