//! Query parameters shared by the read endpoints.

use axum::response::Response;
use chrono::NaiveDate;
use laba_core::aggregation::{Granularity, ParseGranularityError};
use laba_core::tracker::DateRange;
use serde::Deserialize;

use super::error::bad_request;

/// `?from=YYYY-MM-DD&to=YYYY-MM-DD`, both or neither.
#[derive(Debug, Default, Deserialize)]
pub struct RangeQuery {
    /// First day, inclusive.
    pub from: Option<NaiveDate>,
    /// Last day, inclusive.
    pub to: Option<NaiveDate>,
}

impl RangeQuery {
    /// Validates the bounds.
    pub fn range(&self) -> Result<Option<DateRange>, Response> {
        match (self.from, self.to) {
            (None, None) => Ok(None),
            (Some(from), Some(to)) => DateRange::new(from, to)
                .map(Some)
                .map_err(|e| bad_request(e.error_code(), e.to_string())),
            _ => Err(bad_request(
                "INCOMPLETE_RANGE",
                "Both from and to are required for a date range",
            )),
        }
    }
}

/// `?granularity=...&from=...&to=...`
#[derive(Debug, Default, Deserialize)]
pub struct SeriesQuery {
    /// Bucket width, `day` when absent.
    pub granularity: Option<String>,
    /// First day, inclusive.
    pub from: Option<NaiveDate>,
    /// Last day, inclusive.
    pub to: Option<NaiveDate>,
}

impl SeriesQuery {
    /// Parses the granularity.
    pub fn granularity(&self) -> Result<Granularity, Response> {
        self.granularity.as_deref().map_or(Ok(Granularity::default()), |raw| {
            raw.parse()
                .map_err(|e: ParseGranularityError| bad_request("INVALID_GRANULARITY", e.to_string()))
        })
    }

    /// Validates the bounds.
    pub fn range(&self) -> Result<Option<DateRange>, Response> {
        RangeQuery {
            from: self.from,
            to: self.to,
        }
        .range()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use rstest::rstest;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[rstest]
    #[case(None, Granularity::Day)]
    #[case(Some("week"), Granularity::IsoWeek)]
    #[case(Some("Monthly"), Granularity::CalendarMonth)]
    #[case(Some("year"), Granularity::CalendarYear)]
    fn test_granularity_parsing(#[case] raw: Option<&str>, #[case] expected: Granularity) {
        let query = SeriesQuery {
            granularity: raw.map(String::from),
            ..SeriesQuery::default()
        };
        assert_eq!(query.granularity().unwrap(), expected);
    }

    #[test]
    fn test_unknown_granularity_is_bad_request() {
        let query = SeriesQuery {
            granularity: Some("fortnight".to_string()),
            ..SeriesQuery::default()
        };
        assert_eq!(query.granularity().unwrap_err().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_range_bounds() {
        assert!(RangeQuery::default().range().unwrap().is_none());

        let range = RangeQuery {
            from: Some(date(2024, 1, 1)),
            to: Some(date(2024, 1, 31)),
        }
        .range()
        .unwrap()
        .unwrap();
        assert_eq!(range.end(), date(2024, 1, 31));

        let half = RangeQuery {
            from: Some(date(2024, 1, 1)),
            to: None,
        };
        assert_eq!(half.range().unwrap_err().status(), StatusCode::BAD_REQUEST);

        let reversed = RangeQuery {
            from: Some(date(2024, 2, 1)),
            to: Some(date(2024, 1, 1)),
        };
        assert_eq!(reversed.range().unwrap_err().status(), StatusCode::BAD_REQUEST);
    }
}
