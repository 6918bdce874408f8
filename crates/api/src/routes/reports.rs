//! Report routes.
//!
//! The structured report is served as JSON; `report.txt` serves the same
//! report rendered as plain text, as a download.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::header,
    response::{IntoResponse, Response},
    routing::get,
};
use chrono::NaiveDate;
use laba_core::reports::{Report, ReportPeriod};
use laba_core::tracker;
use serde::Deserialize;

use super::error::{bad_request, tracker_error};
use crate::AppState;

/// Creates the report routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/report", get(get_report))
        .route("/report.txt", get(download_report))
}

/// `?date=...` for one day, `?from=...&to=...` for a range, nothing for all time.
#[derive(Debug, Default, Deserialize)]
pub struct ReportQuery {
    /// Single day.
    pub date: Option<NaiveDate>,
    /// First day of a range.
    pub from: Option<NaiveDate>,
    /// Last day of a range.
    pub to: Option<NaiveDate>,
}

impl ReportQuery {
    fn period(&self) -> Result<ReportPeriod, Response> {
        match (self.date, self.from, self.to) {
            (None, None, None) => Ok(ReportPeriod::All),
            (Some(date), None, None) => Ok(ReportPeriod::Day { date }),
            (None, Some(start), Some(end)) => Ok(ReportPeriod::Range { start, end }),
            (Some(_), _, _) => Err(bad_request(
                "CONFLICTING_PERIOD",
                "Use either date or from/to, not both",
            )),
            _ => Err(bad_request(
                "INCOMPLETE_RANGE",
                "Both from and to are required for a date range",
            )),
        }
    }
}

async fn build(state: &AppState, query: &ReportQuery) -> Result<Report, Response> {
    let period = query.period()?;
    tracker::report(state.store.as_ref(), period, &state.report)
        .await
        .map_err(tracker_error)
}

/// GET /report
async fn get_report(State(state): State<AppState>, Query(query): Query<ReportQuery>) -> Response {
    match build(&state, &query).await {
        Ok(report) => Json(report).into_response(),
        Err(response) => response,
    }
}

/// GET /report.txt
async fn download_report(
    State(state): State<AppState>,
    Query(query): Query<ReportQuery>,
) -> Response {
    match build(&state, &query).await {
        Ok(report) => (
            [
                (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
                (
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{}\"", report.file_name()),
                ),
            ],
            report.render_text(),
        )
            .into_response(),
        Err(response) => response,
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::http::StatusCode;
    use laba_core::store::MemoryRecordStore;
    use laba_core::tracker::{self, NewCostEntry, NewSaleEntry};
    use rust_decimal_macros::dec;

    use crate::test_support::{app, get, send, send_raw};

    async fn scenario_store() -> Arc<MemoryRecordStore> {
        let store = Arc::new(MemoryRecordStore::new());
        let day = chrono::NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        tracker::record_cost(
            store.as_ref(),
            NewCostEntry {
                date: day.into(),
                material: "Flour".to_string(),
                quantity: 10,
                unit_price: dec!(5000),
            },
        )
        .await
        .unwrap();
        tracker::record_sale(
            store.as_ref(),
            NewSaleEntry {
                date: day.into(),
                product: "Bread".to_string(),
                quantity: 20,
                unit_price: dec!(3000),
            },
        )
        .await
        .unwrap();
        store
    }

    #[tokio::test]
    async fn test_report_for_day() {
        let store = scenario_store().await;
        let (status, json) = send(app(&store), get("/api/v1/report?date=2024-01-01")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["period_label"], "2024-01-01");
        assert_eq!(json["summary_lines"][0], "Total Cost: Rp 50,000");
        assert_eq!(json["summary_lines"][2], "Net Profit: Rp 10,000");
        assert_eq!(json["cost_table"][0]["material"], "Flour");
        assert_eq!(json["sale_table"][0]["total"], "60000");
    }

    #[tokio::test]
    async fn test_report_text_download() {
        let store = scenario_store().await;
        let (status, body) = send_raw(app(&store), get("/api/v1/report.txt")).await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.starts_with("Sales and Production Cost Report\nPeriod: All time (2024-01-01)\n"));
        assert!(body.contains("Cost Details:\n2024-01-01 | Flour | 10 x Rp 5,000 | Rp 50,000\n"));
    }

    #[tokio::test]
    async fn test_reversed_range_is_bad_request() {
        let store = Arc::new(MemoryRecordStore::new());
        let (status, json) = send(
            app(&store),
            get("/api/v1/report?from=2024-02-01&to=2024-01-01"),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["code"], "INVALID_DATE_RANGE");
    }

    #[tokio::test]
    async fn test_conflicting_period() {
        let store = Arc::new(MemoryRecordStore::new());
        let (status, json) = send(
            app(&store),
            get("/api/v1/report?date=2024-01-01&from=2024-01-01&to=2024-01-02"),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "CONFLICTING_PERIOD");
    }
}
