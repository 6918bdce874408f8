//! Read-only aggregates: summary, trend, category totals and dashboard.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
    routing::get,
};
use chrono::NaiveDate;
use laba_core::aggregation::{CategoryTotal, Granularity, TrendPoint};
use laba_core::store::Dataset;
use laba_core::summary::FinancialSummary;
use laba_core::tracker;
use laba_shared::types::Money;
use serde::{Deserialize, Serialize};

use super::error::{bad_request, tracker_error};
use super::params::{RangeQuery, SeriesQuery};
use crate::AppState;

/// Creates the aggregate routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/summary", get(get_summary))
        .route("/trend", get(get_trend))
        .route("/categories/{kind}", get(get_categories))
        .route("/dashboard", get(get_dashboard))
}

// ============================================================================
// Query Parameters
// ============================================================================

/// Query parameters for the summary.
#[derive(Debug, Deserialize)]
pub struct SummaryQuery {
    /// Single day; all time when absent.
    pub date: Option<NaiveDate>,
}

// ============================================================================
// Response Types
// ============================================================================

/// Summary with raw and display values.
#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    /// Day summarized, or null for all time.
    pub date: Option<NaiveDate>,
    /// Raw totals.
    #[serde(flatten)]
    pub summary: FinancialSummary,
    /// The same totals formatted for display.
    pub formatted: FormattedSummary,
}

/// Display strings, e.g. `Rp 50,000`.
#[derive(Debug, Serialize)]
pub struct FormattedSummary {
    /// Total cost.
    pub total_cost: String,
    /// Total revenue.
    pub total_revenue: String,
    /// Net profit.
    pub net_profit: String,
}

/// Combined trend.
#[derive(Debug, Serialize)]
pub struct TrendResponse {
    /// Bucket width.
    pub granularity: Granularity,
    /// One point per bucket with any entry.
    pub points: Vec<TrendPoint>,
}

/// Category totals.
#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    /// Table grouped.
    pub table: Dataset,
    /// Totals, largest first.
    pub categories: Vec<CategoryTotal>,
}

fn dataset_from_path(kind: &str) -> Option<Dataset> {
    match kind {
        "modal" | "modal_produksi" | "cost" => Some(Dataset::Cost),
        "penjualan" | "data_penjualan" | "sale" => Some(Dataset::Sale),
        _ => None,
    }
}

// ============================================================================
// Route Handlers
// ============================================================================

/// GET /summary?date
async fn get_summary(State(state): State<AppState>, Query(query): Query<SummaryQuery>) -> Response {
    let summary = match tracker::summary(state.store.as_ref(), query.date).await {
        Ok(summary) => summary,
        Err(e) => return tracker_error(e),
    };

    let currency = state.report.currency;
    Json(SummaryResponse {
        date: query.date,
        summary,
        formatted: FormattedSummary {
            total_cost: Money::new(summary.total_cost, currency).to_string(),
            total_revenue: Money::new(summary.total_revenue, currency).to_string(),
            net_profit: Money::new(summary.net_profit, currency).to_string(),
        },
    })
    .into_response()
}

/// GET /trend?granularity&from&to
async fn get_trend(State(state): State<AppState>, Query(query): Query<SeriesQuery>) -> Response {
    let (granularity, range) = match (query.granularity(), query.range()) {
        (Ok(granularity), Ok(range)) => (granularity, range),
        (Err(response), _) | (_, Err(response)) => return response,
    };

    match tracker::trend(state.store.as_ref(), granularity, range).await {
        Ok(points) => Json(TrendResponse {
            granularity,
            points,
        })
        .into_response(),
        Err(e) => tracker_error(e),
    }
}

/// GET /categories/{modal|penjualan}?from&to
async fn get_categories(
    State(state): State<AppState>,
    Path(kind): Path<String>,
    Query(query): Query<RangeQuery>,
) -> Response {
    let Some(table) = dataset_from_path(&kind) else {
        return bad_request(
            "UNKNOWN_TABLE",
            format!("Unknown table: {kind} (expected modal or penjualan)"),
        );
    };
    let range = match query.range() {
        Ok(range) => range,
        Err(response) => return response,
    };

    match tracker::categories(state.store.as_ref(), table, range).await {
        Ok(categories) => Json(CategoriesResponse { table, categories }).into_response(),
        Err(e) => tracker_error(e),
    }
}

/// GET /dashboard?granularity&from&to
async fn get_dashboard(State(state): State<AppState>, Query(query): Query<SeriesQuery>) -> Response {
    let (granularity, range) = match (query.granularity(), query.range()) {
        (Ok(granularity), Ok(range)) => (granularity, range),
        (Err(response), _) | (_, Err(response)) => return response,
    };

    match tracker::dashboard(state.store.as_ref(), granularity, range).await {
        Ok(metrics) => Json(metrics).into_response(),
        Err(e) => tracker_error(e),
    }
}
