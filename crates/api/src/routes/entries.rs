//! Entry routes: append and list cost (`modal`) and sale (`penjualan`) entries.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use laba_core::ledger::ValidationError;
use laba_core::tracker::{self, NewCostEntry, NewSaleEntry};
use serde::Serialize;

use super::error::tracker_error;
use super::params::RangeQuery;
use crate::AppState;

/// Creates the entry routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/modal", get(list_costs).post(create_cost))
        .route("/penjualan", get(list_sales).post(create_sale))
}

/// Normalized entries plus the stored rows that could not be read.
#[derive(Debug, Serialize)]
pub struct EntryListResponse<E> {
    /// Valid entries, ascending by date.
    pub entries: Vec<E>,
    /// Stored rows skipped during load.
    pub rejected: Vec<ValidationError>,
}

/// POST /modal
async fn create_cost(State(state): State<AppState>, Json(input): Json<NewCostEntry>) -> Response {
    match tracker::record_cost(state.store.as_ref(), input).await {
        Ok(entry) => (StatusCode::CREATED, Json(entry)).into_response(),
        Err(e) => tracker_error(e),
    }
}

/// POST /penjualan
async fn create_sale(State(state): State<AppState>, Json(input): Json<NewSaleEntry>) -> Response {
    match tracker::record_sale(state.store.as_ref(), input).await {
        Ok(entry) => (StatusCode::CREATED, Json(entry)).into_response(),
        Err(e) => tracker_error(e),
    }
}

/// GET /modal?from&to
async fn list_costs(State(state): State<AppState>, Query(query): Query<RangeQuery>) -> Response {
    let range = match query.range() {
        Ok(range) => range,
        Err(response) => return response,
    };
    let filter = range.map_or_else(Default::default, |r| r.filter());

    match tracker::load_ledger(state.store.as_ref(), &filter).await {
        Ok(outcome) => {
            let rejected = outcome
                .rejected
                .into_iter()
                .filter(|e| e.dataset == laba_core::store::Dataset::Cost)
                .collect();
            Json(EntryListResponse {
                entries: outcome.ledger.costs().to_vec(),
                rejected,
            })
            .into_response()
        }
        Err(e) => tracker_error(e),
    }
}

/// GET /penjualan?from&to
async fn list_sales(State(state): State<AppState>, Query(query): Query<RangeQuery>) -> Response {
    let range = match query.range() {
        Ok(range) => range,
        Err(response) => return response,
    };
    let filter = range.map_or_else(Default::default, |r| r.filter());

    match tracker::load_ledger(state.store.as_ref(), &filter).await {
        Ok(outcome) => {
            let rejected = outcome
                .rejected
                .into_iter()
                .filter(|e| e.dataset == laba_core::store::Dataset::Sale)
                .collect();
            Json(EntryListResponse {
                entries: outcome.ledger.sales().to_vec(),
                rejected,
            })
            .into_response()
        }
        Err(e) => tracker_error(e),
    }
}
