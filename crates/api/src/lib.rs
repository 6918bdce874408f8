//! HTTP API layer with Axum routes.
//!
//! This crate provides:
//! - REST API routes for recording and reading entries
//! - Summary, trend, dashboard and report endpoints
//! - Error responses

pub mod routes;

#[cfg(test)]
pub(crate) mod test_support;

use axum::Router;
use laba_core::store::RecordStore;
use laba_shared::config::ReportConfig;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Record store every request reads from and appends to.
    pub store: Arc<dyn RecordStore>,
    /// Report title and display currency.
    pub report: Arc<ReportConfig>,
}

impl AppState {
    /// Creates the state from a store and report settings.
    #[must_use]
    pub fn new(store: Arc<dyn RecordStore>, report: ReportConfig) -> Self {
        Self {
            store,
            report: Arc::new(report),
        }
    }
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
