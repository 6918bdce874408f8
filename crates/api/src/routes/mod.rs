//! API route definitions.

use axum::Router;

use crate::AppState;

pub mod analytics;
pub mod entries;
pub mod error;
pub mod health;
pub mod params;
pub mod reports;

/// Creates the API router with all routes.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(entries::routes())
        .merge(analytics::routes())
        .merge(reports::routes())
}
