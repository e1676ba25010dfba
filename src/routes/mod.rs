//! Route definitions for the pager API.

pub mod health;
pub mod pagination;

use axum::{http::Uri, routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::errors::AppError;
use crate::AppState;

/// Build the application router.
pub fn router(state: AppState) -> Router {
    let api_routes = Router::new().route("/pagination", get(pagination::preview));

    Router::new()
        .route("/health/live", get(health::live))
        .nest("/api/v1", api_routes)
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}
