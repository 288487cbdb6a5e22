use std::sync::Arc;

use axum::{http::StatusCode, middleware::from_fn, routing::get, Json, Router};
use serde_json::{json, Value};

use crate::{
    config::Config, middleware::request_id::request_id_middleware,
    services::providers::EmployeeDataProvider,
};

pub mod recommendations;

/// Shared application state
///
/// Holds only the upstream provider and tuning knobs. The recommendation
/// pipeline itself is stateless per request, so nothing here is mutable.
pub struct AppState {
    pub provider: Arc<dyn EmployeeDataProvider>,
    pub neighbor_count: usize,
    pub recommendation_limit: usize,
}

impl AppState {
    pub fn new(provider: Arc<dyn EmployeeDataProvider>, config: &Config) -> Self {
        Self {
            provider,
            neighbor_count: config.neighbor_count,
            recommendation_limit: config.recommendation_limit,
        }
    }
}

/// Creates the application router with all routes
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .nest("/api", api_routes(state))
        .layer(from_fn(request_id_middleware))
}

/// API routes under /api
fn api_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route(
            "/recommend-courses/:user_id",
            get(recommendations::recommend),
        )
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}
