//! Router configuration for the HTTP API.
//!
//! Sets up the routes and middleware (CORS, compression, tracing).

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

use super::cors::build_cors_layer;
use super::handlers;
use super::state::AppState;
use crate::config::ServerConfig;

/// Create the application router with all routes and middleware.
pub fn create_router(state: AppState, config: &ServerConfig) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/swe", post(handlers::compute_chart))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(build_cors_layer(config))
        .with_state(state)
}
