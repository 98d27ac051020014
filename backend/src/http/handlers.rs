//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! service layer.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};

use super::dto::{ChartRequest, ChartResult, HealthResponse};
use super::error::AppError;
use super::state::AppState;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

/// GET /health
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    Ok(Json(HealthResponse {
        ok: true,
        engine: state.engine.name().to_string(),
        version: state
            .engine
            .version()
            .unwrap_or_else(|| "unknown".to_string()),
    }))
}

/// POST /swe
///
/// Compute ascendant, MC, house cusps and the houses of Sun and Moon.
pub async fn compute_chart(
    State(state): State<AppState>,
    body: Result<Json<ChartRequest>, JsonRejection>,
) -> HandlerResult<ChartResult> {
    let Json(request) = body?;

    // Engine work is CPU-bound; keep it off the async workers
    let engine = state.engine.clone();
    let locale = state.sign_locale;
    let chart = tokio::task::spawn_blocking(move || {
        crate::services::compute_chart(engine.as_ref(), &request, locale)
    })
    .await
    .map_err(|e| AppError::Internal(format!("Task join error: {}", e)))??;

    Ok(Json(chart))
}
