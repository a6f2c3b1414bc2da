//! Health endpoint.

use axum::Json;
use axum::extract::State;

use crate::AppState;
use crate::error::AppResult;
use crate::models::HealthResponse;

/// `GET /api/health`: reports core version and upstream configuration.
pub async fn health_handler(State(state): State<AppState>) -> AppResult<Json<HealthResponse>> {
    Ok(Json(HealthResponse {
        greeting: brightpath_core::hello::greeting(),
        upstream_candidates: state.relay.candidates().len(),
        token_configured: state.relay.has_token(),
    }))
}
