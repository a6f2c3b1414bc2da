//! Chat relay endpoint.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use tracing::debug;
use uuid::Uuid;

use crate::AppState;
use crate::error::{AppError, AppResult, MISSING_MESSAGE};
use crate::models::{RelayRequest, RelayResponse};

/// `POST /api/botpress/message`: relay one chat message upstream.
///
/// A body that is not JSON, lacks `message`, or carries a blank one is a
/// 400. The conversation id is echoed back; one is minted when absent.
pub async fn relay_handler(
    State(state): State<AppState>,
    body: Result<Json<RelayRequest>, JsonRejection>,
) -> AppResult<Json<RelayResponse>> {
    let Json(body) = body.map_err(|e| {
        debug!(error = %e, "rejected relay body");
        AppError::InvalidRequest(MISSING_MESSAGE.into())
    })?;
    let message = body
        .message
        .ok_or_else(|| AppError::InvalidRequest(MISSING_MESSAGE.into()))?;
    let conversation_id = body
        .conversation_id
        .filter(|id| !id.trim().is_empty())
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    let reply = state.relay.relay(&message, &conversation_id).await?;

    Ok(Json(RelayResponse {
        success: true,
        reply: reply.reply,
        data: reply.raw,
        conversation_id,
        endpoint: reply.endpoint.to_string(),
    }))
}
