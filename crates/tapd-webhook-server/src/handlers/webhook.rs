//! Webhook receiver.

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    Json,
};
use tapd_webhook::CancellationToken;
use tracing::{debug, warn};

use crate::error::{ApiError, Result};
use crate::state::AppState;
use crate::types::AckResponse;

/// POST /webhook - Decode a TAPD delivery and dispatch it.
///
/// Responds only after every listener has finished. If the client goes away
/// first, the handler future is dropped and the guard cancels the listeners.
pub async fn receive_webhook(
    State(state): State<AppState>,
    body: std::result::Result<Bytes, BytesRejection>,
) -> Result<Json<AckResponse>> {
    let body = body.map_err(|rejection| {
        warn!(status = %rejection.status(), "webhook body refused");
        ApiError::from(rejection)
    })?;

    let cancel = CancellationToken::new();
    let guard = cancel.clone().drop_guard();

    let result = state.dispatcher.dispatch_payload(&cancel, &body).await;
    guard.disarm();

    match result {
        Ok(()) => {
            debug!(bytes = body.len(), "webhook delivered");
            Ok(Json(AckResponse::ok()))
        }
        Err(e) => {
            warn!(error = %e, "webhook rejected");
            Err(e.into())
        }
    }
}
