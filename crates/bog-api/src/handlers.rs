//! # Request Handlers
//!
//! Axum request handlers for the payment API.
//!
//! The create-order path reads the body as raw bytes and parses it
//! best-effort, so loosely-typed callers (site builders, plain form
//! posts) never get a parse rejection; defaults apply instead.

use crate::state::AppState;
use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use bog_core::{CreateOrderRequest, GatewayError, OrderResult};
use bog_gateway::receive_callback;
use tracing::{error, info, instrument};

/// Map a gateway error to its boundary status and JSON envelope.
fn gateway_error_to_response(err: GatewayError) -> (StatusCode, Json<serde_json::Value>) {
    let status =
        StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(err.to_envelope()))
}

/// Liveness probe
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "ok": true,
        "service": "bog-pay",
        "time": chrono::Utc::now().timestamp_millis(),
    }))
}

/// Create a payment order and hand back the payer redirect.
#[instrument(skip(state, headers, body))]
pub async fn create_order(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<OrderResult>, (StatusCode, Json<serde_json::Value>)> {
    // Malformed inbound JSON degrades to the all-defaults request
    let request = CreateOrderRequest::from_bytes(&body);

    let lang_hint = headers
        .get(header::ACCEPT_LANGUAGE)
        .and_then(|v| v.to_str().ok());

    let result = state
        .orders
        .create_order(&request, lang_hint)
        .await
        .map_err(|e| {
            error!("order creation failed: {}", e);
            gateway_error_to_response(e)
        })?;

    info!("order {} created, redirecting payer", result.order_id);

    Ok(Json(result))
}

/// Receive the gateway's asynchronous payment notification.
///
/// Always replies 200 `{ok: true}` once the body has been read: the
/// gateway redelivers until it sees success, whatever the parse
/// outcome.
pub async fn gateway_callback(body: Bytes) -> impl IntoResponse {
    let _payload = receive_callback(&body);
    Json(serde_json::json!({ "ok": true }))
}
