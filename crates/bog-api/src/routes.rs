//! # Routes
//!
//! Axum router configuration for the payment API.

use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// Create the main application router
///
/// Routes:
/// - `POST /create-order` — create a payment order, returns the redirect
/// - `POST /callback` — gateway payment notification, always 200
/// - `GET /` and `GET /health` — liveness probe
pub fn create_router(state: AppState) -> Router {
    // The order form is embedded on a third-party site builder, so CORS
    // stays permissive.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::health))
        .route("/health", get(handlers::health))
        .route("/create-order", post(handlers::create_order))
        .route("/callback", post(handlers::gateway_callback))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
