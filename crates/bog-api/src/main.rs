//! # bog-pay
//!
//! Payment orchestration service for the BOG e-commerce gateway.
//!
//! ## Usage
//!
//! ```bash
//! # Set environment variables
//! export BOG_CLIENT_ID=...
//! export BOG_CLIENT_SECRET=...
//! export PUBLIC_BASE_URL=https://pay.example.com
//! export SUCCESS_URL=https://example.com/payment-success
//! export FAIL_URL=https://example.com/payment-fail
//!
//! # Run the server
//! bog-pay
//! ```

use bog_api::{routes, state::AppState};
use tracing::{info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(Level::INFO.into())
                .from_env_lossy(),
        )
        .init();

    // Initialize application state; bad or missing gateway credentials
    // abort here rather than surfacing per-request.
    let state = AppState::new()?;

    let addr = state.config.socket_addr();
    let is_prod = state.config.is_production();

    info!("Environment: {}", state.config.environment);

    // Create router
    let app = routes::create_router(state);

    // Start server
    info!("bog-pay starting on http://{}", addr);

    if !is_prod {
        info!("Create order: POST http://{}/create-order", addr);
        info!("Callback: POST http://{}/callback", addr);
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
