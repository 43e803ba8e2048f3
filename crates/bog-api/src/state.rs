//! # Application State
//!
//! Shared state for the Axum application: the order service and the
//! process configuration.

use bog_core::OrderDefaults;
use bog_gateway::{BogConfig, OrderService};
use std::sync::Arc;

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Environment (development, staging, production)
    pub environment: String,
}

impl AppConfig {
    /// Load from environment variables
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
        }
    }

    /// Get the socket address to bind to
    pub fn socket_addr(&self) -> std::net::SocketAddr {
        format!("{}:{}", self.host, self.port)
            .parse()
            .expect("Invalid socket address")
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Order-creation service (owns the token cache)
    pub orders: Arc<OrderService>,
    /// Application config
    pub config: AppConfig,
}

impl AppState {
    /// Construct from the environment.
    ///
    /// Missing gateway credentials are a fatal startup condition, not a
    /// per-request error.
    pub fn new() -> anyhow::Result<Self> {
        let config = AppConfig::from_env();

        let gateway = BogConfig::from_env()
            .map_err(|e| anyhow::anyhow!("Failed to load gateway config: {}", e))?;

        let orders = OrderService::new(gateway, OrderDefaults::default())
            .map_err(|e| anyhow::anyhow!("Failed to initialize gateway client: {}", e))?;

        Ok(Self {
            orders: Arc::new(orders),
            config,
        })
    }

    /// Construct with an explicit order service (for testing)
    pub fn with_service(orders: OrderService) -> Self {
        Self {
            orders: Arc::new(orders),
            config: AppConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
                environment: "test".to_string(),
            },
        }
    }
}
