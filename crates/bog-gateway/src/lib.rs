//! # bog-gateway
//!
//! Client for the Bank of Georgia e-commerce payments API.
//!
//! This crate provides:
//! - `TokenProvider` — client-credentials bearer token with a
//!   single-flight process-wide cache
//! - `OrderService` — idempotent order submission and response
//!   normalization
//! - callback intake for the gateway's asynchronous payment
//!   notifications
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use bog_core::{CreateOrderRequest, OrderDefaults};
//! use bog_gateway::{BogConfig, OrderService};
//!
//! let config = BogConfig::from_env()?;
//! let service = OrderService::new(config, OrderDefaults::default())?;
//!
//! let result = service.create_order(&request, Some("en-US,en;q=0.9")).await?;
//! // Redirect the payer to result.redirect_url
//! ```

pub mod callback;
pub mod config;
pub mod orders;
pub mod token;

// Re-exports
pub use callback::{receive_callback, CallbackPayload};
pub use config::BogConfig;
pub use orders::OrderService;
pub use token::{AccessToken, TokenProvider};
