//! # bog-core
//!
//! Domain types and pure logic for the BOG payment orchestration
//! service.
//!
//! This crate provides:
//! - `GatewayError` for typed error handling and boundary envelopes
//! - `CreateOrderRequest`, `OrderRequest`, and `OrderResult` for the
//!   order-creation flow
//! - `Language` resolution for the hosted payment page
//! - `resolve_redirect` for normalizing the gateway's success response
//!
//! Nothing in this crate performs I/O; the gateway client lives in
//! `bog-gateway` and the HTTP surface in `bog-api`.

pub mod error;
pub mod language;
pub mod order;
pub mod redirect;

// Re-exports for convenience
pub use error::{GatewayError, GatewayResult, UpstreamBody};
pub use language::Language;
pub use order::{CreateOrderRequest, OrderDefaults, OrderRequest, OrderResult};
pub use redirect::resolve_redirect;
