//! # bog-api
//!
//! HTTP surface for the BOG payment orchestration service.
//!
//! ## Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | GET | `/`, `/health` | Liveness probe |
//! | POST | `/create-order` | Create a payment order, returns the payer redirect |
//! | POST | `/callback` | Gateway payment notification, always acknowledged |

pub mod handlers;
pub mod routes;
pub mod state;

pub use routes::create_router;
pub use state::{AppConfig, AppState};
