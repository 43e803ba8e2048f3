//! # Gateway Error Types
//!
//! Typed error handling for the payment orchestration flow.
//! Every failure is classified into a fixed taxonomy and mapped to an
//! HTTP status plus a JSON envelope at the API boundary.

use serde::Serialize;
use thiserror::Error;

/// An upstream response body, parsed tolerantly.
///
/// The gateway answers with JSON on most paths but has been observed
/// returning plain text on error paths, so parse failures keep the raw
/// text as an opaque diagnostic instead of failing the whole call.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum UpstreamBody {
    Json(serde_json::Value),
    Text(String),
}

impl UpstreamBody {
    /// Parse raw response text: JSON when possible, opaque text otherwise.
    pub fn from_text(raw: &str) -> Self {
        match serde_json::from_str(raw) {
            Ok(value) => UpstreamBody::Json(value),
            Err(_) => UpstreamBody::Text(raw.to_string()),
        }
    }

    pub fn as_json(&self) -> Option<&serde_json::Value> {
        match self {
            UpstreamBody::Json(value) => Some(value),
            UpstreamBody::Text(_) => None,
        }
    }
}

impl std::fmt::Display for UpstreamBody {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UpstreamBody::Json(value) => write!(f, "{value}"),
            UpstreamBody::Text(text) => write!(f, "{text}"),
        }
    }
}

/// Core error type for all payment operations
#[derive(Debug, Error)]
pub enum GatewayError {
    /// Configuration errors (missing credentials, invalid addresses)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The token endpoint rejected our credentials; retrying is pointless
    #[error("Gateway authentication failed (HTTP {status}): {detail}")]
    Auth { status: u16, detail: String },

    /// Network failure or upstream 5xx after the bounded retries
    #[error("Network error: {0}")]
    TransientNetwork(String),

    /// Gateway rejected the order; the upstream body is carried verbatim
    #[error("Order rejected at step '{step}' (HTTP {status})")]
    Order {
        step: &'static str,
        status: u16,
        body: UpstreamBody,
    },

    /// Gateway reported success but gave no usable redirect URL
    #[error("Gateway success response contained no redirect URL")]
    RedirectMissing { body: UpstreamBody },

    /// Inbound data that cannot be interpreted even with defaults applied
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    /// Anything unexpected; surfaced as a generic 500
    #[error("Internal error: {0}")]
    Internal(String),
}

impl GatewayError {
    /// Returns true if this error is retryable
    pub fn is_retryable(&self) -> bool {
        matches!(self, GatewayError::TransientNetwork(_))
    }

    /// HTTP status to surface at the API boundary
    pub fn status_code(&self) -> u16 {
        match self {
            GatewayError::Configuration(_) => 500,
            GatewayError::Auth { .. } => 502,
            GatewayError::TransientNetwork(_) => 503,
            GatewayError::Order { .. } => 400,
            GatewayError::RedirectMissing { .. } => 502,
            GatewayError::MalformedInput(_) => 400,
            GatewayError::Internal(_) => 500,
        }
    }

    /// Stable machine-readable tag used in the boundary envelope
    pub fn kind(&self) -> &'static str {
        match self {
            GatewayError::Configuration(_) => "configuration",
            GatewayError::Auth { .. } => "auth",
            GatewayError::TransientNetwork(_) => "network",
            GatewayError::Order { .. } => "create-order",
            GatewayError::RedirectMissing { .. } => "redirect-missing",
            GatewayError::MalformedInput(_) => "malformed-input",
            GatewayError::Internal(_) => "internal",
        }
    }

    /// JSON envelope for the caller.
    ///
    /// Order rejections keep the shape `{step, status, bog}` so the
    /// upstream diagnostic passes through untouched; everything else is
    /// `{error, detail}`. Internal stack detail never leaks.
    pub fn to_envelope(&self) -> serde_json::Value {
        match self {
            GatewayError::Order { step, status, body } => serde_json::json!({
                "step": step,
                "status": status,
                "bog": body,
            }),
            other => serde_json::json!({
                "error": other.kind(),
                "detail": other.to_string(),
            }),
        }
    }
}

/// Result type alias for payment operations
pub type GatewayResult<T> = Result<T, GatewayError>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_upstream_body_parsing() {
        let body = UpstreamBody::from_text(r#"{"message": "bad amount"}"#);
        assert_eq!(body, UpstreamBody::Json(json!({"message": "bad amount"})));

        let body = UpstreamBody::from_text("Service Unavailable");
        assert_eq!(body, UpstreamBody::Text("Service Unavailable".to_string()));
        assert!(body.as_json().is_none());
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            GatewayError::Auth {
                status: 401,
                detail: "invalid_client".into()
            }
            .status_code(),
            502
        );
        assert_eq!(
            GatewayError::TransientNetwork("timeout".into()).status_code(),
            503
        );
        assert_eq!(
            GatewayError::Order {
                step: "create-order",
                status: 400,
                body: UpstreamBody::Text("no".into())
            }
            .status_code(),
            400
        );
        assert_eq!(
            GatewayError::RedirectMissing {
                body: UpstreamBody::Json(json!({}))
            }
            .status_code(),
            502
        );
    }

    #[test]
    fn test_retryable_errors() {
        assert!(GatewayError::TransientNetwork("timeout".into()).is_retryable());
        assert!(!GatewayError::Auth {
            status: 401,
            detail: "nope".into()
        }
        .is_retryable());
    }

    #[test]
    fn test_order_envelope_passes_body_verbatim() {
        let err = GatewayError::Order {
            step: "create-order",
            status: 400,
            body: UpstreamBody::Json(json!({"message": "bad amount"})),
        };
        let envelope = err.to_envelope();
        assert_eq!(envelope["step"], "create-order");
        assert_eq!(envelope["status"], 400);
        assert_eq!(envelope["bog"], json!({"message": "bad amount"}));
    }

    #[test]
    fn test_generic_envelope_shape() {
        let err = GatewayError::Internal("boom".into());
        let envelope = err.to_envelope();
        assert_eq!(envelope["error"], "internal");
        assert!(envelope["detail"].is_string());
        assert!(envelope.get("step").is_none());
    }
}
