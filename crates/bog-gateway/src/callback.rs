//! # Callback Intake
//!
//! The gateway delivers payment-status notifications at-least-once and
//! keeps redelivering until it receives a success response. Intake
//! therefore never fails: the body is read in full, parsed
//! best-effort, and logged for downstream inspection. Correlation and
//! persistence are out of scope here.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use tracing::{info, warn};

/// A received gateway notification. Ephemeral: logged, not persisted.
#[derive(Debug, Clone, Serialize)]
pub struct CallbackPayload {
    /// Parsed body; `Null` when the raw bytes were not valid JSON
    pub body: Value,
    pub raw_len: usize,
    pub received_at: DateTime<Utc>,
}

impl CallbackPayload {
    pub fn is_parsed(&self) -> bool {
        !self.body.is_null()
    }
}

/// Ingest a raw callback body.
///
/// Total: parse failures degrade to an empty payload so the caller can
/// still acknowledge the delivery and stop the redelivery loop.
pub fn receive_callback(raw: &[u8]) -> CallbackPayload {
    let body = match serde_json::from_slice::<Value>(raw) {
        Ok(value) => value,
        Err(err) => {
            warn!("callback body is not valid JSON ({err}); acknowledging anyway");
            Value::Null
        }
    };

    let payload = CallbackPayload {
        body,
        raw_len: raw.len(),
        received_at: Utc::now(),
    };

    info!(
        raw_len = payload.raw_len,
        parsed = payload.is_parsed(),
        "gateway callback: {}",
        payload.body
    );

    payload
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_valid_json_is_parsed() {
        let raw = br#"{"order_id": "ord_1", "payment_status": "completed"}"#;
        let payload = receive_callback(raw);

        assert!(payload.is_parsed());
        assert_eq!(
            payload.body,
            json!({"order_id": "ord_1", "payment_status": "completed"})
        );
        assert_eq!(payload.raw_len, raw.len());
    }

    #[test]
    fn test_garbage_degrades_to_empty_payload() {
        let payload = receive_callback(b"not json");
        assert!(!payload.is_parsed());
        assert_eq!(payload.body, Value::Null);
        assert_eq!(payload.raw_len, 8);
    }

    #[test]
    fn test_empty_body_is_handled() {
        let payload = receive_callback(b"");
        assert!(!payload.is_parsed());
        assert_eq!(payload.raw_len, 0);
    }
}
