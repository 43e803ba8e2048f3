//! # Order Types
//!
//! The inbound create-order request, the normalization defaults, and
//! the result returned to the client.
//!
//! The original integration grew several near-duplicate flows with
//! drifting defaults; everything here funnels through one
//! `OrderDefaults` so there is a single place those knobs live.

use crate::language::Language;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// Inbound create-order body.
///
/// Every field is optional; missing or unusable values are replaced by
/// configured defaults rather than rejected, to stay compatible with
/// loosely-typed callers (site builders, plain form posts).
#[derive(Debug, Default, Deserialize)]
pub struct CreateOrderRequest {
    /// Amount as a JSON number or numeric string
    #[serde(default)]
    pub amount: Option<Value>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub product_id: Option<String>,
    /// Explicit page language; beats the request-language header
    #[serde(default)]
    pub language: Option<String>,
}

impl CreateOrderRequest {
    /// Best-effort parse: malformed JSON yields the all-defaults request.
    pub fn from_bytes(raw: &[u8]) -> Self {
        serde_json::from_slice(raw).unwrap_or_default()
    }
}

/// Fixed defaults and knobs for the order-creation flow.
#[derive(Debug, Clone)]
pub struct OrderDefaults {
    /// ISO 4217 code, fixed for the whole system (not user-selectable)
    pub currency: String,
    /// Applied when the amount is absent or not a positive number
    pub default_amount: f64,
    pub default_description: String,
    pub default_product_id: String,
    /// Prefix for generated external order ids
    pub order_prefix: String,
    /// Whether redirect targets are sent with the order payload
    pub include_redirect_urls: bool,
}

impl Default for OrderDefaults {
    fn default() -> Self {
        Self {
            currency: "GEL".to_string(),
            default_amount: 69.0,
            default_description: "Online posture diagnostics".to_string(),
            default_product_id: "posture_diagnostics_online".to_string(),
            order_prefix: "order".to_string(),
            include_redirect_urls: true,
        }
    }
}

/// A normalized order, ready for submission to the gateway.
#[derive(Debug, Clone)]
pub struct OrderRequest {
    pub amount: f64,
    pub description: String,
    pub product_id: String,
    pub language: Language,
    /// Unique per logical submission
    pub external_order_id: String,
}

impl OrderRequest {
    /// Normalize an inbound request against the configured defaults.
    ///
    /// `lang_hint` is the request-language header value; an explicit
    /// `language` body field takes precedence over it.
    pub fn normalize(
        request: &CreateOrderRequest,
        lang_hint: Option<&str>,
        defaults: &OrderDefaults,
    ) -> Self {
        let amount = request
            .amount
            .as_ref()
            .and_then(coerce_amount)
            .filter(|amount| amount.is_finite() && *amount > 0.0)
            .unwrap_or(defaults.default_amount);

        Self {
            amount,
            description: non_empty(request.description.as_deref())
                .unwrap_or(&defaults.default_description)
                .to_string(),
            product_id: non_empty(request.product_id.as_deref())
                .unwrap_or(&defaults.default_product_id)
                .to_string(),
            language: Language::resolve(request.language.as_deref(), lang_hint),
            external_order_id: new_external_order_id(&defaults.order_prefix),
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}

/// Coerce a loosely-typed amount (number or numeric string).
fn coerce_amount(value: &Value) -> Option<f64> {
    match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}

/// Time-based id with a random suffix: unique across submissions even
/// when two land in the same millisecond.
fn new_external_order_id(prefix: &str) -> String {
    let millis = Utc::now().timestamp_millis();
    let suffix = Uuid::new_v4().simple().to_string();
    format!("{prefix}-{millis}-{}", &suffix[..8])
}

/// Result returned synchronously to the client. Not persisted.
#[derive(Debug, Clone, Serialize)]
pub struct OrderResult {
    pub order_id: String,
    pub status: String,
    pub redirect_url: String,
}
