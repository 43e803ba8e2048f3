//! # Order Service
//!
//! Builds and submits order-creation requests to the BOG e-commerce
//! API: input normalization, idempotent submission, and tolerant
//! handling of the gateway's heterogeneous responses.

use crate::config::BogConfig;
use crate::token::{TokenProvider, REQUEST_TIMEOUT};
use bog_core::{
    resolve_redirect, CreateOrderRequest, GatewayError, GatewayResult, OrderDefaults,
    OrderRequest, OrderResult, UpstreamBody,
};
use reqwest::{Client, StatusCode};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, error, info, instrument};
use uuid::Uuid;

/// Step tag carried on order-creation failures
const STEP_CREATE_ORDER: &str = "create-order";

/// Status label used when the gateway omits one
const DEFAULT_STATUS: &str = "created";

/// Single entry point for order creation against the gateway.
///
/// Owns its HTTP client and shares the process-wide `TokenProvider`.
pub struct OrderService {
    config: BogConfig,
    defaults: OrderDefaults,
    client: Client,
    tokens: Arc<TokenProvider>,
}

impl OrderService {
    pub fn new(config: BogConfig, defaults: OrderDefaults) -> GatewayResult<Self> {
        let tokens = Arc::new(TokenProvider::new(config.clone())?);
        Self::with_token_provider(config, defaults, tokens)
    }

    /// Construct with a shared token provider (one cache per process).
    pub fn with_token_provider(
        config: BogConfig,
        defaults: OrderDefaults,
        tokens: Arc<TokenProvider>,
    ) -> GatewayResult<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| GatewayError::Configuration(format!("HTTP client: {e}")))?;

        Ok(Self {
            config,
            defaults,
            client,
            tokens,
        })
    }

    pub fn defaults(&self) -> &OrderDefaults {
        &self.defaults
    }

    /// Create an order and return the payer redirect.
    ///
    /// `lang_hint` is the inbound `Accept-Language` value; an explicit
    /// `language` field in the body takes precedence over it.
    #[instrument(skip(self, request, lang_hint))]
    pub async fn create_order(
        &self,
        request: &CreateOrderRequest,
        lang_hint: Option<&str>,
    ) -> GatewayResult<OrderResult> {
        let order = OrderRequest::normalize(request, lang_hint, &self.defaults);
        self.submit(&order).await
    }

    /// Submit a normalized order.
    ///
    /// The idempotency key is generated once per logical submission.
    /// The single 401-triggered retry replays the exact same key and
    /// payload so the gateway can deduplicate the financial side
    /// effect; the key is never regenerated mid-submission.
    pub async fn submit(&self, order: &OrderRequest) -> GatewayResult<OrderResult> {
        let idempotency_key = Uuid::new_v4().to_string();
        let payload = self.build_payload(order);

        let (status, body) = self.send(order, &payload, &idempotency_key).await?;

        let (status, body) = if status == StatusCode::UNAUTHORIZED {
            // The cached token went stale server-side: refresh once and
            // replay the identical request.
            debug!("gateway returned 401, refreshing token and retrying once");
            self.tokens.invalidate().await;
            self.send(order, &payload, &idempotency_key).await?
        } else {
            (status, body)
        };

        self.interpret(order, status, body)
    }

    async fn send(
        &self,
        order: &OrderRequest,
        payload: &OrderPayload,
        idempotency_key: &str,
    ) -> GatewayResult<(StatusCode, UpstreamBody)> {
        let token = self.tokens.get_token().await?;

        let response = self
            .client
            .post(self.config.order_create_url())
            .bearer_auth(token)
            .header("Idempotency-Key", idempotency_key)
            .header("Accept-Language", order.language.as_str())
            .json(payload)
            .send()
            .await
            .map_err(|e| GatewayError::TransientNetwork(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| GatewayError::TransientNetwork(e.to_string()))?;

        Ok((status, UpstreamBody::from_text(&text)))
    }

    fn interpret(
        &self,
        order: &OrderRequest,
        status: StatusCode,
        body: UpstreamBody,
    ) -> GatewayResult<OrderResult> {
        if !status.is_success() {
            error!("order rejected: status={status}, body={body}");
            return Err(GatewayError::Order {
                step: STEP_CREATE_ORDER,
                status: status.as_u16(),
                body,
            });
        }

        // A 2xx without an actionable redirect must never reach the
        // client as success.
        let redirect_url = body
            .as_json()
            .and_then(resolve_redirect)
            .map(str::to_string);
        let Some(redirect_url) = redirect_url else {
            error!("gateway success without redirect: {body}");
            return Err(GatewayError::RedirectMissing { body });
        };

        let parsed = body.as_json();
        let order_id = parsed
            .and_then(|v| v.get("id"))
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        let order_status = parsed
            .and_then(|v| v.get("status"))
            .and_then(Value::as_str)
            .unwrap_or(DEFAULT_STATUS)
            .to_string();

        info!(
            "created order {order_id} (external {})",
            order.external_order_id
        );

        Ok(OrderResult {
            order_id,
            status: order_status,
            redirect_url,
        })
    }

    fn build_payload(&self, order: &OrderRequest) -> OrderPayload {
        OrderPayload {
            callback_url: self.config.callback_url(),
            external_order_id: order.external_order_id.clone(),
            purchase_units: PurchaseUnits {
                currency: self.defaults.currency.clone(),
                total_amount: order.amount,
                basket: vec![BasketItem {
                    quantity: 1,
                    unit_price: order.amount,
                    product_id: order.product_id.clone(),
                    description: order.description.clone(),
                }],
            },
            redirect_urls: self.defaults.include_redirect_urls.then(|| RedirectUrls {
                success: self.config.success_url.clone(),
                fail: self.config.fail_url.clone(),
            }),
        }
    }
}

// =============================================================================
// Gateway API Types
// =============================================================================

#[derive(Debug, Serialize)]
struct OrderPayload {
    callback_url: String,
    external_order_id: String,
    purchase_units: PurchaseUnits,
    #[serde(skip_serializing_if = "Option::is_none")]
    redirect_urls: Option<RedirectUrls>,
}

#[derive(Debug, Serialize)]
struct PurchaseUnits {
    currency: String,
    total_amount: f64,
    basket: Vec<BasketItem>,
}

#[derive(Debug, Serialize)]
struct BasketItem {
    quantity: u32,
    unit_price: f64,
    product_id: String,
    description: String,
}

#[derive(Debug, Serialize)]
struct RedirectUrls {
    success: String,
    fail: String,
}
