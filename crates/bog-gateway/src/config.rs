//! # Gateway Configuration
//!
//! Credentials and endpoints for the BOG e-commerce API.
//! All secrets are loaded from environment variables; missing
//! credentials abort startup instead of failing individual requests.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use bog_core::GatewayError;
use std::env;

const DEFAULT_TOKEN_URL: &str =
    "https://oauth2.bog.ge/auth/realms/bog/protocol/openid-connect/token";
const DEFAULT_API_BASE_URL: &str = "https://api.bog.ge/payments/v1";

/// BOG API configuration
#[derive(Debug, Clone)]
pub struct BogConfig {
    /// OAuth2 service client id
    pub client_id: String,

    /// OAuth2 service client secret
    pub client_secret: String,

    /// Public base URL of this service, used to build the callback URL
    pub public_base_url: String,

    /// Where the payer lands after a successful payment
    pub success_url: String,

    /// Where the payer lands after a failed payment
    pub fail_url: String,

    /// Token endpoint (overridable for testing/mocking)
    pub token_url: String,

    /// Payments API base URL (overridable for testing/mocking)
    pub api_base_url: String,
}

impl BogConfig {
    /// Load configuration from environment variables.
    ///
    /// Required env vars:
    /// - `BOG_CLIENT_ID`
    /// - `BOG_CLIENT_SECRET`
    /// - `PUBLIC_BASE_URL`
    /// - `SUCCESS_URL`
    /// - `FAIL_URL`
    ///
    /// Optional overrides: `BOG_TOKEN_URL`, `BOG_API_BASE_URL`.
    pub fn from_env() -> Result<Self, GatewayError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        Ok(Self {
            client_id: require("BOG_CLIENT_ID")?,
            client_secret: require("BOG_CLIENT_SECRET")?,
            public_base_url: require("PUBLIC_BASE_URL")?,
            success_url: require("SUCCESS_URL")?,
            fail_url: require("FAIL_URL")?,
            token_url: env::var("BOG_TOKEN_URL")
                .unwrap_or_else(|_| DEFAULT_TOKEN_URL.to_string()),
            api_base_url: env::var("BOG_API_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string()),
        })
    }

    /// Create config with explicit values (for testing)
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        public_base_url: impl Into<String>,
        success_url: impl Into<String>,
        fail_url: impl Into<String>,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            public_base_url: public_base_url.into(),
            success_url: success_url.into(),
            fail_url: fail_url.into(),
            token_url: DEFAULT_TOKEN_URL.to_string(),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }

    /// Builder: point both endpoints at a mock server (for testing)
    pub fn with_base_url(mut self, base: &str) -> Self {
        let base = base.trim_end_matches('/');
        self.token_url = format!("{base}/token");
        self.api_base_url = base.to_string();
        self
    }

    /// `Authorization` value for the client-credentials grant
    pub fn basic_auth_header(&self) -> String {
        let raw = format!("{}:{}", self.client_id, self.client_secret);
        format!("Basic {}", BASE64.encode(raw))
    }

    /// Order-creation endpoint
    pub fn order_create_url(&self) -> String {
        format!("{}/ecommerce/orders", self.api_base_url)
    }

    /// Callback URL advertised to the gateway with each order
    pub fn callback_url(&self) -> String {
        format!("{}/callback", self.public_base_url.trim_end_matches('/'))
    }
}

fn require(key: &str) -> Result<String, GatewayError> {
    env::var(key).map_err(|_| GatewayError::Configuration(format!("{key} not set")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> BogConfig {
        BogConfig::new(
            "client-1",
            "s3cret",
            "https://pay.example.com/",
            "https://shop.example.com/success",
            "https://shop.example.com/fail",
        )
    }

    #[test]
    fn test_basic_auth_header() {
        // base64("client-1:s3cret")
        assert_eq!(
            config().basic_auth_header(),
            "Basic Y2xpZW50LTE6czNjcmV0"
        );
    }

    #[test]
    fn test_callback_url_strips_trailing_slash() {
        assert_eq!(config().callback_url(), "https://pay.example.com/callback");
    }

    #[test]
    fn test_default_endpoints() {
        let config = config();
        assert_eq!(
            config.order_create_url(),
            "https://api.bog.ge/payments/v1/ecommerce/orders"
        );
        assert!(config.token_url.starts_with("https://oauth2.bog.ge/"));
    }

    #[test]
    fn test_with_base_url_override() {
        let config = config().with_base_url("http://127.0.0.1:9999/");
        assert_eq!(config.token_url, "http://127.0.0.1:9999/token");
        assert_eq!(
            config.order_create_url(),
            "http://127.0.0.1:9999/ecommerce/orders"
        );
    }
}
