//! # Redirect Resolution
//!
//! The gateway's success response shape has varied across API
//! versions: newer responses nest the payer link under
//! `_links.redirect.href`, older ones use a flat `redirect_url`.
//! Probe the known shapes in a fixed order.

use serde_json::Value;

/// Extract the payer redirect URL from a parsed success body.
///
/// Total and side-effect-free: any unexpected shape yields `None`.
pub fn resolve_redirect(body: &Value) -> Option<&str> {
    body.pointer("/_links/redirect/href")
        .and_then(Value::as_str)
        .or_else(|| body.get("redirect_url").and_then(Value::as_str))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_nested_link_shape() {
        let body = json!({
            "id": "ord_1",
            "_links": { "redirect": { "href": "https://pay.bog.ge/x" } }
        });
        assert_eq!(resolve_redirect(&body), Some("https://pay.bog.ge/x"));
    }

    #[test]
    fn test_flat_field_shape() {
        let body = json!({ "redirect_url": "https://pay.bog.ge/y" });
        assert_eq!(resolve_redirect(&body), Some("https://pay.bog.ge/y"));
    }

    #[test]
    fn test_nested_shape_wins_over_flat() {
        let body = json!({
            "_links": { "redirect": { "href": "https://pay.bog.ge/nested" } },
            "redirect_url": "https://pay.bog.ge/flat"
        });
        assert_eq!(resolve_redirect(&body), Some("https://pay.bog.ge/nested"));
    }

    #[test]
    fn test_absent_or_malformed_yields_none() {
        assert_eq!(resolve_redirect(&json!({"id": "ord_1"})), None);
        assert_eq!(resolve_redirect(&json!("just a string")), None);
        assert_eq!(resolve_redirect(&json!(null)), None);
        // Present but not a string
        assert_eq!(
            resolve_redirect(&json!({"_links": {"redirect": {"href": 42}}})),
            None
        );
        assert_eq!(resolve_redirect(&json!({"redirect_url": {}})), None);
    }
}
