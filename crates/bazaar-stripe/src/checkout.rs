//! # Stripe Checkout Sessions
//!
//! Creates Stripe-hosted checkout sessions over the Checkout Sessions
//! API. The shopper is redirected to Stripe's page, so no card data
//! ever touches this service.

use crate::config::StripeConfig;
use async_trait::async_trait;
use bazaar_core::{
    BazaarError, BazaarResult, CheckoutSession, CheckoutUrls, LineItem, PaymentGateway,
};
use chrono::DateTime;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, error, info, instrument};

/// Payment gateway backed by Stripe Checkout Sessions
pub struct StripeGateway {
    config: StripeConfig,
    client: Client,
}

impl StripeGateway {
    /// Create a new Stripe gateway
    pub fn new(config: StripeConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::new(StripeConfig::from_env())
    }

    /// Whether a secret key was supplied
    pub fn is_configured(&self) -> bool {
        self.config.is_configured()
    }

    /// Build the form-encoded body for the Checkout Sessions API.
    ///
    /// Stripe takes nested params in bracket notation, so line items
    /// become `line_items[i][price_data][...]` pairs.
    fn form_params(&self, line_items: &[LineItem], urls: &CheckoutUrls) -> Vec<(String, String)> {
        let mut form_params: Vec<(String, String)> = vec![
            ("mode".to_string(), "payment".to_string()),
            ("success_url".to_string(), urls.success_url()),
            ("cancel_url".to_string(), urls.cancel_url()),
            ("payment_method_types[0]".to_string(), "card".to_string()),
        ];

        for (i, item) in line_items.iter().enumerate() {
            form_params.push((
                format!("line_items[{}][price_data][currency]", i),
                item.unit_price.currency.as_str().to_string(),
            ));
            form_params.push((
                format!("line_items[{}][price_data][unit_amount]", i),
                item.unit_price.amount.to_string(),
            ));
            form_params.push((
                format!("line_items[{}][price_data][product_data][name]", i),
                item.name.clone(),
            ));
            if let Some(ref image) = item.image_url {
                form_params.push((
                    format!("line_items[{}][price_data][product_data][images][0]", i),
                    image.clone(),
                ));
            }
            form_params.push((
                format!("line_items[{}][quantity]", i),
                item.quantity.to_string(),
            ));
        }

        form_params
    }
}

#[async_trait]
impl PaymentGateway for StripeGateway {
    #[instrument(skip(self, line_items, urls), fields(lines = line_items.len()))]
    async fn create_session(
        &self,
        line_items: &[LineItem],
        urls: &CheckoutUrls,
    ) -> BazaarResult<CheckoutSession> {
        if line_items.is_empty() {
            return Err(BazaarError::InvalidRequest(
                "Checkout needs at least one line item".to_string(),
            ));
        }

        let form_params = self.form_params(line_items, urls);
        debug!("creating Stripe checkout session: {} line items", line_items.len());

        let url = format!("{}/v1/checkout/sessions", self.config.api_base_url);

        let response = self
            .client
            .post(&url)
            .header("Authorization", self.config.auth_header())
            .header("Stripe-Version", &self.config.api_version)
            .form(&form_params)
            .send()
            .await
            .map_err(|e| BazaarError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| BazaarError::Network(e.to_string()))?;

        if !status.is_success() {
            error!("Stripe API error: status={}, body={}", status, body);

            // Stripe wraps rejections in an error envelope
            if let Ok(rejection) = serde_json::from_str::<StripeErrorResponse>(&body) {
                return Err(BazaarError::Provider {
                    provider: "stripe".to_string(),
                    message: rejection.error.message,
                });
            }

            return Err(BazaarError::Provider {
                provider: "stripe".to_string(),
                message: format!("HTTP {}: {}", status, body),
            });
        }

        let session: StripeSessionResponse = serde_json::from_str(&body).map_err(|e| {
            BazaarError::Serialization(format!("Failed to parse Stripe response: {}", e))
        })?;

        info!(
            "created Stripe checkout session: id={}, url={}",
            session.id, session.url
        );

        let mut checkout = CheckoutSession::new(session.id, session.url, self.provider_name());
        checkout.expires_at = session
            .expires_at
            .and_then(|ts| DateTime::from_timestamp(ts, 0));
        Ok(checkout)
    }

    fn provider_name(&self) -> &'static str {
        "stripe"
    }
}

// =============================================================================
// Stripe API Types
// =============================================================================

#[derive(Debug, Deserialize)]
struct StripeSessionResponse {
    id: String,
    url: String,
    #[serde(default)]
    expires_at: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct StripeErrorResponse {
    error: StripeError,
}

#[derive(Debug, Deserialize)]
struct StripeError {
    message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use bazaar_core::{assemble_line_items, CartLine, CheckoutPolicy};
    use serde_json::json;
    use wiremock::matchers::{body_string_contains, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn gateway_for(server: &MockServer) -> StripeGateway {
        let config = StripeConfig::new("sk_test_abc").with_api_base_url(server.uri());
        StripeGateway::new(config)
    }

    fn cart_line_items() -> Vec<LineItem> {
        let cart = vec![CartLine {
            item_name: "Ghee 1L".to_string(),
            image: "https://cdn.example.com/ghee.png".to_string(),
            current_price: 100.0,
        }];
        assemble_line_items(&cart, &CheckoutPolicy::default())
    }

    #[tokio::test]
    async fn test_create_session_sends_expected_form() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/checkout/sessions"))
            .and(header("Authorization", "Bearer sk_test_abc"))
            .and(header("Stripe-Version", "2024-12-18.acacia"))
            .and(body_string_contains("mode=payment"))
            .and(body_string_contains(
                "success_url=http%3A%2F%2Flocalhost%3A5173%2Fsuccess",
            ))
            .and(body_string_contains(
                "cancel_url=http%3A%2F%2Flocalhost%3A5173%2Fcancel",
            ))
            .and(body_string_contains("payment_method_types%5B0%5D=card"))
            .and(body_string_contains(
                "line_items%5B0%5D%5Bprice_data%5D%5Bcurrency%5D=inr",
            ))
            .and(body_string_contains(
                "line_items%5B0%5D%5Bprice_data%5D%5Bunit_amount%5D=10000",
            ))
            .and(body_string_contains(
                "product_data%5D%5Bimages%5D%5B0%5D=https%3A%2F%2Fcdn.example.com%2Fghee.png",
            ))
            .and(body_string_contains("line_items%5B0%5D%5Bquantity%5D=1"))
            .and(body_string_contains(
                "line_items%5B1%5D%5Bprice_data%5D%5Bunit_amount%5D=9900",
            ))
            .and(body_string_contains("name%5D=Convenience+Fee"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "cs_test_123",
                "url": "https://checkout.stripe.com/c/pay/cs_test_123",
                "expires_at": 1767225600_i64,
            })))
            .expect(1)
            .mount(&server)
            .await;

        let gateway = gateway_for(&server);
        let session = gateway
            .create_session(&cart_line_items(), &CheckoutUrls::default())
            .await
            .unwrap();

        assert_eq!(session.session_id, "cs_test_123");
        assert_eq!(
            session.checkout_url,
            "https://checkout.stripe.com/c/pay/cs_test_123"
        );
        assert_eq!(session.provider, "stripe");
        assert!(session.expires_at.is_some());
    }

    #[tokio::test]
    async fn test_rejection_surfaces_stripe_message() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/checkout/sessions"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "error": {
                    "message": "No such plan",
                    "type": "invalid_request_error",
                }
            })))
            .mount(&server)
            .await;

        let gateway = gateway_for(&server);
        let err = gateway
            .create_session(&cart_line_items(), &CheckoutUrls::default())
            .await
            .unwrap_err();

        match err {
            BazaarError::Provider { provider, message } => {
                assert_eq!(provider, "stripe");
                assert_eq!(message, "No such plan");
            }
            other => panic!("expected provider error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_unparseable_rejection_keeps_status() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/checkout/sessions"))
            .respond_with(ResponseTemplate::new(500).set_body_string("upstream blew up"))
            .mount(&server)
            .await;

        let gateway = gateway_for(&server);
        let err = gateway
            .create_session(&cart_line_items(), &CheckoutUrls::default())
            .await
            .unwrap_err();

        match err {
            BazaarError::Provider { message, .. } => {
                assert!(message.contains("HTTP 500"), "message was {message:?}");
            }
            other => panic!("expected provider error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_unreachable_api_maps_to_network_error() {
        // Nothing listens on port 1
        let config = StripeConfig::new("sk_test_abc").with_api_base_url("http://127.0.0.1:1");
        let gateway = StripeGateway::new(config);

        let err = gateway
            .create_session(&cart_line_items(), &CheckoutUrls::default())
            .await
            .unwrap_err();

        assert!(matches!(err, BazaarError::Network(_)));
    }

    #[tokio::test]
    async fn test_malformed_success_body_is_serialization_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/checkout/sessions"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({ "object": "checkout.session" })),
            )
            .mount(&server)
            .await;

        let gateway = gateway_for(&server);
        let err = gateway
            .create_session(&cart_line_items(), &CheckoutUrls::default())
            .await
            .unwrap_err();

        assert!(matches!(err, BazaarError::Serialization(_)));
    }

    #[tokio::test]
    async fn test_empty_line_items_rejected_before_any_call() {
        let config = StripeConfig::new("sk_test_abc").with_api_base_url("http://127.0.0.1:1");
        let gateway = StripeGateway::new(config);

        let err = gateway
            .create_session(&[], &CheckoutUrls::default())
            .await
            .unwrap_err();

        assert!(matches!(err, BazaarError::InvalidRequest(_)));
    }

    #[tokio::test]
    async fn test_missing_key_fails_at_request_time() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/checkout/sessions"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({
                "error": { "message": "You did not provide an API key." }
            })))
            .mount(&server)
            .await;

        let config = StripeConfig::new("").with_api_base_url(server.uri());
        let gateway = StripeGateway::new(config);
        assert!(!gateway.is_configured());

        let err = gateway
            .create_session(&cart_line_items(), &CheckoutUrls::default())
            .await
            .unwrap_err();

        assert!(matches!(err, BazaarError::Provider { .. }));
    }
}
