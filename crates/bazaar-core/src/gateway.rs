//! # Payment Gateway Contract
//!
//! The payment provider is an opaque external collaborator: it takes the
//! assembled line items plus redirect URLs and answers with a hosted
//! session. Nothing about the session is tracked after creation: no
//! webhooks, no fulfillment linkage.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::checkout::LineItem;
use crate::error::BazaarResult;

/// Contract for hosted-checkout providers
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Create a checkout session for the supplied line items.
    ///
    /// # Arguments
    /// * `line_items` - Assembled line items, fee line included
    /// * `urls` - Where the provider redirects after success/cancel
    async fn create_session(
        &self,
        line_items: &[LineItem],
        urls: &CheckoutUrls,
    ) -> BazaarResult<CheckoutSession>;

    /// Get the provider name (for logging)
    fn provider_name(&self) -> &'static str;
}

/// Type alias for a shared gateway handle (dynamic dispatch)
pub type SharedPaymentGateway = Arc<dyn PaymentGateway>;

/// A checkout session created by a payment provider.
///
/// Request-scoped: the caller only ever receives the session id and
/// redirects the shopper; the rest is kept for logging.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutSession {
    /// Provider's session ID
    pub session_id: String,

    /// Hosted checkout page URL
    pub checkout_url: String,

    /// Provider name (e.g., "stripe")
    pub provider: String,

    /// When the session expires, if the provider says
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,

    /// Created timestamp
    pub created_at: DateTime<Utc>,
}

impl CheckoutSession {
    /// Create a new checkout session record
    pub fn new(
        session_id: impl Into<String>,
        checkout_url: impl Into<String>,
        provider: impl Into<String>,
    ) -> Self {
        Self {
            session_id: session_id.into(),
            checkout_url: checkout_url.into(),
            provider: provider.into(),
            expires_at: None,
            created_at: Utc::now(),
        }
    }
}

/// Redirect targets for hosted checkout.
///
/// Success and cancel pages live on the shopper-facing frontend, so the
/// base URL doubles as that frontend's origin.
#[derive(Debug, Clone)]
pub struct CheckoutUrls {
    /// Frontend base URL (e.g., "http://localhost:5173")
    pub base_url: String,
    /// Success page path
    pub success_path: String,
    /// Cancel page path
    pub cancel_path: String,
}

impl CheckoutUrls {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            success_path: "/success".to_string(),
            cancel_path: "/cancel".to_string(),
        }
    }

    pub fn success_url(&self) -> String {
        format!("{}{}", self.base_url, self.success_path)
    }

    pub fn cancel_url(&self) -> String {
        format!("{}{}", self.base_url, self.cancel_path)
    }
}

impl Default for CheckoutUrls {
    fn default() -> Self {
        Self::new("http://localhost:5173")
    }
}
