//! # Stripe Configuration
//!
//! Configuration for the Stripe integration. The secret key is loaded
//! from the environment; a missing key is tolerated at startup so the
//! rest of the API stays usable, and checkout calls fail at request
//! time instead.

use std::env;
use tracing::warn;

/// Stripe API configuration
#[derive(Debug, Clone)]
pub struct StripeConfig {
    /// Secret API key (sk_test_... or sk_live_...)
    pub secret_key: String,

    /// API base URL (for testing/mocking)
    pub api_base_url: String,

    /// API version
    pub api_version: String,
}

impl StripeConfig {
    /// Load configuration from the environment.
    ///
    /// Reads `STRIPE_SECRET_KEY`. An unset key logs a warning rather
    /// than failing, so deployments without checkout still boot.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok(); // Load .env file if present

        let secret_key = env::var("STRIPE_SECRET_KEY").unwrap_or_default();
        if secret_key.is_empty() {
            warn!("STRIPE_SECRET_KEY not set, checkout session creation will fail");
        }

        Self {
            secret_key,
            api_base_url: "https://api.stripe.com".to_string(),
            api_version: "2024-12-18.acacia".to_string(),
        }
    }

    /// Create config with an explicit key (for testing)
    pub fn new(secret_key: impl Into<String>) -> Self {
        Self {
            secret_key: secret_key.into(),
            api_base_url: "https://api.stripe.com".to_string(),
            api_version: "2024-12-18.acacia".to_string(),
        }
    }

    /// Whether a secret key is present
    pub fn is_configured(&self) -> bool {
        !self.secret_key.is_empty()
    }

    /// Check if using test keys
    pub fn is_test_mode(&self) -> bool {
        self.secret_key.starts_with("sk_test_")
    }

    /// Get authorization header value
    pub fn auth_header(&self) -> String {
        format!("Bearer {}", self.secret_key)
    }

    /// Builder: set custom API base URL (for testing)
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_key() {
        let config = StripeConfig::new("sk_test_abc123");
        assert!(config.is_configured());
        assert!(config.is_test_mode());

        let config = StripeConfig::new("sk_live_abc123");
        assert!(!config.is_test_mode());
    }

    #[test]
    fn test_auth_header() {
        let config = StripeConfig::new("sk_test_abc123");
        assert_eq!(config.auth_header(), "Bearer sk_test_abc123");
    }

    #[test]
    fn test_empty_key_is_unconfigured() {
        let config = StripeConfig::new("");
        assert!(!config.is_configured());
    }

    #[test]
    fn test_base_url_override() {
        let config = StripeConfig::new("sk_test_abc").with_api_base_url("http://127.0.0.1:9");
        assert_eq!(config.api_base_url, "http://127.0.0.1:9");
        assert_eq!(config.api_version, "2024-12-18.acacia");
    }
}
