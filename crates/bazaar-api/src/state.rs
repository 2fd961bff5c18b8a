//! # Application State
//!
//! Shared state for the Axum application: the item store, the payment
//! gateway, checkout policy, and configuration.

use bazaar_core::{
    BazaarError, BazaarResult, CheckoutPolicy, CheckoutUrls, Currency, SharedItemStore,
    SharedPaymentGateway,
};
use bazaar_store::JsonFileStore;
use bazaar_stripe::StripeGateway;
use std::sync::Arc;
use std::time::Duration;

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Environment (development, staging, production)
    pub environment: String,
    /// Frontend origin, used as the CORS origin and the redirect base
    pub frontend_origin: String,
    /// Path of the JSON item store file
    pub store_path: String,
    /// Artificial delay applied to the items list route
    pub list_delay: Duration,
}

impl AppConfig {
    /// Load from environment variables
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            environment: std::env::var("ENVIRONMENT")
                .unwrap_or_else(|_| "development".to_string()),
            frontend_origin: std::env::var("FRONTEND_ORIGIN")
                .unwrap_or_else(|_| "http://localhost:5173".to_string()),
            store_path: std::env::var("ITEMS_STORE_PATH")
                .unwrap_or_else(|_| "items.json".to_string()),
            list_delay: Duration::from_millis(
                std::env::var("LIST_DELAY_MS")
                    .ok()
                    .and_then(|ms| ms.parse().ok())
                    .unwrap_or(2000),
            ),
        }
    }

    /// Get the socket address to bind to
    pub fn socket_addr(&self) -> std::net::SocketAddr {
        format!("{}:{}", self.host, self.port)
            .parse()
            .expect("Invalid socket address")
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Load the checkout policy from the environment.
///
/// `CONVENIENCE_FEE` falls back to its default silently;
/// `CHECKOUT_CURRENCY` must parse, an unsupported currency stops the
/// boot rather than pricing carts in the wrong unit.
pub fn checkout_policy_from_env() -> BazaarResult<CheckoutPolicy> {
    let mut policy = CheckoutPolicy::default();

    if let Ok(raw) = std::env::var("CHECKOUT_CURRENCY") {
        policy.currency = raw
            .parse::<Currency>()
            .map_err(|e| BazaarError::Configuration(format!("CHECKOUT_CURRENCY: {}", e)))?;
    }

    if let Some(fee) = std::env::var("CONVENIENCE_FEE")
        .ok()
        .and_then(|v| v.parse().ok())
    {
        policy.convenience_fee = fee;
    }

    Ok(policy)
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Item store backend
    pub store: SharedItemStore,
    /// Payment gateway
    pub gateway: SharedPaymentGateway,
    /// Line item assembly policy
    pub policy: CheckoutPolicy,
    /// Redirect URLs handed to the gateway
    pub urls: CheckoutUrls,
    /// Application config
    pub config: AppConfig,
}

impl AppState {
    /// Create the production state: JSON file store plus Stripe gateway
    pub fn new() -> anyhow::Result<Self> {
        let config = AppConfig::from_env();
        let policy = checkout_policy_from_env()?;
        let urls = CheckoutUrls::new(&config.frontend_origin);

        let store = Arc::new(JsonFileStore::new(&config.store_path)) as SharedItemStore;
        let gateway = Arc::new(StripeGateway::from_env()) as SharedPaymentGateway;

        Ok(Self {
            store,
            gateway,
            policy,
            urls,
            config,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_config_defaults() {
        // Clear env vars for test
        std::env::remove_var("HOST");
        std::env::remove_var("PORT");
        std::env::remove_var("FRONTEND_ORIGIN");
        std::env::remove_var("ITEMS_STORE_PATH");
        std::env::remove_var("LIST_DELAY_MS");

        let config = AppConfig::from_env();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 3000);
        assert_eq!(config.frontend_origin, "http://localhost:5173");
        assert_eq!(config.store_path, "items.json");
        assert_eq!(config.list_delay, Duration::from_millis(2000));
    }

    #[test]
    fn test_socket_addr() {
        let config = AppConfig {
            host: "0.0.0.0".to_string(),
            port: 3000,
            environment: "test".to_string(),
            frontend_origin: "http://localhost:5173".to_string(),
            store_path: "items.json".to_string(),
            list_delay: Duration::ZERO,
        };

        let addr = config.socket_addr();
        assert_eq!(addr.to_string(), "0.0.0.0:3000");
    }

    #[test]
    fn test_checkout_policy_env_overrides() {
        // Scenarios run sequentially in one test since env vars are
        // process-global.
        std::env::remove_var("CHECKOUT_CURRENCY");
        std::env::remove_var("CONVENIENCE_FEE");
        let policy = checkout_policy_from_env().unwrap();
        assert_eq!(policy.currency, Currency::INR);
        assert_eq!(policy.convenience_fee, 9900);

        std::env::set_var("CHECKOUT_CURRENCY", "usd");
        std::env::set_var("CONVENIENCE_FEE", "500");
        let policy = checkout_policy_from_env().unwrap();
        assert_eq!(policy.currency, Currency::USD);
        assert_eq!(policy.convenience_fee, 500);

        std::env::set_var("CHECKOUT_CURRENCY", "doubloons");
        assert!(checkout_policy_from_env().is_err());

        std::env::remove_var("CHECKOUT_CURRENCY");
        std::env::remove_var("CONVENIENCE_FEE");
    }
}
