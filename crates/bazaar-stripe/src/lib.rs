//! # bazaar-stripe
//!
//! Stripe gateway for bazaar-rs, built on the Checkout Sessions API.
//!
//! The gateway turns assembled line items into a hosted checkout
//! session and hands back the session id for the storefront to
//! redirect to.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use bazaar_stripe::StripeGateway;
//! use bazaar_core::{CheckoutUrls, PaymentGateway};
//!
//! // Reads STRIPE_SECRET_KEY from the environment
//! let gateway = StripeGateway::from_env();
//!
//! let session = gateway
//!     .create_session(&line_items, &CheckoutUrls::new("http://localhost:5173"))
//!     .await?;
//!
//! // Hand session.session_id to the frontend for redirectToCheckout
//! ```

pub mod checkout;
pub mod config;

// Re-exports
pub use checkout::StripeGateway;
pub use config::StripeConfig;
