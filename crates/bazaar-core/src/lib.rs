//! # bazaar-core
//!
//! Core types and contracts for the bazaar storefront backend.
//!
//! This crate provides:
//! - `Item` for the schema-less stored item collection
//! - `ItemStore` trait, the atomic read-modify-write storage contract
//! - `CartLine`, `LineItem`, and `assemble_line_items` for checkout assembly
//! - `PaymentGateway` trait and `CheckoutSession` for the provider seam
//! - `BazaarError` for typed error handling
//!
//! ## Example
//!
//! ```rust,ignore
//! use bazaar_core::{assemble_line_items, CartLine, CheckoutPolicy, CheckoutUrls};
//!
//! // Translate a cart into provider line items (fee line appended)
//! let policy = CheckoutPolicy::default();
//! let line_items = assemble_line_items(&cart, &policy);
//!
//! // Hand them to whichever gateway is wired in
//! let session = gateway.create_session(&line_items, &CheckoutUrls::default()).await?;
//!
//! // Respond with session.session_id
//! ```

pub mod checkout;
pub mod error;
pub mod gateway;
pub mod item;
pub mod money;
pub mod store;

// Re-exports for convenience
pub use checkout::{assemble_line_items, CartLine, CheckoutPolicy, LineItem};
pub use error::{BazaarError, BazaarResult};
pub use gateway::{CheckoutSession, CheckoutUrls, PaymentGateway, SharedPaymentGateway};
pub use item::Item;
pub use money::{Currency, Price};
pub use store::{ItemStore, SharedItemStore, UpdateFn};
