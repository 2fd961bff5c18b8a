//! # Checkout Assembly
//!
//! Pure translation from a request-scoped cart into the provider-facing
//! line items of a checkout session. Carts are self-priced: each line
//! carries its own display name, image, and major-unit price.

use serde::{Deserialize, Serialize};

use crate::money::{Currency, Price};

/// One line of an inbound cart. Transient, never persisted.
///
/// Unknown fields (including any client-sent `quantity`) are ignored;
/// every line checks out with quantity 1.
#[derive(Debug, Clone, Deserialize)]
pub struct CartLine {
    /// Product display name
    pub item_name: String,

    /// Product image URL
    pub image: String,

    /// Unit price in major currency units (rupees)
    pub current_price: f64,
}

/// A provider-facing descriptor of a single purchasable unit
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineItem {
    /// Display name shown on the hosted checkout page
    pub name: String,

    /// Unit price in minor units
    pub unit_price: Price,

    /// Quantity (always 1 for cart-derived lines and the fee line)
    pub quantity: u32,

    /// Optional product image URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl LineItem {
    /// Build a line item from a cart line, converting the price to
    /// minor units in the session currency
    pub fn from_cart_line(line: &CartLine, currency: Currency) -> Self {
        Self {
            name: line.item_name.clone(),
            unit_price: Price::new(line.current_price, currency),
            quantity: 1,
            image_url: Some(line.image.clone()),
        }
    }
}

/// Named checkout parameters, loaded from the environment with
/// documented defaults.
#[derive(Debug, Clone)]
pub struct CheckoutPolicy {
    /// Session currency for all line items
    pub currency: Currency,

    /// Flat convenience fee appended to every session, in minor units
    pub convenience_fee: i64,

    /// Display label for the fee line
    pub convenience_fee_label: String,
}

impl Default for CheckoutPolicy {
    fn default() -> Self {
        Self {
            currency: Currency::INR,
            convenience_fee: 9900,
            convenience_fee_label: "Convenience Fee".to_string(),
        }
    }
}

impl CheckoutPolicy {
    /// The synthetic fee line appended after all cart-derived lines
    pub fn fee_line_item(&self) -> LineItem {
        LineItem {
            name: self.convenience_fee_label.clone(),
            unit_price: Price::from_minor_units(self.convenience_fee, self.currency),
            quantity: 1,
            image_url: None,
        }
    }
}

/// Assemble provider line items from a cart.
///
/// One line item per cart line, in cart order, followed by exactly one
/// convenience-fee line. The fee is appended on every invocation, empty
/// carts included.
pub fn assemble_line_items(cart: &[CartLine], policy: &CheckoutPolicy) -> Vec<LineItem> {
    let mut line_items: Vec<LineItem> = cart
        .iter()
        .map(|line| LineItem::from_cart_line(line, policy.currency))
        .collect();

    line_items.push(policy.fee_line_item());
    line_items
}
