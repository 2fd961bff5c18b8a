//! # Money Types
//!
//! Currency and minor-unit price handling. Cart prices arrive in major
//! units (rupees) and are converted once, at assembly time.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::BazaarError;

/// Supported currencies (ISO 4217)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Currency {
    INR,
    USD,
    EUR,
    GBP,
}

impl Currency {
    /// Returns the lowercase ISO 4217 currency code
    pub fn as_str(&self) -> &'static str {
        match self {
            Currency::INR => "inr",
            Currency::USD => "usd",
            Currency::EUR => "eur",
            Currency::GBP => "gbp",
        }
    }

    /// Convert a major-unit amount to the smallest currency unit,
    /// rounding to the nearest unit. Every supported currency is
    /// two-decimal (paise, cents, pence).
    pub fn to_minor_units(&self, amount: f64) -> i64 {
        (amount * 100.0).round() as i64
    }

    /// Convert from the smallest unit back to a decimal amount
    pub fn from_minor_units(&self, amount: i64) -> f64 {
        amount as f64 / 100.0
    }
}

impl Default for Currency {
    fn default() -> Self {
        Currency::INR
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str().to_uppercase())
    }
}

impl FromStr for Currency {
    type Err = BazaarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "inr" => Ok(Currency::INR),
            "usd" => Ok(Currency::USD),
            "eur" => Ok(Currency::EUR),
            "gbp" => Ok(Currency::GBP),
            other => Err(BazaarError::UnsupportedCurrency {
                currency: other.to_string(),
            }),
        }
    }
}

/// Price with amount in smallest currency unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    /// Amount in smallest currency unit (paise for INR)
    pub amount: i64,
    /// Currency
    pub currency: Currency,
}

impl Price {
    /// Create a new price from a major-unit amount
    pub fn new(amount: f64, currency: Currency) -> Self {
        Self {
            amount: currency.to_minor_units(amount),
            currency,
        }
    }

    /// Create a price directly from minor units (paise)
    pub fn from_minor_units(amount: i64, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// Get the decimal amount
    pub fn as_decimal(&self) -> f64 {
        self.currency.from_minor_units(self.amount)
    }

    /// Format for display (e.g., "₹99.00")
    pub fn display(&self) -> String {
        let symbol = match self.currency {
            Currency::INR => "₹",
            Currency::USD => "$",
            Currency::EUR => "€",
            Currency::GBP => "£",
        };
        format!("{}{:.2}", symbol, self.as_decimal())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_conversion() {
        let inr = Currency::INR;
        assert_eq!(inr.to_minor_units(100.0), 10000);
        assert_eq!(inr.to_minor_units(99.99), 9999);
        assert_eq!(inr.from_minor_units(9900), 99.0);
    }

    #[test]
    fn test_conversion_rounds_to_nearest() {
        let inr = Currency::INR;
        // Fractional-paise inputs round rather than truncate
        assert_eq!(inr.to_minor_units(10.5), 1050);
        assert_eq!(inr.to_minor_units(33.333), 3333);
    }

    #[test]
    fn test_price_display() {
        let price = Price::new(450.0, Currency::INR);
        assert_eq!(price.display(), "₹450.00");

        let price_usd = Price::new(29.99, Currency::USD);
        assert_eq!(price_usd.display(), "$29.99");
    }

    #[test]
    fn test_currency_from_str() {
        assert_eq!("inr".parse::<Currency>().unwrap(), Currency::INR);
        assert_eq!("INR".parse::<Currency>().unwrap(), Currency::INR);
        assert_eq!("usd".parse::<Currency>().unwrap(), Currency::USD);
        assert!("paisa".parse::<Currency>().is_err());
    }

    #[test]
    fn test_currency_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&Currency::INR).unwrap(),
            "\"inr\"".to_string()
        );
    }
}
