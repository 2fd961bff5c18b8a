//! # Error Types
//!
//! Typed error handling for the bazaar storefront backend.
//! Store and gateway operations return `Result<T, BazaarError>`.

use thiserror::Error;

/// Core error type for storefront operations
#[derive(Debug, Error)]
pub enum BazaarError {
    /// Configuration errors (missing values, invalid config)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Item store I/O failure
    #[error("Storage error: {0}")]
    Storage(String),

    /// Currency not supported
    #[error("Unsupported currency: {currency}")]
    UnsupportedCurrency { currency: String },

    /// Payment provider API error
    #[error("Provider error [{provider}]: {message}")]
    Provider { provider: String, message: String },

    /// Network/HTTP error communicating with the provider
    #[error("Network error: {0}")]
    Network(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl BazaarError {
    /// Returns the HTTP status code appropriate for this error
    pub fn status_code(&self) -> u16 {
        match self {
            BazaarError::Configuration(_) => 500,
            BazaarError::InvalidRequest(_) => 400,
            BazaarError::Storage(_) => 500,
            BazaarError::UnsupportedCurrency { .. } => 400,
            BazaarError::Provider { .. } => 502,
            BazaarError::Network(_) => 503,
            BazaarError::Serialization(_) => 500,
        }
    }
}

/// Result type alias for storefront operations
pub type BazaarResult<T> = Result<T, BazaarError>;
