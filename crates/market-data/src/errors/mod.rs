//! Error types for the market data crate.
//!
//! This module provides:
//! - [`MarketDataError`]: The main error enum for all market data operations
//! - [`MarketDataError::fallback_reason`]: How a per-symbol failure is recorded
//!   when the aggregator substitutes fallback data

use thiserror::Error;

use crate::models::FallbackReason;

/// Errors that can occur during market data operations.
///
/// Provider failures for a single symbol never reach callers of the quote
/// aggregator; they are classified via [`fallback_reason`](Self::fallback_reason)
/// and replaced by a fallback record. Only input validation errors and
/// configuration errors propagate.
#[derive(Error, Debug)]
pub enum MarketDataError {
    /// A requested symbol is blank or otherwise malformed.
    /// This is the only orchestration-level failure of the quote aggregator.
    #[error("Invalid symbol: '{0}'")]
    InvalidSymbol(String),

    /// The country is not present in the catalog.
    #[error("Country {name} not found. Available: {}", available.join(", "))]
    UnknownCountry {
        /// The name that was looked up
        name: String,
        /// All configured country names, in catalog order
        available: Vec<String>,
    },

    /// The provider answered but returned no priced observations.
    #[error("No data returned for {0}")]
    NoData(String),

    /// The request to the provider timed out.
    #[error("Timeout: {provider}")]
    Timeout {
        /// The provider that timed out
        provider: String,
    },

    /// A provider-specific error occurred, including logical failures
    /// reported inside a successful HTTP response.
    #[error("Provider error: {provider} - {message}")]
    ProviderError {
        /// The provider that returned the error
        provider: String,
        /// The error message from the provider
        message: String,
    },

    /// The provider requires an API key and none was configured.
    #[error("Missing API key for provider {provider}")]
    MissingApiKey {
        /// The provider missing its key
        provider: String,
    },

    /// The reference catalog could not be parsed.
    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    /// The reference catalog file could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A network error occurred while communicating with a provider.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl MarketDataError {
    /// Returns how this error is recorded on a fallback quote.
    ///
    /// - Timeouts map to [`FallbackReason::Timeout`]
    /// - Empty series map to [`FallbackReason::NoData`]
    /// - Everything else is a [`FallbackReason::ProviderError`]
    ///
    /// # Examples
    ///
    /// ```
    /// use globefin_market_data::errors::MarketDataError;
    /// use globefin_market_data::models::FallbackReason;
    ///
    /// let error = MarketDataError::Timeout { provider: "YAHOO".to_string() };
    /// assert_eq!(error.fallback_reason(), FallbackReason::Timeout);
    /// ```
    pub fn fallback_reason(&self) -> FallbackReason {
        match self {
            Self::Timeout { .. } => FallbackReason::Timeout,
            Self::NoData(_) => FallbackReason::NoData,
            Self::InvalidSymbol(_)
            | Self::UnknownCountry { .. }
            | Self::ProviderError { .. }
            | Self::MissingApiKey { .. }
            | Self::InvalidCatalog(_)
            | Self::Io(_)
            | Self::Network(_) => FallbackReason::ProviderError,
        }
    }
}
