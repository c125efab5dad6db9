//! Provider trait definitions.
//!
//! This module defines the two seams the aggregators fetch through:
//! [`QuoteProvider`] for index price series and [`ConversionSource`]
//! for currency conversion tables.

use async_trait::async_trait;

use crate::errors::MarketDataError;
use crate::models::{ConversionTable, PriceBar};

/// Trait for index quote providers.
///
/// Implement this trait to add support for a new quote source. The
/// aggregator never lets errors from this trait escape; every failure
/// is replaced by a fallback record.
///
/// # Example
///
/// ```ignore
/// use async_trait::async_trait;
/// use globefin_market_data::provider::QuoteProvider;
///
/// struct CsvProvider;
///
/// #[async_trait]
/// impl QuoteProvider for CsvProvider {
///     fn id(&self) -> &'static str {
///         "CSV"
///     }
///
///     async fn get_recent_closes(
///         &self,
///         symbol: &str,
///         sessions: u32,
///     ) -> Result<Vec<PriceBar>, MarketDataError> {
///         // ... read the last `sessions` rows for `symbol`
///     }
/// }
/// ```
#[async_trait]
pub trait QuoteProvider: Send + Sync {
    /// Unique identifier for this provider.
    ///
    /// Should be a constant string like "YAHOO". Used for logging and
    /// in error messages.
    fn id(&self) -> &'static str;

    /// Fetch the daily closes of the trailing `sessions` trading days.
    ///
    /// # Returns
    ///
    /// Bars ordered by timestamp ascending. An empty series should be
    /// reported as [`MarketDataError::NoData`].
    async fn get_recent_closes(
        &self,
        symbol: &str,
        sessions: u32,
    ) -> Result<Vec<PriceBar>, MarketDataError>;
}

/// Trait for currency conversion sources.
#[async_trait]
pub trait ConversionSource: Send + Sync {
    /// Unique identifier for this source.
    fn id(&self) -> &'static str;

    /// Fetch the latest conversion table for `base`.
    ///
    /// A logical failure reported inside a successful HTTP response
    /// must be returned as an error, never as an empty table.
    async fn get_latest_rates(&self, base: &str) -> Result<ConversionTable, MarketDataError>;
}
