//! Market data models
//!
//! This module contains the core data types for market data operations:
//! - `types` - Type aliases for common identifiers (Symbol, CurrencyCode)
//! - `quote` - Quote data structures (PriceBar, QuoteRecord, IndexQuotes)
//! - `rates` - Conversion rate structures (ConversionTable, RateRecord)
//! - `country` - Static per-country configuration (CountryConfig, Coordinates)

mod country;
mod quote;
mod rates;
mod types;

pub use country::{Coordinates, CountryConfig};
pub(crate) use quote::round_2dp;
pub use quote::{FallbackReason, IndexQuotes, NamedQuote, PriceBar, QuoteRecord, QuoteSource};
pub use rates::{ConversionTable, RateRecord, RateTable, RateValue, QUOTE_BASKET};
pub use types::{CurrencyCode, Symbol};
