//! Globefin Market Data Crate
//!
//! This crate provides resilient retrieval of per-country financial
//! reference data: stock-index quotes and currency conversion rates.
//!
//! # Overview
//!
//! The market data crate supports:
//! - Live index quotes from Yahoo Finance, with per-symbol fallback data
//! - Conversion rates from ExchangeRate-API against a fixed quote basket
//! - A static catalog of countries, exchanges and index display names
//! - Country-level views (dashboard snapshot, comparison, exchange location)
//!
//! # Architecture
//!
//! ```text
//!                     +------------------+
//!                     |  MarketService   |  (country views)
//!                     +------------------+
//!                       |              |
//!                       v              v
//!        +----------------------+  +----------------+
//!        | MarketDataAggregator |  | RateAggregator |
//!        +----------------------+  +----------------+
//!          |                |              |
//!          v                v              v
//!  +---------------+  +-----------+  +------------------+
//!  | QuoteProvider |  | Fallback  |  | ConversionSource |
//!  |    (Yahoo)    |  |   Table   |  | (ExchangeRate-API)|
//!  +---------------+  +-----------+  +------------------+
//! ```
//!
//! Quote failures never escape the aggregator: each failed symbol is
//! replaced by a fallback record tagged with the reason. Rate failures
//! become an error record.
//!
//! # Core Types
//!
//! - [`QuoteRecord`] - One index quote, live or fallback
//! - [`IndexQuotes`] - Ordered per-symbol results of a fetch
//! - [`RateRecord`] - Quote basket for a base currency, or an error
//! - [`CountryConfig`] - Static per-country configuration
//! - [`Catalog`] - Countries and indices, embedded or loaded from a file

pub mod aggregator;
pub mod errors;
pub mod fallback;
pub mod models;
pub mod provider;
pub mod resolver;
pub mod service;

// Re-export all public types from models
pub use models::{
    Coordinates, ConversionTable, CountryConfig, CurrencyCode, FallbackReason, IndexQuotes,
    NamedQuote, PriceBar, QuoteRecord, QuoteSource, RateRecord, RateTable, RateValue, Symbol,
    QUOTE_BASKET,
};

// Re-export component types
pub use aggregator::{MarketDataAggregator, MarketDataConfig, RateAggregator};
pub use errors::MarketDataError;
pub use fallback::{FallbackEntry, FallbackTable, JitterPolicy};
pub use resolver::{Catalog, CountryRegistry, IndexEntry, IndexResolver};
pub use service::{ComparisonRow, CountrySnapshot, ExchangeLocation, MarketService};

// Re-export provider types
pub use provider::exchange_rate_api::ExchangeRateApiProvider;
pub use provider::yahoo::YahooProvider;
pub use provider::{ConversionSource, QuoteProvider};
