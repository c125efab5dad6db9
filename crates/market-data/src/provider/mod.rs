//! Market data provider abstractions and implementations.
//!
//! This module contains:
//! - The [`QuoteProvider`] trait for index price series
//! - The [`ConversionSource`] trait for currency conversion tables
//! - Concrete implementations (Yahoo Finance, ExchangeRate-API)
//!
//! Providers only fetch and parse. Timeouts, fallback substitution and
//! change computation happen in the aggregator module.

mod traits;

pub mod exchange_rate_api;
pub mod yahoo;

// Re-exports
pub use traits::{ConversionSource, QuoteProvider};
