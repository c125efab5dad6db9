use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::types::Symbol;

/// Round to two decimal places, the precision every quote is reported in.
/// Negative zero is normalized to zero.
pub(crate) fn round_2dp(value: f64) -> f64 {
    (value * 100.0).round() / 100.0 + 0.0
}

/// One daily observation returned by a quote source
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PriceBar {
    /// Session timestamp
    pub timestamp: DateTime<Utc>,

    /// Closing price of the session
    pub close: f64,
}

impl PriceBar {
    pub fn new(timestamp: DateTime<Utc>, close: f64) -> Self {
        Self { timestamp, close }
    }

    /// A bar is priced when its close is a finite, non-negative number.
    pub fn is_priced(&self) -> bool {
        self.close.is_finite() && self.close >= 0.0
    }
}

/// Where a quote record came from
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QuoteSource {
    Live,
    Fallback,
}

/// Why the live path was abandoned for a symbol
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FallbackReason {
    /// The source answered with an empty series
    NoData,
    /// The source failed (network, HTTP status, payload)
    ProviderError,
    /// The source did not answer within the per-call timeout
    Timeout,
}

/// Per-symbol result of an index fetch
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRecord {
    pub symbol: Symbol,

    /// Latest value of the index
    pub current: f64,

    /// Change against the previous session, in percentage points
    pub change_percent: f64,

    /// When this record was produced
    pub last_update: DateTime<Utc>,

    pub source: QuoteSource,

    /// Set only for fallback records
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback_reason: Option<FallbackReason>,
}

impl QuoteRecord {
    /// Create a record built from live data
    pub fn live(symbol: impl Into<Symbol>, current: f64, change_percent: f64) -> Self {
        Self {
            symbol: symbol.into(),
            current,
            change_percent,
            last_update: Utc::now(),
            source: QuoteSource::Live,
            fallback_reason: None,
        }
    }

    /// Create a record synthesized from the fallback table
    pub fn fallback(
        symbol: impl Into<Symbol>,
        current: f64,
        change_percent: f64,
        reason: FallbackReason,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            current,
            change_percent,
            last_update: Utc::now(),
            source: QuoteSource::Fallback,
            fallback_reason: Some(reason),
        }
    }

    pub fn is_live(&self) -> bool {
        self.source == QuoteSource::Live
    }
}

/// Ordered result of a multi-symbol fetch.
///
/// Holds exactly one record per requested symbol, in request order.
/// Duplicate symbols in the request produce duplicate records.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IndexQuotes {
    records: Vec<QuoteRecord>,
}

impl IndexQuotes {
    pub fn new(records: Vec<QuoteRecord>) -> Self {
        Self { records }
    }

    /// First record for `symbol`, if it was requested
    pub fn get(&self, symbol: &str) -> Option<&QuoteRecord> {
        self.records.iter().find(|r| r.symbol == symbol)
    }

    pub fn iter(&self) -> impl Iterator<Item = &QuoteRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of records that had to be synthesized
    pub fn fallback_count(&self) -> usize {
        self.records.iter().filter(|r| !r.is_live()).count()
    }

    pub fn into_records(self) -> Vec<QuoteRecord> {
        self.records
    }
}

impl IntoIterator for IndexQuotes {
    type Item = QuoteRecord;
    type IntoIter = std::vec::IntoIter<QuoteRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

/// A quote record paired with the index display name
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NamedQuote {
    pub name: String,
    #[serde(flatten)]
    pub quote: QuoteRecord,
}
