use std::collections::HashMap;
use std::fmt;

use serde::{Serialize, Serializer};

use super::types::CurrencyCode;

/// Quote currencies every rate record is expressed against, in display order
pub const QUOTE_BASKET: [&str; 4] = ["USD", "INR", "GBP", "EUR"];

/// Rate table as returned by a conversion source
#[derive(Clone, Debug, Default)]
pub struct ConversionTable {
    /// Base currency of the table
    pub base: CurrencyCode,

    /// Units of each currency per one unit of `base`
    pub rates: HashMap<CurrencyCode, f64>,

    /// Provider's own last-update stamp, verbatim
    pub last_updated: Option<String>,
}

/// A single conversion rate, or the sentinel for a missing entry
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RateValue {
    Quoted(f64),
    NotAvailable,
}

impl RateValue {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Quoted(v) => Some(*v),
            Self::NotAvailable => None,
        }
    }
}

impl fmt::Display for RateValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Quoted(v) => write!(f, "{}", v),
            Self::NotAvailable => f.write_str("N/A"),
        }
    }
}

impl Serialize for RateValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Quoted(v) => serializer.serialize_f64(*v),
            Self::NotAvailable => serializer.serialize_str("N/A"),
        }
    }
}

/// Rates of one base currency against the fixed quote basket
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RateTable {
    #[serde(rename = "baseCurrency")]
    pub base_currency: CurrencyCode,
    #[serde(rename = "USD")]
    pub usd: RateValue,
    #[serde(rename = "INR")]
    pub inr: RateValue,
    #[serde(rename = "GBP")]
    pub gbp: RateValue,
    #[serde(rename = "EUR")]
    pub eur: RateValue,
    /// Provider update stamp; empty when the provider sent none
    pub timestamp: String,
}

impl RateTable {
    /// Extract the quote basket from a provider table.
    ///
    /// A currency missing from `table` becomes [`RateValue::NotAvailable`]
    /// without affecting the others.
    pub fn from_conversion(table: &ConversionTable) -> Self {
        let pick = |code: &str| {
            table
                .rates
                .get(code)
                .copied()
                .map(RateValue::Quoted)
                .unwrap_or(RateValue::NotAvailable)
        };

        Self {
            base_currency: table.base.clone(),
            usd: pick("USD"),
            inr: pick("INR"),
            gbp: pick("GBP"),
            eur: pick("EUR"),
            timestamp: table.last_updated.clone().unwrap_or_default(),
        }
    }

    /// Basket entries in display order
    pub fn entries(&self) -> [(&'static str, RateValue); 4] {
        [
            (QUOTE_BASKET[0], self.usd),
            (QUOTE_BASKET[1], self.inr),
            (QUOTE_BASKET[2], self.gbp),
            (QUOTE_BASKET[3], self.eur),
        ]
    }
}

/// Outcome of a rate lookup: either the basket or an error, never both.
///
/// Callers must branch on the variant before reading rate fields.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RateRecord {
    Rates(RateTable),
    Error { error: String },
}

impl RateRecord {
    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            error: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }

    pub fn rates(&self) -> Option<&RateTable> {
        match self {
            Self::Rates(table) => Some(table),
            Self::Error { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(rates: &[(&str, f64)]) -> ConversionTable {
        ConversionTable {
            base: "JPY".to_string(),
            rates: rates.iter().map(|(k, v)| (k.to_string(), *v)).collect(),
            last_updated: Some("Fri, 16 Oct 2026 00:00:01 +0000".to_string()),
        }
    }

    #[test]
    fn test_missing_currency_is_not_available_individually() {
        let rates = RateTable::from_conversion(&table(&[
            ("USD", 0.0067),
            ("GBP", 0.0052),
            ("EUR", 0.0061),
            ("KRW", 9.1),
        ]));

        assert_eq!(rates.usd, RateValue::Quoted(0.0067));
        assert_eq!(rates.inr, RateValue::NotAvailable);
        assert_eq!(rates.gbp, RateValue::Quoted(0.0052));
        assert_eq!(rates.eur, RateValue::Quoted(0.0061));
        assert_eq!(rates.timestamp, "Fri, 16 Oct 2026 00:00:01 +0000");
    }

    #[test]
    fn test_rate_value_display() {
        assert_eq!(RateValue::Quoted(83.12).to_string(), "83.12");
        assert_eq!(RateValue::NotAvailable.to_string(), "N/A");
    }

    #[test]
    fn test_rate_record_shapes_are_exclusive() {
        let ok = RateRecord::Rates(RateTable::from_conversion(&table(&[("USD", 1.0)])));
        let json = serde_json::to_value(&ok).unwrap();
        assert_eq!(json["baseCurrency"], "JPY");
        assert_eq!(json["USD"], 1.0);
        assert_eq!(json["INR"], "N/A");
        assert!(json.get("error").is_none());

        let err = RateRecord::error("Failed to fetch rates for XXX");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["error"], "Failed to fetch rates for XXX");
        assert_eq!(json.as_object().unwrap().len(), 1);
        assert!(err.rates().is_none());
    }
}
