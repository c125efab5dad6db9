//! JSON-driven reference catalog.
//!
//! Loads `catalog.json` at compile time via `include_str!` and parses it
//! once via `lazy_static`. A deployment may replace it with an external
//! file of the same shape at startup.

use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

use lazy_static::lazy_static;
use serde::Deserialize;

use crate::errors::MarketDataError;
use crate::fallback::FallbackEntry;
use crate::models::{CountryConfig, Symbol};

// ── JSON schema ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
pub struct IndexEntry {
    pub symbol: Symbol,
    pub name: String,
    /// Values substituted when the quote source fails for this symbol
    #[serde(default)]
    pub fallback: Option<FallbackEntry>,
}

/// Countries and indices known to the service.
#[derive(Debug, Clone, Deserialize)]
pub struct Catalog {
    /// Country configurations, in display order
    pub countries: Vec<CountryConfig>,
    #[serde(default)]
    pub indices: Vec<IndexEntry>,
}

lazy_static! {
    static ref EMBEDDED: Arc<Catalog> = Arc::new(
        Catalog::from_json(include_str!("catalog.json")).expect("catalog.json must be valid")
    );
}

impl Catalog {
    /// The catalog compiled into the binary.
    pub fn embedded() -> Arc<Catalog> {
        Arc::clone(&EMBEDDED)
    }

    /// Parse and validate a catalog document.
    pub fn from_json(json: &str) -> Result<Self, MarketDataError> {
        let catalog: Catalog =
            serde_json::from_str(json).map_err(|e| MarketDataError::InvalidCatalog(e.to_string()))?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Read a catalog from disk.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, MarketDataError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    fn validate(&self) -> Result<(), MarketDataError> {
        if self.countries.is_empty() {
            return Err(MarketDataError::InvalidCatalog(
                "no countries configured".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for country in &self.countries {
            if country.name.trim().is_empty() {
                return Err(MarketDataError::InvalidCatalog(
                    "country with blank name".to_string(),
                ));
            }
            if !seen.insert(country.name.to_lowercase()) {
                return Err(MarketDataError::InvalidCatalog(format!(
                    "duplicate country {}",
                    country.name
                )));
            }
            if let Some(symbol) = country.symbols.iter().find(|s| s.trim().is_empty()) {
                return Err(MarketDataError::InvalidCatalog(format!(
                    "blank symbol '{}' for {}",
                    symbol, country.name
                )));
            }
        }

        Ok(())
    }
}
