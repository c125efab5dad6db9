use std::collections::HashMap;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::models::{round_2dp, FallbackReason, QuoteRecord, Symbol};
use crate::resolver::Catalog;

use super::JitterPolicy;

/// Substitute values for one index
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FallbackEntry {
    pub current: f64,
    pub change_percent: f64,
}

/// Immutable map of fallback values, keyed by symbol.
#[derive(Clone, Debug, Default)]
pub struct FallbackTable {
    entries: HashMap<Symbol, FallbackEntry>,
}

impl FallbackTable {
    pub fn new(entries: HashMap<Symbol, FallbackEntry>) -> Self {
        Self { entries }
    }

    pub fn from_catalog(catalog: &Catalog) -> Self {
        Self::new(
            catalog
                .indices
                .iter()
                .filter_map(|entry| entry.fallback.map(|f| (entry.symbol.clone(), f)))
                .collect(),
        )
    }

    /// Entry for `symbol`; unconfigured symbols get `current = 0, change = 0`.
    pub fn entry(&self, symbol: &str) -> FallbackEntry {
        self.entries.get(symbol).copied().unwrap_or_default()
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.entries.contains_key(symbol)
    }

    /// Build a fallback record for `symbol` with a jittered change.
    pub fn synthesize<R: Rng>(
        &self,
        symbol: &str,
        reason: FallbackReason,
        jitter: &JitterPolicy,
        rng: &mut R,
    ) -> QuoteRecord {
        let entry = self.entry(symbol);
        let change = round_2dp(entry.change_percent + jitter.sample(rng));
        QuoteRecord::fallback(symbol, entry.current, change, reason)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::QuoteSource;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn table() -> FallbackTable {
        FallbackTable::from_catalog(&Catalog::embedded())
    }

    #[test]
    fn test_configured_symbol_keeps_current_and_jitters_change() {
        let mut rng = StdRng::seed_from_u64(42);
        let record = table().synthesize(
            "^N225",
            FallbackReason::Timeout,
            &JitterPolicy::default(),
            &mut rng,
        );

        assert_eq!(record.current, 28500.45);
        assert!(record.change_percent >= 0.73 && record.change_percent <= 1.73);
        assert_eq!(record.source, QuoteSource::Fallback);
        assert_eq!(record.fallback_reason, Some(FallbackReason::Timeout));
    }

    #[test]
    fn test_unconfigured_symbol_defaults_to_zero() {
        let table = table();
        assert!(!table.contains("^ZZZZ"));

        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..100 {
            let record = table.synthesize(
                "^ZZZZ",
                FallbackReason::ProviderError,
                &JitterPolicy::default(),
                &mut rng,
            );
            assert_eq!(record.current, 0.0);
            assert!((-0.5..=0.5).contains(&record.change_percent));
        }
    }

    #[test]
    fn test_without_jitter_change_is_exact() {
        let mut rng = StdRng::seed_from_u64(3);
        let record = table().synthesize(
            "000001.SS",
            FallbackReason::NoData,
            &JitterPolicy::none(),
            &mut rng,
        );
        assert_eq!(record.current, 3456.78);
        assert_eq!(record.change_percent, -0.23);
    }
}
