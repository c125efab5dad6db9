use std::sync::Arc;

use futures::future::join_all;
use log::{debug, warn};
use tokio::time::timeout;

use crate::errors::MarketDataError;
use crate::fallback::FallbackTable;
use crate::models::{round_2dp, FallbackReason, IndexQuotes, PriceBar, QuoteRecord, Symbol};
use crate::provider::QuoteProvider;

use super::MarketDataConfig;

/// Build a live record from a provider series.
///
/// `current` is the latest priced close. The change is measured against the
/// close before it, and is zero when there is no such close or it is zero.
pub fn quote_from_bars(symbol: &str, bars: &[PriceBar]) -> Result<QuoteRecord, MarketDataError> {
    let mut priced: Vec<&PriceBar> = bars.iter().filter(|b| b.is_priced()).collect();
    priced.sort_by_key(|b| b.timestamp);

    let (latest, previous) = match priced.as_slice() {
        [] => return Err(MarketDataError::NoData(symbol.to_string())),
        [only] => (only.close, None),
        [.., previous, latest] => (latest.close, Some(previous.close)),
    };

    let change_percent = match previous {
        Some(prev) if prev != 0.0 => round_2dp((latest - prev) / prev * 100.0),
        _ => 0.0,
    };

    Ok(QuoteRecord::live(symbol, round_2dp(latest), change_percent))
}

/// Fetches index quotes and substitutes fallback data per symbol.
pub struct MarketDataAggregator {
    provider: Arc<dyn QuoteProvider>,
    fallback: Arc<FallbackTable>,
    config: MarketDataConfig,
}

impl MarketDataAggregator {
    pub fn new(
        provider: Arc<dyn QuoteProvider>,
        fallback: Arc<FallbackTable>,
        config: MarketDataConfig,
    ) -> Self {
        Self {
            provider,
            fallback,
            config,
        }
    }

    pub fn config(&self) -> &MarketDataConfig {
        &self.config
    }

    /// Fetch one record per symbol, in request order.
    ///
    /// Provider failures never surface here; they become fallback records.
    /// The only error is a blank symbol, checked before any fetch starts.
    pub async fn fetch_indices(&self, symbols: &[Symbol]) -> Result<IndexQuotes, MarketDataError> {
        if let Some(blank) = symbols.iter().find(|s| s.trim().is_empty()) {
            return Err(MarketDataError::InvalidSymbol(blank.clone()));
        }

        let records = if self.config.concurrent_fetch {
            join_all(symbols.iter().map(|s| self.fetch_one(s))).await
        } else {
            let mut records = Vec::with_capacity(symbols.len());
            for symbol in symbols {
                records.push(self.fetch_one(symbol).await);
            }
            records
        };

        let quotes = IndexQuotes::new(records);
        debug!(
            "Fetched {} index quotes ({} fallback)",
            quotes.len(),
            quotes.fallback_count()
        );
        Ok(quotes)
    }

    async fn fetch_one(&self, symbol: &str) -> QuoteRecord {
        let call = self
            .provider
            .get_recent_closes(symbol, self.config.trailing_sessions);

        let outcome = match timeout(self.config.quote_timeout, call).await {
            Ok(Ok(bars)) => quote_from_bars(symbol, &bars),
            Ok(Err(e)) => Err(e),
            Err(_) => Err(MarketDataError::Timeout {
                provider: self.provider.id().to_string(),
            }),
        };

        match outcome {
            Ok(record) => record,
            Err(e) => {
                let reason = e.fallback_reason();
                warn!(
                    "Using fallback data for {} ({:?}): {}",
                    symbol, reason, e
                );
                self.synthesize(symbol, reason)
            }
        }
    }

    fn synthesize(&self, symbol: &str, reason: FallbackReason) -> QuoteRecord {
        let mut rng = rand::thread_rng();
        self.fallback
            .synthesize(symbol, reason, &self.config.jitter, &mut rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::QuoteSource;
    use crate::resolver::Catalog;
    use async_trait::async_trait;
    use chrono::{Duration as ChronoDuration, TimeZone, Utc};
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    enum Behavior {
        Series(Vec<f64>),
        Fail,
        Hang,
    }

    struct StubProvider {
        behaviors: HashMap<String, Behavior>,
        call_count: AtomicUsize,
    }

    impl StubProvider {
        fn new(behaviors: Vec<(&str, Behavior)>) -> Self {
            Self {
                behaviors: behaviors
                    .into_iter()
                    .map(|(s, b)| (s.to_string(), b))
                    .collect(),
                call_count: AtomicUsize::new(0),
            }
        }
    }

    fn bars(closes: &[f64]) -> Vec<PriceBar> {
        let start = Utc.with_ymd_and_hms(2026, 10, 12, 21, 0, 0).unwrap();
        closes
            .iter()
            .enumerate()
            .map(|(i, c)| PriceBar::new(start + ChronoDuration::days(i as i64), *c))
            .collect()
    }

    #[async_trait]
    impl QuoteProvider for StubProvider {
        fn id(&self) -> &'static str {
            "STUB"
        }

        async fn get_recent_closes(
            &self,
            symbol: &str,
            _sessions: u32,
        ) -> Result<Vec<PriceBar>, MarketDataError> {
            self.call_count.fetch_add(1, Ordering::SeqCst);
            match self.behaviors.get(symbol) {
                Some(Behavior::Series(closes)) => Ok(bars(closes)),
                Some(Behavior::Hang) => {
                    tokio::time::sleep(Duration::from_secs(3600)).await;
                    Ok(Vec::new())
                }
                Some(Behavior::Fail) | None => Err(MarketDataError::ProviderError {
                    provider: "STUB".to_string(),
                    message: "Mock failure".to_string(),
                }),
            }
        }
    }

    fn aggregator(provider: StubProvider, config: MarketDataConfig) -> MarketDataAggregator {
        MarketDataAggregator::new(
            Arc::new(provider),
            Arc::new(FallbackTable::from_catalog(&Catalog::embedded())),
            config,
        )
    }

    fn symbols(list: &[&str]) -> Vec<Symbol> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_quote_from_bars() {
        let record = quote_from_bars("^N225", &bars(&[100.0, 102.0, 101.0, 105.0, 110.0])).unwrap();
        assert_eq!(record.current, 110.0);
        assert_eq!(record.change_percent, 4.76);
        assert_eq!(record.source, QuoteSource::Live);
    }

    #[test]
    fn test_quote_from_single_bar_has_zero_change() {
        let record = quote_from_bars("^FTSE", &bars(&[8234.561])).unwrap();
        assert_eq!(record.current, 8234.56);
        assert_eq!(record.change_percent, 0.0);
    }

    #[test]
    fn test_quote_from_bars_skips_unpriced() {
        let record = quote_from_bars("^DJI", &bars(&[200.0, 100.0, f64::NAN])).unwrap();
        assert_eq!(record.current, 100.0);
        assert_eq!(record.change_percent, -50.0);

        let err = quote_from_bars("^DJI", &bars(&[f64::NAN])).unwrap_err();
        assert!(matches!(err, MarketDataError::NoData(_)));
    }

    #[test]
    fn test_zero_previous_close_has_zero_change() {
        let record = quote_from_bars("^KS11", &bars(&[0.0, 10.0])).unwrap();
        assert_eq!(record.change_percent, 0.0);
    }

    #[tokio::test]
    async fn test_live_series() {
        let provider = StubProvider::new(vec![(
            "^N225",
            Behavior::Series(vec![100.0, 102.0, 101.0, 105.0, 110.0]),
        )]);
        let quotes = aggregator(provider, MarketDataConfig::default())
            .fetch_indices(&symbols(&["^N225"]))
            .await
            .unwrap();

        let record = quotes.get("^N225").unwrap();
        assert_eq!(record.current, 110.0);
        assert_eq!(record.change_percent, 4.76);
        assert!(record.is_live());
    }

    #[tokio::test]
    async fn test_unknown_symbol_error_uses_zero_fallback() {
        let provider = StubProvider::new(vec![("^ZZZZ", Behavior::Fail)]);
        let quotes = aggregator(provider, MarketDataConfig::default())
            .fetch_indices(&symbols(&["^ZZZZ"]))
            .await
            .unwrap();

        let record = quotes.get("^ZZZZ").unwrap();
        assert_eq!(record.current, 0.0);
        assert!((-0.5..=0.5).contains(&record.change_percent));
        assert_eq!(record.source, QuoteSource::Fallback);
        assert_eq!(record.fallback_reason, Some(FallbackReason::ProviderError));
    }

    #[tokio::test]
    async fn test_empty_series_falls_back_with_no_data() {
        let provider = StubProvider::new(vec![("^TOPIX", Behavior::Series(vec![]))]);
        let quotes = aggregator(provider, MarketDataConfig::default())
            .fetch_indices(&symbols(&["^TOPIX"]))
            .await
            .unwrap();

        let record = quotes.get("^TOPIX").unwrap();
        assert_eq!(record.current, 2010.8);
        assert!(record.change_percent >= -0.05 && record.change_percent <= 0.95);
        assert_eq!(record.fallback_reason, Some(FallbackReason::NoData));
    }

    #[tokio::test(start_paused = true)]
    async fn test_timeout_falls_back() {
        let provider = StubProvider::new(vec![
            ("^GSPC", Behavior::Hang),
            ("^DJI", Behavior::Series(vec![42000.0, 42420.0])),
        ]);
        let quotes = aggregator(provider, MarketDataConfig::default())
            .fetch_indices(&symbols(&["^GSPC", "^DJI"]))
            .await
            .unwrap();

        let gspc = quotes.get("^GSPC").unwrap();
        assert_eq!(gspc.current, 5234.8);
        assert_eq!(gspc.fallback_reason, Some(FallbackReason::Timeout));

        let dji = quotes.get("^DJI").unwrap();
        assert!(dji.is_live());
        assert_eq!(dji.change_percent, 1.0);
    }

    #[tokio::test]
    async fn test_order_and_duplicates_preserved() {
        let requested = symbols(&["^IXIC", "^FTSE", "^IXIC", "^ZZZZ"]);

        for concurrent_fetch in [true, false] {
            let provider = Arc::new(StubProvider::new(vec![
                ("^IXIC", Behavior::Series(vec![1.0, 2.0])),
                ("^FTSE", Behavior::Fail),
            ]));
            let aggregator = MarketDataAggregator::new(
                provider.clone(),
                Arc::new(FallbackTable::from_catalog(&Catalog::embedded())),
                MarketDataConfig {
                    concurrent_fetch,
                    ..MarketDataConfig::default()
                },
            );

            let quotes = aggregator.fetch_indices(&requested).await.unwrap();

            let got: Vec<&str> = quotes.iter().map(|r| r.symbol.as_str()).collect();
            assert_eq!(got, vec!["^IXIC", "^FTSE", "^IXIC", "^ZZZZ"]);
            assert_eq!(quotes.fallback_count(), 2);
            assert_eq!(provider.call_count.load(Ordering::SeqCst), 4);
        }
    }

    #[tokio::test]
    async fn test_blank_symbol_is_rejected_before_fetching() {
        let provider = Arc::new(StubProvider::new(vec![]));
        let aggregator = MarketDataAggregator::new(
            provider.clone(),
            Arc::new(FallbackTable::default()),
            MarketDataConfig::default(),
        );

        let err = aggregator
            .fetch_indices(&symbols(&["^N225", "  "]))
            .await
            .unwrap_err();
        assert!(matches!(err, MarketDataError::InvalidSymbol(_)));
        assert_eq!(provider.call_count.load(Ordering::SeqCst), 0);
    }
}
