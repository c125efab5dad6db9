//! Environment abstraction for the agent tools.
//!
//! This module provides the `AiEnvironment` trait that abstracts runtime
//! dependencies. The server implements it over its application state; tests
//! implement it over stub providers.

use std::sync::Arc;

use globefin_market_data::MarketService;

/// Environment abstraction for the agent tools.
pub trait AiEnvironment: Send + Sync {
    /// Get the market service backing every lookup.
    fn market_service(&self) -> Arc<MarketService>;
}

#[cfg(test)]
pub mod test_env {
    use super::*;
    use async_trait::async_trait;
    use chrono::{Duration, TimeZone, Utc};
    use globefin_market_data::{
        Catalog, ConversionSource, ConversionTable, JitterPolicy, MarketDataConfig,
        MarketDataError, PriceBar, QuoteProvider,
    };

    /// Quote provider serving `[100, 102, 101, 105, 110]` for every symbol
    /// except ^TOPIX, which fails.
    pub struct MockQuoteProvider;

    #[async_trait]
    impl QuoteProvider for MockQuoteProvider {
        fn id(&self) -> &'static str {
            "MOCK"
        }

        async fn get_recent_closes(
            &self,
            symbol: &str,
            _sessions: u32,
        ) -> Result<Vec<PriceBar>, MarketDataError> {
            if symbol == "^TOPIX" {
                return Err(MarketDataError::ProviderError {
                    provider: "MOCK".to_string(),
                    message: "Mock failure".to_string(),
                });
            }
            let start = Utc.with_ymd_and_hms(2026, 10, 12, 6, 0, 0).unwrap();
            Ok([100.0, 102.0, 101.0, 105.0, 110.0]
                .iter()
                .enumerate()
                .map(|(i, c)| PriceBar::new(start + Duration::days(i as i64), *c))
                .collect())
        }
    }

    /// Conversion source that knows USD, INR and EUR but not GBP, and
    /// rejects the XXX code.
    pub struct MockConversionSource;

    #[async_trait]
    impl ConversionSource for MockConversionSource {
        fn id(&self) -> &'static str {
            "MOCK"
        }

        async fn get_latest_rates(&self, base: &str) -> Result<ConversionTable, MarketDataError> {
            if base == "XXX" {
                return Err(MarketDataError::ProviderError {
                    provider: "MOCK".to_string(),
                    message: "unsupported-code".to_string(),
                });
            }
            Ok(ConversionTable {
                base: base.to_string(),
                rates: [("USD", 0.0067), ("INR", 0.56), ("EUR", 0.0061)]
                    .into_iter()
                    .map(|(k, v)| (k.to_string(), v))
                    .collect(),
                last_updated: Some("Fri, 16 Oct 2026 00:00:01 +0000".to_string()),
            })
        }
    }

    /// Mock environment over the embedded catalog, with jitter disabled.
    pub struct MockEnvironment {
        service: Arc<MarketService>,
    }

    impl MockEnvironment {
        pub fn new() -> Self {
            let config = MarketDataConfig {
                jitter: JitterPolicy::none(),
                ..MarketDataConfig::default()
            };
            Self {
                service: Arc::new(MarketService::new(
                    &Catalog::embedded(),
                    Arc::new(MockQuoteProvider),
                    Arc::new(MockConversionSource),
                    config,
                )),
            }
        }
    }

    impl AiEnvironment for MockEnvironment {
        fn market_service(&self) -> Arc<MarketService> {
            Arc::clone(&self.service)
        }
    }
}
