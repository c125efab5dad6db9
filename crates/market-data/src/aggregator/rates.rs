use std::sync::Arc;
use std::time::Duration;

use log::warn;
use tokio::time::timeout;

use crate::errors::MarketDataError;
use crate::models::{RateRecord, RateTable};
use crate::provider::ConversionSource;

/// Fetches the quote basket for a base currency.
pub struct RateAggregator {
    source: Arc<dyn ConversionSource>,
    timeout: Duration,
}

impl RateAggregator {
    pub fn new(source: Arc<dyn ConversionSource>, timeout: Duration) -> Self {
        Self { source, timeout }
    }

    /// One source call, no retry. Failures become an error record.
    pub async fn fetch_rates(&self, base_currency: &str) -> RateRecord {
        let base = base_currency.trim().to_uppercase();
        if base.is_empty() {
            return RateRecord::error("Currency code must not be empty");
        }

        let outcome = match timeout(self.timeout, self.source.get_latest_rates(&base)).await {
            Ok(result) => result,
            Err(_) => Err(MarketDataError::Timeout {
                provider: self.source.id().to_string(),
            }),
        };

        match outcome {
            Ok(mut table) => {
                table.base = base;
                RateRecord::Rates(RateTable::from_conversion(&table))
            }
            Err(e) => {
                warn!("Failed to fetch rates for {}: {}", base, e);
                RateRecord::error(format!("Failed to fetch rates for {}: {}", base, e))
            }
        }
    }
}
