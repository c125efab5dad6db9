//! Yahoo Finance quote provider.
//!
//! Fetches the trailing window of daily closes for stock indices
//! (e.g. ^N225, ^GSPC, 000001.SS) through the chart API, with the
//! quoteSummary `price` module as a backup source.

mod models;

use std::sync::RwLock;

use async_trait::async_trait;
use chrono::{DateTime, Duration as ChronoDuration, TimeZone, Utc};
use lazy_static::lazy_static;
use reqwest::header;
use tracing::{debug, warn};
use urlencoding::encode;
use yahoo_finance_api as yahoo;

use crate::errors::MarketDataError;
use crate::models::PriceBar;
use crate::provider::QuoteProvider;

use models::YahooQuoteSummaryResponse;

const PROVIDER_ID: &str = "YAHOO";

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

// ============================================================================
// Crumb/Cookie Authentication
// ============================================================================

/// Cached Yahoo authentication data
#[derive(Debug, Clone)]
struct CrumbData {
    cookie: String,
    crumb: String,
}

lazy_static! {
    /// Global cache for Yahoo authentication crumb
    static ref YAHOO_CRUMB: RwLock<Option<CrumbData>> = RwLock::default();
}

fn provider_error(message: impl Into<String>) -> MarketDataError {
    MarketDataError::ProviderError {
        provider: PROVIDER_ID.to_string(),
        message: message.into(),
    }
}

/// Only transport or upstream failures are retried on quoteSummary.
/// An empty chart series means the symbol has no data and goes to fallback.
fn should_try_backup(error: &MarketDataError) -> bool {
    !matches!(error, MarketDataError::NoData(_))
}

// ============================================================================
// Yahoo Provider
// ============================================================================

/// Yahoo Finance quote provider.
pub struct YahooProvider {
    connector: yahoo::YahooConnector,
    client: reqwest::Client,
}

impl YahooProvider {
    /// Create a new Yahoo Finance provider.
    pub fn new() -> Result<Self, MarketDataError> {
        let connector = yahoo::YahooConnector::new()
            .map_err(|e| provider_error(format!("Failed to initialize Yahoo connector: {}", e)))?;
        Ok(Self {
            connector,
            client: reqwest::Client::new(),
        })
    }

    // ========================================================================
    // Crumb/Cookie Authentication
    // ========================================================================

    /// Ensure we have a valid Yahoo authentication crumb.
    async fn ensure_crumb(&self) -> Result<CrumbData, MarketDataError> {
        if let Some(crumb) = YAHOO_CRUMB.read().ok().and_then(|guard| guard.clone()) {
            return Ok(crumb);
        }

        self.fetch_crumb().await
    }

    /// Fetch a new Yahoo authentication crumb.
    async fn fetch_crumb(&self) -> Result<CrumbData, MarketDataError> {
        // Step 1: Get cookie from fc.yahoo.com
        let response = self
            .client
            .get("https://fc.yahoo.com")
            .send()
            .await
            .map_err(|e| provider_error(format!("Failed to get cookie: {}", e)))?;

        let cookie = response
            .headers()
            .get(header::SET_COOKIE)
            .and_then(|h| h.to_str().ok())
            .and_then(|s| s.split_once(';').map(|(v, _)| v.to_string()))
            .ok_or_else(|| provider_error("Failed to parse Yahoo cookie"))?;

        // Step 2: Get crumb using cookie
        let crumb = self
            .client
            .get("https://query1.finance.yahoo.com/v1/test/getcrumb")
            .header(header::USER_AGENT, USER_AGENT)
            .header(header::COOKIE, &cookie)
            .send()
            .await
            .map_err(|e| provider_error(format!("Failed to get crumb: {}", e)))?
            .text()
            .await
            .map_err(|e| provider_error(format!("Failed to read crumb: {}", e)))?;

        let crumb_data = CrumbData { cookie, crumb };

        if let Ok(mut guard) = YAHOO_CRUMB.write() {
            *guard = Some(crumb_data.clone());
        }

        Ok(crumb_data)
    }

    /// Clear the cached crumb (used when authentication fails)
    fn clear_crumb(&self) {
        if let Ok(mut guard) = YAHOO_CRUMB.write() {
            *guard = None;
        }
    }

    // ========================================================================
    // Quote Fetching
    // ========================================================================

    /// Convert a Yahoo quote to a price bar, skipping invalid timestamps.
    fn yahoo_quote_to_bar(yahoo_quote: &yahoo::Quote) -> Option<PriceBar> {
        let timestamp: DateTime<Utc> = Utc
            .timestamp_opt(yahoo_quote.timestamp as i64, 0)
            .single()?;
        Some(PriceBar::new(timestamp, yahoo_quote.close))
    }

    /// Fetch daily closes using the primary method (chart API).
    async fn fetch_closes_primary(
        &self,
        symbol: &str,
        sessions: u32,
    ) -> Result<Vec<PriceBar>, MarketDataError> {
        let range = format!("{}d", sessions.max(1));

        let response = self
            .connector
            .get_quote_range(symbol, "1d", &range)
            .await
            .map_err(|e| {
                if matches!(e, yahoo::YahooError::NoQuotes | yahoo::YahooError::NoResult) {
                    MarketDataError::NoData(symbol.to_string())
                } else {
                    provider_error(e.to_string())
                }
            })?;

        match response.quotes() {
            Ok(yahoo_quotes) => {
                let bars: Vec<PriceBar> = yahoo_quotes
                    .iter()
                    .filter_map(Self::yahoo_quote_to_bar)
                    .collect();

                if bars.is_empty() {
                    return Err(MarketDataError::NoData(symbol.to_string()));
                }

                Ok(bars)
            }
            Err(yahoo::YahooError::NoQuotes) => Err(MarketDataError::NoData(symbol.to_string())),
            Err(e) => Err(provider_error(e.to_string())),
        }
    }

    /// Fetch latest and previous close using the backup method (quoteSummary API).
    async fn fetch_closes_backup(&self, symbol: &str) -> Result<Vec<PriceBar>, MarketDataError> {
        let crumb = self.ensure_crumb().await?;

        let url = format!(
            "https://query1.finance.yahoo.com/v10/finance/quoteSummary/{}?modules=price&crumb={}",
            encode(symbol),
            encode(&crumb.crumb)
        );

        let response = self
            .client
            .get(&url)
            .header(header::USER_AGENT, USER_AGENT)
            .header(header::COOKIE, &crumb.cookie)
            .send()
            .await
            .map_err(|e| provider_error(format!("Backup quote request failed: {}", e)))?;

        if response.status() == reqwest::StatusCode::UNAUTHORIZED {
            self.clear_crumb();
            return Err(provider_error("Yahoo authentication expired"));
        }

        let data: YahooQuoteSummaryResponse = response
            .json()
            .await
            .map_err(|e| provider_error(format!("Failed to parse backup quote response: {}", e)))?;

        let price = data
            .quote_summary
            .result
            .first()
            .and_then(|r| r.price.as_ref())
            .ok_or_else(|| MarketDataError::NoData(symbol.to_string()))?;

        let Some(close) = price.regular_market_price.as_ref().and_then(|p| p.raw) else {
            return Err(MarketDataError::NoData(symbol.to_string()));
        };

        let timestamp = price
            .regular_market_time
            .and_then(|ts| Utc.timestamp_opt(ts, 0).single())
            .unwrap_or_else(Utc::now);

        let mut bars = Vec::with_capacity(2);
        if let Some(previous) = price
            .regular_market_previous_close
            .as_ref()
            .and_then(|p| p.raw)
        {
            bars.push(PriceBar::new(timestamp - ChronoDuration::days(1), previous));
        }
        bars.push(PriceBar::new(timestamp, close));

        Ok(bars)
    }
}

// ============================================================================
// QuoteProvider Implementation
// ============================================================================

#[async_trait]
impl QuoteProvider for YahooProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn get_recent_closes(
        &self,
        symbol: &str,
        sessions: u32,
    ) -> Result<Vec<PriceBar>, MarketDataError> {
        debug!("Fetching {} daily closes for {} from Yahoo", sessions, symbol);

        let primary_error = match self.fetch_closes_primary(symbol, sessions).await {
            Ok(bars) => return Ok(bars),
            Err(e) => e,
        };

        if !should_try_backup(&primary_error) {
            debug!("No chart data for {}, skipping backup", symbol);
            return Err(primary_error);
        }

        debug!(
            "Primary quote fetch failed for {}: {}, trying backup",
            symbol, primary_error
        );

        match self.fetch_closes_backup(symbol).await {
            Ok(bars) => Ok(bars),
            Err(backup_error) => {
                warn!("Backup quote fetch failed for {}: {}", symbol, backup_error);
                // The chart API error is the more specific of the two
                Err(primary_error)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_error_helper() {
        let error = provider_error("boom");
        assert_eq!(format!("{}", error), "Provider error: YAHOO - boom");
    }

    #[test]
    fn test_backup_skipped_for_empty_series() {
        assert!(!should_try_backup(&MarketDataError::NoData("^DELISTED".to_string())));
        assert!(should_try_backup(&provider_error("HTTP 500")));
        assert!(should_try_backup(&MarketDataError::Timeout {
            provider: PROVIDER_ID.to_string(),
        }));
    }
}
