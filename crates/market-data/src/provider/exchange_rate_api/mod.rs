//! ExchangeRate-API conversion source.
//!
//! Fetches the latest conversion table for a base currency from the v6
//! `latest` endpoint: `{base_url}/{api_key}/latest/{base}`.

mod models;

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use urlencoding::encode;

use crate::errors::MarketDataError;
use crate::models::ConversionTable;
use crate::provider::ConversionSource;

use models::LatestRatesResponse;

/// Provider ID constant
const PROVIDER_ID: &str = "EXCHANGE_RATE_API";

/// Public v6 endpoint
pub const DEFAULT_BASE_URL: &str = "https://v6.exchangerate-api.com/v6";

/// Default HTTP request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

fn provider_error(message: impl Into<String>) -> MarketDataError {
    MarketDataError::ProviderError {
        provider: PROVIDER_ID.to_string(),
        message: message.into(),
    }
}

/// ExchangeRate-API conversion source.
///
/// # Example
///
/// ```ignore
/// use globefin_market_data::provider::exchange_rate_api::ExchangeRateApiProvider;
///
/// let source = ExchangeRateApiProvider::new(Some("your_api_key".to_string()));
/// ```
pub struct ExchangeRateApiProvider {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl ExchangeRateApiProvider {
    /// Create a source against the public endpoint.
    pub fn new(api_key: Option<String>) -> Self {
        Self::with_base_url(DEFAULT_BASE_URL, api_key, REQUEST_TIMEOUT)
    }

    /// Create a source against a custom endpoint.
    pub fn with_base_url(base_url: &str, api_key: Option<String>, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.filter(|k| !k.trim().is_empty()),
        }
    }

    fn latest_url(&self, api_key: &str, base: &str) -> String {
        format!("{}/{}/latest/{}", self.base_url, encode(api_key), encode(base))
    }
}

#[async_trait]
impl ConversionSource for ExchangeRateApiProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn get_latest_rates(&self, base: &str) -> Result<ConversionTable, MarketDataError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| MarketDataError::MissingApiKey {
                provider: PROVIDER_ID.to_string(),
            })?;

        debug!("Fetching conversion rates for {}", base);

        let response = self
            .client
            .get(self.latest_url(api_key, base))
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    MarketDataError::Timeout {
                        provider: PROVIDER_ID.to_string(),
                    }
                } else {
                    provider_error(e.to_string())
                }
            })?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| provider_error(format!("Failed to read response: {}", e)))?;
        let parsed = serde_json::from_str::<LatestRatesResponse>(&text);

        // Error responses usually carry `error-type`, even on 4xx
        if !status.is_success() {
            let message = match parsed.ok().and_then(|body| body.error_type) {
                Some(error_type) => format!("HTTP {}: {}", status, error_type),
                None => format!("HTTP {}", status),
            };
            return Err(provider_error(message));
        }

        let body =
            parsed.map_err(|e| provider_error(format!("Malformed rates response: {}", e)))?;

        if !body.is_success() {
            return Err(provider_error(
                body.error_type.unwrap_or_else(|| "API request failed".to_string()),
            ));
        }

        Ok(ConversionTable {
            base: body.base_code.unwrap_or_else(|| base.to_string()),
            rates: body.conversion_rates,
            last_updated: body.time_last_update_utc,
        })
    }
}
