//! Country-level market views.
//!
//! [`MarketService`] composes the country registry, the index resolver and
//! both aggregators into the lookups presentation layers need: a single
//! country's dashboard, a side-by-side comparison, and exchange locations.

use std::sync::Arc;

use futures::future::join_all;
use log::debug;
use serde::Serialize;

use crate::aggregator::{MarketDataAggregator, MarketDataConfig, RateAggregator};
use crate::errors::MarketDataError;
use crate::fallback::FallbackTable;
use crate::models::{
    Coordinates, CountryConfig, CurrencyCode, IndexQuotes, NamedQuote, RateRecord, Symbol,
};
use crate::provider::{ConversionSource, QuoteProvider};
use crate::resolver::{Catalog, CountryRegistry, IndexResolver};

/// Where a country's stock exchange is
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExchangeLocation {
    pub country: String,
    pub exchange_name: String,
    pub coordinates: Coordinates,
    pub maps_url: String,
}

impl ExchangeLocation {
    fn of(country: &CountryConfig) -> Self {
        Self {
            country: country.name.clone(),
            exchange_name: country.exchange_name.clone(),
            coordinates: country.coordinates,
            maps_url: country.coordinates.maps_url(),
        }
    }
}

/// Everything known about one country, fetched together
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CountrySnapshot {
    pub country: String,
    pub currency_code: CurrencyCode,
    pub location: ExchangeLocation,
    pub rates: RateRecord,
    pub indices: Vec<NamedQuote>,
}

/// One row of a country comparison
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonRow {
    pub country: String,
    pub currency_code: CurrencyCode,
    pub exchange_name: String,
    pub rates: RateRecord,
}

/// Read-only facade over the reference data and the aggregators.
pub struct MarketService {
    countries: CountryRegistry,
    index_names: IndexResolver,
    quotes: MarketDataAggregator,
    rates: RateAggregator,
}

impl MarketService {
    pub fn new(
        catalog: &Catalog,
        quote_provider: Arc<dyn QuoteProvider>,
        rate_source: Arc<dyn ConversionSource>,
        config: MarketDataConfig,
    ) -> Self {
        let rate_timeout = config.rate_timeout;
        Self {
            countries: CountryRegistry::from_catalog(catalog),
            index_names: IndexResolver::from_catalog(catalog),
            quotes: MarketDataAggregator::new(
                quote_provider,
                Arc::new(FallbackTable::from_catalog(catalog)),
                config,
            ),
            rates: RateAggregator::new(rate_source, rate_timeout),
        }
    }

    pub fn registry(&self) -> &CountryRegistry {
        &self.countries
    }

    pub fn index_names(&self) -> &IndexResolver {
        &self.index_names
    }

    /// Configured countries, in catalog order
    pub fn countries(&self) -> &[CountryConfig] {
        self.countries.all()
    }

    pub fn country(&self, name: &str) -> Result<&CountryConfig, MarketDataError> {
        self.countries.require(name)
    }

    pub async fn fetch_indices(&self, symbols: &[Symbol]) -> Result<IndexQuotes, MarketDataError> {
        self.quotes.fetch_indices(symbols).await
    }

    /// Quotes for `symbols`, each paired with its display name.
    pub async fn named_indices(
        &self,
        symbols: &[Symbol],
    ) -> Result<Vec<NamedQuote>, MarketDataError> {
        let quotes = self.quotes.fetch_indices(symbols).await?;
        Ok(quotes
            .into_iter()
            .map(|quote| NamedQuote {
                name: self.index_names.display_name(&quote.symbol).to_string(),
                quote,
            })
            .collect())
    }

    pub async fn fetch_rates(&self, base_currency: &str) -> RateRecord {
        self.rates.fetch_rates(base_currency).await
    }

    pub async fn country_indices(&self, name: &str) -> Result<Vec<NamedQuote>, MarketDataError> {
        let country = self.country(name)?;
        self.named_indices(&country.symbols).await
    }

    /// Rates and index quotes for one country, fetched concurrently.
    pub async fn snapshot(&self, name: &str) -> Result<CountrySnapshot, MarketDataError> {
        let country = self.country(name)?;
        debug!("Building snapshot for {}", country.name);

        let (rates, indices) = tokio::join!(
            self.rates.fetch_rates(&country.currency_code),
            self.named_indices(&country.symbols)
        );

        Ok(CountrySnapshot {
            country: country.name.clone(),
            currency_code: country.currency_code.clone(),
            location: ExchangeLocation::of(country),
            rates,
            indices: indices?,
        })
    }

    /// One row per requested country, in request order.
    ///
    /// Every name is validated before any rate is fetched.
    pub async fn compare(&self, names: &[String]) -> Result<Vec<ComparisonRow>, MarketDataError> {
        let countries = names
            .iter()
            .map(|name| self.country(name))
            .collect::<Result<Vec<_>, _>>()?;

        let rates = join_all(
            countries
                .iter()
                .map(|c| self.rates.fetch_rates(&c.currency_code)),
        )
        .await;

        Ok(countries
            .into_iter()
            .zip(rates)
            .map(|(country, rates)| ComparisonRow {
                country: country.name.clone(),
                currency_code: country.currency_code.clone(),
                exchange_name: country.exchange_name.clone(),
                rates,
            })
            .collect())
    }

    pub fn location(&self, name: &str) -> Result<ExchangeLocation, MarketDataError> {
        self.country(name).map(ExchangeLocation::of)
    }
}
