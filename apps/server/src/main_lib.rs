use std::sync::Arc;

use anyhow::Context;
use globefin_ai::ToolSet;
use globefin_market_data::{
    Catalog, ConversionSource, ExchangeRateApiProvider, MarketDataConfig, MarketService,
    QuoteProvider, YahooProvider,
};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::ai_environment::ServerAiEnvironment;
use crate::config::Config;

pub struct AppState {
    pub market_service: Arc<MarketService>,
    pub tools: ToolSet<ServerAiEnvironment>,
}

pub fn init_tracing() {
    let log_format = std::env::var("GF_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let catalog = match &config.catalog_file {
        Some(path) => {
            let catalog = Catalog::from_file(path)
                .with_context(|| format!("Failed to load catalog from {}", path.display()))?;
            tracing::info!("Catalog loaded from {}", path.display());
            Arc::new(catalog)
        }
        None => Catalog::embedded(),
    };

    if config.exchange_rate_api_key.is_none() {
        tracing::warn!("EXCHANGE_RATE_API_KEY is not set; rate lookups will return errors");
    }

    let quote_provider: Arc<dyn QuoteProvider> = Arc::new(YahooProvider::new()?);
    let rate_source: Arc<dyn ConversionSource> = Arc::new(ExchangeRateApiProvider::with_base_url(
        &config.exchange_rate_api_url,
        config.exchange_rate_api_key.clone(),
        config.market.rate_timeout,
    ));

    Ok(build_state_with(
        &catalog,
        quote_provider,
        rate_source,
        config.market.clone(),
    ))
}

/// Assemble the state around explicit providers.
pub fn build_state_with(
    catalog: &Catalog,
    quote_provider: Arc<dyn QuoteProvider>,
    rate_source: Arc<dyn ConversionSource>,
    market_config: MarketDataConfig,
) -> Arc<AppState> {
    tracing::info!(
        "Serving {} countries (quote timeout {:?}, {} sessions, concurrent fetch {})",
        catalog.countries.len(),
        market_config.quote_timeout,
        market_config.trailing_sessions,
        market_config.concurrent_fetch
    );

    let market_service = Arc::new(MarketService::new(
        catalog,
        quote_provider,
        rate_source,
        market_config,
    ));
    let tools = ToolSet::new(Arc::new(ServerAiEnvironment::new(market_service.clone())));

    Arc::new(AppState {
        market_service,
        tools,
    })
}
