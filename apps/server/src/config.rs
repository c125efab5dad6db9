use std::{net::SocketAddr, path::PathBuf, str::FromStr, time::Duration};

use anyhow::Context;
use globefin_market_data::{provider::exchange_rate_api::DEFAULT_BASE_URL, JitterPolicy, MarketDataConfig};

pub struct Config {
    pub listen_addr: SocketAddr,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    /// Replaces the embedded catalog when set
    pub catalog_file: Option<PathBuf>,
    pub exchange_rate_api_key: Option<String>,
    pub exchange_rate_api_url: String,
    pub market: MarketDataConfig,
}

fn env_or<T: FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

fn env_flag(key: &str) -> bool {
    std::env::var(key)
        .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(false)
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let listen_addr: SocketAddr = std::env::var("GF_LISTEN_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:8080".to_string())
            .parse()
            .context("Invalid GF_LISTEN_ADDR")?;
        let cors_allow = std::env::var("GF_CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|_| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let timeout_ms: u64 = env_or("GF_REQUEST_TIMEOUT_MS", 30000);
        let catalog_file = std::env::var("GF_CATALOG_FILE")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from);
        let exchange_rate_api_key = std::env::var("EXCHANGE_RATE_API_KEY")
            .ok()
            .filter(|s| !s.trim().is_empty());
        let exchange_rate_api_url =
            std::env::var("EXCHANGE_RATE_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.into());

        let defaults = MarketDataConfig::default();
        let market = MarketDataConfig {
            quote_timeout: Duration::from_millis(env_or(
                "GF_QUOTE_TIMEOUT_MS",
                defaults.quote_timeout.as_millis() as u64,
            )),
            rate_timeout: Duration::from_millis(env_or(
                "GF_RATE_TIMEOUT_MS",
                defaults.rate_timeout.as_millis() as u64,
            )),
            trailing_sessions: env_or("GF_TRAILING_SESSIONS", defaults.trailing_sessions).max(1),
            jitter: JitterPolicy::new(env_or("GF_JITTER_POINTS", defaults.jitter.points())),
            concurrent_fetch: !env_flag("GF_SEQUENTIAL_FETCH"),
        };

        Ok(Self {
            listen_addr,
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
            catalog_file,
            exchange_rate_api_key,
            exchange_rate_api_url,
            market,
        })
    }
}
