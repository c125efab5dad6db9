//! Aggregators turning unreliable provider calls into complete results.
//!
//! - [`MarketDataAggregator`]: one quote record per requested symbol, live
//!   when possible and synthesized from the fallback table otherwise
//! - [`RateAggregator`]: the USD/INR/GBP/EUR basket for a base currency, or
//!   an error record

mod config;
mod market_data;
mod rates;

pub use config::MarketDataConfig;
pub use market_data::{quote_from_bars, MarketDataAggregator};
pub use rates::RateAggregator;
