use std::time::Duration;

use crate::fallback::JitterPolicy;

/// Default per-symbol quote timeout
pub const DEFAULT_QUOTE_TIMEOUT: Duration = Duration::from_secs(5);

/// Default conversion source timeout
pub const DEFAULT_RATE_TIMEOUT: Duration = Duration::from_secs(10);

/// Default trailing window, in trading sessions
pub const DEFAULT_TRAILING_SESSIONS: u32 = 5;

/// Tuning knobs for the aggregators.
#[derive(Clone, Debug)]
pub struct MarketDataConfig {
    /// Upper bound on one provider call for one symbol
    pub quote_timeout: Duration,

    /// Upper bound on one conversion source call
    pub rate_timeout: Duration,

    /// Number of daily closes requested per symbol
    pub trailing_sessions: u32,

    /// Perturbation applied to fallback change percentages
    pub jitter: JitterPolicy,

    /// Fetch symbols concurrently; when false they are fetched one at a time
    pub concurrent_fetch: bool,
}

impl Default for MarketDataConfig {
    fn default() -> Self {
        Self {
            quote_timeout: DEFAULT_QUOTE_TIMEOUT,
            rate_timeout: DEFAULT_RATE_TIMEOUT,
            trailing_sessions: DEFAULT_TRAILING_SESSIONS,
            jitter: JitterPolicy::default(),
            concurrent_fetch: true,
        }
    }
}
