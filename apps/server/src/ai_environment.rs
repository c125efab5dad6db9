//! Server-side implementation of the agent tool environment.

use std::sync::Arc;

use globefin_ai::AiEnvironment;
use globefin_market_data::MarketService;

pub struct ServerAiEnvironment {
    market_service: Arc<MarketService>,
}

impl ServerAiEnvironment {
    pub fn new(market_service: Arc<MarketService>) -> Self {
        Self { market_service }
    }
}

impl AiEnvironment for ServerAiEnvironment {
    fn market_service(&self) -> Arc<MarketService> {
        Arc::clone(&self.market_service)
    }
}
