//! Exchange rate tool - conversion basket for a currency using rig-core Tool trait.

use rig::{completion::ToolDefinition, tool::Tool};
use serde::Deserialize;
use std::sync::Arc;

use super::constants::{GET_EXCHANGE_RATE_DESCRIPTION, GET_EXCHANGE_RATE_FUNCTION};
use super::format::render_rates;
use super::input::normalize_input;
use crate::env::AiEnvironment;
use crate::error::AiError;

/// Arguments for the get_exchange_rate tool.
#[derive(Debug, Default, Deserialize)]
pub struct GetExchangeRateArgs {
    pub currency: String,
}

/// Tool to fetch USD/INR/GBP/EUR rates for a base currency.
pub struct GetExchangeRateTool<E: AiEnvironment> {
    env: Arc<E>,
}

impl<E: AiEnvironment> GetExchangeRateTool<E> {
    pub fn new(env: Arc<E>) -> Self {
        Self { env }
    }

    /// Blank codes and provider failures come back as `Error: ...`.
    pub async fn run(&self, input: &str) -> String {
        let record = self
            .env
            .market_service()
            .fetch_rates(normalize_input(input))
            .await;
        render_rates(&record)
    }
}

impl<E: AiEnvironment> Clone for GetExchangeRateTool<E> {
    fn clone(&self) -> Self {
        Self {
            env: self.env.clone(),
        }
    }
}

impl<E: AiEnvironment + 'static> Tool for GetExchangeRateTool<E> {
    const NAME: &'static str = GET_EXCHANGE_RATE_FUNCTION;

    type Error = AiError;
    type Args = GetExchangeRateArgs;
    type Output = String;

    async fn definition(&self, _prompt: String) -> ToolDefinition {
        ToolDefinition {
            name: Self::NAME.to_string(),
            description: GET_EXCHANGE_RATE_DESCRIPTION.to_string(),
            parameters: serde_json::json!({
                "type": "object",
                "properties": {
                    "currency": {
                        "type": "string",
                        "description": "ISO 4217 currency code, e.g. 'JPY'"
                    }
                },
                "required": ["currency"]
            }),
        }
    }

    async fn call(&self, args: Self::Args) -> Result<Self::Output, Self::Error> {
        Ok(self.run(&args.currency).await)
    }
}
