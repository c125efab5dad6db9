//! Stock indices tool - live or fallback index quotes using rig-core Tool trait.

use rig::{completion::ToolDefinition, tool::Tool};
use serde::Deserialize;
use std::sync::Arc;

use super::constants::{GET_STOCK_INDICES_DESCRIPTION, GET_STOCK_INDICES_FUNCTION};
use super::format::{render_error, render_indices};
use super::input::require_input;
use crate::env::AiEnvironment;
use crate::error::AiError;

/// Arguments for the get_stock_indices tool.
#[derive(Debug, Default, Deserialize)]
pub struct GetStockIndicesArgs {
    pub country: String,
}

/// Tool to fetch the major indices of a country.
pub struct GetStockIndicesTool<E: AiEnvironment> {
    env: Arc<E>,
}

impl<E: AiEnvironment> GetStockIndicesTool<E> {
    pub fn new(env: Arc<E>) -> Self {
        Self { env }
    }

    pub async fn lookup(&self, country: &str) -> Result<String, AiError> {
        let country = require_input(country, "Country name")?;
        let quotes = self.env.market_service().country_indices(country).await?;
        Ok(render_indices(&quotes))
    }

    /// Text result for free-form input; failures are rendered, never raised.
    pub async fn run(&self, input: &str) -> String {
        match self.lookup(input).await {
            Ok(text) => text,
            Err(AiError::MarketData(e)) => e.to_string(),
            Err(e) => render_error(e),
        }
    }
}

impl<E: AiEnvironment> Clone for GetStockIndicesTool<E> {
    fn clone(&self) -> Self {
        Self {
            env: self.env.clone(),
        }
    }
}

impl<E: AiEnvironment + 'static> Tool for GetStockIndicesTool<E> {
    const NAME: &'static str = GET_STOCK_INDICES_FUNCTION;

    type Error = AiError;
    type Args = GetStockIndicesArgs;
    type Output = String;

    async fn definition(&self, _prompt: String) -> ToolDefinition {
        ToolDefinition {
            name: Self::NAME.to_string(),
            description: GET_STOCK_INDICES_DESCRIPTION.to_string(),
            parameters: serde_json::json!({
                "type": "object",
                "properties": {
                    "country": {
                        "type": "string",
                        "description": "Country name, e.g. 'India'"
                    }
                },
                "required": ["country"]
            }),
        }
    }

    async fn call(&self, args: Self::Args) -> Result<Self::Output, Self::Error> {
        Ok(self.run(&args.country).await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::test_env::MockEnvironment;

    #[tokio::test]
    async fn test_get_stock_indices_tool() {
        let tool = GetStockIndicesTool::new(Arc::new(MockEnvironment::new()));

        let output = tool
            .call(GetStockIndicesArgs {
                country: "Japan".to_string(),
            })
            .await
            .unwrap();

        // ^TOPIX fails in the mock and falls back without jitter
        assert_eq!(
            output,
            "**Stock Market Indices (Real-time)**\n\
             - Nikkei 225: 110.00 (📈 4.76%)\n\
             - TOPIX (Tokyo Stock Price Index): 2010.80 (📈 0.45%)\n"
        );
    }

    #[tokio::test]
    async fn test_unknown_country() {
        let tool = GetStockIndicesTool::new(Arc::new(MockEnvironment::new()));
        let output = tool.run("Narnia").await;
        assert!(output.starts_with("Country Narnia not found. Available: Japan, India"));
    }
}
