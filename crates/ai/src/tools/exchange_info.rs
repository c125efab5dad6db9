//! Exchange info tool - stock exchange and index symbols using rig-core Tool trait.

use rig::{completion::ToolDefinition, tool::Tool};
use serde::Deserialize;
use std::sync::Arc;

use super::constants::{GET_EXCHANGE_INFO_DESCRIPTION, GET_EXCHANGE_INFO_FUNCTION};
use super::format::{render_error, render_exchange_info};
use super::input::require_input;
use crate::env::AiEnvironment;
use crate::error::AiError;

/// Arguments for the get_exchange_info tool.
#[derive(Debug, Default, Deserialize)]
pub struct GetExchangeInfoArgs {
    pub country: String,
}

/// Tool to describe the stock exchange of a country.
pub struct GetExchangeInfoTool<E: AiEnvironment> {
    env: Arc<E>,
}

impl<E: AiEnvironment> GetExchangeInfoTool<E> {
    pub fn new(env: Arc<E>) -> Self {
        Self { env }
    }

    pub fn lookup(&self, country: &str) -> Result<String, AiError> {
        let country = require_input(country, "Country name")?;
        let service = self.env.market_service();
        let config = service.country(country)?;
        Ok(render_exchange_info(config))
    }

    pub fn run(&self, input: &str) -> String {
        match self.lookup(input) {
            Ok(text) => text,
            Err(AiError::MarketData(e)) => e.to_string(),
            Err(e) => render_error(e),
        }
    }
}

impl<E: AiEnvironment> Clone for GetExchangeInfoTool<E> {
    fn clone(&self) -> Self {
        Self {
            env: self.env.clone(),
        }
    }
}

impl<E: AiEnvironment + 'static> Tool for GetExchangeInfoTool<E> {
    const NAME: &'static str = GET_EXCHANGE_INFO_FUNCTION;

    type Error = AiError;
    type Args = GetExchangeInfoArgs;
    type Output = String;

    async fn definition(&self, _prompt: String) -> ToolDefinition {
        ToolDefinition {
            name: Self::NAME.to_string(),
            description: GET_EXCHANGE_INFO_DESCRIPTION.to_string(),
            parameters: serde_json::json!({
                "type": "object",
                "properties": {
                    "country": {
                        "type": "string",
                        "description": "Country name, e.g. 'United Kingdom'"
                    }
                },
                "required": ["country"]
            }),
        }
    }

    async fn call(&self, args: Self::Args) -> Result<Self::Output, Self::Error> {
        Ok(self.run(&args.country))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::test_env::MockEnvironment;

    #[tokio::test]
    async fn test_get_exchange_info_tool() {
        let tool = GetExchangeInfoTool::new(Arc::new(MockEnvironment::new()));

        let output = tool
            .call(GetExchangeInfoArgs {
                country: "india".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(
            output,
            "Stock Exchange: Bombay Stock Exchange (BSE)\nMajor Indices: ^BSESN, ^NSEI"
        );
    }
}
