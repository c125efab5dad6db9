//! Currency tool - official currency of a country using rig-core Tool trait.

use rig::{completion::ToolDefinition, tool::Tool};
use serde::Deserialize;
use std::sync::Arc;

use super::constants::{GET_CURRENCY_DESCRIPTION, GET_CURRENCY_FUNCTION};
use super::format::{render_currency, render_error};
use super::input::require_input;
use crate::env::AiEnvironment;
use crate::error::AiError;

/// Arguments for the get_currency tool.
#[derive(Debug, Default, Deserialize)]
pub struct GetCurrencyArgs {
    pub country: String,
}

/// Tool to look up the official currency of a country.
pub struct GetCurrencyTool<E: AiEnvironment> {
    env: Arc<E>,
}

impl<E: AiEnvironment> GetCurrencyTool<E> {
    pub fn new(env: Arc<E>) -> Self {
        Self { env }
    }

    /// Resolve the country and render its currency line.
    pub fn lookup(&self, country: &str) -> Result<String, AiError> {
        let country = require_input(country, "Country name")?;
        let service = self.env.market_service();
        let config = service.country(country)?;
        Ok(render_currency(config))
    }

    /// Text result for free-form input; failures are rendered, never raised.
    pub fn run(&self, input: &str) -> String {
        match self.lookup(input) {
            Ok(text) => text,
            Err(AiError::MarketData(e)) => e.to_string(),
            Err(e) => render_error(e),
        }
    }
}

impl<E: AiEnvironment> Clone for GetCurrencyTool<E> {
    fn clone(&self) -> Self {
        Self {
            env: self.env.clone(),
        }
    }
}

impl<E: AiEnvironment + 'static> Tool for GetCurrencyTool<E> {
    const NAME: &'static str = GET_CURRENCY_FUNCTION;

    type Error = AiError;
    type Args = GetCurrencyArgs;
    type Output = String;

    async fn definition(&self, _prompt: String) -> ToolDefinition {
        ToolDefinition {
            name: Self::NAME.to_string(),
            description: GET_CURRENCY_DESCRIPTION.to_string(),
            parameters: serde_json::json!({
                "type": "object",
                "properties": {
                    "country": {
                        "type": "string",
                        "description": "Country name, e.g. 'Japan'"
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
    async fn test_get_currency_tool() {
        let tool = GetCurrencyTool::new(Arc::new(MockEnvironment::new()));

        let output = tool
            .call(GetCurrencyArgs {
                country: "'japan'".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(output, "Official currency of Japan: JPY");
    }

    #[test]
    fn test_unknown_country_lists_all() {
        let tool = GetCurrencyTool::new(Arc::new(MockEnvironment::new()));
        assert_eq!(
            tool.run("Atlantis"),
            "Country Atlantis not found. Available: Japan, India, United States, South Korea, China, United Kingdom"
        );
    }

    #[test]
    fn test_blank_country() {
        let tool = GetCurrencyTool::new(Arc::new(MockEnvironment::new()));
        assert_eq!(tool.run("   "), "Error: Country name must not be empty");
    }
}
