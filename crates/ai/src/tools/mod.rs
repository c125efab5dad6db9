//! Agent tools for currency and stock-market lookups.
//!
//! This module provides tools that implement rig-core's Tool trait:
//! - GetCurrencyTool: Official currency of a country
//! - GetExchangeRateTool: USD/INR/GBP/EUR rates for a currency
//! - GetStockIndicesTool: Major index quotes for a country
//! - GetExchangeInfoTool: Stock exchange and index symbols of a country
//!
//! Each tool takes one free-text argument and always produces text; lookup
//! failures are rendered into the output rather than returned as errors.
//! [`ToolSet::dispatch`] invokes a tool by display or function name for
//! agents that do not speak rig's function-calling protocol.

pub mod constants;
pub mod currency;
pub mod exchange_info;
pub mod exchange_rate;
pub mod format;
pub mod input;
pub mod stock_indices;

// Re-export constants
pub use constants::*;

// Re-export tools
pub use currency::GetCurrencyTool;
pub use exchange_info::GetExchangeInfoTool;
pub use exchange_rate::GetExchangeRateTool;
pub use stock_indices::GetStockIndicesTool;

use std::sync::Arc;

use log::debug;
use serde::Serialize;

use crate::env::AiEnvironment;
use crate::error::AiError;

/// The fixed set of operations exposed to agents.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MarketTool {
    Currency,
    ExchangeRate,
    StockIndices,
    ExchangeInfo,
}

impl MarketTool {
    pub const ALL: [MarketTool; 4] = [
        MarketTool::Currency,
        MarketTool::ExchangeRate,
        MarketTool::StockIndices,
        MarketTool::ExchangeInfo,
    ];

    /// Name shown to text agents, e.g. "Get Currency"
    pub fn display_name(&self) -> &'static str {
        match self {
            MarketTool::Currency => GET_CURRENCY_NAME,
            MarketTool::ExchangeRate => GET_EXCHANGE_RATE_NAME,
            MarketTool::StockIndices => GET_STOCK_INDICES_NAME,
            MarketTool::ExchangeInfo => GET_EXCHANGE_INFO_NAME,
        }
    }

    /// Function-calling name, e.g. "get_currency"
    pub fn function_name(&self) -> &'static str {
        match self {
            MarketTool::Currency => GET_CURRENCY_FUNCTION,
            MarketTool::ExchangeRate => GET_EXCHANGE_RATE_FUNCTION,
            MarketTool::StockIndices => GET_STOCK_INDICES_FUNCTION,
            MarketTool::ExchangeInfo => GET_EXCHANGE_INFO_FUNCTION,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            MarketTool::Currency => GET_CURRENCY_DESCRIPTION,
            MarketTool::ExchangeRate => GET_EXCHANGE_RATE_DESCRIPTION,
            MarketTool::StockIndices => GET_STOCK_INDICES_DESCRIPTION,
            MarketTool::ExchangeInfo => GET_EXCHANGE_INFO_DESCRIPTION,
        }
    }

    /// Resolve either name form, ignoring case and surrounding whitespace.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL.into_iter().find(|tool| {
            tool.display_name().eq_ignore_ascii_case(name)
                || tool.function_name().eq_ignore_ascii_case(name)
        })
    }
}

/// Name and description of one tool, for listings
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolInfo {
    pub name: &'static str,
    pub function_name: &'static str,
    pub description: &'static str,
}

impl From<MarketTool> for ToolInfo {
    fn from(tool: MarketTool) -> Self {
        Self {
            name: tool.display_name(),
            function_name: tool.function_name(),
            description: tool.description(),
        }
    }
}

/// Container for all agent tools, simplifying tool registration.
pub struct ToolSet<E: AiEnvironment> {
    pub currency: GetCurrencyTool<E>,
    pub exchange_rate: GetExchangeRateTool<E>,
    pub stock_indices: GetStockIndicesTool<E>,
    pub exchange_info: GetExchangeInfoTool<E>,
}

impl<E: AiEnvironment> ToolSet<E> {
    /// Create a new tool set with all market tools.
    pub fn new(env: Arc<E>) -> Self {
        Self {
            currency: GetCurrencyTool::new(env.clone()),
            exchange_rate: GetExchangeRateTool::new(env.clone()),
            stock_indices: GetStockIndicesTool::new(env.clone()),
            exchange_info: GetExchangeInfoTool::new(env),
        }
    }

    pub fn tools(&self) -> Vec<ToolInfo> {
        MarketTool::ALL.into_iter().map(ToolInfo::from).collect()
    }

    /// Run `tool` on free-text input.
    pub async fn invoke(&self, tool: MarketTool, input: &str) -> String {
        debug!("Invoking tool {} with input {:?}", tool.display_name(), input);
        match tool {
            MarketTool::Currency => self.currency.run(input),
            MarketTool::ExchangeRate => self.exchange_rate.run(input).await,
            MarketTool::StockIndices => self.stock_indices.run(input).await,
            MarketTool::ExchangeInfo => self.exchange_info.run(input),
        }
    }

    /// Resolve a tool by name and run it, failing only on an unknown name.
    pub async fn try_dispatch(&self, name: &str, input: &str) -> Result<String, AiError> {
        let tool =
            MarketTool::from_name(name).ok_or_else(|| AiError::ToolNotFound(name.to_string()))?;
        Ok(self.invoke(tool, input).await)
    }

    /// Like [`try_dispatch`](Self::try_dispatch), with an unknown name
    /// reported as text listing the available tools.
    pub async fn dispatch(&self, name: &str, input: &str) -> String {
        match self.try_dispatch(name, input).await {
            Ok(output) => output,
            Err(e) => {
                let available: Vec<&str> =
                    MarketTool::ALL.iter().map(|t| t.display_name()).collect();
                format!("{}. Available: {}", e, available.join(", "))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::test_env::MockEnvironment;

    #[test]
    fn test_from_name_accepts_both_forms() {
        assert_eq!(MarketTool::from_name("Get Currency"), Some(MarketTool::Currency));
        assert_eq!(
            MarketTool::from_name(" get_exchange_rate "),
            Some(MarketTool::ExchangeRate)
        );
        assert_eq!(
            MarketTool::from_name("get stock indices"),
            Some(MarketTool::StockIndices)
        );
        assert_eq!(MarketTool::from_name("Get Weather"), None);
    }

    #[test]
    fn test_tool_listing() {
        let tools = ToolSet::new(Arc::new(MockEnvironment::new()));
        let names: Vec<&str> = tools.tools().iter().map(|t| t.name).collect();
        assert_eq!(
            names,
            vec![
                "Get Currency",
                "Get Exchange Rate",
                "Get Stock Indices",
                "Get Exchange Info"
            ]
        );
    }

    #[tokio::test]
    async fn test_dispatch() {
        let tools = ToolSet::new(Arc::new(MockEnvironment::new()));

        assert_eq!(
            tools.dispatch("Get Currency", "South Korea").await,
            "Official currency of South Korea: KRW"
        );
        assert_eq!(
            tools.dispatch("get_exchange_info", "China").await,
            "Stock Exchange: Shanghai Stock Exchange (SSE)\nMajor Indices: 000001.SS"
        );
        assert_eq!(
            tools.dispatch("Get Weather", "Tokyo").await,
            "Tool not found: Get Weather. Available: Get Currency, Get Exchange Rate, Get Stock Indices, Get Exchange Info"
        );
    }

    #[tokio::test]
    async fn test_try_dispatch_unknown_tool() {
        let tools = ToolSet::new(Arc::new(MockEnvironment::new()));
        let err = tools.try_dispatch("nope", "").await.unwrap_err();
        assert_eq!(err.code(), "TOOL_NOT_FOUND");
    }
}
