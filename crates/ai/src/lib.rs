//! Globefin AI - agent tools over the market data layer using rig-core.
//!
//! This crate exposes the currency, exchange-rate, stock-index and
//! exchange-info lookups as four single-argument tools. Each tool
//! implements rig-core's `Tool` trait for function-calling agents, and the
//! [`ToolSet`] dispatches by name for text agents.
//!
//! # Architecture
//!
//! - `tools`: The four tools, their names/descriptions, input cleanup and
//!   text rendering
//! - `env`: Environment abstraction supplying the market service
//! - `error`: Tool error type
//!
//! # Example
//!
//! ```ignore
//! use globefin_ai::ToolSet;
//!
//! let tools = ToolSet::new(Arc::new(market_service));
//! let text = tools.dispatch("Get Exchange Rate", "JPY").await;
//! ```

pub mod env;
pub mod error;
pub mod tools;

// Re-export main types for convenience
pub use env::AiEnvironment;
pub use error::AiError;
pub use tools::{
    GetCurrencyTool, GetExchangeInfoTool, GetExchangeRateTool, GetStockIndicesTool, MarketTool,
    ToolInfo, ToolSet,
};
