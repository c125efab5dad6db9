//! AI tool error types.

use globefin_market_data::MarketDataError;
use thiserror::Error;

/// AI tool errors.
#[derive(Debug, Error)]
pub enum AiError {
    /// Invalid input or request.
    #[error("{0}")]
    InvalidInput(String),

    /// Tool not found in registry.
    #[error("Tool not found: {0}")]
    ToolNotFound(String),

    /// Tool execution failed.
    #[error("Tool execution failed: {0}")]
    ToolExecutionFailed(String),

    /// Error from the market data layer.
    #[error(transparent)]
    MarketData(#[from] MarketDataError),
}

impl AiError {
    /// Create a new invalid input error.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}

/// Error code for programmatic handling by API consumers.
impl AiError {
    pub fn code(&self) -> &'static str {
        match self {
            AiError::InvalidInput(_) => "INVALID_INPUT",
            AiError::ToolNotFound(_) => "TOOL_NOT_FOUND",
            AiError::ToolExecutionFailed(_) => "TOOL_EXECUTION_FAILED",
            AiError::MarketData(MarketDataError::UnknownCountry { .. }) => "UNKNOWN_COUNTRY",
            AiError::MarketData(_) => "MARKET_DATA_ERROR",
        }
    }
}
