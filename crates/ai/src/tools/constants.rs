//! Names and descriptions the agent sees for each tool.
//!
//! Display names are what a ReAct-style agent writes in its `Action:` line;
//! function names are what function-calling models use.

pub const GET_CURRENCY_NAME: &str = "Get Currency";
pub const GET_CURRENCY_FUNCTION: &str = "get_currency";
pub const GET_CURRENCY_DESCRIPTION: &str =
    "Get the official currency code for a country. Input: country name (e.g., 'Japan')";

pub const GET_EXCHANGE_RATE_NAME: &str = "Get Exchange Rate";
pub const GET_EXCHANGE_RATE_FUNCTION: &str = "get_exchange_rate";
pub const GET_EXCHANGE_RATE_DESCRIPTION: &str =
    "Get exchange rates for a currency against USD, INR, GBP, EUR. Input: currency code (e.g., 'JPY')";

pub const GET_STOCK_INDICES_NAME: &str = "Get Stock Indices";
pub const GET_STOCK_INDICES_FUNCTION: &str = "get_stock_indices";
pub const GET_STOCK_INDICES_DESCRIPTION: &str =
    "Get current values of major stock indices for a country. Input: country name";

pub const GET_EXCHANGE_INFO_NAME: &str = "Get Exchange Info";
pub const GET_EXCHANGE_INFO_FUNCTION: &str = "get_exchange_info";
pub const GET_EXCHANGE_INFO_DESCRIPTION: &str =
    "Get information about the stock exchange in a country. Input: country name";
