//! Text rendering of tool results.

use globefin_market_data::{CountryConfig, NamedQuote, RateRecord};

/// `**Exchange Rates: 1 JPY**` followed by one line per basket currency,
/// or `Error: <message>`.
pub fn render_rates(record: &RateRecord) -> String {
    match record {
        RateRecord::Rates(table) => {
            let mut out = format!("**Exchange Rates: 1 {}**\n", table.base_currency);
            for (code, value) in table.entries() {
                out.push_str(&format!("- {}: {}\n", code, value));
            }
            out
        }
        RateRecord::Error { error } => render_error(error),
    }
}

/// Header line followed by one line per index, in the given order.
pub fn render_indices(quotes: &[NamedQuote]) -> String {
    let mut out = String::from("**Stock Market Indices (Real-time)**\n");
    for named in quotes {
        // Values that print as 0.00 count as flat, never "-0.00"
        let change = (named.quote.change_percent * 100.0).round() / 100.0 + 0.0;
        let trend = if change >= 0.0 { "📈" } else { "📉" };
        out.push_str(&format!(
            "- {}: {:.2} ({} {:.2}%)\n",
            named.name, named.quote.current, trend, change
        ));
    }
    out
}

pub fn render_currency(country: &CountryConfig) -> String {
    format!(
        "Official currency of {}: {}",
        country.name, country.currency_code
    )
}

pub fn render_exchange_info(country: &CountryConfig) -> String {
    format!(
        "Stock Exchange: {}\nMajor Indices: {}",
        country.exchange_name,
        country.symbols.join(", ")
    )
}

pub fn render_error(message: impl std::fmt::Display) -> String {
    format!("Error: {}", message)
}
