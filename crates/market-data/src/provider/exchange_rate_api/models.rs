//! ExchangeRate-API v6 response models.

use std::collections::HashMap;

use serde::Deserialize;

/// Response of the `latest` endpoint.
///
/// Errors are reported in-band: `result` is `"error"` and `error-type`
/// names the failure (e.g. `unsupported-code`, `invalid-key`).
#[derive(Debug, Deserialize)]
pub struct LatestRatesResponse {
    pub result: String,

    #[serde(rename = "error-type")]
    pub error_type: Option<String>,

    pub base_code: Option<String>,

    pub time_last_update_utc: Option<String>,

    #[serde(default)]
    pub conversion_rates: HashMap<String, f64>,
}

impl LatestRatesResponse {
    pub fn is_success(&self) -> bool {
        self.result == "success"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_success() {
        let json = r#"{
            "result": "success",
            "documentation": "https://www.exchangerate-api.com/docs",
            "time_last_update_unix": 1760572801,
            "time_last_update_utc": "Thu, 16 Oct 2026 00:00:01 +0000",
            "base_code": "JPY",
            "conversion_rates": {"JPY": 1, "USD": 0.0067, "INR": 0.56}
        }"#;
        let response: LatestRatesResponse = serde_json::from_str(json).unwrap();
        assert!(response.is_success());
        assert_eq!(response.base_code.as_deref(), Some("JPY"));
        assert_eq!(response.conversion_rates.get("USD"), Some(&0.0067));
        assert_eq!(response.conversion_rates.get("JPY"), Some(&1.0));
    }

    #[test]
    fn test_deserialize_error() {
        let json = r#"{"result": "error", "error-type": "unsupported-code"}"#;
        let response: LatestRatesResponse = serde_json::from_str(json).unwrap();
        assert!(!response.is_success());
        assert_eq!(response.error_type.as_deref(), Some("unsupported-code"));
        assert!(response.conversion_rates.is_empty());
    }
}
