use serde::{Deserialize, Serialize};

use super::types::{CurrencyCode, Symbol};

/// Geographic position of a stock exchange
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    /// Google Maps link centered on this position
    pub fn maps_url(&self) -> String {
        format!("https://www.google.com/maps?q={},{}", self.lat, self.lng)
    }
}

/// Static configuration of one country
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryConfig {
    pub name: String,
    pub currency_code: CurrencyCode,
    pub exchange_name: String,
    /// Major index symbols, in display order
    pub symbols: Vec<Symbol>,
    pub coordinates: Coordinates,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_maps_url() {
        let coords = Coordinates {
            lat: 35.6762,
            lng: 139.7674,
        };
        assert_eq!(
            coords.maps_url(),
            "https://www.google.com/maps?q=35.6762,139.7674"
        );
    }
}
