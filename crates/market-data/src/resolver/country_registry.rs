use crate::errors::MarketDataError;
use crate::models::CountryConfig;

use super::catalog::Catalog;

/// Lookup table of configured countries.
///
/// Names match case-insensitively after trimming; catalog order is kept
/// for listings.
#[derive(Debug, Clone)]
pub struct CountryRegistry {
    countries: Vec<CountryConfig>,
}

impl CountryRegistry {
    pub fn new(countries: Vec<CountryConfig>) -> Self {
        Self { countries }
    }

    pub fn from_catalog(catalog: &Catalog) -> Self {
        Self::new(catalog.countries.clone())
    }

    pub fn all(&self) -> &[CountryConfig] {
        &self.countries
    }

    /// Configured country names, in catalog order
    pub fn names(&self) -> Vec<String> {
        self.countries.iter().map(|c| c.name.clone()).collect()
    }

    pub fn find(&self, name: &str) -> Option<&CountryConfig> {
        let needle = name.trim();
        self.countries
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(needle))
    }

    /// Like [`find`](Self::find), but an unknown name is an error listing
    /// every configured country.
    pub fn require(&self, name: &str) -> Result<&CountryConfig, MarketDataError> {
        self.find(name)
            .ok_or_else(|| MarketDataError::UnknownCountry {
                name: name.trim().to_string(),
                available: self.names(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> CountryRegistry {
        CountryRegistry::from_catalog(&Catalog::embedded())
    }

    #[test]
    fn test_find_is_case_insensitive() {
        let registry = registry();
        let country = registry.find("  united kingdom ").unwrap();
        assert_eq!(country.name, "United Kingdom");
        assert_eq!(country.currency_code, "GBP");
        assert_eq!(country.symbols, vec!["^FTSE"]);
    }

    #[test]
    fn test_require_unknown_lists_all_countries() {
        let err = registry().require("Atlantis").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Country Atlantis not found. Available: Japan, India, United States, South Korea, China, United Kingdom"
        );
    }
}
