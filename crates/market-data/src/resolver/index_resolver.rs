use std::collections::HashMap;

use crate::models::Symbol;

use super::catalog::Catalog;

/// Maps index symbols to human-readable names.
///
/// Unknown symbols resolve to themselves, so lookups never fail.
#[derive(Debug, Clone, Default)]
pub struct IndexResolver {
    names: HashMap<Symbol, String>,
}

impl IndexResolver {
    pub fn new(names: HashMap<Symbol, String>) -> Self {
        Self { names }
    }

    pub fn from_catalog(catalog: &Catalog) -> Self {
        Self::new(
            catalog
                .indices
                .iter()
                .map(|entry| (entry.symbol.clone(), entry.name.clone()))
                .collect(),
        )
    }

    /// Display name for `symbol`, or the symbol itself when unknown.
    pub fn display_name<'a>(&'a self, symbol: &'a str) -> &'a str {
        self.names.get(symbol).map(String::as_str).unwrap_or(symbol)
    }

    /// Display names for every requested symbol.
    pub fn display_names(&self, symbols: &[Symbol]) -> HashMap<Symbol, String> {
        symbols
            .iter()
            .map(|s| (s.clone(), self.display_name(s).to_string()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names() {
        let resolver = IndexResolver::from_catalog(&Catalog::embedded());
        let names = resolver.display_names(&["^N225".to_string(), "^ZZZZ".to_string()]);
        assert_eq!(names["^N225"], "Nikkei 225");
        assert_eq!(names["^ZZZZ"], "^ZZZZ");
        assert_eq!(resolver.display_name("000001.SS"), "Shanghai Composite");
    }

    #[test]
    fn test_empty_resolver_is_identity() {
        let resolver = IndexResolver::default();
        assert_eq!(resolver.display_name("^GSPC"), "^GSPC");
    }
}
