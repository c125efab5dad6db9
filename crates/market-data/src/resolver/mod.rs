//! Static reference data: the catalog, the country registry and the
//! index display-name resolver.
//!
//! All three are built once at startup and only read afterwards.

mod catalog;
mod country_registry;
mod index_resolver;

pub use catalog::{Catalog, IndexEntry};
pub use country_registry::CountryRegistry;
pub use index_resolver::IndexResolver;
