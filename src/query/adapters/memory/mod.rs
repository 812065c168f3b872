//! In-memory adapters for query discovery.

mod catalog;

pub use catalog::InMemoryResourceCatalog;
