//! Port contracts for query discovery and invocation.
//!
//! Ports define infrastructure-agnostic interfaces used by the query
//! services: where query types come from, where resource text lives, and how
//! query text is executed.

pub mod catalog;
pub mod data_access;
pub mod scope;

pub use catalog::{ResourceCatalog, ResourceCatalogError, ResourceCatalogResult};
pub use data_access::{DataAccess, DataAccessError, DataAccessResult, QueryParameters};
pub use scope::QueryScope;
