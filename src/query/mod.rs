//! Query discovery and dispatch.
//!
//! Query types declare the SQL resources they read with
//! [`query_type!`](crate::query_type). A discovery pass finds those types,
//! keeps the enabled registrations, resolves each resource identifier against
//! a catalog and binds the result to a data-access collaborator. The module
//! follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use sqlmon::query::adapters::memory::InMemoryResourceCatalog;
//! use sqlmon::query::services::QueryLocator;
//!
//! let catalog = InMemoryResourceCatalog::with_resources([(
//!     "Sqlmon.Queries.SessionCount.sql",
//!     "SELECT COUNT(*) AS session_count FROM sys.dm_exec_sessions",
//! )]);
//! let locator = QueryLocator::new(Arc::new(data_access), Arc::new(catalog));
//! for query in locator.prepare_queries()? {
//!     let results = query.invoke(&connection).await?;
//!     component_data.absorb(&results);
//! }
//! ```

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
pub mod settings;

#[cfg(test)]
mod tests;
