//! Sqlmon: query discovery for a SQL Server metrics agent.
//!
//! This crate finds the queries a metrics agent runs, resolves the SQL text
//! each one reads from the bundled resources, and hands the scheduler a set
//! of invocable descriptors bound to a data-access collaborator.
//!
//! # Architecture
//!
//! Sqlmon follows hexagonal architecture principles:
//!
//! - **Domain**: Registrations, query types and the metrics payload
//! - **Ports**: Resource catalogs, data access and discovery scopes
//! - **Adapters**: In-memory, embedded and on-disk catalogs; registry scopes
//! - **Services**: Resolution, scanning and the query locator
//!
//! # Modules
//!
//! - [`query`]: Query discovery and dispatch

pub mod query;

#[doc(hidden)]
pub use inventory;
