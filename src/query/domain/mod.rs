//! Domain model for query discovery.
//!
//! Query types declare their queries through [`QueryRegistration`] values;
//! the result capability is the [`QueryResult`] trait together with row
//! deserialization. Nothing in this module touches the catalog or the data
//! source.

mod error;
mod metrics;
mod query_type;
mod registration;
mod resolved;
pub mod resource;

pub use error::QueryDomainError;
pub use metrics::{ComponentData, QueryResult};
pub use query_type::{QueryRow, QueryType, QueryTypeEntry, RowMapper};
pub use registration::QueryRegistration;
pub use resolved::{ResolvedQuery, ResolvedQueryParts};
