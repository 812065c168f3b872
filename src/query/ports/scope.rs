//! Discovery scope port.

use crate::query::domain::QueryType;

/// A set of query types the scanner can enumerate.
///
/// Every call to [`QueryScope::query_types`] starts a fresh enumeration.
pub trait QueryScope {
    /// Enumerates the query types in the scope.
    fn query_types(&self) -> impl Iterator<Item = QueryType> + '_;
}
