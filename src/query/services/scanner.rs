//! Type scanning.

use crate::query::domain::QueryType;
use crate::query::ports::QueryScope;

/// Enumerates the query types in `scope` that carry at least one
/// registration.
///
/// Scanning only reads: the returned iterator is lazy, and calling `scan`
/// again starts a fresh enumeration of the scope.
pub fn scan<S>(scope: &S) -> impl Iterator<Item = QueryType> + '_
where
    S: QueryScope,
{
    scope
        .query_types()
        .filter(|query_type| !query_type.registrations().is_empty())
}
