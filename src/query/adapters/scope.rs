//! Discovery scopes.

use crate::query::domain::{QueryType, QueryTypeEntry};
use crate::query::ports::QueryScope;

/// Every query type registered with [`query_type!`](crate::query_type) in the
/// running binary.
///
/// This is the default scope of the query locator.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegisteredQueryTypes;

impl QueryScope for RegisteredQueryTypes {
    fn query_types(&self) -> impl Iterator<Item = QueryType> + '_ {
        inventory::iter::<QueryTypeEntry>
            .into_iter()
            .map(QueryTypeEntry::query_type)
    }
}

/// An explicit list of query types, used to isolate a discovery pass.
#[derive(Debug, Clone, Default)]
pub struct QueryTypeList {
    types: Vec<QueryType>,
}

impl QueryTypeList {
    /// Creates a scope over the given types.
    #[must_use]
    pub fn new(types: impl IntoIterator<Item = QueryType>) -> Self {
        Self {
            types: types.into_iter().collect(),
        }
    }
}

impl QueryScope for QueryTypeList {
    fn query_types(&self) -> impl Iterator<Item = QueryType> + '_ {
        self.types.iter().cloned()
    }
}
