//! A query whose resource has been resolved to text.

use std::sync::Arc;

/// Resolved, unbound query produced by a discovery pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedQuery {
    query_name: String,
    result_type_name: String,
    resource_name: String,
    qualified_resource_name: String,
    query_text: Arc<str>,
}

/// Parameter object for [`ResolvedQuery::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedQueryParts {
    /// Display name: the registration override or the type name.
    pub query_name: String,
    /// Short name of the declaring type.
    pub result_type_name: String,
    /// Resource identifier as declared.
    pub resource_name: String,
    /// Qualified catalog name the identifier resolved to.
    pub qualified_resource_name: String,
    /// Resource text.
    pub query_text: String,
}

impl ResolvedQuery {
    /// Creates a resolved query.
    #[must_use]
    pub fn new(parts: ResolvedQueryParts) -> Self {
        Self {
            query_name: parts.query_name,
            result_type_name: parts.result_type_name,
            resource_name: parts.resource_name,
            qualified_resource_name: parts.qualified_resource_name,
            query_text: Arc::from(parts.query_text),
        }
    }

    /// Returns the display name of the query.
    #[must_use]
    pub fn query_name(&self) -> &str {
        &self.query_name
    }

    /// Returns the short name of the declaring type.
    #[must_use]
    pub fn result_type_name(&self) -> &str {
        &self.result_type_name
    }

    /// Returns the resource identifier as declared on the registration.
    #[must_use]
    pub fn resource_name(&self) -> &str {
        &self.resource_name
    }

    /// Returns the qualified catalog name the identifier resolved to.
    #[must_use]
    pub fn qualified_resource_name(&self) -> &str {
        &self.qualified_resource_name
    }

    /// Returns the query text.
    #[must_use]
    pub fn query_text(&self) -> &str {
        &self.query_text
    }
}
