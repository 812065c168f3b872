//! Query discovery: scanning, filtering, resolution and binding.
//!
//! [`QueryLocator`] runs a whole discovery pass before returning anything. A
//! single invalid type or unresolvable resource fails the pass, so a metrics
//! pipeline never starts with a silently shortened query set.

use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

use super::descriptor::QueryDescriptor;
use super::resolver::{ResolutionError, ResourceResolver};
use super::scanner::scan;
use crate::query::adapters::RegisteredQueryTypes;
use crate::query::domain::{
    QueryDomainError, QueryRegistration, QueryType, ResolvedQuery, ResolvedQueryParts, RowMapper,
};
use crate::query::ports::{DataAccess, QueryScope, ResourceCatalog, ResourceCatalogError};
use crate::query::settings::LocatorSettings;

/// Errors that abort a discovery pass.
#[derive(Debug, Clone, Error)]
pub enum QueryLocatorError {
    /// A type declares queries but has no result capability.
    #[error("query type '{query_type}' declares queries but does not implement QueryResult")]
    InvalidQueryType {
        /// Full path of the offending type.
        query_type: String,
    },

    /// A registration is malformed.
    #[error(transparent)]
    InvalidRegistration(#[from] QueryDomainError),

    /// No catalog entry matches an enabled registration.
    #[error("query type '{query_type}' references missing resource '{resource}'")]
    ResourceNotFound {
        /// Full path of the declaring type.
        query_type: String,
        /// Resource identifier as declared.
        resource: String,
    },

    /// An enabled registration matches several catalog entries.
    #[error(
        "query type '{query_type}' references ambiguous resource '{resource}': {}",
        .candidates.join(", ")
    )]
    AmbiguousResource {
        /// Full path of the declaring type.
        query_type: String,
        /// Resource identifier as declared.
        resource: String,
        /// Matching qualified names, sorted.
        candidates: Vec<String>,
    },

    /// The resource catalog failed.
    #[error(transparent)]
    Catalog(#[from] ResourceCatalogError),
}

impl QueryLocatorError {
    fn from_resolution(
        err: ResolutionError,
        query_type: &QueryType,
        registration: &QueryRegistration,
    ) -> Self {
        match err {
            ResolutionError::ResourceNotFound(_) => Self::ResourceNotFound {
                query_type: query_type.type_path().to_owned(),
                resource: registration.resource().to_owned(),
            },
            ResolutionError::AmbiguousResource { candidates, .. } => Self::AmbiguousResource {
                query_type: query_type.type_path().to_owned(),
                resource: registration.resource().to_owned(),
                candidates,
            },
            ResolutionError::Catalog(source) => Self::Catalog(source),
        }
    }
}

/// Result type for query locator operations.
pub type QueryLocatorResult<T> = Result<T, QueryLocatorError>;

/// Discovers registered queries and binds them to a data-access collaborator.
///
/// The default scope is [`RegisteredQueryTypes`]; use
/// [`QueryLocator::with_scope`] or [`QueryLocator::prepare_queries_for`] to
/// run a pass over a different set of types.
pub struct QueryLocator<D, C, S = RegisteredQueryTypes>
where
    D: DataAccess,
    C: ResourceCatalog + ?Sized,
    S: QueryScope,
{
    data_access: Arc<D>,
    catalog: Arc<C>,
    scope: S,
    excluded_types: BTreeSet<String>,
}

impl<D, C> QueryLocator<D, C>
where
    D: DataAccess,
    C: ResourceCatalog + ?Sized,
{
    /// Creates a locator over every registered query type.
    #[must_use]
    pub const fn new(data_access: Arc<D>, catalog: Arc<C>) -> Self {
        Self {
            data_access,
            catalog,
            scope: RegisteredQueryTypes,
            excluded_types: BTreeSet::new(),
        }
    }
}

impl<D, C, S> QueryLocator<D, C, S>
where
    D: DataAccess,
    C: ResourceCatalog + ?Sized,
    S: QueryScope,
{
    /// Replaces the discovery scope.
    #[must_use]
    pub fn with_scope<T>(self, scope: T) -> QueryLocator<D, C, T>
    where
        T: QueryScope,
    {
        QueryLocator {
            data_access: self.data_access,
            catalog: self.catalog,
            scope,
            excluded_types: self.excluded_types,
        }
    }

    /// Skips the named types during discovery.
    ///
    /// Names match either the short type name or the full type path.
    #[must_use]
    pub fn with_exclusions(
        mut self,
        type_names: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.excluded_types
            .extend(type_names.into_iter().map(Into::into));
        self
    }

    /// Applies the exclusions from `settings`.
    #[must_use]
    pub fn with_settings(self, settings: &LocatorSettings) -> Self {
        self.with_exclusions(settings.excluded_types.iter().cloned())
    }

    /// Prepares one descriptor per enabled registration in the scope.
    ///
    /// # Errors
    ///
    /// Returns [`QueryLocatorError`] when any type lacks the result
    /// capability, any enabled registration is malformed or does not resolve
    /// to exactly one resource, or the catalog fails. No descriptors are
    /// returned in that case.
    pub fn prepare_queries(&self) -> QueryLocatorResult<Vec<QueryDescriptor<D>>> {
        self.prepare(scan(&self.scope))
    }

    /// Prepares descriptors for an explicit list of types instead of the
    /// scope.
    ///
    /// # Errors
    ///
    /// See [`QueryLocator::prepare_queries`].
    pub fn prepare_queries_for(
        &self,
        query_types: impl IntoIterator<Item = QueryType>,
    ) -> QueryLocatorResult<Vec<QueryDescriptor<D>>> {
        self.prepare(query_types.into_iter())
    }

    /// Runs a discovery pass over the scope without binding the results.
    ///
    /// # Errors
    ///
    /// See [`QueryLocator::prepare_queries`].
    pub fn resolve_queries(&self) -> QueryLocatorResult<Vec<ResolvedQuery>> {
        Ok(self
            .discover(scan(&self.scope))?
            .into_iter()
            .map(|(query, _)| query)
            .collect())
    }

    /// Runs a discovery pass over an explicit list of types without binding
    /// the results.
    ///
    /// # Errors
    ///
    /// See [`QueryLocator::prepare_queries`].
    pub fn resolve_queries_for(
        &self,
        query_types: impl IntoIterator<Item = QueryType>,
    ) -> QueryLocatorResult<Vec<ResolvedQuery>> {
        Ok(self
            .discover(query_types.into_iter())?
            .into_iter()
            .map(|(query, _)| query)
            .collect())
    }

    fn prepare(
        &self,
        query_types: impl Iterator<Item = QueryType>,
    ) -> QueryLocatorResult<Vec<QueryDescriptor<D>>> {
        Ok(self
            .discover(query_types)?
            .into_iter()
            .map(|(query, row_mapper)| {
                QueryDescriptor::new(query, row_mapper, Arc::clone(&self.data_access))
            })
            .collect())
    }

    fn discover(
        &self,
        query_types: impl Iterator<Item = QueryType>,
    ) -> QueryLocatorResult<Vec<(ResolvedQuery, RowMapper)>> {
        let resolver = ResourceResolver::snapshot(&*self.catalog)?;

        let mut resolved = Vec::new();
        for query_type in query_types {
            if query_type.registrations().is_empty() {
                continue;
            }
            if self.is_excluded(&query_type) {
                tracing::debug!(
                    query_type = query_type.type_path(),
                    "Skipping excluded query type"
                );
                continue;
            }
            let Some(row_mapper) = query_type.row_mapper() else {
                tracing::warn!(
                    query_type = query_type.type_path(),
                    "Query type declares queries but does not implement QueryResult"
                );
                return Err(QueryLocatorError::InvalidQueryType {
                    query_type: query_type.type_path().to_owned(),
                });
            };

            for registration in query_type
                .registrations()
                .iter()
                .filter(|registration| registration.is_enabled())
            {
                let query = resolve_registration(&resolver, &query_type, registration)
                    .inspect_err(|err| tracing::warn!(error = %err, "Query discovery failed"))?;
                resolved.push((query, row_mapper));
            }
        }

        tracing::info!(query_count = resolved.len(), "Prepared queries");
        Ok(resolved)
    }

    fn is_excluded(&self, query_type: &QueryType) -> bool {
        self.excluded_types
            .iter()
            .any(|name| query_type.is_named(name))
    }
}

fn resolve_registration<C>(
    resolver: &ResourceResolver<'_, C>,
    query_type: &QueryType,
    registration: &QueryRegistration,
) -> QueryLocatorResult<ResolvedQuery>
where
    C: ResourceCatalog + ?Sized,
{
    registration.validate(query_type.type_path())?;
    let resource = resolver
        .resolve(registration.resource())
        .map_err(|err| QueryLocatorError::from_resolution(err, query_type, registration))?;
    Ok(ResolvedQuery::new(ResolvedQueryParts {
        query_name: registration
            .query_name()
            .unwrap_or_else(|| query_type.name())
            .to_owned(),
        result_type_name: query_type.name().to_owned(),
        resource_name: registration.resource().to_owned(),
        qualified_resource_name: resource.qualified_name,
        query_text: resource.text,
    }))
}

impl<D, C, S> Clone for QueryLocator<D, C, S>
where
    D: DataAccess,
    C: ResourceCatalog + ?Sized,
    S: QueryScope + Clone,
{
    fn clone(&self) -> Self {
        Self {
            data_access: Arc::clone(&self.data_access),
            catalog: Arc::clone(&self.catalog),
            scope: self.scope.clone(),
            excluded_types: self.excluded_types.clone(),
        }
    }
}

impl<D, C, S> fmt::Debug for QueryLocator<D, C, S>
where
    D: DataAccess,
    C: ResourceCatalog + ?Sized,
    S: QueryScope + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QueryLocator")
            .field("scope", &self.scope)
            .field("excluded_types", &self.excluded_types)
            .finish_non_exhaustive()
    }
}
