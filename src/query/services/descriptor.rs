//! Prepared, invocable queries.

use std::fmt;
use std::sync::Arc;
use thiserror::Error;

use crate::query::domain::{QueryResult, ResolvedQuery, RowMapper};
use crate::query::ports::{DataAccess, DataAccessError, QueryParameters};

/// Errors returned while invoking a prepared query.
#[derive(Debug, Error)]
pub enum InvocationError {
    /// The data-access collaborator failed.
    #[error(transparent)]
    DataAccess(#[from] DataAccessError),

    /// A returned row could not be converted into the query's result type.
    #[error("row returned for query '{query_name}' does not match {result_type}: {source}")]
    RowMapping {
        /// Display name of the query.
        query_name: String,
        /// Result type the row was mapped to.
        result_type: String,
        /// Deserialization failure.
        #[source]
        source: serde_json::Error,
    },
}

/// Result type for query invocation.
pub type InvocationResult<T> = Result<T, InvocationError>;

/// A resolved query bound to a data-access collaborator.
///
/// The descriptor holds no connection state: each call to
/// [`QueryDescriptor::invoke`] hands the resolved text to the collaborator
/// and maps the rows it returns. Descriptors can be cloned and invoked any
/// number of times, from any task.
pub struct QueryDescriptor<D>
where
    D: DataAccess,
{
    query: ResolvedQuery,
    row_mapper: RowMapper,
    data_access: Arc<D>,
}

impl<D> QueryDescriptor<D>
where
    D: DataAccess,
{
    pub(crate) const fn new(
        query: ResolvedQuery,
        row_mapper: RowMapper,
        data_access: Arc<D>,
    ) -> Self {
        Self {
            query,
            row_mapper,
            data_access,
        }
    }

    /// Returns the resolved query.
    #[must_use]
    pub const fn query(&self) -> &ResolvedQuery {
        &self.query
    }

    /// Returns the display name of the query.
    #[must_use]
    pub fn query_name(&self) -> &str {
        self.query.query_name()
    }

    /// Returns the short name of the result type.
    #[must_use]
    pub fn result_type_name(&self) -> &str {
        self.query.result_type_name()
    }

    /// Returns the resource identifier as declared.
    #[must_use]
    pub fn resource_name(&self) -> &str {
        self.query.resource_name()
    }

    /// Returns the resolved query text.
    #[must_use]
    pub fn query_text(&self) -> &str {
        self.query.query_text()
    }

    /// Runs the query without parameters.
    ///
    /// # Errors
    ///
    /// Returns [`InvocationError::DataAccess`] with the collaborator's error
    /// unchanged, or [`InvocationError::RowMapping`] when a row does not fit
    /// the result type.
    pub async fn invoke(
        &self,
        connection: &D::Connection,
    ) -> InvocationResult<Vec<Box<dyn QueryResult>>> {
        self.invoke_with(connection, &QueryParameters::new()).await
    }

    /// Runs the query with named parameters.
    ///
    /// # Errors
    ///
    /// See [`QueryDescriptor::invoke`].
    pub async fn invoke_with(
        &self,
        connection: &D::Connection,
        parameters: &QueryParameters,
    ) -> InvocationResult<Vec<Box<dyn QueryResult>>> {
        let rows = self
            .data_access
            .execute(connection, self.query.query_text(), parameters)
            .await?;
        rows.into_iter()
            .map(|row| {
                (self.row_mapper)(row).map_err(|source| InvocationError::RowMapping {
                    query_name: self.query.query_name().to_owned(),
                    result_type: self.query.result_type_name().to_owned(),
                    source,
                })
            })
            .collect()
    }
}

impl<D> Clone for QueryDescriptor<D>
where
    D: DataAccess,
{
    fn clone(&self) -> Self {
        Self {
            query: self.query.clone(),
            row_mapper: self.row_mapper,
            data_access: Arc::clone(&self.data_access),
        }
    }
}

impl<D> fmt::Debug for QueryDescriptor<D>
where
    D: DataAccess,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QueryDescriptor")
            .field("query", &self.query)
            .finish_non_exhaustive()
    }
}
