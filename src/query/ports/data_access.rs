//! Data-access port used by query descriptors at invocation time.

use async_trait::async_trait;
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::Arc;
use thiserror::Error;

use crate::query::domain::QueryRow;

/// Named parameters passed alongside the query text.
pub type QueryParameters = BTreeMap<String, Value>;

/// Result type for data-access operations.
pub type DataAccessResult<T> = Result<T, DataAccessError>;

/// Executes query text against a data source.
///
/// The text is opaque to the caller: it is passed through exactly as it was
/// read from the resource catalog.
#[async_trait]
pub trait DataAccess: Send + Sync {
    /// Connection or context the query runs against.
    type Connection: Send + Sync;

    /// Runs `query_text` and returns the resulting rows.
    ///
    /// `parameters` is empty when the caller supplies none.
    ///
    /// # Errors
    ///
    /// Returns [`DataAccessError`] when execution fails.
    async fn execute(
        &self,
        connection: &Self::Connection,
        query_text: &str,
        parameters: &QueryParameters,
    ) -> DataAccessResult<Vec<QueryRow>>;
}

/// Errors returned by data-access adapters.
#[derive(Debug, Clone, Error)]
pub enum DataAccessError {
    /// The connection could not be used.
    #[error("connection error: {0}")]
    Connection(String),

    /// The data source rejected or failed the query.
    #[error("query execution failed: {0}")]
    Execution(Arc<dyn std::error::Error + Send + Sync>),
}

impl DataAccessError {
    /// Wraps an execution error from the adapter.
    pub fn execution(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Execution(Arc::new(err))
    }
}
