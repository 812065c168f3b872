//! Shared world state for query discovery BDD scenarios.

use std::sync::Arc;

use async_trait::async_trait;
use rstest::fixture;
use serde::Deserialize;
use sqlmon::query::adapters::QueryTypeList;
use sqlmon::query::adapters::memory::InMemoryResourceCatalog;
use sqlmon::query::domain::{ComponentData, QueryResult, QueryRow, QueryType};
use sqlmon::query::ports::{DataAccess, DataAccessResult, QueryParameters};
use sqlmon::query::services::{QueryDescriptor, QueryLocator, QueryLocatorError};

/// Data access returning a fixed set of rows.
#[derive(Debug, Default)]
pub struct FixedRows {
    /// Rows returned for every query.
    pub rows: Vec<QueryRow>,
}

#[async_trait]
impl DataAccess for FixedRows {
    type Connection = ();

    async fn execute(
        &self,
        _connection: &(),
        _query_text: &str,
        _parameters: &QueryParameters,
    ) -> DataAccessResult<Vec<QueryRow>> {
        Ok(self.rows.clone())
    }
}

/// Result type mapped from a session count row.
#[derive(Debug, Deserialize)]
pub struct SessionCount {
    /// Number of sessions reported by the server.
    pub session_count: f64,
}

impl QueryResult for SessionCount {
    fn add_metrics(&self, component_data: &mut ComponentData) {
        component_data.add_metric("Sessions/Count", self.session_count);
    }
}

/// Locator type used by the BDD world.
pub type TestLocator = QueryLocator<FixedRows, InMemoryResourceCatalog, QueryTypeList>;

/// Scenario world for query discovery behaviour tests.
#[derive(Default)]
pub struct DiscoveryWorld {
    /// Catalog the locator resolves against.
    pub catalog: InMemoryResourceCatalog,
    /// Rows the data-access collaborator returns.
    pub rows: Vec<QueryRow>,
    /// Query types in the discovery scope.
    pub query_types: Vec<QueryType>,
    /// Result of the last discovery pass.
    pub prepared: Option<Result<Vec<QueryDescriptor<FixedRows>>, QueryLocatorError>>,
    /// Components populated by invocation steps.
    pub components: Vec<ComponentData>,
}

impl DiscoveryWorld {
    /// Builds a locator over the world's catalog, rows and query types.
    #[must_use]
    pub fn locator(&self) -> TestLocator {
        QueryLocator::new(
            Arc::new(FixedRows {
                rows: self.rows.clone(),
            }),
            Arc::new(self.catalog.clone()),
        )
        .with_scope(QueryTypeList::new(self.query_types.clone()))
    }

    /// Returns the prepared queries, failing when discovery did not succeed.
    ///
    /// # Errors
    ///
    /// Returns an error when no pass has run or the pass failed.
    pub fn prepared_queries(&self) -> Result<&[QueryDescriptor<FixedRows>], eyre::Report> {
        match self.prepared.as_ref() {
            Some(Ok(queries)) => Ok(queries),
            Some(Err(err)) => Err(eyre::eyre!("discovery failed: {err}")),
            None => Err(eyre::eyre!("queries have not been prepared")),
        }
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> DiscoveryWorld {
    DiscoveryWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
