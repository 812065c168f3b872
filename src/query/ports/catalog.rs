//! Resource catalog port.
//!
//! The catalog exposes the text resources shipped with the host, keyed by
//! qualified name. Services only read from it.

use std::collections::BTreeSet;
use std::sync::Arc;
use thiserror::Error;

/// Result type for resource catalog operations.
pub type ResourceCatalogResult<T> = Result<T, ResourceCatalogError>;

/// Read-only access to the host's text resources.
pub trait ResourceCatalog: Send + Sync {
    /// Lists the qualified names of every resource currently available.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceCatalogError`] when the underlying store cannot be
    /// enumerated.
    fn list_resource_names(&self) -> ResourceCatalogResult<BTreeSet<String>>;

    /// Reads the text of a resource by qualified name.
    ///
    /// Returns `None` when no resource has that name.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceCatalogError`] when the resource exists but cannot
    /// be read as text.
    fn resource_text(&self, qualified_name: &str) -> ResourceCatalogResult<Option<String>>;
}

/// Errors returned by resource catalog adapters.
#[derive(Debug, Clone, Error)]
pub enum ResourceCatalogError {
    /// The resource is not valid UTF-8 text.
    #[error("resource '{0}' is not valid UTF-8")]
    InvalidEncoding(String),

    /// Two source files map to the same qualified name.
    #[error("resource name '{name}' is shared by {}", .paths.join(", "))]
    DuplicateName {
        /// Qualified name both files map to.
        name: String,
        /// Source paths of the colliding files, sorted.
        paths: Vec<String>,
    },

    /// The catalog cannot be read.
    #[error("resource catalog unavailable: {0}")]
    Unavailable(String),

    /// Filesystem failure.
    #[error("resource catalog I/O error: {0}")]
    Io(Arc<std::io::Error>),
}

impl ResourceCatalogError {
    /// Reports two source paths that map to the same qualified name.
    #[must_use]
    pub fn duplicate_name(name: impl Into<String>, first: &str, second: &str) -> Self {
        let mut paths = vec![first.to_owned(), second.to_owned()];
        paths.sort();
        Self::DuplicateName {
            name: name.into(),
            paths,
        }
    }

    /// Wraps an I/O error.
    #[must_use]
    pub fn io(err: std::io::Error) -> Self {
        Self::Io(Arc::new(err))
    }
}
