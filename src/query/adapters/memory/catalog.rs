//! In-memory resource catalog.

use std::collections::{BTreeMap, BTreeSet};

use crate::query::ports::{ResourceCatalog, ResourceCatalogResult};

/// Map-backed resource catalog.
#[derive(Debug, Clone, Default)]
pub struct InMemoryResourceCatalog {
    resources: BTreeMap<String, String>,
}

impl InMemoryResourceCatalog {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a catalog from `(qualified name, text)` pairs.
    #[must_use]
    pub fn with_resources(
        resources: impl IntoIterator<Item = (impl Into<String>, impl Into<String>)>,
    ) -> Self {
        Self {
            resources: resources
                .into_iter()
                .map(|(name, text)| (name.into(), text.into()))
                .collect(),
        }
    }

    /// Adds or replaces a resource.
    pub fn insert(&mut self, qualified_name: impl Into<String>, text: impl Into<String>) {
        self.resources.insert(qualified_name.into(), text.into());
    }
}

impl ResourceCatalog for InMemoryResourceCatalog {
    fn list_resource_names(&self) -> ResourceCatalogResult<BTreeSet<String>> {
        Ok(self.resources.keys().cloned().collect())
    }

    fn resource_text(&self, qualified_name: &str) -> ResourceCatalogResult<Option<String>> {
        Ok(self.resources.get(qualified_name).cloned())
    }
}
