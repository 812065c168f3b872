//! Resource catalog over files compiled into the binary.

use include_dir::{Dir, File};
use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use crate::query::domain::resource::qualified_name;
use crate::query::ports::{ResourceCatalog, ResourceCatalogError, ResourceCatalogResult};

/// Catalog over a directory embedded with [`include_dir::include_dir!`].
///
/// A file at `Queries/SessionCount.sql` under the embedded root is exposed as
/// `<namespace>.Queries.SessionCount.sql`.
///
/// ```ignore
/// use include_dir::{Dir, include_dir};
/// use sqlmon::query::adapters::EmbeddedResourceCatalog;
///
/// static RESOURCES: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/resources");
///
/// let catalog = EmbeddedResourceCatalog::new("Sqlmon", &RESOURCES)?;
/// ```
#[derive(Clone)]
pub struct EmbeddedResourceCatalog {
    resources: BTreeMap<String, &'static File<'static>>,
}

impl EmbeddedResourceCatalog {
    /// Indexes every file below `root` under `namespace`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceCatalogError::DuplicateName`] when two files map to
    /// the same qualified name, such as `Queries/A.sql` and `Queries.A.sql`.
    pub fn new(namespace: &str, root: &'static Dir<'static>) -> ResourceCatalogResult<Self> {
        let mut resources = BTreeMap::new();
        index_files(root, namespace, &mut resources)?;
        Ok(Self { resources })
    }
}

impl fmt::Debug for EmbeddedResourceCatalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EmbeddedResourceCatalog")
            .field("resources", &self.resources.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl ResourceCatalog for EmbeddedResourceCatalog {
    fn list_resource_names(&self) -> ResourceCatalogResult<BTreeSet<String>> {
        Ok(self.resources.keys().cloned().collect())
    }

    fn resource_text(&self, qualified_name: &str) -> ResourceCatalogResult<Option<String>> {
        self.resources
            .get(qualified_name)
            .map(|file| {
                file.contents_utf8()
                    .map(str::to_owned)
                    .ok_or_else(|| ResourceCatalogError::InvalidEncoding(qualified_name.to_owned()))
            })
            .transpose()
    }
}

fn index_files(
    dir: &'static Dir<'static>,
    namespace: &str,
    resources: &mut BTreeMap<String, &'static File<'static>>,
) -> ResourceCatalogResult<()> {
    for file in dir.files() {
        let Some(path) = file.path().to_str() else {
            tracing::warn!(
                path = %file.path().display(),
                "Skipping embedded resource with non UTF-8 path"
            );
            continue;
        };
        match resources.entry(qualified_name(namespace, path)) {
            Entry::Vacant(slot) => {
                slot.insert(file);
            }
            Entry::Occupied(slot) => {
                let existing = slot.get().path().to_string_lossy();
                return Err(ResourceCatalogError::duplicate_name(
                    slot.key().as_str(),
                    &existing,
                    path,
                ));
            }
        }
    }
    for child in dir.dirs() {
        index_files(child, namespace, resources)?;
    }
    Ok(())
}
