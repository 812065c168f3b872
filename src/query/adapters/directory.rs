//! Resource catalog over a directory tree on disk.

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, BTreeSet};
use std::io;
use std::sync::{Arc, RwLock};

use crate::query::domain::resource::qualified_name;
use crate::query::ports::{ResourceCatalog, ResourceCatalogError, ResourceCatalogResult};

type ResourceIndex = BTreeMap<String, Utf8PathBuf>;

/// Catalog reading resources from a directory through a capability handle.
///
/// Every listing walks the tree again, so edits on disk are visible to the
/// next discovery pass. Reads go through the index built by the latest
/// listing: a file added after the listing is not readable until the tree
/// is listed again. Naming follows [`EmbeddedResourceCatalog`]:
/// `Queries/SessionCount.sql` becomes `<namespace>.Queries.SessionCount.sql`.
///
/// [`EmbeddedResourceCatalog`]: super::EmbeddedResourceCatalog
#[derive(Debug, Clone)]
pub struct DirectoryResourceCatalog {
    root: Utf8PathBuf,
    namespace: String,
    index: Arc<RwLock<Option<ResourceIndex>>>,
}

impl DirectoryResourceCatalog {
    /// Creates a catalog rooted at `root`.
    #[must_use]
    pub fn new(root: impl Into<Utf8PathBuf>, namespace: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            namespace: namespace.into(),
            index: Arc::new(RwLock::new(None)),
        }
    }

    /// Returns the root directory.
    #[must_use]
    pub fn root(&self) -> &Utf8Path {
        &self.root
    }

    fn open_root(&self) -> ResourceCatalogResult<Dir> {
        Dir::open_ambient_dir(&self.root, ambient_authority()).map_err(ResourceCatalogError::io)
    }

    fn refresh(&self) -> ResourceCatalogResult<ResourceIndex> {
        let root = self.open_root()?;
        let mut index = BTreeMap::new();
        index_files(&root, Utf8Path::new(""), &self.namespace, &mut index)?;
        let mut cached = self.index.write().map_err(|err| {
            ResourceCatalogError::io(io::Error::other(err.to_string()))
        })?;
        *cached = Some(index.clone());
        Ok(index)
    }

    fn indexed_path(&self, qualified_name: &str) -> ResourceCatalogResult<Option<Utf8PathBuf>> {
        {
            let cached = self.index.read().map_err(|err| {
                ResourceCatalogError::io(io::Error::other(err.to_string()))
            })?;
            if let Some(index) = cached.as_ref() {
                return Ok(index.get(qualified_name).cloned());
            }
        }
        Ok(self.refresh()?.remove(qualified_name))
    }
}

impl ResourceCatalog for DirectoryResourceCatalog {
    fn list_resource_names(&self) -> ResourceCatalogResult<BTreeSet<String>> {
        Ok(self.refresh()?.into_keys().collect())
    }

    fn resource_text(&self, qualified_name: &str) -> ResourceCatalogResult<Option<String>> {
        let Some(relative) = self.indexed_path(qualified_name)? else {
            return Ok(None);
        };
        let root = self.open_root()?;
        match root.read_to_string(&relative) {
            Ok(text) => Ok(Some(text)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) if err.kind() == io::ErrorKind::InvalidData => Err(
                ResourceCatalogError::InvalidEncoding(qualified_name.to_owned()),
            ),
            Err(err) => Err(ResourceCatalogError::io(err)),
        }
    }
}

fn index_files(
    dir: &Dir,
    prefix: &Utf8Path,
    namespace: &str,
    index: &mut ResourceIndex,
) -> ResourceCatalogResult<()> {
    for item in dir.entries().map_err(ResourceCatalogError::io)? {
        let entry = item.map_err(ResourceCatalogError::io)?;
        let relative = prefix.join(entry.file_name().map_err(ResourceCatalogError::io)?);
        let file_type = entry.file_type().map_err(ResourceCatalogError::io)?;
        if file_type.is_dir() {
            let child = entry.open_dir().map_err(ResourceCatalogError::io)?;
            index_files(&child, &relative, namespace, index)?;
        } else if file_type.is_file() {
            match index.entry(qualified_name(namespace, relative.as_str())) {
                Entry::Vacant(slot) => {
                    slot.insert(relative);
                }
                Entry::Occupied(slot) => {
                    return Err(ResourceCatalogError::duplicate_name(
                        slot.key().as_str(),
                        slot.get().as_str(),
                        relative.as_str(),
                    ));
                }
            }
        }
    }
    Ok(())
}
