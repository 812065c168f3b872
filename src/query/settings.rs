//! Locator configuration.
//!
//! Settings are read from JSON, typically a section of the agent's
//! configuration file:
//!
//! ```json
//! {
//!   "resource_namespace": "Sqlmon",
//!   "resource_dir": "/etc/sqlmon/queries",
//!   "excluded_types": ["LegacyBufferPoolStats"]
//! }
//! ```

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use serde::{Deserialize, Serialize};
use std::io;
use thiserror::Error;

use crate::query::adapters::DirectoryResourceCatalog;

/// Errors returned while loading locator settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The settings path does not name a file.
    #[error("settings path '{0}' does not name a file")]
    InvalidPath(Utf8PathBuf),

    /// The settings file could not be read.
    #[error("failed to read settings from '{path}': {source}")]
    Read {
        /// Path of the settings file.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The settings are not valid JSON for [`LocatorSettings`].
    #[error("failed to parse locator settings: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Configuration for query discovery.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LocatorSettings {
    /// Namespace prefixed to resource names read from `resource_dir`.
    pub resource_namespace: String,
    /// Directory holding query resources on disk, if any.
    pub resource_dir: Option<Utf8PathBuf>,
    /// Query types skipped during discovery, by short name or full path.
    pub excluded_types: Vec<String>,
}

impl LocatorSettings {
    /// Parses settings from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Parse`] when the document is malformed.
    pub fn from_json_str(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads settings from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::InvalidPath`] when `path` has no file name,
    /// [`SettingsError::Read`] when the file cannot be read, or
    /// [`SettingsError::Parse`] when it is malformed.
    pub fn load(path: &Utf8Path) -> Result<Self, SettingsError> {
        let file_name = path
            .file_name()
            .ok_or_else(|| SettingsError::InvalidPath(path.to_owned()))?;
        let parent = path
            .parent()
            .filter(|parent| !parent.as_str().is_empty())
            .unwrap_or_else(|| Utf8Path::new("."));

        let read_error = |source: io::Error| SettingsError::Read {
            path: path.to_owned(),
            source,
        };
        let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(read_error)?;
        let json = dir.read_to_string(file_name).map_err(read_error)?;
        Self::from_json_str(&json)
    }

    /// Builds a directory catalog when `resource_dir` is set.
    #[must_use]
    pub fn directory_catalog(&self) -> Option<DirectoryResourceCatalog> {
        self.resource_dir
            .as_ref()
            .map(|dir| DirectoryResourceCatalog::new(dir.clone(), self.resource_namespace.clone()))
    }
}
