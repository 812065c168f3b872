//! Resource name resolution.
//!
//! Declared identifiers are often shorter than the qualified catalog name:
//! `Queries.SessionCount.sql`, `SessionCount.sql` or just `SessionCount` for
//! `Sqlmon.Queries.SessionCount.sql`. The resolver tries an exact match
//! first, then a unique suffix match. An identifier without any dot is
//! finally matched against each entry's file stem. The first strategy that
//! finds something decides the outcome.

use std::collections::BTreeSet;
use std::fmt;
use thiserror::Error;

use crate::query::domain::resource::{file_stem, is_bare_stem, normalise_identifier};
use crate::query::ports::{ResourceCatalog, ResourceCatalogError, ResourceCatalogResult};

/// Result type for resource resolution.
pub type ResolutionResult<T> = Result<T, ResolutionError>;

/// Errors returned while resolving a resource identifier.
#[derive(Debug, Clone, Error)]
pub enum ResolutionError {
    /// No catalog entry matches the identifier under any strategy.
    #[error("no resource matches '{0}'")]
    ResourceNotFound(String),

    /// More than one catalog entry matches under the same strategy.
    #[error("resource '{identifier}' is ambiguous: {}", .candidates.join(", "))]
    AmbiguousResource {
        /// Identifier as declared.
        identifier: String,
        /// Matching qualified names, sorted.
        candidates: Vec<String>,
    },

    /// The catalog failed.
    #[error(transparent)]
    Catalog(#[from] ResourceCatalogError),
}

/// The strategy that located a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchStrategy {
    /// The identifier is the qualified name.
    Exact,
    /// The qualified name ends with `.` followed by the identifier.
    Suffix,
    /// The identifier has no extension and equals the qualified name's file
    /// stem.
    FileName,
}

/// A resource located in the catalog together with its text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedResource {
    /// Qualified catalog name.
    pub qualified_name: String,
    /// Strategy that matched.
    pub strategy: MatchStrategy,
    /// Resource text.
    pub text: String,
}

/// Resolves identifiers against a snapshot of a catalog's names.
///
/// The snapshot is taken once in [`ResourceResolver::snapshot`] and reused
/// for every identifier of a discovery pass. Nothing is cached across
/// snapshots, so a later pass sees an updated catalog.
pub struct ResourceResolver<'a, C>
where
    C: ResourceCatalog + ?Sized,
{
    catalog: &'a C,
    names: BTreeSet<String>,
}

impl<C> fmt::Debug for ResourceResolver<'_, C>
where
    C: ResourceCatalog + ?Sized,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceResolver")
            .field("resource_count", &self.names.len())
            .finish_non_exhaustive()
    }
}

impl<'a, C> ResourceResolver<'a, C>
where
    C: ResourceCatalog + ?Sized,
{
    /// Captures the catalog's current resource names.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceCatalogError`] when the catalog cannot be listed.
    pub fn snapshot(catalog: &'a C) -> ResourceCatalogResult<Self> {
        let names = catalog.list_resource_names()?;
        tracing::debug!(resource_count = names.len(), "Captured resource catalog snapshot");
        Ok(Self { catalog, names })
    }

    /// Returns the names captured by the snapshot.
    #[must_use]
    pub const fn resource_names(&self) -> &BTreeSet<String> {
        &self.names
    }

    /// Finds the qualified name an identifier refers to.
    ///
    /// # Errors
    ///
    /// Returns [`ResolutionError::AmbiguousResource`] when a strategy matches
    /// more than one name, or [`ResolutionError::ResourceNotFound`] when no
    /// strategy matches.
    pub fn locate(&self, identifier: &str) -> ResolutionResult<(&str, MatchStrategy)> {
        let normalised = normalise_identifier(identifier);
        if normalised.is_empty() {
            return Err(ResolutionError::ResourceNotFound(identifier.to_owned()));
        }

        if let Some(name) = self.names.get(&normalised) {
            return Ok((name.as_str(), MatchStrategy::Exact));
        }

        let suffix = format!(".{normalised}");
        if let Some(name) = self.single_match(identifier, |name| name.ends_with(&suffix))? {
            return Ok((name, MatchStrategy::Suffix));
        }

        if is_bare_stem(&normalised)
            && let Some(name) =
                self.single_match(identifier, |name| file_stem(name) == normalised)?
        {
            return Ok((name, MatchStrategy::FileName));
        }

        Err(ResolutionError::ResourceNotFound(identifier.to_owned()))
    }

    /// Resolves an identifier to its qualified name and text.
    ///
    /// # Errors
    ///
    /// Returns the errors of [`ResourceResolver::locate`], or
    /// [`ResolutionError::Catalog`] when the text cannot be read. A resource
    /// removed since the snapshot is reported as not found.
    pub fn resolve(&self, identifier: &str) -> ResolutionResult<ResolvedResource> {
        let (qualified_name, strategy) = self.locate(identifier)?;
        let text = self
            .catalog
            .resource_text(qualified_name)?
            .ok_or_else(|| ResolutionError::ResourceNotFound(identifier.to_owned()))?;
        tracing::debug!(
            identifier,
            qualified_name,
            strategy = ?strategy,
            "Resolved query resource"
        );
        Ok(ResolvedResource {
            qualified_name: qualified_name.to_owned(),
            strategy,
            text,
        })
    }

    fn single_match(
        &self,
        identifier: &str,
        predicate: impl Fn(&str) -> bool,
    ) -> ResolutionResult<Option<&str>> {
        let candidates: Vec<&str> = self
            .names
            .iter()
            .map(String::as_str)
            .filter(|name| predicate(name))
            .collect();
        match candidates.as_slice() {
            [] => Ok(None),
            [single] => Ok(Some(*single)),
            _ => Err(ResolutionError::AmbiguousResource {
                identifier: identifier.to_owned(),
                candidates: candidates.iter().map(|name| (*name).to_owned()).collect(),
            }),
        }
    }
}

/// Resolves a single identifier against a fresh snapshot of `catalog`.
///
/// # Errors
///
/// See [`ResourceResolver::resolve`].
pub fn resolve<C>(catalog: &C, identifier: &str) -> ResolutionResult<ResolvedResource>
where
    C: ResourceCatalog + ?Sized,
{
    ResourceResolver::snapshot(catalog)?.resolve(identifier)
}
