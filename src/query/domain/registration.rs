//! Declarative query registration metadata.

use std::borrow::Cow;

use super::QueryDomainError;

/// A single query declared by a query type.
///
/// Registrations name the text resource holding the query, whether the query
/// takes part in the current run, and an optional display name. They are
/// plain data: constructing one has no side effects and nothing mutates it
/// afterwards.
///
/// Static registrations are usually written inside the
/// [`query_type!`](crate::query_type) macro.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryRegistration {
    resource: Cow<'static, str>,
    enabled: bool,
    query_name: Option<Cow<'static, str>>,
}

impl QueryRegistration {
    /// Creates an enabled registration for a static resource identifier.
    #[must_use]
    pub const fn new(resource: &'static str) -> Self {
        Self {
            resource: Cow::Borrowed(resource),
            enabled: true,
            query_name: None,
        }
    }

    /// Creates an enabled registration from a runtime resource identifier.
    #[must_use]
    pub fn from_owned(resource: impl Into<String>) -> Self {
        Self {
            resource: Cow::Owned(resource.into()),
            enabled: true,
            query_name: None,
        }
    }

    /// Marks the registration as disabled.
    #[must_use]
    pub const fn disabled(self) -> Self {
        self.with_enabled(false)
    }

    /// Sets whether the registration participates in the run.
    #[must_use]
    pub const fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Overrides the display name of the query.
    #[must_use]
    pub fn named(mut self, query_name: &'static str) -> Self {
        self.query_name = Some(Cow::Borrowed(query_name));
        self
    }

    /// Overrides the display name of the query with a runtime string.
    #[must_use]
    pub fn named_owned(mut self, query_name: impl Into<String>) -> Self {
        self.query_name = Some(Cow::Owned(query_name.into()));
        self
    }

    /// Returns the declared resource identifier.
    #[must_use]
    pub fn resource(&self) -> &str {
        &self.resource
    }

    /// Returns `true` when the registration participates in the run.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Returns the display name override, if any.
    #[must_use]
    pub fn query_name(&self) -> Option<&str> {
        self.query_name.as_deref()
    }

    /// Checks that the registration names a resource.
    ///
    /// # Errors
    ///
    /// Returns [`QueryDomainError::EmptyResourceIdentifier`] when the
    /// resource identifier is empty after trimming.
    pub fn validate(&self, query_type: &str) -> Result<(), QueryDomainError> {
        if self.resource.trim().is_empty() {
            return Err(QueryDomainError::EmptyResourceIdentifier {
                query_type: query_type.to_owned(),
            });
        }
        Ok(())
    }
}
