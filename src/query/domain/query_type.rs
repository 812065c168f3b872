//! Query types: the candidates discovered by the scanner.

use serde::de::DeserializeOwned;
use serde_json::Value;
use std::borrow::Cow;

use super::{QueryRegistration, QueryResult};

/// A row returned by the data-access collaborator, keyed by column name.
pub type QueryRow = serde_json::Map<String, Value>;

/// Converts one row into the query type's result value.
///
/// The presence of a row mapper is the type's result capability.
pub type RowMapper = fn(QueryRow) -> Result<Box<dyn QueryResult>, serde_json::Error>;

/// A type that declares one or more queries.
///
/// Built from a Rust type with [`QueryType::of`], which captures the
/// deserialization of rows into that type, or with [`QueryType::untyped`] for
/// types assembled at runtime (for instance from a plugin manifest) whose
/// result capability cannot be checked by the compiler.
#[derive(Debug, Clone)]
pub struct QueryType {
    name: Cow<'static, str>,
    type_path: Cow<'static, str>,
    registrations: Vec<QueryRegistration>,
    row_mapper: Option<RowMapper>,
}

impl QueryType {
    /// Creates a query type for `T` with the given registrations in
    /// declaration order.
    #[must_use]
    pub fn of<T>(registrations: impl IntoIterator<Item = QueryRegistration>) -> Self
    where
        T: QueryResult + DeserializeOwned + 'static,
    {
        let type_path = std::any::type_name::<T>();
        Self {
            name: Cow::Borrowed(short_type_name(type_path)),
            type_path: Cow::Borrowed(type_path),
            registrations: registrations.into_iter().collect(),
            row_mapper: Some(map_row::<T>),
        }
    }

    /// Creates a query type with no result capability.
    ///
    /// Such a type is rejected by the query locator when it carries any
    /// registration.
    #[must_use]
    pub fn untyped(
        name: impl Into<String>,
        registrations: impl IntoIterator<Item = QueryRegistration>,
    ) -> Self {
        let type_name: String = name.into();
        Self {
            type_path: Cow::Owned(type_name.clone()),
            name: Cow::Owned(type_name),
            registrations: registrations.into_iter().collect(),
            row_mapper: None,
        }
    }

    /// Returns the short type name, used as the default query name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the fully qualified type path.
    #[must_use]
    pub fn type_path(&self) -> &str {
        &self.type_path
    }

    /// Returns the registrations in declaration order.
    #[must_use]
    pub fn registrations(&self) -> &[QueryRegistration] {
        &self.registrations
    }

    /// Returns the row mapper when the type has the result capability.
    #[must_use]
    pub const fn row_mapper(&self) -> Option<RowMapper> {
        self.row_mapper
    }

    /// Returns `true` when either the short name or the full path equals
    /// `type_name`.
    #[must_use]
    pub fn is_named(&self, type_name: &str) -> bool {
        self.name == type_name || self.type_path == type_name
    }
}

/// Link-time registration record collected by [`inventory`].
///
/// Entries are submitted through the [`query_type!`](crate::query_type)
/// macro; the scanner builds the [`QueryType`] lazily on each pass.
#[derive(Debug)]
pub struct QueryTypeEntry {
    build: fn() -> QueryType,
}

impl QueryTypeEntry {
    /// Wraps a builder function.
    #[must_use]
    pub const fn new(build: fn() -> QueryType) -> Self {
        Self { build }
    }

    /// Builds the registered query type.
    #[must_use]
    pub fn query_type(&self) -> QueryType {
        (self.build)()
    }
}

inventory::collect!(QueryTypeEntry);

fn map_row<T>(row: QueryRow) -> Result<Box<dyn QueryResult>, serde_json::Error>
where
    T: QueryResult + DeserializeOwned + 'static,
{
    let result: T = serde_json::from_value(Value::Object(row))?;
    Ok(Box::new(result))
}

fn short_type_name(type_path: &'static str) -> &'static str {
    let without_generics = type_path
        .split_once('<')
        .map_or(type_path, |(head, _)| head);
    without_generics
        .rsplit("::")
        .next()
        .unwrap_or(without_generics)
}

/// Registers a query type in the process-wide registry.
///
/// The type must implement [`QueryResult`](crate::query::domain::QueryResult)
/// and `serde::Deserialize`. Registrations are listed in declaration order.
///
/// ```ignore
/// use sqlmon::query::domain::{ComponentData, QueryRegistration, QueryResult};
///
/// #[derive(Debug, serde::Deserialize)]
/// struct SessionCount {
///     session_count: i64,
/// }
///
/// impl QueryResult for SessionCount {
///     fn add_metrics(&self, component_data: &mut ComponentData) {
///         component_data.add_metric("Sessions/Count", self.session_count as f64);
///     }
/// }
///
/// sqlmon::query_type!(SessionCount => [
///     QueryRegistration::new("Queries.SessionCount.sql"),
///     QueryRegistration::new("Queries.SessionCountLegacy.sql").disabled(),
/// ]);
/// ```
#[macro_export]
macro_rules! query_type {
    ($ty:ty => [$($registration:expr),+ $(,)?]) => {
        $crate::inventory::submit! {
            $crate::query::domain::QueryTypeEntry::new(|| {
                $crate::query::domain::QueryType::of::<$ty>([$($registration),+])
            })
        }
    };
}
