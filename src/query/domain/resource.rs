//! Naming rules for text resources.
//!
//! Resources are keyed by dotted qualified names such as
//! `Sqlmon.Queries.SessionCount.sql`: the namespace, the directory segments
//! and finally the file name with its extension.

/// Separator between the segments of a qualified resource name.
pub const NAME_SEPARATOR: char = '.';

/// Builds a qualified name from a namespace and a relative path.
///
/// Path separators in `relative_path` become dots. An empty namespace yields
/// the bare dotted path.
#[must_use]
pub fn qualified_name(namespace: &str, relative_path: &str) -> String {
    let path = dotted(relative_path);
    let prefix = namespace.trim_matches(NAME_SEPARATOR);
    if prefix.is_empty() {
        path
    } else {
        format!("{prefix}{NAME_SEPARATOR}{path}")
    }
}

/// Normalises a declared identifier for lookup.
///
/// Surrounding whitespace is removed and path-style separators (`/`, `\`)
/// are rewritten to dots.
#[must_use]
pub fn normalise_identifier(identifier: &str) -> String {
    dotted(identifier.trim())
}

/// Returns the file stem of a qualified name: the segment before the
/// extension.
///
/// `Sqlmon.Queries.AnotherQuery.sql` has the stem `AnotherQuery`. A name
/// with a single segment is its own stem.
#[must_use]
pub fn file_stem(qualified_name: &str) -> &str {
    let mut segments = qualified_name.rsplit(NAME_SEPARATOR);
    match (segments.next(), segments.next()) {
        (Some(_), Some(stem)) => stem,
        _ => qualified_name,
    }
}

/// Returns `true` when the identifier is a bare stem: one segment with no
/// namespace, directory or extension.
#[must_use]
pub fn is_bare_stem(identifier: &str) -> bool {
    !identifier.is_empty() && !identifier.contains(NAME_SEPARATOR)
}

fn dotted(path: &str) -> String {
    path.split(['/', '\\'])
        .filter(|segment| !segment.is_empty())
        .collect::<Vec<_>>()
        .join(".")
        .trim_matches(NAME_SEPARATOR)
        .to_owned()
}
