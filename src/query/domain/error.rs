//! Error types for query declaration validation.

use thiserror::Error;

/// Errors returned while validating query declarations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum QueryDomainError {
    /// The registration's resource identifier is empty after trimming.
    #[error("query type '{query_type}' declares a registration with an empty resource identifier")]
    EmptyResourceIdentifier {
        /// Name of the declaring query type.
        query_type: String,
    },
}
