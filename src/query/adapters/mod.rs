//! Adapter implementations for query discovery ports.

mod directory;
mod embedded;
pub mod memory;
mod scope;

pub use directory::DirectoryResourceCatalog;
pub use embedded::EmbeddedResourceCatalog;
pub use scope::{QueryTypeList, RegisteredQueryTypes};
