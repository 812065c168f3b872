//! Application services for query discovery and invocation.

mod descriptor;
mod locator;
mod resolver;
mod scanner;

pub use descriptor::{InvocationError, InvocationResult, QueryDescriptor};
pub use locator::{QueryLocator, QueryLocatorError, QueryLocatorResult};
pub use resolver::{
    MatchStrategy, ResolutionError, ResolutionResult, ResolvedResource, ResourceResolver, resolve,
};
pub use scanner::scan;
