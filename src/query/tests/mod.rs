//! Unit tests for the query module.
//!
//! Tests are organised by component: registration and naming rules,
//! resource resolution, catalog adapters, and the locator with its
//! descriptors.
