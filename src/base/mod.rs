//! Foundation types for the capir model graph.
//!
//! This module provides the typed arena indices used throughout the crate:
//! - [`NamespaceId`], [`ClassId`], [`EnumId`] - type-level nodes
//! - [`PropertyId`], [`MethodId`] - member nodes
//! - [`ProjectionId`] - capability projections
//!
//! This module has NO dependencies on other capir modules.

mod ids;

pub use ids::{ClassId, EnumId, MethodId, NamespaceId, ProjectionId, PropertyId};
