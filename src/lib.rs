//! # capir-base
//!
//! Core library for a service-model IR: the typed class/property graph an
//! OData-style schema reader produces, the capability-resolution pass
//! that enriches it, and the graph queries downstream code emitters
//! consume.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! annotations  → annotation tree + boolean-capability resolver
//!   ↓
//! model        → model graph arenas, inheritance indices, graph queries
//!   ↓
//! capabilities → vocabulary, capability cache, projections
//!   ↓
//! base         → typed arena ids
//! ```
//!
//! The crate owns no I/O. The external schema reader builds the
//! [`model::Model`] and the [`annotations::Annotation`] list, the
//! resolver runs one synchronous pass per model, and emitters read the
//! augmented graph afterwards:
//!
//! ```
//! use capir::{AnnotationResolver, Model, PropertyCapabilityCache};
//!
//! # let model = Model::new();
//! # let annotations = Vec::new();
//! let mut cache = PropertyCapabilityCache::new();
//! let errors = AnnotationResolver::new(&model, &mut cache).resolve_all(&annotations);
//! assert!(errors.is_empty());
//! # let mut model = model;
//! model.apply_capability_projections(&cache);
//! ```

// ============================================================================
// MODULES (dependency order: base → capabilities → model → annotations)
// ============================================================================

/// Foundation types: typed arena ids
pub mod base;

/// Capability vocabulary, per-property cache, and projections
pub mod capabilities;

/// Model graph: nodes, arenas, and stateless queries
pub mod model;

/// Annotation tree and the boolean-capability resolver
pub mod annotations;

// Re-export the types nearly every consumer needs.
pub use annotations::{Annotation, AnnotationResolver, Expression, ResolveError};
pub use base::{ClassId, EnumId, MethodId, NamespaceId, ProjectionId, PropertyId};
pub use capabilities::{Capability, Projection, PropertyCapabilityCache};
pub use model::{ClassKind, Model, PrimitiveKind, TypeRef};
