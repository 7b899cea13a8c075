//! The model graph: typed nodes, arenas, and stateless queries.
//!
//! Nodes (namespaces, classes, properties, methods, parameters) live in
//! arenas owned by [`Model`] and reference each other through the ids in
//! [`crate::base`]. Inheritance back-edges (base class, derived classes)
//! are relation indices on the model, never pointers between nodes.
//!
//! [`query`] holds the stateless graph queries emitters and the
//! annotation resolver build on: navigation filtering, ancestor-chain
//! property lookup, derived-type enumeration, parameter partitioning.

mod graph;
pub mod query;
mod types;

pub use graph::Model;
pub use query::{
    DerivedTypes, PropertyNotFound, body_parameters, derived_types, filter_by_navigation,
    is_navigation, navigation_properties, resolve_property_by_name, structural_properties,
    uri_parameters,
};
pub use types::{
    CallingConvention, Class, ClassKind, EnumType, Method, Namespace, Parameter, PrimitiveKind,
    Property, TypeRef,
};
