//! Capability vocabulary, per-property capability cache, and projections.
//!
//! A *capability* is a named, typed flag describing whether an operation
//! (insert, update, delete, expand) is permitted on an entity set or a
//! specific navigation edge. The vocabulary of capability kinds is closed
//! and declared statically in [`vocabulary`]; per-property instances live
//! in the [`PropertyCapabilityCache`] for the duration of one resolution
//! run; [`Projection`] groups the resolved instances for a usage of a
//! class and computes the deterministic short-form name emitters use.

mod cache;
mod capability;
mod projection;
pub mod vocabulary;

pub use cache::PropertyCapabilityCache;
pub use capability::{BooleanCapability, Capability};
pub use projection::Projection;
