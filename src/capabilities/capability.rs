//! Capability instances attached to properties and projections.

use std::sync::Arc;

use super::vocabulary::BooleanCapabilityDef;

/// A boolean on/off capability instance.
///
/// Instances are mutable value holders keyed by `(property, term)`; the
/// cache guarantees exactly one live instance per key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BooleanCapability {
    /// Stable annotation term this instance is keyed by.
    pub term: Arc<str>,
    /// Short display name used in projection names.
    pub short_name: Arc<str>,
    /// Current value. `true` means the operation is permitted.
    pub value: bool,
}

impl BooleanCapability {
    /// Instantiate a vocabulary kind with its default value.
    pub fn from_def(def: &BooleanCapabilityDef) -> Self {
        Self {
            term: Arc::from(def.term),
            short_name: Arc::from(def.short_name),
            value: def.default,
        }
    }
}

/// A capability, polymorphic over supported value shapes.
///
/// The set of shapes is closed: adding a new kind means adding a variant
/// here and an entry to the vocabulary table, not subclassing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Capability {
    /// An on/off flag (the only shape required today).
    Boolean(BooleanCapability),
}

impl Capability {
    /// The stable term identifier this capability is keyed by.
    pub fn term(&self) -> &str {
        match self {
            Capability::Boolean(b) => &b.term,
        }
    }

    /// The short display name used by the projection namer.
    pub fn short_name(&self) -> &str {
        match self {
            Capability::Boolean(b) => &b.short_name,
        }
    }

    /// Borrow the boolean variant, if that is what this is.
    pub fn as_boolean(&self) -> Option<&BooleanCapability> {
        match self {
            Capability::Boolean(b) => Some(b),
        }
    }

    /// Whether this is a boolean capability whose value is `true`.
    pub fn is_enabled(&self) -> bool {
        match self {
            Capability::Boolean(b) => b.value,
        }
    }
}
