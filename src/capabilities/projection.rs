//! Capability projections and their short-form names.

use crate::base::ClassId;

use super::capability::{BooleanCapability, Capability};
use super::vocabulary;

/// An association between a class and an ordered set of capability
/// instances, used to type one usage of that class.
///
/// Projections have identity semantics: two projections over the same
/// class with equal capability sets are still distinct entities. The
/// model hands out [`ProjectionId`](crate::base::ProjectionId) handles;
/// each navigable property references either its target class's default
/// projection or a projection of its own.
#[derive(Debug, Clone)]
pub struct Projection {
    /// The class this projection is over.
    pub class: ClassId,
    /// Capability instances, in registration order.
    pub capabilities: Vec<Capability>,
}

impl Projection {
    pub fn new(class: ClassId, capabilities: Vec<Capability>) -> Self {
        Self {
            class,
            capabilities,
        }
    }

    /// The default projection contents: every vocabulary kind at its
    /// default value.
    pub fn defaults(class: ClassId) -> Self {
        let capabilities = vocabulary::VOCABULARY
            .iter()
            .map(|def| Capability::Boolean(BooleanCapability::from_def(def)))
            .collect();
        Self::new(class, capabilities)
    }

    /// Deterministic short-form name used as a generated-artifact suffix.
    ///
    /// Enabled boolean capabilities contribute their short names, sorted
    /// ascending and joined with `_`; disabled capabilities contribute
    /// nothing. The result is identical across re-runs on unchanged input
    /// no matter the order capabilities were added.
    pub fn short_form(&self) -> String {
        let mut shorts: Vec<&str> = self
            .capabilities
            .iter()
            .filter(|capability| capability.is_enabled())
            .map(|capability| capability.short_name())
            .collect();
        shorts.sort();
        shorts.join("_")
    }
}
