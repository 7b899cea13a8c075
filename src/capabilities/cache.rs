//! Per-property capability cache.

use std::sync::Arc;

use indexmap::IndexMap;
use tracing::{debug, trace};

use crate::base::PropertyId;

use super::capability::{BooleanCapability, Capability};
use super::vocabulary;

/// Registry of capability instances per property.
///
/// Owned by a single resolution run; independent resolutions must each use
/// their own cache. Entries are created lazily, and every registered
/// vocabulary kind is instantiated together on first touch so a reader can
/// never observe a partially initialized set.
#[derive(Debug, Default)]
pub struct PropertyCapabilityCache {
    /// Property -> capability instances, in first-touch order.
    entries: IndexMap<PropertyId, Vec<Capability>>,
}

impl PropertyCapabilityCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Capability instances for `property`, created on first call.
    ///
    /// Idempotent: repeated calls return the same instances, in vocabulary
    /// order (override instances added by the resolver follow the
    /// registered kinds).
    pub fn capabilities(&mut self, property: PropertyId) -> &[Capability] {
        self.entries
            .entry(property)
            .or_insert_with(default_capabilities)
    }

    /// Read-only view of an already initialized entry.
    pub fn get(&self, property: PropertyId) -> Option<&[Capability]> {
        self.entries.get(&property).map(Vec::as_slice)
    }

    /// Set a boolean capability value on `property`.
    ///
    /// A registered term mutates its instance in place. A suffixed
    /// navigation key (`<term>/<listField>`) whose base kind is registered
    /// gets a sparse override instance on first write, carrying the base
    /// kind's short name. Any other term is ignored.
    pub fn set_boolean(&mut self, property: PropertyId, term: &str, value: bool) {
        let entry = self
            .entries
            .entry(property)
            .or_insert_with(default_capabilities);

        for capability in entry.iter_mut() {
            if capability.term() == term {
                let Capability::Boolean(boolean) = capability;
                trace!("capability `{term}` on {property:?} set to {value}");
                boolean.value = value;
                return;
            }
        }

        if let Some((def, _)) = vocabulary::split_suffixed(term) {
            trace!("override capability `{term}` on {property:?} created as {value}");
            entry.push(Capability::Boolean(BooleanCapability {
                term: Arc::from(term),
                short_name: Arc::from(def.short_name),
                value,
            }));
        } else {
            debug!("ignoring unregistered capability term `{term}`");
        }
    }

    /// Current boolean value of `term` on `property`.
    ///
    /// Falls back to the vocabulary default when no instance exists (a
    /// suffixed key falls back to its base kind's default). `None` when
    /// the term is unknown to the vocabulary.
    pub fn boolean_value(&self, property: PropertyId, term: &str) -> Option<bool> {
        if let Some(capabilities) = self.entries.get(&property) {
            if let Some(capability) = capabilities.iter().find(|c| c.term() == term) {
                return capability.as_boolean().map(|b| b.value);
            }
        }
        vocabulary::find(term)
            .map(|def| def.default)
            .or_else(|| vocabulary::split_suffixed(term).map(|(def, _)| def.default))
    }

    /// Iterate initialized entries in first-touch order.
    pub fn entries(&self) -> impl Iterator<Item = (PropertyId, &[Capability])> {
        self.entries.iter().map(|(id, caps)| (*id, caps.as_slice()))
    }

    /// Number of properties with initialized capability sets.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no property has been touched yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// One fresh instance per registered vocabulary kind, all together.
fn default_capabilities() -> Vec<Capability> {
    vocabulary::VOCABULARY
        .iter()
        .map(|def| Capability::Boolean(BooleanCapability::from_def(def)))
        .collect()
}
