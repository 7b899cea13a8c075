//! Structured errors reported by the annotation resolver.

use thiserror::Error;

/// Errors that abort resolution of a single annotation record.
///
/// An error never rolls back values applied by earlier records, or by the
/// earlier steps of the failing record; it is reported upward so the
/// authoring mistake in the source schema stays actionable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// The payload did not have the expected record shape.
    #[error("malformed `{term}` annotation on `{property}`: {reason}")]
    MalformedPayload {
        /// The annotation term.
        term: String,
        /// Qualified name of the annotated entity-set property.
        property: String,
        /// What was wrong with the payload.
        reason: &'static str,
    },

    /// A navigation exception path did not resolve to a property.
    #[error(
        "unable to find property `{path}` in class `{class}`; this can be caused by a malformed capability annotation on an entity set"
    )]
    UnresolvedPath {
        /// The literal path from the annotation.
        path: String,
        /// Qualified name of the class the lookup started from.
        class: String,
    },
}
