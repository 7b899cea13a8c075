//! Raw annotation records, as produced by the external schema reader.

use std::sync::Arc;

use crate::base::PropertyId;

/// A declarative statement attaching a term and a value payload to an
/// entity-set-bearing property.
#[derive(Debug, Clone)]
pub struct Annotation {
    /// The entity-set-bearing property the annotation is attached to.
    pub target: PropertyId,
    /// Fully qualified annotation term.
    pub term: Arc<str>,
    /// The value payload.
    pub value: Expression,
}

impl Annotation {
    pub fn new(target: PropertyId, term: &str, value: Expression) -> Self {
        Self {
            target,
            term: Arc::from(term),
            value,
        }
    }
}

/// A value expression in an annotation payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    /// A boolean literal.
    Boolean(bool),
    /// A string literal.
    String(Arc<str>),
    /// A navigation property path, one segment per element.
    Path(Vec<Arc<str>>),
    /// An ordered collection of expressions.
    Collection(Vec<Expression>),
    /// A record of named fields.
    Record(Vec<RecordField>),
}

impl Expression {
    /// Convenience constructor for a record expression.
    pub fn record(fields: Vec<(&str, Expression)>) -> Self {
        Expression::Record(
            fields
                .into_iter()
                .map(|(name, value)| RecordField {
                    name: Arc::from(name),
                    value,
                })
                .collect(),
        )
    }

    /// Convenience constructor for a path expression.
    pub fn path(segments: &[&str]) -> Self {
        Expression::Path(segments.iter().map(|s| Arc::from(*s)).collect())
    }

    pub fn as_record(&self) -> Option<&[RecordField]> {
        match self {
            Expression::Record(fields) => Some(fields),
            _ => None,
        }
    }

    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            Expression::Boolean(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_collection(&self) -> Option<&[Expression]> {
        match self {
            Expression::Collection(elements) => Some(elements),
            _ => None,
        }
    }

    /// Path segments joined with `.`, the literal form property lookup
    /// matches against.
    pub fn as_path_name(&self) -> Option<String> {
        match self {
            Expression::Path(segments) => Some(
                segments
                    .iter()
                    .map(|segment| segment.as_ref())
                    .collect::<Vec<_>>()
                    .join("."),
            ),
            _ => None,
        }
    }
}

/// A named field inside a record expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordField {
    pub name: Arc<str>,
    pub value: Expression,
}
