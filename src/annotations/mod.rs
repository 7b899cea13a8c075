//! Typed annotation tree and the boolean-capability resolver.
//!
//! The external schema reader parses the source text; this crate receives
//! the result as an ordered list of [`Annotation`] records over a small
//! typed expression tree. [`AnnotationResolver`] walks the records once
//! and mutates capability values in the cache; it never creates or
//! deletes model nodes.

mod error;
mod resolver;
mod tree;

pub use error::ResolveError;
pub use resolver::AnnotationResolver;
pub use tree::{Annotation, Expression, RecordField};
