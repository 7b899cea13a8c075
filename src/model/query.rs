//! Stateless graph queries over the model.
//!
//! Everything here is a pure function of the model: no caches, no side
//! effects. The annotation resolver and the code emitters are the two
//! consumers.

use std::collections::VecDeque;

use thiserror::Error;

use crate::base::{ClassId, PropertyId};

use super::graph::Model;
use super::types::{CallingConvention, Method, Parameter, Property};

/// Whether `property`'s type is a navigable kind (an entity or media
/// entity class).
pub fn is_navigation(model: &Model, property: &Property) -> bool {
    property
        .ty
        .as_class()
        .is_some_and(|class| model.class(class).kind.is_navigable())
}

/// The subset of `properties` that are navigation properties when
/// `want_navigation` is true, else the complementary subset.
///
/// The two subsets partition the input exactly.
pub fn filter_by_navigation<'m>(
    model: &'m Model,
    properties: &'m [PropertyId],
    want_navigation: bool,
) -> impl Iterator<Item = PropertyId> + 'm {
    properties
        .iter()
        .copied()
        .filter(move |id| is_navigation(model, model.property(*id)) == want_navigation)
}

/// Navigation properties declared on `class` itself (not its ancestors),
/// optionally filtered by their collection flag.
pub fn navigation_properties<'m>(
    model: &'m Model,
    class: ClassId,
    is_collection: Option<bool>,
) -> impl Iterator<Item = PropertyId> + 'm {
    filter_by_navigation(model, &model.class(class).properties, true)
        .filter(move |id| is_collection.is_none_or(|wanted| model.property(*id).is_collection == wanted))
}

/// Structural (non-navigation) properties declared on `class` itself.
pub fn structural_properties<'m>(
    model: &'m Model,
    class: ClassId,
) -> impl Iterator<Item = PropertyId> + 'm {
    filter_by_navigation(model, &model.class(class).properties, false)
}

/// Failed property lookup, carrying what a caller needs for a
/// diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("property `{name}` not found on `{class}` or any of its base classes")]
pub struct PropertyNotFound {
    /// The name that was looked up.
    pub name: String,
    /// Qualified name of the class the search started from.
    pub class: String,
}

/// Find `name` among `class`'s own properties, then its base classes,
/// nearest ancestor first.
///
/// Matching is literal single-segment name equality: a dotted path is
/// compared as one name, not walked segment by segment. Known limitation
/// carried over from the annotation path form.
pub fn resolve_property_by_name(
    model: &Model,
    class: ClassId,
    name: &str,
) -> Result<PropertyId, PropertyNotFound> {
    let mut current = Some(class);
    while let Some(id) = current {
        let own = model
            .class(id)
            .properties
            .iter()
            .copied()
            .find(|property| model.property(*property).name.as_ref() == name);
        if let Some(property) = own {
            return Ok(property);
        }
        current = model.base_of(id);
    }
    Err(PropertyNotFound {
        name: name.to_string(),
        class: model.class(class).qualified_name.to_string(),
    })
}

/// Lazy breadth-first enumeration of every class transitively derived
/// from `class`, excluding `class` itself.
///
/// Siblings are produced before nieces. Each class is visited exactly
/// once provided the Base/Derived relation is a forest; a cyclic relation
/// is invalid input and is not defended against.
pub fn derived_types(model: &Model, class: ClassId) -> DerivedTypes<'_> {
    DerivedTypes {
        model,
        queue: model.derived_of(class).iter().copied().collect(),
    }
}

/// Iterator behind [`derived_types`].
#[derive(Debug)]
pub struct DerivedTypes<'m> {
    model: &'m Model,
    queue: VecDeque<ClassId>,
}

impl Iterator for DerivedTypes<'_> {
    type Item = ClassId;

    fn next(&mut self) -> Option<ClassId> {
        let next = self.queue.pop_front()?;
        self.queue.extend(self.model.derived_of(next).iter().copied());
        Some(next)
    }
}

/// Parameters of `method` sent in the request URI, in declaration order.
pub fn uri_parameters(method: &Method) -> impl Iterator<Item = &Parameter> {
    method
        .parameters
        .iter()
        .filter(|parameter| parameter.calling_convention == CallingConvention::InHttpRequestUri)
}

/// Parameters of `method` sent in the request body, in declaration order.
pub fn body_parameters(method: &Method) -> impl Iterator<Item = &Parameter> {
    method
        .parameters
        .iter()
        .filter(|parameter| parameter.calling_convention == CallingConvention::InHttpMessageBody)
}
