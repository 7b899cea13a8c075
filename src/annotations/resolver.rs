//! The boolean-capability annotation resolver.
//!
//! One synchronous pass over the raw annotation records: recognized terms
//! mutate capability values in the cache, unrecognized terms are skipped.
//! The model's structure is never touched.

use std::sync::Arc;

use tracing::{debug, trace};

use crate::base::PropertyId;
use crate::capabilities::{PropertyCapabilityCache, vocabulary};
use crate::model::{Model, query};

use super::error::ResolveError;
use super::tree::{Annotation, Expression, RecordField};

/// Walks annotation records and applies them to the capability cache.
pub struct AnnotationResolver<'a> {
    model: &'a Model,
    cache: &'a mut PropertyCapabilityCache,
}

impl<'a> AnnotationResolver<'a> {
    pub fn new(model: &'a Model, cache: &'a mut PropertyCapabilityCache) -> Self {
        Self { model, cache }
    }

    /// Resolve every record in order.
    ///
    /// A failing record is abandoned where it failed and resolution
    /// continues with the next one; every collected error is returned so
    /// one authoring mistake does not mask the rest.
    pub fn resolve_all(&mut self, annotations: &[Annotation]) -> Vec<ResolveError> {
        let mut errors = Vec::new();
        for annotation in annotations {
            if let Err(error) = self.resolve(annotation) {
                debug!("annotation `{}` failed: {error}", annotation.term);
                errors.push(error);
            }
        }
        errors
    }

    /// Resolve a single annotation record.
    ///
    /// Unrecognized terms are skipped without error. For a recognized
    /// term, the record's boolean value is applied to the entity-set
    /// property first; then every path in the record's exception list is
    /// resolved against the entity set's target class, and the capability
    /// keyed by `<term>/<listField>` on each resolved navigation property
    /// is forced to `false`. The entity-set entry and the navigation
    /// entries are independent keys.
    pub fn resolve(&mut self, annotation: &Annotation) -> Result<(), ResolveError> {
        if !vocabulary::is_supported(&annotation.term) {
            trace!("skipping unrecognized annotation term `{}`", annotation.term);
            return Ok(());
        }

        let record = annotation
            .value
            .as_record()
            .ok_or_else(|| self.malformed(annotation, "payload is not a record"))?;

        let value = self.boolean_field(annotation, record)?;
        self.cache.set_boolean(annotation.target, &annotation.term, value);

        let (list_field, paths) = self.exception_paths(annotation, record)?;
        if paths.is_empty() {
            return Ok(());
        }

        let targets = self.navigation_targets(annotation, &paths)?;
        let suffixed = format!("{}/{}", annotation.term, list_field);
        for target in targets {
            self.cache.set_boolean(target, &suffixed, false);
        }
        Ok(())
    }

    fn malformed(&self, annotation: &Annotation, reason: &'static str) -> ResolveError {
        ResolveError::MalformedPayload {
            term: annotation.term.to_string(),
            property: self.property_display(annotation.target),
            reason,
        }
    }

    /// Display name of a property: `<declaring class>.<name>`.
    fn property_display(&self, property: PropertyId) -> String {
        let property = self.model.property(property);
        let class = self.model.class(property.class);
        format!("{}.{}", class.qualified_name, property.name)
    }

    /// The record's single boolean-valued field.
    fn boolean_field(
        &self,
        annotation: &Annotation,
        record: &[RecordField],
    ) -> Result<bool, ResolveError> {
        let mut booleans = record.iter().filter_map(|field| field.value.as_boolean());
        match (booleans.next(), booleans.next()) {
            (Some(value), None) => Ok(value),
            (None, _) => Err(self.malformed(annotation, "expected one boolean-valued field, found none")),
            (Some(_), Some(_)) => {
                Err(self.malformed(annotation, "expected one boolean-valued field, found several"))
            }
        }
    }

    /// The record's single collection-valued field: its name and the
    /// literal path strings it lists.
    fn exception_paths(
        &self,
        annotation: &Annotation,
        record: &[RecordField],
    ) -> Result<(Arc<str>, Vec<String>), ResolveError> {
        let mut found: Option<(&RecordField, &[Expression])> = None;
        for field in record {
            if let Some(elements) = field.value.as_collection() {
                if found.is_some() {
                    return Err(self.malformed(
                        annotation,
                        "expected one collection-valued field, found several",
                    ));
                }
                found = Some((field, elements));
            }
        }
        let (field, elements) = found.ok_or_else(|| {
            self.malformed(annotation, "expected one collection-valued field, found none")
        })?;

        let mut paths = Vec::with_capacity(elements.len());
        for element in elements {
            let path = element.as_path_name().ok_or_else(|| {
                self.malformed(annotation, "exception list elements must be property paths")
            })?;
            paths.push(path);
        }
        Ok((field.name.clone(), paths))
    }

    /// Resolve every exception path to a property of the entity set's
    /// target class. All paths resolve, or the record fails.
    fn navigation_targets(
        &self,
        annotation: &Annotation,
        paths: &[String],
    ) -> Result<Vec<PropertyId>, ResolveError> {
        let entity_set = self.model.property(annotation.target);
        let class = entity_set
            .ty
            .as_class()
            .ok_or_else(|| ResolveError::UnresolvedPath {
                path: paths[0].clone(),
                class: self.model.type_display(entity_set.ty),
            })?;

        let mut targets = Vec::with_capacity(paths.len());
        for path in paths {
            let property = query::resolve_property_by_name(self.model, class, path).map_err(
                |not_found| ResolveError::UnresolvedPath {
                    path: not_found.name,
                    class: not_found.class,
                },
            )?;
            trace!("exception path `{path}` resolved on `{}`", self.model.class(class).qualified_name);
            targets.push(property);
        }
        Ok(targets)
    }
}
