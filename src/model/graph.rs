//! The model graph arena and its builder surface.

use std::sync::Arc;

use rustc_hash::FxHashMap;
use tracing::trace;

use crate::base::{ClassId, EnumId, MethodId, NamespaceId, ProjectionId, PropertyId};
use crate::capabilities::{Projection, PropertyCapabilityCache};

use super::types::{Class, ClassKind, EnumType, Method, Namespace, Parameter, Property, TypeRef};

/// The in-memory typed representation of a service's namespaces, classes,
/// properties, and relationships.
///
/// Nodes live in arenas addressed by stable ids; ids handed out by one
/// model must only be used against that model. The external schema reader
/// builds the model once. Structure is immutable during the resolution
/// pass (only capability values, held by the cache, change) and the
/// augmented graph is shared read-only with every emitter afterwards.
#[derive(Debug, Default)]
pub struct Model {
    namespaces: Vec<Namespace>,
    classes: Vec<Class>,
    enums: Vec<EnumType>,
    properties: Vec<Property>,
    methods: Vec<Method>,
    projections: Vec<Projection>,

    /// Child class -> base class.
    base_of: FxHashMap<ClassId, ClassId>,
    /// Base class -> derived classes, in registration order.
    derived_of: FxHashMap<ClassId, Vec<ClassId>>,
    /// Qualified name -> type node, for O(1) lookups.
    types_by_qname: FxHashMap<Arc<str>, TypeRef>,
    /// The service (entity container) class, if one was registered.
    container: Option<ClassId>,
}

impl Model {
    pub fn new() -> Self {
        Self::default()
    }

    // ============================================================
    // Builder surface (used by the external schema reader)
    // ============================================================

    pub fn add_namespace(&mut self, name: &str) -> NamespaceId {
        let id = NamespaceId::new(self.namespaces.len());
        self.namespaces.push(Namespace {
            name: Arc::from(name),
            classes: Vec::new(),
            enums: Vec::new(),
        });
        id
    }

    /// Register a class under `namespace`.
    ///
    /// Creates the class's default projection, indexes its qualified
    /// name, and records a `Service` class as the model's container.
    pub fn add_class(&mut self, namespace: NamespaceId, name: &str, kind: ClassKind) -> ClassId {
        let namespace_name = self.namespaces[namespace.index()].name.clone();
        let qualified_name: Arc<str> = Arc::from(format!("{namespace_name}.{name}").as_str());
        let id = ClassId::new(self.classes.len());
        let default_projection = self.add_projection(Projection::defaults(id));

        self.classes.push(Class {
            name: Arc::from(name),
            qualified_name: qualified_name.clone(),
            kind,
            is_abstract: false,
            is_open: false,
            keys: Vec::new(),
            properties: Vec::new(),
            methods: Vec::new(),
            default_projection,
        });
        self.namespaces[namespace.index()].classes.push(id);
        self.types_by_qname.insert(qualified_name, TypeRef::Class(id));
        if kind == ClassKind::Service {
            self.container = Some(id);
        }
        id
    }

    /// Record `class`'s single base class.
    ///
    /// The derived back-reference on `base` is appended in call order.
    /// The Base/Derived relation must stay a forest; a cycle is a caller
    /// error and is not checked here.
    pub fn set_base(&mut self, class: ClassId, base: ClassId) {
        self.base_of.insert(class, base);
        self.derived_of.entry(base).or_default().push(class);
    }

    pub fn add_enum(&mut self, namespace: NamespaceId, name: &str, members: &[&str]) -> EnumId {
        let namespace_name = self.namespaces[namespace.index()].name.clone();
        let qualified_name: Arc<str> = Arc::from(format!("{namespace_name}.{name}").as_str());
        let id = EnumId::new(self.enums.len());
        self.enums.push(EnumType {
            name: Arc::from(name),
            qualified_name: qualified_name.clone(),
            members: members.iter().map(|m| Arc::from(*m)).collect(),
        });
        self.namespaces[namespace.index()].enums.push(id);
        self.types_by_qname.insert(qualified_name, TypeRef::Enum(id));
        id
    }

    /// Append a property to `class`.
    ///
    /// A property with a navigable type starts out referencing the target
    /// class's default projection.
    pub fn add_property(
        &mut self,
        class: ClassId,
        name: &str,
        ty: TypeRef,
        is_collection: bool,
    ) -> PropertyId {
        let id = PropertyId::new(self.properties.len());
        let projection = ty
            .as_class()
            .filter(|target| self.classes[target.index()].kind.is_navigable())
            .map(|target| self.classes[target.index()].default_projection);

        self.properties.push(Property {
            name: Arc::from(name),
            class,
            ty,
            is_collection,
            is_nullable: false,
            projection,
        });
        self.classes[class.index()].properties.push(id);
        id
    }

    /// Append a method to `class`.
    pub fn add_method(&mut self, class: ClassId, name: &str, parameters: Vec<Parameter>) -> MethodId {
        let id = MethodId::new(self.methods.len());
        self.methods.push(Method {
            name: Arc::from(name),
            class,
            parameters,
            return_type: None,
            returns_collection: false,
        });
        self.classes[class.index()].methods.push(id);
        id
    }

    pub fn add_projection(&mut self, projection: Projection) -> ProjectionId {
        let id = ProjectionId::new(self.projections.len());
        self.projections.push(projection);
        id
    }

    // ============================================================
    // Node access
    // ============================================================

    pub fn namespace(&self, id: NamespaceId) -> &Namespace {
        &self.namespaces[id.index()]
    }

    pub fn class(&self, id: ClassId) -> &Class {
        &self.classes[id.index()]
    }

    /// Mutable class access, for the reader to set flags and keys while
    /// building.
    pub fn class_mut(&mut self, id: ClassId) -> &mut Class {
        &mut self.classes[id.index()]
    }

    pub fn property(&self, id: PropertyId) -> &Property {
        &self.properties[id.index()]
    }

    pub fn property_mut(&mut self, id: PropertyId) -> &mut Property {
        &mut self.properties[id.index()]
    }

    pub fn method(&self, id: MethodId) -> &Method {
        &self.methods[id.index()]
    }

    pub fn enum_type(&self, id: EnumId) -> &EnumType {
        &self.enums[id.index()]
    }

    pub fn projection(&self, id: ProjectionId) -> &Projection {
        &self.projections[id.index()]
    }

    // ============================================================
    // Relation and index lookups
    // ============================================================

    /// The class's base class, if it has one.
    pub fn base_of(&self, class: ClassId) -> Option<ClassId> {
        self.base_of.get(&class).copied()
    }

    /// Classes directly derived from `class`, in registration order.
    pub fn derived_of(&self, class: ClassId) -> &[ClassId] {
        self.derived_of
            .get(&class)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Resolve a namespace-qualified type name to its node.
    pub fn find_type(&self, qualified_name: &str) -> Option<TypeRef> {
        self.types_by_qname.get(qualified_name).copied()
    }

    /// Resolve a namespace-qualified name to a class.
    pub fn find_class(&self, qualified_name: &str) -> Option<ClassId> {
        self.find_type(qualified_name)?.as_class()
    }

    /// The service (entity container) class, if one was registered.
    pub fn container(&self) -> Option<ClassId> {
        self.container
    }

    pub fn namespaces(&self) -> impl Iterator<Item = &Namespace> {
        self.namespaces.iter()
    }

    /// Display name of a type, for diagnostics.
    pub fn type_display(&self, ty: TypeRef) -> String {
        match ty {
            TypeRef::Primitive(kind) => kind.display().to_string(),
            TypeRef::Enum(id) => self.enum_type(id).qualified_name.to_string(),
            TypeRef::Class(id) => self.class(id).qualified_name.to_string(),
        }
    }

    // ============================================================
    // Post-resolution projection application
    // ============================================================

    /// Materialize per-property projections from resolved capabilities.
    ///
    /// Runs once, after the annotation resolver and before emitters read
    /// the model. Every property the cache touched gets a projection of
    /// its own, built over the property's target class and distinct even
    /// when the capability set equals another property's. Untouched
    /// properties keep referencing their target's default projection.
    pub fn apply_capability_projections(&mut self, cache: &PropertyCapabilityCache) {
        let materialized: Vec<(PropertyId, Projection)> = cache
            .entries()
            .filter_map(|(property, capabilities)| {
                let target = self.properties[property.index()].ty.as_class()?;
                Some((property, Projection::new(target, capabilities.to_vec())))
            })
            .collect();

        for (property, projection) in materialized {
            let id = self.add_projection(projection);
            trace!(
                "property `{}` rewired to projection {:?}",
                self.properties[property.index()].name,
                id
            );
            self.properties[property.index()].projection = Some(id);
        }
    }
}
