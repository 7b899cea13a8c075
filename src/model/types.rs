//! Node types of the model graph.

use std::sync::Arc;

use crate::base::{ClassId, EnumId, MethodId, ProjectionId, PropertyId};

/// EDM-style primitive type descriptors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    Binary,
    Boolean,
    Byte,
    Date,
    DateTimeOffset,
    Decimal,
    Double,
    Duration,
    Guid,
    Int16,
    Int32,
    Int64,
    SByte,
    Single,
    Stream,
    String,
    TimeOfDay,
}

impl PrimitiveKind {
    /// The wire name of this primitive.
    pub fn display(&self) -> &'static str {
        match self {
            Self::Binary => "Edm.Binary",
            Self::Boolean => "Edm.Boolean",
            Self::Byte => "Edm.Byte",
            Self::Date => "Edm.Date",
            Self::DateTimeOffset => "Edm.DateTimeOffset",
            Self::Decimal => "Edm.Decimal",
            Self::Double => "Edm.Double",
            Self::Duration => "Edm.Duration",
            Self::Guid => "Edm.Guid",
            Self::Int16 => "Edm.Int16",
            Self::Int32 => "Edm.Int32",
            Self::Int64 => "Edm.Int64",
            Self::SByte => "Edm.SByte",
            Self::Single => "Edm.Single",
            Self::Stream => "Edm.Stream",
            Self::String => "Edm.String",
            Self::TimeOfDay => "Edm.TimeOfDay",
        }
    }
}

/// Reference to the type of a property, parameter, or return value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeRef {
    /// A primitive scalar.
    Primitive(PrimitiveKind),
    /// An enum type in the model.
    Enum(EnumId),
    /// A class in the model.
    Class(ClassId),
}

impl TypeRef {
    /// The referenced class, if this is a class reference.
    pub fn as_class(&self) -> Option<ClassId> {
        match self {
            TypeRef::Class(id) => Some(*id),
            _ => None,
        }
    }

    pub fn is_class(&self) -> bool {
        matches!(self, TypeRef::Class(_))
    }
}

/// What flavor of class a class node is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClassKind {
    /// Structured value type without identity.
    Complex,
    /// Entity type with identity and key properties.
    Entity,
    /// Entity type carrying a media stream.
    MediaEntity,
    /// The service's entity container.
    Service,
}

impl ClassKind {
    /// Whether a property typed by a class of this kind is a navigation
    /// property.
    pub fn is_navigable(&self) -> bool {
        matches!(self, ClassKind::Entity | ClassKind::MediaEntity)
    }
}

/// A namespace grouping the service's types.
#[derive(Debug)]
pub struct Namespace {
    pub name: Arc<str>,
    /// Classes registered under this namespace, in registration order.
    pub classes: Vec<ClassId>,
    /// Enum types registered under this namespace.
    pub enums: Vec<EnumId>,
}

/// A class node: identity, kind, and owned members.
///
/// The base class and derived classes are NOT stored here; they are
/// relation lookups on the [`Model`](super::Model) so the arena stays
/// free of back-pointers.
#[derive(Debug)]
pub struct Class {
    pub name: Arc<str>,
    /// Namespace-qualified name; the class's identity.
    pub qualified_name: Arc<str>,
    pub kind: ClassKind,
    pub is_abstract: bool,
    pub is_open: bool,
    /// Names of the key properties, for entity classes.
    pub keys: Vec<Arc<str>>,
    /// Owned properties, in declaration order.
    pub properties: Vec<PropertyId>,
    /// Owned methods, in declaration order.
    pub methods: Vec<MethodId>,
    /// Projection carrying every capability at its default value.
    pub default_projection: ProjectionId,
}

/// A property node, exclusively owned by its declaring class.
///
/// The name is unique within the declaring class's own property list,
/// not across the inheritance chain.
#[derive(Debug)]
pub struct Property {
    pub name: Arc<str>,
    /// Declaring class (weak back-reference, resolved through the arena).
    pub class: ClassId,
    pub ty: TypeRef,
    pub is_collection: bool,
    pub is_nullable: bool,
    /// Present only when the type is navigable. Initially the target
    /// class's default projection; rewired once capability projections
    /// are applied after resolution.
    pub projection: Option<ProjectionId>,
}

/// How a method parameter travels in the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CallingConvention {
    InHttpRequestUri,
    InHttpMessageBody,
}

/// A method parameter.
#[derive(Debug)]
pub struct Parameter {
    pub name: Arc<str>,
    pub ty: TypeRef,
    pub is_collection: bool,
    pub is_nullable: bool,
    pub calling_convention: CallingConvention,
}

impl Parameter {
    pub fn new(name: &str, ty: TypeRef, calling_convention: CallingConvention) -> Self {
        Self {
            name: Arc::from(name),
            ty,
            is_collection: false,
            is_nullable: false,
            calling_convention,
        }
    }
}

/// A method node, exclusively owned by its declaring class.
#[derive(Debug)]
pub struct Method {
    pub name: Arc<str>,
    /// Declaring class (weak back-reference).
    pub class: ClassId,
    /// Parameters in declaration order.
    pub parameters: Vec<Parameter>,
    pub return_type: Option<TypeRef>,
    pub returns_collection: bool,
}

/// An enum type and its members.
#[derive(Debug)]
pub struct EnumType {
    pub name: Arc<str>,
    pub qualified_name: Arc<str>,
    /// Member names in declaration order.
    pub members: Vec<Arc<str>>,
}
