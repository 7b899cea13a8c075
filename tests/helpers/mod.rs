//! Shared model fixtures for integration tests.

use capir::annotations::Expression;
use capir::model::{ClassKind, PrimitiveKind, TypeRef};
use capir::{ClassId, Model, PropertyId};

/// Handles into the commerce fixture model.
pub struct CommerceModel {
    pub model: Model,
    pub order: ClassId,
    pub order_line: ClassId,
    pub customer: ClassId,
    pub container: ClassId,
    /// Entity set `Container.Orders`.
    pub orders: PropertyId,
    /// Entity set `Container.Customers`.
    pub customers: PropertyId,
    /// Navigation property `Order.Lines`.
    pub lines: PropertyId,
    /// Navigation property `Order.Customer`.
    pub order_customer: PropertyId,
}

/// Builds a small commerce service:
///
/// ```text
/// Commerce.Order     (entity):  Id, Total, Lines: [OrderLine], Customer
/// Commerce.OrderLine (entity):  Id, Quantity
/// Commerce.Customer  (entity):  Id, Name
/// Commerce.Container (service): Orders: [Order], Customers: [Customer]
/// ```
pub fn commerce_model() -> CommerceModel {
    let mut model = Model::new();
    let ns = model.add_namespace("Commerce");

    let order = model.add_class(ns, "Order", ClassKind::Entity);
    let order_line = model.add_class(ns, "OrderLine", ClassKind::Entity);
    let customer = model.add_class(ns, "Customer", ClassKind::Entity);
    let container = model.add_class(ns, "Container", ClassKind::Service);

    model.add_property(order, "Id", TypeRef::Primitive(PrimitiveKind::String), false);
    model.add_property(order, "Total", TypeRef::Primitive(PrimitiveKind::Decimal), false);
    let lines = model.add_property(order, "Lines", TypeRef::Class(order_line), true);
    let order_customer = model.add_property(order, "Customer", TypeRef::Class(customer), false);

    model.add_property(order_line, "Id", TypeRef::Primitive(PrimitiveKind::String), false);
    model.add_property(order_line, "Quantity", TypeRef::Primitive(PrimitiveKind::Int32), false);

    model.add_property(customer, "Id", TypeRef::Primitive(PrimitiveKind::String), false);
    model.add_property(customer, "Name", TypeRef::Primitive(PrimitiveKind::String), false);

    let orders = model.add_property(container, "Orders", TypeRef::Class(order), true);
    let customers = model.add_property(container, "Customers", TypeRef::Class(customer), true);

    CommerceModel {
        model,
        order,
        order_line,
        customer,
        container,
        orders,
        customers,
        lines,
        order_customer,
    }
}

/// Handles into the shape inheritance fixture.
pub struct ShapeModel {
    pub model: Model,
    pub shape: ClassId,
    pub ellipse: ClassId,
    pub circle: ClassId,
    pub polygon: ClassId,
    pub triangle: ClassId,
    pub rectangle: ClassId,
}

/// Builds an inheritance tree for derived-type and ancestor lookups:
///
/// ```text
/// Shapes.Shape (Name, Area)
/// ├── Shapes.Ellipse (Area)
/// │   └── Shapes.Circle (Radius)
/// └── Shapes.Polygon (Vertices)
///     ├── Shapes.Triangle
///     └── Shapes.Rectangle
/// ```
///
/// `Area` is declared on both `Shape` and `Ellipse` to exercise
/// nearest-ancestor-first resolution.
pub fn shape_model() -> ShapeModel {
    let mut model = Model::new();
    let ns = model.add_namespace("Shapes");

    let shape = model.add_class(ns, "Shape", ClassKind::Entity);
    let ellipse = model.add_class(ns, "Ellipse", ClassKind::Entity);
    let circle = model.add_class(ns, "Circle", ClassKind::Entity);
    let polygon = model.add_class(ns, "Polygon", ClassKind::Entity);
    let triangle = model.add_class(ns, "Triangle", ClassKind::Entity);
    let rectangle = model.add_class(ns, "Rectangle", ClassKind::Entity);

    model.set_base(ellipse, shape);
    model.set_base(polygon, shape);
    model.set_base(circle, ellipse);
    model.set_base(triangle, polygon);
    model.set_base(rectangle, polygon);

    model.add_property(shape, "Name", TypeRef::Primitive(PrimitiveKind::String), false);
    model.add_property(shape, "Area", TypeRef::Primitive(PrimitiveKind::Double), false);
    model.add_property(ellipse, "Area", TypeRef::Primitive(PrimitiveKind::Double), false);
    model.add_property(circle, "Radius", TypeRef::Primitive(PrimitiveKind::Double), false);
    model.add_property(polygon, "Vertices", TypeRef::Primitive(PrimitiveKind::Int32), false);

    ShapeModel {
        model,
        shape,
        ellipse,
        circle,
        polygon,
        triangle,
        rectangle,
    }
}

/// An insert-restrictions payload: the boolean value plus the navigation
/// exception paths.
pub fn insert_restrictions(value: bool, exceptions: &[&str]) -> Expression {
    Expression::record(vec![
        ("Insertable", Expression::Boolean(value)),
        (
            "NonInsertableNavigationProperties",
            Expression::Collection(
                exceptions
                    .iter()
                    .copied()
                    .map(|path| Expression::path(&[path]))
                    .collect(),
            ),
        ),
    ])
}
