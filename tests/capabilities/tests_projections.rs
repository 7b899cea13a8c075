//! Projection tests: default projections, post-resolution
//! materialization, and short-form naming stability.

use capir::annotations::{Annotation, AnnotationResolver};
use capir::capabilities::vocabulary::INSERT_RESTRICTIONS;
use capir::PropertyCapabilityCache;

use crate::helpers::{commerce_model, insert_restrictions, CommerceModel};

#[test]
fn classes_get_identity_distinct_default_projections() {
    let fixture = commerce_model();
    let model = &fixture.model;

    assert_eq!(model.container(), Some(fixture.container));

    let order_default = model.class(fixture.order).default_projection;
    let customer_default = model.class(fixture.customer).default_projection;
    assert_ne!(order_default, customer_default);

    // Every vocabulary kind enabled: all four short names, sorted.
    assert_eq!(model.projection(order_default).short_form(), "Del_Exp_Ins_Upd");
    assert_eq!(model.projection(order_default).class, fixture.order);
}

#[test]
fn navigable_properties_start_on_their_target_default_projection() {
    let fixture = commerce_model();
    let model = &fixture.model;

    let line_default = model.class(fixture.order_line).default_projection;
    assert_eq!(model.property(fixture.lines).projection, Some(line_default));

    let order_default = model.class(fixture.order).default_projection;
    assert_eq!(model.property(fixture.orders).projection, Some(order_default));

    // Structural properties carry no projection.
    let id = model.class(fixture.order).properties[0];
    assert_eq!(model.property(id).name.as_ref(), "Id");
    assert_eq!(model.property(id).projection, None);
}

/// Resolve `InsertRestrictions(false, ["Lines"])` on `Orders` and apply
/// projections.
fn resolved_fixture() -> (CommerceModel, PropertyCapabilityCache) {
    let mut fixture = commerce_model();
    let mut cache = PropertyCapabilityCache::new();
    let annotation = Annotation::new(
        fixture.orders,
        INSERT_RESTRICTIONS,
        insert_restrictions(false, &["Lines"]),
    );
    let errors = AnnotationResolver::new(&fixture.model, &mut cache).resolve_all(&[annotation]);
    assert!(errors.is_empty(), "unexpected errors: {errors:?}");
    fixture.model.apply_capability_projections(&cache);
    (fixture, cache)
}

#[test]
fn touched_properties_are_rewired_to_their_own_projections() {
    let (fixture, _cache) = resolved_fixture();
    let model = &fixture.model;

    let orders_projection = model.property(fixture.orders).projection.unwrap();
    assert_ne!(orders_projection, model.class(fixture.order).default_projection);
    assert_eq!(model.projection(orders_projection).class, fixture.order);
    assert_eq!(model.projection(orders_projection).short_form(), "Del_Exp_Upd");

    // The exception target gets its own projection too. Its capability
    // set names the same string as the default (the override is
    // disabled), but the projection is a distinct entity.
    let lines_projection = model.property(fixture.lines).projection.unwrap();
    let line_default = model.class(fixture.order_line).default_projection;
    assert_ne!(lines_projection, line_default);
    assert_eq!(
        model.projection(lines_projection).short_form(),
        model.projection(line_default).short_form()
    );
}

#[test]
fn untouched_properties_keep_the_default_projection() {
    let (fixture, cache) = resolved_fixture();
    let model = &fixture.model;

    assert!(cache.get(fixture.order_customer).is_none());
    let customer_default = model.class(fixture.customer).default_projection;
    assert_eq!(model.property(fixture.order_customer).projection, Some(customer_default));
}

#[test]
fn short_form_names_are_stable_across_reruns() {
    let (first, _) = resolved_fixture();
    let (second, _) = resolved_fixture();

    let name_of = |fixture: &CommerceModel| {
        let model = &fixture.model;
        let projection = model.property(fixture.orders).projection.unwrap();
        model.projection(projection).short_form()
    };
    assert_eq!(name_of(&first), name_of(&second));
}
