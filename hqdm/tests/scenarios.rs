//! End-to-end builder scenarios for the aggregation, classification and
//! physical quantity rows of the built-in table.

use hqdm::vocab::{CLASSIFIER, MEMBER, MEMBER_OF, MEMBER_OF_, PART, VALUE_, WHOLE};
use hqdm::{Iri, Schema, Value, Violation};

const CAR: &str = "http://example.com/car";
const WHEEL: &str = "http://example.com/wheel";

#[test]
fn aggregation_without_whole_names_whole() {
    let rejected = Schema::hqdm()
        .builder("aggregation", "http://example.com/agg")
        .expect("aggregation is in the table")
        .add_value(PART, WHEEL)
        .build()
        .expect_err("whole is mandatory");
    assert_eq!(rejected.error().slot, WHOLE);
    assert_eq!(rejected.error().entity_type, "aggregation");
    assert_eq!(rejected.to_string(), "Property Not Set: whole");
}

#[test]
fn aggregation_without_part_names_part() {
    let rejected = Schema::hqdm()
        .builder("aggregation", "http://example.com/agg")
        .expect("aggregation is in the table")
        .add_value(WHOLE, CAR)
        .build()
        .expect_err("part is mandatory");
    assert_eq!(rejected.error().slot, PART);
}

#[test]
fn aggregation_with_whole_and_part_holds_exactly_those() {
    let entity = Schema::hqdm()
        .builder("aggregation", "http://example.com/agg")
        .expect("aggregation is in the table")
        .add_value(WHOLE, CAR)
        .add_value(PART, WHEEL)
        .build()
        .expect("whole and part are set");
    assert_eq!(entity.entity_type(), "aggregation");
    assert_eq!(entity.id().as_str(), "http://example.com/agg");
    assert_eq!(entity.value_count(), 2);
    assert_eq!(entity.values(WHOLE), [Value::Reference(Iri::from(CAR))]);
    assert_eq!(entity.values(PART), [Value::Reference(Iri::from(WHEEL))]);
    assert_eq!(entity.property_keys().collect::<Vec<_>>(), [PART, WHOLE]);
}

#[test]
fn empty_aggregation_reports_whole_first() {
    let rejected = Schema::hqdm()
        .builder("aggregation", "http://example.com/agg")
        .expect("aggregation is in the table")
        .build()
        .expect_err("nothing is set");
    assert_eq!(rejected.error().slot, WHOLE);
}

fn classification() -> hqdm::EntityBuilder<'static> {
    Schema::hqdm()
        .builder("classification", "http://example.com/c")
        .expect("classification is in the table")
        .add_value(CLASSIFIER, "http://example.com/person")
        .add_value(MEMBER, "http://example.com/alice")
}

#[test]
fn classification_without_member_of_builds() {
    let entity = classification().build().expect("member_of is optional");
    assert!(!entity.has_key(MEMBER_OF));
}

#[test]
fn classification_with_empty_member_of_fails() {
    let rejected = classification()
        .add_values(MEMBER_OF, Vec::<Iri>::new())
        .build()
        .expect_err("member_of is present but empty");
    assert_eq!(rejected.error().slot, MEMBER_OF);
    assert_eq!(rejected.error().violation, Violation::Empty);
    assert_eq!(rejected.to_string(), "Property Not Set: member_of");
}

#[test]
fn classification_with_member_of_builds() {
    let entity = classification()
        .add_value(MEMBER_OF, "http://example.com/class_of_classification")
        .build()
        .expect("member_of holds a value");
    assert_eq!(entity.references(MEMBER_OF).count(), 1);
}

#[test]
fn classification_missing_both_reports_classifier() {
    let rejected = Schema::hqdm()
        .builder("classification", "http://example.com/c")
        .expect("classification is in the table")
        .build()
        .expect_err("classifier and member are mandatory");
    assert_eq!(rejected.error().slot, CLASSIFIER);
}

#[test]
fn rejected_classification_rebuilds_after_fix() {
    let rejected = Schema::hqdm()
        .builder("classification", "http://example.com/c")
        .expect("classification is in the table")
        .add_value(CLASSIFIER, "http://example.com/person")
        .build()
        .expect_err("member is mandatory");
    assert_eq!(rejected.error().slot, MEMBER);

    let entity = rejected
        .into_builder()
        .add_value(MEMBER, "http://example.com/alice")
        .build()
        .expect("member is now set");
    assert_eq!(entity.value_count(), 2);
}

#[test]
fn physical_quantity_needs_a_scalar_value() {
    let rejected = Schema::hqdm()
        .builder("physical_quantity", "http://example.com/q")
        .expect("physical_quantity is in the table")
        .add_value(MEMBER_OF_, "http://example.com/mass")
        .build()
        .expect_err("value_ is mandatory");
    assert_eq!(rejected.error().slot, VALUE_);

    let entity = rejected
        .into_builder()
        .add_scalar(VALUE_, 72.5)
        .build()
        .expect("value_ is now set");
    assert_eq!(entity.scalars(VALUE_).collect::<Vec<_>>(), [72.5]);
}
