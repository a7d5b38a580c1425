//! Builder scenario validator.
//!
//! Drives the engine over the table instead of inspecting it:
//! - every type builds once its mandatory slots hold a value
//! - leaving out any one mandatory slot is rejected naming that slot
//! - an optional slot that is present but empty is rejected naming that slot
//!
//! The aggregation and classification contracts are then checked by name.
//! A table without those types gets a warning.

use hqdm::vocab::{CLASSIFIER, MEMBER, MEMBER_OF, PART, WHOLE};
use hqdm::{EntityBuilder, EntityType, Iri, Requirement, Schema, Slot, ValueKind, Violation};

use crate::report::{ConformanceReport, TestResult};

const VALIDATOR: &str = "schema/scenarios";

/// Runs the builder scenarios against `schema`.
pub fn validate(schema: &Schema) -> ConformanceReport {
    let mut report = ConformanceReport::new();

    let mut problems = Vec::new();
    for entity_type in schema.entity_types() {
        walk(entity_type, &mut problems);
    }
    report.push(TestResult::from_problems(
        VALIDATOR,
        format!(
            "{} entity types build and reject as declared",
            schema.entity_type_count()
        ),
        format!("{} slot checks did not behave as declared", problems.len()),
        problems,
    ));

    report.push(named(schema, "aggregation", aggregation));
    report.push(named(schema, "classification", classification));
    report
}

fn fill<'s>(builder: EntityBuilder<'s>, slot: &Slot) -> EntityBuilder<'s> {
    match slot.kind {
        ValueKind::Reference => builder.add_value(&slot.key, format!("urn:hqdm:{}", slot.key)),
        ValueKind::Scalar => builder.add_scalar(&slot.key, 1.0),
    }
}

fn complete_except<'s>(entity_type: &'s EntityType, skip: Option<&str>) -> EntityBuilder<'s> {
    let id = Iri::new(format!("urn:hqdm:{}", entity_type.name));
    entity_type
        .mandatory_slots()
        .filter(|s| Some(s.key.as_str()) != skip)
        .fold(EntityBuilder::new(entity_type, id), fill)
}

fn expect_rejection(
    builder: EntityBuilder<'_>,
    slot: &Slot,
    violation: Violation,
    problems: &mut Vec<String>,
) {
    let name = &builder.entity_type().name;
    let label = format!("{name}.{}", slot.key);
    match builder.check() {
        Ok(()) => problems.push(format!("{label}: accepted")),
        Err(e) if e.slot != slot.key => problems.push(format!("{label}: rejected as {}", e.slot)),
        Err(e) if e.violation != violation => {
            problems.push(format!("{label}: {:?} instead of {violation:?}", e.violation));
        }
        Err(_) => {}
    }
}

fn walk(entity_type: &EntityType, problems: &mut Vec<String>) {
    if let Err(e) = complete_except(entity_type, None).check() {
        problems.push(format!("{}: complete build rejected: {e}", entity_type.name));
        return;
    }
    for slot in &entity_type.slots {
        match slot.requirement {
            Requirement::Mandatory => {
                let builder = complete_except(entity_type, Some(&slot.key));
                expect_rejection(builder, slot, Violation::Missing, problems);
            }
            Requirement::OptionalNonEmpty => {
                let builder =
                    complete_except(entity_type, None).add_values(&slot.key, Vec::<Iri>::new());
                expect_rejection(builder, slot, Violation::Empty, problems);
            }
            Requirement::Unchecked => {}
        }
    }
}

fn named(
    schema: &Schema,
    name: &str,
    scenario: fn(&EntityType) -> Vec<String>,
) -> TestResult {
    match schema.find(name) {
        None => TestResult::warn(VALIDATOR, format!("No {name} entity type to exercise")),
        Some(entity_type) => TestResult::from_problems(
            VALIDATOR,
            format!("{name} scenario holds"),
            format!("{name} scenario does not hold"),
            scenario(entity_type),
        ),
    }
}

fn first_missing(builder: &EntityBuilder<'_>) -> Option<String> {
    builder.check().err().map(|e| e.slot)
}

fn aggregation(entity_type: &EntityType) -> Vec<String> {
    let mut problems = Vec::new();
    let empty = EntityBuilder::new(entity_type, "urn:hqdm:agg");

    let without_whole = empty.clone().add_value(PART, "urn:hqdm:wheel");
    if first_missing(&without_whole).as_deref() != Some(WHOLE) {
        problems.push("missing whole is not reported as whole".to_string());
    }
    let without_part = empty.add_value(WHOLE, "urn:hqdm:car");
    if first_missing(&without_part).as_deref() != Some(PART) {
        problems.push("missing part is not reported as part".to_string());
    }
    match without_part.add_value(PART, "urn:hqdm:wheel").build() {
        Ok(entity) if entity.value_count() == 2 => {}
        Ok(entity) => problems.push(format!("built with {} values", entity.value_count())),
        Err(rejected) => problems.push(format!("whole and part rejected: {rejected}")),
    }
    problems
}

fn classification(entity_type: &EntityType) -> Vec<String> {
    let mut problems = Vec::new();
    let base = EntityBuilder::new(entity_type, "urn:hqdm:c")
        .add_value(CLASSIFIER, "urn:hqdm:person")
        .add_value(MEMBER, "urn:hqdm:alice");

    if let Err(e) = base.check() {
        problems.push(format!("member_of left unset is rejected: {e}"));
    }
    let empty = base.clone().add_values(MEMBER_OF, Vec::<Iri>::new());
    match empty.check() {
        Err(e) if e.slot == MEMBER_OF && e.violation == Violation::Empty => {}
        other => problems.push(format!("empty member_of gave {other:?}")),
    }
    if let Err(e) = base.add_value(MEMBER_OF, "urn:hqdm:class").check() {
        problems.push(format!("filled member_of is rejected: {e}"));
    }
    problems
}
