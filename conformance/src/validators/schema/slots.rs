//! Slot integrity validator.
//!
//! Every entity type declares at least one slot, each key at most once and
//! as an IRI local name. A key used by several types must name the same
//! kind of value on all of them, since it maps to one RDF property.

use std::collections::{BTreeMap, BTreeSet};

use hqdm::{Schema, ValueKind};

use super::is_local_name;
use crate::report::{ConformanceReport, TestResult};

const VALIDATOR: &str = "schema/slots";

/// Validates the slot lists of every entity type in `schema`.
pub fn validate(schema: &Schema) -> ConformanceReport {
    let mut report = ConformanceReport::new();
    report.push(non_empty(schema));
    report.push(unique_keys(schema));
    report.push(local_names(schema));
    report.push(consistent_kinds(schema));
    report
}

fn non_empty(schema: &Schema) -> TestResult {
    let bare: Vec<String> = schema
        .entity_types()
        .filter(|t| t.slots.is_empty())
        .map(|t| t.name.clone())
        .collect();
    TestResult::from_problems(
        VALIDATOR,
        "Every entity type declares slots",
        format!("{} entity types declare no slots", bare.len()),
        bare,
    )
}

fn unique_keys(schema: &Schema) -> TestResult {
    let mut repeated = Vec::new();
    for entity_type in schema.entity_types() {
        let mut seen = BTreeSet::new();
        for slot in &entity_type.slots {
            if !seen.insert(slot.key.as_str()) {
                repeated.push(format!("{}.{}", entity_type.name, slot.key));
            }
        }
    }
    TestResult::from_problems(
        VALIDATOR,
        "Slot keys are unique within each entity type",
        format!("{} slot keys are repeated", repeated.len()),
        repeated,
    )
}

fn local_names(schema: &Schema) -> TestResult {
    let bad: Vec<String> = schema
        .entity_types()
        .flat_map(|t| {
            t.slots
                .iter()
                .filter(|s| !is_local_name(&s.key))
                .map(move |s| format!("{}.{:?}", t.name, s.key))
        })
        .collect();
    TestResult::from_problems(
        VALIDATOR,
        "Slot keys are IRI local names",
        format!("{} slot keys are not IRI local names", bad.len()),
        bad,
    )
}

fn consistent_kinds(schema: &Schema) -> TestResult {
    let mut kinds: BTreeMap<&str, BTreeSet<&'static str>> = BTreeMap::new();
    for slot in schema.entity_types().flat_map(|t| t.slots.iter()) {
        let kind = match slot.kind {
            ValueKind::Reference => "reference",
            ValueKind::Scalar => "scalar",
        };
        kinds.entry(slot.key.as_str()).or_default().insert(kind);
    }
    let mixed: Vec<String> = kinds
        .into_iter()
        .filter(|(_, k)| k.len() > 1)
        .map(|(key, _)| format!("{key} is both a reference and a scalar"))
        .collect();
    TestResult::from_problems(
        VALIDATOR,
        "Each slot key has one value kind",
        format!("{} slot keys mix value kinds", mixed.len()),
        mixed,
    )
}

#[cfg(test)]
mod tests {
    use hqdm::{EntityType, SchemaModule, Slot};

    use super::*;

    fn schema(entity_types: Vec<EntityType>) -> Schema {
        Schema {
            version: "0.0.1".into(),
            base_iri: "http://example.com/ont#".into(),
            modules: vec![SchemaModule {
                group: "top".into(),
                comment: String::new(),
                entity_types,
            }],
        }
    }

    #[test]
    fn built_in_slots_pass() {
        let report = validate(Schema::hqdm());
        assert!(report.all_passed(), "{:?}", report.results);
    }

    #[test]
    fn repeated_key_is_named() {
        let report = validate(&schema(vec![EntityType::new(
            "t",
            "",
            vec![Slot::mandatory("a"), Slot::optional("a")],
        )]));
        let details: Vec<_> = report.failures().flat_map(|r| r.details.clone()).collect();
        assert_eq!(details, ["t.a"]);
    }

    #[test]
    fn type_without_slots_fails() {
        let report = validate(&schema(vec![EntityType::new("bare", "", Vec::new())]));
        assert_eq!(report.failure_count(), 1);
    }

    #[test]
    fn mixed_kinds_fail() {
        let report = validate(&schema(vec![
            EntityType::new("q", "", vec![Slot::mandatory("value_").scalar()]),
            EntityType::new("r", "", vec![Slot::mandatory("value_")]),
        ]));
        let details: Vec<_> = report.failures().flat_map(|r| r.details.clone()).collect();
        assert_eq!(details, ["value_ is both a reference and a scalar"]);
    }

    #[test]
    fn keys_must_be_local() {
        let report = validate(&schema(vec![EntityType::new(
            "t",
            "",
            vec![Slot::unchecked("x/y")],
        )]));
        assert_eq!(report.failure_count(), 1);
    }
}
