//! Schema inventory validator.
//!
//! Checks the shape of the table as a whole:
//! - at least one module and one entity type
//! - no empty modules (warning)
//! - entity type names are unique and usable as IRI local names
//! - the base IRI ends in `#` or `/`

use std::collections::BTreeMap;

use hqdm::Schema;

use super::is_local_name;
use crate::report::{ConformanceReport, TestResult};

const VALIDATOR: &str = "schema/inventory";

/// Validates the inventory of `schema`.
pub fn validate(schema: &Schema) -> ConformanceReport {
    let mut report = ConformanceReport::new();

    if schema.entity_type_count() == 0 {
        report.push(TestResult::fail(VALIDATOR, "Schema declares no entity types"));
        return report;
    }
    report.push(TestResult::pass(
        VALIDATOR,
        format!(
            "Schema v{}: {} modules, {} entity types, {} slots",
            schema.version,
            schema.modules.len(),
            schema.entity_type_count(),
            schema.slot_count()
        ),
    ));

    let empty: Vec<String> = schema
        .modules
        .iter()
        .filter(|m| m.entity_types.is_empty())
        .map(|m| m.group.clone())
        .collect();
    if !empty.is_empty() {
        report.push(
            TestResult::warn(VALIDATOR, format!("{} modules declare no entity types", empty.len()))
                .with_details(empty),
        );
    }

    report.push(unique_names(schema));

    let bad_names: Vec<String> = schema
        .entity_types()
        .filter(|t| !is_local_name(&t.name))
        .map(|t| format!("{:?}", t.name))
        .collect();
    report.push(TestResult::from_problems(
        VALIDATOR,
        "Entity type names are IRI local names",
        format!("{} entity type names are not IRI local names", bad_names.len()),
        bad_names,
    ));

    if schema.base_iri.ends_with('#') || schema.base_iri.ends_with('/') {
        report.push(TestResult::pass(
            VALIDATOR,
            format!("Base IRI {} ends in a separator", schema.base_iri),
        ));
    } else {
        report.push(TestResult::fail(
            VALIDATOR,
            format!("Base IRI {} must end in '#' or '/'", schema.base_iri),
        ));
    }

    report
}

fn unique_names(schema: &Schema) -> TestResult {
    let mut groups: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
    for module in &schema.modules {
        for entity_type in &module.entity_types {
            groups
                .entry(entity_type.name.as_str())
                .or_default()
                .push(module.group.as_str());
        }
    }
    let duplicates: Vec<String> = groups
        .into_iter()
        .filter(|(_, in_groups)| in_groups.len() > 1)
        .map(|(name, in_groups)| format!("{name} (in {})", in_groups.join(", ")))
        .collect();
    TestResult::from_problems(
        VALIDATOR,
        "Entity type names are unique",
        format!("{} entity type names are declared more than once", duplicates.len()),
        duplicates,
    )
}
