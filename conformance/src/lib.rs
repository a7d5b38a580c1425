//! HQDM slot table conformance suite.
//!
//! Validates a [`Schema`] before it is handed to the builder: the inventory
//! of entity types, the integrity of each slot list, and a set of builder
//! scenarios run through the engine itself.
//!
//! # Entry Point
//!
//! ```
//! let report = hqdm_conformance::run_all(hqdm::Schema::hqdm());
//! assert!(report.all_passed());
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod report;
pub mod validators;

use hqdm::Schema;

pub use report::{ConformanceReport, Severity, TestResult};

/// Runs all conformance validators and returns the aggregated report.
///
/// Validators are run in this order:
/// 1. Inventory (modules, entity type names, base IRI)
/// 2. Slot integrity (unique keys, local names, value kinds)
/// 3. Builder scenarios (every type walked through the engine)
pub fn run_all(schema: &Schema) -> ConformanceReport {
    let mut report = ConformanceReport::new();

    report.extend(validators::schema::inventory::validate(schema));
    report.extend(validators::schema::slots::validate(schema));
    report.extend(validators::schema::scenarios::validate(schema));

    tracing::debug!(
        results = report.results.len(),
        failures = report.failure_count(),
        "conformance run finished"
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn built_in_table_is_conformant() {
        let report = run_all(Schema::hqdm());
        let failures: Vec<_> = report.failures().map(|r| &r.message).collect();
        assert!(failures.is_empty(), "{failures:?}");
    }

    #[test]
    fn every_validator_reports() {
        let report = run_all(Schema::hqdm());
        for prefix in ["schema/inventory", "schema/slots", "schema/scenarios"] {
            assert!(
                report.results.iter().any(|r| r.validator == prefix),
                "{prefix} produced nothing"
            );
        }
    }
}
