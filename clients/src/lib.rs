//! Shared plumbing for the HQDM client binaries.
//!
//! Logging setup, schema selection (`--schema`) and the entity request
//! format read by `hqdm-build`.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use hqdm::{Entity, EntityBuilder, Schema};
use serde::Deserialize;
use tracing_subscriber::EnvFilter;

/// Installs the stderr log subscriber.
///
/// `RUST_LOG` wins when set. Otherwise the level is `warn`, or `debug`
/// with `verbose`.
pub fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "warn" }));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Returns the table at `path`, or the built-in HQDM table when `None`.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a valid table.
pub fn load_schema(path: Option<&Path>) -> Result<Cow<'static, Schema>> {
    let Some(path) = path else {
        return Ok(Cow::Borrowed(Schema::hqdm()));
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let schema = Schema::from_toml_str(&text)
        .with_context(|| format!("Failed to load schema table {}", path.display()))?;
    tracing::info!(path = %path.display(), types = schema.entity_type_count(), "schema loaded");
    Ok(Cow::Owned(schema))
}

/// One entity to build, as read from a `hqdm-build` input file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EntityRequest {
    /// Entity type name.
    #[serde(rename = "type")]
    pub entity_type: String,
    /// Identifier of the new entity.
    pub id: String,
    /// Reference values per slot key.
    #[serde(default)]
    pub values: BTreeMap<String, Vec<String>>,
    /// Numeric values per slot key.
    #[serde(default)]
    pub scalars: BTreeMap<String, Vec<f64>>,
}

impl EntityRequest {
    /// Builds the requested entity against `schema`.
    ///
    /// # Errors
    ///
    /// Returns an error if the type is unknown or a slot is not set.
    pub fn build(&self, schema: &Schema) -> Result<Entity> {
        let entity_type = schema
            .find(&self.entity_type)
            .with_context(|| format!("{}: unknown entity type {}", self.id, self.entity_type))?;
        let builder = self
            .values
            .iter()
            .fold(EntityBuilder::new(entity_type, self.id.as_str()), |b, (key, iris)| {
                b.add_values(key, iris.iter().map(String::as_str))
            });
        let builder = self
            .scalars
            .iter()
            .fold(builder, |b, (key, values)| b.add_scalars(key, values.iter().copied()));
        builder
            .build()
            .map_err(|rejected| rejected.into_error())
            .with_context(|| format!("{} ({}) was rejected", self.id, self.entity_type))
    }
}

/// Parses a JSON array of entity requests.
///
/// # Errors
///
/// Returns an error if the text is not a JSON array of requests.
pub fn parse_requests(text: &str) -> Result<Vec<EntityRequest>> {
    serde_json::from_str(text).context("Input is not a JSON array of entity requests")
}

/// Builds every request in order, stopping at the first rejection.
///
/// # Errors
///
/// Returns the first request that fails to build.
pub fn build_all(schema: &Schema, requests: &[EntityRequest]) -> Result<Vec<Entity>> {
    requests.iter().map(|r| r.build(schema)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const INPUT: &str = r#"[
        {
            "type": "aggregation",
            "id": "http://example.com/agg",
            "values": { "whole": ["http://example.com/car"], "part": ["http://example.com/wheel"] }
        },
        {
            "type": "physical_quantity",
            "id": "http://example.com/q",
            "values": { "member_of_": ["http://example.com/mass"] },
            "scalars": { "value_": [72.5] }
        }
    ]"#;

    #[test]
    fn builds_each_request() {
        let requests = parse_requests(INPUT).expect("valid input");
        let entities = build_all(Schema::hqdm(), &requests).expect("all requests are complete");
        assert_eq!(entities.len(), 2);
        assert_eq!(entities[0].value_count(), 2);
        assert_eq!(entities[1].scalars("value_").collect::<Vec<_>>(), [72.5]);
    }

    #[test]
    fn rejection_names_entity_and_slot() {
        let requests = parse_requests(
            r#"[{ "type": "aggregation", "id": "urn:a", "values": { "part": ["urn:p"] } }]"#,
        )
        .expect("valid input");
        let err = build_all(Schema::hqdm(), &requests).expect_err("whole is missing");
        let message = format!("{err:#}");
        assert!(message.contains("urn:a (aggregation) was rejected"), "{message}");
        assert!(message.contains("Property Not Set: whole"), "{message}");
    }

    #[test]
    fn empty_optional_array_is_rejected() {
        let requests = parse_requests(
            r#"[{
                "type": "classification",
                "id": "urn:c",
                "values": { "classifier": ["urn:k"], "member": ["urn:m"], "member_of": [] }
            }]"#,
        )
        .expect("valid input");
        let err = build_all(Schema::hqdm(), &requests).expect_err("member_of is empty");
        assert!(format!("{err:#}").contains("Property Not Set: member_of"));
    }

    #[test]
    fn unknown_type_is_reported() {
        let requests =
            parse_requests(r#"[{ "type": "widget", "id": "urn:w" }]"#).expect("valid input");
        let err = build_all(Schema::hqdm(), &requests).expect_err("no such type");
        assert!(err.to_string().contains("unknown entity type widget"));
    }

    #[test]
    fn misspelled_field_is_rejected() {
        let text = r#"[{ "type": "aggregation", "id": "urn:a", "value": { "whole": ["urn:w"] } }]"#;
        let err = parse_requests(text).expect_err("`value` is not a request field");
        assert!(format!("{err:#}").contains("unknown field `value`"), "{err:#}");
    }

    #[test]
    fn default_schema_is_built_in() {
        let schema = load_schema(None).expect("built-in table");
        assert!(matches!(schema, Cow::Borrowed(_)));
    }

    #[test]
    fn missing_schema_file_is_an_error() {
        assert!(load_schema(Some(Path::new("/nonexistent/table.toml"))).is_err());
    }
}
