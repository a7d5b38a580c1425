//! Error types.
//!
//! [`ValidationError`] is the only failure of the builder engine. The
//! [`SchemaError`] variants belong to schema lookup and schema loading.

use std::fmt;

use thiserror::Error;

use crate::builder::EntityBuilder;

/// How a slot failed its requirement class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    /// A mandatory slot holds no value.
    Missing,
    /// An optional slot is present with zero values.
    Empty,
}

/// A slot of the entity type violated its requirement class at build time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Property Not Set: {slot}")]
pub struct ValidationError {
    /// Name of the entity type being built.
    pub entity_type: String,
    /// Key of the first slot that failed.
    pub slot: String,
    /// Whether the slot was missing or present but empty.
    pub violation: Violation,
}

/// A failed [`EntityBuilder::build`]: the error plus the builder, unchanged.
pub struct Rejected<'s> {
    error: ValidationError,
    builder: EntityBuilder<'s>,
}

impl<'s> Rejected<'s> {
    pub(crate) fn new(error: ValidationError, builder: EntityBuilder<'s>) -> Self {
        Self { error, builder }
    }

    /// Returns the validation error.
    #[must_use]
    pub fn error(&self) -> &ValidationError {
        &self.error
    }

    /// Returns the builder so the missing value can be supplied.
    #[must_use]
    pub fn into_builder(self) -> EntityBuilder<'s> {
        self.builder
    }

    /// Discards the builder and keeps the error.
    #[must_use]
    pub fn into_error(self) -> ValidationError {
        self.error
    }
}

impl fmt::Debug for Rejected<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rejected")
            .field("error", &self.error)
            .field("id", self.builder.id())
            .finish()
    }
}

impl fmt::Display for Rejected<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.error, f)
    }
}

impl std::error::Error for Rejected<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

impl From<Rejected<'_>> for ValidationError {
    fn from(rejected: Rejected<'_>) -> Self {
        rejected.error
    }
}

/// Failure to look up or load a schema table.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// No entity type with this name exists in the schema.
    #[error("unknown entity type: {0}")]
    UnknownEntityType(String),
    /// Two entity types share a name.
    #[error("duplicate entity type: {0}")]
    DuplicateEntityType(String),
    /// Two slots of one entity type share a key.
    #[error("duplicate slot {slot} on entity type {entity_type}")]
    DuplicateSlot {
        /// Entity type declaring the slot twice.
        entity_type: String,
        /// Repeated key.
        slot: String,
    },
    /// The TOML table could not be parsed.
    #[error("failed to parse schema table: {0}")]
    Parse(#[from] toml::de::Error),
    /// The schema could not be written as TOML.
    #[error("failed to serialize schema table: {0}")]
    Serialize(#[from] toml::ser::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_names_the_slot() {
        let err = ValidationError {
            entity_type: "aggregation".into(),
            slot: "whole".into(),
            violation: Violation::Missing,
        };
        assert_eq!(err.to_string(), "Property Not Set: whole");
    }

    #[test]
    fn schema_error_messages() {
        assert_eq!(
            SchemaError::UnknownEntityType("foo".into()).to_string(),
            "unknown entity type: foo"
        );
        assert_eq!(
            SchemaError::DuplicateSlot {
                entity_type: "aggregation".into(),
                slot: "whole".into()
            }
            .to_string(),
            "duplicate slot whole on entity type aggregation"
        );
    }
}
