//! Loading and exporting slot tables as TOML.
//!
//! An external table has the same shape as [`Schema`]:
//!
//! ```toml
//! version = "1.0.0"
//! base_iri = "http://example.com/ontology#"
//!
//! [[module]]
//! group = "top"
//!
//! [[module.entity_type]]
//! name = "aggregation"
//! slots = [
//!     { key = "whole", requirement = "mandatory" },
//!     { key = "part", requirement = "mandatory" },
//!     { key = "member_of", requirement = "optional" },
//! ]
//! ```

use std::collections::HashSet;

use tracing::debug;

use crate::error::SchemaError;
use crate::model::Schema;

impl Schema {
    /// Parses a slot table from TOML.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::Parse`] if the text is not a valid table, and
    /// [`SchemaError::DuplicateEntityType`] or [`SchemaError::DuplicateSlot`]
    /// if a name or key is repeated.
    pub fn from_toml_str(text: &str) -> Result<Schema, SchemaError> {
        let schema: Schema = toml::from_str(text)?;
        schema.check_unique()?;
        debug!(
            version = %schema.version,
            entity_types = schema.entity_type_count(),
            slots = schema.slot_count(),
            "schema table loaded"
        );
        Ok(schema)
    }

    /// Writes this slot table as TOML.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::Serialize`] if the table cannot be represented.
    pub fn to_toml_string(&self) -> Result<String, SchemaError> {
        Ok(toml::to_string(self)?)
    }

    fn check_unique(&self) -> Result<(), SchemaError> {
        let mut names = HashSet::new();
        for entity_type in self.entity_types() {
            if !names.insert(entity_type.name.as_str()) {
                return Err(SchemaError::DuplicateEntityType(entity_type.name.clone()));
            }
            let mut keys = HashSet::new();
            for slot in &entity_type.slots {
                if !keys.insert(slot.key.as_str()) {
                    return Err(SchemaError::DuplicateSlot {
                        entity_type: entity_type.name.clone(),
                        slot: slot.key.clone(),
                    });
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Requirement, ValueKind};

    const TABLE: &str = r#"
version = "0.1.0"
base_iri = "http://example.com/ont#"

[[module]]
group = "top"

[[module.entity_type]]
name = "aggregation"
slots = [
    { key = "whole", requirement = "mandatory" },
    { key = "part", requirement = "mandatory" },
    { key = "member_of", requirement = "optional" },
]

[[module.entity_type]]
name = "quantity"
comment = "A measured value."
slots = [
    { key = "value_", requirement = "mandatory", kind = "scalar" },
    { key = "notes", requirement = "unchecked" },
]
"#;

    #[test]
    fn parses_table() {
        let schema = Schema::from_toml_str(TABLE);
        assert!(schema.is_ok(), "{:?}", schema.err());
        let Ok(schema) = schema else { return };
        assert_eq!(schema.entity_type_count(), 2);
        assert_eq!(schema.slot_count(), 5);
        let quantity = schema.find("quantity");
        assert_eq!(quantity.map(|t| t.comment.as_str()), Some("A measured value."));
        let value = quantity.and_then(|t| t.slot("value_"));
        assert_eq!(value.map(|s| s.kind), Some(ValueKind::Scalar));
        let member_of = schema.find("aggregation").and_then(|t| t.slot("member_of"));
        assert_eq!(
            member_of.map(|s| s.requirement),
            Some(Requirement::OptionalNonEmpty)
        );
    }

    #[test]
    fn rejects_duplicate_entity_type() {
        let text = format!(
            "{TABLE}\n[[module.entity_type]]\nname = \"aggregation\"\n"
        );
        let err = Schema::from_toml_str(&text).err();
        assert!(matches!(err, Some(SchemaError::DuplicateEntityType(ref n)) if n == "aggregation"));
    }

    #[test]
    fn rejects_duplicate_slot() {
        let text = r#"
version = "0.1.0"
base_iri = "urn:x#"
[[module]]
group = "g"
[[module.entity_type]]
name = "t"
slots = [
    { key = "a", requirement = "mandatory" },
    { key = "a", requirement = "optional" },
]
"#;
        let err = Schema::from_toml_str(text).err();
        assert!(matches!(
            err,
            Some(SchemaError::DuplicateSlot { ref entity_type, ref slot }) if entity_type == "t" && slot == "a"
        ));
    }

    #[test]
    fn rejects_unknown_requirement() {
        let text = TABLE.replace("\"unchecked\"", "\"sometimes\"");
        assert!(matches!(
            Schema::from_toml_str(&text),
            Err(SchemaError::Parse(_))
        ));
    }

    #[test]
    fn built_in_table_round_trips() {
        let schema = Schema::hqdm();
        let text = schema.to_toml_string();
        assert!(text.is_ok(), "{:?}", text.as_ref().err());
        let Ok(text) = text else { return };
        let reloaded = Schema::from_toml_str(&text);
        assert!(reloaded.as_ref().is_ok_and(|r| r == schema), "{:?}", reloaded.err());
    }
}
