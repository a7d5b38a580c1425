//! Schema-level model types.
//!
//! These types describe the HQDM entity types as data: each [`EntityType`]
//! carries an ordered list of [`Slot`]s, and each slot a [`Requirement`]
//! class checked by [`EntityBuilder::build`](crate::EntityBuilder::build).
//! The top-level entry point is [`Schema::hqdm()`](crate::Schema::hqdm).

use serde::{Deserialize, Serialize};

use crate::builder::EntityBuilder;
use crate::entity::Iri;
use crate::error::SchemaError;

/// Requirement class of a property slot, checked at build time.
///
/// - `Mandatory`: the build fails if the slot has no value.
/// - `OptionalNonEmpty`: the build fails only if the slot is present with
///   zero values.
/// - `Unchecked`: multi-valued and unconstrained; never checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Requirement {
    /// At least one value must be supplied.
    Mandatory,
    /// If the key is present it must hold at least one value.
    #[serde(rename = "optional")]
    OptionalNonEmpty,
    /// No build-time check.
    Unchecked,
}

impl Requirement {
    /// Returns the string value used in schema tables.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Requirement::Mandatory => "mandatory",
            Requirement::OptionalNonEmpty => "optional",
            Requirement::Unchecked => "unchecked",
        }
    }
}

/// Whether a slot holds references to other entities or numeric literals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    /// An IRI reference to another resource.
    #[default]
    Reference,
    /// A numeric literal (`xsd:double`).
    Scalar,
}

/// A named property position on an entity type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    /// HQDM local name of the property (e.g., `"part_of_possible_world"`).
    pub key: String,
    /// Requirement class checked at build time.
    pub requirement: Requirement,
    /// Target value type.
    #[serde(default)]
    pub kind: ValueKind,
}

impl Slot {
    fn new(key: &str, requirement: Requirement) -> Self {
        Self {
            key: key.to_string(),
            requirement,
            kind: ValueKind::Reference,
        }
    }

    /// A reference slot that must hold at least one value.
    #[must_use]
    pub fn mandatory(key: &str) -> Self {
        Self::new(key, Requirement::Mandatory)
    }

    /// A reference slot that, if present, must hold at least one value.
    #[must_use]
    pub fn optional(key: &str) -> Self {
        Self::new(key, Requirement::OptionalNonEmpty)
    }

    /// A reference slot with no build-time check.
    #[must_use]
    pub fn unchecked(key: &str) -> Self {
        Self::new(key, Requirement::Unchecked)
    }

    /// Marks this slot as holding numeric literals.
    #[must_use]
    pub fn scalar(mut self) -> Self {
        self.kind = ValueKind::Scalar;
        self
    }
}

/// An HQDM entity type and the slots its builder validates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityType {
    /// HQDM local name (e.g., `"aggregation"`).
    pub name: String,
    /// Description.
    #[serde(default)]
    pub comment: String,
    /// Slots in validation order.
    #[serde(default)]
    pub slots: Vec<Slot>,
}

impl EntityType {
    /// Creates an entity type from its name, description and slot list.
    #[must_use]
    pub fn new(name: &str, comment: &str, slots: Vec<Slot>) -> Self {
        Self {
            name: name.to_string(),
            comment: comment.to_string(),
            slots,
        }
    }

    /// Looks up a slot by key. Returns `None` if the type declares no such slot.
    #[must_use]
    pub fn slot(&self, key: &str) -> Option<&Slot> {
        self.slots.iter().find(|s| s.key == key)
    }

    /// Returns the mandatory slots in declaration order.
    pub fn mandatory_slots(&self) -> impl Iterator<Item = &Slot> {
        self.slots
            .iter()
            .filter(|s| s.requirement == Requirement::Mandatory)
    }

    /// Returns the full IRI of this type under `base_iri`.
    #[must_use]
    pub fn iri(&self, base_iri: &str) -> String {
        format!("{}{}", base_iri, self.name)
    }
}

/// A thematic group of entity types: the unit the table is assembled from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaModule {
    /// Group name (e.g., `"top"`, `"activity"`).
    pub group: String,
    /// Description of the group.
    #[serde(default)]
    pub comment: String,
    /// Entity types in this group.
    #[serde(default, rename = "entity_type")]
    pub entity_types: Vec<EntityType>,
}

/// A complete slot table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    /// Table version (e.g., `"1.0.0"`).
    pub version: String,
    /// Namespace IRI that entity type names and slot keys are local to.
    pub base_iri: String,
    /// All groups in assembly order.
    #[serde(default, rename = "module")]
    pub modules: Vec<SchemaModule>,
}

impl Schema {
    /// Looks up an entity type by name. Returns `None` if not found.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&EntityType> {
        self.entity_types().find(|t| t.name == name)
    }

    /// Iterates over every entity type in assembly order.
    pub fn entity_types(&self) -> impl Iterator<Item = &EntityType> {
        self.modules.iter().flat_map(|m| m.entity_types.iter())
    }

    /// Returns the total number of entity types across all groups.
    #[must_use]
    pub fn entity_type_count(&self) -> usize {
        self.modules.iter().map(|m| m.entity_types.len()).sum()
    }

    /// Returns the total number of (entity type, slot) rows.
    #[must_use]
    pub fn slot_count(&self) -> usize {
        self.entity_types().map(|t| t.slots.len()).sum()
    }

    /// Returns the full IRI of a slot key under this schema's namespace.
    #[must_use]
    pub fn property_iri(&self, key: &str) -> String {
        format!("{}{}", self.base_iri, key)
    }

    /// Starts a builder for the named entity type.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::UnknownEntityType`] if the schema has no type
    /// with that name.
    pub fn builder(
        &self,
        name: &str,
        id: impl Into<Iri>,
    ) -> Result<EntityBuilder<'_>, SchemaError> {
        let entity_type = self
            .find(name)
            .ok_or_else(|| SchemaError::UnknownEntityType(name.to_string()))?;
        Ok(EntityBuilder::new(entity_type, id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> EntityType {
        EntityType::new(
            "sample",
            "",
            vec![
                Slot::mandatory("a"),
                Slot::optional("b"),
                Slot::mandatory("c").scalar(),
                Slot::unchecked("d"),
            ],
        )
    }

    #[test]
    fn slot_constructors_set_requirement() {
        assert_eq!(Slot::mandatory("x").requirement, Requirement::Mandatory);
        assert_eq!(Slot::optional("x").requirement, Requirement::OptionalNonEmpty);
        assert_eq!(Slot::unchecked("x").requirement, Requirement::Unchecked);
        assert_eq!(Slot::optional("x").kind, ValueKind::Reference);
        assert_eq!(Slot::optional("x").scalar().kind, ValueKind::Scalar);
    }

    #[test]
    fn mandatory_slots_keep_declaration_order() {
        let t = sample();
        let keys: Vec<_> = t.mandatory_slots().map(|s| s.key.as_str()).collect();
        assert_eq!(keys, ["a", "c"]);
    }

    #[test]
    fn slot_lookup() {
        let t = sample();
        assert_eq!(t.slot("b").map(|s| s.requirement), Some(Requirement::OptionalNonEmpty));
        assert!(t.slot("zzz").is_none());
    }

    #[test]
    fn iris_are_base_plus_local_name() {
        let schema = crate::Schema::hqdm();
        let agg = schema.find("aggregation");
        assert_eq!(
            agg.map(|t| t.iri(&schema.base_iri)),
            Some(format!("{}aggregation", crate::vocab::HQDM))
        );
        assert_eq!(
            schema.property_iri("whole"),
            format!("{}whole", crate::vocab::HQDM)
        );
    }

    #[test]
    fn unknown_entity_type_is_reported() {
        let err = crate::Schema::hqdm().builder("no_such_type", "urn:x").err();
        assert!(matches!(
            err,
            Some(SchemaError::UnknownEntityType(ref name)) if name == "no_such_type"
        ));
    }

    #[test]
    fn requirement_names() {
        assert_eq!(Requirement::Mandatory.as_str(), "mandatory");
        assert_eq!(Requirement::OptionalNonEmpty.as_str(), "optional");
        assert_eq!(Requirement::Unchecked.as_str(), "unchecked");
    }
}
