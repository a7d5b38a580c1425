//! `functional` group: objects with an intended role.

use super::extent;
use crate::model::{EntityType, SchemaModule, Slot};
use crate::vocab::*;

/// Returns the `functional` group.
#[must_use]
pub fn module() -> SchemaModule {
    SchemaModule {
        group: "functional".to_string(),
        comment: "Intentionally constructed objects that have an intended role.".to_string(),
        entity_types: entity_types(),
    }
}

fn entity_types() -> Vec<EntityType> {
    vec![
        EntityType::new(
            "functional_object",
            "An intentionally constructed object that has an intended role.",
            extent(vec![
                Slot::mandatory(INTENDED_ROLE),
                Slot::optional(MEMBER_OF_KIND),
            ]),
        ),
        EntityType::new(
            "functional_system",
            "A system that is also a functional object.",
            extent(vec![
                Slot::mandatory(INTENDED_ROLE),
                Slot::optional(MEMBER_OF_KIND),
            ]),
        ),
        EntityType::new(
            "functional_system_component",
            "A system component of a functional system. Its physical material \
             may be replaced while it remains the same component.",
            extent(vec![
                Slot::mandatory(COMPONENT_OF),
                Slot::mandatory(INTENDED_ROLE),
                Slot::optional(MEMBER_OF_KIND),
            ]),
        ),
        EntityType::new(
            "installed_functional_system_component",
            "A state of an ordinary functional object installed as a \
             functional system component.",
            extent(vec![
                Slot::optional(TEMPORAL_PART_OF),
                Slot::optional(MEMBER_OF_KIND),
            ]),
        ),
        EntityType::new(
            "socially_constructed_object",
            "A functional object that exists by agreement between parties.",
            extent(vec![
                Slot::optional(INTENDED_ROLE),
                Slot::optional(MEMBER_OF_KIND),
            ]),
        ),
    ]
}
