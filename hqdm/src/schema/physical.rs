//! `physical` group: physical objects and systems.

use super::extent;
use crate::model::{EntityType, SchemaModule, Slot};
use crate::vocab::*;

/// Returns the `physical` group.
#[must_use]
pub fn module() -> SchemaModule {
    SchemaModule {
        group: "physical".to_string(),
        comment: "Physical objects, their states and the systems they form.".to_string(),
        entity_types: entity_types(),
    }
}

fn entity_types() -> Vec<EntityType> {
    vec![
        EntityType::new(
            "physical_object",
            "An individual that consists of a distribution of matter and/or energy.",
            extent(vec![Slot::optional(MEMBER_OF_KIND)]),
        ),
        EntityType::new(
            "ordinary_physical_object",
            "A physical object that does not survive a change of all its parts \
             at once.",
            extent(vec![Slot::optional(MEMBER_OF_KIND)]),
        ),
        EntityType::new(
            "state_of_physical_object",
            "A state that is a temporal part of a physical object.",
            extent(vec![Slot::optional(TEMPORAL_PART_OF)]),
        ),
        EntityType::new(
            "installed_object",
            "A state of an ordinary physical object that is also a state of \
             a system component it occupies.",
            extent(vec![
                Slot::optional(TEMPORAL_PART_OF),
                Slot::optional(MEMBER_OF_KIND),
            ]),
        ),
        EntityType::new(
            "system",
            "An organized whole of physical objects that are its system components.",
            extent(vec![Slot::optional(MEMBER_OF_KIND)]),
        ),
        EntityType::new(
            "system_component",
            "A physical object that is a replaceable component of a system.",
            extent(vec![
                Slot::mandatory(COMPONENT_OF),
                Slot::optional(MEMBER_OF_KIND),
            ]),
        ),
    ]
}
