//! `biological` group: biological objects, people and organizations.
//!
//! Organizations sit here rather than under `functional` because HQDM
//! derives them from biological systems of people.

use super::extent;
use crate::model::{EntityType, SchemaModule, Slot};
use crate::vocab::*;

/// Returns the `biological` group.
#[must_use]
pub fn module() -> SchemaModule {
    SchemaModule {
        group: "biological".to_string(),
        comment: "Biological objects and systems, people, positions and organizations."
            .to_string(),
        entity_types: entity_types(),
    }
}

fn entity_types() -> Vec<EntityType> {
    vec![
        EntityType::new(
            "biological_object",
            "A physical object that sustains itself and reproduces.",
            extent(vec![Slot::optional(MEMBER_OF_KIND)]),
        ),
        EntityType::new(
            "ordinary_biological_object",
            "A biological object that is also an ordinary physical object.",
            extent(vec![Slot::optional(MEMBER_OF_KIND)]),
        ),
        EntityType::new(
            "biological_system",
            "A system that is also a biological object.",
            extent(vec![
                Slot::optional(MEMBER_OF_KIND),
                Slot::unchecked(NATURAL_ROLE),
            ]),
        ),
        EntityType::new(
            "biological_system_component",
            "A system component of a biological system.",
            extent(vec![
                Slot::mandatory(COMPONENT_OF),
                Slot::optional(MEMBER_OF_KIND),
            ]),
        ),
        EntityType::new(
            "in_place_biological_component",
            "A biological object installed as a biological system component.",
            extent(vec![
                Slot::optional(TEMPORAL_PART_OF),
                Slot::optional(MEMBER_OF_KIND),
            ]),
        ),
        EntityType::new(
            "person",
            "A biological system that is a human being.",
            extent(vec![
                Slot::optional(MEMBER_OF_KIND),
                Slot::unchecked(NATURAL_ROLE),
            ]),
        ),
        EntityType::new(
            "state_of_person",
            "A state of a biological system that is a temporal part of a person.",
            extent(vec![Slot::optional(TEMPORAL_PART_OF)]),
        ),
        EntityType::new(
            "person_in_position",
            "A state of a person that is also an installed object in a position.",
            extent(vec![
                Slot::optional(TEMPORAL_PART_OF),
                Slot::optional(MEMBER_OF_KIND),
            ]),
        ),
        EntityType::new(
            "organization",
            "A socially constructed object whose members are people and \
             positions organized to some purpose.",
            extent(vec![Slot::optional(MEMBER_OF_KIND)]),
        ),
        EntityType::new(
            "organization_component",
            "A system component of an organization, such as a position.",
            extent(vec![
                Slot::mandatory(COMPONENT_OF),
                Slot::optional(MEMBER_OF_KIND),
            ]),
        ),
        EntityType::new(
            "state_of_organization",
            "A state that is a temporal part of an organization.",
            extent(vec![Slot::optional(TEMPORAL_PART_OF)]),
        ),
    ]
}
