//! `top` group: things, abstract objects, classes and relationships.
//!
//! These are the entity types that are not spatio-temporal extents. None of
//! them carries `part_of_possible_world`; whole-part and classification
//! relationships are reified here as entities in their own right.

use super::class;
use crate::model::{EntityType, SchemaModule, Slot};
use crate::vocab::*;

/// Returns the `top` group.
#[must_use]
pub fn module() -> SchemaModule {
    SchemaModule {
        group: "top".to_string(),
        comment: "Things that are not spatio-temporal extents: abstract objects, \
                  classes and the relationships between them."
            .to_string(),
        entity_types: entity_types(),
    }
}

fn entity_types() -> Vec<EntityType> {
    vec![
        EntityType::new(
            "thing",
            "Anything that exists, real or imagined.",
            vec![Slot::optional(MEMBER_OF)],
        ),
        EntityType::new(
            "abstract_object",
            "A thing that does not exist in space or time.",
            vec![Slot::optional(MEMBER_OF)],
        ),
        EntityType::new(
            "class",
            "An abstract object that has members and whose identity is \
             defined by its membership.",
            class(vec![]),
        ),
        EntityType::new(
            "enumerated_class",
            "A class whose members are explicitly listed.",
            class(vec![Slot::unchecked(MEMBER)]),
        ),
        EntityType::new(
            "classification",
            "A relationship where a thing is a member of a class.",
            vec![
                Slot::mandatory(CLASSIFIER),
                Slot::mandatory(MEMBER),
                Slot::optional(MEMBER_OF),
            ],
        ),
        EntityType::new(
            "specialization",
            "A relationship where each member of the subclass is a member \
             of the superclass.",
            vec![
                Slot::mandatory(SUBCLASS),
                Slot::mandatory(SUPERCLASS),
                Slot::optional(MEMBER_OF),
            ],
        ),
        EntityType::new(
            "relationship",
            "An abstract object that is what one thing has to do with one \
             or more others.",
            vec![Slot::optional(MEMBER_OF)],
        ),
        EntityType::new(
            "aggregation",
            "A relationship where the whole is at least partly made of the part.",
            vec![
                Slot::mandatory(WHOLE),
                Slot::mandatory(PART),
                Slot::optional(MEMBER_OF),
            ],
        ),
        EntityType::new(
            "composition",
            "An aggregation where the whole is an arrangement of the parts \
             that results in emergent properties.",
            vec![
                Slot::mandatory(WHOLE),
                Slot::mandatory(PART),
                Slot::optional(MEMBER_OF),
            ],
        ),
        EntityType::new(
            "defined_relationship",
            "A relationship that is defined by a kind of relationship with \
             a signature.",
            vec![Slot::mandatory(INVOLVES), Slot::mandatory(MEMBER_OF_)],
        ),
        EntityType::new(
            "role",
            "A class whose members are the participants playing that part \
             in some association or activity.",
            class(vec![Slot::unchecked(PART_OF_PLAN)]),
        ),
    ]
}
