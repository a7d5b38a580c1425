//! `representation` group: signs, patterns, identifications and plans.

use super::{association, class, extent, participant};
use crate::model::{EntityType, SchemaModule, Slot};
use crate::vocab::*;

/// Returns the `representation` group.
#[must_use]
pub fn module() -> SchemaModule {
    SchemaModule {
        group: "representation".to_string(),
        comment: "Signs and patterns, the communities that recognize them, and the \
                  identifications, descriptions, plans and requirements they express."
            .to_string(),
        entity_types: entity_types(),
    }
}

fn entity_types() -> Vec<EntityType> {
    vec![
        EntityType::new(
            "sign",
            "A socially constructed object that is used to signify something.",
            extent(vec![
                Slot::mandatory(MEMBER_OF_),
                Slot::mandatory(PARTICIPANT_IN),
            ]),
        ),
        EntityType::new(
            "pattern",
            "A class of sign whose members share a form.",
            class(vec![]),
        ),
        EntityType::new(
            "representation_by_sign",
            "An association of a sign and a recognizing language community \
             that recognizes the sign as representing some thing.",
            association(vec![
                Slot::mandatory(CONSISTS_OF_),
                Slot::mandatory(REPRESENTS),
                Slot::optional(MEMBER_OF_),
            ]),
        ),
        EntityType::new(
            "representation_by_pattern",
            "A class of representation by sign whose members share a pattern.",
            class(vec![
                Slot::mandatory(CONSISTS_OF_BY_CLASS),
                Slot::mandatory(REPRESENTED),
                Slot::unchecked(CONSISTS_OF_IN_MEMBERS),
            ]),
        ),
        EntityType::new(
            "recognizing_language_community",
            "A state of a language community that recognizes a sign.",
            participant(vec![]),
        ),
        EntityType::new(
            "language_community",
            "An organization whose members recognize a common set of signs.",
            extent(vec![Slot::optional(MEMBER_OF_KIND)]),
        ),
        EntityType::new(
            "identification",
            "A representation by pattern that identifies exactly one thing.",
            class(vec![
                Slot::mandatory(CONSISTS_OF_BY_CLASS),
                Slot::mandatory(REPRESENTED),
            ]),
        ),
        EntityType::new(
            "description",
            "A representation by pattern that describes some thing.",
            class(vec![
                Slot::mandatory(CONSISTS_OF_BY_CLASS),
                Slot::mandatory(REPRESENTED),
                Slot::unchecked(CONSISTS_OF_IN_MEMBERS),
            ]),
        ),
        EntityType::new(
            "definition",
            "A representation by pattern that defines a class.",
            class(vec![
                Slot::mandatory(CONSISTS_OF_BY_CLASS),
                Slot::optional(REPRESENTED),
            ]),
        ),
        EntityType::new(
            "plan",
            "A possible world that some party intends to bring about.",
            extent(vec![Slot::optional(MEMBER_OF_KIND)]),
        ),
        EntityType::new(
            "requirement",
            "A spatio-temporal extent that is part of a plan and is defined \
             by a requirement specification.",
            extent(vec![Slot::mandatory(DEFINED_BY)]),
        ),
    ]
}
