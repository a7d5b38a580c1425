//! `activity` group: activities, participants and associations.

use super::{activity, association, participant};
use crate::model::{EntityType, SchemaModule, Slot};
use crate::vocab::*;

/// Returns the `activity` group.
#[must_use]
pub fn module() -> SchemaModule {
    SchemaModule {
        group: "activity".to_string(),
        comment: "Activities, the participants in them and associations between \
                  participants."
            .to_string(),
        entity_types: entity_types(),
    }
}

fn entity_types() -> Vec<EntityType> {
    vec![
        EntityType::new(
            "activity",
            "An individual that consists of participants and causes an event.",
            activity(vec![]),
        ),
        EntityType::new(
            "socially_constructed_activity",
            "An activity that is also a socially constructed object.",
            activity(vec![Slot::optional(PART__OF)]),
        ),
        EntityType::new(
            "participant",
            "A state of a individual that plays a role in an activity or association.",
            participant(vec![]),
        ),
        EntityType::new(
            "association",
            "An individual that consists of the participants associated with \
             one another.",
            association(vec![]),
        ),
        EntityType::new(
            "reaching_agreement",
            "A socially constructed activity where two or more parties \
             agree to the terms of an agreement.",
            activity(vec![Slot::optional(PART_OF)]),
        ),
        EntityType::new(
            "employment",
            "An association where a person is employed by a party.",
            association(vec![]),
        ),
        EntityType::new(
            "employee",
            "A state of a person participating in an employment.",
            participant(vec![]),
        ),
        EntityType::new(
            "employer",
            "A state of a party participating in an employment.",
            participant(vec![]),
        ),
    ]
}
