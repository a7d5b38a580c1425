//! `agreement` group: agreements, contracts and offers.

use super::activity;
use crate::model::{EntityType, SchemaModule, Slot};
use crate::vocab::*;

/// Returns the `agreement` group.
#[must_use]
pub fn module() -> SchemaModule {
    SchemaModule {
        group: "agreement".to_string(),
        comment: "Socially constructed activities that reach and carry out agreements."
            .to_string(),
        entity_types: entity_types(),
    }
}

fn entity_types() -> Vec<EntityType> {
    vec![
        EntityType::new(
            "agreement_process",
            "A socially constructed activity where an agreement is reached \
             and then executed.",
            activity(vec![]),
        ),
        EntityType::new(
            "agreement_execution",
            "A socially constructed activity where the terms of an agreement \
             are carried out.",
            activity(vec![Slot::optional(PART_OF)]),
        ),
        EntityType::new(
            "contract_process",
            "An agreement process that consists of an offer and acceptance \
             and a contract execution.",
            activity(vec![]),
        ),
        EntityType::new(
            "contract_execution",
            "An agreement execution that is part of a contract process.",
            activity(vec![Slot::optional(PART_OF)]),
        ),
        EntityType::new(
            "offer",
            "A socially constructed activity where a party offers something \
             in exchange for a consideration.",
            activity(vec![
                Slot::mandatory(CONSISTS_OF_PARTICIPANT),
                Slot::unchecked(CLASS_OF_OFFERED),
                Slot::optional(PERIOD_OFFERED),
            ]),
        ),
        EntityType::new(
            "acceptance_of_offer",
            "A socially constructed activity where a party accepts an offer.",
            activity(vec![
                Slot::mandatory(CONSISTS_OF_PARTICIPANT),
                Slot::optional(REFERENCES),
            ]),
        ),
        EntityType::new(
            "offer_and_acceptance_for_goods",
            "A reaching agreement that consists of an offer for goods and its \
             acceptance.",
            activity(vec![Slot::optional(PART_OF)]),
        ),
        EntityType::new(
            "sale_of_goods",
            "An agreement process where goods are exchanged for money.",
            activity(vec![]),
        ),
    ]
}
