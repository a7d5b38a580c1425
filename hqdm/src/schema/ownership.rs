//! `ownership` group: ownership and its transfer.
//!
//! `ownership` is the one extent whose `beginning` and `ending` are
//! mandatory; every sibling keeps them optional.

use super::{activity, association, extent, participant};
use crate::model::{EntityType, SchemaModule, Slot};
use crate::vocab::*;

/// Returns the `ownership` group.
#[must_use]
pub fn module() -> SchemaModule {
    SchemaModule {
        group: "ownership".to_string(),
        comment: "Ownership of assets and the activities that transfer it.".to_string(),
        entity_types: entity_types(),
    }
}

fn entity_types() -> Vec<EntityType> {
    vec![
        EntityType::new(
            "ownership",
            "An association where an owner owns an asset.",
            association(vec![Slot::mandatory(BEGINNING), Slot::mandatory(ENDING)]),
        ),
        EntityType::new(
            "owner",
            "A state of a party participating in an ownership.",
            participant(vec![]),
        ),
        EntityType::new(
            "asset",
            "A participant that is what is owned.",
            participant(vec![]),
        ),
        EntityType::new(
            "beginning_of_ownership",
            "An event that is the beginning of an ownership.",
            extent(vec![]),
        ),
        EntityType::new(
            "ending_of_ownership",
            "An event that is the ending of an ownership.",
            extent(vec![]),
        ),
        EntityType::new(
            "transfer_of_ownership",
            "A socially constructed activity that ends one ownership and \
             begins another for the same asset.",
            activity(vec![
                Slot::mandatory(CAUSES_BEGINNING),
                Slot::mandatory(CAUSES_ENDING),
            ]),
        ),
        EntityType::new(
            "transferor",
            "A temporal part of an owner that participates in a transfer of ownership.",
            participant(vec![Slot::mandatory(TEMPORAL_PART_OF)]),
        ),
        EntityType::new(
            "transferee",
            "A party that receives an asset in a transfer of ownership.",
            participant(vec![]),
        ),
        EntityType::new(
            "exchange_of_goods_and_money",
            "An agreement execution where goods and money are transferred.",
            activity(vec![Slot::optional(PART_OF)]),
        ),
    ]
}
