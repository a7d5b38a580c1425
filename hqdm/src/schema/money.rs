//! `money` group: currencies, amounts and prices.

use super::{activity, class, extent, participant};
use crate::model::{EntityType, SchemaModule, Slot};
use crate::vocab::*;

/// Returns the `money` group.
#[must_use]
pub fn module() -> SchemaModule {
    SchemaModule {
        group: "money".to_string(),
        comment: "Currencies, amounts of money and prices.".to_string(),
        entity_types: entity_types(),
    }
}

fn entity_types() -> Vec<EntityType> {
    vec![
        EntityType::new(
            "currency",
            "A class of amount of money issued by an authority.",
            class(vec![]),
        ),
        EntityType::new(
            "amount_of_money",
            "A socially constructed object that is a quantity of some currency.",
            extent(vec![
                Slot::optional(MEMBER_OF_CURRENCY),
                Slot::optional(MEMBER_OF_KIND),
            ]),
        ),
        EntityType::new(
            "money_asset",
            "An asset that is an amount of money.",
            participant(vec![]),
        ),
        EntityType::new(
            "transfer_of_ownership_of_money",
            "A transfer of ownership where the asset is an amount of money.",
            activity(vec![
                Slot::mandatory(CAUSES_BEGINNING),
                Slot::mandatory(CAUSES_ENDING),
            ]),
        ),
        EntityType::new(
            "price",
            "A class of amount of money offered or paid for something.",
            class(vec![Slot::mandatory(CONSIDERATION_BY_CLASS)]),
        ),
    ]
}
