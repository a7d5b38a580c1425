//! `measure` group: scales, units and physical quantities.
//!
//! The only scalar slots of the table live here: `value_` carries a numeric
//! literal rather than a reference.

use super::class;
use crate::model::{EntityType, SchemaModule, Slot};
use crate::vocab::*;

/// Returns the `measure` group.
#[must_use]
pub fn module() -> SchemaModule {
    SchemaModule {
        group: "measure".to_string(),
        comment: "Scales, units of measure, physical properties and quantities.".to_string(),
        entity_types: entity_types(),
    }
}

fn entity_types() -> Vec<EntityType> {
    vec![
        EntityType::new(
            "scale",
            "A function from a kind of physical quantity to the real numbers.",
            vec![
                Slot::mandatory(DOMAIN_),
                Slot::mandatory(UNIT),
                Slot::optional(MEMBER_OF),
            ],
        ),
        EntityType::new(
            "unit_of_measure",
            "A class of scale whose members share a unit.",
            class(vec![]),
        ),
        EntityType::new(
            "physical_quantity",
            "A physical property that is a definite quantity of some kind.",
            class(vec![
                Slot::mandatory(VALUE_).scalar(),
                Slot::mandatory(MEMBER_OF_),
            ]),
        ),
        EntityType::new(
            "physical_quantity_range",
            "A physical property range whose bounds are physical quantities.",
            class(vec![
                Slot::mandatory(LOWER_BOUND),
                Slot::mandatory(UPPER_BOUND),
                Slot::mandatory(RANGES_OVER),
            ]),
        ),
        EntityType::new(
            "identification_of_physical_quantity",
            "An identification that assigns a number on a scale to a physical \
             quantity.",
            class(vec![
                Slot::mandatory(USES),
                Slot::mandatory(VALUE_).scalar(),
                Slot::mandatory(REPRESENTS),
                Slot::optional(CONSISTS_OF_BY_CLASS),
            ]),
        ),
        EntityType::new(
            "physical_property",
            "A class of state that is a characteristic shared by its members.",
            class(vec![Slot::unchecked(MEMBER_OF_)]),
        ),
        EntityType::new(
            "physical_property_range",
            "A class of state whose members have a physical property in a range.",
            class(vec![Slot::mandatory(RANGES_OVER)]),
        ),
    ]
}
