//! `spatio_temporal` group: extents, events, periods and states.

use super::extent;
use crate::model::{EntityType, SchemaModule, Slot};
use crate::vocab::*;

/// Returns the `spatio_temporal` group.
#[must_use]
pub fn module() -> SchemaModule {
    SchemaModule {
        group: "spatio_temporal".to_string(),
        comment: "Spatio-temporal extents and their temporal structure.".to_string(),
        entity_types: entity_types(),
    }
}

fn entity_types() -> Vec<EntityType> {
    vec![
        EntityType::new(
            "spatio_temporal_extent",
            "A thing that exists in time and space.",
            extent(vec![]),
        ),
        EntityType::new(
            "event",
            "A spatio-temporal extent with zero temporal thickness.",
            extent(vec![]),
        ),
        EntityType::new(
            "point_in_time",
            "An event that is all of space at an instant.",
            extent(vec![]),
        ),
        EntityType::new(
            "possible_world",
            "A period of time that is the maximal temporal and spatial extent \
             of all that exists together. It is part of itself.",
            extent(vec![]),
        ),
        EntityType::new(
            "period_of_time",
            "A state that is all of space for some period.",
            extent(vec![Slot::optional(TEMPORAL_PART_OF)]),
        ),
        EntityType::new(
            "state",
            "A spatio-temporal extent that is an individual or a temporal \
             part of one.",
            extent(vec![Slot::optional(TEMPORAL_PART_OF)]),
        ),
        EntityType::new(
            "individual",
            "A state that is not a temporal part of any other individual \
             of the same kind.",
            extent(vec![Slot::optional(MEMBER_OF_KIND)]),
        ),
        EntityType::new(
            "intentionally_constructed_object",
            "An individual that exists because of the intent of a party.",
            extent(vec![Slot::optional(MEMBER_OF_KIND)]),
        ),
    ]
}
