//! The built-in HQDM slot table.
//!
//! Each sub-module encodes one group of HQDM entity types as data. Groups are
//! listed in assembly order; see [`crate::Schema::hqdm`].
//!
//! Slot lists are flat: an entity type's row names every slot its builder
//! checks, including those it shares with its supertypes. The helpers below
//! only save retyping the shared prefixes; a per-type override replaces the
//! shared slot in place, which is how one type makes `beginning` mandatory
//! while its siblings keep it optional.

use crate::model::Slot;
use crate::vocab::*;

pub mod activity;
pub mod agreement;
pub mod biological;
pub mod functional;
pub mod measure;
pub mod money;
pub mod ownership;
pub mod physical;
pub mod representation;
pub mod spatio_temporal;
pub mod top;

/// Replaces slots of `base` that share a key with an override, and appends
/// the remaining overrides.
pub(crate) fn merge(mut base: Vec<Slot>, overrides: Vec<Slot>) -> Vec<Slot> {
    for slot in overrides {
        match base.iter_mut().find(|s| s.key == slot.key) {
            Some(existing) => *existing = slot,
            None => base.push(slot),
        }
    }
    base
}

/// Slots of every class: supertypes and classes of class.
pub(crate) fn class(overrides: Vec<Slot>) -> Vec<Slot> {
    merge(
        vec![Slot::optional(HAS_SUPERCLASS), Slot::optional(MEMBER__OF)],
        overrides,
    )
}

/// Slots of every spatio-temporal extent.
pub(crate) fn extent(overrides: Vec<Slot>) -> Vec<Slot> {
    merge(
        vec![
            Slot::mandatory(PART_OF_POSSIBLE_WORLD),
            Slot::optional(AGGREGATED_INTO),
            Slot::optional(BEGINNING),
            Slot::optional(CONSISTS__OF),
            Slot::optional(ENDING),
            Slot::optional(MEMBER_OF),
            Slot::optional(PART__OF),
            Slot::optional(TEMPORAL__PART_OF),
        ],
        overrides,
    )
}

/// Slots of every activity: an extent that causes, determines and references.
pub(crate) fn activity(overrides: Vec<Slot>) -> Vec<Slot> {
    merge(
        extent(vec![
            Slot::unchecked(CAUSES),
            Slot::unchecked(CONSISTS_OF),
            Slot::unchecked(DETERMINES),
            Slot::optional(MEMBER_OF_KIND),
            Slot::unchecked(REFERENCES),
        ]),
        overrides,
    )
}

/// Slots of every participant: a state playing a role in an association.
pub(crate) fn participant(overrides: Vec<Slot>) -> Vec<Slot> {
    merge(
        extent(vec![
            Slot::mandatory(MEMBER_OF_KIND),
            Slot::optional(PARTICIPANT_IN),
            Slot::optional(TEMPORAL_PART_OF),
        ]),
        overrides,
    )
}

/// Slots of every association: an extent made of participants.
pub(crate) fn association(overrides: Vec<Slot>) -> Vec<Slot> {
    merge(
        extent(vec![
            Slot::mandatory(CONSISTS_OF_PARTICIPANT),
            Slot::optional(MEMBER_OF_KIND),
        ]),
        overrides,
    )
}
