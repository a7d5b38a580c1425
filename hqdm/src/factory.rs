//! Entity factory seam.
//!
//! The builder never constructs an [`Entity`] itself: it asks an
//! [`EntityFactory`] once, then decorates whatever it is given.

use crate::entity::{Entity, Iri};
use crate::model::EntityType;

/// Produces the zero-initialized entity a builder decorates.
pub trait EntityFactory {
    /// Creates an entity of `entity_type` identified by `id`.
    fn create(&self, entity_type: &EntityType, id: Iri) -> Entity;
}

/// Returns an entity with no properties.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultFactory;

impl EntityFactory for DefaultFactory {
    fn create(&self, entity_type: &EntityType, id: Iri) -> Entity {
        Entity::new(&entity_type.name, id)
    }
}

impl<F> EntityFactory for F
where
    F: Fn(&EntityType, Iri) -> Entity,
{
    fn create(&self, entity_type: &EntityType, id: Iri) -> Entity {
        self(entity_type, id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_factory_is_empty() {
        let t = EntityType::new("thing", "", vec![]);
        let e = DefaultFactory.create(&t, Iri::from("urn:t"));
        assert_eq!(e.entity_type(), "thing");
        assert_eq!(e.id().as_str(), "urn:t");
        assert_eq!(e.value_count(), 0);
    }
}
