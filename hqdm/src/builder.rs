//! The generic entity builder.
//!
//! One [`EntityBuilder`] wraps one in-progress [`Entity`] of a given
//! [`EntityType`]. Values accumulate through the `add_*` methods without any
//! checking; [`EntityBuilder::build`] walks the type's slot list once, in
//! declaration order, and reports the first slot that violates its
//! [`Requirement`].
//!
//! ```
//! use hqdm::vocab::{CLASSIFIER, MEMBER};
//! use hqdm::Violation;
//!
//! let schema = hqdm::Schema::hqdm();
//! let rejected = schema
//!     .builder("classification", "http://example.com/c1")?
//!     .add_value(MEMBER, "http://example.com/alice")
//!     .build()
//!     .unwrap_err();
//! assert_eq!(rejected.error().slot, CLASSIFIER);
//! assert_eq!(rejected.error().violation, Violation::Missing);
//!
//! let entity = rejected
//!     .into_builder()
//!     .add_value(CLASSIFIER, "http://example.com/person")
//!     .build()?;
//! assert!(entity.has_value(CLASSIFIER));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use tracing::{debug, trace};

use crate::entity::{Entity, Iri, Value};
use crate::error::{Rejected, ValidationError, Violation};
use crate::factory::{DefaultFactory, EntityFactory};
use crate::model::{EntityType, Requirement};

/// Accumulates property values for one entity and validates them on [`build`](Self::build).
#[derive(Debug, Clone)]
pub struct EntityBuilder<'s> {
    entity_type: &'s EntityType,
    entity: Entity,
}

impl<'s> EntityBuilder<'s> {
    /// Starts an empty entity of `entity_type`. Never fails.
    #[must_use]
    pub fn new(entity_type: &'s EntityType, id: impl Into<Iri>) -> Self {
        Self::with_factory(&DefaultFactory, entity_type, id)
    }

    /// Starts an entity produced by `factory`.
    #[must_use]
    pub fn with_factory<F>(factory: &F, entity_type: &'s EntityType, id: impl Into<Iri>) -> Self
    where
        F: EntityFactory + ?Sized,
    {
        let entity = factory.create(entity_type, id.into());
        Self {
            entity_type,
            entity,
        }
    }

    /// Appends a reference to another entity under `key`.
    ///
    /// Repeats accumulate and keys the type does not declare are accepted.
    #[must_use]
    pub fn add_value(mut self, key: &str, iri: impl Into<Iri>) -> Self {
        self.push(key, Value::Reference(iri.into()));
        self
    }

    /// Appends a numeric literal under `key`.
    #[must_use]
    pub fn add_scalar(mut self, key: &str, value: f64) -> Self {
        self.push(key, Value::Scalar(value));
        self
    }

    /// Appends every reference in `iris` under `key`.
    ///
    /// The key is created even when `iris` is empty, leaving it present with
    /// zero values.
    #[must_use]
    pub fn add_values<I>(mut self, key: &str, iris: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Iri>,
    {
        self.entity
            .add_values(key, iris.into_iter().map(|i| Value::Reference(i.into())));
        trace!(entity_type = %self.entity_type.name, key, "values added");
        self
    }

    /// Appends every literal in `values` under `key`; creates the key even when empty.
    #[must_use]
    pub fn add_scalars(mut self, key: &str, values: impl IntoIterator<Item = f64>) -> Self {
        self.entity
            .add_values(key, values.into_iter().map(Value::Scalar));
        trace!(entity_type = %self.entity_type.name, key, "scalars added");
        self
    }

    /// Returns the entity type being built.
    #[must_use]
    pub fn entity_type(&self) -> &'s EntityType {
        self.entity_type
    }

    /// Returns the identifier of the entity being built.
    #[must_use]
    pub fn id(&self) -> &Iri {
        self.entity.id()
    }

    /// Returns the entity as accumulated so far.
    #[must_use]
    pub fn current(&self) -> &Entity {
        &self.entity
    }

    /// Checks the slot list without consuming the builder.
    ///
    /// # Errors
    ///
    /// Returns the first slot, in declaration order, that violates its
    /// requirement class.
    pub fn check(&self) -> Result<(), ValidationError> {
        for slot in &self.entity_type.slots {
            let violation = match slot.requirement {
                Requirement::Mandatory if !self.entity.has_value(&slot.key) => {
                    Some(Violation::Missing)
                }
                Requirement::OptionalNonEmpty
                    if self.entity.has_key(&slot.key) && !self.entity.has_value(&slot.key) =>
                {
                    Some(Violation::Empty)
                }
                _ => None,
            };
            if let Some(violation) = violation {
                return Err(ValidationError {
                    entity_type: self.entity_type.name.clone(),
                    slot: slot.key.clone(),
                    violation,
                });
            }
        }
        Ok(())
    }

    /// Validates and returns the finished entity.
    ///
    /// # Errors
    ///
    /// Returns [`Rejected`] naming the first slot, in declaration order, that
    /// violates its requirement class. The builder inside is unchanged and
    /// can be completed and built again.
    pub fn build(self) -> Result<Entity, Rejected<'s>> {
        match self.check() {
            Ok(()) => {
                debug!(
                    entity_type = %self.entity_type.name,
                    id = %self.entity.id(),
                    values = self.entity.value_count(),
                    "entity built"
                );
                Ok(self.entity)
            }
            Err(error) => {
                debug!(
                    entity_type = %error.entity_type,
                    id = %self.entity.id(),
                    slot = %error.slot,
                    violation = ?error.violation,
                    "entity rejected"
                );
                Err(Rejected::new(error, self))
            }
        }
    }

    fn push(&mut self, key: &str, value: Value) {
        trace!(entity_type = %self.entity_type.name, key, ?value, "value added");
        self.entity.add_value(key, value);
    }
}
