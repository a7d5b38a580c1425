//! HQDM entity types encoded as a declarative slot table.
//!
//! The `hqdm` crate provides the HQDM (High Quality Data Model) entity types
//! as a table of property slots, one row per entity type, and a single
//! generic [`EntityBuilder`] that accumulates IRI-valued and numeric values
//! and checks the slot table when the entity is finalized.
//!
//! # Entry Point
//!
//! ```
//! let schema = hqdm::Schema::hqdm();
//! assert!(schema.find("aggregation").is_some());
//! ```
//!
//! # Building an entity
//!
//! ```
//! use hqdm::vocab::{PART, WHOLE};
//!
//! let schema = hqdm::Schema::hqdm();
//! let entity = schema
//!     .builder("aggregation", "http://example.com/agg1")?
//!     .add_value(WHOLE, "http://example.com/car")
//!     .add_value(PART, "http://example.com/wheel")
//!     .build()?;
//! assert_eq!(entity.value_count(), 2);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Serialization
//!
//! ```
//! # use hqdm::vocab::{PART, WHOLE};
//! # let schema = hqdm::Schema::hqdm();
//! # let entity = schema
//! #     .builder("aggregation", "http://example.com/agg1")?
//! #     .add_value(WHOLE, "http://example.com/car")
//! #     .add_value(PART, "http://example.com/wheel")
//! #     .build()?;
//! let nt = hqdm::serializer::ntriples::entities_to_ntriples(schema, &[entity]);
//! assert_eq!(nt.lines().count(), 3);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod builder;
pub mod entity;
pub mod error;
pub mod factory;
pub mod loader;
pub mod model;
pub mod schema;
pub mod serializer;
pub mod vocab;

pub use builder::EntityBuilder;
pub use entity::{Entity, Iri, Value};
pub use error::{Rejected, SchemaError, ValidationError, Violation};
pub use factory::{DefaultFactory, EntityFactory};
pub use model::{EntityType, Requirement, Schema, SchemaModule, Slot, ValueKind};

impl Schema {
    /// Returns the built-in HQDM slot table.
    ///
    /// Assembly order follows the HQDM taxonomy from the most general
    /// groups to the most specific:
    /// `top → spatio_temporal → physical → biological → functional →
    ///  activity → agreement → ownership → money → measure → representation`
    #[must_use]
    pub fn hqdm() -> &'static Schema {
        static SCHEMA: std::sync::OnceLock<Schema> = std::sync::OnceLock::new();
        SCHEMA.get_or_init(|| Schema {
            version: "1.0.0".to_string(),
            base_iri: vocab::HQDM.to_string(),
            modules: vec![
                schema::top::module(),
                schema::spatio_temporal::module(),
                schema::physical::module(),
                schema::biological::module(),
                schema::functional::module(),
                schema::activity::module(),
                schema::agreement::module(),
                schema::ownership::module(),
                schema::money::module(),
                schema::measure::module(),
                schema::representation::module(),
            ],
        })
    }
}
