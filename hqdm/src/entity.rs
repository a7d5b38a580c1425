//! In-memory representation of an identified HQDM resource.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// An opaque resource identifier (usually an IRI).
///
/// The string is never parsed or validated; IRI syntax is the caller's concern.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Iri(String);

impl Iri {
    /// Wraps a string as an identifier.
    #[must_use]
    pub fn new(iri: impl Into<String>) -> Self {
        Self(iri.into())
    }

    /// Returns the identifier text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Iri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Iri {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for Iri {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&Iri> for Iri {
    fn from(iri: &Iri) -> Self {
        iri.clone()
    }
}

impl AsRef<str> for Iri {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A property value: a reference to another entity or a numeric literal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// An IRI reference to another resource.
    Reference(Iri),
    /// A numeric literal.
    Scalar(f64),
}

impl Value {
    /// Returns the referenced IRI, or `None` for a literal.
    #[must_use]
    pub fn as_reference(&self) -> Option<&Iri> {
        match self {
            Value::Reference(iri) => Some(iri),
            Value::Scalar(_) => None,
        }
    }

    /// Returns the literal, or `None` for a reference.
    #[must_use]
    pub fn as_scalar(&self) -> Option<f64> {
        match self {
            Value::Reference(_) => None,
            Value::Scalar(v) => Some(*v),
        }
    }
}

/// An identified resource with keyed, multi-valued properties.
///
/// Properties are keyed by slot key, so the order in which different slots
/// were filled has no effect on equality. Values within one slot keep their
/// insertion order and repeats are kept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    id: Iri,
    entity_type: String,
    properties: BTreeMap<String, Vec<Value>>,
}

impl Entity {
    /// Creates an entity with no properties.
    #[must_use]
    pub fn new(entity_type: &str, id: Iri) -> Self {
        Self {
            id,
            entity_type: entity_type.to_string(),
            properties: BTreeMap::new(),
        }
    }

    /// Returns the identifier.
    #[must_use]
    pub fn id(&self) -> &Iri {
        &self.id
    }

    /// Returns the entity type name.
    #[must_use]
    pub fn entity_type(&self) -> &str {
        &self.entity_type
    }

    /// Returns true if the key is present, even with zero values.
    #[must_use]
    pub fn has_key(&self, key: &str) -> bool {
        self.properties.contains_key(key)
    }

    /// Returns true if the key holds at least one value.
    #[must_use]
    pub fn has_value(&self, key: &str) -> bool {
        self.properties.get(key).is_some_and(|v| !v.is_empty())
    }

    /// Returns the values held under `key`, or an empty slice.
    #[must_use]
    pub fn values(&self, key: &str) -> &[Value] {
        self.properties.get(key).map_or(&[], Vec::as_slice)
    }

    /// Iterates over the references held under `key`.
    pub fn references<'a>(&'a self, key: &str) -> impl Iterator<Item = &'a Iri> + 'a {
        self.values(key).iter().filter_map(Value::as_reference)
    }

    /// Iterates over the literals held under `key`.
    pub fn scalars<'a>(&'a self, key: &str) -> impl Iterator<Item = f64> + 'a {
        self.values(key).iter().filter_map(Value::as_scalar)
    }

    /// Iterates over present keys in sorted order.
    pub fn property_keys(&self) -> impl Iterator<Item = &str> {
        self.properties.keys().map(String::as_str)
    }

    /// Iterates over `(key, values)` pairs in sorted key order.
    pub fn properties(&self) -> impl Iterator<Item = (&str, &[Value])> {
        self.properties
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Returns the total number of values across all keys.
    #[must_use]
    pub fn value_count(&self) -> usize {
        self.properties.values().map(Vec::len).sum()
    }

    /// Appends a value under `key`.
    pub fn add_value(&mut self, key: &str, value: Value) {
        self.slot_mut(key).push(value);
    }

    /// Appends every value under `key`; creates the key even when `values` is empty.
    pub fn add_values(&mut self, key: &str, values: impl IntoIterator<Item = Value>) {
        self.slot_mut(key).extend(values);
    }

    fn slot_mut(&mut self, key: &str) -> &mut Vec<Value> {
        self.properties.entry(key.to_string()).or_default()
    }
}
