//! JSON-LD 1.1 serializer for built entities.
//!
//! Produces a single document with an `@context` declaring the `hqdm`
//! prefix and an `@graph` array holding one node per entity.

use serde_json::{json, Map, Value};

use crate::entity::{self, Entity};
use crate::model::Schema;
use crate::serializer::double_lexical;
use crate::vocab::{RDF, XSD};

/// Serializes built entities to a JSON-LD `Value`.
///
/// The returned value can be pretty-printed with [`serde_json::to_string_pretty`].
#[must_use]
pub fn entities_to_json_ld(schema: &Schema, entities: &[Entity]) -> Value {
    json!({
        "@context": build_context(schema),
        "@graph": entities.iter().map(entity_to_json).collect::<Vec<_>>()
    })
}

fn build_context(schema: &Schema) -> Value {
    let mut ctx = Map::new();
    ctx.insert("hqdm".to_owned(), json!(schema.base_iri));
    ctx.insert("rdf".to_owned(), json!(RDF));
    ctx.insert("xsd".to_owned(), json!(XSD));
    Value::Object(ctx)
}

fn entity_to_json(entity: &Entity) -> Value {
    let mut node = Map::new();
    node.insert("@id".to_owned(), json!(entity.id().as_str()));
    node.insert(
        "@type".to_owned(),
        json!(format!("hqdm:{}", entity.entity_type())),
    );
    for (key, values) in entity.properties() {
        let values: Vec<Value> = values.iter().map(value_to_json).collect();
        node.insert(format!("hqdm:{key}"), Value::Array(values));
    }
    Value::Object(node)
}

fn value_to_json(value: &entity::Value) -> Value {
    match value {
        entity::Value::Reference(iri) => json!({ "@id": iri.as_str() }),
        entity::Value::Scalar(v) => json!({
            "@value": double_lexical(*v),
            "@type": "xsd:double"
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocab::{CLASSIFIER, MEMBER, VALUE_};

    #[test]
    fn produces_context_and_graph() {
        let json = entities_to_json_ld(Schema::hqdm(), &[]);
        assert!(json["@context"].is_object());
        assert_eq!(json["@context"]["hqdm"], crate::vocab::HQDM);
        assert_eq!(json["@graph"].as_array().map(Vec::len), Some(0));
    }

    #[test]
    fn nodes_carry_id_type_and_values() {
        let classification = Schema::hqdm()
            .builder("classification", "http://example.com/c")
            .expect("classification is in the table")
            .add_value(CLASSIFIER, "http://example.com/person")
            .add_value(MEMBER, "http://example.com/alice")
            .build()
            .expect("classifier and member are set");
        let json = entities_to_json_ld(Schema::hqdm(), &[classification]);
        let node = &json["@graph"][0];
        assert_eq!(node["@id"], "http://example.com/c");
        assert_eq!(node["@type"], "hqdm:classification");
        assert_eq!(node["hqdm:member"][0]["@id"], "http://example.com/alice");
    }

    #[test]
    fn scalars_are_typed_values() {
        let quantity = Schema::hqdm()
            .builder("physical_quantity", "http://example.com/q")
            .expect("physical_quantity is in the table")
            .add_scalar(VALUE_, 0.5)
            .add_value("member_of_", "http://example.com/length")
            .build()
            .expect("value_ and member_of_ are set");
        let json = entities_to_json_ld(Schema::hqdm(), &[quantity]);
        let value = &json["@graph"][0]["hqdm:value_"][0];
        assert_eq!(value["@value"], "0.5");
        assert_eq!(value["@type"], "xsd:double");
    }
}
