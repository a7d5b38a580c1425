//! N-Triples serializer.
//!
//! Entities become one `rdf:type` triple plus one triple per value;
//! references are written as IRIs and scalars as `xsd:double` literals.
//! Identifiers are written as given; they are never checked.

use std::collections::BTreeMap;

use crate::entity::{Entity, Value};
use crate::model::{Schema, ValueKind};
use crate::serializer::double_lexical;
use crate::vocab::{
    OWL_CLASS, OWL_DATATYPE_PROPERTY, OWL_OBJECT_PROPERTY, OWL_ONTOLOGY, OWL_VERSION_INFO,
    RDFS_COMMENT, RDFS_DOMAIN, RDF_TYPE, XSD_DOUBLE, XSD_STRING,
};

/// Serializes built entities to an N-Triples string.
///
/// Type and property IRIs are formed from `schema.base_iri`.
#[must_use]
pub fn entities_to_ntriples(schema: &Schema, entities: &[Entity]) -> String {
    let mut out = String::with_capacity(entities.len() * 256);
    for entity in entities {
        let subj = entity.id().as_str();
        let type_iri = format!("{}{}", schema.base_iri, entity.entity_type());
        triple(&mut out, subj, RDF_TYPE, &iri(&type_iri));
        for (key, values) in entity.properties() {
            let pred = schema.property_iri(key);
            for value in values {
                triple(&mut out, subj, &pred, &value_to_object(value));
            }
        }
    }
    out
}

/// Serializes a slot table to N-Triples as OWL classes and properties.
///
/// Every entity type becomes an `owl:Class`; every distinct slot key an
/// `owl:ObjectProperty` (or `owl:DatatypeProperty` for scalar slots). A key
/// declared by exactly one type gets that type as its `rdfs:domain`; shared
/// keys get none, since repeated domains would intersect. A key's property
/// kind is taken from the first type that declares it. Each class also gets
/// a comment listing its mandatory slots.
#[must_use]
pub fn schema_to_ntriples(schema: &Schema) -> String {
    let mut out = String::with_capacity(64 * 1024);

    triple(&mut out, &schema.base_iri, RDF_TYPE, &iri(OWL_ONTOLOGY));
    triple(
        &mut out,
        &schema.base_iri,
        OWL_VERSION_INFO,
        &lit(&schema.version, XSD_STRING),
    );

    let mut domains: BTreeMap<&str, (ValueKind, Vec<String>)> = BTreeMap::new();
    for entity_type in schema.entity_types() {
        let class_iri = entity_type.iri(&schema.base_iri);
        triple(&mut out, &class_iri, RDF_TYPE, &iri(OWL_CLASS));
        if !entity_type.comment.is_empty() {
            triple(
                &mut out,
                &class_iri,
                RDFS_COMMENT,
                &lit(&entity_type.comment, XSD_STRING),
            );
        }
        let required: Vec<&str> = entity_type.mandatory_slots().map(|s| s.key.as_str()).collect();
        if !required.is_empty() {
            let text = format!("Mandatory: {}", required.join(", "));
            triple(&mut out, &class_iri, RDFS_COMMENT, &lit(&text, XSD_STRING));
        }
        for slot in &entity_type.slots {
            let entry = domains
                .entry(slot.key.as_str())
                .or_insert_with(|| (slot.kind, Vec::new()));
            entry.1.push(class_iri.clone());
        }
    }

    for (key, (kind, classes)) in &domains {
        let prop_iri = schema.property_iri(key);
        let type_iri = match kind {
            ValueKind::Reference => OWL_OBJECT_PROPERTY,
            ValueKind::Scalar => OWL_DATATYPE_PROPERTY,
        };
        triple(&mut out, &prop_iri, RDF_TYPE, &iri(type_iri));
        if let [class_iri] = classes.as_slice() {
            triple(&mut out, &prop_iri, RDFS_DOMAIN, &iri(class_iri));
        }
    }

    out
}

fn triple(out: &mut String, subj: &str, pred: &str, obj: &str) {
    out.push('<');
    out.push_str(subj);
    out.push_str("> <");
    out.push_str(pred);
    out.push_str("> ");
    out.push_str(obj);
    out.push_str(" .\n");
}

fn iri(s: &str) -> String {
    format!("<{}>", s)
}

fn lit(s: &str, datatype: &str) -> String {
    let escaped = s
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
        .replace('\r', "\\r");
    format!("\"{}\"^^<{}>", escaped, datatype)
}

fn value_to_object(value: &Value) -> String {
    match value {
        Value::Reference(target) => iri(target.as_str()),
        Value::Scalar(v) => lit(&double_lexical(*v), XSD_DOUBLE),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocab::{HQDM, PART, PART_OF_POSSIBLE_WORLD, VALUE_, WHOLE};

    fn aggregation() -> Entity {
        Schema::hqdm()
            .builder("aggregation", "http://example.com/agg")
            .expect("aggregation is in the table")
            .add_value(WHOLE, "http://example.com/car")
            .add_value(PART, "http://example.com/wheel")
            .build()
            .expect("whole and part are set")
    }

    #[test]
    fn one_type_triple_plus_one_per_value() {
        let nt = entities_to_ntriples(Schema::hqdm(), &[aggregation()]);
        assert_eq!(nt.lines().count(), 3);
        assert!(nt.contains(&format!(
            "<http://example.com/agg> <{RDF_TYPE}> <{HQDM}aggregation> ."
        )));
        assert!(nt.contains(&format!(
            "<http://example.com/agg> <{HQDM}whole> <http://example.com/car> ."
        )));
    }

    #[test]
    fn scalars_are_typed_literals() {
        let quantity = Schema::hqdm()
            .builder("physical_quantity", "http://example.com/q")
            .expect("physical_quantity is in the table")
            .add_scalar(VALUE_, 2.0)
            .add_value("member_of_", "http://example.com/mass")
            .build()
            .expect("value_ and member_of_ are set");
        let nt = entities_to_ntriples(Schema::hqdm(), &[quantity]);
        assert!(nt.contains(&format!("<{HQDM}value_> \"2.0\"^^<{XSD_DOUBLE}> .")));
    }

    #[test]
    fn every_line_ends_with_period() {
        let nt = schema_to_ntriples(Schema::hqdm());
        assert!(!nt.is_empty());
        for line in nt.lines() {
            assert!(line.ends_with(" ."), "Line does not end with ' .': {line}");
        }
    }

    #[test]
    fn schema_declares_classes_and_properties() {
        let nt = schema_to_ntriples(Schema::hqdm());
        assert!(nt.contains(&format!("<{HQDM}aggregation> <{RDF_TYPE}> <{OWL_CLASS}> .")));
        assert!(nt.contains(&format!(
            "<{HQDM}{PART_OF_POSSIBLE_WORLD}> <{RDF_TYPE}> <{OWL_OBJECT_PROPERTY}> ."
        )));
        assert!(nt.contains(&format!(
            "<{HQDM}{VALUE_}> <{RDF_TYPE}> <{OWL_DATATYPE_PROPERTY}> ."
        )));
    }

    #[test]
    fn properties_have_at_most_one_domain() {
        let nt = schema_to_ntriples(Schema::hqdm());
        let mut domains: BTreeMap<&str, usize> = BTreeMap::new();
        for line in nt.lines().filter(|l| l.contains(RDFS_DOMAIN)) {
            let subject = line.split(' ').next().unwrap_or_default();
            *domains.entry(subject).or_default() += 1;
        }
        assert!(!domains.is_empty());
        for (property, count) in &domains {
            assert_eq!(*count, 1, "{property} has {count} domains");
        }
        let shared = format!("<{HQDM}{PART_OF_POSSIBLE_WORLD}> <{RDFS_DOMAIN}>");
        assert!(!nt.contains(&shared));
        assert!(nt.contains(&format!(
            "<{HQDM}class_of_offered> <{RDFS_DOMAIN}> <{HQDM}offer> ."
        )));
    }

    #[test]
    fn literals_escape_line_breaks() {
        let literal = lit("a\rb\nc\"d", XSD_STRING);
        assert_eq!(literal, format!("\"a\\rb\\nc\\\"d\"^^<{XSD_STRING}>"));
        assert!(!literal.contains('\r'));
        assert!(!literal.contains('\n'));
    }
}
