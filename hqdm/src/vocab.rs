//! IRI constants and HQDM property keys.
//!
//! Property keys are HQDM local names; the full property IRI is
//! [`HQDM`] followed by the key. Trailing and doubled underscores are part of
//! the HQDM names (`member__of`, `value_`) and distinguish sibling
//! relationships that share a stem.

/// HQDM namespace.
pub const HQDM: &str = "http://www.semanticweb.org/magma-core/ontologies/hqdm#";
/// RDF namespace.
pub const RDF: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
/// RDFS namespace.
pub const RDFS: &str = "http://www.w3.org/2000/01/rdf-schema#";
/// OWL namespace.
pub const OWL: &str = "http://www.w3.org/2002/07/owl#";
/// XSD namespace.
pub const XSD: &str = "http://www.w3.org/2001/XMLSchema#";

/// `rdf:type`.
pub const RDF_TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
/// `rdfs:comment`.
pub const RDFS_COMMENT: &str = "http://www.w3.org/2000/01/rdf-schema#comment";
/// `rdfs:domain`.
pub const RDFS_DOMAIN: &str = "http://www.w3.org/2000/01/rdf-schema#domain";
/// `owl:Class`.
pub const OWL_CLASS: &str = "http://www.w3.org/2002/07/owl#Class";
/// `owl:ObjectProperty`.
pub const OWL_OBJECT_PROPERTY: &str = "http://www.w3.org/2002/07/owl#ObjectProperty";
/// `owl:DatatypeProperty`.
pub const OWL_DATATYPE_PROPERTY: &str = "http://www.w3.org/2002/07/owl#DatatypeProperty";
/// `owl:Ontology`.
pub const OWL_ONTOLOGY: &str = "http://www.w3.org/2002/07/owl#Ontology";
/// `owl:versionInfo`.
pub const OWL_VERSION_INFO: &str = "http://www.w3.org/2002/07/owl#versionInfo";
/// `xsd:double`.
pub const XSD_DOUBLE: &str = "http://www.w3.org/2001/XMLSchema#double";
/// `xsd:string`.
pub const XSD_STRING: &str = "http://www.w3.org/2001/XMLSchema#string";

// Class membership
/// `member_of`: membership of a class of the entity's own kind.
pub const MEMBER_OF: &str = "member_of";
/// `member__of`: membership of a class of class.
pub const MEMBER__OF: &str = "member__of";
/// `member_of_`: membership of a kind whose cardinality is one.
pub const MEMBER_OF_: &str = "member_of_";
/// `member_of_kind`.
pub const MEMBER_OF_KIND: &str = "member_of_kind";
/// `member_of_currency`.
pub const MEMBER_OF_CURRENCY: &str = "member_of_currency";
/// `has_superclass`.
pub const HAS_SUPERCLASS: &str = "has_superclass";
/// `classifier`.
pub const CLASSIFIER: &str = "classifier";
/// `member`.
pub const MEMBER: &str = "member";
/// `subclass`.
pub const SUBCLASS: &str = "subclass";
/// `superclass`.
pub const SUPERCLASS: &str = "superclass";

// Whole-part
/// `whole`.
pub const WHOLE: &str = "whole";
/// `part`.
pub const PART: &str = "part";
/// `involves`.
pub const INVOLVES: &str = "involves";
/// `part_of_possible_world`.
pub const PART_OF_POSSIBLE_WORLD: &str = "part_of_possible_world";
/// `aggregated_into`.
pub const AGGREGATED_INTO: &str = "aggregated_into";
/// `part__of`.
pub const PART__OF: &str = "part__of";
/// `part_of`.
pub const PART_OF: &str = "part_of";
/// `consists__of`.
pub const CONSISTS__OF: &str = "consists__of";
/// `consists_of`.
pub const CONSISTS_OF: &str = "consists_of";
/// `consists_of_`.
pub const CONSISTS_OF_: &str = "consists_of_";
/// `temporal__part_of`.
pub const TEMPORAL__PART_OF: &str = "temporal__part_of";
/// `temporal_part_of`.
pub const TEMPORAL_PART_OF: &str = "temporal_part_of";
/// `component_of`.
pub const COMPONENT_OF: &str = "component_of";
/// `beginning`.
pub const BEGINNING: &str = "beginning";
/// `ending`.
pub const ENDING: &str = "ending";

// Roles and activities
/// `intended_role`.
pub const INTENDED_ROLE: &str = "intended_role";
/// `natural_role`.
pub const NATURAL_ROLE: &str = "natural_role";
/// `participant_in`.
pub const PARTICIPANT_IN: &str = "participant_in";
/// `consists_of_participant`.
pub const CONSISTS_OF_PARTICIPANT: &str = "consists_of_participant";
/// `causes`.
pub const CAUSES: &str = "causes";
/// `causes_beginning`.
pub const CAUSES_BEGINNING: &str = "causes_beginning";
/// `causes_ending`.
pub const CAUSES_ENDING: &str = "causes_ending";
/// `determines`.
pub const DETERMINES: &str = "determines";
/// `references`.
pub const REFERENCES: &str = "references";
/// `defined_by`.
pub const DEFINED_BY: &str = "defined_by";
/// `part_of_plan`.
pub const PART_OF_PLAN: &str = "part_of_plan";

// Money and offers
/// `consideration_by_class`.
pub const CONSIDERATION_BY_CLASS: &str = "consideration_by_class";
/// `class_of_offered`.
pub const CLASS_OF_OFFERED: &str = "class_of_offered";
/// `period_offered`.
pub const PERIOD_OFFERED: &str = "period_offered";

// Measures
/// `value_`: the numeric value of a quantity.
pub const VALUE_: &str = "value_";
/// `unit`.
pub const UNIT: &str = "unit";
/// `domain_`.
pub const DOMAIN_: &str = "domain_";
/// `lower_bound`.
pub const LOWER_BOUND: &str = "lower_bound";
/// `upper_bound`.
pub const UPPER_BOUND: &str = "upper_bound";
/// `ranges_over`.
pub const RANGES_OVER: &str = "ranges_over";
/// `uses`.
pub const USES: &str = "uses";

// Representation
/// `represents`.
pub const REPRESENTS: &str = "represents";
/// `represented`.
pub const REPRESENTED: &str = "represented";
/// `consists_of_by_class`.
pub const CONSISTS_OF_BY_CLASS: &str = "consists_of_by_class";
/// `consists_of_in_members`.
pub const CONSISTS_OF_IN_MEMBERS: &str = "consists_of_in_members";
