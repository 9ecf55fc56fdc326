//! Standard IRI constants used by the graph builder and the serializers.

/// OWL namespace.
pub const OWL: &str = "http://www.w3.org/2002/07/owl#";
/// RDF namespace.
pub const RDF: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
/// RDFS namespace.
pub const RDFS: &str = "http://www.w3.org/2000/01/rdf-schema#";
/// XSD namespace.
pub const XSD: &str = "http://www.w3.org/2001/XMLSchema#";
/// SHACL namespace.
pub const SH: &str = "http://www.w3.org/ns/shacl#";

/// Schema-extension namespace carrying the `referenceable` and
/// `idPropertyName` annotations.
pub const SPDXS: &str = "https://rdf.spdx.org/ns/schema#";

/// `rdf:type`.
pub const RDF_TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
/// `rdf:Property`.
pub const RDF_PROPERTY: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#Property";

/// `rdfs:Class`.
pub const RDFS_CLASS: &str = "http://www.w3.org/2000/01/rdf-schema#Class";
/// `rdfs:comment`.
pub const RDFS_COMMENT: &str = "http://www.w3.org/2000/01/rdf-schema#comment";
/// `rdfs:label`.
pub const RDFS_LABEL: &str = "http://www.w3.org/2000/01/rdf-schema#label";
/// `rdfs:range`.
pub const RDFS_RANGE: &str = "http://www.w3.org/2000/01/rdf-schema#range";
/// `rdfs:subClassOf`.
pub const RDFS_SUBCLASS_OF: &str = "http://www.w3.org/2000/01/rdf-schema#subClassOf";

/// `owl:Ontology`.
pub const OWL_ONTOLOGY: &str = "http://www.w3.org/2002/07/owl#Ontology";
/// `owl:versionIRI`.
pub const OWL_VERSION_IRI: &str = "http://www.w3.org/2002/07/owl#versionIRI";
/// `owl:Class`.
pub const OWL_CLASS: &str = "http://www.w3.org/2002/07/owl#Class";
/// `owl:ObjectProperty`.
pub const OWL_OBJECT_PROPERTY: &str = "http://www.w3.org/2002/07/owl#ObjectProperty";
/// `owl:DatatypeProperty`.
pub const OWL_DATATYPE_PROPERTY: &str = "http://www.w3.org/2002/07/owl#DatatypeProperty";
/// `owl:NamedIndividual`.
pub const OWL_NAMED_INDIVIDUAL: &str = "http://www.w3.org/2002/07/owl#NamedIndividual";
/// `owl:sameAs`.
pub const OWL_SAME_AS: &str = "http://www.w3.org/2002/07/owl#sameAs";

/// `sh:NodeShape`.
pub const SH_NODE_SHAPE: &str = "http://www.w3.org/ns/shacl#NodeShape";
/// `sh:property`.
pub const SH_PROPERTY: &str = "http://www.w3.org/ns/shacl#property";
/// `sh:path`.
pub const SH_PATH: &str = "http://www.w3.org/ns/shacl#path";
/// `sh:class`.
pub const SH_CLASS: &str = "http://www.w3.org/ns/shacl#class";
/// `sh:datatype`.
pub const SH_DATATYPE: &str = "http://www.w3.org/ns/shacl#datatype";
/// `sh:pattern`.
pub const SH_PATTERN: &str = "http://www.w3.org/ns/shacl#pattern";
/// `sh:minCount`.
pub const SH_MIN_COUNT: &str = "http://www.w3.org/ns/shacl#minCount";
/// `sh:maxCount`.
pub const SH_MAX_COUNT: &str = "http://www.w3.org/ns/shacl#maxCount";

/// `xsd:string`.
pub const XSD_STRING: &str = "http://www.w3.org/2001/XMLSchema#string";
/// `xsd:integer`.
pub const XSD_INTEGER: &str = "http://www.w3.org/2001/XMLSchema#integer";

/// `spdxs:referenceable`.
pub const SPDXS_REFERENCEABLE: &str = "https://rdf.spdx.org/ns/schema#referenceable";
/// `spdxs:idPropertyName`.
pub const SPDXS_ID_PROPERTY_NAME: &str = "https://rdf.spdx.org/ns/schema#idPropertyName";

/// Prefixes that are always bound, in output order.
pub const STANDARD_PREFIXES: &[(&str, &str)] = &[
    ("owl", OWL),
    ("rdf", RDF),
    ("rdfs", RDFS),
    ("sh", SH),
    ("xsd", XSD),
];
