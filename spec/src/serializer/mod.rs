//! Serializers for the ontology graph.
//!
//! Every format carries the identical statement set:
//! - **RDF/XML** ([`rdfxml`]): flat `rdf:Description` form and a pretty,
//!   typed-node form with nested property shapes
//! - **Turtle** ([`turtle`]): subject-grouped, prefixed
//! - **N-Triples** ([`ntriples`]): one statement per line, absolute IRIs
//! - **JSON-LD** ([`jsonld`]): `@context` of prefixes plus `@graph`
//! - **DOT** ([`dot`]): Graphviz source for a visual dependency graph

pub mod dot;
pub mod jsonld;
pub mod ntriples;
pub mod rdfxml;
pub mod turtle;
