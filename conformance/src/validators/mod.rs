//! Artifact validators.
//!
//! Each validator reads what `spdx_ontology::write_artifacts` wrote and
//! compares it against the in-memory generation products.

pub mod artifacts;
pub mod context;
pub mod jsonld;
pub mod rdf;
pub mod shapes;
