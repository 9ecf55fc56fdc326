//! SPDX schema model projected into an OWL/SHACL ontology graph.
//!
//! The `spdx-ontology` crate takes a schema [`Model`] (classes, properties,
//! vocabularies, datatypes and named individuals grouped into namespaces),
//! builds the ontology [`Graph`] describing it, and derives the compact
//! JSON-LD [`Context`] instances use. The graph serializes to RDF/XML,
//! Turtle, N-Triples, JSON-LD and Graphviz DOT.
//!
//! # Entry Point
//!
//! ```
//! use spdx_ontology::{Class, Model, Namespace, OntologyConfig};
//!
//! let config = OntologyConfig::default();
//! let mut model = Model::new(vec![Namespace::new("Core")]);
//! model
//!     .insert_class(Class::new("Core", "Element", config.entity_iri("Core", "Element")))
//!     .unwrap();
//!
//! let generated = spdx_ontology::generate(&model, &config).unwrap();
//! assert!(generated.diagnostics.is_empty());
//! assert_eq!(
//!     generated.context.get("Element"),
//!     Some(&serde_json::json!("https://rdf.spdx.org/v3/Core/Element"))
//! );
//! ```
//!
//! # Serialization
//!
//! ```
//! # let generated = spdx_ontology::generate(
//! #     &spdx_ontology::Model::new(vec![]),
//! #     &spdx_ontology::OntologyConfig::default(),
//! # ).unwrap();
//! let turtle = spdx_ontology::serializer::turtle::to_turtle(&generated.graph);
//! let json_ld = spdx_ontology::serializer::jsonld::to_json_ld(&generated.graph);
//! assert!(turtle.contains("owl:Ontology"));
//! assert!(json_ld["@graph"].is_array());
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod builder;
pub mod config;
pub mod context;
pub mod diagnostics;
pub mod error;
pub mod graph;
pub mod inheritance;
pub mod model;
pub mod resolve;
pub mod serializer;
pub mod sink;
pub mod vocab;
pub mod xsd;

pub use config::OntologyConfig;
pub use context::{derive_context, Context};
pub use diagnostics::{Diagnostic, Diagnostics, Severity};
pub use error::{Error, ModelError, Result};
pub use graph::{Graph, LiteralKind, Term, Triple};
pub use model::{
    Class, ClassProperty, Datatype, Individual, MaxCount, Model, Namespace, Property,
    PropertyNature, Referenceable, TypeRef, Vocabulary,
};
pub use sink::{write_artifacts, Format};

/// The products of one generation run.
#[derive(Debug, Clone)]
pub struct Generated {
    /// The ontology graph.
    pub graph: Graph,
    /// The context derived from the graph.
    pub context: Context,
    /// Recoverable conditions raised while building both.
    pub diagnostics: Diagnostics,
}

/// Builds the ontology graph for `model` and derives its context.
///
/// # Errors
///
/// Returns a [`ModelError`] if the model violates an invariant.
pub fn generate(model: &Model, config: &OntologyConfig) -> Result<Generated, ModelError> {
    let mut diagnostics = Diagnostics::new();
    let graph = builder::build(model, config, &mut diagnostics)?;
    let context = derive_context(&graph, config, &mut diagnostics);
    Ok(Generated {
        graph,
        context,
        diagnostics,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_model_yields_header_only() {
        let generated =
            generate(&Model::new(vec![]), &OntologyConfig::default()).expect("empty model builds");
        assert_eq!(generated.graph.len(), 2);
        assert_eq!(generated.context.terms().len(), 2);
        assert!(generated.diagnostics.is_empty());
    }

    #[test]
    fn generated_output_clones_with_diagnostics() {
        let config = OntologyConfig::default();
        let mut model = Model::new(vec![Namespace::new("Core")]);
        model
            .insert_property(Property::new(
                "Core",
                "hue",
                config.entity_iri("Core", "hue"),
                PropertyNature::DataProperty,
                "xsd:hue",
            ))
            .expect("insert");
        model
            .insert_class(
                Class::new("Core", "Paint", config.entity_iri("Core", "Paint")).with_property(
                    "hue",
                    "hue",
                    0,
                    MaxCount::Bounded(1),
                ),
            )
            .expect("insert");

        let generated = generate(&model, &config).expect("builds");
        let copy = generated.clone();
        assert_eq!(copy.graph.len(), generated.graph.len());
        assert!(!copy.diagnostics.is_empty());
        assert_eq!(copy.diagnostics.entries(), generated.diagnostics.entries());
    }

    #[test]
    fn generation_is_deterministic() {
        let config = OntologyConfig::default();
        let mut model = Model::new(vec![Namespace::new("Core"), Namespace::new("Software")]);
        model
            .insert_class(Class::new("Core", "Element", config.entity_iri("Core", "Element")))
            .expect("insert");
        model
            .insert_class(
                Class::new("Software", "Package", config.entity_iri("Software", "Package"))
                    .with_parent("/Core/Element"),
            )
            .expect("insert");

        let a = generate(&model, &config).expect("first run");
        let b = generate(&model, &config).expect("second run");
        assert_eq!(
            serializer::ntriples::to_ntriples(&a.graph),
            serializer::ntriples::to_ntriples(&b.graph)
        );
        assert_eq!(
            a.context.to_string_pretty().expect("encode"),
            b.context.to_string_pretty().expect("encode")
        );
    }
}
