//! Shared fixture model and graph queries for the integration tests.

#![allow(dead_code)]

use spdx_ontology::vocab::{SH_PATH, SH_PROPERTY};
use spdx_ontology::{Graph, Model, OntologyConfig, Term};

/// A two-namespace model exercising inheritance, datatypes, vocabularies,
/// individuals and identifying properties.
pub const MODEL_JSON: &str = include_str!("../fixtures/model.json");

pub fn config() -> OntologyConfig {
    OntologyConfig::default()
}

/// Routes `tracing` output (diagnostics included) to the test harness.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn fixture_model() -> Model {
    init_tracing();
    Model::from_json(MODEL_JSON, &config()).expect("fixture model is valid")
}

/// `https://rdf.spdx.org/v3/<ns>/<name>` as an IRI term.
pub fn node(ns: &str, name: &str) -> Term {
    Term::iri(config().entity_iri(ns, name))
}

/// Property shapes attached to a class, in emission order.
pub fn shapes_of<'g>(graph: &'g Graph, class: &'g Term) -> Vec<&'g Term> {
    graph.objects(class, SH_PROPERTY).collect()
}

/// The `sh:path` IRIs of a class's property shapes, in emission order.
pub fn shape_paths(graph: &Graph, class: &Term) -> Vec<String> {
    shapes_of(graph, class)
        .into_iter()
        .flat_map(|shape| graph.objects(shape, SH_PATH))
        .filter_map(|path| path.as_iri().map(str::to_owned))
        .collect()
}

/// The single shape of `class` whose path is `property`.
pub fn shape_for<'g>(graph: &'g Graph, class: &'g Term, property: &Term) -> &'g Term {
    shapes_of(graph, class)
        .into_iter()
        .find(|shape| graph.contains(shape, SH_PATH, property))
        .unwrap_or_else(|| panic!("no shape for {property} on {class}"))
}
