//! SHACL shape structure validator.
//!
//! Checks the node shapes of the built graph without a SHACL engine:
//! - every `sh:NodeShape` has at least one property shape
//! - every property shape carries exactly one `sh:path`
//! - every path names a declared `rdf:Property`

use spdx_ontology::vocab::{RDF_PROPERTY, RDF_TYPE, SH_NODE_SHAPE, SH_PATH, SH_PROPERTY};
use spdx_ontology::{Graph, Term};

use crate::report::{ConformanceReport, TestResult};

const VALIDATOR: &str = "shapes";

/// Validates the node shapes of `graph`.
pub fn validate(graph: &Graph) -> ConformanceReport {
    let mut report = ConformanceReport::new();

    let node_shape = Term::iri(SH_NODE_SHAPE);
    let mut problems = Vec::new();
    let mut checked = 0usize;
    for class in graph.subjects_with(RDF_TYPE, &node_shape) {
        let shapes: Vec<&Term> = graph.objects(class, SH_PROPERTY).collect();
        if shapes.is_empty() {
            problems.push(format!("{class} is a node shape without property shapes"));
        }
        for shape in shapes {
            checked += 1;
            let paths: Vec<&Term> = graph.objects(shape, SH_PATH).collect();
            match paths.as_slice() {
                [path] if graph.has_type(path, RDF_PROPERTY) => {}
                [path] => problems.push(format!("{class}: path {path} is not a declared property")),
                _ => problems.push(format!(
                    "{class}: property shape {shape} has {} sh:path values",
                    paths.len()
                )),
            }
        }
    }

    if problems.is_empty() {
        report.push(TestResult::pass(
            VALIDATOR,
            format!("{checked} property shapes each have one declared sh:path"),
        ));
    } else {
        report.push(
            TestResult::fail(VALIDATOR, format!("{} shape problem(s)", problems.len()))
                .with_details(problems),
        );
    }
    report
}
