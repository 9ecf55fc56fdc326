//! JSON-LD 1.1 validator for the graph serialization.
//!
//! Verifies that the JSON-LD artifact is a well-formed document:
//! - Has an `@context` object holding every prefix the graph binds
//! - Has an `@graph` array with one node object per subject
//! - Every node carries an `@id`

use std::path::Path;

use anyhow::{Context, Result};
use serde_json::Value;
use spdx_ontology::{Format, Graph};

use crate::report::{ConformanceReport, TestResult};

const VALIDATOR: &str = "jsonld";

/// Validates the JSON-LD artifact against `graph`.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or parsed as JSON.
pub fn validate(artifacts: &Path, graph: &Graph) -> Result<ConformanceReport> {
    let mut report = ConformanceReport::new();

    let name = Format::JsonLd.file_name();
    let path = artifacts.join(&name);
    if !path.exists() {
        report.push(TestResult::fail(VALIDATOR, format!("{name} not found")));
        return Ok(report);
    }
    let content =
        std::fs::read_to_string(&path).with_context(|| format!("Failed to read {}", path.display()))?;
    let value: Value = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse {} as JSON", path.display()))?;

    check_context(&value, graph, &mut report);
    check_graph(&value, graph, &mut report);
    Ok(report)
}

fn check_context(value: &Value, graph: &Graph, report: &mut ConformanceReport) {
    let Some(context) = value.get("@context").and_then(Value::as_object) else {
        report.push(TestResult::fail(VALIDATOR, "document has no @context object"));
        return;
    };
    let missing: Vec<String> = graph
        .prefixes()
        .iter()
        .filter(|(prefix, ns)| {
            context.get(prefix.as_str()).and_then(Value::as_str) != Some(ns.as_str())
        })
        .map(|(prefix, _)| prefix.clone())
        .collect();
    if missing.is_empty() {
        report.push(TestResult::pass(
            VALIDATOR,
            format!("@context binds all {} prefixes", graph.prefixes().len()),
        ));
    } else {
        report.push(
            TestResult::fail(VALIDATOR, "@context is missing prefix bindings").with_details(missing),
        );
    }
}

fn check_graph(value: &Value, graph: &Graph, report: &mut ConformanceReport) {
    let Some(nodes) = value.get("@graph").and_then(Value::as_array) else {
        report.push(TestResult::fail(VALIDATOR, "document has no @graph array"));
        return;
    };

    let without_id: Vec<String> = nodes
        .iter()
        .enumerate()
        .filter(|(_, node)| node.get("@id").and_then(Value::as_str).is_none())
        .map(|(i, _)| format!("node {i} has no @id"))
        .collect();
    if !without_id.is_empty() {
        report.push(
            TestResult::fail(VALIDATOR, "@graph nodes without @id").with_details(without_id),
        );
        return;
    }

    let subjects = graph.subjects().len();
    if nodes.len() == subjects {
        report.push(TestResult::pass(
            VALIDATOR,
            format!("@graph has one node per subject ({subjects})"),
        ));
    } else {
        report.push(TestResult::fail(
            VALIDATOR,
            format!("@graph has {} nodes, graph has {subjects} subjects", nodes.len()),
        ));
    }
}
