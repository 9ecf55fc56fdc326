//! RDF 1.1 / Turtle 1.1 validator.
//!
//! Re-parses the Turtle and N-Triples artifacts with `sophia` and checks that
//! each yields exactly as many triples as the in-memory graph holds.

use std::path::Path;

use anyhow::{Context, Result};
use sophia_api::source::TripleSource;
use sophia_turtle::parser::{nt, turtle};
use spdx_ontology::{Format, Graph};

use crate::report::{ConformanceReport, TestResult};

const VALIDATOR: &str = "rdf";

/// Validates the Turtle and N-Triples artifacts against `graph`.
///
/// # Errors
///
/// Returns an error if an existing artifact cannot be read.
pub fn validate(artifacts: &Path, graph: &Graph) -> Result<ConformanceReport> {
    let mut report = ConformanceReport::new();
    for format in [Format::Turtle, Format::NTriples] {
        validate_format(artifacts, format, graph.len(), &mut report)?;
    }
    Ok(report)
}

fn validate_format(
    artifacts: &Path,
    format: Format,
    expected: usize,
    report: &mut ConformanceReport,
) -> Result<()> {
    let name = format.file_name();
    let path = artifacts.join(&name);
    if !path.exists() {
        report.push(TestResult::fail(VALIDATOR, format!("{name} not found")));
        return Ok(());
    }
    let content =
        std::fs::read_to_string(&path).with_context(|| format!("Failed to read {}", path.display()))?;

    let parsed = match format {
        Format::NTriples => count_triples(nt::parse_str(&content)),
        _ => count_triples(turtle::parse_str(&content)),
    };
    match parsed {
        Ok(count) if count == expected => report.push(TestResult::pass(
            VALIDATOR,
            format!("{name} parses to {count} triples"),
        )),
        Ok(count) => report.push(TestResult::fail(
            VALIDATOR,
            format!("{name} parses to {count} triples, graph has {expected}"),
        )),
        Err(e) => report.push(
            TestResult::fail(VALIDATOR, format!("{name} does not parse")).with_details([e]),
        ),
    }
    Ok(())
}

fn count_triples<S: TripleSource>(mut source: S) -> Result<usize, String> {
    let mut count = 0usize;
    source
        .for_each_triple(|_| count += 1)
        .map_err(|e| e.to_string())?;
    Ok(count)
}
