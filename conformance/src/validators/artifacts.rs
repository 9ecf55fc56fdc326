//! Artifact inventory: every serialization and the context document exist
//! and are non-empty.

use std::path::Path;

use spdx_ontology::sink::CONTEXT_FILE;
use spdx_ontology::Format;

use crate::report::{ConformanceReport, TestResult};

const VALIDATOR: &str = "artifacts";

/// Checks that the artifact directory holds the full artifact set.
pub fn validate(artifacts: &Path) -> ConformanceReport {
    let mut report = ConformanceReport::new();

    let expected = Format::ALL
        .iter()
        .map(|f| f.file_name())
        .chain(std::iter::once(CONTEXT_FILE.to_owned()));

    let mut problems = Vec::new();
    let mut found = 0usize;
    for name in expected {
        let path = artifacts.join(&name);
        match std::fs::metadata(&path) {
            Ok(meta) if meta.is_file() && meta.len() > 0 => found += 1,
            Ok(_) => problems.push(format!("{name} is empty or not a file")),
            Err(_) => problems.push(format!("{name} not found")),
        }
    }

    if problems.is_empty() {
        report.push(TestResult::pass(
            VALIDATOR,
            format!("all {found} artifacts present in {}", artifacts.display()),
        ));
    } else {
        report.push(
            TestResult::fail(
                VALIDATOR,
                format!("{} artifact(s) missing or empty", problems.len()),
            )
            .with_details(problems),
        );
    }
    report
}
