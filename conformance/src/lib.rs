//! SPDX ontology artifact conformance suite.
//!
//! Re-reads the artifacts written by `spdx_ontology::write_artifacts` and
//! checks them against the standards they claim and against the in-memory
//! generation products they were written from.
//!
//! # Conformance Scope
//!
//! | Artifact | Standard |
//! |-----------|----------|
//! | Artifact set | all seven files present and non-empty |
//! | Turtle / N-Triples | RDF 1.1, Turtle 1.1 (re-parsed with sophia) |
//! | JSON-LD graph | JSON-LD 1.1 document structure |
//! | Context document | JSON-LD 1.1 term definitions, byte-stable |
//! | Node shapes | SHACL property shapes with one `sh:path` each |
//!
//! # Entry Point
//!
//! ```no_run
//! use spdx_conformance::run_all;
//! use spdx_ontology::{generate, Model, OntologyConfig};
//! use std::path::Path;
//!
//! let config = OntologyConfig::default();
//! let src = std::fs::read_to_string("model.json").expect("read model");
//! let model = Model::from_json(&src, &config).expect("load model");
//! let generated = generate(&model, &config).expect("generate");
//! let report = run_all(Path::new("public"), &generated).expect("run conformance");
//! assert!(report.all_passed());
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::path::Path;

use spdx_ontology::Generated;

pub mod report;
pub mod validators;

pub use report::{ConformanceReport, Severity, TestResult};

/// Runs all conformance validators and returns the aggregated report.
///
/// Validators are run in this order:
/// 1. Artifact inventory
/// 2. RDF 1.1 / Turtle 1.1 re-parse
/// 3. JSON-LD graph document
/// 4. Context document
/// 5. SHACL shape structure (on the in-memory graph, no file I/O)
///
/// # Errors
///
/// Returns an error only if a file system operation fails.
pub fn run_all(artifacts: &Path, generated: &Generated) -> anyhow::Result<ConformanceReport> {
    let mut report = ConformanceReport::new();

    report.extend(validators::artifacts::validate(artifacts));
    report.extend(validators::rdf::validate(artifacts, &generated.graph)?);
    report.extend(validators::jsonld::validate(artifacts, &generated.graph)?);
    report.extend(validators::context::validate(artifacts, &generated.context)?);
    report.extend(validators::shapes::validate(&generated.graph));

    tracing::debug!(
        results = report.results.len(),
        failures = report.failure_count(),
        "conformance run finished"
    );
    Ok(report)
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::path::{Path, PathBuf};

    use spdx_ontology::{generate, write_artifacts, Generated, Model, OntologyConfig};

    const MODEL_JSON: &str = include_str!("../../spec/tests/fixtures/model.json");

    pub fn generated() -> Generated {
        let config = OntologyConfig::default();
        let model = Model::from_json(MODEL_JSON, &config).expect("fixture model");
        generate(&model, &config).expect("fixture generates")
    }

    /// Fixture artifacts written to a per-test directory, removed on drop.
    pub struct Scratch {
        dir: PathBuf,
        pub generated: Generated,
    }

    impl Scratch {
        pub fn written(name: &str) -> Self {
            let dir = std::env::temp_dir().join(format!(
                "spdx-conformance-{name}-{}",
                std::process::id()
            ));
            let _ = std::fs::remove_dir_all(&dir);
            let generated = generated();
            write_artifacts(&generated.graph, &generated.context, &dir).expect("write artifacts");
            Self { dir, generated }
        }

        pub fn dir(&self) -> &Path {
            &self.dir
        }
    }

    impl Drop for Scratch {
        fn drop(&mut self) {
            let _ = std::fs::remove_dir_all(&self.dir);
        }
    }
}
