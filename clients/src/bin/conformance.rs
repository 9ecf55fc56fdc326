//! `spdx-conformance`: Validates written SPDX ontology artifacts.
//!
//! Regenerates the graph and context from the model, then checks the
//! artifact directory against them:
//! - artifact inventory
//! - Turtle and N-Triples re-parsed with sophia, triple counts compared
//! - JSON-LD graph document structure
//! - context document term definitions and byte stability
//! - SHACL property shapes carrying one `sh:path` each
//!
//! **Usage:**
//! ```text
//! spdx-conformance --model <json> [--config <toml>] [--artifacts <path>]
//! ```
//!
//! Exits non-zero if any conformance check fails.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use spdx_clients::{init_logging, ModelArgs};
use spdx_conformance::{run_all, Severity};
use spdx_ontology::generate;

/// Run the SPDX ontology conformance suite.
#[derive(Parser)]
#[command(
    name = "spdx-conformance",
    about = "Validate SPDX ontology artifacts against the model they were built from"
)]
struct Cli {
    #[command(flatten)]
    inputs: ModelArgs,

    /// Path to the built artifacts directory.
    #[arg(long, default_value = "public")]
    artifacts: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging();

    let (model, config) = cli.inputs.load()?;
    let generated = generate(&model, &config).context("Failed to build the ontology graph")?;
    let report = run_all(&cli.artifacts, &generated)?;

    println!("SPDX Ontology Conformance Report");
    println!("================================");
    println!();
    for result in &report.results {
        println!("{result}");
    }

    let failed = report.failure_count();
    println!();
    println!(
        "Summary: {} passed, {} warnings, {} failed",
        report.count(Severity::Pass),
        report.count(Severity::Warning),
        failed
    );

    if failed > 0 {
        eprintln!("Conformance FAILED: {failed} check(s) did not pass.");
        process::exit(1);
    }

    println!("Conformance PASSED.");
    Ok(())
}
