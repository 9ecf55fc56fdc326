//! `spdx-build`: Projects an SPDX schema model into the ontology graph and
//! writes the artifacts to the output directory.
//!
//! **Outputs:**
//! - `<out>/ontology.rdf.xml`: RDF/XML
//! - `<out>/ontology.rdf.ttl`: Turtle 1.1
//! - `<out>/ontology.rdf.pretty-xml`: RDF/XML with typed nodes
//! - `<out>/ontology.rdf.json-ld`: JSON-LD 1.1
//! - `<out>/ontology.rdf.nt`: N-Triples
//! - `<out>/ontology.rdf.dot`: Graphviz DOT
//! - `<out>/context.jsonld`: JSON-LD context for instance documents
//!
//! **Usage:**
//! ```text
//! spdx-build --model <json> [--config <toml>] [--out <path>]
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use spdx_clients::{init_logging, ModelArgs};
use spdx_ontology::{generate, write_artifacts};

/// Build the SPDX ontology artifacts.
#[derive(Parser)]
#[command(name = "spdx-build", about = "Build SPDX ontology artifacts")]
struct Cli {
    #[command(flatten)]
    inputs: ModelArgs,

    /// Output directory for generated artifacts.
    #[arg(long, default_value = "public")]
    out: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging();

    let (model, config) = cli.inputs.load()?;
    let generated = generate(&model, &config).context("Failed to build the ontology graph")?;

    println!(
        "SPDX ontology: {} namespaces, {} classes, {} properties, {} vocabularies, {} individuals -> {} triples, {} context terms",
        model.namespaces().len(),
        model.classes().len(),
        model.properties().len(),
        model.vocabularies().len(),
        model.individuals().len(),
        generated.graph.len(),
        generated.context.terms().len(),
    );

    let written = write_artifacts(&generated.graph, &generated.context, &cli.out)
        .with_context(|| format!("Failed to write artifacts to {}", cli.out.display()))?;
    for path in &written {
        println!("  Written: {}", path.display());
    }

    let diagnostics = &generated.diagnostics;
    if !diagnostics.is_empty() {
        println!(
            "{} diagnostic(s), {} error(s):",
            diagnostics.len(),
            diagnostics.error_count()
        );
        for diagnostic in diagnostics.entries() {
            println!("  {diagnostic}");
        }
    }

    println!("Build complete.");
    Ok(())
}
