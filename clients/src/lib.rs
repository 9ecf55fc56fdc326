//! Shared plumbing for the `spdx-build` and `spdx-conformance` binaries.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use spdx_ontology::{Model, OntologyConfig};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Installs the global `tracing` subscriber, honouring `RUST_LOG`.
///
/// Log lines go to stderr so stdout stays free for reports.
pub fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .init();
}

/// Model and configuration inputs shared by both binaries.
#[derive(Debug, Args)]
pub struct ModelArgs {
    /// Path to the schema model JSON document.
    #[arg(long)]
    pub model: PathBuf,

    /// Optional TOML file overriding the ontology configuration.
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl ModelArgs {
    /// Loads the configuration (defaults when no file is given) and the model.
    ///
    /// # Errors
    ///
    /// Returns an error if either file cannot be read or decoded, or if the
    /// model violates an invariant.
    pub fn load(&self) -> Result<(Model, OntologyConfig)> {
        let config = match &self.config {
            Some(path) => OntologyConfig::from_toml_file(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?,
            None => OntologyConfig::default(),
        };
        let model = load_model(&self.model, &config)?;
        Ok((model, config))
    }
}

fn load_model(path: &Path, config: &OntologyConfig) -> Result<Model> {
    let src = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read model {}", path.display()))?;
    let model = Model::from_json(&src, config)
        .with_context(|| format!("Invalid model {}", path.display()))?;
    tracing::info!(
        model = %path.display(),
        classes = model.classes().len(),
        properties = model.properties().len(),
        "model loaded"
    );
    Ok(model)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MODEL_JSON: &str = include_str!("../../spec/tests/fixtures/model.json");

    fn scratch(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("spdx-clients-{name}-{}", std::process::id()));
        std::fs::create_dir_all(&dir).expect("create scratch dir");
        dir
    }

    #[test]
    fn loads_model_with_default_config() {
        let dir = scratch("defaults");
        let model = dir.join("model.json");
        std::fs::write(&model, MODEL_JSON).expect("write model");

        let args = ModelArgs {
            model,
            config: None,
        };
        let (model, config) = args.load().expect("load");
        assert_eq!(config, OntologyConfig::default());
        assert!(model.classes().contains_key("/Core/Element"));
        let _ = std::fs::remove_dir_all(dir);
    }

    #[test]
    fn config_file_overrides_base_iri() {
        let dir = scratch("override");
        let model = dir.join("model.json");
        let config = dir.join("ontology.toml");
        std::fs::write(&model, MODEL_JSON).expect("write model");
        std::fs::write(&config, "base_iri = \"https://example.org/v9/\"\n").expect("write config");

        let args = ModelArgs {
            model,
            config: Some(config),
        };
        let (model, config) = args.load().expect("load");
        assert_eq!(config.base_iri, "https://example.org/v9/");
        assert_eq!(
            model.classes()["/Core/Element"].iri,
            "https://example.org/v9/Core/Element"
        );
        let _ = std::fs::remove_dir_all(dir);
    }

    #[test]
    fn missing_model_names_the_path() {
        let args = ModelArgs {
            model: PathBuf::from("/nonexistent/model.json"),
            config: None,
        };
        let err = args.load().expect_err("missing file");
        assert!(format!("{err:#}").contains("/nonexistent/model.json"));
    }
}
