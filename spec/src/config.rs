//! Generator configuration.
//!
//! All fields have defaults matching the published SPDX 3 RDF layout, so an
//! empty TOML document is a valid configuration:
//!
//! ```
//! let config = spdx_ontology::OntologyConfig::from_toml_str("").unwrap();
//! assert_eq!(config.root_namespace, "Core");
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Settings that shape identifiers, prefixes and context keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OntologyConfig {
    /// Base IRI of the ontology; entity IRIs are `<base>/<Ns>/<Name>`.
    pub base_iri: String,
    /// Prefix bound to `base_iri` in serializations and the context.
    pub prefix: String,
    /// Prefix bound to the schema-extension namespace.
    pub schema_prefix: String,
    /// Namespace whose terms get bare context keys.
    pub root_namespace: String,
    /// Language tag attached to `rdfs:comment` literals.
    pub comment_language: String,
}

impl Default for OntologyConfig {
    fn default() -> Self {
        Self {
            base_iri: "https://rdf.spdx.org/v3/".to_owned(),
            prefix: "spdx".to_owned(),
            schema_prefix: "spdxs".to_owned(),
            root_namespace: "Core".to_owned(),
            comment_language: "en".to_owned(),
        }
    }
}

impl OntologyConfig {
    /// Parses a configuration from TOML source.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the document is not valid TOML or names
    /// an unknown key.
    pub fn from_toml_str(src: &str) -> Result<Self> {
        Ok(toml::from_str(src)?)
    }

    /// Reads a configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read and
    /// [`Error::Config`] if it cannot be decoded.
    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let src = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::from_toml_str(&src)
    }

    /// The base IRI without its trailing `/`, the head every modeled
    /// identifier starts with.
    #[must_use]
    pub fn iri_stem(&self) -> &str {
        self.base_iri.trim_end_matches('/')
    }

    /// Builds the canonical identifier of an entity.
    #[must_use]
    pub fn entity_iri(&self, ns: &str, name: &str) -> String {
        format!("{}/{ns}/{name}", self.iri_stem())
    }

    /// Compact term for a namespace-qualified local name: bare in the root
    /// namespace, `<ns lower-cased>_<name>` elsewhere.
    #[must_use]
    pub fn compact_term(&self, ns: &str, name: &str) -> String {
        if ns == self.root_namespace {
            name.to_owned()
        } else {
            format!("{}_{name}", ns.to_lowercase())
        }
    }
}
