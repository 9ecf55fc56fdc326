//! JSON-LD context derivation.
//!
//! The context is derived from the built graph, not the model, so it covers
//! exactly the terms the serialized ontology declares. Keys are compact
//! names (`name`, `software_purl`); identifying-property names map to `@id`
//! so instances can use their natural key as the node identifier.

use std::collections::{BTreeMap, HashSet};

use serde_json::{json, Map, Value};

use crate::config::OntologyConfig;
use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::graph::{Graph, Term};
use crate::vocab::*;

/// A derived term-mapping table.
#[derive(Debug, Clone, PartialEq)]
pub struct Context {
    terms: BTreeMap<String, Value>,
}

impl Context {
    /// Term definitions, sorted by key.
    #[must_use]
    pub fn terms(&self) -> &BTreeMap<String, Value> {
        &self.terms
    }

    /// The definition of a single term.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.terms.get(key)
    }

    /// The context document: `{"@context": {...}}`.
    #[must_use]
    pub fn to_json(&self) -> Value {
        let terms: Map<String, Value> = self
            .terms
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        json!({ "@context": terms })
    }

    /// Pretty-printed context document with sorted keys.
    ///
    /// # Errors
    ///
    /// Returns an error only if JSON encoding fails.
    pub fn to_string_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.to_json())
    }
}

/// Derives the context from an ontology graph.
///
/// Subjects are visited in sorted order and the first subject to claim a key
/// keeps it; each later claimant raises a
/// [`Diagnostic::DuplicateContextKey`] and is dropped.
pub fn derive_context(
    graph: &Graph,
    config: &OntologyConfig,
    diagnostics: &mut Diagnostics,
) -> Context {
    let mut terms: BTreeMap<String, Value> = BTreeMap::new();
    terms.insert(config.prefix.clone(), json!(config.base_iri));
    terms.insert("type".to_owned(), json!("@type"));

    for id_name in graph.objects_of(SPDXS_ID_PROPERTY_NAME) {
        if let Some(name) = id_name.as_literal() {
            terms.insert(name.to_owned(), json!("@id"));
        }
    }

    let named_individual = Term::iri(OWL_NAMED_INDIVIDUAL);
    let enumerations: HashSet<&Term> = graph
        .subjects_with(RDF_TYPE, &named_individual)
        .flat_map(|s| graph.objects(s, RDF_TYPE))
        .filter(|o| **o != named_individual)
        .collect();

    let mut subjects: Vec<&str> = graph
        .subjects()
        .into_iter()
        .filter(|s| !graph.has_type(s, OWL_NAMED_INDIVIDUAL))
        .filter_map(Term::as_iri)
        .collect();
    subjects.sort_unstable();

    for subject in subjects {
        let Some((ns, name)) = decompose(subject, config.iri_stem()) else {
            continue;
        };
        let key = config.compact_term(ns, name);

        if let Some(current) = terms.get(&key) {
            let existing = current
                .get("@id")
                .unwrap_or(current)
                .as_str()
                .unwrap_or_default()
                .to_owned();
            diagnostics.push(Diagnostic::DuplicateContextKey {
                key,
                subject: subject.to_owned(),
                existing,
            });
            continue;
        }

        let definition = term_definition(graph, subject, &enumerations);
        terms.insert(key, definition);
    }

    tracing::debug!(terms = terms.len(), "context derived");
    Context { terms }
}

/// Splits `<stem>/<ns>/<name>` into `(ns, name)`.
fn decompose<'s>(iri: &'s str, stem: &str) -> Option<(&'s str, &'s str)> {
    let mut parts = iri.rsplitn(3, '/');
    let name = parts.next()?;
    let ns = parts.next()?;
    let base = parts.next()?;
    if base != stem || ns.is_empty() || name.is_empty() {
        return None;
    }
    Some((ns, name))
}

fn term_definition(graph: &Graph, subject: &str, enumerations: &HashSet<&Term>) -> Value {
    let node = Term::iri(subject);
    if graph.has_type(&node, OWL_OBJECT_PROPERTY) {
        for range in graph.objects(&node, RDFS_RANGE) {
            let Some(range_iri) = range.as_iri() else {
                continue;
            };
            if enumerations.contains(range) {
                return json!({
                    "@id": subject,
                    "@type": "@vocab",
                    "@context": { "@vocab": format!("{range_iri}/") },
                });
            }
            if graph.has_type(range, RDFS_CLASS) {
                return json!({ "@id": subject, "@type": "@id" });
            }
        }
    }
    json!(subject)
}
