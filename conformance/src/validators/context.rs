//! Context document validator.
//!
//! The context file must be a single `@context` object whose values are
//! IRIs, JSON-LD keywords, or expanded term definitions coercing to `@id` or
//! `@vocab`. Its bytes must match a fresh serialization of the derived
//! context.

use std::path::Path;

use anyhow::{Context as _, Result};
use serde_json::{Map, Value};
use spdx_ontology::sink::CONTEXT_FILE;
use spdx_ontology::Context;

use crate::report::{ConformanceReport, TestResult};

const VALIDATOR: &str = "context";

/// Validates the context document against the derived `context`.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or encoded.
pub fn validate(artifacts: &Path, context: &Context) -> Result<ConformanceReport> {
    let mut report = ConformanceReport::new();

    let path = artifacts.join(CONTEXT_FILE);
    if !path.exists() {
        report.push(TestResult::fail(VALIDATOR, format!("{CONTEXT_FILE} not found")));
        return Ok(report);
    }
    let content =
        std::fs::read_to_string(&path).with_context(|| format!("Failed to read {}", path.display()))?;

    match serde_json::from_str::<Value>(&content) {
        Ok(value) => check_shape(&value, &mut report),
        Err(e) => {
            report.push(TestResult::fail(
                VALIDATOR,
                format!("{CONTEXT_FILE} is not JSON: {e}"),
            ));
            return Ok(report);
        }
    }

    let expected = context
        .to_string_pretty()
        .context("Failed to encode derived context")?;
    if content.trim_end() == expected {
        report.push(TestResult::pass(
            VALIDATOR,
            format!("{CONTEXT_FILE} matches the derived context byte for byte"),
        ));
    } else {
        report.push(TestResult::fail(
            VALIDATOR,
            format!("{CONTEXT_FILE} differs from the derived context"),
        ));
    }
    Ok(report)
}

fn check_shape(value: &Value, report: &mut ConformanceReport) {
    let Some(root) = value.as_object() else {
        report.push(TestResult::fail(VALIDATOR, "document is not a JSON object"));
        return;
    };
    let Some(terms) = root.get("@context").and_then(Value::as_object) else {
        report.push(TestResult::fail(VALIDATOR, "document has no @context object"));
        return;
    };
    if root.len() != 1 {
        report.push(TestResult::warn(
            VALIDATOR,
            format!("document has {} top-level keys besides @context", root.len() - 1),
        ));
    }

    let invalid: Vec<String> = terms
        .iter()
        .filter_map(|(key, def)| term_problem(def).map(|p| format!("{key}: {p}")))
        .collect();
    if invalid.is_empty() {
        report.push(TestResult::pass(
            VALIDATOR,
            format!("all {} term definitions are well-formed", terms.len()),
        ));
    } else {
        report.push(
            TestResult::fail(
                VALIDATOR,
                format!("{} malformed term definition(s)", invalid.len()),
            )
            .with_details(invalid),
        );
    }
}

fn term_problem(def: &Value) -> Option<&'static str> {
    match def {
        Value::String(s) if s.starts_with('@') || s.contains(':') => None,
        Value::String(_) => Some("string value is neither an IRI nor a keyword"),
        Value::Object(obj) => expanded_problem(obj),
        _ => Some("value must be a string or an object"),
    }
}

fn expanded_problem(obj: &Map<String, Value>) -> Option<&'static str> {
    if !obj.get("@id").and_then(Value::as_str).is_some_and(|id| id.contains(':')) {
        return Some("expanded definition has no absolute @id");
    }
    match obj.get("@type").and_then(Value::as_str) {
        Some("@id") => None,
        Some("@vocab") => {
            let vocab = obj
                .get("@context")
                .and_then(|c| c.get("@vocab"))
                .and_then(Value::as_str);
            match vocab {
                Some(v) if v.ends_with('/') => None,
                _ => Some("@vocab coercion without a scoped @vocab ending in '/'"),
            }
        }
        _ => Some("@type must be @id or @vocab"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::Scratch;
    use serde_json::json;

    #[test]
    fn written_context_passes() {
        let scratch = Scratch::written("context-ok");
        let report = validate(scratch.dir(), &scratch.generated.context).expect("validate");
        assert!(report.all_passed(), "{:#?}", report.results);
    }

    #[test]
    fn term_shapes() {
        assert_eq!(term_problem(&json!("@id")), None);
        assert_eq!(term_problem(&json!("https://rdf.spdx.org/v3/Core/name")), None);
        assert!(term_problem(&json!("name")).is_some());
        assert!(term_problem(&json!(3)).is_some());
        assert_eq!(
            term_problem(&json!({ "@id": "https://x/Core/p", "@type": "@id" })),
            None
        );
        assert!(term_problem(&json!({ "@id": "https://x/Core/p", "@type": "@vocab" })).is_some());
        assert!(term_problem(&json!({ "@type": "@id" })).is_some());
    }

    #[test]
    fn edited_context_is_reported() {
        let scratch = Scratch::written("context-edited");
        std::fs::write(
            scratch.dir().join(CONTEXT_FILE),
            r#"{"@context": {"name": "name"}}"#,
        )
        .expect("overwrite");
        let report = validate(scratch.dir(), &scratch.generated.context).expect("validate");
        assert_eq!(report.failure_count(), 2);
    }
}
