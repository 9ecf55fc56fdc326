//! Turtle 1.1 serializer.
//!
//! Emits the graph's prefix bindings, then one block per subject in
//! first-seen order. Objects sharing a predicate are joined with `,`.

use crate::graph::{escape_literal, Graph, LiteralKind, Term, Triple};
use crate::vocab::{RDF_TYPE, XSD_STRING};

/// Serializes the graph to a Turtle string.
#[must_use]
pub fn to_turtle(graph: &Graph) -> String {
    let mut out = String::with_capacity(graph.len() * 64);

    let width = graph
        .prefixes()
        .iter()
        .map(|(p, _)| p.len())
        .max()
        .unwrap_or(0);
    for (prefix, ns) in graph.prefixes() {
        out.push_str(&format!(
            "@prefix {prefix}:{pad} <{ns}> .\n",
            pad = " ".repeat(width - prefix.len())
        ));
    }
    out.push('\n');

    for (subject, triples) in graph.by_subject() {
        out.push_str(&term(graph, subject));
        out.push('\n');
        let groups = group_by_predicate(&triples);
        let last = groups.len().saturating_sub(1);
        for (i, (predicate, objects)) in groups.iter().enumerate() {
            let objects: Vec<String> = objects.iter().map(|o| term(graph, o)).collect();
            out.push_str(&format!(
                "  {} {} {}\n",
                predicate_name(graph, predicate),
                objects.join(" , "),
                if i == last { "." } else { ";" }
            ));
        }
        out.push('\n');
    }

    out
}

fn group_by_predicate<'g>(triples: &[&'g Triple]) -> Vec<(&'g str, Vec<&'g Term>)> {
    let mut groups: Vec<(&str, Vec<&Term>)> = Vec::new();
    for t in triples {
        match groups.iter_mut().find(|(p, _)| *p == t.predicate) {
            Some((_, objects)) => objects.push(&t.object),
            None => groups.push((t.predicate.as_str(), vec![&t.object])),
        }
    }
    groups
}

fn predicate_name(graph: &Graph, predicate: &str) -> String {
    if predicate == RDF_TYPE {
        return "a".to_owned();
    }
    iri(graph, predicate)
}

fn iri(graph: &Graph, iri: &str) -> String {
    match graph.qname(iri) {
        Some((prefix, local)) => format!("{prefix}:{local}"),
        None => format!("<{iri}>"),
    }
}

fn term(graph: &Graph, term: &Term) -> String {
    match term {
        Term::Iri(value) => iri(graph, value),
        Term::Blank(id) => format!("_:b{id}"),
        Term::Literal { value, kind } => {
            let lexical = format!("\"{}\"", escape_literal(value));
            match kind {
                LiteralKind::Plain => lexical,
                LiteralKind::Lang(lang) => format!("{lexical}@{lang}"),
                LiteralKind::Typed(dt) if dt == XSD_STRING => lexical,
                LiteralKind::Typed(dt) => format!("{lexical}^^{}", iri(graph, dt)),
            }
        }
    }
}
