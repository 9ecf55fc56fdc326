//! N-Triples serializer.
//!
//! One statement per line with absolute IRIs; blank nodes are labelled
//! `_:b<n>`. Suitable for streaming, bulk loading and line-based diffs.

use crate::graph::Graph;

/// Serializes the graph to an N-Triples string.
#[must_use]
pub fn to_ntriples(graph: &Graph) -> String {
    let mut out = String::with_capacity(graph.len() * 96);
    for t in graph.iter() {
        out.push_str(&t.subject.to_string());
        out.push_str(" <");
        out.push_str(&t.predicate);
        out.push_str("> ");
        out.push_str(&t.object.to_string());
        out.push_str(" .\n");
    }
    out
}
