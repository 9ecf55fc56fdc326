//! Graphviz DOT rendering of the ontology graph.
//!
//! Every IRI and blank node becomes a box; literal-valued statements are
//! folded into the owning node's label, one `predicate: value` line each.
//! Statements with a node-valued object become labelled edges.

use indexmap::IndexMap;

use crate::graph::{Graph, Term};

/// Renders the graph as a DOT digraph.
#[must_use]
pub fn to_dot(graph: &Graph) -> String {
    // Node index is the insertion position; values are the folded literal lines.
    let mut nodes: IndexMap<&Term, Vec<String>> = IndexMap::new();
    for t in graph.iter() {
        let lines = nodes.entry(&t.subject).or_default();
        if let Some(value) = t.object.as_literal() {
            lines.push(format!("{}: {value}", qname_or_iri(graph, &t.predicate)));
        } else {
            nodes.entry(&t.object).or_default();
        }
    }

    let mut dot = String::new();
    dot.push_str("digraph Ontology {\n");
    dot.push_str("  rankdir=LR;\n");
    dot.push_str("  node [shape=box, style=rounded, fontname=\"Helvetica\"];\n");
    dot.push_str("  edge [fontname=\"Helvetica\", fontsize=10];\n\n");

    for (id, (node, lines)) in nodes.iter().enumerate() {
        let mut label = name(graph, node);
        for line in lines {
            label.push('\n');
            label.push_str(line);
        }
        let style = match node {
            Term::Blank(_) => ", style=\"rounded,dashed\"",
            _ => "",
        };
        dot.push_str(&format!("  node{id} [label=\"{}\"{style}];\n", escape(&label)));
    }
    dot.push('\n');

    for t in graph.iter().filter(|t| !t.object.is_literal()) {
        let from = nodes.get_index_of(&t.subject);
        let to = nodes.get_index_of(&t.object);
        if let (Some(from), Some(to)) = (from, to) {
            dot.push_str(&format!(
                "  node{from} -> node{to} [label=\"{}\"];\n",
                escape(&qname_or_iri(graph, &t.predicate))
            ));
        }
    }

    dot.push_str("}\n");
    dot
}

fn name(graph: &Graph, term: &Term) -> String {
    match term {
        Term::Iri(iri) => qname_or_iri(graph, iri),
        Term::Blank(id) => format!("_:b{id}"),
        Term::Literal { value, .. } => value.clone(),
    }
}

fn qname_or_iri(graph: &Graph, iri: &str) -> String {
    match graph.qname(iri) {
        Some((prefix, local)) => format!("{prefix}:{local}"),
        None => iri.to_owned(),
    }
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocab::*;

    #[test]
    fn renders_nodes_edges_and_literal_lines() {
        let mut g = Graph::new();
        g.bind("spdx", "https://rdf.spdx.org/v3/");
        let class = Term::iri("https://rdf.spdx.org/v3/Core/Agent");
        g.insert(class.clone(), RDF_TYPE, Term::iri(OWL_CLASS));
        g.insert(class.clone(), RDFS_COMMENT, Term::lang_literal("Says \"hi\"", "en"));
        let shape = g.blank();
        g.insert(class, SH_PROPERTY, shape);

        let dot = to_dot(&g);
        assert!(dot.starts_with("digraph Ontology {\n"));
        assert!(dot.contains(
            "  node0 [label=\"https://rdf.spdx.org/v3/Core/Agent\\nrdfs:comment: Says \\\"hi\\\"\"];\n"
        ));
        assert!(dot.contains("  node1 [label=\"owl:Class\"];\n"));
        assert!(dot.contains("  node2 [label=\"_:b0\", style=\"rounded,dashed\"];\n"));
        assert!(dot.contains("  node0 -> node1 [label=\"rdf:type\"];\n"));
        assert!(dot.contains("  node0 -> node2 [label=\"sh:property\"];\n"));
        assert!(dot.ends_with("}\n"));
    }
}
