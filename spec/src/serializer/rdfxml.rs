//! RDF/XML serializers.
//!
//! [`to_rdf_xml`] writes one `rdf:Description` per subject.
//! [`to_pretty_rdf_xml`] uses a subject's first QName-able `rdf:type` as the
//! element name and nests blank nodes that are referenced exactly once
//! (the SHACL property shapes) inside the statement that references them.

use std::collections::HashMap;

use crate::graph::{Graph, LiteralKind, Term, Triple};
use crate::vocab::{RDF, RDF_TYPE};

/// Serializes the graph to flat RDF/XML.
#[must_use]
pub fn to_rdf_xml(graph: &Graph) -> String {
    let mut out = header(graph);
    for (subject, triples) in graph.by_subject() {
        write_node(&mut out, graph, subject, &triples, 1);
    }
    out.push_str("</rdf:RDF>\n");
    out
}

/// Serializes the graph to typed-node RDF/XML with nested property shapes.
#[must_use]
pub fn to_pretty_rdf_xml(graph: &Graph) -> String {
    let mut references: HashMap<&Term, usize> = HashMap::new();
    for t in graph.iter() {
        if let Term::Blank(_) = t.object {
            *references.entry(&t.object).or_default() += 1;
        }
    }
    let groups = graph.by_subject();
    let nested: HashMap<&Term, &Vec<&Triple>> = groups
        .iter()
        .filter(|(s, _)| matches!(s, Term::Blank(_)) && references.get(s) == Some(&1))
        .map(|(s, triples)| (*s, triples))
        .collect();

    let mut pretty = Pretty {
        graph,
        nested: &nested,
        out: header(graph),
    };
    for (subject, triples) in &groups {
        if nested.contains_key(subject) {
            continue;
        }
        pretty.node(subject, triples, 1);
    }
    pretty.out.push_str("</rdf:RDF>\n");
    pretty.out
}

struct Pretty<'g, 'n> {
    graph: &'g Graph,
    nested: &'n HashMap<&'g Term, &'n Vec<&'g Triple>>,
    out: String,
}

impl Pretty<'_, '_> {
    fn node(&mut self, subject: &Term, triples: &[&Triple], depth: usize) {
        let nested = self.nested;
        let typed = triples.iter().position(|t| {
            t.predicate == RDF_TYPE
                && t.object
                    .as_iri()
                    .is_some_and(|iri| xml_qname(self.graph, iri).is_some())
        });
        let element = typed
            .and_then(|i| triples[i].object.as_iri())
            .and_then(|iri| xml_qname(self.graph, iri))
            .unwrap_or_else(|| "rdf:Description".to_owned());

        let indent = "  ".repeat(depth);
        self.out
            .push_str(&format!("{indent}<{element}{}>\n", subject_attr(subject)));
        for (i, t) in triples.iter().enumerate() {
            if Some(i) == typed {
                continue;
            }
            match nested.get(&t.object) {
                Some(inner) => {
                    let (name, xmlns) = predicate_qname(self.graph, &t.predicate);
                    self.out
                        .push_str(&format!("{indent}  <{name}{xmlns}>\n"));
                    self.node_nested(inner, depth + 2);
                    self.out.push_str(&format!("{indent}  </{name}>\n"));
                }
                None => write_property(&mut self.out, self.graph, t, depth + 1),
            }
        }
        self.out.push_str(&format!("{indent}</{element}>\n"));
    }

    fn node_nested(&mut self, triples: &[&Triple], depth: usize) {
        let indent = "  ".repeat(depth);
        self.out.push_str(&format!("{indent}<rdf:Description>\n"));
        for t in triples {
            write_property(&mut self.out, self.graph, t, depth + 1);
        }
        self.out.push_str(&format!("{indent}</rdf:Description>\n"));
    }
}

fn header(graph: &Graph) -> String {
    let mut out = String::with_capacity(graph.len() * 96);
    out.push_str("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n<rdf:RDF");
    let mut declared_rdf = false;
    for (prefix, ns) in graph.prefixes() {
        declared_rdf |= prefix == "rdf";
        out.push_str(&format!("\n   xmlns:{prefix}=\"{}\"", escape(ns)));
    }
    if !declared_rdf {
        out.push_str(&format!("\n   xmlns:rdf=\"{RDF}\""));
    }
    out.push_str(">\n");
    out
}

fn write_node(
    out: &mut String,
    graph: &Graph,
    subject: &Term,
    triples: &[&Triple],
    depth: usize,
) {
    let indent = "  ".repeat(depth);
    out.push_str(&format!("{indent}<rdf:Description{}>\n", subject_attr(subject)));
    for t in triples {
        write_property(out, graph, t, depth + 1);
    }
    out.push_str(&format!("{indent}</rdf:Description>\n"));
}

fn subject_attr(subject: &Term) -> String {
    match subject {
        Term::Iri(iri) => format!(" rdf:about=\"{}\"", escape(iri)),
        Term::Blank(id) => format!(" rdf:nodeID=\"b{id}\""),
        Term::Literal { .. } => String::new(),
    }
}

fn write_property(out: &mut String, graph: &Graph, t: &Triple, depth: usize) {
    let indent = "  ".repeat(depth);
    let (name, xmlns) = predicate_qname(graph, &t.predicate);
    match &t.object {
        Term::Iri(iri) => out.push_str(&format!(
            "{indent}<{name}{xmlns} rdf:resource=\"{}\"/>\n",
            escape(iri)
        )),
        Term::Blank(id) => {
            out.push_str(&format!("{indent}<{name}{xmlns} rdf:nodeID=\"b{id}\"/>\n"));
        }
        Term::Literal { value, kind } => {
            let attr = match kind {
                LiteralKind::Plain => String::new(),
                LiteralKind::Lang(lang) => format!(" xml:lang=\"{}\"", escape(lang)),
                LiteralKind::Typed(dt) => format!(" rdf:datatype=\"{}\"", escape(dt)),
            };
            out.push_str(&format!(
                "{indent}<{name}{xmlns}{attr}>{}</{name}>\n",
                escape(value)
            ));
        }
    }
}

/// QName for a predicate, with an inline namespace declaration when no bound
/// prefix applies.
fn predicate_qname(graph: &Graph, iri: &str) -> (String, String) {
    if let Some(name) = xml_qname(graph, iri) {
        return (name, String::new());
    }
    let split = iri.rfind(['#', '/']).map_or(0, |i| i + 1);
    let (ns, local) = iri.split_at(split);
    (
        format!("ns0:{local}"),
        format!(" xmlns:ns0=\"{}\"", escape(ns)),
    )
}

fn xml_qname(graph: &Graph, iri: &str) -> Option<String> {
    graph
        .qname(iri)
        .map(|(prefix, local)| format!("{prefix}:{local}"))
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocab::*;

    fn sample() -> Graph {
        let mut g = Graph::new();
        let class = Term::iri("https://rdf.spdx.org/v3/Core/Agent");
        g.insert(class.clone(), RDF_TYPE, Term::iri(OWL_CLASS));
        g.insert(class.clone(), RDF_TYPE, Term::iri(SH_NODE_SHAPE));
        g.insert(class.clone(), RDFS_COMMENT, Term::lang_literal("A & B", "en"));
        let shape = g.blank();
        g.insert(class, SH_PROPERTY, shape.clone());
        g.insert(shape.clone(), SH_PATH, Term::iri("https://rdf.spdx.org/v3/Core/name"));
        g.insert(shape, SH_MIN_COUNT, Term::integer(1));
        g
    }

    #[test]
    fn flat_form_uses_descriptions() {
        let xml = to_rdf_xml(&sample());
        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n<rdf:RDF"));
        assert!(xml.contains(
            "  <rdf:Description rdf:about=\"https://rdf.spdx.org/v3/Core/Agent\">\n"
        ));
        assert!(xml.contains("<rdfs:comment xml:lang=\"en\">A &amp; B</rdfs:comment>"));
        assert!(xml.contains("<sh:property rdf:nodeID=\"b0\"/>"));
        assert!(xml.contains("  <rdf:Description rdf:nodeID=\"b0\">\n"));
        assert!(xml.trim_end().ends_with("</rdf:RDF>"));
    }

    #[test]
    fn pretty_form_types_and_nests() {
        let xml = to_pretty_rdf_xml(&sample());
        assert!(xml.contains("  <owl:Class rdf:about=\"https://rdf.spdx.org/v3/Core/Agent\">\n"));
        assert!(xml.contains(
            "    <rdf:type rdf:resource=\"http://www.w3.org/ns/shacl#NodeShape\"/>\n"
        ));
        assert!(xml.contains("    <sh:property>\n      <rdf:Description>\n"));
        assert!(!xml.contains("rdf:nodeID"));
        assert!(xml.contains(
            "<sh:minCount rdf:datatype=\"http://www.w3.org/2001/XMLSchema#integer\">1</sh:minCount>"
        ));
    }

    #[test]
    fn unbound_predicate_gets_inline_namespace() {
        let mut g = Graph::new();
        g.insert(
            Term::iri("https://x/a"),
            "https://example.org/terms#note",
            Term::literal("n"),
        );
        let xml = to_rdf_xml(&g);
        assert!(xml.contains(
            "<ns0:note xmlns:ns0=\"https://example.org/terms#\">n</ns0:note>"
        ));
    }
}
