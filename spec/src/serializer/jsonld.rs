//! JSON-LD 1.1 serializer.
//!
//! Produces a single document with an `@context` holding the graph's prefix
//! bindings and an `@graph` array with one node object per subject, in
//! first-seen order. Predicates are written as compact IRIs where a prefix
//! applies; a predicate repeated on a subject is promoted to an array.

use serde_json::{json, Map, Value};

use crate::graph::{Graph, LiteralKind, Term};
use crate::vocab::RDF_TYPE;

/// Serializes the graph to a JSON-LD `Value`.
///
/// The returned value can be pretty-printed with [`serde_json::to_string_pretty`].
#[must_use]
pub fn to_json_ld(graph: &Graph) -> Value {
    let mut context = Map::new();
    for (prefix, ns) in graph.prefixes() {
        context.insert(prefix.clone(), json!(ns));
    }

    let nodes: Vec<Value> = graph
        .by_subject()
        .into_iter()
        .map(|(subject, triples)| {
            let mut node = Map::new();
            node.insert("@id".to_owned(), json!(node_id(subject)));
            for t in triples {
                let (key, value) = if t.predicate == RDF_TYPE {
                    let type_ = match &t.object {
                        Term::Iri(iri) => compact(graph, iri),
                        other => node_id(other),
                    };
                    ("@type".to_owned(), json!(type_))
                } else {
                    (compact(graph, &t.predicate), object_value(graph, &t.object))
                };
                push_value(&mut node, key, value);
            }
            Value::Object(node)
        })
        .collect();

    json!({
        "@context": context,
        "@graph": nodes
    })
}

fn node_id(term: &Term) -> String {
    match term {
        Term::Iri(iri) => iri.clone(),
        Term::Blank(id) => format!("_:b{id}"),
        Term::Literal { value, .. } => value.clone(),
    }
}

fn compact(graph: &Graph, iri: &str) -> String {
    match graph.qname(iri) {
        Some((prefix, local)) => format!("{prefix}:{local}"),
        None => iri.to_owned(),
    }
}

fn object_value(graph: &Graph, term: &Term) -> Value {
    match term {
        Term::Iri(_) | Term::Blank(_) => json!({ "@id": node_id(term) }),
        Term::Literal { value, kind } => match kind {
            LiteralKind::Plain => json!({ "@value": value }),
            LiteralKind::Lang(lang) => json!({ "@value": value, "@language": lang }),
            LiteralKind::Typed(dt) => json!({ "@value": value, "@type": compact(graph, dt) }),
        },
    }
}

/// Inserts a value, promoting to an array when the key is already present.
fn push_value(node: &mut Map<String, Value>, key: String, value: Value) {
    if let Some(existing) = node.get_mut(&key) {
        let prev = std::mem::replace(existing, Value::Null);
        *existing = match prev {
            Value::Array(mut arr) => {
                arr.push(value);
                Value::Array(arr)
            }
            other => json!([other, value]),
        };
    } else {
        node.insert(key, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocab::*;

    fn sample() -> Graph {
        let mut g = Graph::new();
        let class = Term::iri("https://rdf.spdx.org/v3/Core/Agent");
        g.insert(class.clone(), RDF_TYPE, Term::iri(RDFS_CLASS));
        g.insert(class.clone(), RDF_TYPE, Term::iri(OWL_CLASS));
        g.insert(class.clone(), RDFS_COMMENT, Term::lang_literal("An agent.", "en"));
        let shape = g.blank();
        g.insert(class, SH_PROPERTY, shape.clone());
        g.insert(shape, SH_MIN_COUNT, Term::integer(1));
        g
    }

    #[test]
    fn produces_context_and_graph() {
        let json = to_json_ld(&sample());
        assert!(json["@context"].is_object());
        assert_eq!(json["@context"]["owl"], json!(OWL));
        assert!(json["@graph"].is_array());
    }

    #[test]
    fn repeated_types_become_an_array() {
        let json = to_json_ld(&sample());
        let agent = &json["@graph"][0];
        assert_eq!(agent["@id"], json!("https://rdf.spdx.org/v3/Core/Agent"));
        assert_eq!(agent["@type"], json!(["rdfs:Class", "owl:Class"]));
        assert_eq!(
            agent["rdfs:comment"],
            json!({ "@value": "An agent.", "@language": "en" })
        );
        assert_eq!(agent["sh:property"], json!({ "@id": "_:b0" }));
    }

    #[test]
    fn typed_literals_keep_datatype() {
        let json = to_json_ld(&sample());
        assert_eq!(
            json["@graph"][1]["sh:minCount"],
            json!({ "@value": "1", "@type": "xsd:integer" })
        );
    }

    #[test]
    fn all_nodes_have_ids() {
        let json = to_json_ld(&sample());
        let graph = json["@graph"].as_array().expect("@graph must be array");
        for (i, node) in graph.iter().enumerate() {
            assert!(!node["@id"].is_null(), "Node at index {i} is missing @id");
        }
    }
}
