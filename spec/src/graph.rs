//! In-memory RDF statement graph.
//!
//! A [`Graph`] is a set of [`Triple`]s that remembers insertion order, so
//! every serializer walks statements in the order the builder emitted them.
//! Blank nodes are numbered per graph.

use std::collections::HashSet;
use std::fmt;

use indexmap::IndexMap;

use crate::vocab;

/// How a literal is qualified.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LiteralKind {
    /// Plain string (`xsd:string`).
    Plain,
    /// Language-tagged string.
    Lang(String),
    /// Typed literal with the datatype IRI.
    Typed(String),
}

/// An RDF term.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Term {
    /// An IRI.
    Iri(String),
    /// A blank node, numbered within its graph.
    Blank(u32),
    /// A literal value.
    Literal {
        /// Lexical form.
        value: String,
        /// Qualification.
        kind: LiteralKind,
    },
}

impl Term {
    /// An IRI term.
    pub fn iri(iri: impl Into<String>) -> Self {
        Term::Iri(iri.into())
    }

    /// A plain string literal.
    pub fn literal(value: impl Into<String>) -> Self {
        Term::Literal {
            value: value.into(),
            kind: LiteralKind::Plain,
        }
    }

    /// A language-tagged literal.
    pub fn lang_literal(value: impl Into<String>, lang: impl Into<String>) -> Self {
        Term::Literal {
            value: value.into(),
            kind: LiteralKind::Lang(lang.into()),
        }
    }

    /// An `xsd:integer` literal.
    #[must_use]
    pub fn integer(value: u32) -> Self {
        Term::Literal {
            value: value.to_string(),
            kind: LiteralKind::Typed(vocab::XSD_INTEGER.to_owned()),
        }
    }

    /// The IRI, if this is an IRI term.
    #[must_use]
    pub fn as_iri(&self) -> Option<&str> {
        match self {
            Term::Iri(iri) => Some(iri),
            _ => None,
        }
    }

    /// The lexical form, if this is a literal.
    #[must_use]
    pub fn as_literal(&self) -> Option<&str> {
        match self {
            Term::Literal { value, .. } => Some(value),
            _ => None,
        }
    }

    /// True for literals.
    #[must_use]
    pub fn is_literal(&self) -> bool {
        matches!(self, Term::Literal { .. })
    }
}

impl fmt::Display for Term {
    /// Formats the term in N-Triples syntax.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Iri(iri) => write!(f, "<{iri}>"),
            Term::Blank(id) => write!(f, "_:b{id}"),
            Term::Literal { value, kind } => {
                write!(f, "\"{}\"", escape_literal(value))?;
                match kind {
                    LiteralKind::Plain => Ok(()),
                    LiteralKind::Lang(lang) => write!(f, "@{lang}"),
                    LiteralKind::Typed(dt) => write!(f, "^^<{dt}>"),
                }
            }
        }
    }
}

/// Escapes a literal's lexical form for N-Triples and Turtle short strings.
#[must_use]
pub fn escape_literal(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c => out.push(c),
        }
    }
    out
}

/// A single statement.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Triple {
    /// Subject: an IRI or blank node.
    pub subject: Term,
    /// Predicate IRI.
    pub predicate: String,
    /// Object.
    pub object: Term,
}

/// A set of statements with prefix bindings.
#[derive(Debug, Default, Clone)]
pub struct Graph {
    triples: Vec<Triple>,
    seen: HashSet<Triple>,
    next_blank: u32,
    prefixes: Vec<(String, String)>,
}

impl Graph {
    /// Creates an empty graph with the standard prefixes bound.
    #[must_use]
    pub fn new() -> Self {
        let mut graph = Self::default();
        for (prefix, ns) in vocab::STANDARD_PREFIXES {
            graph.bind(*prefix, *ns);
        }
        graph
    }

    /// Binds a prefix, replacing any earlier binding of the same prefix.
    pub fn bind(&mut self, prefix: impl Into<String>, namespace: impl Into<String>) {
        let prefix = prefix.into();
        let namespace = namespace.into();
        match self.prefixes.iter_mut().find(|(p, _)| *p == prefix) {
            Some(binding) => binding.1 = namespace,
            None => self.prefixes.push((prefix, namespace)),
        }
    }

    /// Prefix bindings in binding order.
    #[must_use]
    pub fn prefixes(&self) -> &[(String, String)] {
        &self.prefixes
    }

    /// Allocates a fresh blank node.
    pub fn blank(&mut self) -> Term {
        let id = self.next_blank;
        self.next_blank += 1;
        Term::Blank(id)
    }

    /// Adds a statement. Returns false if it was already present.
    pub fn insert(&mut self, subject: Term, predicate: &str, object: Term) -> bool {
        debug_assert!(!subject.is_literal(), "literal subject");
        let triple = Triple {
            subject,
            predicate: predicate.to_owned(),
            object,
        };
        if self.seen.contains(&triple) {
            return false;
        }
        self.seen.insert(triple.clone());
        self.triples.push(triple);
        true
    }

    /// True if the statement is present.
    #[must_use]
    pub fn contains(&self, subject: &Term, predicate: &str, object: &Term) -> bool {
        self.seen.contains(&Triple {
            subject: subject.clone(),
            predicate: predicate.to_owned(),
            object: object.clone(),
        })
    }

    /// True if `subject rdf:type class` is present.
    #[must_use]
    pub fn has_type(&self, subject: &Term, class: &str) -> bool {
        self.contains(subject, vocab::RDF_TYPE, &Term::iri(class))
    }

    /// Statements in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Triple> {
        self.triples.iter()
    }

    /// Number of statements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.triples.len()
    }

    /// True if the graph has no statements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    /// Objects of `subject predicate ?o`, in insertion order.
    pub fn objects<'a>(
        &'a self,
        subject: &'a Term,
        predicate: &'a str,
    ) -> impl Iterator<Item = &'a Term> + 'a {
        self.triples
            .iter()
            .filter(move |t| t.subject == *subject && t.predicate == predicate)
            .map(|t| &t.object)
    }

    /// Subjects of `?s predicate object`, in insertion order.
    pub fn subjects_with<'a>(
        &'a self,
        predicate: &'a str,
        object: &'a Term,
    ) -> impl Iterator<Item = &'a Term> + 'a {
        self.triples
            .iter()
            .filter(move |t| t.predicate == predicate && t.object == *object)
            .map(|t| &t.subject)
    }

    /// Objects of every statement with the given predicate.
    pub fn objects_of<'a>(&'a self, predicate: &'a str) -> impl Iterator<Item = &'a Term> + 'a {
        self.triples
            .iter()
            .filter(move |t| t.predicate == predicate)
            .map(|t| &t.object)
    }

    /// Distinct subjects in first-seen order.
    #[must_use]
    pub fn subjects(&self) -> Vec<&Term> {
        let mut seen = HashSet::new();
        self.triples
            .iter()
            .map(|t| &t.subject)
            .filter(|s| seen.insert(*s))
            .collect()
    }

    /// Statements grouped by subject: subjects in first-seen order, each with
    /// its statements in insertion order.
    #[must_use]
    pub fn by_subject(&self) -> Vec<(&Term, Vec<&Triple>)> {
        let mut groups: IndexMap<&Term, Vec<&Triple>> = IndexMap::new();
        for t in &self.triples {
            groups.entry(&t.subject).or_default().push(t);
        }
        groups.into_iter().collect()
    }

    /// Splits an IRI into `(prefix, local)` using the longest matching
    /// binding, if the remainder is a simple local name.
    #[must_use]
    pub fn qname<'a>(&'a self, iri: &'a str) -> Option<(&'a str, &'a str)> {
        self.prefixes
            .iter()
            .filter_map(|(p, ns)| iri.strip_prefix(ns.as_str()).map(|local| (p.as_str(), ns.len(), local)))
            .filter(|(_, _, local)| is_simple_local(local))
            .max_by_key(|(_, len, _)| *len)
            .map(|(p, _, local)| (p, local))
    }
}

fn is_simple_local(local: &str) -> bool {
    let mut chars = local.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}
