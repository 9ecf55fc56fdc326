//! Writes the serialized ontology and its context to a directory.

use std::fs;
use std::path::{Path, PathBuf};

use crate::context::Context;
use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::serializer::{dot, jsonld, ntriples, rdfxml, turtle};

/// Base name shared by every graph serialization.
pub const ONTOLOGY_STEM: &str = "ontology.rdf";

/// File name of the context document.
pub const CONTEXT_FILE: &str = "context.jsonld";

/// A graph serialization format and its file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Flat RDF/XML.
    RdfXml,
    /// Turtle.
    Turtle,
    /// RDF/XML with typed nodes and nested shapes.
    PrettyRdfXml,
    /// JSON-LD.
    JsonLd,
    /// N-Triples.
    NTriples,
    /// Graphviz DOT.
    Dot,
}

impl Format {
    /// Every format, in write order.
    pub const ALL: [Format; 6] = [
        Format::RdfXml,
        Format::Turtle,
        Format::PrettyRdfXml,
        Format::JsonLd,
        Format::NTriples,
        Format::Dot,
    ];

    /// File extension appended to [`ONTOLOGY_STEM`].
    #[must_use]
    pub fn extension(self) -> &'static str {
        match self {
            Format::RdfXml => "xml",
            Format::Turtle => "ttl",
            Format::PrettyRdfXml => "pretty-xml",
            Format::JsonLd => "json-ld",
            Format::NTriples => "nt",
            Format::Dot => "dot",
        }
    }

    /// File name of this format's artifact.
    #[must_use]
    pub fn file_name(self) -> String {
        format!("{ONTOLOGY_STEM}.{}", self.extension())
    }

    /// Serializes the graph in this format.
    ///
    /// # Errors
    ///
    /// Returns an error only if JSON encoding fails.
    pub fn render(self, graph: &Graph) -> Result<String> {
        Ok(match self {
            Format::RdfXml => rdfxml::to_rdf_xml(graph),
            Format::Turtle => turtle::to_turtle(graph),
            Format::PrettyRdfXml => rdfxml::to_pretty_rdf_xml(graph),
            Format::JsonLd => serde_json::to_string_pretty(&jsonld::to_json_ld(graph))?,
            Format::NTriples => ntriples::to_ntriples(graph),
            Format::Dot => dot::to_dot(graph),
        })
    }
}

/// Writes every graph serialization plus the context document into `dir`,
/// creating it if needed. Returns the written paths in write order.
///
/// # Errors
///
/// Returns [`Error::Io`] naming the path that could not be created or
/// written, or [`Error::Json`] if encoding fails.
pub fn write_artifacts(graph: &Graph, context: &Context, dir: &Path) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(dir).map_err(|e| Error::io(dir, e))?;

    let mut written = Vec::with_capacity(Format::ALL.len() + 1);
    for format in Format::ALL {
        let path = dir.join(format.file_name());
        write(&path, &format.render(graph)?)?;
        written.push(path);
    }

    let path = dir.join(CONTEXT_FILE);
    let mut body = context.to_string_pretty()?;
    body.push('\n');
    write(&path, &body)?;
    written.push(path);

    tracing::info!(dir = %dir.display(), files = written.len(), "artifacts written");
    Ok(written)
}

fn write(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|e| Error::io(path, e))?;
    tracing::debug!(path = %path.display(), bytes = content.len(), "wrote artifact");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OntologyConfig;
    use crate::context::derive_context;
    use crate::diagnostics::Diagnostics;
    use crate::graph::Term;
    use crate::vocab::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("spdx-ontology-{name}-{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn file_names_follow_extensions() {
        let names: Vec<String> = Format::ALL.iter().map(|f| f.file_name()).collect();
        assert_eq!(
            names,
            [
                "ontology.rdf.xml",
                "ontology.rdf.ttl",
                "ontology.rdf.pretty-xml",
                "ontology.rdf.json-ld",
                "ontology.rdf.nt",
                "ontology.rdf.dot",
            ]
        );
    }

    #[test]
    fn writes_all_artifacts() {
        let mut graph = Graph::new();
        graph.insert(
            Term::iri("https://rdf.spdx.org/v3/Core/Agent"),
            RDF_TYPE,
            Term::iri(OWL_CLASS),
        );
        let context = derive_context(&graph, &OntologyConfig::default(), &mut Diagnostics::new());
        let dir = scratch_dir("sink").join("nested");

        let written = write_artifacts(&graph, &context, &dir).expect("write artifacts");
        assert_eq!(written.len(), 7);
        assert!(written.iter().all(|p| p.is_file()));
        let ctx = fs::read_to_string(dir.join(CONTEXT_FILE)).expect("read context");
        assert!(ctx.starts_with("{\n  \"@context\": {\n"));
        assert!(ctx.ends_with("}\n"));

        let _ = fs::remove_dir_all(scratch_dir("sink"));
    }

    #[test]
    fn unwritable_dir_reports_path() {
        let blocker = scratch_dir("blocker");
        fs::write(&blocker, "file, not a directory").expect("create blocker file");
        let err = write_artifacts(
            &Graph::new(),
            &derive_context(&Graph::new(), &OntologyConfig::default(), &mut Diagnostics::new()),
            &blocker.join("out"),
        )
        .expect_err("directory under a file cannot be created");
        assert!(matches!(err, Error::Io { .. }));
        let _ = fs::remove_file(&blocker);
    }
}
