//! Ontology graph builder.
//!
//! Projects a [`Model`] into OWL/RDFS declarations and SHACL node shapes:
//!
//! - classes become `rdfs:Class`/`owl:Class`, annotated with the inherited
//!   `spdxs:referenceable` and `spdxs:idPropertyName` facts, and become
//!   `sh:NodeShape`s with one property shape per non-identifying property;
//! - non-identifying properties become `rdf:Property` plus
//!   `owl:ObjectProperty` or `owl:DatatypeProperty` with an `rdfs:range`;
//! - vocabularies become classes whose entries are named individuals;
//! - individuals become named individuals, linked with `owl:sameAs` to their
//!   external identifier when they carry one.
//!
//! Identifying properties never appear as declarations or shapes.

use crate::config::OntologyConfig;
use crate::diagnostics::Diagnostics;
use crate::error::ModelError;
use crate::graph::{Graph, Term};
use crate::inheritance;
use crate::model::{Class, ClassProperty, MaxCount, Model, Property, PropertyNature, TypeRef};
use crate::resolve::{self, Reference};
use crate::vocab::*;
use crate::xsd::xsd_range;

/// Builds the ontology graph for a model.
///
/// Recoverable conditions (unknown primitive range prefixes) are recorded in
/// `diagnostics` and the affected constraint is omitted.
///
/// # Errors
///
/// Returns a [`ModelError`] if the model violates an invariant: an inheritance
/// cycle, a malformed reference, or a reference absent from its lookup.
pub fn build(
    model: &Model,
    config: &OntologyConfig,
    diagnostics: &mut Diagnostics,
) -> Result<Graph, ModelError> {
    let mut builder = OntologyBuilder {
        model,
        config,
        graph: Graph::new(),
        diagnostics,
    };
    builder.add_header();
    builder.add_classes()?;
    builder.add_properties()?;
    builder.add_vocabularies();
    builder.add_individuals()?;

    tracing::debug!(triples = builder.graph.len(), "ontology graph built");
    Ok(builder.graph)
}

struct OntologyBuilder<'a> {
    model: &'a Model,
    config: &'a OntologyConfig,
    graph: Graph,
    diagnostics: &'a mut Diagnostics,
}

impl<'a> OntologyBuilder<'a> {
    fn add_header(&mut self) {
        self.graph.bind(self.config.prefix.as_str(), self.config.base_iri.as_str());
        self.graph.bind(self.config.schema_prefix.as_str(), SPDXS);

        let node = Term::iri(self.config.base_iri.as_str());
        self.graph.insert(node.clone(), RDF_TYPE, Term::iri(OWL_ONTOLOGY));
        self.graph.insert(node.clone(), OWL_VERSION_IRI, node);
    }

    fn comment(&mut self, node: &Term, summary: Option<&str>) {
        if let Some(summary) = summary {
            self.graph.insert(
                node.clone(),
                RDFS_COMMENT,
                Term::lang_literal(summary, self.config.comment_language.as_str()),
            );
        }
    }

    fn add_classes(&mut self) -> Result<(), ModelError> {
        let model = self.model;
        for class in model.classes().values() {
            let node = Term::iri(class.iri.as_str());
            self.graph.insert(node.clone(), RDF_TYPE, Term::iri(RDFS_CLASS));
            self.graph.insert(node.clone(), RDF_TYPE, Term::iri(OWL_CLASS));
            self.comment(&node, class.summary.as_deref());
            if let Some(parent) = model.parent_of(class)? {
                self.graph
                    .insert(node.clone(), RDFS_SUBCLASS_OF, Term::iri(parent.iri.as_str()));
            }

            let inherited = inheritance::resolve(class, model, self.config)?;
            self.graph.insert(
                node.clone(),
                SPDXS_REFERENCEABLE,
                Term::literal(inherited.referenceable.as_str()),
            );
            if let Some(id_name) = inherited.id_property_name {
                self.graph
                    .insert(node.clone(), SPDXS_ID_PROPERTY_NAME, Term::literal(id_name));
            }

            self.add_shape(class, &node)?;
        }
        Ok(())
    }

    fn add_shape(&mut self, class: &Class, node: &Term) -> Result<(), ModelError> {
        let mut slots = Vec::new();
        for slot in class.properties.values() {
            let prop = self.property(&slot.fqname, &class.ns, &class.fqname())?;
            if prop.nature != PropertyNature::IdProperty {
                slots.push((slot, prop));
            }
        }
        if slots.is_empty() {
            return Ok(());
        }

        self.graph.insert(node.clone(), RDF_TYPE, Term::iri(SH_NODE_SHAPE));
        for (slot, prop) in slots {
            let shape = self.graph.blank();
            self.graph.insert(node.clone(), SH_PROPERTY, shape.clone());
            self.add_property_shape(&shape, slot, prop)?;
        }
        Ok(())
    }

    fn add_property_shape(
        &mut self,
        shape: &Term,
        slot: &ClassProperty,
        prop: &Property,
    ) -> Result<(), ModelError> {
        self.graph
            .insert(shape.clone(), SH_PATH, Term::iri(prop.iri.as_str()));

        match resolve::classify(&prop.range, &prop.ns)? {
            Reference::Primitive(range) => {
                if let Some(dt) = xsd_range(range, &prop.iri, self.diagnostics) {
                    self.graph.insert(shape.clone(), SH_DATATYPE, Term::iri(dt));
                }
            }
            Reference::Named(key) => match self.type_named(&key, &prop.fqname())? {
                TypeRef::Class(c) => {
                    self.graph
                        .insert(shape.clone(), SH_CLASS, Term::iri(c.iri.as_str()));
                }
                TypeRef::Vocabulary(v) => {
                    self.graph
                        .insert(shape.clone(), SH_CLASS, Term::iri(v.iri.as_str()));
                }
                TypeRef::Datatype(d) => {
                    if let Some(pattern) = d.pattern() {
                        self.graph
                            .insert(shape.clone(), SH_PATTERN, Term::literal(pattern));
                    }
                    if let Some(dt) = xsd_range(&d.subclass_of, &prop.iri, self.diagnostics) {
                        self.graph.insert(shape.clone(), SH_DATATYPE, Term::iri(dt));
                    }
                }
            },
        }

        if slot.min_count != 0 {
            self.graph
                .insert(shape.clone(), SH_MIN_COUNT, Term::integer(slot.min_count));
        }
        if let MaxCount::Bounded(max) = slot.max_count {
            self.graph
                .insert(shape.clone(), SH_MAX_COUNT, Term::integer(max));
        }
        Ok(())
    }

    fn add_properties(&mut self) -> Result<(), ModelError> {
        let model = self.model;
        for prop in model.properties().values() {
            let type_iri = match prop.nature {
                PropertyNature::IdProperty => continue,
                PropertyNature::ObjectProperty => OWL_OBJECT_PROPERTY,
                PropertyNature::DataProperty => OWL_DATATYPE_PROPERTY,
            };
            let node = Term::iri(prop.iri.as_str());
            self.graph.insert(node.clone(), RDF_TYPE, Term::iri(RDF_PROPERTY));
            self.comment(&node, prop.summary.as_deref());
            self.graph.insert(node.clone(), RDF_TYPE, Term::iri(type_iri));

            let range = match resolve::classify(&prop.range, &prop.ns)? {
                Reference::Primitive(range) => xsd_range(range, &prop.iri, self.diagnostics),
                Reference::Named(key) => match self.type_named(&key, &prop.fqname())? {
                    TypeRef::Datatype(d) => xsd_range(&d.subclass_of, &prop.iri, self.diagnostics),
                    other => Some(other.iri().to_owned()),
                },
            };
            if let Some(range) = range {
                self.graph.insert(node, RDFS_RANGE, Term::iri(range));
            }
        }
        Ok(())
    }

    fn add_vocabularies(&mut self) {
        let model = self.model;
        for vocab in model.vocabularies().values() {
            let node = Term::iri(vocab.iri.as_str());
            self.graph.insert(node.clone(), RDF_TYPE, Term::iri(RDFS_CLASS));
            self.graph.insert(node.clone(), RDF_TYPE, Term::iri(OWL_CLASS));
            self.comment(&node, vocab.summary.as_deref());
            for (label, description) in &vocab.entries {
                let entry = Term::iri(vocab.entry_iri(label));
                self.graph
                    .insert(entry.clone(), RDF_TYPE, Term::iri(OWL_NAMED_INDIVIDUAL));
                self.graph.insert(entry.clone(), RDF_TYPE, node.clone());
                self.graph
                    .insert(entry.clone(), RDFS_LABEL, Term::literal(label.as_str()));
                self.comment(&entry, Some(description));
            }
        }
    }

    fn add_individuals(&mut self) -> Result<(), ModelError> {
        let model = self.model;
        for ind in model.individuals().values() {
            let node = Term::iri(ind.iri.as_str());
            self.graph
                .insert(node.clone(), RDF_TYPE, Term::iri(OWL_NAMED_INDIVIDUAL));
            self.comment(&node, ind.summary.as_deref());
            let key = resolve::qualify(&ind.type_, &ind.ns)?;
            let type_iri = self.type_named(&key, &ind.fqname())?.iri().to_owned();
            self.graph.insert(node.clone(), RDFS_RANGE, Term::iri(type_iri));
            if let Some(custom) = ind.custom_iri.as_deref() {
                self.graph.insert(node, OWL_SAME_AS, Term::iri(custom));
            }
        }
        Ok(())
    }

    fn property(&self, reference: &str, ns: &str, from: &str) -> Result<&'a Property, ModelError> {
        let key = resolve::qualify(reference, ns)?;
        let model: &'a Model = self.model;
        model
            .properties()
            .get(&key)
            .ok_or_else(|| ModelError::UnresolvedReference {
                kind: "property",
                fqname: key,
                from: from.to_owned(),
            })
    }

    fn type_named(&self, key: &str, from: &str) -> Result<TypeRef<'a>, ModelError> {
        let model: &'a Model = self.model;
        model
            .type_named(key)
            .ok_or_else(|| ModelError::UnresolvedReference {
                kind: "type",
                fqname: key.to_owned(),
                from: from.to_owned(),
            })
    }
}
