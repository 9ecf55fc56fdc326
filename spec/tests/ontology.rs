//! Graph and context properties checked against the shared fixture model.

mod common;

use common::{config, fixture_model, node, shape_for, shape_paths, shapes_of};
use serde_json::json;
use spdx_ontology::serializer::{ntriples, turtle};
use spdx_ontology::vocab::*;
use spdx_ontology::{generate, Diagnostic, PropertyNature, Term};

#[test]
fn fixture_generates_without_diagnostics() {
    let generated = generate(&fixture_model(), &config()).expect("fixture builds");
    assert!(
        generated.diagnostics.is_empty(),
        "unexpected diagnostics: {:?}",
        generated.diagnostics.entries()
    );
}

#[test]
fn ontology_header_declares_version() {
    let graph = generate(&fixture_model(), &config()).expect("build").graph;
    let base = Term::iri("https://rdf.spdx.org/v3/");
    assert!(graph.has_type(&base, OWL_ONTOLOGY));
    assert!(graph.contains(&base, OWL_VERSION_IRI, &base));
    assert!(graph
        .prefixes()
        .iter()
        .any(|(p, ns)| p == "spdxs" && ns == SPDXS));
}

#[test]
fn identifying_properties_never_surface() {
    let model = fixture_model();
    let graph = generate(&model, &config()).expect("build").graph;
    for prop in model.properties().values() {
        let subject = Term::iri(prop.iri.as_str());
        let is_path = graph.objects_of(SH_PATH).any(|p| *p == subject);
        let declared = graph.has_type(&subject, RDF_PROPERTY);
        let has_range = graph.objects(&subject, RDFS_RANGE).next().is_some();
        if prop.nature == PropertyNature::IdProperty {
            assert!(!is_path, "{} used as a shape path", prop.iri);
            assert!(!declared, "{} declared", prop.iri);
            assert!(!has_range, "{} has a range", prop.iri);
        } else {
            assert!(declared, "{} not declared", prop.iri);
        }
    }
}

#[test]
fn one_shape_per_non_identifying_property_in_order() {
    let graph = generate(&fixture_model(), &config()).expect("build").graph;
    let element = node("Core", "Element");
    assert!(graph.has_type(&element, SH_NODE_SHAPE));
    assert_eq!(
        shape_paths(&graph, &element),
        [
            "https://rdf.spdx.org/v3/Core/name",
            "https://rdf.spdx.org/v3/Core/createdBy",
        ]
    );

    let package = node("Software", "Package");
    assert_eq!(shapes_of(&graph, &package).len(), 3);
}

#[test]
fn class_with_only_identifying_property_is_not_a_shape() {
    let graph = generate(&fixture_model(), &config()).expect("build").graph;
    let ext = node("Core", "ExternalIdentifier");
    assert!(graph.has_type(&ext, OWL_CLASS));
    assert!(!graph.has_type(&ext, SH_NODE_SHAPE));
    assert!(shapes_of(&graph, &ext).is_empty());
    assert!(graph.contains(&ext, SPDXS_ID_PROPERTY_NAME, &Term::literal("identifier")));
}

#[test]
fn cardinality_constraints_follow_declared_bounds() {
    let graph = generate(&fixture_model(), &config()).expect("build").graph;
    let element = node("Core", "Element");

    let name = shape_for(&graph, &element, &node("Core", "name"));
    assert_eq!(graph.objects(name, SH_MIN_COUNT).count(), 0);
    assert_eq!(
        graph.objects(name, SH_MAX_COUNT).collect::<Vec<_>>(),
        [&Term::integer(1)]
    );

    let created_by = shape_for(&graph, &element, &node("Core", "createdBy"));
    assert_eq!(
        graph.objects(created_by, SH_MIN_COUNT).collect::<Vec<_>>(),
        [&Term::integer(1)]
    );
    assert_eq!(graph.objects(created_by, SH_MAX_COUNT).count(), 0);

    let artifact = node("Core", "Artifact");
    let supplied_by = shape_for(&graph, &artifact, &node("Core", "suppliedBy"));
    assert_eq!(graph.objects(supplied_by, SH_MIN_COUNT).count(), 0);
    assert_eq!(graph.objects(supplied_by, SH_MAX_COUNT).count(), 0);
}

#[test]
fn shape_constraints_follow_range_kind() {
    let graph = generate(&fixture_model(), &config()).expect("build").graph;
    let element = node("Core", "Element");
    let package = node("Software", "Package");

    let created_by = shape_for(&graph, &element, &node("Core", "createdBy"));
    assert!(graph.contains(created_by, SH_CLASS, &node("Core", "Agent")));

    let purpose = shape_for(&graph, &package, &node("Software", "primaryPurpose"));
    assert!(graph.contains(purpose, SH_CLASS, &node("Software", "SoftwarePurpose")));

    let version = shape_for(&graph, &package, &node("Software", "packageVersion"));
    assert!(graph.contains(version, SH_DATATYPE, &Term::iri(XSD_STRING)));
    let pattern = graph
        .objects(version, SH_PATTERN)
        .next()
        .and_then(Term::as_literal)
        .expect("pattern emitted");
    assert!(pattern.starts_with("^(0|[1-9]\\d*)"));

    let url = shape_for(&graph, &package, &node("Software", "packageUrl"));
    assert!(graph.contains(url, SH_DATATYPE, &Term::iri(format!("{XSD}anyURI"))));
    assert_eq!(graph.objects(url, SH_CLASS).count(), 0);
}

#[test]
fn property_ranges_resolve_through_datatypes() {
    let graph = generate(&fixture_model(), &config()).expect("build").graph;
    let version = node("Software", "packageVersion");
    assert!(graph.has_type(&version, OWL_DATATYPE_PROPERTY));
    assert!(graph.contains(&version, RDFS_RANGE, &Term::iri(XSD_STRING)));

    let created_by = node("Core", "createdBy");
    assert!(graph.has_type(&created_by, OWL_OBJECT_PROPERTY));
    assert!(graph.contains(&created_by, RDFS_RANGE, &node("Core", "Agent")));
}

#[test]
fn inherited_facts_are_annotated() {
    let graph = generate(&fixture_model(), &config()).expect("build").graph;
    let package = node("Software", "Package");
    assert!(graph.contains(&package, RDFS_SUBCLASS_OF, &node("Core", "Artifact")));
    assert!(graph.contains(&package, SPDXS_REFERENCEABLE, &Term::literal("yes")));
    assert!(graph.contains(&package, SPDXS_ID_PROPERTY_NAME, &Term::literal("spdxId")));

    let hash = node("Core", "Hash");
    assert!(graph.contains(&hash, SPDXS_REFERENCEABLE, &Term::literal("no")));
    assert_eq!(graph.objects(&hash, SPDXS_ID_PROPERTY_NAME).count(), 0);
}

#[test]
fn context_maps_terms_by_kind() {
    let context = generate(&fixture_model(), &config()).expect("build").context;
    assert_eq!(context.get("spdx"), Some(&json!("https://rdf.spdx.org/v3/")));
    assert_eq!(context.get("type"), Some(&json!("@type")));
    assert_eq!(context.get("spdxId"), Some(&json!("@id")));
    assert_eq!(context.get("identifier"), Some(&json!("@id")));
    assert_eq!(
        context.get("createdBy"),
        Some(&json!({
            "@id": "https://rdf.spdx.org/v3/Core/createdBy",
            "@type": "@id",
        }))
    );
    assert_eq!(
        context.get("algorithm"),
        Some(&json!({
            "@id": "https://rdf.spdx.org/v3/Core/algorithm",
            "@type": "@vocab",
            "@context": { "@vocab": "https://rdf.spdx.org/v3/Core/HashAlgorithm/" },
        }))
    );
    assert_eq!(
        context.get("software_packageUrl"),
        Some(&json!("https://rdf.spdx.org/v3/Software/packageUrl"))
    );
    assert_eq!(
        context.get("software_Package"),
        Some(&json!("https://rdf.spdx.org/v3/Software/Package"))
    );
    assert!(context.get("sha256").is_none());
    assert!(context.get("NoAssertionElement").is_none());
}

#[test]
fn context_serialization_is_byte_identical() {
    let model = fixture_model();
    let a = generate(&model, &config()).expect("build");
    let b = generate(&model, &config()).expect("build");
    let first = a.context.to_string_pretty().expect("encode");
    assert_eq!(first, b.context.to_string_pretty().expect("encode"));

    let rederived =
        spdx_ontology::derive_context(&a.graph, &config(), &mut spdx_ontology::Diagnostics::new());
    assert_eq!(first, rederived.to_string_pretty().expect("encode"));

    let keys: Vec<&String> = a.context.terms().keys().collect();
    let mut sorted = keys.clone();
    sorted.sort();
    assert_eq!(keys, sorted);
}

#[test]
fn serializations_carry_every_statement() {
    let graph = generate(&fixture_model(), &config()).expect("build").graph;
    let nt = ntriples::to_ntriples(&graph);
    assert_eq!(nt.lines().count(), graph.len());

    let ttl = turtle::to_turtle(&graph);
    for (prefix, ns) in graph.prefixes() {
        assert!(ttl.contains(&format!("<{ns}>")), "missing @prefix {prefix}");
    }
}

#[test]
fn colliding_keys_keep_first_sorted_subject() {
    let mut model = spdx_ontology::Model::new(vec![
        spdx_ontology::Namespace::new("Software"),
        spdx_ontology::Namespace::new("SOFTWARE"),
    ]);
    let config = config();
    for ns in ["Software", "SOFTWARE"] {
        model
            .insert_property(spdx_ontology::Property::new(
                ns,
                "purl",
                config.entity_iri(ns, "purl"),
                PropertyNature::DataProperty,
                "xsd:anyURI",
            ))
            .expect("insert");
    }
    let generated = generate(&model, &config).expect("build");
    assert_eq!(
        generated.context.get("software_purl"),
        Some(&json!("https://rdf.spdx.org/v3/SOFTWARE/purl"))
    );
    assert_eq!(generated.diagnostics.len(), 1);
    assert!(matches!(
        &generated.diagnostics.entries()[0],
        Diagnostic::DuplicateContextKey { key, subject, .. }
            if key == "software_purl" && subject == "https://rdf.spdx.org/v3/Software/purl"
    ));
}
