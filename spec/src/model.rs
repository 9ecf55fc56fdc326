//! Schema model types.
//!
//! These are the read-only inputs to the graph builder: namespaces, classes,
//! properties, vocabularies, datatypes and named individuals, each keyed by
//! its fully-qualified name (`/Namespace/Name`). Metadata that the schema
//! source carries as free-form keys (`SubclassOf`, `Referenceable`, `Nature`,
//! `Range`, `IRI`) is decoded into typed fields here.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::config::OntologyConfig;
use crate::error::{Error, ModelError, Result};
use crate::{inheritance, resolve};

/// Builds the fully-qualified name `/ns/name`.
#[must_use]
pub fn fqname(ns: &str, name: &str) -> String {
    format!("/{ns}/{name}")
}

/// A schema namespace (e.g. `Core`, `Software`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Namespace {
    /// Namespace name as it appears in identifiers.
    pub name: String,
}

impl Namespace {
    /// Creates a namespace.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Whether instances of a class may be referenced by identifier alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Referenceable {
    /// Instances must be referenceable.
    Yes,
    /// Instances must not be referenceable.
    No,
    /// Either way.
    Optional,
}

impl Referenceable {
    /// Returns the literal value used for the `referenceable` annotation.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Referenceable::Yes => "yes",
            Referenceable::No => "no",
            Referenceable::Optional => "optional",
        }
    }
}

/// The role a property plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PropertyNature {
    /// The natural key of instances; never emitted as a declaration or shape.
    IdProperty,
    /// Relates two resources (`owl:ObjectProperty`).
    ObjectProperty,
    /// Relates a resource to a literal (`owl:DatatypeProperty`).
    DataProperty,
}

/// Upper bound of a class property's cardinality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MaxCount {
    /// At most this many values.
    Bounded(u32),
    /// The `*` marker: no upper bound.
    #[default]
    Unbounded,
}

impl Serialize for MaxCount {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            MaxCount::Bounded(n) => serializer.serialize_u32(*n),
            MaxCount::Unbounded => serializer.serialize_str("*"),
        }
    }
}

impl<'de> Deserialize<'de> for MaxCount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct MaxCountVisitor;

        impl serde::de::Visitor<'_> for MaxCountVisitor {
            type Value = MaxCount;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a non-negative integer or \"*\"")
            }

            fn visit_u64<E: serde::de::Error>(self, v: u64) -> std::result::Result<MaxCount, E> {
                u32::try_from(v)
                    .map(MaxCount::Bounded)
                    .map_err(|_| E::custom(format!("maxCount {v} out of range")))
            }

            fn visit_i64<E: serde::de::Error>(self, v: i64) -> std::result::Result<MaxCount, E> {
                u32::try_from(v)
                    .map(MaxCount::Bounded)
                    .map_err(|_| E::custom(format!("maxCount {v} out of range")))
            }

            fn visit_str<E: serde::de::Error>(self, v: &str) -> std::result::Result<MaxCount, E> {
                if v == "*" {
                    return Ok(MaxCount::Unbounded);
                }
                v.parse::<u32>()
                    .map(MaxCount::Bounded)
                    .map_err(|_| E::custom(format!("invalid maxCount `{v}`")))
            }
        }

        deserializer.deserialize_any(MaxCountVisitor)
    }
}

/// A property slot declared on a class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassProperty {
    /// Fully-qualified name of the property.
    pub fqname: String,
    /// Minimum number of values; `0` means optional.
    #[serde(rename = "minCount", default)]
    pub min_count: u32,
    /// Maximum number of values.
    #[serde(rename = "maxCount", default)]
    pub max_count: MaxCount,
}

/// A schema class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Class {
    /// Local name.
    pub name: String,
    /// Owning namespace.
    pub ns: String,
    /// Canonical identifier.
    #[serde(default)]
    pub iri: String,
    /// Short description.
    #[serde(default)]
    pub summary: Option<String>,
    /// Reference to the single parent class.
    #[serde(rename = "SubclassOf", default)]
    pub subclass_of: Option<String>,
    /// Declared referenceability; inherited when absent.
    #[serde(rename = "Referenceable", default)]
    pub referenceable: Option<Referenceable>,
    /// Declared properties keyed by local name, in declaration order.
    #[serde(default)]
    pub properties: IndexMap<String, ClassProperty>,
}

impl Class {
    /// Creates a class with no parent, summary or properties.
    pub fn new(ns: impl Into<String>, name: impl Into<String>, iri: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ns: ns.into(),
            iri: iri.into(),
            summary: None,
            subclass_of: None,
            referenceable: None,
            properties: IndexMap::new(),
        }
    }

    /// Sets the summary.
    #[must_use]
    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    /// Sets the parent reference.
    #[must_use]
    pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
        self.subclass_of = Some(parent.into());
        self
    }

    /// Sets the declared referenceability.
    #[must_use]
    pub fn with_referenceable(mut self, referenceable: Referenceable) -> Self {
        self.referenceable = Some(referenceable);
        self
    }

    /// Appends a property slot.
    #[must_use]
    pub fn with_property(
        mut self,
        local: impl Into<String>,
        fqname: impl Into<String>,
        min_count: u32,
        max_count: MaxCount,
    ) -> Self {
        self.properties.insert(
            local.into(),
            ClassProperty {
                fqname: fqname.into(),
                min_count,
                max_count,
            },
        );
        self
    }

    /// Fully-qualified name.
    #[must_use]
    pub fn fqname(&self) -> String {
        fqname(&self.ns, &self.name)
    }
}

/// A schema property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
    /// Local name.
    pub name: String,
    /// Owning namespace.
    pub ns: String,
    /// Canonical identifier.
    #[serde(default)]
    pub iri: String,
    /// Short description.
    #[serde(default)]
    pub summary: Option<String>,
    /// Role of the property.
    #[serde(rename = "Nature")]
    pub nature: PropertyNature,
    /// Type reference: `xsd:*` primitive or class/datatype/vocabulary name.
    #[serde(rename = "Range")]
    pub range: String,
}

impl Property {
    /// Creates a property.
    pub fn new(
        ns: impl Into<String>,
        name: impl Into<String>,
        iri: impl Into<String>,
        nature: PropertyNature,
        range: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            ns: ns.into(),
            iri: iri.into(),
            summary: None,
            nature,
            range: range.into(),
        }
    }

    /// Sets the summary.
    #[must_use]
    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    /// Fully-qualified name.
    #[must_use]
    pub fn fqname(&self) -> String {
        fqname(&self.ns, &self.name)
    }
}

/// A controlled vocabulary: a closed set of named terms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vocabulary {
    /// Local name.
    pub name: String,
    /// Owning namespace.
    pub ns: String,
    /// Canonical identifier.
    #[serde(default)]
    pub iri: String,
    /// Short description.
    #[serde(default)]
    pub summary: Option<String>,
    /// Entry label to description, in declaration order.
    #[serde(default)]
    pub entries: IndexMap<String, String>,
}

impl Vocabulary {
    /// Creates an empty vocabulary.
    pub fn new(ns: impl Into<String>, name: impl Into<String>, iri: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ns: ns.into(),
            iri: iri.into(),
            summary: None,
            entries: IndexMap::new(),
        }
    }

    /// Sets the summary.
    #[must_use]
    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    /// Appends an entry.
    #[must_use]
    pub fn with_entry(mut self, label: impl Into<String>, description: impl Into<String>) -> Self {
        self.entries.insert(label.into(), description.into());
        self
    }

    /// Fully-qualified name.
    #[must_use]
    pub fn fqname(&self) -> String {
        fqname(&self.ns, &self.name)
    }

    /// Identifier of an entry: the vocabulary IRI extended with `/<label>`.
    #[must_use]
    pub fn entry_iri(&self, label: &str) -> String {
        format!("{}/{label}", self.iri)
    }
}

/// A datatype wrapping a primitive, optionally restricted by a pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Datatype {
    /// Local name.
    pub name: String,
    /// Owning namespace.
    pub ns: String,
    /// Canonical identifier.
    #[serde(default)]
    pub iri: String,
    /// Short description.
    #[serde(default)]
    pub summary: Option<String>,
    /// The wrapped primitive range (e.g. `xsd:string`).
    #[serde(rename = "SubclassOf")]
    pub subclass_of: String,
    /// Lexical format facets; `pattern` is the one the builder reads.
    #[serde(default)]
    pub format: IndexMap<String, String>,
}

impl Datatype {
    /// Creates a datatype over a primitive range.
    pub fn new(
        ns: impl Into<String>,
        name: impl Into<String>,
        iri: impl Into<String>,
        subclass_of: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            ns: ns.into(),
            iri: iri.into(),
            summary: None,
            subclass_of: subclass_of.into(),
            format: IndexMap::new(),
        }
    }

    /// Sets the lexical pattern.
    #[must_use]
    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.format.insert("pattern".to_owned(), pattern.into());
        self
    }

    /// The lexical pattern, if declared.
    #[must_use]
    pub fn pattern(&self) -> Option<&str> {
        self.format.get("pattern").map(String::as_str)
    }

    /// Fully-qualified name.
    #[must_use]
    pub fn fqname(&self) -> String {
        fqname(&self.ns, &self.name)
    }
}

/// A named individual of some class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Individual {
    /// Local name.
    pub name: String,
    /// Owning namespace.
    pub ns: String,
    /// Canonical identifier.
    #[serde(default)]
    pub iri: String,
    /// Short description.
    #[serde(default)]
    pub summary: Option<String>,
    /// Reference to the individual's class.
    #[serde(rename = "type")]
    pub type_: String,
    /// Externally assigned canonical identifier.
    #[serde(rename = "IRI", default)]
    pub custom_iri: Option<String>,
}

impl Individual {
    /// Creates an individual of the referenced class.
    pub fn new(
        ns: impl Into<String>,
        name: impl Into<String>,
        iri: impl Into<String>,
        type_: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            ns: ns.into(),
            iri: iri.into(),
            summary: None,
            type_: type_.into(),
            custom_iri: None,
        }
    }

    /// Sets the summary.
    #[must_use]
    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    /// Sets the external canonical identifier.
    #[must_use]
    pub fn with_custom_iri(mut self, iri: impl Into<String>) -> Self {
        self.custom_iri = Some(iri.into());
        self
    }

    /// Fully-qualified name.
    #[must_use]
    pub fn fqname(&self) -> String {
        fqname(&self.ns, &self.name)
    }
}

/// An entry of the unified `types` lookup used for range resolution.
#[derive(Debug, Clone, Copy)]
pub enum TypeRef<'a> {
    /// A class.
    Class(&'a Class),
    /// A vocabulary.
    Vocabulary(&'a Vocabulary),
    /// A datatype.
    Datatype(&'a Datatype),
}

impl TypeRef<'_> {
    /// Canonical identifier of the referenced entity.
    #[must_use]
    pub fn iri(&self) -> &str {
        match self {
            TypeRef::Class(c) => &c.iri,
            TypeRef::Vocabulary(v) => &v.iri,
            TypeRef::Datatype(d) => &d.iri,
        }
    }
}

/// The complete schema model.
#[derive(Debug, Clone, Default)]
pub struct Model {
    namespaces: Vec<Namespace>,
    classes: IndexMap<String, Class>,
    properties: IndexMap<String, Property>,
    vocabularies: IndexMap<String, Vocabulary>,
    datatypes: IndexMap<String, Datatype>,
    individuals: IndexMap<String, Individual>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct ModelDocument {
    namespaces: Vec<Namespace>,
    #[serde(default)]
    classes: Vec<Class>,
    #[serde(default)]
    properties: Vec<Property>,
    #[serde(default)]
    vocabularies: Vec<Vocabulary>,
    #[serde(default)]
    datatypes: Vec<Datatype>,
    #[serde(default)]
    individuals: Vec<Individual>,
}

macro_rules! insert_entity {
    ($fn_name:ident, $field:ident, $ty:ty, $kind:literal) => {
        #[doc = concat!("Adds a ", $kind, ".")]
        ///
        /// # Errors
        ///
        /// Returns [`ModelError::UnknownNamespace`] if its namespace is not
        /// declared and [`ModelError::Duplicate`] if its fully-qualified name
        /// is taken.
        pub fn $fn_name(&mut self, entity: $ty) -> Result<(), ModelError> {
            self.check_namespace($kind, &entity.ns, &entity.name)?;
            let key = entity.fqname();
            if self.$field.contains_key(&key) {
                return Err(ModelError::Duplicate {
                    kind: $kind,
                    fqname: key,
                });
            }
            self.$field.insert(key, entity);
            Ok(())
        }
    };
}

impl Model {
    /// Creates an empty model over the given namespaces, in declaration order.
    #[must_use]
    pub fn new(namespaces: Vec<Namespace>) -> Self {
        Self {
            namespaces,
            ..Self::default()
        }
    }

    insert_entity!(insert_class, classes, Class, "class");
    insert_entity!(insert_property, properties, Property, "property");
    insert_entity!(insert_vocabulary, vocabularies, Vocabulary, "vocabulary");
    insert_entity!(insert_datatype, datatypes, Datatype, "datatype");
    insert_entity!(insert_individual, individuals, Individual, "individual");

    fn check_namespace(&self, kind: &'static str, ns: &str, name: &str) -> Result<(), ModelError> {
        if self.namespaces.iter().any(|n| n.name == ns) {
            Ok(())
        } else {
            Err(ModelError::UnknownNamespace {
                kind,
                name: name.to_owned(),
                ns: ns.to_owned(),
            })
        }
    }

    /// Decodes a model from its JSON document form and validates it.
    ///
    /// Entities are ordered by namespace declaration order (stable within a
    /// namespace). Entities without an `iri` get `<base>/<Ns>/<Name>`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`] on malformed input and [`Error::Model`] if
    /// the decoded model violates an invariant.
    pub fn from_json(src: &str, config: &OntologyConfig) -> Result<Self> {
        let doc: ModelDocument = serde_json::from_str(src)?;
        let mut model = Model::new(doc.namespaces);

        let ns_rank = |ns: &str| {
            model
                .namespaces
                .iter()
                .position(|n| n.name == ns)
                .unwrap_or(usize::MAX)
        };
        let mut classes = doc.classes;
        let mut properties = doc.properties;
        let mut vocabularies = doc.vocabularies;
        let mut datatypes = doc.datatypes;
        let mut individuals = doc.individuals;
        classes.sort_by_key(|e| ns_rank(&e.ns));
        properties.sort_by_key(|e| ns_rank(&e.ns));
        vocabularies.sort_by_key(|e| ns_rank(&e.ns));
        datatypes.sort_by_key(|e| ns_rank(&e.ns));
        individuals.sort_by_key(|e| ns_rank(&e.ns));

        for mut c in classes {
            fill_iri(&mut c.iri, config, &c.ns, &c.name);
            model.insert_class(c)?;
        }
        for mut p in properties {
            fill_iri(&mut p.iri, config, &p.ns, &p.name);
            model.insert_property(p)?;
        }
        for mut v in vocabularies {
            fill_iri(&mut v.iri, config, &v.ns, &v.name);
            model.insert_vocabulary(v)?;
        }
        for mut d in datatypes {
            fill_iri(&mut d.iri, config, &d.ns, &d.name);
            model.insert_datatype(d)?;
        }
        for mut i in individuals {
            fill_iri(&mut i.iri, config, &i.ns, &i.name);
            model.insert_individual(i)?;
        }

        model.validate().map_err(Error::from)?;
        tracing::debug!(
            namespaces = model.namespaces.len(),
            classes = model.classes.len(),
            properties = model.properties.len(),
            vocabularies = model.vocabularies.len(),
            datatypes = model.datatypes.len(),
            individuals = model.individuals.len(),
            "model loaded"
        );
        Ok(model)
    }

    /// Namespaces in declaration order.
    #[must_use]
    pub fn namespaces(&self) -> &[Namespace] {
        &self.namespaces
    }

    /// Classes keyed by fully-qualified name.
    #[must_use]
    pub fn classes(&self) -> &IndexMap<String, Class> {
        &self.classes
    }

    /// Properties keyed by fully-qualified name.
    #[must_use]
    pub fn properties(&self) -> &IndexMap<String, Property> {
        &self.properties
    }

    /// Vocabularies keyed by fully-qualified name.
    #[must_use]
    pub fn vocabularies(&self) -> &IndexMap<String, Vocabulary> {
        &self.vocabularies
    }

    /// Datatypes keyed by fully-qualified name.
    #[must_use]
    pub fn datatypes(&self) -> &IndexMap<String, Datatype> {
        &self.datatypes
    }

    /// Individuals keyed by fully-qualified name.
    #[must_use]
    pub fn individuals(&self) -> &IndexMap<String, Individual> {
        &self.individuals
    }

    /// Looks up a class, vocabulary or datatype by fully-qualified name.
    #[must_use]
    pub fn type_named(&self, fqname: &str) -> Option<TypeRef<'_>> {
        if let Some(c) = self.classes.get(fqname) {
            return Some(TypeRef::Class(c));
        }
        if let Some(v) = self.vocabularies.get(fqname) {
            return Some(TypeRef::Vocabulary(v));
        }
        self.datatypes.get(fqname).map(TypeRef::Datatype)
    }

    /// Resolves the parent of a class, if it declares one.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::MalformedReference`] or
    /// [`ModelError::UnresolvedReference`] if the declared parent does not
    /// name a class.
    pub fn parent_of(&self, class: &Class) -> Result<Option<&Class>, ModelError> {
        let Some(reference) = class.subclass_of.as_deref() else {
            return Ok(None);
        };
        let key = resolve::qualify(reference, &class.ns)?;
        self.classes
            .get(&key)
            .map(Some)
            .ok_or_else(|| ModelError::UnresolvedReference {
                kind: "class",
                fqname: key,
                from: class.fqname(),
            })
    }

    /// Checks every cross-reference and the acyclicity of `SubclassOf`.
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant found.
    pub fn validate(&self) -> Result<(), ModelError> {
        for class in self.classes.values() {
            inheritance::ancestry(class, self)?;
            for slot in class.properties.values() {
                let key = resolve::qualify(&slot.fqname, &class.ns)?;
                if !self.properties.contains_key(&key) {
                    return Err(ModelError::UnresolvedReference {
                        kind: "property",
                        fqname: key,
                        from: class.fqname(),
                    });
                }
            }
        }
        for prop in self.properties.values() {
            if let resolve::Reference::Named(key) = resolve::classify(&prop.range, &prop.ns)? {
                if self.type_named(&key).is_none() {
                    return Err(ModelError::UnresolvedReference {
                        kind: "type",
                        fqname: key,
                        from: prop.fqname(),
                    });
                }
            }
        }
        for ind in self.individuals.values() {
            let key = resolve::qualify(&ind.type_, &ind.ns)?;
            if self.type_named(&key).is_none() {
                return Err(ModelError::UnresolvedReference {
                    kind: "type",
                    fqname: key,
                    from: ind.fqname(),
                });
            }
        }
        Ok(())
    }
}

fn fill_iri(iri: &mut String, config: &OntologyConfig, ns: &str, name: &str) {
    if iri.is_empty() {
        *iri = config.entity_iri(ns, name);
    }
}
