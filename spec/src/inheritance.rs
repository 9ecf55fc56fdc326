//! Single-parent inheritance walk.
//!
//! Two facts are inherited along `SubclassOf`: the class's referenceability
//! and the name of its identifying property. Each is taken from the nearest
//! class in the chain (the class itself included) that supplies it.

use std::collections::HashSet;

use crate::config::OntologyConfig;
use crate::error::ModelError;
use crate::model::{Class, Model, PropertyNature, Referenceable};
use crate::resolve;

/// Facts a class inherits from its ancestor chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inherited {
    /// Nearest declared referenceability, [`Referenceable::Optional`] if none.
    pub referenceable: Referenceable,
    /// Compact name of the nearest identifying property.
    pub id_property_name: Option<String>,
}

/// Returns the class followed by its ancestors, root last.
///
/// # Errors
///
/// Returns [`ModelError::InheritanceCycle`] if the chain revisits a class,
/// or a resolution error if a parent reference does not name a class.
pub fn ancestry<'m>(class: &'m Class, model: &'m Model) -> Result<Vec<&'m Class>, ModelError> {
    let mut seen = HashSet::new();
    let mut chain = Vec::new();
    let mut current = Some(class);
    while let Some(c) = current {
        if !seen.insert(c.fqname()) {
            let mut names: Vec<String> = chain.iter().map(|c: &&Class| c.fqname()).collect();
            names.push(c.fqname());
            return Err(ModelError::InheritanceCycle { chain: names });
        }
        chain.push(c);
        current = model.parent_of(c)?;
    }
    Ok(chain)
}

/// Resolves the inherited facts of a class.
///
/// # Errors
///
/// Propagates [`ancestry`] failures, and returns
/// [`ModelError::UnresolvedReference`] if a declared property slot does not
/// name a property.
pub fn resolve(
    class: &Class,
    model: &Model,
    config: &OntologyConfig,
) -> Result<Inherited, ModelError> {
    let mut referenceable = None;
    let mut id_property_name = None;

    for ancestor in ancestry(class, model)? {
        if referenceable.is_none() {
            referenceable = ancestor.referenceable;
        }
        if id_property_name.is_none() {
            id_property_name = declared_id_property(ancestor, model, config)?;
        }
        if referenceable.is_some() && id_property_name.is_some() {
            break;
        }
    }

    Ok(Inherited {
        referenceable: referenceable.unwrap_or(Referenceable::Optional),
        id_property_name,
    })
}

/// Compact name of the identifying property the class itself declares.
/// When a class declares several, the last one in declaration order wins.
fn declared_id_property(
    class: &Class,
    model: &Model,
    config: &OntologyConfig,
) -> Result<Option<String>, ModelError> {
    let mut id_property = None;
    for slot in class.properties.values() {
        let key = resolve::qualify(&slot.fqname, &class.ns)?;
        let prop = model
            .properties()
            .get(&key)
            .ok_or_else(|| ModelError::UnresolvedReference {
                kind: "property",
                fqname: key.clone(),
                from: class.fqname(),
            })?;
        if prop.nature == PropertyNature::IdProperty {
            id_property = Some(config.compact_term(&prop.ns, &prop.name));
        }
    }
    Ok(id_property)
}
