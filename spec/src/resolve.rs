//! Reference resolution.
//!
//! A reference is either namespace-absolute (`/Namespace/Name`), relative to
//! the referencing entity's namespace (`Name`), or a prefixed primitive
//! (`xsd:string`). Primitives are never namespace-resolved.

use crate::error::ModelError;

/// A classified reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reference<'a> {
    /// A prefixed primitive such as `xsd:string`, left for the range mapper.
    Primitive(&'a str),
    /// A fully-qualified model lookup key.
    Named(String),
}

/// Classifies a reference made from namespace `ns`.
///
/// # Errors
///
/// Returns [`ModelError::MalformedReference`] if an absolute reference is
/// not exactly `/Namespace/Name`.
pub fn classify<'a>(reference: &'a str, ns: &str) -> Result<Reference<'a>, ModelError> {
    if reference.contains(':') {
        return Ok(Reference::Primitive(reference));
    }
    qualify(reference, ns).map(Reference::Named)
}

/// Turns a class/type/property reference into its fully-qualified name.
///
/// # Errors
///
/// Returns [`ModelError::MalformedReference`] if an absolute reference is
/// not exactly `/Namespace/Name`, or a relative one is empty or contains `/`.
pub fn qualify(reference: &str, ns: &str) -> Result<String, ModelError> {
    let malformed = || ModelError::MalformedReference {
        reference: reference.to_owned(),
    };
    match reference.strip_prefix('/') {
        Some(rest) => {
            let mut parts = rest.split('/');
            match (parts.next(), parts.next(), parts.next()) {
                (Some(n), Some(name), None) if !n.is_empty() && !name.is_empty() => {
                    Ok(reference.to_owned())
                }
                _ => Err(malformed()),
            }
        }
        None if reference.is_empty() || reference.contains('/') => Err(malformed()),
        None => Ok(format!("/{ns}/{reference}")),
    }
}

/// Splits a fully-qualified name into `(namespace, local name)`.
#[must_use]
pub fn split_fqname(fqname: &str) -> Option<(&str, &str)> {
    let rest = fqname.strip_prefix('/')?;
    let (ns, name) = rest.split_once('/')?;
    if ns.is_empty() || name.is_empty() || name.contains('/') {
        return None;
    }
    Some((ns, name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_reference_gets_referrer_namespace() {
        assert_eq!(qualify("Agent", "Core").unwrap(), "/Core/Agent");
    }

    #[test]
    fn absolute_reference_is_unchanged() {
        assert_eq!(
            qualify("/Software/Package", "Core").unwrap(),
            "/Software/Package"
        );
    }

    #[test]
    fn malformed_absolute_references() {
        for bad in ["/", "/Core", "/Core/", "//Agent", "/Core/Agent/x", "", "Core/Agent"] {
            assert!(
                matches!(qualify(bad, "Core"), Err(ModelError::MalformedReference { .. })),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn primitives_are_not_namespace_resolved() {
        assert_eq!(
            classify("xsd:string", "Core").unwrap(),
            Reference::Primitive("xsd:string")
        );
        assert_eq!(
            classify("SemVer", "Software").unwrap(),
            Reference::Named("/Software/SemVer".to_owned())
        );
    }

    #[test]
    fn split_fqnames() {
        assert_eq!(split_fqname("/Core/name"), Some(("Core", "name")));
        assert_eq!(split_fqname("Core/name"), None);
        assert_eq!(split_fqname("/Core/a/b"), None);
    }
}
