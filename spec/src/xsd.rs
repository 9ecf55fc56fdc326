//! Primitive range mapping.

use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::vocab::XSD;

/// Built-in XML Schema 1.1 datatypes, plus `anySimpleType`.
const BUILTIN: &[&str] = &[
    "anySimpleType",
    "anyAtomicType",
    "anyURI",
    "base64Binary",
    "boolean",
    "byte",
    "date",
    "dateTime",
    "dateTimeStamp",
    "dayTimeDuration",
    "decimal",
    "double",
    "duration",
    "ENTITIES",
    "ENTITY",
    "float",
    "gDay",
    "gMonth",
    "gMonthDay",
    "gYear",
    "gYearMonth",
    "hexBinary",
    "ID",
    "IDREF",
    "IDREFS",
    "int",
    "integer",
    "language",
    "long",
    "Name",
    "NCName",
    "negativeInteger",
    "NMTOKEN",
    "NMTOKENS",
    "nonNegativeInteger",
    "nonPositiveInteger",
    "normalizedString",
    "NOTATION",
    "positiveInteger",
    "QName",
    "short",
    "string",
    "time",
    "token",
    "unsignedByte",
    "unsignedInt",
    "unsignedLong",
    "unsignedShort",
    "yearMonthDuration",
];

/// Maps `xsd:<local>` to its XML-Schema datatype IRI.
///
/// Any other prefix raises [`Diagnostic::UnknownRangeNamespace`], and an
/// `xsd:` local name that is not a built-in datatype raises
/// [`Diagnostic::UnknownXsdDatatype`]; both yield `None` and the caller omits
/// the constraint.
pub fn xsd_range(range: &str, property: &str, diagnostics: &mut Diagnostics) -> Option<String> {
    let Some(local) = range.strip_prefix("xsd:") else {
        diagnostics.push(Diagnostic::UnknownRangeNamespace {
            range: range.to_owned(),
            property: property.to_owned(),
        });
        return None;
    };
    if !BUILTIN.contains(&local) {
        diagnostics.push(Diagnostic::UnknownXsdDatatype {
            range: range.to_owned(),
            property: property.to_owned(),
        });
        return None;
    }
    Some(format!("{XSD}{local}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_xsd_prefix() {
        let mut diags = Diagnostics::new();
        assert_eq!(
            xsd_range("xsd:dateTimeStamp", "p", &mut diags).as_deref(),
            Some("http://www.w3.org/2001/XMLSchema#dateTimeStamp")
        );
        assert!(diags.is_empty());
    }

    #[test]
    fn unknown_prefix_is_reported() {
        let mut diags = Diagnostics::new();
        assert_eq!(xsd_range("xs:string", "https://x/Core/p", &mut diags), None);
        assert_eq!(
            diags.entries(),
            [Diagnostic::UnknownRangeNamespace {
                range: "xs:string".to_owned(),
                property: "https://x/Core/p".to_owned(),
            }]
        );
    }

    #[test]
    fn unknown_local_name_is_reported() {
        let mut diags = Diagnostics::new();
        assert_eq!(xsd_range("xsd:hue", "https://x/Core/color", &mut diags), None);
        assert_eq!(diags.len(), 1);
        assert!(matches!(
            diags.entries()[0],
            Diagnostic::UnknownXsdDatatype { .. }
        ));
    }
}
