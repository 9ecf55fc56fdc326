//! Recoverable conditions raised while building the graph or the context.
//!
//! Nothing here aborts a run. Each diagnostic is recorded in a
//! [`Diagnostics`] collector for the caller and emitted as a `tracing` event
//! at the moment it is raised.

use std::fmt;

/// Severity of a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Output is still complete, but a constraint was omitted.
    Warning,
    /// A mapping was dropped from the output.
    Error,
}

/// A single recoverable condition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A primitive range uses a prefix other than `xsd:`.
    UnknownRangeNamespace {
        /// The range reference.
        range: String,
        /// The referencing property (IRI or local name).
        property: String,
    },
    /// An `xsd:` range names no built-in XML Schema datatype.
    UnknownXsdDatatype {
        /// The range reference.
        range: String,
        /// The referencing property (IRI or local name).
        property: String,
    },
    /// Two subjects derive the same context term; the later one was dropped.
    DuplicateContextKey {
        /// The colliding term.
        key: String,
        /// The subject whose mapping was dropped.
        subject: String,
        /// The identifier the key already maps to.
        existing: String,
    },
}

impl Diagnostic {
    /// Severity of this diagnostic.
    #[must_use]
    pub fn severity(&self) -> Severity {
        match self {
            Diagnostic::UnknownRangeNamespace { .. } | Diagnostic::UnknownXsdDatatype { .. } => {
                Severity::Warning
            }
            Diagnostic::DuplicateContextKey { .. } => Severity::Error,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::UnknownRangeNamespace { range, property } => {
                write!(f, "unknown namespace in range <{range}> of property {property}")
            }
            Diagnostic::UnknownXsdDatatype { range, property } => {
                write!(f, "unknown XML Schema datatype in range <{range}> of property {property}")
            }
            Diagnostic::DuplicateContextKey {
                key,
                subject,
                existing,
            } => write!(
                f,
                "duplicate context key '{key}' for '{subject}', already mapped to '{existing}'"
            ),
        }
    }
}

/// Ordered collection of diagnostics.
#[derive(Debug, Default, Clone)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    /// Creates an empty collector.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a diagnostic and logs it.
    pub fn push(&mut self, diagnostic: Diagnostic) {
        match diagnostic.severity() {
            Severity::Warning => tracing::warn!("{diagnostic}"),
            Severity::Error => tracing::error!("{diagnostic}"),
        }
        self.entries.push(diagnostic);
    }

    /// Recorded diagnostics in the order they were raised.
    #[must_use]
    pub fn entries(&self) -> &[Diagnostic] {
        &self.entries
    }

    /// Number of recorded diagnostics.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if nothing was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of diagnostics with [`Severity::Error`].
    #[must_use]
    pub fn error_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|d| d.severity() == Severity::Error)
            .count()
    }
}
