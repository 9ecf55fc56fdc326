//! Error types.
//!
//! [`ModelError`] covers violated model invariants; these are fatal and abort
//! graph construction. [`Error`] is the crate-level error that also carries
//! I/O and decoding failures from loading and writing artifacts.

use std::path::PathBuf;

/// A violated model invariant.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ModelError {
    /// A namespace-absolute reference is not of the form `/Namespace/Name`.
    #[error("malformed reference `{reference}`: expected `/Namespace/Name`")]
    MalformedReference {
        /// The offending reference string.
        reference: String,
    },

    /// A fully-qualified name is absent from the lookup it must resolve in.
    #[error("unresolved {kind} reference `{fqname}` from `{from}`")]
    UnresolvedReference {
        /// Which lookup was consulted (`class`, `type`, `property`).
        kind: &'static str,
        /// The fully-qualified name that failed to resolve.
        fqname: String,
        /// The fully-qualified name of the referencing entity.
        from: String,
    },

    /// A `SubclassOf` chain loops back on itself.
    #[error("cyclic SubclassOf chain: {}", chain.join(" -> "))]
    InheritanceCycle {
        /// The walked chain, ending with the repeated class.
        chain: Vec<String>,
    },

    /// Two entities of the same kind share a fully-qualified name.
    #[error("duplicate {kind} `{fqname}`")]
    Duplicate {
        /// Entity kind.
        kind: &'static str,
        /// The repeated fully-qualified name.
        fqname: String,
    },

    /// An entity belongs to a namespace the model does not declare.
    #[error("{kind} `{name}` belongs to undeclared namespace `{ns}`")]
    UnknownNamespace {
        /// Entity kind.
        kind: &'static str,
        /// Local name of the entity.
        name: String,
        /// The undeclared namespace.
        ns: String,
    },
}

/// Crate-level error.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The model violates an invariant.
    #[error(transparent)]
    Model(#[from] ModelError),

    /// Reading or writing a file failed.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// Path of the file or directory involved.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// A JSON document could not be decoded or encoded.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A TOML configuration could not be decoded.
    #[error("configuration error: {0}")]
    Config(#[from] toml::de::Error),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Convenience alias for results carrying [`Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;
