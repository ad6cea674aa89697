//! Errors raised while loading symbol dumps and catalogs.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum SymbolError {
    #[error("failed to read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid symbol data in '{origin}': {source}")]
    Json {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("unknown special type tag '{tag}' on '{type_name}'")]
    UnknownSpecialType { tag: String, type_name: String },

    #[error("unknown type parameter '{param}'")]
    UnknownTypeParameter { param: String },

    /// A base type or interface resolved to an array.
    #[error("{context} must be a named type")]
    NotANamedType { context: String },

    #[error("cyclic inheritance involving '{name}'")]
    CyclicInheritance { name: String },

    #[error("duplicate catalog entry '{name}' with {arity} type parameter(s) in '{origin}'")]
    DuplicateCatalogEntry {
        name: String,
        arity: usize,
        origin: String,
    },
}
