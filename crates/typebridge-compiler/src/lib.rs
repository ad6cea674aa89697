//! typebridge compiler: maps resolved source declarations to TypeScript.
//!
//! This crate provides the mapping and emission pipeline:
//! - `classify` - shape classification of member and element types
//! - `resolve` - member names and optionality, indexers and extends clauses,
//!   enum values
//! - `typegen` - TypeScript declaration rendering
//! - `processor` - drives emission over every source unit

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod classify;
pub mod processor;
pub mod resolve;
pub mod typegen;

#[cfg(test)]
mod classify_tests;
#[cfg(test)]
pub mod test_utils;

pub use classify::{IndexKey, PrimitiveKind, ResolvedType, classify};
pub use processor::{Processor, is_declaration_file};
pub use typegen::typescript::{AmbientEnums, Config};

use typebridge_core::SymbolError;

/// Errors that can occur while generating declarations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An enum was reached while emitting ambient declarations and the
    /// configuration rejects ambient enums.
    #[error("enum '{name}' cannot be emitted in declaration mode")]
    EnumInDeclarationMode { name: String },

    #[error(transparent)]
    Symbols(#[from] SymbolError),

    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for generation.
pub type Result<T> = std::result::Result<T, Error>;
