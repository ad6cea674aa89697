//! Per-declaration resolution on top of the classifier.
//!
//! - `member` - emitted member names and optionality
//! - `structure` - index signatures and extends clauses
//! - `enums` - enum member values

pub mod enums;
pub mod member;
pub mod structure;

#[cfg(test)]
mod member_tests;

pub use enums::{EnumValue, assign_values};
pub use member::{MemberDeclaration, RenameAnnotation};
pub use structure::{Indexer, resolve_extends, resolve_indexer};
