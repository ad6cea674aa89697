#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Symbol model for typebridge.
//!
//! Two layers:
//! - **Symbol layer**: resolved types, members and declarations, as an
//!   external resolver sees them ([`TypeRef`], [`TypeDeclaration`], ...)
//! - **Front-end layer**: the [`SymbolProvider`] seam and the JSON symbol-dump
//!   adapter ([`JsonSymbolProvider`]) with its metadata [`Catalog`]

pub mod declarations;
pub mod dump;
pub mod provider;
pub mod types;


pub use declarations::{
    Attribute, AttributeValue, Declaration, EnumDeclaration, EnumMemberSymbol, MemberSymbol,
    SourceUnit, TypeDeclaration,
};
pub use dump::{Catalog, DeclarationSet, JsonSymbolProvider, SymbolError};
pub use provider::{InMemoryProvider, SymbolProvider};
pub use types::{NamedType, SpecialType, TypeKind, TypeRef};
