//! Raw serde layer for symbol dumps and metadata catalogs.
//!
//! These structures mirror the JSON 1:1. Resolution into the symbol model
//! happens in `resolve`.

use indexmap::IndexMap;
use serde::Deserialize;

use crate::declarations::AttributeValue;
use crate::types::TypeKind;

/// One symbol dump (one source unit).
#[derive(Debug, Deserialize)]
pub(crate) struct RawUnit {
    #[serde(default)]
    pub declarations: Vec<RawDeclaration>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub(crate) enum RawDeclaration {
    Class(RawTypeDecl),
    Struct(RawTypeDecl),
    Interface(RawTypeDecl),
    Enum(RawEnumDecl),
}

impl RawDeclaration {
    pub fn name(&self) -> &str {
        match self {
            Self::Class(d) | Self::Struct(d) | Self::Interface(d) => &d.name,
            Self::Enum(d) => &d.name,
        }
    }

    pub fn kind(&self) -> TypeKind {
        match self {
            Self::Class(_) => TypeKind::Class,
            Self::Struct(_) => TypeKind::Struct,
            Self::Interface(_) => TypeKind::Interface,
            Self::Enum(_) => TypeKind::Enum,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawTypeDecl {
    pub name: String,
    #[serde(default)]
    pub type_parameters: Vec<String>,
    #[serde(default)]
    pub base: Option<RawTypeRef>,
    #[serde(default)]
    pub interfaces: Vec<RawTypeRef>,
    #[serde(default)]
    pub members: Vec<RawMember>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawMember {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: RawTypeRef,
    #[serde(default)]
    pub attributes: Vec<RawAttribute>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawAttribute {
    pub name: String,
    #[serde(default)]
    pub args: Vec<serde_json::Value>,
    #[serde(default)]
    pub named: IndexMap<String, serde_json::Value>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawEnumDecl {
    pub name: String,
    #[serde(default)]
    pub members: Vec<RawEnumMember>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawEnumMember {
    pub name: String,
    #[serde(default)]
    pub value: Option<i64>,
}

/// A type reference as written in a dump or catalog.
#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum RawTypeRef {
    /// Simple name, e.g. `"int"` or `"Person"`.
    Simple(String),
    Array { array: Box<RawTypeRef> },
    /// Type parameter of a catalog entry or a generic source declaration.
    Param { param: String },
    Named(RawNamedRef),
}

#[derive(Clone, Debug, Deserialize)]
pub(crate) struct RawNamedRef {
    pub name: String,
    #[serde(default)]
    pub args: Vec<RawTypeRef>,
    #[serde(default)]
    pub kind: Option<RawKind>,
    #[serde(default)]
    pub special: Option<String>,
    #[serde(default)]
    pub interfaces: Option<Vec<RawTypeRef>>,
}

impl RawNamedRef {
    pub fn simple(name: &str) -> Self {
        Self {
            name: name.to_string(),
            args: Vec::new(),
            kind: None,
            special: None,
            interfaces: None,
        }
    }

    /// No inline shape data beyond the name and arguments.
    pub fn is_bare(&self) -> bool {
        self.kind.is_none() && self.special.is_none() && self.interfaces.is_none()
    }
}

#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum RawKind {
    Class,
    Struct,
    Interface,
    Enum,
}

impl From<RawKind> for TypeKind {
    fn from(raw: RawKind) -> Self {
        match raw {
            RawKind::Class => TypeKind::Class,
            RawKind::Struct => TypeKind::Struct,
            RawKind::Interface => TypeKind::Interface,
            RawKind::Enum => TypeKind::Enum,
        }
    }
}

/// A metadata catalog file.
#[derive(Debug, Deserialize)]
pub(crate) struct RawCatalog {
    #[serde(default)]
    pub types: Vec<RawCatalogType>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawCatalogType {
    pub name: String,
    #[serde(default)]
    pub kind: Option<RawKind>,
    #[serde(default)]
    pub type_parameters: Vec<String>,
    #[serde(default)]
    pub special: Option<String>,
    #[serde(default)]
    pub interfaces: Vec<RawTypeRef>,
}

pub(crate) fn attribute_value(value: &serde_json::Value) -> AttributeValue {
    match value {
        serde_json::Value::String(s) => AttributeValue::String(s.clone()),
        serde_json::Value::Bool(b) => AttributeValue::Bool(*b),
        serde_json::Value::Null => AttributeValue::Null,
        serde_json::Value::Number(n) => match n.as_i64() {
            Some(i) => AttributeValue::Int(i),
            None => AttributeValue::Other,
        },
        _ => AttributeValue::Other,
    }
}
