//! Metadata catalog of external (library) types.
//!
//! Entries are keyed by name and generic arity. The base catalog describes the
//! standard collection types; reference catalogs are layered on top of it.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use super::error::SymbolError;
use super::json::{RawCatalog, RawTypeRef};
use crate::types::{SpecialType, TypeKind};

const BASE_CATALOG: &str = include_str!("base_catalog.json");

#[derive(Clone, Debug)]
pub(crate) struct CatalogEntry {
    pub kind: TypeKind,
    pub special: SpecialType,
    pub type_parameters: Vec<String>,
    /// Transitive interfaces, written against `type_parameters`.
    pub interfaces: Vec<RawTypeRef>,
}

#[derive(Clone, Debug, Default)]
pub struct Catalog {
    entries: HashMap<(String, usize), CatalogEntry>,
}

impl Catalog {
    /// A catalog with no entries.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The built-in catalog of standard collection types.
    pub fn base() -> Result<Self, SymbolError> {
        Self::from_json("<base catalog>", BASE_CATALOG)
    }

    pub fn from_json(origin: &str, json: &str) -> Result<Self, SymbolError> {
        let raw: RawCatalog = serde_json::from_str(json).map_err(|source| SymbolError::Json {
            origin: origin.to_string(),
            source,
        })?;

        let mut entries = HashMap::new();
        for ty in raw.types {
            let special = match &ty.special {
                Some(tag) => SpecialType::from_tag(tag).ok_or_else(|| {
                    SymbolError::UnknownSpecialType {
                        tag: tag.clone(),
                        type_name: ty.name.clone(),
                    }
                })?,
                None => SpecialType::None,
            };
            let key = (ty.name, ty.type_parameters.len());
            if entries.contains_key(&key) {
                return Err(SymbolError::DuplicateCatalogEntry {
                    name: key.0,
                    arity: key.1,
                    origin: origin.to_string(),
                });
            }
            entries.insert(
                key,
                CatalogEntry {
                    kind: ty.kind.map(TypeKind::from).unwrap_or_default(),
                    special,
                    type_parameters: ty.type_parameters,
                    interfaces: ty.interfaces,
                },
            );
        }

        Ok(Self { entries })
    }

    pub fn load(path: &Path) -> Result<Self, SymbolError> {
        let json = fs::read_to_string(path).map_err(|source| SymbolError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loading reference catalog");
        Self::from_json(&path.to_string_lossy(), &json)
    }

    /// Layer `other` on top of this catalog. Entries with the same name and
    /// arity are replaced.
    pub fn extend(&mut self, other: Catalog) {
        self.entries.extend(other.entries);
    }

    pub fn contains(&self, name: &str, arity: usize) -> bool {
        self.entries.contains_key(&(name.to_string(), arity))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn get(&self, name: &str, arity: usize) -> Option<&CatalogEntry> {
        self.entries.get(&(name.to_string(), arity))
    }
}
