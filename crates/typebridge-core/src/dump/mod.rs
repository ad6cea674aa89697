//! JSON symbol dumps: the front-end adapter between an external resolver and
//! the generator.
//!
//! Each input file is the resolver's view of one source unit. Loading runs in
//! three steps:
//! - parse every dump through the raw serde layer
//! - register declared names in the [`DeclarationSet`] arena
//! - resolve references against the arena and the metadata [`Catalog`], then
//!   link transitive interfaces

mod arena;
mod catalog;
mod error;
mod json;
mod resolve;

#[cfg(test)]
mod catalog_tests;

use std::fs;
use std::path::Path;

pub use arena::DeclarationSet;
pub use catalog::Catalog;
pub use error::SymbolError;

use json::RawUnit;
use resolve::Resolver;

use crate::declarations::SourceUnit;
use crate::provider::SymbolProvider;

/// Symbol provider backed by JSON symbol dumps.
#[derive(Clone, Debug)]
pub struct JsonSymbolProvider {
    units: Vec<SourceUnit>,
    declared: DeclarationSet,
}

impl JsonSymbolProvider {
    /// Load dumps from `inputs`, with the base catalog plus the catalogs in
    /// `references` layered in order.
    pub fn load<P: AsRef<Path>>(inputs: &[P], references: &[P]) -> Result<Self, SymbolError> {
        let mut catalog = Catalog::base()?;
        for reference in references {
            catalog.extend(Catalog::load(reference.as_ref())?);
        }

        let mut sources = Vec::with_capacity(inputs.len());
        for input in inputs {
            let path = input.as_ref();
            let json = fs::read_to_string(path).map_err(|source| SymbolError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            sources.push((path.to_string_lossy().into_owned(), json));
        }

        let sources: Vec<(&str, &str)> = sources
            .iter()
            .map(|(name, json)| (name.as_str(), json.as_str()))
            .collect();
        Self::from_json(&sources, &catalog)
    }

    /// Build from in-memory `(unit name, json)` pairs.
    pub fn from_json(sources: &[(&str, &str)], catalog: &Catalog) -> Result<Self, SymbolError> {
        let mut raw_units = Vec::with_capacity(sources.len());
        for (name, json) in sources {
            let raw: RawUnit = serde_json::from_str(json).map_err(|source| SymbolError::Json {
                origin: name.to_string(),
                source,
            })?;
            tracing::debug!(unit = *name, declarations = raw.declarations.len(), "parsed symbol dump");
            raw_units.push((*name, raw));
        }

        let mut declared = DeclarationSet::new();
        for (unit, (_, raw)) in raw_units.iter().enumerate() {
            for (index, decl) in raw.declarations.iter().enumerate() {
                declared.insert(decl.name(), decl.kind(), unit, index);
            }
        }

        let mut resolver = Resolver::new(&declared, catalog);
        let mut units = Vec::with_capacity(raw_units.len());
        for (name, raw) in &raw_units {
            let mut unit = SourceUnit::new(*name);
            for decl in &raw.declarations {
                unit.declarations.push(resolver.declaration(decl)?);
            }
            units.push(unit);
        }

        declared.link_interfaces(&mut units)?;

        Ok(Self { units, declared })
    }

    /// Names declared across all loaded units.
    pub fn declared(&self) -> &DeclarationSet {
        &self.declared
    }
}

impl SymbolProvider for JsonSymbolProvider {
    fn units(&self) -> &[SourceUnit] {
        &self.units
    }
}
