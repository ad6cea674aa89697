//! Index signatures and extends clauses of type declarations.

use typebridge_core::{NamedType, SpecialType, TypeDeclaration};

use crate::classify::{IndexKey, ResolvedType, classify};

/// An index signature line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Indexer {
    /// `[key: string]: V;` or `[key: number]: V;`
    Key { key: IndexKey, value: ResolvedType },
    /// `[index: number]: T;`
    Index { element: ResolvedType },
}

impl Indexer {
    pub fn render(&self) -> String {
        match self {
            Self::Key { key, value } => format!("[key: {}]: {};", key.as_str(), value.render()),
            Self::Index { element } => format!("[index: number]: {};", element.render()),
        }
    }
}

/// Interfaces considered for indexer detection.
///
/// A source base already carries the indexers its interfaces imply, so only
/// the directly declared list is used then.
fn indexer_interfaces(decl: &TypeDeclaration) -> &[NamedType] {
    match &decl.base {
        Some(base) if base.has_source => &decl.interfaces,
        _ => &decl.all_interfaces,
    }
}

/// The index signature a declaration emits, if any.
///
/// A dictionary-shaped interface wins over an enumerable one. When its key is
/// neither string nor numeric no indexer is emitted at all.
pub fn resolve_indexer(decl: &TypeDeclaration) -> Option<Indexer> {
    let interfaces = indexer_interfaces(decl);

    let dictionary = interfaces
        .iter()
        .find(|i| i.special == SpecialType::GenericDictionary && i.type_args.len() == 2);
    if let Some(dictionary) = dictionary {
        let [key, value] = dictionary.type_args.as_slice() else {
            return None;
        };
        let Some(key) = IndexKey::of(key) else {
            tracing::trace!(ty = %decl.name, "dictionary key has no index signature");
            return None;
        };
        return Some(Indexer::Key {
            key,
            value: classify(value),
        });
    }

    interfaces
        .iter()
        .find(|i| i.special == SpecialType::GenericEnumerable && i.type_args.len() == 1)
        .map(|enumerable| Indexer::Index {
            element: classify(&enumerable.type_args[0]),
        })
}

/// The base name for an `extends` clause. Only source bases qualify.
pub fn resolve_extends(decl: &TypeDeclaration) -> Option<&str> {
    decl.base
        .as_ref()
        .filter(|base| base.has_source)
        .map(|base| base.name.as_str())
}
