//! Arena of source declarations, indexed by name.
//!
//! Base types and interfaces refer to each other by name only; the arena
//! answers "is this declared in the source set" and walks inheritance to
//! compute transitive interface sets.

use std::collections::HashMap;

use indexmap::IndexMap;

use super::error::SymbolError;
use crate::declarations::{Declaration, SourceUnit, TypeDeclaration};
use crate::types::{NamedType, TypeKind};

#[derive(Clone, Copy, Debug)]
struct Slot {
    kind: TypeKind,
    unit: usize,
    index: usize,
}

#[derive(Clone, Debug, Default)]
pub struct DeclarationSet {
    slots: IndexMap<String, Slot>,
}

impl DeclarationSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a declaration at `(unit, index)`. The first declaration of a
    /// name wins the lookup; later ones are still linked, see
    /// [`link_interfaces`](Self::link_interfaces).
    pub fn insert(&mut self, name: &str, kind: TypeKind, unit: usize, index: usize) {
        if self.slots.contains_key(name) {
            tracing::warn!(name, "duplicate declaration name, references resolve to the first");
            return;
        }
        self.slots
            .insert(name.to_string(), Slot { kind, unit, index });
    }

    pub fn contains(&self, name: &str) -> bool {
        self.slots.contains_key(name)
    }

    pub fn kind_of(&self, name: &str) -> Option<TypeKind> {
        self.slots.get(name).map(|slot| slot.kind)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    fn is_registered(&self, name: &str, unit: usize, index: usize) -> bool {
        self.slots
            .get(name)
            .is_some_and(|slot| slot.unit == unit && slot.index == index)
    }

    /// Fill `all_interfaces` of every type declaration in `units`.
    ///
    /// Order: each direct interface followed by its own transitive set, then
    /// the base's transitive set. Duplicates keep their first position.
    ///
    /// Each declaration is linked from its own base and interfaces. Only the
    /// walk into source bases and interfaces goes through the by-name lookup,
    /// so a duplicate name still gets its own transitive set.
    pub fn link_interfaces(&self, units: &mut [SourceUnit]) -> Result<(), SymbolError> {
        let mut memo: HashMap<String, Vec<NamedType>> = HashMap::new();
        let mut linked = Vec::new();
        let view: &[SourceUnit] = units;
        for (u, unit) in view.iter().enumerate() {
            for (i, decl) in unit.declarations.iter().enumerate() {
                let Declaration::Type(decl) = decl else {
                    continue;
                };
                let interfaces = if self.is_registered(&decl.name, u, i) {
                    self.transitive(&decl.name, view, &mut memo, &mut Vec::new())?
                } else {
                    self.collect(decl, view, &mut memo, &mut Vec::new())?
                };
                linked.push((u, i, interfaces));
            }
        }

        for (u, i, interfaces) in linked {
            if let Some(Declaration::Type(decl)) = units[u].declarations.get_mut(i) {
                decl.all_interfaces = interfaces;
            }
        }
        Ok(())
    }

    fn transitive(
        &self,
        name: &str,
        units: &[SourceUnit],
        memo: &mut HashMap<String, Vec<NamedType>>,
        stack: &mut Vec<String>,
    ) -> Result<Vec<NamedType>, SymbolError> {
        if let Some(done) = memo.get(name) {
            return Ok(done.clone());
        }
        if stack.iter().any(|n| n == name) {
            return Err(SymbolError::CyclicInheritance {
                name: name.to_string(),
            });
        }
        let Some(slot) = self.slots.get(name) else {
            return Ok(Vec::new());
        };
        let Some(Declaration::Type(decl)) = units[slot.unit].declarations.get(slot.index) else {
            return Ok(Vec::new());
        };

        stack.push(name.to_string());
        let out = self.collect(decl, units, memo, stack)?;
        stack.pop();

        memo.insert(name.to_string(), out.clone());
        Ok(out)
    }

    fn collect(
        &self,
        decl: &TypeDeclaration,
        units: &[SourceUnit],
        memo: &mut HashMap<String, Vec<NamedType>>,
        stack: &mut Vec<String>,
    ) -> Result<Vec<NamedType>, SymbolError> {
        let mut out = Vec::new();
        for interface in &decl.interfaces {
            push_unique(&mut out, interface.clone());
            for inherited in self.inherited(interface, units, memo, stack)? {
                push_unique(&mut out, inherited);
            }
        }
        if let Some(base) = &decl.base {
            for inherited in self.inherited(base, units, memo, stack)? {
                push_unique(&mut out, inherited);
            }
        }
        Ok(out)
    }

    fn inherited(
        &self,
        ty: &NamedType,
        units: &[SourceUnit],
        memo: &mut HashMap<String, Vec<NamedType>>,
        stack: &mut Vec<String>,
    ) -> Result<Vec<NamedType>, SymbolError> {
        if ty.has_source {
            return self.transitive(&ty.name, units, memo, stack);
        }
        Ok(ty
            .interfaces
            .iter()
            .filter_map(|i| i.as_named())
            .cloned()
            .collect())
    }
}

fn push_unique(out: &mut Vec<NamedType>, ty: NamedType) {
    if !out.contains(&ty) {
        out.push(ty);
    }
}
