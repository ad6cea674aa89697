//! Resolution of raw dump data into the symbol model.

use std::collections::HashMap;

use super::arena::DeclarationSet;
use super::catalog::Catalog;
use super::error::SymbolError;
use super::json::{
    RawAttribute, RawDeclaration, RawEnumDecl, RawMember, RawNamedRef, RawTypeDecl, RawTypeRef,
    attribute_value,
};
use crate::declarations::{
    Attribute, Declaration, EnumDeclaration, EnumMemberSymbol, MemberSymbol, TypeDeclaration,
};
use crate::types::{NamedType, SpecialType, TypeKind, TypeRef};

type Params = HashMap<String, TypeRef>;

pub(crate) struct Resolver<'a> {
    declared: &'a DeclarationSet,
    catalog: &'a Catalog,
    /// Catalog entries currently being instantiated, by name and arity.
    instantiating: Vec<(String, usize)>,
}

impl<'a> Resolver<'a> {
    pub fn new(declared: &'a DeclarationSet, catalog: &'a Catalog) -> Self {
        Self {
            declared,
            catalog,
            instantiating: Vec::new(),
        }
    }

    pub fn declaration(&mut self, raw: &RawDeclaration) -> Result<Declaration, SymbolError> {
        let decl = match raw {
            RawDeclaration::Class(d) | RawDeclaration::Struct(d) | RawDeclaration::Interface(d) => {
                Declaration::Type(self.type_declaration(d, raw.kind())?)
            }
            RawDeclaration::Enum(d) => Declaration::Enum(enum_declaration(d)),
        };
        Ok(decl)
    }

    fn type_declaration(
        &mut self,
        raw: &RawTypeDecl,
        kind: TypeKind,
    ) -> Result<TypeDeclaration, SymbolError> {
        let params: Params = raw
            .type_parameters
            .iter()
            .map(|p| (p.clone(), NamedType::external(p, TypeKind::TypeParameter).into()))
            .collect();

        let base = match &raw.base {
            Some(base) => Some(self.named(base, &params, &format!("base type of '{}'", raw.name))?),
            None => None,
        };

        let mut interfaces = Vec::with_capacity(raw.interfaces.len());
        for interface in &raw.interfaces {
            interfaces.push(self.named(
                interface,
                &params,
                &format!("interface of '{}'", raw.name),
            )?);
        }

        let mut members = Vec::with_capacity(raw.members.len());
        for member in &raw.members {
            members.push(self.member(member, &params)?);
        }

        Ok(TypeDeclaration {
            name: raw.name.clone(),
            kind,
            base,
            interfaces,
            all_interfaces: Vec::new(),
            members,
        })
    }

    fn member(&mut self, raw: &RawMember, params: &Params) -> Result<MemberSymbol, SymbolError> {
        Ok(MemberSymbol {
            name: raw.name.clone(),
            ty: self.type_ref(&raw.ty, params)?,
            attributes: raw.attributes.iter().map(attribute).collect(),
        })
    }

    fn named(
        &mut self,
        raw: &RawTypeRef,
        params: &Params,
        context: &str,
    ) -> Result<NamedType, SymbolError> {
        match self.type_ref(raw, params)? {
            TypeRef::Named(named) => Ok(named),
            TypeRef::Array(_) => Err(SymbolError::NotANamedType {
                context: context.to_string(),
            }),
        }
    }

    pub fn type_ref(&mut self, raw: &RawTypeRef, params: &Params) -> Result<TypeRef, SymbolError> {
        match raw {
            RawTypeRef::Simple(name) => self.named_ref(&RawNamedRef::simple(name), params),
            RawTypeRef::Array { array } => Ok(TypeRef::array(self.type_ref(array, params)?)),
            RawTypeRef::Param { param } => {
                params
                    .get(param)
                    .cloned()
                    .ok_or_else(|| SymbolError::UnknownTypeParameter {
                        param: param.clone(),
                    })
            }
            RawTypeRef::Named(named) => self.named_ref(named, params),
        }
    }

    fn named_ref(&mut self, raw: &RawNamedRef, params: &Params) -> Result<TypeRef, SymbolError> {
        let mut args = Vec::with_capacity(raw.args.len());
        for arg in &raw.args {
            args.push(self.type_ref(arg, params)?);
        }

        if args.is_empty() && raw.is_bare() {
            // Type parameters shadow every other name in scope.
            if let Some(param) = params.get(&raw.name) {
                return Ok(param.clone());
            }
            if let Some(builtin) = NamedType::builtin(&raw.name) {
                return Ok(builtin.into());
            }
        }

        if let Some(kind) = self.declared.kind_of(&raw.name) {
            return Ok(NamedType::source(&raw.name, kind).with_args(args).into());
        }

        let mut named = NamedType::external(&raw.name, TypeKind::Class);
        self.apply_catalog(&mut named, &args)?;
        named.type_args = args;

        if let Some(kind) = raw.kind {
            named.kind = kind.into();
        }
        if let Some(tag) = &raw.special {
            named.special =
                SpecialType::from_tag(tag).ok_or_else(|| SymbolError::UnknownSpecialType {
                    tag: tag.clone(),
                    type_name: raw.name.clone(),
                })?;
        }
        if let Some(interfaces) = &raw.interfaces {
            named.interfaces = interfaces
                .iter()
                .map(|i| self.type_ref(i, params))
                .collect::<Result<_, _>>()?;
        }

        Ok(named.into())
    }

    fn apply_catalog(&mut self, named: &mut NamedType, args: &[TypeRef]) -> Result<(), SymbolError> {
        let catalog = self.catalog;
        let Some(entry) = catalog.get(&named.name, args.len()) else {
            return Ok(());
        };
        named.kind = entry.kind;
        named.special = entry.special;

        let key = (named.name.clone(), args.len());
        // Re-entry through a type argument (`T : IComparable<T>`) stops at the
        // shallow type. Re-entry through an interface list is a cycle and is
        // rejected below.
        if self.instantiating.contains(&key) {
            return Ok(());
        }

        let bound: Params = entry
            .type_parameters
            .iter()
            .cloned()
            .zip(args.iter().cloned())
            .collect();

        self.instantiating.push(key);
        let interfaces = entry
            .interfaces
            .iter()
            .map(|i| self.catalog_interface(i, &bound))
            .collect::<Result<Vec<_>, _>>();
        self.instantiating.pop();

        named.interfaces = interfaces?;
        Ok(())
    }

    fn catalog_interface(&mut self, raw: &RawTypeRef, bound: &Params) -> Result<TypeRef, SymbolError> {
        let head = match raw {
            RawTypeRef::Simple(name) => Some((name.as_str(), 0)),
            RawTypeRef::Named(named) => Some((named.name.as_str(), named.args.len())),
            RawTypeRef::Array { .. } | RawTypeRef::Param { .. } => None,
        };
        if let Some((name, arity)) = head
            && self
                .instantiating
                .iter()
                .any(|(n, a)| n.as_str() == name && *a == arity)
        {
            return Err(SymbolError::CyclicInheritance {
                name: name.to_string(),
            });
        }
        self.type_ref(raw, bound)
    }
}

fn enum_declaration(raw: &RawEnumDecl) -> EnumDeclaration {
    EnumDeclaration {
        name: raw.name.clone(),
        members: raw
            .members
            .iter()
            .map(|m| EnumMemberSymbol {
                name: m.name.clone(),
                value: m.value,
            })
            .collect(),
    }
}

fn attribute(raw: &RawAttribute) -> Attribute {
    Attribute {
        name: raw.name.clone(),
        positional: raw.args.iter().map(attribute_value).collect(),
        named: raw
            .named
            .iter()
            .map(|(k, v)| (k.clone(), attribute_value(v)))
            .collect(),
    }
}
