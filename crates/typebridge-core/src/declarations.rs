//! Declarations supplied per source unit.

use indexmap::IndexMap;

use crate::types::{NamedType, TypeKind, TypeRef};

/// Typed constant value of an attribute argument.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AttributeValue {
    String(String),
    Int(i64),
    Bool(bool),
    Null,
    /// Any other constant (floating point, arrays, type operands).
    Other,
}

impl AttributeValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }
}

/// Attribute data attached to a member.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Attribute {
    /// Attribute class name, e.g. `JsonPropertyAttribute`.
    pub name: String,
    /// Positional constructor arguments.
    pub positional: Vec<AttributeValue>,
    /// Named arguments in declaration order.
    pub named: IndexMap<String, AttributeValue>,
}

impl Attribute {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn positional(mut self, value: AttributeValue) -> Self {
        self.positional.push(value);
        self
    }

    pub fn named(mut self, key: impl Into<String>, value: AttributeValue) -> Self {
        self.named.insert(key.into(), value);
        self
    }

    /// Whether this is the attribute `name`, written with or without the
    /// `Attribute` suffix.
    pub fn is(&self, name: &str) -> bool {
        fn short(s: &str) -> &str {
            s.strip_suffix("Attribute").unwrap_or(s)
        }
        short(&self.name) == short(name)
    }
}

/// A field or property.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MemberSymbol {
    pub name: String,
    pub ty: TypeRef,
    pub attributes: Vec<Attribute>,
}

impl MemberSymbol {
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
            attributes: Vec::new(),
        }
    }

    pub fn with_attribute(mut self, attribute: Attribute) -> Self {
        self.attributes.push(attribute);
        self
    }
}

/// A class, struct or interface declaration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeDeclaration {
    pub name: String,
    pub kind: TypeKind,
    pub base: Option<NamedType>,
    /// Directly declared interfaces.
    pub interfaces: Vec<NamedType>,
    /// Transitive interface set, including those inherited from the base.
    pub all_interfaces: Vec<NamedType>,
    pub members: Vec<MemberSymbol>,
}

impl TypeDeclaration {
    pub fn new(name: impl Into<String>, kind: TypeKind) -> Self {
        Self {
            name: name.into(),
            kind,
            base: None,
            interfaces: Vec::new(),
            all_interfaces: Vec::new(),
            members: Vec::new(),
        }
    }

    pub fn with_base(mut self, base: NamedType) -> Self {
        self.base = Some(base);
        self
    }

    /// Add a direct interface. It is also appended to the transitive set.
    pub fn with_interface(mut self, interface: NamedType) -> Self {
        self.all_interfaces.push(interface.clone());
        self.interfaces.push(interface);
        self
    }

    /// Replace the transitive interface set.
    pub fn with_all_interfaces(mut self, interfaces: Vec<NamedType>) -> Self {
        self.all_interfaces = interfaces;
        self
    }

    pub fn with_member(mut self, member: MemberSymbol) -> Self {
        self.members.push(member);
        self
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnumMemberSymbol {
    pub name: String,
    /// Evaluated constant of an explicit initializer.
    pub value: Option<i64>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnumDeclaration {
    pub name: String,
    pub members: Vec<EnumMemberSymbol>,
}

impl EnumDeclaration {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            members: Vec::new(),
        }
    }

    pub fn with_member(mut self, name: impl Into<String>, value: Option<i64>) -> Self {
        self.members.push(EnumMemberSymbol {
            name: name.into(),
            value,
        });
        self
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Declaration {
    Type(TypeDeclaration),
    Enum(EnumDeclaration),
}

impl Declaration {
    pub fn name(&self) -> &str {
        match self {
            Self::Type(decl) => &decl.name,
            Self::Enum(decl) => &decl.name,
        }
    }

    pub fn kind(&self) -> TypeKind {
        match self {
            Self::Type(decl) => decl.kind,
            Self::Enum(_) => TypeKind::Enum,
        }
    }
}

impl From<TypeDeclaration> for Declaration {
    fn from(decl: TypeDeclaration) -> Self {
        Self::Type(decl)
    }
}

impl From<EnumDeclaration> for Declaration {
    fn from(decl: EnumDeclaration) -> Self {
        Self::Enum(decl)
    }
}

/// Declarations of one input file, in source order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SourceUnit {
    pub name: String,
    pub declarations: Vec<Declaration>,
}

impl SourceUnit {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            declarations: Vec::new(),
        }
    }

    pub fn with(mut self, declaration: impl Into<Declaration>) -> Self {
        self.declarations.push(declaration.into());
        self
    }
}
