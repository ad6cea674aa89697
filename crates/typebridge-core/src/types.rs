//! Resolved source types as handed over by the symbol provider.
//!
//! A [`TypeRef`] is the fully resolved form of a type occurrence: array shape,
//! special-type tag, generic arguments, and whether the named type is declared
//! in the set of units being processed.

/// Special-type tag of a named type (or of its generic definition).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SpecialType {
    #[default]
    None,
    Object,
    Boolean,
    Char,
    SByte,
    Byte,
    Int16,
    UInt16,
    Int32,
    UInt32,
    Int64,
    UInt64,
    Decimal,
    Single,
    Double,
    String,
    /// Legacy non-generic enumerable.
    Enumerable,
    GenericEnumerable,
    GenericCollection,
    GenericReadOnlyCollection,
    GenericList,
    GenericReadOnlyList,
    GenericSet,
    /// Single-key-single-value associative interface.
    GenericDictionary,
}

impl SpecialType {
    /// Integral, floating, decimal and single-character types.
    pub fn is_numeric(self) -> bool {
        matches!(
            self,
            Self::Char
                | Self::SByte
                | Self::Byte
                | Self::Int16
                | Self::UInt16
                | Self::Int32
                | Self::UInt32
                | Self::Int64
                | Self::UInt64
                | Self::Decimal
                | Self::Single
                | Self::Double
        )
    }

    /// Generic definitions with a single element type argument.
    pub fn is_generic_collection(self) -> bool {
        matches!(
            self,
            Self::GenericEnumerable
                | Self::GenericCollection
                | Self::GenericReadOnlyCollection
                | Self::GenericList
                | Self::GenericReadOnlyList
                | Self::GenericSet
        )
    }

    /// Parse the snake_case tag used in symbol dumps and catalogs.
    pub fn from_tag(tag: &str) -> Option<Self> {
        let special = match tag {
            "none" => Self::None,
            "object" => Self::Object,
            "boolean" => Self::Boolean,
            "char" => Self::Char,
            "sbyte" => Self::SByte,
            "byte" => Self::Byte,
            "int16" => Self::Int16,
            "uint16" => Self::UInt16,
            "int32" => Self::Int32,
            "uint32" => Self::UInt32,
            "int64" => Self::Int64,
            "uint64" => Self::UInt64,
            "decimal" => Self::Decimal,
            "single" => Self::Single,
            "double" => Self::Double,
            "string" => Self::String,
            "enumerable" => Self::Enumerable,
            "generic_enumerable" => Self::GenericEnumerable,
            "generic_collection" => Self::GenericCollection,
            "generic_read_only_collection" => Self::GenericReadOnlyCollection,
            "generic_list" => Self::GenericList,
            "generic_read_only_list" => Self::GenericReadOnlyList,
            "generic_set" => Self::GenericSet,
            "generic_dictionary" => Self::GenericDictionary,
            _ => return None,
        };
        Some(special)
    }
}

/// Declaration kind of a named type.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TypeKind {
    #[default]
    Class,
    Struct,
    Interface,
    Enum,
    /// Generic type parameter of a source declaration. Neither a reference
    /// nor a value type until constrained, so it is never optional.
    TypeParameter,
}

impl TypeKind {
    pub fn is_reference_type(self) -> bool {
        matches!(self, Self::Class | Self::Interface)
    }
}

/// A named type occurrence, with its generic arguments applied.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct NamedType {
    /// Declared name without generic arity or namespace.
    pub name: String,
    pub kind: TypeKind,
    pub special: SpecialType,
    pub type_args: Vec<TypeRef>,
    /// Declared in one of the units being processed.
    pub has_source: bool,
    /// Transitive interfaces of an external type, in resolver order.
    ///
    /// Empty for source types; those relationships live in the declaration
    /// arena and are looked up by name.
    pub interfaces: Vec<TypeRef>,
}

impl NamedType {
    /// An external (library) type with no special tag.
    pub fn external(name: impl Into<String>, kind: TypeKind) -> Self {
        Self {
            name: name.into(),
            kind,
            special: SpecialType::None,
            type_args: Vec::new(),
            has_source: false,
            interfaces: Vec::new(),
        }
    }

    /// A type declared in the processed source set.
    pub fn source(name: impl Into<String>, kind: TypeKind) -> Self {
        Self {
            has_source: true,
            ..Self::external(name, kind)
        }
    }

    pub fn with_special(mut self, special: SpecialType) -> Self {
        self.special = special;
        self
    }

    pub fn with_args(mut self, args: impl IntoIterator<Item = TypeRef>) -> Self {
        self.type_args = args.into_iter().collect();
        self
    }

    pub fn with_interfaces(mut self, interfaces: impl IntoIterator<Item = TypeRef>) -> Self {
        self.interfaces = interfaces.into_iter().collect();
        self
    }

    /// The built-in type for a keyword alias or system name, if any.
    pub fn builtin(name: &str) -> Option<Self> {
        let (name, special, kind) = match name {
            "bool" | "Boolean" => ("Boolean", SpecialType::Boolean, TypeKind::Struct),
            "char" | "Char" => ("Char", SpecialType::Char, TypeKind::Struct),
            "sbyte" | "SByte" => ("SByte", SpecialType::SByte, TypeKind::Struct),
            "byte" | "Byte" => ("Byte", SpecialType::Byte, TypeKind::Struct),
            "short" | "Int16" => ("Int16", SpecialType::Int16, TypeKind::Struct),
            "ushort" | "UInt16" => ("UInt16", SpecialType::UInt16, TypeKind::Struct),
            "int" | "Int32" => ("Int32", SpecialType::Int32, TypeKind::Struct),
            "uint" | "UInt32" => ("UInt32", SpecialType::UInt32, TypeKind::Struct),
            "long" | "Int64" => ("Int64", SpecialType::Int64, TypeKind::Struct),
            "ulong" | "UInt64" => ("UInt64", SpecialType::UInt64, TypeKind::Struct),
            "decimal" | "Decimal" => ("Decimal", SpecialType::Decimal, TypeKind::Struct),
            "float" | "Single" => ("Single", SpecialType::Single, TypeKind::Struct),
            "double" | "Double" => ("Double", SpecialType::Double, TypeKind::Struct),
            "string" | "String" => ("String", SpecialType::String, TypeKind::Class),
            "object" | "Object" => ("Object", SpecialType::Object, TypeKind::Class),
            _ => return None,
        };
        Some(Self::external(name, kind).with_special(special))
    }
}

/// A resolved type occurrence.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum TypeRef {
    Array(Box<TypeRef>),
    Named(NamedType),
}

impl TypeRef {
    pub fn array(element: TypeRef) -> Self {
        Self::Array(Box::new(element))
    }

    /// Built-in type by keyword alias or system name.
    ///
    /// Unknown names become an external class with no interfaces.
    pub fn builtin(name: &str) -> Self {
        match NamedType::builtin(name) {
            Some(named) => Self::Named(named),
            None => Self::Named(NamedType::external(name, TypeKind::Class)),
        }
    }

    /// Whether values of this type are references in the source type system.
    pub fn is_reference_type(&self) -> bool {
        match self {
            Self::Array(_) => true,
            Self::Named(named) => named.kind.is_reference_type(),
        }
    }

    pub fn as_named(&self) -> Option<&NamedType> {
        match self {
            Self::Named(named) => Some(named),
            Self::Array(_) => None,
        }
    }
}

impl From<NamedType> for TypeRef {
    fn from(named: NamedType) -> Self {
        Self::Named(named)
    }
}
