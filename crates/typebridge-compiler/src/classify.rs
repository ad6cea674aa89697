//! Shape classification of resolved source types.
//!
//! [`classify`] maps every [`TypeRef`] to exactly one [`ResolvedType`]; there
//! is no error path. Types no rule recognizes degrade to
//! [`ResolvedType::Fallback`], which renders as `any`.

use typebridge_core::{NamedType, SpecialType, TypeRef};

/// Built-in primitive family.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PrimitiveKind {
    Boolean,
    /// Integral, floating and decimal types.
    Number,
    /// Single character; rendered as a number.
    Char,
    String,
    /// The universal base object type.
    Any,
}

impl PrimitiveKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
            Self::Number | Self::Char => "number",
            Self::String => "string",
            Self::Any => "any",
        }
    }
}

/// Key type of an index signature.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IndexKey {
    String,
    Number,
}

impl IndexKey {
    /// Index key for a dictionary key type, if it has one.
    pub fn of(key: &TypeRef) -> Option<Self> {
        let special = key.as_named()?.special;
        if special == SpecialType::String {
            Some(Self::String)
        } else if special.is_numeric() {
            Some(Self::Number)
        } else {
            None
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
        }
    }
}

/// The shape a source type falls into for mapping purposes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResolvedType {
    Primitive(PrimitiveKind),
    Array(Box<ResolvedType>),
    /// List, set, collection and enumerable shapes with one type argument.
    GenericCollection(Box<ResolvedType>),
    Dictionary {
        key: IndexKey,
        value: Box<ResolvedType>,
    },
    /// A named type. Only types declared in the processed source set
    /// classify this way.
    Named { name: String, has_source: bool },
    Fallback,
}

impl ResolvedType {
    /// Whether this renders as plain `any`.
    pub fn is_any(&self) -> bool {
        matches!(self, Self::Fallback | Self::Primitive(PrimitiveKind::Any))
    }

    /// TypeScript type expression.
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.render_into(&mut out);
        out
    }

    fn render_into(&self, out: &mut String) {
        match self {
            Self::Primitive(kind) => out.push_str(kind.as_str()),
            Self::Array(element) | Self::GenericCollection(element) => {
                element.render_into(out);
                out.push_str("[]");
            }
            Self::Dictionary { key, value } => {
                out.push_str("{ [key: ");
                out.push_str(key.as_str());
                out.push_str("]: ");
                value.render_into(out);
                out.push_str("; }");
            }
            Self::Named { name, .. } => out.push_str(name),
            Self::Fallback => out.push_str("any"),
        }
    }
}

/// Classify a resolved type. First matching rule wins.
pub fn classify(ty: &TypeRef) -> ResolvedType {
    match ty {
        TypeRef::Array(element) => ResolvedType::Array(Box::new(classify(element))),
        TypeRef::Named(named) => classify_named(named),
    }
}

fn classify_named(named: &NamedType) -> ResolvedType {
    if let Some(dictionary) = dictionary(named) {
        return dictionary;
    }

    if let Some(primitive) = primitive(named.special) {
        return primitive;
    }

    if named.special.is_generic_collection()
        && let [element] = named.type_args.as_slice()
    {
        return ResolvedType::GenericCollection(Box::new(classify(element)));
    }

    if named.has_source {
        return ResolvedType::Named {
            name: named.name.clone(),
            has_source: true,
        };
    }

    // Unknown external type: the first interface with a known shape decides.
    let through_interface = named
        .interfaces
        .iter()
        .map(classify)
        .find(|resolved| !resolved.is_any());
    match through_interface {
        Some(resolved) => {
            tracing::trace!(ty = %named.name, via = %resolved.render(), "classified through interface");
            resolved
        }
        None => {
            tracing::trace!(ty = %named.name, "no shape matched, falling back to any");
            ResolvedType::Fallback
        }
    }
}

/// Dictionary shape with a string or numeric key. Other keys fall through.
fn dictionary(named: &NamedType) -> Option<ResolvedType> {
    if named.special != SpecialType::GenericDictionary {
        return None;
    }
    let [key, value] = named.type_args.as_slice() else {
        return None;
    };
    Some(ResolvedType::Dictionary {
        key: IndexKey::of(key)?,
        value: Box::new(classify(value)),
    })
}

fn primitive(special: SpecialType) -> Option<ResolvedType> {
    let kind = match special {
        SpecialType::Boolean => PrimitiveKind::Boolean,
        SpecialType::Char => PrimitiveKind::Char,
        s if s.is_numeric() => PrimitiveKind::Number,
        SpecialType::String => PrimitiveKind::String,
        SpecialType::Object => PrimitiveKind::Any,
        SpecialType::Enumerable => {
            return Some(ResolvedType::Array(Box::new(ResolvedType::Primitive(
                PrimitiveKind::Any,
            ))));
        }
        _ => return None,
    };
    Some(ResolvedType::Primitive(kind))
}
