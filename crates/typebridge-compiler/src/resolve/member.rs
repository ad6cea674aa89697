//! Member names and optionality.

use typebridge_core::{Attribute, AttributeValue, MemberSymbol};

use crate::classify::{ResolvedType, classify};

/// Annotations that override a member's emitted name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenameAnnotation {
    /// Serialization contract member, named argument `Name`.
    DataMember,
    /// Lightweight property annotation, first positional argument.
    JsonProperty,
}

impl RenameAnnotation {
    /// Highest precedence first.
    pub const PRECEDENCE: [RenameAnnotation; 2] = [Self::DataMember, Self::JsonProperty];

    pub fn attribute_name(self) -> &'static str {
        match self {
            Self::DataMember => "DataMember",
            Self::JsonProperty => "JsonProperty",
        }
    }

    /// The override name carried by `attribute`. Only string values count.
    pub fn extract(self, attribute: &Attribute) -> Option<&str> {
        let value = match self {
            Self::DataMember => attribute.named.get("Name"),
            Self::JsonProperty => attribute.positional.first(),
        };
        value.and_then(AttributeValue::as_str)
    }
}

/// A member ready for emission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MemberDeclaration {
    pub declared_name: String,
    pub ty: ResolvedType,
    pub is_reference_type: bool,
    /// Rename overrides present on the member, in precedence order.
    pub rename_overrides: Vec<(RenameAnnotation, String)>,
}

impl MemberDeclaration {
    pub fn from_symbol(symbol: &MemberSymbol) -> Self {
        let rename_overrides = RenameAnnotation::PRECEDENCE
            .iter()
            .filter_map(|&annotation| {
                // Only the first attribute of each annotation is consulted.
                let attribute = symbol
                    .attributes
                    .iter()
                    .find(|a| a.is(annotation.attribute_name()))?;
                let name = annotation.extract(attribute)?;
                Some((annotation, name.to_string()))
            })
            .collect();

        Self {
            declared_name: symbol.name.clone(),
            ty: classify(&symbol.ty),
            is_reference_type: symbol.ty.is_reference_type(),
            rename_overrides,
        }
    }

    /// Emitted name: the highest-precedence override, else the declared name.
    pub fn resolve_name(&self) -> &str {
        self.rename_overrides
            .first()
            .map_or(self.declared_name.as_str(), |(_, name)| name.as_str())
    }

    /// Reference-typed members are optional; value types never are.
    pub fn is_optional(&self) -> bool {
        self.is_reference_type
    }
}
