//! Enum member values.

use typebridge_core::EnumDeclaration;

/// An enum member with its assigned value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnumValue {
    pub name: String,
    pub value: i64,
}

/// Assign values in declaration order.
///
/// A running counter starts at 0. An explicit value is taken as-is and resets
/// the counter to one past it; other members take the counter. Duplicate
/// values are kept.
pub fn assign_values(decl: &EnumDeclaration) -> Vec<EnumValue> {
    let mut next: i64 = 0;
    decl.members
        .iter()
        .map(|member| {
            let value = member.value.unwrap_or(next);
            next = value.wrapping_add(1);
            EnumValue {
                name: member.name.clone(),
                value,
            }
        })
        .collect()
}
