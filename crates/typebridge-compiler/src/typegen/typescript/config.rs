//! Configuration types for TypeScript emission.

/// What to do with an enum while emitting ambient declarations.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AmbientEnums {
    /// Fail with `Error::EnumInDeclarationMode`.
    #[default]
    Reject,
    /// Emit `declare enum Name { .. }`.
    Declare,
}

/// Configuration for TypeScript emission.
#[derive(Clone, Debug, Default)]
pub struct Config {
    /// Emit ambient (`declare`) declarations instead of exports
    pub(crate) declaration_mode: bool,
    /// Enum handling in declaration mode
    pub(crate) ambient_enums: AmbientEnums,
}

impl Config {
    /// Create a new Config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether to emit ambient declarations.
    pub fn declaration_mode(mut self, value: bool) -> Self {
        self.declaration_mode = value;
        self
    }

    /// Set how enums are handled in declaration mode.
    pub fn ambient_enums(mut self, value: AmbientEnums) -> Self {
        self.ambient_enums = value;
        self
    }

    pub fn is_declaration_mode(&self) -> bool {
        self.declaration_mode
    }

    /// Keyword opening every declaration block.
    pub(super) fn visibility(&self) -> &'static str {
        if self.declaration_mode {
            "declare"
        } else {
            "export"
        }
    }
}
