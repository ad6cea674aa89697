//! Core emitter struct and per-declaration dispatch.

use typebridge_core::Declaration;

use super::Config;
use crate::Result;

/// TypeScript emitter for resolved declarations.
///
/// The output buffer holds one block at a time; [`Emitter::emit`] replaces it.
pub struct Emitter {
    pub(super) config: Config,
    /// Output buffer
    pub(super) output: String,
}

impl Emitter {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            output: String::new(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Render `declaration` as a block and return it.
    pub fn emit(&mut self, declaration: &Declaration) -> Result<&str> {
        self.output.clear();
        match declaration {
            Declaration::Type(decl) => self.emit_interface(decl),
            Declaration::Enum(decl) => self.emit_enum(decl)?,
        }
        Ok(&self.output)
    }

    /// The last rendered block.
    pub fn into_output(self) -> String {
        self.output
    }
}
