//! TypeScript declaration emitter.
//!
//! Renders one text block per source declaration: an interface for classes,
//! structs and interfaces, an enum for enums. Blocks end with a blank line.

mod config;
mod emitter;
mod render;


pub use config::{AmbientEnums, Config};
pub use emitter::Emitter;

use typebridge_core::Declaration;

use crate::Result;

/// Emit one declaration with the default config.
pub fn emit(declaration: &Declaration) -> Result<String> {
    emit_with_config(declaration, Config::default())
}

/// Emit one declaration with a custom config.
pub fn emit_with_config(declaration: &Declaration, config: Config) -> Result<String> {
    let mut emitter = Emitter::new(config);
    emitter.emit(declaration)?;
    Ok(emitter.into_output())
}
