//! Drives emission over every source unit of a symbol provider.

use std::io;
use std::path::Path;

use typebridge_core::{JsonSymbolProvider, SymbolProvider};

use crate::Result;
use crate::typegen::typescript::{Config, Emitter};

/// Output file suffixes that select declaration mode.
const DECLARATION_SUFFIXES: &[&str] = &[".d.ts", ".d.mts", ".d.cts"];

/// Whether `path` names a TypeScript declaration file.
pub fn is_declaration_file(path: &Path) -> bool {
    path.file_name()
        .map(|name| name.to_string_lossy())
        .is_some_and(|name| DECLARATION_SUFFIXES.iter().any(|s| name.ends_with(s)))
}

/// Emits every declaration of every unit, in unit and declaration order.
pub struct Processor<P: SymbolProvider> {
    provider: P,
    config: Config,
}

impl<P: SymbolProvider> Processor<P> {
    pub fn new(provider: P, config: Config) -> Self {
        Self { provider, config }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Write all blocks to `out`.
    ///
    /// Each block is written before the next one is rendered, so on failure
    /// the blocks before the failing declaration are already in `out`.
    pub fn write<W: io::Write>(&self, out: &mut W) -> Result<()> {
        self.for_each_block(|block| {
            out.write_all(block.as_bytes())?;
            Ok(())
        })?;
        out.flush()?;
        Ok(())
    }

    /// Emit all blocks into a string.
    pub fn emit_to_string(&self) -> Result<String> {
        let mut output = String::new();
        self.for_each_block(|block| {
            output.push_str(block);
            Ok(())
        })?;
        Ok(output)
    }

    fn for_each_block(&self, mut sink: impl FnMut(&str) -> Result<()>) -> Result<()> {
        let mut emitter = Emitter::new(self.config.clone());
        for unit in self.provider.units() {
            tracing::debug!(unit = %unit.name, declarations = unit.declarations.len(), "emitting unit");
            for declaration in &unit.declarations {
                tracing::trace!(name = declaration.name(), kind = ?declaration.kind(), "emitting declaration");
                sink(emitter.emit(declaration)?)?;
            }
        }
        Ok(())
    }
}

impl Processor<JsonSymbolProvider> {
    /// Load symbol dumps and reference catalogs from disk.
    pub fn load<Q: AsRef<Path>>(inputs: &[Q], references: &[Q], config: Config) -> Result<Self> {
        let provider = JsonSymbolProvider::load(inputs, references)?;
        Ok(Self::new(provider, config))
    }
}
