//! The symbol provider seam.

use crate::declarations::SourceUnit;

/// Supplies resolved declarations, one [`SourceUnit`] per input.
///
/// Parsing and symbol resolution happen behind this trait; the generator
/// only reads what it returns.
pub trait SymbolProvider {
    fn units(&self) -> &[SourceUnit];
}

/// Provider over units built in memory.
#[derive(Clone, Debug, Default)]
pub struct InMemoryProvider {
    units: Vec<SourceUnit>,
}

impl InMemoryProvider {
    pub fn new(units: Vec<SourceUnit>) -> Self {
        Self { units }
    }

    pub fn push(&mut self, unit: SourceUnit) {
        self.units.push(unit);
    }
}

impl SymbolProvider for InMemoryProvider {
    fn units(&self) -> &[SourceUnit] {
        &self.units
    }
}

impl<P: SymbolProvider + ?Sized> SymbolProvider for &P {
    fn units(&self) -> &[SourceUnit] {
        (**self).units()
    }
}
