//! Declared-name table

use std::collections::HashMap;

/// How a name entered the scope
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolKind {
    Input,
    /// The `<name>Size` constant that travels with a composite input
    SizeConstant,
}

/// A declared name and the line that introduced it
#[derive(Debug, Clone)]
pub struct Symbol {
    pub name: String,
    pub kind: SymbolKind,
    pub line: usize,
}

/// Flat scope of every name an SCL program declares
#[derive(Debug, Default)]
pub struct Scope {
    symbols: HashMap<String, Symbol>,
}

impl Scope {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn define(&mut self, symbol: Symbol) -> Result<(), String> {
        if let Some(existing) = self.symbols.get(&symbol.name) {
            return Err(format!(
                "symbol '{}' already defined on line {}",
                symbol.name, existing.line
            ));
        }
        self.symbols.insert(symbol.name.clone(), symbol);
        Ok(())
    }

    pub fn lookup(&self, name: &str) -> Option<&Symbol> {
        self.symbols.get(name)
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}
