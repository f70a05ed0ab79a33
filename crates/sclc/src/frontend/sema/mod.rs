//! Semantic analysis module
//!
//! Validates declared names: identifier grammar, uniqueness and the
//! cross-language reserved set.

mod reserved;
mod scope;

pub use reserved::is_reserved;
pub use scope::{Scope, Symbol, SymbolKind};

use log::debug;

use crate::common::{CompileError, CompileResult, LineContext};

/// Suffix of the size constant a composite input claims
pub const SIZE_SUFFIX: &str = "Size";

/// Whether `name` matches `[A-Za-z_][A-Za-z0-9_]*`
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

/// Name checker for one SCL program
#[derive(Debug, Default)]
pub struct SemanticAnalyzer {
    scope: Scope,
}

impl SemanticAnalyzer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare an input name. Composites also claim `<name>Size`.
    pub fn declare(&mut self, name: &str, composite: bool, context: &LineContext) -> CompileResult<()> {
        if !is_identifier(name) {
            return Err(CompileError::syntax(
                format!("`{}` is not a valid identifier", name),
                context.clone(),
            ));
        }
        self.define(name, SymbolKind::Input, context)?;
        if is_reserved(name) {
            return Err(CompileError::reserved_word(name, context.clone()));
        }
        if composite {
            let size_name = format!("{}{}", name, SIZE_SUFFIX);
            self.define(&size_name, SymbolKind::SizeConstant, context)?;
        }
        Ok(())
    }

    fn define(&mut self, name: &str, kind: SymbolKind, context: &LineContext) -> CompileResult<()> {
        let symbol = Symbol {
            name: name.to_string(),
            kind,
            line: context.line,
        };
        self.scope.define(symbol).map_err(|reason| {
            debug!("{}", reason);
            CompileError::duplicate_name(name, context.clone())
        })
    }

    pub fn scope(&self) -> &Scope {
        &self.scope
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::{ErrorKind, Span};

    fn line(n: usize) -> LineContext {
        LineContext::new(n, "", Span::default())
    }

    #[test]
    fn test_identifier_grammar() {
        assert!(is_identifier("nums"));
        assert!(is_identifier("_x1"));
        assert!(!is_identifier("1x"));
        assert!(!is_identifier("a-b"));
        assert!(!is_identifier(""));
    }

    #[test]
    fn test_duplicate_name() {
        let mut analyzer = SemanticAnalyzer::new();
        analyzer.declare("a", false, &line(1)).unwrap();
        let err = analyzer.declare("a", false, &line(2)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DuplicateName);
    }

    #[test]
    fn test_composite_claims_size_constant() {
        let mut analyzer = SemanticAnalyzer::new();
        analyzer.declare("nums", true, &line(1)).unwrap();
        assert_eq!(
            analyzer.scope().lookup("numsSize").map(|s| s.kind),
            Some(SymbolKind::SizeConstant)
        );
        let err = analyzer.declare("numsSize", false, &line(2)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DuplicateName);
    }

    #[test]
    fn test_reserved_word() {
        let mut analyzer = SemanticAnalyzer::new();
        let err = analyzer.declare("class", false, &line(1)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ReservedWord);
    }
}
