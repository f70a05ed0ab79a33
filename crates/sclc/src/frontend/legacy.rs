//! Adapter for the older SCL dialect.
//!
//! The older dialect names the return by pointing at a declared input
//! (`return -> result`), taking that input's type as the return type. The
//! adapter rewrites such lines into the canonical `<type> -> return` form
//! (`<kind> -> <element> return` for composites) and leaves every other line
//! untouched, so line numbers in later diagnostics still match the input.

use std::collections::HashMap;

use log::debug;

use super::lexer::{Lexer, TokenKind};
use super::parser::{RETURN_SENTINEL, is_ignored, source_lines};
use crate::common::{CompileError, CompileResult};
use crate::types::TypeKind;

/// Type tokens of an input, as written
struct Declared {
    type_token: String,
    element_token: Option<String>,
}

/// Rewrite a legacy-dialect program into the canonical dialect
pub fn upgrade(source: &str) -> CompileResult<String> {
    let mut declared: HashMap<String, Declared> = HashMap::new();
    let mut lines = Vec::new();

    for context in source_lines(source) {
        if is_ignored(&context.content) {
            lines.push(context.content);
            continue;
        }

        let tokens = Lexer::new(&context.content, &context).tokenize_all()?;
        let words: Vec<Option<&str>> = tokens
            .iter()
            .filter(|token| token.kind != TokenKind::Eol)
            .map(|token| token.word())
            .collect();

        match words[..] {
            [Some(RETURN_SENTINEL), None, Some(name)] => {
                let Some(input) = declared.get(name) else {
                    return Err(CompileError::return_not_found(
                        format!("`return -> {}` names no declared input", name),
                        Some(context.clone()),
                    ));
                };
                let rewritten = match &input.element_token {
                    Some(element) => format!("{} -> {} {}", input.type_token, element, RETURN_SENTINEL),
                    None => format!("{} -> {}", input.type_token, RETURN_SENTINEL),
                };
                debug!("legacy line {}: `{}` => `{}`", context.line, context.content, rewritten);
                lines.push(rewritten);
                continue;
            }
            [Some(type_token), None, Some(name)] => {
                declared.insert(
                    name.to_string(),
                    Declared {
                        type_token: type_token.to_string(),
                        element_token: None,
                    },
                );
            }
            [Some(type_token), None, Some(element), Some(name), ..]
                if TypeKind::from_token(type_token).is_some_and(TypeKind::is_composite) =>
            {
                declared.insert(
                    name.to_string(),
                    Declared {
                        type_token: type_token.to_string(),
                        element_token: Some(element.to_string()),
                    },
                );
            }
            // Anything else is left for the canonical parser to report
            _ => {}
        }
        lines.push(context.content);
    }

    Ok(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::ErrorKind;
    use crate::frontend::parser::Parser;
    use crate::types::{AbstractType, ScalarType};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_scalar_return_by_name() {
        let upgraded = upgrade("integer -> a\nlong -> total\nreturn -> total").unwrap();
        assert_eq!(upgraded, "integer -> a\nlong -> total\nlong -> return");
    }

    #[test]
    fn test_composite_return_by_name() {
        let upgraded = upgrade("# pairs\narray -> integer nums 4\nreturn -> nums").unwrap();
        assert_eq!(upgraded, "# pairs\narray -> integer nums 4\narray -> integer return");
        let parsed = Parser::new(&upgraded).parse().unwrap();
        assert_eq!(*parsed.returns(), AbstractType::Array(ScalarType::Integer));
    }

    #[test]
    fn test_unknown_return_name() {
        let err = upgrade("integer -> a\nreturn -> b").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ReturnNotFound);
        assert_eq!(err.context().unwrap().line, 2);
    }

    #[test]
    fn test_canonical_source_is_unchanged() {
        let source = "integer -> a\ninteger -> return";
        assert_eq!(upgrade(source).unwrap(), source);
    }
}
