//! Line-oriented SCL parser
//!
//! Each significant line is `<type> -> <rhs>`. Scalars take a bare name on
//! the right, composites take `<element> <name> [size]`, and the return line
//! uses the `return` sentinel in place of the name. The first failing line
//! aborts the whole parse.

use log::debug;

use super::lexer::{Lexer, Token, TokenKind};
use super::sema::SemanticAnalyzer;
use crate::common::{CompileError, CompileResult, LineContext, Span};
use crate::ir::{InputDeclaration, ParsedScl, ReturnDeclaration};
use crate::types::{AbstractType, ScalarType, TypeKind};

/// Right-hand-side word marking the return declaration
pub const RETURN_SENTINEL: &str = "return";

/// Split source into lines with their 1-based numbers and byte spans
pub fn source_lines(source: &str) -> Vec<LineContext> {
    let mut lines = Vec::new();
    let mut offset = 0;
    for (index, raw) in source.split('\n').enumerate() {
        let content = raw.strip_suffix('\r').unwrap_or(raw);
        lines.push(LineContext::new(
            index + 1,
            content,
            Span::new(offset, offset + content.len()),
        ));
        offset += raw.len() + 1;
    }
    lines
}

/// Blank and `#` comment lines carry no declaration
pub fn is_ignored(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty() || trimmed.starts_with('#')
}

/// A word token paired with its span
type Word<'t> = (&'t str, Span);

/// Parser for one SCL program
pub struct Parser<'a> {
    source: &'a str,
    analyzer: SemanticAnalyzer,
    inputs: Vec<InputDeclaration>,
    return_type: Option<ReturnDeclaration>,
}

impl<'a> Parser<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            analyzer: SemanticAnalyzer::new(),
            inputs: Vec::new(),
            return_type: None,
        }
    }

    pub fn parse(mut self) -> CompileResult<ParsedScl> {
        for context in source_lines(self.source) {
            if is_ignored(&context.content) {
                continue;
            }
            self.parse_line(&context)?;
        }

        match self.return_type {
            Some(return_type) => Ok(ParsedScl::new(self.inputs, return_type)),
            None => Err(CompileError::return_not_found(
                "no `return` declaration in program",
                None,
            )),
        }
    }

    fn parse_line(&mut self, context: &LineContext) -> CompileResult<()> {
        let tokens = Lexer::new(&context.content, context).tokenize_all()?;

        // 1. exactly one separator
        let arrows: Vec<usize> = tokens
            .iter()
            .enumerate()
            .filter(|(_, token)| token.kind == TokenKind::Arrow)
            .map(|(index, _)| index)
            .collect();
        let [arrow] = arrows[..] else {
            return Err(CompileError::syntax(
                format!("expected exactly one `->` separator, found {}", arrows.len()),
                context.clone(),
            ));
        };
        let lhs = words(&tokens[..arrow]);
        let rhs = words(&tokens[arrow + 1..]);

        // 2. registered type
        let (type_token, type_span) = match lhs[..] {
            [word] => word,
            [] => return Err(CompileError::syntax("missing type before `->`", context.clone())),
            _ => {
                return Err(CompileError::syntax(
                    "expected a single type before `->`",
                    context.clone(),
                ));
            }
        };
        let kind = TypeKind::from_token(type_token)
            .ok_or_else(|| CompileError::unknown_type(type_token, context.with_span(type_span)))?;

        match kind.scalar() {
            Some(scalar) => self.parse_scalar(scalar, &rhs, context),
            None => self.parse_composite(kind, &rhs, context),
        }
    }

    fn parse_scalar(&mut self, scalar: ScalarType, rhs: &[Word<'_>], context: &LineContext) -> CompileResult<()> {
        let ty = AbstractType::Scalar(scalar);
        match rhs {
            [(RETURN_SENTINEL, _)] => self.set_return(ty, context),
            [(name, _)] => self.add_input(name, ty, None, context),
            [] => Err(CompileError::syntax("missing name after `->`", context.clone())),
            _ => Err(CompileError::syntax(
                format!("`{}` declarations take a single name", scalar),
                context.clone(),
            )),
        }
    }

    fn parse_composite(&mut self, kind: TypeKind, rhs: &[Word<'_>], context: &LineContext) -> CompileResult<()> {
        let (element_token, element_span) = match rhs {
            [] | [(RETURN_SENTINEL, _)] => {
                return Err(CompileError::syntax(
                    format!("`{}` needs an element type: `{} -> <element> <name> [size]`", kind, kind),
                    context.clone(),
                ));
            }
            [_] => {
                return Err(CompileError::syntax(
                    format!("`{}` declarations need `<element> <name> [size]`", kind),
                    context.clone(),
                ));
            }
            [word, ..] => *word,
        };
        let element = TypeKind::from_token(element_token)
            .and_then(TypeKind::scalar)
            .ok_or_else(|| CompileError::unknown_type(element_token, context.with_span(element_span)))?;
        let ty = AbstractType::composite(kind, element)
            .ok_or_else(|| CompileError::unknown_type(kind.name(), context.clone()))?;

        match rhs[1..] {
            [(RETURN_SENTINEL, _)] => self.set_return(ty, context),
            [(name, _)] => self.add_input(name, ty, None, context),
            [(name, _), (size, size_span)] => {
                self.analyzer.declare(name, true, context)?;
                let size = size
                    .parse::<u64>()
                    .map_err(|_| CompileError::invalid_size(size, context.with_span(size_span)))?;
                self.push_input(name, ty, Some(size));
                Ok(())
            }
            _ => Err(CompileError::syntax(
                format!("`{}` declarations need `<element> <name> [size]`", kind),
                context.clone(),
            )),
        }
    }

    fn add_input(&mut self, name: &str, ty: AbstractType, size: Option<u64>, context: &LineContext) -> CompileResult<()> {
        self.analyzer.declare(name, ty.is_composite(), context)?;
        self.push_input(name, ty, size);
        Ok(())
    }

    fn push_input(&mut self, name: &str, ty: AbstractType, size: Option<u64>) {
        debug!("input #{} `{}`: {}", self.inputs.len(), name, ty);
        self.inputs.push(InputDeclaration::new(name, ty, size));
    }

    fn set_return(&mut self, ty: AbstractType, context: &LineContext) -> CompileResult<()> {
        if self.return_type.is_some() {
            return Err(CompileError::DuplicateReturn {
                context: context.clone(),
            });
        }
        debug!("return type: {}", ty);
        self.return_type = Some(ReturnDeclaration { ty });
        Ok(())
    }
}

fn words(tokens: &[Token]) -> Vec<Word<'_>> {
    tokens
        .iter()
        .filter_map(|token| token.word().map(|text| (text, token.span)))
        .collect()
}
