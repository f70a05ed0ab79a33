//! Lexer implementation using logos

use super::token::{Token, TokenKind};
use crate::common::{CompileError, CompileResult, LineContext, Span};
use logos::Logos;

/// Lexer for a single SCL line.
///
/// Spans are reported in source coordinates using the line's base offset.
pub struct Lexer<'a> {
    inner: logos::Lexer<'a, TokenKind>,
    context: &'a LineContext,
    base: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(line: &'a str, context: &'a LineContext) -> Self {
        Self {
            inner: TokenKind::lexer(line),
            context,
            base: context.span.start,
        }
    }

    /// Get the next token, or `Eol` once the line is exhausted
    pub fn next_token(&mut self) -> CompileResult<Token> {
        match self.inner.next() {
            Some(Ok(kind)) => Ok(Token::new(kind, self.span())),
            Some(Err(())) => Err(CompileError::syntax(
                format!("unexpected character '{}'", self.inner.slice()),
                self.context.with_span(self.span()),
            )),
            None => {
                let len = self.inner.source().len();
                Ok(Token::new(TokenKind::Eol, Span::new(len, len).offset(self.base)))
            }
        }
    }

    /// Tokenize the whole line; the result always ends with `Eol`
    pub fn tokenize_all(mut self) -> CompileResult<Vec<Token>> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            let is_eol = matches!(token.kind, TokenKind::Eol);
            tokens.push(token);
            if is_eol {
                break;
            }
        }
        Ok(tokens)
    }

    fn span(&self) -> Span {
        let span = self.inner.span();
        Span::new(span.start, span.end).offset(self.base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex(line: &str) -> Vec<TokenKind> {
        let context = LineContext::new(1, line, Span::new(0, line.len()));
        Lexer::new(line, &context)
            .tokenize_all()
            .unwrap()
            .into_iter()
            .map(|t| t.kind)
            .collect()
    }

    fn word(text: &str) -> TokenKind {
        TokenKind::Word(text.to_string())
    }

    #[test]
    fn test_arrow_without_spaces() {
        assert_eq!(
            lex("integer->a"),
            vec![word("integer"), TokenKind::Arrow, word("a"), TokenKind::Eol]
        );
    }

    #[test]
    fn test_composite_triple() {
        assert_eq!(
            lex("array -> integer nums 4"),
            vec![
                word("array"),
                TokenKind::Arrow,
                word("integer"),
                word("nums"),
                word("4"),
                TokenKind::Eol
            ]
        );
    }

    #[test]
    fn test_negative_size_is_one_word() {
        assert_eq!(lex("-1"), vec![word("-1"), TokenKind::Eol]);
    }

    #[test]
    fn test_spans_are_offset() {
        let line = "integer -> a";
        let context = LineContext::new(3, line, Span::new(20, 32));
        let tokens = Lexer::new(line, &context).tokenize_all().unwrap();
        assert_eq!(tokens[1].span, Span::new(28, 30));
    }

    #[test]
    fn test_dangling_dash_is_an_error() {
        let line = "integer -";
        let context = LineContext::new(1, line, Span::new(0, line.len()));
        assert!(Lexer::new(line, &context).tokenize_all().is_err());
    }
}
