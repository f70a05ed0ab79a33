//! Token definitions for the SCL lexer

use std::fmt;

use crate::common::Span;
use logos::Logos;

/// Token with source location
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Text of a word token
    pub fn word(&self) -> Option<&str> {
        match &self.kind {
            TokenKind::Word(text) => Some(text),
            _ => None,
        }
    }
}

/// All token kinds in SCL.
///
/// A word runs until whitespace or the start of an arrow, so `integer->a`
/// lexes as three tokens while `-1` stays a single word.
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\r\f]+")]
pub enum TokenKind {
    #[token("->")]
    Arrow,

    #[regex(r"([^ \t\r\n\f\-]|-[^ \t\r\n\f>])+", |lex| lex.slice().to_string())]
    Word(String),

    Eol,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Arrow => write!(f, "`->`"),
            TokenKind::Word(text) => write!(f, "`{}`", text),
            TokenKind::Eol => write!(f, "end of line"),
        }
    }
}
