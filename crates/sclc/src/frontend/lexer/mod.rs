//! Lexer module for tokenizing SCL lines

mod scanner;
mod token;

pub use scanner::Lexer;
pub use token::{Token, TokenKind};
