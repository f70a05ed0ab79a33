//! SCL frontend
//!
//! The frontend is responsible for:
//! 1. Upgrading the legacy dialect when asked to
//! 2. Lexing each line into tokens
//! 3. Parsing and validating declarations
//! 4. Producing the shared `ParsedScl` IR

pub mod legacy;
pub mod lexer;
pub mod parser;
pub mod sema;

use std::borrow::Cow;
use std::fmt::Write;

use log::{debug, info};

use crate::common::{CompileResult, DiagnosticReporter};
use crate::ir::ParsedScl;

pub use lexer::{Lexer, Token, TokenKind};
pub use parser::Parser;
pub use sema::SemanticAnalyzer;

/// Configuration options passed to the frontend
#[derive(Debug, Clone, Default)]
pub struct FrontendConfig {
    pub dump_tokens: bool,
    pub dump_ir: bool,
    pub verbose: bool,
    /// Accept `return -> <name>` lines from the older dialect
    pub legacy_dialect: bool,
}

/// Compilation context providing access to diagnostics and file info
pub struct CompileContext<'a> {
    pub filename: String,
    pub file_id: usize,
    pub reporter: &'a DiagnosticReporter,
}

impl<'a> CompileContext<'a> {
    pub fn new(filename: String, file_id: usize, reporter: &'a DiagnosticReporter) -> Self {
        Self {
            filename,
            file_id,
            reporter,
        }
    }
}

/// Parse canonical SCL without diagnostics or dumps
pub fn parse(source: &str) -> CompileResult<ParsedScl> {
    Parser::new(source).parse()
}

/// The SCL frontend
pub struct SclFrontend;

impl SclFrontend {
    pub fn new() -> Self {
        Self
    }

    /// Run the whole frontend, reporting the first error through `ctx`
    pub fn compile(&self, source: &str, ctx: &CompileContext, config: &FrontendConfig) -> CompileResult<ParsedScl> {
        let result = self.compile_inner(source, ctx, config);
        if let Err(e) = &result {
            ctx.reporter.report_error(ctx.file_id, e);
        }
        result
    }

    fn compile_inner(&self, source: &str, ctx: &CompileContext, config: &FrontendConfig) -> CompileResult<ParsedScl> {
        let source = if config.legacy_dialect {
            debug!("upgrading legacy dialect in {}", ctx.filename);
            Cow::Owned(legacy::upgrade(source)?)
        } else {
            Cow::Borrowed(source)
        };

        if config.dump_tokens {
            eprintln!("=== SCL Tokens ===");
            eprint!("{}", self.dump_tokens(&source)?);
            eprintln!("=== End Tokens ===\n");
        }

        if config.verbose {
            info!("parsing {}", ctx.filename);
        }
        let parsed = parse(&source)?;

        if config.dump_ir {
            eprintln!("=== IR ===");
            eprintln!("{}", parsed);
            eprintln!("=== End IR ===\n");
        }

        Ok(parsed)
    }

    /// Token listing, one significant line per row
    pub fn dump_tokens(&self, source: &str) -> CompileResult<String> {
        let mut output = String::new();
        for context in parser::source_lines(source) {
            if parser::is_ignored(&context.content) {
                continue;
            }
            let tokens = Lexer::new(&context.content, &context).tokenize_all()?;
            let _ = write!(output, "{:>4}:", context.line);
            for token in &tokens {
                let _ = write!(output, " {:?}@{}..{}", token.kind, token.span.start, token.span.end);
            }
            output.push('\n');
        }
        Ok(output)
    }

    pub fn dump_ir(&self, source: &str) -> CompileResult<String> {
        Ok(parse(source)?.to_string())
    }
}

impl Default for SclFrontend {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dump_tokens_skips_comments() {
        let dump = SclFrontend::new().dump_tokens("# c\ninteger -> a").unwrap();
        assert_eq!(dump.lines().count(), 1);
        assert!(dump.starts_with("   2: Word(\"integer\")@4..11 Arrow@12..14"));
    }

    #[test]
    fn test_legacy_dialect_through_frontend() {
        let reporter = DiagnosticReporter::new();
        let ctx = CompileContext::new("legacy.scl".to_string(), 0, &reporter);
        let config = FrontendConfig {
            legacy_dialect: true,
            ..FrontendConfig::default()
        };
        let parsed = SclFrontend::new()
            .compile("string -> s\nreturn -> s", &ctx, &config)
            .unwrap();
        assert_eq!(parsed.returns().to_string(), "string");
    }
}
