//! Indent-aware source text writer and per-generation context

use crate::common::CompileResult;
use crate::ir::ParsedScl;
use crate::types::{AbstractType, OutputRule, ScalarType, TargetLanguage, TypeRegistry, fill};

/// What the emitted unit will be used for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmitMode {
    /// Prelude and stub only, shown to candidates as starter code
    Starter,
    /// Stub plus a stdin-driven harness
    Harness,
    /// Stub plus inlined test-case literals
    Materialized,
}

/// Accumulates generated source one line at a time
#[derive(Debug, Clone)]
pub struct SourceWriter {
    buffer: String,
    depth: usize,
    unit: &'static str,
}

impl SourceWriter {
    pub fn new(unit: &'static str) -> Self {
        Self {
            buffer: String::new(),
            depth: 0,
            unit,
        }
    }

    /// Write one line at the current indentation
    pub fn line(&mut self, text: impl AsRef<str>) {
        let text = text.as_ref();
        if !text.is_empty() {
            for _ in 0..self.depth {
                self.buffer.push_str(self.unit);
            }
            self.buffer.push_str(text);
        }
        self.buffer.push('\n');
    }

    /// Write a multi-line block, indenting every non-empty line
    pub fn lines(&mut self, text: &str) {
        for line in text.lines() {
            self.line(line.trim_end());
        }
    }

    pub fn blank(&mut self) {
        if !self.buffer.is_empty() && !self.buffer.ends_with("\n\n") {
            self.buffer.push('\n');
        }
    }

    pub fn indent(&mut self) {
        self.depth += 1;
    }

    pub fn dedent(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    pub fn finish(self) -> String {
        self.buffer
    }
}

/// Everything a backend consults while emitting one unit
#[derive(Debug, Clone, Copy)]
pub struct EmitContext<'a> {
    pub parsed: &'a ParsedScl,
    pub registry: &'a TypeRegistry,
    pub language: TargetLanguage,
    pub mode: EmitMode,
}

impl<'a> EmitContext<'a> {
    pub fn new(parsed: &'a ParsedScl, registry: &'a TypeRegistry, language: TargetLanguage, mode: EmitMode) -> Self {
        Self {
            parsed,
            registry,
            language,
            mode,
        }
    }

    pub fn native(&self, ty: &AbstractType) -> CompileResult<String> {
        self.registry.native(ty, self.language)
    }

    pub fn generic(&self, scalar: ScalarType) -> CompileResult<&'static str> {
        self.registry.generic(scalar, self.language)
    }

    pub fn default_value(&self, ty: &AbstractType) -> CompileResult<String> {
        self.registry.default_value(ty, self.language)
    }

    pub fn parse(&self, scalar: ScalarType, token: &str) -> CompileResult<String> {
        self.registry.parse_expr(scalar, self.language, token)
    }

    /// Parse expression for a scalar-typed value
    pub fn parse_scalar(&self, ty: &AbstractType, token: &str) -> CompileResult<String> {
        let binding = self.registry.lookup(ty.kind(), self.language)?;
        Ok(fill(binding.parse, token))
    }

    /// Format expression for a scalar-typed value
    pub fn format_scalar(&self, ty: &AbstractType, value: &str) -> CompileResult<String> {
        match self.registry.lookup(ty.kind(), self.language)?.output {
            OutputRule::Format(template) => Ok(fill(template, value)),
            OutputRule::Joined { .. } => Ok(value.to_string()),
        }
    }

    pub fn collect(&self, ty: &AbstractType, sequence: &str) -> CompileResult<String> {
        self.registry.collect_expr(ty, self.language, sequence)
    }

    pub fn format(&self, scalar: ScalarType, value: &str) -> CompileResult<String> {
        self.registry.format_expr(scalar, self.language, value)
    }

    pub fn delimiter(&self, ty: &AbstractType) -> CompileResult<&'static str> {
        self.registry.delimiter(ty, self.language)
    }

    pub fn returns(&self) -> &'a AbstractType {
        &self.parsed.return_type.ty
    }

    pub fn is_harness(&self) -> bool {
        self.mode == EmitMode::Harness
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_writer_indentation() {
        let mut out = SourceWriter::new("  ");
        out.line("a {");
        out.indent();
        out.lines("b\n\nc  ");
        out.dedent();
        out.line("}");
        assert_eq!(out.finish(), "a {\n  b\n\n  c\n}\n");
    }

    #[test]
    fn test_blank_never_doubles() {
        let mut out = SourceWriter::new("    ");
        out.blank();
        out.line("x");
        out.blank();
        out.blank();
        out.line("y");
        assert_eq!(out.finish(), "x\n\ny\n");
    }
}
