//! Source locations

use std::fmt;

/// Byte range into the SCL source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Shift a line-relative span into source coordinates
    pub fn offset(self, base: usize) -> Self {
        Self::new(self.start + base, self.end + base)
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// The source line a diagnostic refers to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineContext {
    /// 1-based line number, counting blank and comment lines
    pub line: usize,
    /// The line exactly as written
    pub content: String,
    /// Byte range of the line (or of the offending token) in the source
    pub span: Span,
}

impl LineContext {
    pub fn new(line: usize, content: impl Into<String>, span: Span) -> Self {
        Self {
            line,
            content: content.into(),
            span,
        }
    }

    /// Narrow the context to a token within the line
    pub fn with_span(&self, span: Span) -> Self {
        Self {
            line: self.line,
            content: self.content.clone(),
            span,
        }
    }
}

impl fmt::Display for LineContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {} (`{}`)", self.line, self.content.trim())
    }
}
