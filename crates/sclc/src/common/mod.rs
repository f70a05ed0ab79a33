//! Common infrastructure shared across the frontend and backends

mod error;
mod span;

pub use error::{CompileError, CompileResult, DiagnosticReporter, ErrorKind};
pub use span::{LineContext, Span};
