//! Error types and diagnostic reporting

use codespan_reporting::diagnostic::{Diagnostic, Label};
use codespan_reporting::files::SimpleFiles;
use codespan_reporting::term;
use codespan_reporting::term::termcolor::{ColorChoice, StandardStream};
use thiserror::Error;
use super::LineContext;

/// Error raised while parsing SCL or generating code from it
#[derive(Error, Debug)]
pub enum CompileError {
    #[error("syntax error at {context}: {message}")]
    Syntax { message: String, context: LineContext },

    #[error("unknown type `{name}` at {context}")]
    UnknownType { name: String, context: LineContext },

    #[error("duplicate return declaration at {context}")]
    DuplicateReturn { context: LineContext },

    #[error("return not found: {message}")]
    ReturnNotFound {
        message: String,
        context: Option<LineContext>,
    },

    #[error("`{name}` is already declared ({context})")]
    DuplicateName { name: String, context: LineContext },

    #[error("`{name}` is a reserved word ({context})")]
    ReservedWord { name: String, context: LineContext },

    #[error("invalid size `{value}` at {context}: expected a non-negative integer")]
    InvalidSize { value: String, context: LineContext },

    #[error("unsupported language: {language}")]
    UnsupportedLanguage { language: String },

    #[error("no `{language}` binding for type `{type_name}`")]
    MissingBinding { type_name: String, language: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Discriminant of [`CompileError`], for callers that branch on the kind only
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Syntax,
    UnknownType,
    DuplicateReturn,
    ReturnNotFound,
    DuplicateName,
    ReservedWord,
    InvalidSize,
    UnsupportedLanguage,
    MissingBinding,
    Io,
}

impl CompileError {
    pub fn syntax(message: impl Into<String>, context: LineContext) -> Self {
        Self::Syntax {
            message: message.into(),
            context,
        }
    }

    pub fn unknown_type(name: impl Into<String>, context: LineContext) -> Self {
        Self::UnknownType {
            name: name.into(),
            context,
        }
    }

    pub fn duplicate_name(name: impl Into<String>, context: LineContext) -> Self {
        Self::DuplicateName {
            name: name.into(),
            context,
        }
    }

    pub fn reserved_word(name: impl Into<String>, context: LineContext) -> Self {
        Self::ReservedWord {
            name: name.into(),
            context,
        }
    }

    pub fn invalid_size(value: impl Into<String>, context: LineContext) -> Self {
        Self::InvalidSize {
            value: value.into(),
            context,
        }
    }

    pub fn return_not_found(message: impl Into<String>, context: Option<LineContext>) -> Self {
        Self::ReturnNotFound {
            message: message.into(),
            context,
        }
    }

    pub fn unsupported_language(language: impl Into<String>) -> Self {
        Self::UnsupportedLanguage {
            language: language.into(),
        }
    }

    pub fn missing_binding(type_name: impl Into<String>, language: impl Into<String>) -> Self {
        Self::MissingBinding {
            type_name: type_name.into(),
            language: language.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Syntax { .. } => ErrorKind::Syntax,
            Self::UnknownType { .. } => ErrorKind::UnknownType,
            Self::DuplicateReturn { .. } => ErrorKind::DuplicateReturn,
            Self::ReturnNotFound { .. } => ErrorKind::ReturnNotFound,
            Self::DuplicateName { .. } => ErrorKind::DuplicateName,
            Self::ReservedWord { .. } => ErrorKind::ReservedWord,
            Self::InvalidSize { .. } => ErrorKind::InvalidSize,
            Self::UnsupportedLanguage { .. } => ErrorKind::UnsupportedLanguage,
            Self::MissingBinding { .. } => ErrorKind::MissingBinding,
            Self::Io(_) => ErrorKind::Io,
        }
    }

    /// The offending source line, for errors raised by the parser
    pub fn context(&self) -> Option<&LineContext> {
        match self {
            Self::Syntax { context, .. }
            | Self::UnknownType { context, .. }
            | Self::DuplicateReturn { context }
            | Self::DuplicateName { context, .. }
            | Self::ReservedWord { context, .. }
            | Self::InvalidSize { context, .. } => Some(context),
            Self::ReturnNotFound { context, .. } => context.as_ref(),
            _ => None,
        }
    }
}

pub type CompileResult<T> = Result<T, CompileError>;

/// Diagnostic reporter for pretty error output
pub struct DiagnosticReporter {
    files: SimpleFiles<String, String>,
    writer: StandardStream,
    config: term::Config,
}

impl DiagnosticReporter {
    pub fn new() -> Self {
        Self {
            files: SimpleFiles::new(),
            writer: StandardStream::stderr(ColorChoice::Auto),
            config: term::Config::default(),
        }
    }

    pub fn add_file(&mut self, name: impl Into<String>, source: impl Into<String>) -> usize {
        self.files.add(name.into(), source.into())
    }

    pub fn report_error(&self, file_id: usize, error: &CompileError) {
        let title = match error.kind() {
            ErrorKind::Syntax => "syntax error",
            ErrorKind::UnknownType => "unknown type",
            ErrorKind::DuplicateReturn => "duplicate return",
            ErrorKind::ReturnNotFound => "return not found",
            ErrorKind::DuplicateName => "duplicate name",
            ErrorKind::ReservedWord => "reserved word",
            ErrorKind::InvalidSize => "invalid size",
            ErrorKind::UnsupportedLanguage => "unsupported language",
            ErrorKind::MissingBinding => "missing type binding",
            ErrorKind::Io => "IO error",
        };

        let diagnostic = match error.context() {
            Some(context) => Diagnostic::error()
                .with_message(title)
                .with_labels(vec![
                    Label::primary(file_id, context.span.start..context.span.end)
                        .with_message(error.to_string()),
                ]),
            None => Diagnostic::error().with_message(format!("{}: {}", title, error)),
        };

        let _ = term::emit(&mut self.writer.lock(), &self.config, &self.files, &diagnostic);
    }
}

impl Default for DiagnosticReporter {
    fn default() -> Self {
        Self::new()
    }
}
