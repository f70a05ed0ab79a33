//! Judge error taxonomy
//!
//! Dispatch failures are kept apart from compile failures: the first is
//! fixed by resubmitting, the second by fixing the SCL or the program.

use scl_toolchain::CompileError;
use thiserror::Error;

use crate::sandbox::SandboxError;

#[derive(Error, Debug)]
pub enum JudgeError {
    #[error(transparent)]
    Compile(#[from] CompileError),

    #[error("test case {case_no}: {message}")]
    InvalidTestCase { case_no: usize, message: String },

    #[error("dispatch of test case {case_no} failed: {source}")]
    Dispatch {
        case_no: usize,
        #[source]
        source: SandboxError,
    },

    #[error("test case {case_no} was cancelled")]
    Cancelled { case_no: usize },

    #[error("configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Coarse classification used to pick a remediation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JudgeErrorKind {
    Compile,
    InvalidTestCase,
    Dispatch,
    Cancelled,
    Config,
    Io,
}

impl JudgeError {
    pub fn invalid_test_case(case_no: usize, message: impl Into<String>) -> Self {
        Self::InvalidTestCase {
            case_no,
            message: message.into(),
        }
    }

    pub fn kind(&self) -> JudgeErrorKind {
        match self {
            Self::Compile(_) => JudgeErrorKind::Compile,
            Self::InvalidTestCase { .. } => JudgeErrorKind::InvalidTestCase,
            Self::Dispatch { .. } => JudgeErrorKind::Dispatch,
            Self::Cancelled { .. } => JudgeErrorKind::Cancelled,
            Self::Config(_) => JudgeErrorKind::Config,
            Self::Io(_) | Self::Json(_) => JudgeErrorKind::Io,
        }
    }

    /// Whether resubmitting the same program may succeed
    pub fn is_retryable(&self) -> bool {
        matches!(self.kind(), JudgeErrorKind::Dispatch | JudgeErrorKind::Cancelled)
    }
}

pub type JudgeResult<T> = Result<T, JudgeError>;
