//! External compile-and-run sandbox
//!
//! The sandbox is a collaborator behind [`SandboxClient`]; the judge only
//! submits programs and correlates the handles it gets back.

mod http;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

pub use http::HttpSandboxClient;

/// One program for the sandbox to compile and run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionRequest {
    pub code: String,
    /// Target language id (`python`, `cpp`, ...)
    pub language: String,
}

/// What the sandbox answered for one submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionHandle {
    pub status: u16,
    /// Response body, as JSON when the sandbox sent JSON
    pub body: Value,
}

#[derive(Error, Debug)]
pub enum SandboxError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("sandbox answered {status}: {body}")]
    Rejected { status: u16, body: String },

    /// The submitting task died before reporting back
    #[error("submission task failed: {0}")]
    TaskFailed(String),
}

#[async_trait]
pub trait SandboxClient: Send + Sync {
    async fn submit(&self, request: &SubmissionRequest) -> Result<SubmissionHandle, SandboxError>;
}
