//! SCL judge - turns a candidate solution and its test cases into
//! self-contained programs and submits them to a sandbox
//!
//! ## Architecture
//!
//! - **Cases** (`case`, `literal`): Test-case loading and value decoding
//! - **Materializer** (`materialize/`): One runnable program per test case,
//!   built on the `scl_toolchain` backends
//! - **Sandbox** (`sandbox/`): The compile-and-run service client
//! - **Dispatch** (`dispatch`): Bounded, cancellable concurrent submission

pub mod case;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod literal;
pub mod materialize;
pub mod sandbox;

pub use case::{TestCase, load_cases, parse_cases};
pub use config::{JudgeConfig, SandboxConfig};
pub use dispatch::{CancelHandle, CancelToken, DispatchOutcome, Dispatcher, cancellation};
pub use error::{JudgeError, JudgeErrorKind, JudgeResult};
pub use materialize::{MaterializeSyntax, MaterializedCase, Materializer, SyntaxRegistry};
pub use sandbox::{HttpSandboxClient, SandboxClient, SandboxError, SubmissionHandle, SubmissionRequest};
