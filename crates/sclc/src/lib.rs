//! SCL Toolchain - parser and multi-language code generator for the
//! Structured Call Language
//!
//! SCL describes a judged problem's function signature (typed parameters
//! and a return type) independently of any programming language.
//!
//! ## Architecture
//!
//! The toolchain is organized into:
//! - **Frontend** (`frontend/`): Lexing, parsing and name validation
//! - **IR** (`ir/`): The validated `ParsedScl` program
//! - **Backends** (`backend/`): One code generator per target language
//! - **Types** (`types/`): Abstract types and the per-language binding registry
//! - **Common** (`common/`): Shared infrastructure (errors, spans)

pub mod backend;
pub mod common;
pub mod driver;
pub mod frontend;
pub mod ir;
pub mod types;

// Re-exports for convenience
pub use backend::{Backend, BackendRegistry, GenerateOptions};
pub use common::{CompileError, CompileResult, DiagnosticReporter, ErrorKind, Span};
pub use driver::Pipeline;
pub use frontend::{CompileContext, FrontendConfig, SclFrontend, parse};
pub use ir::{InputDeclaration, ParsedScl, ReturnDeclaration};
pub use types::{AbstractType, RegistryOptions, ScalarType, TargetLanguage, TypeRegistry};
