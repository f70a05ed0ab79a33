//! Type registry
//!
//! Abstract SCL types, the supported target languages and the per-language
//! bindings (native name, parse template, default value, output rule) that
//! every backend draws from.

mod abstract_type;
mod language;
mod registry;
mod table;

pub use abstract_type::{AbstractType, ScalarType, TypeKind};
pub use language::TargetLanguage;
pub use registry::{OutputRule, RegistryOptions, TypeBinding, TypeRegistry, fill};
