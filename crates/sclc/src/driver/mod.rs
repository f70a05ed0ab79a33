//! Compilation driver and pipeline orchestration

use log::{debug, warn};

use crate::backend::{BackendRegistry, GenerateOptions};
use crate::common::{CompileResult, DiagnosticReporter};
use crate::frontend::{CompileContext, FrontendConfig, SclFrontend};
use crate::ir::ParsedScl;
use crate::types::{RegistryOptions, TargetLanguage, TypeRegistry};

/// Pipeline that coordinates the frontend, the type registry and backends
pub struct Pipeline {
    frontend: SclFrontend,
    registry: TypeRegistry,
    backends: BackendRegistry,
}

impl Pipeline {
    /// Standard pipeline; fails if the type registry is incomplete
    pub fn new(options: RegistryOptions) -> CompileResult<Self> {
        Ok(Self {
            frontend: SclFrontend::new(),
            registry: TypeRegistry::with_options(options)?,
            backends: BackendRegistry::standard(),
        })
    }

    pub fn with_parts(registry: TypeRegistry, backends: BackendRegistry) -> Self {
        Self {
            frontend: SclFrontend::new(),
            registry,
            backends,
        }
    }

    pub fn registry(&self) -> &TypeRegistry {
        &self.registry
    }

    pub fn backends(&self) -> &BackendRegistry {
        &self.backends
    }

    /// Parse SCL source, reporting the first error as a diagnostic
    pub fn compile_source(
        &self,
        source: &str,
        filename: &str,
        config: &FrontendConfig,
        reporter: &DiagnosticReporter,
        file_id: usize,
    ) -> CompileResult<ParsedScl> {
        let ctx = CompileContext::new(filename.to_string(), file_id, reporter);
        self.frontend.compile(source, &ctx, config)
    }

    /// Generate source for one language
    pub fn generate(
        &self,
        parsed: &ParsedScl,
        language: TargetLanguage,
        options: GenerateOptions,
    ) -> CompileResult<String> {
        debug!("generating {} (stub only: {})", language, options.stub_only);
        self.backends.generate(parsed, &self.registry, language, options)
    }

    /// Generate source for several languages. Each language succeeds or
    /// fails on its own.
    pub fn generate_each(
        &self,
        parsed: &ParsedScl,
        languages: &[TargetLanguage],
        options: GenerateOptions,
    ) -> Vec<(TargetLanguage, CompileResult<String>)> {
        languages
            .iter()
            .map(|&language| {
                let result = self.generate(parsed, language, options);
                if let Err(e) = &result {
                    warn!("{}: {}", language, e);
                }
                (language, result)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::PythonBackend;
    use crate::common::ErrorKind;
    use crate::frontend::parse;

    #[test]
    fn test_missing_backend_fails_only_that_language() {
        let mut backends = BackendRegistry::new();
        backends.register(Box::new(PythonBackend));
        let pipeline = Pipeline::with_parts(TypeRegistry::standard().unwrap(), backends);
        let parsed = parse("integer -> a\ninteger -> return").unwrap();

        let results = pipeline.generate_each(
            &parsed,
            &[TargetLanguage::Go, TargetLanguage::Python],
            GenerateOptions::default(),
        );
        assert_eq!(results[0].1.as_ref().unwrap_err().kind(), ErrorKind::UnsupportedLanguage);
        assert!(results[1].1.as_ref().unwrap().contains("def execute(a: int) -> int:"));
    }

    #[test]
    fn test_compile_source_reports_errors() {
        let pipeline = Pipeline::new(RegistryOptions::default()).unwrap();
        let mut reporter = DiagnosticReporter::new();
        let source = "integer a";
        let file_id = reporter.add_file("bad.scl", source);
        let err = pipeline
            .compile_source(source, "bad.scl", &FrontendConfig::default(), &reporter, file_id)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Syntax);
    }
}
