//! Backend trait and implementations
//!
//! Backends are responsible for:
//! 1. Declaring the `execute` stub with registry-bound native types
//! 2. Decoding raw input tokens into native values
//! 3. Rendering the result as a single output line
//!
//! Each target language is one implementing type, registered in a
//! [`BackendRegistry`] keyed by [`TargetLanguage`].

pub mod cpp;
pub mod csharp;
pub mod emit;
pub mod go;
pub mod java;
pub mod javascript;
pub mod php;
pub mod python;
pub mod r;
pub mod swift;
pub mod typescript;

use std::collections::HashMap;

use log::debug;

use crate::common::{CompileError, CompileResult};
use crate::ir::ParsedScl;
use crate::types::{AbstractType, ScalarType, TargetLanguage, TypeRegistry};

pub use cpp::CppBackend;
pub use csharp::CSharpBackend;
pub use emit::{EmitContext, EmitMode, SourceWriter};
pub use go::GoBackend;
pub use java::JavaBackend;
pub use javascript::JavaScriptBackend;
pub use php::PhpBackend;
pub use python::PythonBackend;
pub use r::RBackend;
pub use swift::SwiftBackend;
pub use typescript::TypeScriptBackend;

/// Name of the generated stub every harness calls
pub const ENTRY_POINT: &str = "execute";

/// Variable holding the stub's return value
pub const RESULT_VAR: &str = "result";

/// Placeholder comment written into an empty stub
pub const PLACEHOLDER: &str = "Write your code here";

/// Configuration options for generation
#[derive(Debug, Clone, Copy, Default)]
pub struct GenerateOptions {
    /// Emit only imports and the stub (starter code)
    pub stub_only: bool,
}

/// Trait for code generation backends
///
/// Required methods cover what genuinely differs between languages; the
/// provided methods assemble them into a complete unit.
pub trait Backend: Send + Sync {
    fn language(&self) -> TargetLanguage;

    /// Indentation unit of the language's conventional style
    fn indent_unit(&self) -> &'static str {
        "    "
    }

    /// Imports, package lines and other file headers
    fn emit_imports(&self, ctx: &EmitContext, out: &mut SourceWriter) -> CompileResult<()>;

    /// Top-level helper functions the harness relies on
    fn emit_helpers(&self, _ctx: &EmitContext, _out: &mut SourceWriter) -> CompileResult<()> {
        Ok(())
    }

    /// Open the enclosing class, for languages that need one
    fn open_unit(&self, _out: &mut SourceWriter) {}

    fn close_unit(&self, _out: &mut SourceWriter) {}

    /// Documentation emitted directly above the stub
    fn emit_stub_doc(&self, _ctx: &EmitContext, _out: &mut SourceWriter) -> CompileResult<()> {
        Ok(())
    }

    /// The line opening the `execute` stub
    fn signature(&self, ctx: &EmitContext) -> CompileResult<String>;

    /// The line closing a block, `None` for indentation-scoped languages
    fn block_end(&self) -> Option<&'static str> {
        Some("}")
    }

    fn comment(&self, text: &str) -> String {
        format!("// {}", text)
    }

    fn return_stmt(&self, value: &str) -> String {
        format!("return {};", value)
    }

    /// How a declared name is spelled when referenced
    fn variable(&self, name: &str) -> String {
        name.to_string()
    }

    /// Expression for the `index`-th raw input token
    fn token_expr(&self, index: usize) -> String;

    /// Expression yielding the decoded elements of a composite token, in
    /// the shape the registry's collect template expects
    fn sequence_expr(
        &self,
        ctx: &EmitContext,
        ty: &AbstractType,
        element: ScalarType,
        token: &str,
    ) -> CompileResult<String>;

    /// Expression joining a composite value into one output line
    fn join_expr(&self, ctx: &EmitContext, ty: &AbstractType, element: ScalarType, value: &str) -> CompileResult<String>;

    /// Statement declaring `name` of type `ty` initialised to `value`
    fn declare(&self, ctx: &EmitContext, name: &str, ty: &AbstractType, value: &str) -> CompileResult<String>;

    fn print_stmt(&self, expr: &str) -> String;

    /// Open the entry point of the harness
    fn open_main(&self, out: &mut SourceWriter);

    fn close_main(&self, out: &mut SourceWriter) {
        out.dedent();
        if let Some(end) = self.block_end() {
            out.line(end);
        }
    }

    /// Statements filling the raw input vector from stdin
    fn emit_read_input(&self, out: &mut SourceWriter);

    /// Expression converting a raw token into a value of `ty`
    fn decode_expr(&self, ctx: &EmitContext, ty: &AbstractType, token: &str) -> CompileResult<String> {
        match ty.element() {
            None => ctx.parse_scalar(ty, token),
            Some(element) => {
                let sequence = self.sequence_expr(ctx, ty, element, token)?;
                ctx.collect(ty, &sequence)
            }
        }
    }

    /// Expression rendering a value of `ty` as its output line
    fn render_expr(&self, ctx: &EmitContext, ty: &AbstractType, value: &str) -> CompileResult<String> {
        match ty.element() {
            None => ctx.format_scalar(ty, value),
            Some(element) => self.join_expr(ctx, ty, element, value),
        }
    }

    /// Call of the stub with every input in declared order
    fn call_expr(&self, ctx: &EmitContext) -> String {
        let args: Vec<String> = ctx.parsed.inputs.iter().map(|input| self.variable(&input.name)).collect();
        format!("{}({})", ENTRY_POINT, args.join(", "))
    }

    /// The stub, with `body` inlined or a placeholder returning a default
    fn emit_stub(&self, ctx: &EmitContext, body: Option<&str>, out: &mut SourceWriter) -> CompileResult<()> {
        self.emit_stub_doc(ctx, out)?;
        out.line(self.signature(ctx)?);
        out.indent();
        match body {
            Some(body) => out.lines(body),
            None => {
                out.line(self.comment(PLACEHOLDER));
                out.line(self.return_stmt(&ctx.default_value(ctx.returns())?));
            }
        }
        out.dedent();
        if let Some(end) = self.block_end() {
            out.line(end);
        }
        Ok(())
    }

    /// Stdin-driven entry point: decode, call, print
    fn emit_harness(&self, ctx: &EmitContext, out: &mut SourceWriter) -> CompileResult<()> {
        self.open_main(out);
        self.emit_read_input(out);
        for (index, input) in ctx.parsed.inputs.iter().enumerate() {
            let value = self.decode_expr(ctx, &input.ty, &self.token_expr(index))?;
            out.line(self.declare(ctx, &input.name, &input.ty, &value)?);
        }
        out.line(self.declare(ctx, RESULT_VAR, ctx.returns(), &self.call_expr(ctx))?);
        let rendered = self.render_expr(ctx, ctx.returns(), &self.variable(RESULT_VAR))?;
        out.line(self.print_stmt(&rendered));
        self.close_main(out);
        Ok(())
    }

    /// Generate a complete source unit. Pure: identical input always yields
    /// identical text.
    fn generate(&self, parsed: &ParsedScl, registry: &TypeRegistry, options: GenerateOptions) -> CompileResult<String> {
        let mode = if options.stub_only {
            EmitMode::Starter
        } else {
            EmitMode::Harness
        };
        let ctx = EmitContext::new(parsed, registry, self.language(), mode);
        let mut out = SourceWriter::new(self.indent_unit());

        self.emit_imports(&ctx, &mut out)?;
        if ctx.is_harness() {
            out.blank();
            self.emit_helpers(&ctx, &mut out)?;
        }
        out.blank();
        self.open_unit(&mut out);
        self.emit_stub(&ctx, None, &mut out)?;
        if ctx.is_harness() {
            out.blank();
            self.emit_harness(&ctx, &mut out)?;
        }
        self.close_unit(&mut out);
        Ok(out.finish())
    }
}

/// Registry of available backends
pub struct BackendRegistry {
    backends: HashMap<TargetLanguage, Box<dyn Backend>>,
}

impl BackendRegistry {
    pub fn new() -> Self {
        Self {
            backends: HashMap::new(),
        }
    }

    /// Registry with a backend for every built-in language
    pub fn standard() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(PythonBackend));
        registry.register(Box::new(JavaScriptBackend));
        registry.register(Box::new(JavaBackend));
        registry.register(Box::new(CppBackend));
        registry.register(Box::new(CSharpBackend));
        registry.register(Box::new(PhpBackend));
        registry.register(Box::new(RBackend));
        registry.register(Box::new(TypeScriptBackend));
        registry.register(Box::new(SwiftBackend));
        registry.register(Box::new(GoBackend));
        registry
    }

    pub fn register(&mut self, backend: Box<dyn Backend>) {
        debug!("registered backend: {}", backend.language());
        self.backends.insert(backend.language(), backend);
    }

    pub fn get(&self, language: TargetLanguage) -> CompileResult<&dyn Backend> {
        self.backends
            .get(&language)
            .map(|b| b.as_ref())
            .ok_or_else(|| CompileError::unsupported_language(language.id()))
    }

    /// Look a backend up by sandbox language id
    pub fn find_by_id(&self, id: &str) -> CompileResult<&dyn Backend> {
        self.get(id.parse::<TargetLanguage>()?)
    }

    /// Registered languages in a stable order
    pub fn languages(&self) -> Vec<TargetLanguage> {
        let mut languages: Vec<TargetLanguage> = self.backends.keys().copied().collect();
        languages.sort();
        languages
    }

    /// Generate `parsed` for one language; failures never affect other languages
    pub fn generate(
        &self,
        parsed: &ParsedScl,
        registry: &TypeRegistry,
        language: TargetLanguage,
        options: GenerateOptions,
    ) -> CompileResult<String> {
        self.get(language)?.generate(parsed, registry, options)
    }
}

impl Default for BackendRegistry {
    fn default() -> Self {
        Self::standard()
    }
}
