//! Test-case materializer
//!
//! Turns one test case into a self-contained program: the candidate's
//! body is inlined into the `execute` stub, every input is initialised
//! from a literal, and the program prints a single JSON result record.
//!
//! The stub, declarations and output rendering come from the code
//! generator's [`Backend`]s; a [`MaterializeSyntax`] per language adds
//! literal syntax, timing, console capture and the record.

pub mod cpp;
pub mod csharp;
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
use scl_toolchain::backend::{Backend, EmitContext, EmitMode, RESULT_VAR, SourceWriter};
use scl_toolchain::frontend::sema::SIZE_SUFFIX;
use scl_toolchain::types::RegistryOptions;
use scl_toolchain::{
    AbstractType, BackendRegistry, CompileError, CompileResult, ParsedScl, ScalarType, TargetLanguage, TypeRegistry,
};

use crate::case::TestCase;
use crate::error::{JudgeError, JudgeResult};
use crate::literal::{self, Literal, ScalarValue};

pub use cpp::CppSyntax;
pub use csharp::CSharpSyntax;
pub use go::GoSyntax;
pub use java::JavaSyntax;
pub use javascript::JavaScriptSyntax;
pub use php::PhpSyntax;
pub use python::PythonSyntax;
pub use r::RSyntax;
pub use swift::SwiftSyntax;
pub use typescript::TypeScriptSyntax;

/// Rendered result line
pub const OUTPUT_VAR: &str = "output";
/// Milliseconds spent in `execute`
pub const ELAPSED_VAR: &str = "elapsed";
/// Text the candidate printed during `execute`
pub const CAPTURED_VAR: &str = "captured";

/// Result record field names
pub mod field {
    pub const CASE_NO: &str = "caseNo";
    pub const CASE_ID: &str = "caseId";
    pub const EXPECTED: &str = "expected";
    pub const IS_SAMPLE: &str = "isSample";
    pub const MEMORY: &str = "memory";
    pub const TIME: &str = "time";
    pub const PASSED: &str = "passed";
    pub const CONSOLE: &str = "console";
    pub const OUTPUT: &str = "output";
}

/// A record value as a target-language expression, tagged with its JSON kind
#[derive(Debug, Clone, PartialEq)]
pub enum RecordValue {
    Number(String),
    Boolean(String),
    Text(String),
}

impl RecordValue {
    pub fn expr(&self) -> &str {
        match self {
            Self::Number(expr) | Self::Boolean(expr) | Self::Text(expr) => expr,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecordEntry {
    pub key: &'static str,
    pub value: RecordValue,
}

impl RecordEntry {
    fn new(key: &'static str, value: RecordValue) -> Self {
        Self { key, value }
    }
}

/// Quote `text` with `quote`, escaping backslashes, the quote itself and
/// line breaks
pub fn escape(text: &str, quote: char) -> String {
    let mut escaped = String::with_capacity(text.len() + 2);
    escaped.push(quote);
    for c in text.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            c if c == quote => {
                escaped.push('\\');
                escaped.push(c);
            }
            c => escaped.push(c),
        }
    }
    escaped.push(quote);
    escaped
}

/// Decimal text of a real that always reads as a floating-point literal
pub fn real(value: f64) -> String {
    let text = value.to_string();
    if text.contains(['.', 'e', 'E']) || !value.is_finite() {
        text
    } else {
        format!("{}.0", text)
    }
}

/// Language-specific pieces of a materialized program
pub trait MaterializeSyntax: Send + Sync {
    fn language(&self) -> TargetLanguage;

    /// Imports and top-level helpers ahead of the stub
    fn emit_prelude(&self, backend: &dyn Backend, ctx: &EmitContext, out: &mut SourceWriter) -> CompileResult<()> {
        backend.emit_imports(ctx, out)?;
        out.blank();
        backend.emit_helpers(ctx, out)
    }

    /// Members placed inside the unit, between the stub and the entry point
    fn emit_support(&self, _out: &mut SourceWriter) {}

    fn string_literal(&self, text: &str) -> String {
        escape(text, '"')
    }

    fn char_literal(&self, value: char) -> String {
        escape(&value.to_string(), '\'')
    }

    fn bool_literal(&self, value: bool) -> String {
        value.to_string()
    }

    fn int_literal(&self, _scalar: ScalarType, value: i64) -> String {
        value.to_string()
    }

    fn real_literal(&self, _scalar: ScalarType, value: f64) -> String {
        real(value)
    }

    fn scalar_literal(&self, scalar: ScalarType, value: &ScalarValue) -> String {
        match value {
            ScalarValue::Int(v) => self.int_literal(scalar, *v),
            ScalarValue::Real(v) => self.real_literal(scalar, *v),
            ScalarValue::Bool(v) => self.bool_literal(*v),
            ScalarValue::Char(c) => self.char_literal(*c),
            ScalarValue::Text(text) => self.string_literal(text),
        }
    }

    /// One map entry inside a map literal; `key` is already a string literal
    fn map_entry(&self, key: &str, value: &str) -> String {
        format!("{}: {}", key, value)
    }

    /// Literal of a composite of type `ty` from its rendered items
    fn composite_literal(&self, ctx: &EmitContext, ty: &AbstractType, items: &[String]) -> CompileResult<String>;

    /// Declaration of a composite's `<name>Size` constant
    fn size_constant(&self, backend: &dyn Backend, ctx: &EmitContext, name: &str, len: usize) -> CompileResult<String> {
        backend.declare(
            ctx,
            name,
            &AbstractType::Scalar(ScalarType::Integer),
            &self.int_literal(ScalarType::Integer, len as i64),
        )
    }

    /// Statements running `call` (the result declaration) while timing it
    /// and capturing stdout; they leave `elapsed` and `captured` declared
    fn emit_measured_call(&self, call: &str, out: &mut SourceWriter);

    /// Expression yielding the captured console text from its variable
    fn console_expr(&self, variable: &str) -> String {
        variable.to_string()
    }

    fn equals_expr(&self, left: &str, right: &str) -> String {
        format!("{} == {}", left, right)
    }

    /// Print the record as one JSON object on stdout
    fn emit_record(&self, entries: &[RecordEntry], out: &mut SourceWriter);
}

/// Materializer syntaxes keyed by language
pub struct SyntaxRegistry {
    syntaxes: HashMap<TargetLanguage, Box<dyn MaterializeSyntax>>,
}

impl SyntaxRegistry {
    pub fn new() -> Self {
        Self {
            syntaxes: HashMap::new(),
        }
    }

    pub fn standard() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(PythonSyntax));
        registry.register(Box::new(JavaScriptSyntax));
        registry.register(Box::new(TypeScriptSyntax));
        registry.register(Box::new(JavaSyntax));
        registry.register(Box::new(CppSyntax));
        registry.register(Box::new(CSharpSyntax));
        registry.register(Box::new(PhpSyntax));
        registry.register(Box::new(RSyntax));
        registry.register(Box::new(SwiftSyntax));
        registry.register(Box::new(GoSyntax));
        registry
    }

    pub fn register(&mut self, syntax: Box<dyn MaterializeSyntax>) {
        self.syntaxes.insert(syntax.language(), syntax);
    }

    pub fn get(&self, language: TargetLanguage) -> CompileResult<&dyn MaterializeSyntax> {
        self.syntaxes
            .get(&language)
            .map(|syntax| syntax.as_ref())
            .ok_or_else(|| CompileError::unsupported_language(language.id()))
    }
}

impl Default for SyntaxRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

/// One materialized test-case program
#[derive(Debug, Clone, PartialEq)]
pub struct MaterializedCase {
    /// 1-based position of the case
    pub case_no: usize,
    pub case_id: String,
    pub language: TargetLanguage,
    pub code: String,
}

pub struct Materializer {
    registry: TypeRegistry,
    backends: BackendRegistry,
    syntaxes: SyntaxRegistry,
}

impl Materializer {
    pub fn new(options: RegistryOptions) -> CompileResult<Self> {
        Ok(Self::with_parts(
            TypeRegistry::with_options(options)?,
            BackendRegistry::standard(),
            SyntaxRegistry::standard(),
        ))
    }

    pub fn with_parts(registry: TypeRegistry, backends: BackendRegistry, syntaxes: SyntaxRegistry) -> Self {
        Self {
            registry,
            backends,
            syntaxes,
        }
    }

    /// Program for test case number `case_no` (1-based)
    pub fn materialize(
        &self,
        parsed: &ParsedScl,
        language: TargetLanguage,
        body: &str,
        case: &TestCase,
        case_no: usize,
    ) -> JudgeResult<String> {
        let backend = self.backends.get(language)?;
        let syntax = self.syntaxes.get(language)?;

        if case.input.len() != parsed.inputs.len() {
            return Err(JudgeError::invalid_test_case(
                case_no,
                format!("expected {} inputs, found {}", parsed.inputs.len(), case.input.len()),
            ));
        }
        let literals = parsed
            .inputs
            .iter()
            .zip(&case.input)
            .map(|(input, value)| {
                literal::decode(&input.ty, value)
                    .map_err(|message| JudgeError::invalid_test_case(case_no, format!("`{}`: {}", input.name, message)))
            })
            .collect::<JudgeResult<Vec<_>>>()?;

        debug!("materializing case {} ({}) for {}", case_no, case.id, language);
        let ctx = EmitContext::new(parsed, &self.registry, language, EmitMode::Materialized);
        let mut out = SourceWriter::new(backend.indent_unit());

        syntax.emit_prelude(backend, &ctx, &mut out)?;
        out.blank();
        backend.open_unit(&mut out);
        let body = Some(body).filter(|body| !body.trim().is_empty());
        backend.emit_stub(&ctx, body, &mut out)?;
        out.blank();
        syntax.emit_support(&mut out);
        out.blank();
        backend.open_main(&mut out);

        // Composites and their size constants go first, ahead of any
        // scalar initialisation
        let mut hoisted = Vec::new();
        let mut scalars = Vec::new();
        for (index, (input, literal)) in parsed.inputs.iter().zip(&literals).enumerate() {
            let value = render_literal(syntax, &ctx, &input.ty, literal)
                .ok_or_else(|| JudgeError::invalid_test_case(case_no, format!("input {} has the wrong shape", index)))??;
            let declaration = backend.declare(&ctx, &input.name, &input.ty, &value)?;
            if input.is_composite() {
                hoisted.push(declaration);
                let size_name = format!("{}{}", input.name, SIZE_SUFFIX);
                hoisted.push(syntax.size_constant(backend, &ctx, &size_name, literal.len())?);
            } else {
                scalars.push(declaration);
            }
        }
        for line in hoisted.iter().chain(&scalars) {
            out.line(line);
        }

        let call = backend.declare(&ctx, RESULT_VAR, ctx.returns(), &backend.call_expr(&ctx))?;
        syntax.emit_measured_call(&call, &mut out);
        let rendered = backend.render_expr(&ctx, ctx.returns(), &backend.variable(RESULT_VAR))?;
        out.line(backend.declare(&ctx, OUTPUT_VAR, &AbstractType::Scalar(ScalarType::String), &rendered)?);

        let expected = syntax.string_literal(&literal::normalize_expected(ctx.returns(), &case.output));
        let output = backend.variable(OUTPUT_VAR);
        let entries = [
            RecordEntry::new(field::CASE_NO, RecordValue::Number(case_no.to_string())),
            RecordEntry::new(field::CASE_ID, RecordValue::Text(syntax.string_literal(&case.id))),
            RecordEntry::new(field::EXPECTED, RecordValue::Text(expected.clone())),
            RecordEntry::new(field::IS_SAMPLE, RecordValue::Boolean(syntax.bool_literal(case.is_sample))),
            RecordEntry::new(field::MEMORY, RecordValue::Number("0".to_string())),
            RecordEntry::new(field::TIME, RecordValue::Number(backend.variable(ELAPSED_VAR))),
            RecordEntry::new(field::PASSED, RecordValue::Boolean(syntax.equals_expr(&output, &expected))),
            RecordEntry::new(
                field::CONSOLE,
                RecordValue::Text(syntax.console_expr(&backend.variable(CAPTURED_VAR))),
            ),
            RecordEntry::new(field::OUTPUT, RecordValue::Text(output)),
        ];
        syntax.emit_record(&entries, &mut out);

        backend.close_main(&mut out);
        backend.close_unit(&mut out);
        Ok(out.finish())
    }

    /// Programs for every case, numbered from 1; the first bad case aborts
    pub fn materialize_all(
        &self,
        parsed: &ParsedScl,
        language: TargetLanguage,
        body: &str,
        cases: &[TestCase],
    ) -> JudgeResult<Vec<MaterializedCase>> {
        cases
            .iter()
            .enumerate()
            .map(|(index, case)| {
                let case_no = index + 1;
                Ok(MaterializedCase {
                    case_no,
                    case_id: case.id.clone(),
                    language,
                    code: self.materialize(parsed, language, body, case, case_no)?,
                })
            })
            .collect()
    }
}

/// Literal for `literal` declared as `ty`; `None` when the shapes disagree
fn render_literal(
    syntax: &dyn MaterializeSyntax,
    ctx: &EmitContext,
    ty: &AbstractType,
    literal: &Literal,
) -> Option<CompileResult<String>> {
    match (ty, literal) {
        (AbstractType::Scalar(scalar), Literal::Scalar(value)) => Some(Ok(syntax.scalar_literal(*scalar, value))),
        (AbstractType::Array(element) | AbstractType::Set(element), Literal::Sequence(values)) => {
            let items: Vec<String> = values.iter().map(|value| syntax.scalar_literal(*element, value)).collect();
            Some(syntax.composite_literal(ctx, ty, &items))
        }
        (AbstractType::Map(element), Literal::Entries(entries)) => {
            let items: Vec<String> = entries
                .iter()
                .map(|(key, value)| syntax.map_entry(&syntax.string_literal(key), &syntax.scalar_literal(*element, value)))
                .collect();
            Some(syntax.composite_literal(ctx, ty, &items))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use scl_toolchain::parse;
    use serde_json::json;

    fn materializer() -> Materializer {
        Materializer::new(RegistryOptions::default()).unwrap()
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape("a\"b\\c\nd", '"'), "\"a\\\"b\\\\c\\nd\"");
        assert_eq!(escape("'", '\''), "'\\''");
        assert_eq!(escape("it's", '"'), "\"it's\"");
    }

    #[test]
    fn test_real_always_has_a_point() {
        assert_eq!(real(2.0), "2.0");
        assert_eq!(real(-0.5), "-0.5");
        assert_eq!(real(1e21), "1000000000000000000000.0");
    }

    #[test]
    fn test_every_language_has_a_syntax() {
        let syntaxes = SyntaxRegistry::standard();
        for language in TargetLanguage::ALL {
            assert_eq!(syntaxes.get(language).unwrap().language(), language);
        }
    }

    #[test]
    fn test_input_count_mismatch() {
        let parsed = parse("integer -> a\ninteger -> b\ninteger -> return").unwrap();
        let case = TestCase::new("c1", vec![json!(1)], json!(1));
        let err = materializer()
            .materialize(&parsed, TargetLanguage::Python, "return a", &case, 3)
            .unwrap_err();
        assert!(matches!(err, JudgeError::InvalidTestCase { case_no: 3, .. }));
    }

    #[test]
    fn test_undecodable_value_names_the_input() {
        let parsed = parse("array -> integer nums\ninteger -> return").unwrap();
        let case = TestCase::new("c1", vec![json!("1,x")], json!(1));
        let err = materializer()
            .materialize(&parsed, TargetLanguage::Go, "return 0", &case, 1)
            .unwrap_err();
        assert!(err.to_string().contains("`nums`"), "{}", err);
    }

    #[test]
    fn test_missing_syntax_is_unsupported() {
        let materializer = Materializer::with_parts(
            TypeRegistry::standard().unwrap(),
            BackendRegistry::standard(),
            SyntaxRegistry::new(),
        );
        let parsed = parse("integer -> return").unwrap();
        let case = TestCase::new("c1", vec![], json!(0));
        let err = materializer
            .materialize(&parsed, TargetLanguage::Php, "return 0;", &case, 1)
            .unwrap_err();
        assert!(matches!(err, JudgeError::Compile(CompileError::UnsupportedLanguage { .. })));
    }

    #[test]
    fn test_materialize_all_numbers_from_one() {
        let parsed = parse("integer -> a\ninteger -> return").unwrap();
        let cases = vec![
            TestCase::new("first", vec![json!(1)], json!(1)),
            TestCase::new("second", vec![json!(2)], json!(2)).sample(),
        ];
        let programs = materializer()
            .materialize_all(&parsed, TargetLanguage::JavaScript, "return a;", &cases)
            .unwrap();
        assert_eq!(programs.len(), 2);
        assert_eq!(programs[1].case_no, 2);
        assert_eq!(programs[1].case_id, "second");
        assert!(programs[1].code.contains("caseNo: 2,"));
        assert!(programs[1].code.contains("isSample: true,"));
    }

    #[test]
    fn test_empty_body_gets_placeholder() {
        let parsed = parse("integer -> a\ninteger -> return").unwrap();
        let case = TestCase::new("c1", vec![json!(1)], json!(1));
        let code = materializer()
            .materialize(&parsed, TargetLanguage::Python, "  \n", &case, 1)
            .unwrap();
        assert!(code.contains("    # Write your code here\n    return 0\n"));
    }
}
