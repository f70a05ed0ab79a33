//! TypeScript materializer syntax

use scl_toolchain::backend::{EmitContext, SourceWriter};
use scl_toolchain::{AbstractType, CompileResult, ScalarType, TargetLanguage};

use super::{MaterializeSyntax, RecordEntry, javascript};

pub struct TypeScriptSyntax;

impl MaterializeSyntax for TypeScriptSyntax {
    fn language(&self) -> TargetLanguage {
        TargetLanguage::TypeScript
    }

    fn char_literal(&self, value: char) -> String {
        self.string_literal(&value.to_string())
    }

    fn int_literal(&self, scalar: ScalarType, value: i64) -> String {
        match scalar {
            ScalarType::Long => format!("{}n", value),
            _ => value.to_string(),
        }
    }

    fn composite_literal(&self, _ctx: &EmitContext, ty: &AbstractType, items: &[String]) -> CompileResult<String> {
        Ok(javascript::composite(ty, items))
    }

    fn emit_measured_call(&self, call: &str, out: &mut SourceWriter) {
        javascript::measured_call(call, true, out);
    }

    fn equals_expr(&self, left: &str, right: &str) -> String {
        format!("{} === {}", left, right)
    }

    fn emit_record(&self, entries: &[RecordEntry], out: &mut SourceWriter) {
        javascript::record(entries, out);
    }
}

#[cfg(test)]
mod tests {
    use crate::case::TestCase;
    use crate::materialize::Materializer;
    use scl_toolchain::{RegistryOptions, TargetLanguage, parse};
    use serde_json::json;

    #[test]
    fn test_typed_declarations() {
        let parsed = parse("array -> double xs\ncharacter -> c\nboolean -> return").unwrap();
        let case = TestCase::new("c1", vec![json!([1, 2.5]), json!("q")], json!("true"));
        let code = Materializer::new(RegistryOptions::default())
            .unwrap()
            .materialize(&parsed, TargetLanguage::TypeScript, "return true;", &case, 1)
            .unwrap();

        assert!(code.contains("const xs: number[] = [1.0, 2.5];\n"));
        assert!(code.contains("const xsSize: number = 2;\n"));
        assert!(code.contains("const c: string = \"q\";\n"));
        assert!(code.contains("const buffer: string[] = [];\n"));
        assert!(code.contains("const output: string = String(result);\n"));
    }
}
