//! Go materializer syntax

use scl_toolchain::backend::go::{HELPERS, emit_import_block};
use scl_toolchain::backend::{Backend, EmitContext, SourceWriter};
use scl_toolchain::{AbstractType, CompileResult, ScalarType, TargetLanguage};

use super::{MaterializeSyntax, RecordEntry, real};

/// Every package a materialized program uses; `bufio` is not among them
const IMPORTS: &[&str] = &["encoding/json", "fmt", "io", "os", "sort", "strconv", "strings", "time"];

pub struct GoSyntax;

impl MaterializeSyntax for GoSyntax {
    fn language(&self) -> TargetLanguage {
        TargetLanguage::Go
    }

    fn emit_prelude(&self, _backend: &dyn Backend, _ctx: &EmitContext, out: &mut SourceWriter) -> CompileResult<()> {
        out.line("package main");
        out.blank();
        emit_import_block(IMPORTS, out);
        out.blank();
        out.lines(HELPERS);
        Ok(())
    }

    // `:=` infers int and float64, so the other widths are converted
    fn int_literal(&self, scalar: ScalarType, value: i64) -> String {
        match scalar {
            ScalarType::Long => format!("int64({})", value),
            _ => value.to_string(),
        }
    }

    fn real_literal(&self, scalar: ScalarType, value: f64) -> String {
        match scalar {
            ScalarType::Float => format!("float32({})", real(value)),
            _ => real(value),
        }
    }

    fn composite_literal(&self, ctx: &EmitContext, ty: &AbstractType, items: &[String]) -> CompileResult<String> {
        let items: Vec<String> = match ty {
            AbstractType::Set(_) => items.iter().map(|item| format!("{}: true", item)).collect(),
            _ => items.to_vec(),
        };
        Ok(format!("{}{{{}}}", ctx.native(ty)?, items.join(", ")))
    }

    // Unused constants compile where unused variables do not
    fn size_constant(&self, _backend: &dyn Backend, _ctx: &EmitContext, name: &str, len: usize) -> CompileResult<String> {
        Ok(format!("const {} = {}", name, len))
    }

    fn emit_measured_call(&self, call: &str, out: &mut SourceWriter) {
        out.line("previous := os.Stdout");
        out.line("reader, writer, _ := os.Pipe()");
        out.line("os.Stdout = writer");
        out.line("started := time.Now()");
        out.line(call);
        out.line("elapsed := float64(time.Since(started).Nanoseconds()) / 1e6");
        out.line("writer.Close()");
        out.line("os.Stdout = previous");
        out.line("captured, _ := io.ReadAll(reader)");
    }

    fn console_expr(&self, variable: &str) -> String {
        format!("string({})", variable)
    }

    fn emit_record(&self, entries: &[RecordEntry], out: &mut SourceWriter) {
        out.line("record, _ := json.Marshal(map[string]interface{}{");
        out.indent();
        for entry in entries {
            out.line(format!("\"{}\": {},", entry.key, entry.value.expr()));
        }
        out.dedent();
        out.line("})");
        out.line("fmt.Println(string(record))");
    }
}

#[cfg(test)]
mod tests {
    use crate::case::TestCase;
    use crate::materialize::Materializer;
    use scl_toolchain::{RegistryOptions, TargetLanguage, parse};
    use serde_json::json;

    #[test]
    fn test_typed_composites() {
        let parsed = parse("long -> n\nset -> integer seen\nfloat -> f\narray -> integer return").unwrap();
        let case = TestCase::new("c1", vec![json!(5), json!([7, 8]), json!(2)], json!([7]));
        let code = Materializer::new(RegistryOptions::default())
            .unwrap()
            .materialize(&parsed, TargetLanguage::Go, "return []int{7}", &case, 1)
            .unwrap();

        assert!(code.starts_with("package main\n\nimport (\n\t\"encoding/json\"\n"));
        assert!(!code.contains("\"bufio\""));
        assert!(code.contains("\tseen := map[int]bool{7: true, 8: true}\n\tconst seenSize = 2\n\tn := int64(5)\n\tf := float32(2.0)\n"));
        assert!(code.contains("\t\t\"console\": string(captured),\n"));
        assert!(code.contains("\t\t\"passed\": output == \"7\",\n"));
    }
}
