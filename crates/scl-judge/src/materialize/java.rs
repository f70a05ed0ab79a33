//! Java materializer syntax

use scl_toolchain::backend::{EmitContext, SourceWriter};
use scl_toolchain::{AbstractType, CompileResult, ScalarType, TargetLanguage};

use super::{MaterializeSyntax, RecordEntry, RecordValue, real};

const JSON_STRING: &str = r#"static String jsonString(String text) {
    return "\"" + text.replace("\\", "\\\\")
        .replace("\"", "\\\"")
        .replace("\n", "\\n")
        .replace("\r", "\\r")
        .replace("\t", "\\t") + "\"";
}"#;

pub struct JavaSyntax;

impl MaterializeSyntax for JavaSyntax {
    fn language(&self) -> TargetLanguage {
        TargetLanguage::Java
    }

    fn emit_support(&self, out: &mut SourceWriter) {
        out.lines(JSON_STRING);
    }

    fn int_literal(&self, scalar: ScalarType, value: i64) -> String {
        match scalar {
            ScalarType::Long => format!("{}L", value),
            _ => value.to_string(),
        }
    }

    fn real_literal(&self, scalar: ScalarType, value: f64) -> String {
        match scalar {
            ScalarType::Float => format!("{}f", real(value)),
            _ => real(value),
        }
    }

    fn map_entry(&self, key: &str, value: &str) -> String {
        format!("Map.entry({}, {})", key, value)
    }

    fn composite_literal(&self, _ctx: &EmitContext, ty: &AbstractType, items: &[String]) -> CompileResult<String> {
        let collection = match ty {
            AbstractType::Map(_) => "HashMap",
            AbstractType::Set(_) => "HashSet",
            _ => "ArrayList",
        };
        if items.is_empty() {
            return Ok(format!("new {}<>()", collection));
        }
        let source = match ty {
            AbstractType::Map(_) => "Map.ofEntries",
            _ => "List.of",
        };
        Ok(format!("new {}<>({}({}))", collection, source, items.join(", ")))
    }

    fn emit_measured_call(&self, call: &str, out: &mut SourceWriter) {
        out.line("PrintStream stdout = System.out;");
        out.line("ByteArrayOutputStream buffer = new ByteArrayOutputStream();");
        out.line("System.setOut(new PrintStream(buffer, true));");
        out.line("long started = System.nanoTime();");
        out.line(call);
        out.line("double elapsed = (System.nanoTime() - started) / 1e6;");
        out.line("System.setOut(stdout);");
        out.line("String captured = buffer.toString();");
    }

    fn equals_expr(&self, left: &str, right: &str) -> String {
        format!("{}.equals({})", left, right)
    }

    fn emit_record(&self, entries: &[RecordEntry], out: &mut SourceWriter) {
        out.line("String record = \"{\"");
        out.indent();
        for (index, entry) in entries.iter().enumerate() {
            let separator = if index == 0 { "" } else { ", " };
            let value = match &entry.value {
                RecordValue::Text(expr) => format!("jsonString({})", expr),
                RecordValue::Boolean(expr) => format!("({})", expr),
                RecordValue::Number(expr) => expr.clone(),
            };
            out.line(format!("+ \"{}\\\"{}\\\": \" + {}", separator, entry.key, value));
        }
        out.line("+ \"}\";");
        out.dedent();
        out.line("System.out.println(record);");
    }
}
