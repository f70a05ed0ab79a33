//! C++ materializer syntax

use scl_toolchain::backend::{Backend, EmitContext, SourceWriter};
use scl_toolchain::{AbstractType, CompileResult, ScalarType, TargetLanguage};

use super::{MaterializeSyntax, RecordEntry, RecordValue, real};

const JSON_STRING: &str = r#"std::string jsonString(const std::string& text) {
    std::string quoted = "\"";
    for (char c : text) {
        switch (c) {
            case '"': quoted += "\\\""; break;
            case '\\': quoted += "\\\\"; break;
            case '\n': quoted += "\\n"; break;
            case '\r': quoted += "\\r"; break;
            case '\t': quoted += "\\t"; break;
            default: quoted += c;
        }
    }
    return quoted + "\"";
}"#;

pub struct CppSyntax;

impl MaterializeSyntax for CppSyntax {
    fn language(&self) -> TargetLanguage {
        TargetLanguage::Cpp
    }

    fn emit_prelude(&self, backend: &dyn Backend, ctx: &EmitContext, out: &mut SourceWriter) -> CompileResult<()> {
        out.line("#include <chrono>");
        backend.emit_imports(ctx, out)?;
        out.blank();
        backend.emit_helpers(ctx, out)?;
        out.blank();
        out.lines(JSON_STRING);
        Ok(())
    }

    fn int_literal(&self, scalar: ScalarType, value: i64) -> String {
        match scalar {
            ScalarType::Long => format!("{}LL", value),
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
        format!("{{{}, {}}}", key, value)
    }

    fn composite_literal(&self, _ctx: &EmitContext, _ty: &AbstractType, items: &[String]) -> CompileResult<String> {
        Ok(format!("{{{}}}", items.join(", ")))
    }

    fn emit_measured_call(&self, call: &str, out: &mut SourceWriter) {
        out.line("std::ostringstream buffer;");
        out.line("std::streambuf* previous = std::cout.rdbuf(buffer.rdbuf());");
        out.line("auto started = std::chrono::steady_clock::now();");
        out.line(call);
        out.line(
            "double elapsed = std::chrono::duration<double, std::milli>(std::chrono::steady_clock::now() - started).count();",
        );
        out.line("std::cout.rdbuf(previous);");
        out.line("std::string captured = buffer.str();");
    }

    fn emit_record(&self, entries: &[RecordEntry], out: &mut SourceWriter) {
        out.line("std::string record = std::string(\"{\")");
        out.indent();
        for (index, entry) in entries.iter().enumerate() {
            let separator = if index == 0 { "" } else { ", " };
            let value = match &entry.value {
                RecordValue::Text(expr) => format!("jsonString({})", expr),
                RecordValue::Boolean(expr) => format!("(({}) ? \"true\" : \"false\")", expr),
                RecordValue::Number(expr) => format!("std::to_string({})", expr),
            };
            out.line(format!("+ \"{}\\\"{}\\\": \" + {}", separator, entry.key, value));
        }
        out.line("+ \"}\";");
        out.dedent();
        out.line("std::cout << record << std::endl;");
    }
}
