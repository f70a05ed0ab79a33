//! C# materializer syntax

use scl_toolchain::backend::{Backend, EmitContext, SourceWriter};
use scl_toolchain::{AbstractType, CompileResult, ScalarType, TargetLanguage};

use super::{MaterializeSyntax, RecordEntry, real};

pub struct CSharpSyntax;

impl MaterializeSyntax for CSharpSyntax {
    fn language(&self) -> TargetLanguage {
        TargetLanguage::CSharp
    }

    fn emit_prelude(&self, backend: &dyn Backend, ctx: &EmitContext, out: &mut SourceWriter) -> CompileResult<()> {
        backend.emit_imports(ctx, out)?;
        out.line("using System.Diagnostics;");
        out.line("using System.IO;");
        out.line("using System.Text.Json;");
        Ok(())
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
        format!("[{}] = {}", key, value)
    }

    fn composite_literal(&self, ctx: &EmitContext, ty: &AbstractType, items: &[String]) -> CompileResult<String> {
        let native = ctx.native(ty)?;
        if items.is_empty() {
            Ok(format!("new {}()", native))
        } else {
            Ok(format!("new {} {{ {} }}", native, items.join(", ")))
        }
    }

    fn emit_measured_call(&self, call: &str, out: &mut SourceWriter) {
        out.line("TextWriter stdout = Console.Out;");
        out.line("StringWriter buffer = new StringWriter();");
        out.line("Console.SetOut(buffer);");
        out.line("Stopwatch stopwatch = Stopwatch.StartNew();");
        out.line(call);
        out.line("stopwatch.Stop();");
        out.line("double elapsed = stopwatch.Elapsed.TotalMilliseconds;");
        out.line("Console.SetOut(stdout);");
        out.line("string captured = buffer.ToString();");
    }

    fn emit_record(&self, entries: &[RecordEntry], out: &mut SourceWriter) {
        out.line("Dictionary<string, object> record = new Dictionary<string, object> {");
        out.indent();
        for entry in entries {
            out.line(format!("[\"{}\"] = {},", entry.key, entry.value.expr()));
        }
        out.dedent();
        out.line("};");
        out.line("Console.WriteLine(JsonSerializer.Serialize(record));");
    }
}
