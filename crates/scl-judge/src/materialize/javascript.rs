//! JavaScript materializer syntax

use scl_toolchain::backend::{EmitContext, SourceWriter};
use scl_toolchain::{AbstractType, CompileResult, ScalarType, TargetLanguage};

use super::{MaterializeSyntax, RecordEntry};

pub struct JavaScriptSyntax;

/// Array, object or `Set` literal; shared with TypeScript
pub(super) fn composite(ty: &AbstractType, items: &[String]) -> String {
    let items = items.join(", ");
    match ty {
        AbstractType::Map(_) => format!("{{{}}}", items),
        AbstractType::Set(_) => format!("new Set([{}])", items),
        _ => format!("[{}]", items),
    }
}

/// `console.log` redirected into a buffer around the call; TypeScript
/// passes `typed` to annotate the buffer and the replacement
pub(super) fn measured_call(call: &str, typed: bool, out: &mut SourceWriter) {
    if typed {
        out.line("const buffer: string[] = [];");
        out.line("const originalLog = console.log;");
        out.line("console.log = (...parts: unknown[]) => {");
    } else {
        out.line("const buffer = [];");
        out.line("const originalLog = console.log;");
        out.line("console.log = (...parts) => {");
    }
    out.indent();
    out.line("buffer.push(parts.join(\" \"));");
    out.dedent();
    out.line("};");
    out.line("const started = performance.now();");
    out.line(call);
    out.line("const elapsed = performance.now() - started;");
    out.line("console.log = originalLog;");
    out.line("const captured = buffer.join(\"\\n\");");
}

pub(super) fn record(entries: &[RecordEntry], out: &mut SourceWriter) {
    out.line("const record = {");
    out.indent();
    for entry in entries {
        out.line(format!("{}: {},", entry.key, entry.value.expr()));
    }
    out.dedent();
    out.line("};");
    out.line("console.log(JSON.stringify(record));");
}

impl MaterializeSyntax for JavaScriptSyntax {
    fn language(&self) -> TargetLanguage {
        TargetLanguage::JavaScript
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
        Ok(composite(ty, items))
    }

    fn emit_measured_call(&self, call: &str, out: &mut SourceWriter) {
        measured_call(call, false, out);
    }

    fn equals_expr(&self, left: &str, right: &str) -> String {
        format!("{} === {}", left, right)
    }

    fn emit_record(&self, entries: &[RecordEntry], out: &mut SourceWriter) {
        record(entries, out);
    }
}

#[cfg(test)]
mod tests {
    use crate::case::TestCase;
    use crate::materialize::Materializer;
    use scl_toolchain::{RegistryOptions, TargetLanguage, parse};
    use serde_json::json;

    #[test]
    fn test_program_shape() {
        let parsed = parse("set -> long ids\nmap -> string names\nlong -> return").unwrap();
        let case = TestCase::new("c1", vec![json!("4,4,5"), json!("a:x,b:y")], json!(9));
        let code = Materializer::new(RegistryOptions::default())
            .unwrap()
            .materialize(&parsed, TargetLanguage::JavaScript, "return 9n;", &case, 1)
            .unwrap();

        assert!(code.starts_with("/**\n"));
        assert!(code.contains("function execute(ids, names) {\n    return 9n;\n}\n"));
        assert!(code.contains("    const ids = new Set([4n, 5n]);\n    const idsSize = 2;\n"));
        assert!(code.contains("    const names = {\"a\": \"x\", \"b\": \"y\"};\n    const namesSize = 2;\n"));
        assert!(code.contains("    const result = execute(ids, names);\n"));
        assert!(code.contains("        passed: output === \"9\",\n"));
        assert!(code.ends_with("}\n\nmain();\n"));
    }
}
