//! Swift materializer syntax

use scl_toolchain::backend::{EmitContext, SourceWriter};
use scl_toolchain::{AbstractType, CompileResult, TargetLanguage};

use super::{MaterializeSyntax, RecordEntry};

pub struct SwiftSyntax;

impl MaterializeSyntax for SwiftSyntax {
    fn language(&self) -> TargetLanguage {
        TargetLanguage::Swift
    }

    fn char_literal(&self, value: char) -> String {
        self.string_literal(&value.to_string())
    }

    fn composite_literal(&self, _ctx: &EmitContext, ty: &AbstractType, items: &[String]) -> CompileResult<String> {
        Ok(match ty {
            AbstractType::Map(_) if items.is_empty() => "[:]".to_string(),
            _ => format!("[{}]", items.join(", ")),
        })
    }

    // Stdout of a Swift process cannot be swapped in-process; the console
    // stays empty and the sandbox keeps the raw stream
    fn emit_measured_call(&self, call: &str, out: &mut SourceWriter) {
        out.line("let started = Date()");
        out.line(call);
        out.line("let elapsed = Date().timeIntervalSince(started) * 1000");
        out.line("let captured = \"\"");
    }

    fn emit_record(&self, entries: &[RecordEntry], out: &mut SourceWriter) {
        out.line("let record: [String: Any] = [");
        out.indent();
        for entry in entries {
            out.line(format!("\"{}\": {},", entry.key, entry.value.expr()));
        }
        out.dedent();
        out.line("]");
        out.line("if let data = try? JSONSerialization.data(withJSONObject: record),");
        out.line("    let text = String(data: data, encoding: .utf8) {");
        out.indent();
        out.line("print(text)");
        out.dedent();
        out.line("}");
    }
}

#[cfg(test)]
mod tests {
    use crate::case::TestCase;
    use crate::materialize::Materializer;
    use scl_toolchain::{RegistryOptions, TargetLanguage, parse};
    use serde_json::json;

    #[test]
    fn test_typed_lets() {
        let parsed = parse("map -> integer counts\ncharacter -> c\nset -> string return").unwrap();
        let case = TestCase::new("c1", vec![json!({}), json!("z")], json!("[]"));
        let code = Materializer::new(RegistryOptions::default())
            .unwrap()
            .materialize(&parsed, TargetLanguage::Swift, "return []", &case, 1)
            .unwrap();

        assert!(code.starts_with("import Foundation\n"));
        assert!(code.contains("    let counts: [String: Int] = [:]\n    let countsSize: Int = 0\n"));
        assert!(code.contains("    let c: Character = \"z\"\n"));
        assert!(code.contains("        \"expected\": \"\",\n"));
        assert!(code.ends_with("        print(text)\n    }\n}\n\nmain()\n"));
    }
}
