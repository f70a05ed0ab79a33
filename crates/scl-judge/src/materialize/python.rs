//! Python materializer syntax

use scl_toolchain::backend::{Backend, EmitContext, SourceWriter};
use scl_toolchain::{AbstractType, CompileResult, TargetLanguage};

use super::{MaterializeSyntax, RecordEntry};

pub struct PythonSyntax;

impl MaterializeSyntax for PythonSyntax {
    fn language(&self) -> TargetLanguage {
        TargetLanguage::Python
    }

    fn emit_prelude(&self, backend: &dyn Backend, ctx: &EmitContext, out: &mut SourceWriter) -> CompileResult<()> {
        out.line("import contextlib");
        out.line("import io");
        out.line("import json");
        out.line("from time import perf_counter");
        backend.emit_imports(ctx, out)
    }

    fn char_literal(&self, value: char) -> String {
        self.string_literal(&value.to_string())
    }

    fn bool_literal(&self, value: bool) -> String {
        if value { "True" } else { "False" }.to_string()
    }

    fn composite_literal(&self, _ctx: &EmitContext, ty: &AbstractType, items: &[String]) -> CompileResult<String> {
        let items = items.join(", ");
        Ok(match ty {
            AbstractType::Set(_) if items.is_empty() => "set()".to_string(),
            AbstractType::Set(_) | AbstractType::Map(_) => format!("{{{}}}", items),
            _ => format!("[{}]", items),
        })
    }

    fn emit_measured_call(&self, call: &str, out: &mut SourceWriter) {
        out.line("buffer = io.StringIO()");
        out.line("started = perf_counter()");
        out.line("with contextlib.redirect_stdout(buffer):");
        out.indent();
        out.line(call);
        out.dedent();
        out.line("elapsed = (perf_counter() - started) * 1000");
        out.line("captured = buffer.getvalue()");
    }

    fn emit_record(&self, entries: &[RecordEntry], out: &mut SourceWriter) {
        out.line("record = {");
        out.indent();
        for entry in entries {
            out.line(format!("\"{}\": {},", entry.key, entry.value.expr()));
        }
        out.dedent();
        out.line("}");
        out.line("print(json.dumps(record))");
    }
}

#[cfg(test)]
mod tests {
    use crate::case::TestCase;
    use crate::materialize::Materializer;
    use pretty_assertions::assert_eq;
    use scl_toolchain::{RegistryOptions, TargetLanguage, parse};
    use serde_json::json;

    #[test]
    fn test_two_sum_program() {
        let parsed = parse("array -> integer nums 3\ninteger -> target\narray -> integer return").unwrap();
        let case = TestCase::new("c1", vec![json!([3, 2, 4]), json!(6)], json!("[1, 2]"));
        let body = "seen = {}\nfor i, n in enumerate(nums):\n    if target - n in seen:\n        return [seen[target - n], i]\n    seen[n] = i\nreturn []";
        let code = Materializer::new(RegistryOptions::default())
            .unwrap()
            .materialize(&parsed, TargetLanguage::Python, body, &case, 1)
            .unwrap();

        let expected = r#"import contextlib
import io
import json
from time import perf_counter
from typing import Dict, List, Set

def execute(nums: List[int], target: int) -> List[int]:
    seen = {}
    for i, n in enumerate(nums):
        if target - n in seen:
            return [seen[target - n], i]
        seen[n] = i
    return []

if __name__ == "__main__":
    nums = [3, 2, 4]
    numsSize = 3
    target = 6
    buffer = io.StringIO()
    started = perf_counter()
    with contextlib.redirect_stdout(buffer):
        result = execute(nums, target)
    elapsed = (perf_counter() - started) * 1000
    captured = buffer.getvalue()
    output = ",".join(str(item) for item in result)
    record = {
        "caseNo": 1,
        "caseId": "c1",
        "expected": "1,2",
        "isSample": False,
        "memory": 0,
        "time": elapsed,
        "passed": output == "1,2",
        "console": captured,
        "output": output,
    }
    print(json.dumps(record))
"#;
        assert_eq!(code, expected);
    }

    #[test]
    fn test_literals() {
        let parsed = parse("set -> character letters\nmap -> boolean flags\nstring -> s\nboolean -> return").unwrap();
        let case = TestCase::new("c2", vec![json!([]), json!({"on": true}), json!("a\"b")], json!(true));
        let code = Materializer::new(RegistryOptions::default())
            .unwrap()
            .materialize(&parsed, TargetLanguage::Python, "return True", &case, 1)
            .unwrap();
        assert!(code.contains("letters = set()\n"));
        assert!(code.contains("flags = {\"on\": True}\n"));
        assert!(code.contains("s = \"a\\\"b\"\n"));
    }
}
