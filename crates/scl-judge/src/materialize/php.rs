//! PHP materializer syntax

use scl_toolchain::backend::{EmitContext, SourceWriter};
use scl_toolchain::{AbstractType, CompileResult, TargetLanguage};

use super::{MaterializeSyntax, RecordEntry, escape};

pub struct PhpSyntax;

impl MaterializeSyntax for PhpSyntax {
    fn language(&self) -> TargetLanguage {
        TargetLanguage::Php
    }

    // Double-quoted strings interpolate `$`
    fn string_literal(&self, text: &str) -> String {
        escape(text, '"').replace('$', "\\$")
    }

    fn char_literal(&self, value: char) -> String {
        self.string_literal(&value.to_string())
    }

    fn map_entry(&self, key: &str, value: &str) -> String {
        format!("{} => {}", key, value)
    }

    fn composite_literal(&self, _ctx: &EmitContext, _ty: &AbstractType, items: &[String]) -> CompileResult<String> {
        Ok(format!("[{}]", items.join(", ")))
    }

    fn emit_measured_call(&self, call: &str, out: &mut SourceWriter) {
        out.line("ob_start();");
        out.line("$started = hrtime(true);");
        out.line(call);
        out.line("$elapsed = (hrtime(true) - $started) / 1e6;");
        out.line("$captured = ob_get_clean();");
    }

    fn equals_expr(&self, left: &str, right: &str) -> String {
        format!("{} === {}", left, right)
    }

    fn emit_record(&self, entries: &[RecordEntry], out: &mut SourceWriter) {
        out.line("$record = [");
        out.indent();
        for entry in entries {
            out.line(format!("\"{}\" => {},", entry.key, entry.value.expr()));
        }
        out.dedent();
        out.line("];");
        out.line("echo json_encode($record) . PHP_EOL;");
    }
}

#[cfg(test)]
mod tests {
    use crate::case::TestCase;
    use crate::materialize::Materializer;
    use scl_toolchain::{RegistryOptions, TargetLanguage, parse};
    use serde_json::json;

    #[test]
    fn test_variables_and_arrays() {
        let parsed = parse("map -> integer stock\nstring -> label\ninteger -> return").unwrap();
        let case = TestCase::new("c1", vec![json!("a:1,b:2"), json!("$5")], json!(3));
        let code = Materializer::new(RegistryOptions::default())
            .unwrap()
            .materialize(&parsed, TargetLanguage::Php, "return $stock[\"a\"] + $stock[\"b\"];", &case, 1)
            .unwrap();

        assert!(code.starts_with("<?php\n"));
        assert!(code.contains("    $stock = [\"a\" => 1, \"b\" => 2];\n    $stockSize = 2;\n"));
        assert!(code.contains("    $label = \"\\$5\";\n"));
        assert!(code.contains("    $result = execute($stock, $label);\n"));
        assert!(code.contains("        \"output\" => $output,\n"));
        assert!(code.ends_with("}\n\nmain();\n"));
    }
}
