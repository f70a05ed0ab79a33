//! R materializer syntax

use scl_toolchain::backend::{Backend, EmitContext, SourceWriter};
use scl_toolchain::{AbstractType, CompileResult, ScalarType, TargetLanguage};

use super::{MaterializeSyntax, RecordEntry, RecordValue};

const JSON_STRING: &str = r#"jsonString <- function(text) {
  text <- gsub("\\", "\\\\", text, fixed = TRUE)
  text <- gsub("\"", "\\\"", text, fixed = TRUE)
  text <- gsub("\n", "\\n", text, fixed = TRUE)
  text <- gsub("\r", "\\r", text, fixed = TRUE)
  text <- gsub("\t", "\\t", text, fixed = TRUE)
  paste0("\"", text, "\"")
}"#;

pub struct RSyntax;

impl MaterializeSyntax for RSyntax {
    fn language(&self) -> TargetLanguage {
        TargetLanguage::R
    }

    fn emit_prelude(&self, backend: &dyn Backend, ctx: &EmitContext, out: &mut SourceWriter) -> CompileResult<()> {
        backend.emit_imports(ctx, out)?;
        out.blank();
        backend.emit_helpers(ctx, out)?;
        out.blank();
        out.lines(JSON_STRING);
        Ok(())
    }

    fn char_literal(&self, value: char) -> String {
        self.string_literal(&value.to_string())
    }

    fn bool_literal(&self, value: bool) -> String {
        if value { "TRUE" } else { "FALSE" }.to_string()
    }

    fn int_literal(&self, scalar: ScalarType, value: i64) -> String {
        match scalar {
            ScalarType::Long => value.to_string(),
            _ => format!("{}L", value),
        }
    }

    fn map_entry(&self, key: &str, value: &str) -> String {
        format!("{} = {}", key, value)
    }

    fn composite_literal(&self, _ctx: &EmitContext, ty: &AbstractType, items: &[String]) -> CompileResult<String> {
        let constructor = match ty {
            AbstractType::Map(_) => "list",
            _ => "c",
        };
        Ok(format!("{}({})", constructor, items.join(", ")))
    }

    fn emit_measured_call(&self, call: &str, out: &mut SourceWriter) {
        out.line("started <- proc.time()[[\"elapsed\"]]");
        out.line(format!("captured <- paste(capture.output({}), collapse = \"\\n\")", call));
        out.line("elapsed <- (proc.time()[[\"elapsed\"]] - started) * 1000");
    }

    fn equals_expr(&self, left: &str, right: &str) -> String {
        format!("identical({}, {})", left, right)
    }

    fn emit_record(&self, entries: &[RecordEntry], out: &mut SourceWriter) {
        out.line("record <- paste0(");
        out.indent();
        out.line("\"{\",");
        for (index, entry) in entries.iter().enumerate() {
            let separator = if index == 0 { "" } else { ", " };
            let value = match &entry.value {
                RecordValue::Text(expr) => format!("jsonString({})", expr),
                RecordValue::Boolean(expr) => format!("tolower({})", expr),
                RecordValue::Number(expr) => expr.clone(),
            };
            out.line(format!("\"{}\\\"{}\\\": \", {},", separator, entry.key, value));
        }
        out.line("\"}\"");
        out.dedent();
        out.line(")");
        out.line("cat(record, \"\\n\", sep = \"\")");
    }
}

#[cfg(test)]
mod tests {
    use crate::case::TestCase;
    use crate::materialize::Materializer;
    use scl_toolchain::{RegistryOptions, TargetLanguage, parse};
    use serde_json::json;

    #[test]
    fn test_vectors_and_capture() {
        let parsed = parse("array -> integer xs\nmap -> boolean flags\nlong -> return").unwrap();
        let case = TestCase::new("c1", vec![json!([1, -2]), json!({"ok": false})], json!("-1"));
        let code = Materializer::new(RegistryOptions::default())
            .unwrap()
            .materialize(&parsed, TargetLanguage::R, "return(sum(xs))", &case, 1)
            .unwrap();

        assert!(code.contains("jsonString <- function(text) {\n"));
        assert!(code.contains("  xs <- c(1L, -2L)\n  xsSize <- 2L\n"));
        assert!(code.contains("  flags <- list(\"ok\" = FALSE)\n"));
        assert!(code.contains("  captured <- paste(capture.output(result <- execute(xs, flags)), collapse = \"\\n\")\n"));
        assert!(code.contains("    \", \\\"passed\\\": \", tolower(identical(output, \"-1\")),\n"));
        assert!(code.ends_with("  cat(record, \"\\n\", sep = \"\")\n}\n\nmain()\n"));
    }
}
