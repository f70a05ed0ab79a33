//! JavaScript backend (Node.js)

use super::{Backend, EmitContext, SourceWriter, ENTRY_POINT};
use crate::common::CompileResult;
use crate::types::{AbstractType, ScalarType, TargetLanguage};

pub struct JavaScriptBackend;

/// Decoded elements of a composite token; shared with TypeScript, which
/// needs the entry pairs typed as tuples
pub(super) fn sequence(
    ctx: &EmitContext,
    ty: &AbstractType,
    element: ScalarType,
    token: &str,
    typed: bool,
) -> CompileResult<String> {
    match ty {
        AbstractType::Map(_) => Ok(format!(
            "{}.split(\",\").filter((entry) => entry !== \"\").map((entry) => entry.split(\":\")).map(([key, value]) => [key, {}]{})",
            token,
            ctx.parse(element, "value")?,
            if typed { " as const" } else { "" }
        )),
        _ => Ok(format!(
            "{}.split(\",\").filter((token) => token !== \"\").map((token) => {})",
            token,
            ctx.parse(element, "token")?
        )),
    }
}

/// Joined output line of a composite value; shared with TypeScript
pub(super) fn join(ctx: &EmitContext, ty: &AbstractType, element: ScalarType, value: &str) -> CompileResult<String> {
    let delimiter = ctx.delimiter(ty)?;
    match ty {
        AbstractType::Map(_) => Ok(format!(
            "Object.entries({}).map(([key, value]) => key + \":\" + {}).join(\"{}\")",
            value,
            ctx.format(element, "value")?,
            delimiter
        )),
        _ => Ok(format!(
            "Array.from({}, (item) => {}).join(\"{}\")",
            value,
            ctx.format(element, "item")?,
            delimiter
        )),
    }
}

/// `function main() { ... }` followed by its invocation
pub(super) fn close_main(out: &mut SourceWriter) {
    out.dedent();
    out.line("}");
    out.blank();
    out.line("main();");
}

impl Backend for JavaScriptBackend {
    fn language(&self) -> TargetLanguage {
        TargetLanguage::JavaScript
    }

    fn emit_imports(&self, ctx: &EmitContext, out: &mut SourceWriter) -> CompileResult<()> {
        if ctx.is_harness() {
            out.line("const fs = require(\"fs\");");
        }
        Ok(())
    }

    fn emit_stub_doc(&self, ctx: &EmitContext, out: &mut SourceWriter) -> CompileResult<()> {
        out.line("/**");
        for input in &ctx.parsed.inputs {
            out.line(format!(" * @param {{{}}} {}", ctx.native(&input.ty)?, input.name));
        }
        out.line(format!(" * @returns {{{}}}", ctx.native(ctx.returns())?));
        out.line(" */");
        Ok(())
    }

    fn signature(&self, ctx: &EmitContext) -> CompileResult<String> {
        let params: Vec<&str> = ctx.parsed.inputs.iter().map(|input| input.name.as_str()).collect();
        Ok(format!("function {}({}) {{", ENTRY_POINT, params.join(", ")))
    }

    fn token_expr(&self, index: usize) -> String {
        format!("inputData[{}]", index)
    }

    fn sequence_expr(
        &self,
        ctx: &EmitContext,
        ty: &AbstractType,
        element: ScalarType,
        token: &str,
    ) -> CompileResult<String> {
        sequence(ctx, ty, element, token, false)
    }

    fn join_expr(&self, ctx: &EmitContext, ty: &AbstractType, element: ScalarType, value: &str) -> CompileResult<String> {
        join(ctx, ty, element, value)
    }

    fn declare(&self, _ctx: &EmitContext, name: &str, _ty: &AbstractType, value: &str) -> CompileResult<String> {
        Ok(format!("const {} = {};", name, value))
    }

    fn print_stmt(&self, expr: &str) -> String {
        format!("console.log({});", expr)
    }

    fn open_main(&self, out: &mut SourceWriter) {
        out.line("function main() {");
        out.indent();
    }

    fn close_main(&self, out: &mut SourceWriter) {
        close_main(out);
    }

    fn emit_read_input(&self, out: &mut SourceWriter) {
        out.line("const inputData = fs.readFileSync(0, \"utf8\").split(\"\\n\");");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::GenerateOptions;
    use crate::frontend::parse;
    use crate::types::TypeRegistry;
    use pretty_assertions::assert_eq;

    fn generate(source: &str) -> String {
        let parsed = parse(source).unwrap();
        JavaScriptBackend
            .generate(&parsed, &TypeRegistry::standard().unwrap(), GenerateOptions::default())
            .unwrap()
    }

    #[test]
    fn test_array_and_scalar() {
        assert_eq!(
            generate("array -> integer nums 4\ninteger -> target\ninteger -> return"),
            r#"const fs = require("fs");

/**
 * @param {number[]} nums
 * @param {number} target
 * @returns {number}
 */
function execute(nums, target) {
    // Write your code here
    return 0;
}

function main() {
    const inputData = fs.readFileSync(0, "utf8").split("\n");
    const nums = inputData[0].split(",").filter((token) => token !== "").map((token) => parseInt(token, 10));
    const target = parseInt(inputData[1], 10);
    const result = execute(nums, target);
    console.log(String(result));
}

main();
"#
        );
    }

    #[test]
    fn test_map_and_set() {
        let code = generate("map -> long totals\nset -> character return");
        assert!(code.contains(
            "const totals = Object.fromEntries(inputData[0].split(\",\").filter((entry) => entry !== \"\")\
             .map((entry) => entry.split(\":\")).map(([key, value]) => [key, BigInt(value)]));"
        ));
        assert!(code.contains("console.log(Array.from(result, (item) => item).join(\",\"));"));
    }
}
