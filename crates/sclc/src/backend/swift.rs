//! Swift backend

use super::{Backend, EmitContext, SourceWriter, ENTRY_POINT};
use crate::common::CompileResult;
use crate::types::{AbstractType, ScalarType, TargetLanguage};

pub struct SwiftBackend;

impl Backend for SwiftBackend {
    fn language(&self) -> TargetLanguage {
        TargetLanguage::Swift
    }

    fn emit_imports(&self, _ctx: &EmitContext, out: &mut SourceWriter) -> CompileResult<()> {
        out.line("import Foundation");
        Ok(())
    }

    fn signature(&self, ctx: &EmitContext) -> CompileResult<String> {
        let params = ctx
            .parsed
            .inputs
            .iter()
            .map(|input| Ok(format!("_ {}: {}", input.name, ctx.native(&input.ty)?)))
            .collect::<CompileResult<Vec<_>>>()?;
        Ok(format!(
            "func {}({}) -> {} {{",
            ENTRY_POINT,
            params.join(", "),
            ctx.native(ctx.returns())?
        ))
    }

    fn return_stmt(&self, value: &str) -> String {
        format!("return {}", value)
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
        match ty {
            AbstractType::Map(_) => Ok(format!(
                "{}.split(separator: \",\").map {{ entry in (String(entry.prefix(while: {{ $0 != \":\" }})), {}) }}",
                token,
                ctx.parse(element, "String(entry.drop(while: { $0 != \":\" }).dropFirst())")?
            )),
            _ => Ok(format!(
                "{}.split(separator: \",\").map {{ token in {} }}",
                token,
                ctx.parse(element, "String(token)")?
            )),
        }
    }

    fn join_expr(&self, ctx: &EmitContext, ty: &AbstractType, element: ScalarType, value: &str) -> CompileResult<String> {
        let delimiter = ctx.delimiter(ty)?;
        match ty {
            AbstractType::Map(_) => Ok(format!(
                "{}.map {{ entry in entry.key + \":\" + {} }}.joined(separator: \"{}\")",
                value,
                ctx.format(element, "entry.value")?,
                delimiter
            )),
            _ => Ok(format!(
                "{}.map {{ item in {} }}.joined(separator: \"{}\")",
                value,
                ctx.format(element, "item")?,
                delimiter
            )),
        }
    }

    fn declare(&self, ctx: &EmitContext, name: &str, ty: &AbstractType, value: &str) -> CompileResult<String> {
        Ok(format!("let {}: {} = {}", name, ctx.native(ty)?, value))
    }

    fn print_stmt(&self, expr: &str) -> String {
        format!("print({})", expr)
    }

    fn open_main(&self, out: &mut SourceWriter) {
        out.line("func main() {");
        out.indent();
    }

    fn close_main(&self, out: &mut SourceWriter) {
        out.dedent();
        out.line("}");
        out.blank();
        out.line("main()");
    }

    fn emit_read_input(&self, out: &mut SourceWriter) {
        out.line("var inputData: [String] = []");
        out.line("while let line = readLine() {");
        out.indent();
        out.line("inputData.append(line)");
        out.dedent();
        out.line("}");
    }
}
