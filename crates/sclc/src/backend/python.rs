//! Python backend

use super::{Backend, EmitContext, SourceWriter, ENTRY_POINT};
use crate::common::CompileResult;
use crate::types::{AbstractType, ScalarType, TargetLanguage};

pub struct PythonBackend;

impl Backend for PythonBackend {
    fn language(&self) -> TargetLanguage {
        TargetLanguage::Python
    }

    fn emit_imports(&self, ctx: &EmitContext, out: &mut SourceWriter) -> CompileResult<()> {
        if ctx.is_harness() {
            out.line("import sys");
        }
        out.line("from typing import Dict, List, Set");
        Ok(())
    }

    fn signature(&self, ctx: &EmitContext) -> CompileResult<String> {
        let params = ctx
            .parsed
            .inputs
            .iter()
            .map(|input| Ok(format!("{}: {}", input.name, ctx.native(&input.ty)?)))
            .collect::<CompileResult<Vec<_>>>()?;
        Ok(format!(
            "def {}({}) -> {}:",
            ENTRY_POINT,
            params.join(", "),
            ctx.native(ctx.returns())?
        ))
    }

    fn block_end(&self) -> Option<&'static str> {
        None
    }

    fn comment(&self, text: &str) -> String {
        format!("# {}", text)
    }

    fn return_stmt(&self, value: &str) -> String {
        format!("return {}", value)
    }

    fn token_expr(&self, index: usize) -> String {
        format!("input_data[{}]", index)
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
                "(key, {}) for key, value in (entry.split(\":\", 1) for entry in {}.split(\",\") if entry)",
                ctx.parse(element, "value")?,
                token
            )),
            _ => Ok(format!(
                "{} for token in {}.split(\",\") if token",
                ctx.parse(element, "token")?,
                token
            )),
        }
    }

    fn join_expr(&self, ctx: &EmitContext, ty: &AbstractType, element: ScalarType, value: &str) -> CompileResult<String> {
        let delimiter = ctx.delimiter(ty)?;
        match ty {
            AbstractType::Map(_) => Ok(format!(
                "\"{}\".join(key + \":\" + {} for key, value in {}.items())",
                delimiter,
                ctx.format(element, "value")?,
                value
            )),
            _ => Ok(format!(
                "\"{}\".join({} for item in {})",
                delimiter,
                ctx.format(element, "item")?,
                value
            )),
        }
    }

    fn declare(&self, _ctx: &EmitContext, name: &str, _ty: &AbstractType, value: &str) -> CompileResult<String> {
        Ok(format!("{} = {}", name, value))
    }

    fn print_stmt(&self, expr: &str) -> String {
        format!("print({})", expr)
    }

    fn open_main(&self, out: &mut SourceWriter) {
        out.line("if __name__ == \"__main__\":");
        out.indent();
    }

    fn emit_read_input(&self, out: &mut SourceWriter) {
        out.line("input_data = sys.stdin.read().split(\"\\n\")");
    }
}
