//! TypeScript backend

use super::javascript;
use super::{Backend, EmitContext, SourceWriter, ENTRY_POINT};
use crate::common::CompileResult;
use crate::types::{AbstractType, ScalarType, TargetLanguage};

pub struct TypeScriptBackend;

impl Backend for TypeScriptBackend {
    fn language(&self) -> TargetLanguage {
        TargetLanguage::TypeScript
    }

    fn emit_imports(&self, ctx: &EmitContext, out: &mut SourceWriter) -> CompileResult<()> {
        if ctx.is_harness() {
            out.line("import * as fs from \"fs\";");
        }
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
            "function {}({}): {} {{",
            ENTRY_POINT,
            params.join(", "),
            ctx.native(ctx.returns())?
        ))
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
        javascript::sequence(ctx, ty, element, token, true)
    }

    fn join_expr(&self, ctx: &EmitContext, ty: &AbstractType, element: ScalarType, value: &str) -> CompileResult<String> {
        javascript::join(ctx, ty, element, value)
    }

    fn declare(&self, ctx: &EmitContext, name: &str, ty: &AbstractType, value: &str) -> CompileResult<String> {
        Ok(format!("const {}: {} = {};", name, ctx.native(ty)?, value))
    }

    fn print_stmt(&self, expr: &str) -> String {
        format!("console.log({});", expr)
    }

    fn open_main(&self, out: &mut SourceWriter) {
        out.line("function main(): void {");
        out.indent();
    }

    fn close_main(&self, out: &mut SourceWriter) {
        javascript::close_main(out);
    }

    fn emit_read_input(&self, out: &mut SourceWriter) {
        out.line("const inputData: string[] = fs.readFileSync(0, \"utf8\").split(\"\\n\");");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::GenerateOptions;
    use crate::frontend::parse;
    use crate::types::TypeRegistry;

    #[test]
    fn test_typed_signature_and_declarations() {
        let parsed = parse("map -> string names\nboolean -> strict\nset -> integer return").unwrap();
        let code = TypeScriptBackend
            .generate(&parsed, &TypeRegistry::standard().unwrap(), GenerateOptions::default())
            .unwrap();
        assert!(code.starts_with("import * as fs from \"fs\";\n"));
        assert!(code.contains(
            "function execute(names: Record<string, string>, strict: boolean): Set<number> {"
        ));
        assert!(code.contains("const strict: boolean = (inputData[1] === \"true\");"));
        assert!(code.contains("const result: Set<number> = execute(names, strict);"));
        assert!(code.contains("return new Set();"));
        assert!(code.contains(".map(([key, value]) => [key, value] as const))"));
    }
}
