//! PHP backend

use super::{Backend, EmitContext, SourceWriter, ENTRY_POINT};
use crate::common::CompileResult;
use crate::types::{AbstractType, ScalarType, TargetLanguage};

pub struct PhpBackend;

/// Non-empty comma-separated tokens of `token`
fn tokens(token: &str) -> String {
    format!("preg_split('/,/', {}, -1, PREG_SPLIT_NO_EMPTY)", token)
}

impl Backend for PhpBackend {
    fn language(&self) -> TargetLanguage {
        TargetLanguage::Php
    }

    fn emit_imports(&self, _ctx: &EmitContext, out: &mut SourceWriter) -> CompileResult<()> {
        out.line("<?php");
        Ok(())
    }

    fn signature(&self, ctx: &EmitContext) -> CompileResult<String> {
        let params = ctx
            .parsed
            .inputs
            .iter()
            .map(|input| Ok(format!("{} {}", ctx.native(&input.ty)?, self.variable(&input.name))))
            .collect::<CompileResult<Vec<_>>>()?;
        Ok(format!(
            "function {}({}): {} {{",
            ENTRY_POINT,
            params.join(", "),
            ctx.native(ctx.returns())?
        ))
    }

    fn variable(&self, name: &str) -> String {
        format!("${}", name)
    }

    fn token_expr(&self, index: usize) -> String {
        format!("$inputData[{}]", index)
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
                "array_map(fn($parts) => [$parts[0], {}], array_map(fn($entry) => explode(\":\", $entry, 2), {}))",
                ctx.parse(element, "$parts[1]")?,
                tokens(token)
            )),
            _ => Ok(format!(
                "array_map(fn($token) => {}, {})",
                ctx.parse(element, "$token")?,
                tokens(token)
            )),
        }
    }

    fn join_expr(&self, ctx: &EmitContext, ty: &AbstractType, element: ScalarType, value: &str) -> CompileResult<String> {
        let delimiter = ctx.delimiter(ty)?;
        match ty {
            AbstractType::Map(_) => Ok(format!(
                "implode(\"{}\", array_map(fn($key, $value) => $key . \":\" . {}, array_keys({}), {}))",
                delimiter,
                ctx.format(element, "$value")?,
                value,
                value
            )),
            _ => Ok(format!(
                "implode(\"{}\", array_map(fn($item) => {}, {}))",
                delimiter,
                ctx.format(element, "$item")?,
                value
            )),
        }
    }

    fn declare(&self, _ctx: &EmitContext, name: &str, _ty: &AbstractType, value: &str) -> CompileResult<String> {
        Ok(format!("{} = {};", self.variable(name), value))
    }

    fn print_stmt(&self, expr: &str) -> String {
        format!("echo {} . PHP_EOL;", expr)
    }

    fn open_main(&self, out: &mut SourceWriter) {
        out.line("function main(): void {");
        out.indent();
    }

    fn close_main(&self, out: &mut SourceWriter) {
        out.dedent();
        out.line("}");
        out.blank();
        out.line("main();");
    }

    fn emit_read_input(&self, out: &mut SourceWriter) {
        out.line("$inputData = file(\"php://stdin\", FILE_IGNORE_NEW_LINES);");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::GenerateOptions;
    use crate::frontend::parse;
    use crate::types::TypeRegistry;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_full_program() {
        let parsed = parse("set -> integer ids\nstring -> name\nboolean -> return").unwrap();
        let code = PhpBackend
            .generate(&parsed, &TypeRegistry::standard().unwrap(), GenerateOptions::default())
            .unwrap();
        assert_eq!(
            code,
            r#"<?php

function execute(array $ids, string $name): bool {
    // Write your code here
    return false;
}

function main(): void {
    $inputData = file("php://stdin", FILE_IGNORE_NEW_LINES);
    $ids = array_values(array_unique(array_map(fn($token) => intval($token), preg_split('/,/', $inputData[0], -1, PREG_SPLIT_NO_EMPTY))));
    $name = $inputData[1];
    $result = execute($ids, $name);
    echo ($result ? "true" : "false") . PHP_EOL;
}

main();
"#
        );
    }
}
