//! C# backend

use super::{Backend, EmitContext, SourceWriter, ENTRY_POINT};
use crate::common::CompileResult;
use crate::types::{AbstractType, ScalarType, TargetLanguage};

pub const CLASS_NAME: &str = "Program";

pub struct CSharpBackend;

impl Backend for CSharpBackend {
    fn language(&self) -> TargetLanguage {
        TargetLanguage::CSharp
    }

    fn emit_imports(&self, _ctx: &EmitContext, out: &mut SourceWriter) -> CompileResult<()> {
        out.line("using System;");
        out.line("using System.Collections.Generic;");
        out.line("using System.Globalization;");
        out.line("using System.Linq;");
        Ok(())
    }

    fn open_unit(&self, out: &mut SourceWriter) {
        out.line(format!("public class {} {{", CLASS_NAME));
        out.indent();
    }

    fn close_unit(&self, out: &mut SourceWriter) {
        out.dedent();
        out.line("}");
    }

    fn signature(&self, ctx: &EmitContext) -> CompileResult<String> {
        let params = ctx
            .parsed
            .inputs
            .iter()
            .map(|input| Ok(format!("{} {}", ctx.native(&input.ty)?, input.name)))
            .collect::<CompileResult<Vec<_>>>()?;
        Ok(format!(
            "public static {} {}({}) {{",
            ctx.native(ctx.returns())?,
            ENTRY_POINT,
            params.join(", ")
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
        match ty {
            AbstractType::Map(_) => Ok(format!(
                "{}.Split(',', StringSplitOptions.RemoveEmptyEntries).Select(entry => entry.Split(':', 2))\
                 .Select(parts => KeyValuePair.Create(parts[0], {}))",
                token,
                ctx.parse(element, "parts[1]")?
            )),
            _ => Ok(format!(
                "{}.Split(',', StringSplitOptions.RemoveEmptyEntries).Select(token => {})",
                token,
                ctx.parse(element, "token")?
            )),
        }
    }

    fn join_expr(&self, ctx: &EmitContext, ty: &AbstractType, element: ScalarType, value: &str) -> CompileResult<String> {
        let delimiter = ctx.delimiter(ty)?;
        match ty {
            AbstractType::Map(_) => Ok(format!(
                "string.Join(\"{}\", {}.Select(entry => entry.Key + \":\" + {}))",
                delimiter,
                value,
                ctx.format(element, "entry.Value")?
            )),
            _ => Ok(format!(
                "string.Join(\"{}\", {}.Select(item => {}))",
                delimiter,
                value,
                ctx.format(element, "item")?
            )),
        }
    }

    fn declare(&self, ctx: &EmitContext, name: &str, ty: &AbstractType, value: &str) -> CompileResult<String> {
        Ok(format!("{} {} = {};", ctx.native(ty)?, name, value))
    }

    fn print_stmt(&self, expr: &str) -> String {
        format!("Console.WriteLine({});", expr)
    }

    fn open_main(&self, out: &mut SourceWriter) {
        out.line("public static void Main(string[] args) {");
        out.indent();
    }

    fn emit_read_input(&self, out: &mut SourceWriter) {
        out.line("List<string> inputData = new List<string>();");
        out.line("string line;");
        out.line("while ((line = Console.ReadLine()) != null) {");
        out.indent();
        out.line("inputData.Add(line);");
        out.dedent();
        out.line("}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::GenerateOptions;
    use crate::frontend::parse;
    use crate::types::TypeRegistry;

    #[test]
    fn test_class_wrapped_program() {
        let parsed = parse("set -> integer seen\ndouble -> ratio\nmap -> boolean return").unwrap();
        let code = CSharpBackend
            .generate(&parsed, &TypeRegistry::standard().unwrap(), GenerateOptions::default())
            .unwrap();
        assert!(code.contains("public class Program {"));
        assert!(code.contains(
            "    public static Dictionary<string, bool> execute(HashSet<int> seen, double ratio) {"
        ));
        assert!(code.contains("return new Dictionary<string, bool>();"));
        assert!(code.contains(
            "HashSet<int> seen = inputData[0].Split(',', StringSplitOptions.RemoveEmptyEntries)\
             .Select(token => int.Parse(token)).ToHashSet();"
        ));
        assert!(code.contains("double ratio = double.Parse(inputData[1], CultureInfo.InvariantCulture);"));
        assert!(code.contains(
            "Console.WriteLine(string.Join(\",\", result.Select(entry => entry.Key + \":\" + (entry.Value ? \"true\" : \"false\"))));"
        ));
    }
}
