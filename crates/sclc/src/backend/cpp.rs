//! C++ backend (C++17)

use super::{Backend, EmitContext, SourceWriter, ENTRY_POINT};
use crate::common::CompileResult;
use crate::types::{AbstractType, ScalarType, TargetLanguage};

/// Splitting, collecting and printing helpers shared by harness and
/// materialized programs
pub const HELPERS: &str = r#"std::vector<std::string> split(const std::string& text, char delimiter) {
    std::vector<std::string> parts;
    std::stringstream stream(text);
    std::string part;
    while (std::getline(stream, part, delimiter)) {
        if (!part.empty()) {
            parts.push_back(part);
        }
    }
    return parts;
}

template <typename F>
auto mapTokens(const std::string& text, F parse) {
    std::vector<decltype(parse(std::string()))> values;
    for (const std::string& token : split(text, ',')) {
        values.push_back(parse(token));
    }
    return values;
}

template <typename F>
auto mapEntries(const std::string& text, F parse) {
    std::vector<std::pair<std::string, decltype(parse(std::string()))>> entries;
    for (const std::string& entry : split(text, ',')) {
        std::size_t colon = entry.find(':');
        entries.emplace_back(entry.substr(0, colon), parse(entry.substr(colon + 1)));
    }
    return entries;
}

template <typename T>
std::unordered_set<T> toSet(const std::vector<T>& values) {
    return std::unordered_set<T>(values.begin(), values.end());
}

template <typename T>
std::unordered_map<std::string, T> toMap(const std::vector<std::pair<std::string, T>>& entries) {
    return std::unordered_map<std::string, T>(entries.begin(), entries.end());
}

std::string toText(const std::string& value) {
    return value;
}

std::string toText(char value) {
    return std::string(1, value);
}

std::string toText(bool value) {
    return value ? "true" : "false";
}

template <typename T>
std::string toText(const T& value) {
    std::ostringstream out;
    out << value;
    return out.str();
}

template <typename C>
std::string joinValues(const C& values, const std::string& delimiter) {
    std::string text;
    bool first = true;
    for (const auto& value : values) {
        if (!first) {
            text += delimiter;
        }
        text += toText(value);
        first = false;
    }
    return text;
}

template <typename M>
std::string joinEntries(const M& entries, const std::string& delimiter) {
    std::string text;
    bool first = true;
    for (const auto& [key, value] : entries) {
        if (!first) {
            text += delimiter;
        }
        text += key + ":" + toText(value);
        first = false;
    }
    return text;
}"#;

pub const INCLUDES: &[&str] = &[
    "<iostream>",
    "<sstream>",
    "<string>",
    "<unordered_map>",
    "<unordered_set>",
    "<utility>",
    "<vector>",
];

pub struct CppBackend;

impl Backend for CppBackend {
    fn language(&self) -> TargetLanguage {
        TargetLanguage::Cpp
    }

    fn emit_imports(&self, _ctx: &EmitContext, out: &mut SourceWriter) -> CompileResult<()> {
        for include in INCLUDES {
            out.line(format!("#include {}", include));
        }
        Ok(())
    }

    fn emit_helpers(&self, _ctx: &EmitContext, out: &mut SourceWriter) -> CompileResult<()> {
        out.lines(HELPERS);
        Ok(())
    }

    fn signature(&self, ctx: &EmitContext) -> CompileResult<String> {
        let params = ctx
            .parsed
            .inputs
            .iter()
            .map(|input| Ok(format!("{} {}", ctx.native(&input.ty)?, input.name)))
            .collect::<CompileResult<Vec<_>>>()?;
        Ok(format!(
            "{} {}({}) {{",
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
        let helper = match ty {
            AbstractType::Map(_) => "mapEntries",
            _ => "mapTokens",
        };
        Ok(format!(
            "{}({}, [](const std::string& token) {{ return {}; }})",
            helper,
            token,
            ctx.parse(element, "token")?
        ))
    }

    fn join_expr(&self, ctx: &EmitContext, ty: &AbstractType, _element: ScalarType, value: &str) -> CompileResult<String> {
        let helper = match ty {
            AbstractType::Map(_) => "joinEntries",
            _ => "joinValues",
        };
        Ok(format!("{}({}, \"{}\")", helper, value, ctx.delimiter(ty)?))
    }

    fn declare(&self, ctx: &EmitContext, name: &str, ty: &AbstractType, value: &str) -> CompileResult<String> {
        Ok(format!("{} {} = {};", ctx.native(ty)?, name, value))
    }

    fn print_stmt(&self, expr: &str) -> String {
        format!("std::cout << {} << std::endl;", expr)
    }

    fn open_main(&self, out: &mut SourceWriter) {
        out.line("int main() {");
        out.indent();
    }

    fn close_main(&self, out: &mut SourceWriter) {
        out.line("return 0;");
        out.dedent();
        out.line("}");
    }

    fn emit_read_input(&self, out: &mut SourceWriter) {
        out.line("std::vector<std::string> inputData;");
        out.line("std::string line;");
        out.line("while (std::getline(std::cin, line)) {");
        out.indent();
        out.line("inputData.push_back(line);");
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

    fn generate(source: &str) -> String {
        let parsed = parse(source).unwrap();
        CppBackend
            .generate(&parsed, &TypeRegistry::standard().unwrap(), GenerateOptions::default())
            .unwrap()
    }

    #[test]
    fn test_signature_and_decoding() {
        let code = generate("array -> integer nums 4\nmap -> float prices\nlong -> return");
        assert!(code.contains(
            "long long execute(std::vector<int> nums, std::unordered_map<std::string, float> prices) {"
        ));
        assert!(code.contains(
            "std::vector<int> nums = mapTokens(inputData[0], [](const std::string& token) { return std::stoi(token); });"
        ));
        assert!(code.contains(
            "prices = toMap(mapEntries(inputData[1], [](const std::string& token) { return std::stof(token); }));"
        ));
        assert!(code.contains("return 0LL;"));
        assert!(code.contains("std::cout << toText(result) << std::endl;"));
    }

    #[test]
    fn test_set_result_is_joined() {
        let code = generate("string -> s\nset -> character return");
        assert!(code.contains("std::cout << joinValues(result, \",\") << std::endl;"));
        assert!(code.trim_end().ends_with("return 0;\n}"));
    }

    #[test]
    fn test_stub_only_has_no_helpers() {
        let parsed = parse("integer -> a\ninteger -> return").unwrap();
        let code = CppBackend
            .generate(
                &parsed,
                &TypeRegistry::standard().unwrap(),
                GenerateOptions { stub_only: true },
            )
            .unwrap();
        assert!(!code.contains("mapTokens"));
        assert!(code.contains("int execute(int a) {"));
    }
}
