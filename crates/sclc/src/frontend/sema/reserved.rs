//! Reserved words of every target language.
//!
//! A declared name ends up as a parameter or local in every backend, so it
//! must be legal in all of them at once.

const PYTHON: &[&str] = &[
    "False", "None", "True", "and", "as", "assert", "async", "await", "break", "class", "continue", "def",
    "del", "elif", "else", "except", "finally", "for", "from", "global", "if", "import", "in", "is",
    "lambda", "nonlocal", "not", "or", "pass", "raise", "return", "try", "while", "with", "yield",
    "int", "float", "str", "bool", "dict", "set", "print", "List", "Dict", "Set",
];

const JAVASCRIPT: &[&str] = &[
    "break", "case", "catch", "class", "const", "continue", "debugger", "default", "delete", "do",
    "else", "export", "extends", "false", "finally", "for", "function", "if", "import", "in",
    "instanceof", "new", "null", "return", "super", "switch", "this", "throw", "true", "try", "typeof",
    "var", "void", "while", "with", "yield", "let", "static", "enum", "await", "implements", "package",
    "protected", "interface", "private", "public", "arguments", "eval", "undefined", "NaN", "Infinity",
    "require", "process", "console",
];

const TYPESCRIPT: &[&str] = &[
    "any", "as", "boolean", "constructor", "declare", "get", "module", "number", "of", "set", "string",
    "symbol", "type", "from", "namespace", "abstract", "readonly", "keyof", "infer", "never",
    "unknown", "is", "asserts", "bigint", "object",
];

const JAVA: &[&str] = &[
    "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char", "class", "const",
    "continue", "default", "do", "double", "else", "enum", "extends", "final", "finally", "float",
    "for", "goto", "if", "implements", "import", "instanceof", "int", "interface", "long", "native",
    "new", "package", "private", "protected", "public", "return", "short", "static", "strictfp",
    "super", "switch", "synchronized", "this", "throw", "throws", "transient", "try", "void",
    "volatile", "while", "true", "false", "null", "var", "record", "yield", "String", "System",
];

const CPP: &[&str] = &[
    "alignas", "alignof", "and", "and_eq", "asm", "auto", "bitand", "bitor", "bool", "break", "case",
    "catch", "char", "char8_t", "char16_t", "char32_t", "class", "compl", "concept", "const",
    "consteval", "constexpr", "constinit", "const_cast", "continue", "co_await", "co_return",
    "co_yield", "decltype", "default", "delete", "do", "double", "dynamic_cast", "else", "enum",
    "explicit", "export", "extern", "false", "float", "for", "friend", "goto", "if", "inline", "int",
    "long", "mutable", "namespace", "new", "noexcept", "not", "not_eq", "nullptr", "operator", "or",
    "or_eq", "private", "protected", "public", "register", "reinterpret_cast", "requires", "return",
    "short", "signed", "sizeof", "static", "static_assert", "static_cast", "struct", "switch",
    "template", "this", "thread_local", "throw", "true", "try", "typedef", "typeid", "typename",
    "union", "unsigned", "using", "virtual", "void", "volatile", "wchar_t", "while", "xor", "xor_eq",
    "std",
];

const CSHARP: &[&str] = &[
    "abstract", "as", "base", "bool", "break", "byte", "case", "catch", "char", "checked", "class",
    "const", "continue", "decimal", "default", "delegate", "do", "double", "else", "enum", "event",
    "explicit", "extern", "false", "finally", "fixed", "float", "for", "foreach", "goto", "if",
    "implicit", "in", "int", "interface", "internal", "is", "lock", "long", "namespace", "new", "null",
    "object", "operator", "out", "override", "params", "private", "protected", "public", "readonly",
    "ref", "return", "sbyte", "sealed", "short", "sizeof", "stackalloc", "static", "string", "struct",
    "switch", "this", "throw", "true", "try", "typeof", "uint", "ulong", "unchecked", "unsafe",
    "ushort", "using", "virtual", "void", "volatile", "while", "var", "dynamic", "async", "await",
    "Console",
];

const PHP: &[&str] = &[
    "abstract", "and", "array", "as", "break", "callable", "case", "catch", "class", "clone", "const",
    "continue", "declare", "default", "do", "echo", "else", "elseif", "empty", "enddeclare", "endfor",
    "endforeach", "endif", "endswitch", "endwhile", "eval", "exit", "extends", "final", "finally", "fn",
    "for", "foreach", "function", "global", "goto", "if", "implements", "include", "include_once",
    "instanceof", "insteadof", "interface", "isset", "list", "match", "namespace", "new", "or",
    "print", "private", "protected", "public", "readonly", "require", "require_once", "return",
    "static", "switch", "throw", "trait", "try", "unset", "use", "var", "while", "xor", "yield", "this",
];

const R: &[&str] = &[
    "if", "else", "repeat", "while", "function", "for", "next", "break", "TRUE", "FALSE", "NULL",
    "Inf", "NaN", "NA", "NA_integer_", "NA_real_", "NA_complex_", "NA_character_", "in",
];

const SWIFT: &[&str] = &[
    "associatedtype", "class", "deinit", "enum", "extension", "fileprivate", "func", "import", "init",
    "inout", "internal", "let", "open", "operator", "private", "precedencegroup", "protocol", "public",
    "rethrows", "static", "struct", "subscript", "typealias", "var", "break", "case", "catch",
    "continue", "default", "defer", "do", "else", "fallthrough", "for", "guard", "if", "in", "repeat",
    "return", "throw", "switch", "where", "while", "Any", "as", "await", "false", "is", "nil", "self",
    "Self", "super", "throws", "true", "try", "async", "Int", "Int64", "Double", "Float", "Bool",
    "String", "Character",
];

const GO: &[&str] = &[
    "break", "case", "chan", "const", "continue", "default", "defer", "else", "fallthrough", "for",
    "func", "go", "goto", "if", "import", "interface", "map", "package", "range", "return", "select",
    "struct", "switch", "type", "var", "true", "false", "nil", "iota", "int", "int64", "float32",
    "float64", "string", "bool", "rune", "byte", "len", "make", "append", "fmt", "strings", "strconv",
    "bufio", "os", "error",
];

/// Identifiers the generated harnesses declare themselves
const HARNESS: &[&str] = &[
    "execute", "main", "Main", "Program", "input_data", "inputData", "lines", "line", "reader",
    "scanner", "result", "record", "output", "token", "tokens", "entry", "item", "parts", "value",
    "args", "argv", "argc", "sys", "fs", "Collectors", "Arrays", "ArrayList", "HashMap", "HashSet",
    "Map", "Entry", "CultureInfo", "mapTokens", "mapEntries", "toMap", "toSet", "toText", "split",
    "parseInt", "parseInt64", "parseFloat32", "parseFloat64", "parseRune", "readInput",
    "startTime", "elapsed", "console_output", "consoleOutput", "buffer", "captured", "Result",
    "joinValues", "joinEntries", "joinSet", "joinMap", "splitTokens", "jsonString", "json", "io",
    "time", "sort", "contextlib", "perf_counter", "stopwatch", "started", "Stopwatch", "originalLog",
    "stdout", "previous", "writer",
];

const ALL: &[&[&str]] = &[PYTHON, JAVASCRIPT, TYPESCRIPT, JAVA, CPP, CSHARP, PHP, R, SWIFT, GO, HARNESS];

/// Whether `name` is reserved in any target language or by the harness
pub fn is_reserved(name: &str) -> bool {
    ALL.iter().any(|words| words.contains(&name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keywords_of_every_language() {
        for word in ["lambda", "typeof", "synchronized", "nullptr", "foreach", "echo", "repeat", "guard", "chan"] {
            assert!(is_reserved(word), "{}", word);
        }
    }

    #[test]
    fn test_harness_names() {
        assert!(is_reserved("execute"));
        assert!(is_reserved("input_data"));
        assert!(is_reserved("result"));
    }

    #[test]
    fn test_ordinary_names() {
        for word in ["a", "b", "nums", "target", "grid", "Class"] {
            assert!(!is_reserved(word), "{}", word);
        }
    }
}
