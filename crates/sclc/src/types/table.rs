//! Built-in type bindings for every supported target language

use super::{TargetLanguage, TypeBinding, TypeKind};

type Row = (TypeKind, TypeBinding);

pub(super) fn standard_bindings() -> Vec<(TypeKind, TargetLanguage, TypeBinding)> {
    TargetLanguage::ALL
        .into_iter()
        .flat_map(|language| {
            bindings_for(language)
                .into_iter()
                .map(move |(kind, binding)| (kind, language, binding))
        })
        .collect()
}

fn bindings_for(language: TargetLanguage) -> [Row; 10] {
    match language {
        TargetLanguage::Python => python(),
        TargetLanguage::JavaScript => javascript(),
        TargetLanguage::TypeScript => typescript(),
        TargetLanguage::Java => java(),
        TargetLanguage::Cpp => cpp(),
        TargetLanguage::CSharp => csharp(),
        TargetLanguage::Php => php(),
        TargetLanguage::R => r(),
        TargetLanguage::Swift => swift(),
        TargetLanguage::Go => go(),
    }
}

fn python() -> [Row; 10] {
    [
        (TypeKind::Integer, TypeBinding::scalar("int", "int({0})", "0", "str({0})")),
        (TypeKind::Float, TypeBinding::scalar("float", "float({0})", "0.0", "str({0})")),
        (TypeKind::Double, TypeBinding::scalar("float", "float({0})", "0.0", "str({0})")),
        (TypeKind::Long, TypeBinding::scalar("int", "int({0})", "0", "str({0})")),
        (
            TypeKind::Boolean,
            TypeBinding::scalar("bool", "({0} == \"true\")", "False", "(\"true\" if {0} else \"false\")"),
        ),
        (TypeKind::Character, TypeBinding::scalar("str", "{0}[0]", "\"\"", "{0}")),
        (TypeKind::String, TypeBinding::scalar("str", "{0}", "\"\"", "{0}")),
        (TypeKind::Array, TypeBinding::composite("List[{0}]", "[{0}]", "[]")),
        (TypeKind::Map, TypeBinding::composite("Dict[str, {0}]", "dict({0})", "{}")),
        (TypeKind::Set, TypeBinding::composite("Set[{0}]", "{{0}}", "set()")),
    ]
}

fn javascript() -> [Row; 10] {
    [
        (TypeKind::Integer, TypeBinding::scalar("number", "parseInt({0}, 10)", "0", "String({0})")),
        (TypeKind::Float, TypeBinding::scalar("number", "parseFloat({0})", "0", "String({0})")),
        (TypeKind::Double, TypeBinding::scalar("number", "parseFloat({0})", "0", "String({0})")),
        (TypeKind::Long, TypeBinding::scalar("bigint", "BigInt({0})", "0n", "String({0})")),
        (TypeKind::Boolean, TypeBinding::scalar("boolean", "({0} === \"true\")", "false", "String({0})")),
        (TypeKind::Character, TypeBinding::scalar("string", "{0}[0]", "\"\"", "{0}")),
        (TypeKind::String, TypeBinding::scalar("string", "{0}", "\"\"", "{0}")),
        (TypeKind::Array, TypeBinding::composite("{0}[]", "{0}", "[]")),
        (TypeKind::Map, TypeBinding::composite("Object<string, {0}>", "Object.fromEntries({0})", "{}")),
        (TypeKind::Set, TypeBinding::composite("Set<{0}>", "new Set({0})", "new Set()")),
    ]
}

fn typescript() -> [Row; 10] {
    let mut rows = javascript();
    rows[8] = (TypeKind::Map, TypeBinding::composite("Record<string, {0}>", "Object.fromEntries({0})", "{}"));
    rows
}

fn java() -> [Row; 10] {
    [
        (
            TypeKind::Integer,
            TypeBinding::scalar("int", "Integer.parseInt({0})", "0", "String.valueOf({0})").boxed("Integer"),
        ),
        (
            TypeKind::Float,
            TypeBinding::scalar("float", "Float.parseFloat({0})", "0.0f", "String.valueOf({0})").boxed("Float"),
        ),
        (
            TypeKind::Double,
            TypeBinding::scalar("double", "Double.parseDouble({0})", "0.0", "String.valueOf({0})").boxed("Double"),
        ),
        (
            TypeKind::Long,
            TypeBinding::scalar("long", "Long.parseLong({0})", "0L", "String.valueOf({0})").boxed("Long"),
        ),
        (
            TypeKind::Boolean,
            TypeBinding::scalar("boolean", "Boolean.parseBoolean({0})", "false", "String.valueOf({0})")
                .boxed("Boolean"),
        ),
        (
            TypeKind::Character,
            TypeBinding::scalar("char", "{0}.charAt(0)", "' '", "String.valueOf({0})").boxed("Character"),
        ),
        (TypeKind::String, TypeBinding::scalar("String", "{0}", "\"\"", "{0}")),
        (
            TypeKind::Array,
            TypeBinding::composite(
                "ArrayList<{0}>",
                "{0}.collect(Collectors.toCollection(ArrayList::new))",
                "new ArrayList<>()",
            ),
        ),
        (
            TypeKind::Map,
            TypeBinding::composite(
                "HashMap<String, {0}>",
                "new HashMap<>({0}.collect(Collectors.toMap(Map.Entry::getKey, Map.Entry::getValue)))",
                "new HashMap<>()",
            ),
        ),
        (
            TypeKind::Set,
            TypeBinding::composite(
                "HashSet<{0}>",
                "{0}.collect(Collectors.toCollection(HashSet::new))",
                "new HashSet<>()",
            ),
        ),
    ]
}

fn cpp() -> [Row; 10] {
    [
        (TypeKind::Integer, TypeBinding::scalar("int", "std::stoi({0})", "0", "toText({0})")),
        (TypeKind::Float, TypeBinding::scalar("float", "std::stof({0})", "0.0f", "toText({0})")),
        (TypeKind::Double, TypeBinding::scalar("double", "std::stod({0})", "0.0", "toText({0})")),
        (TypeKind::Long, TypeBinding::scalar("long long", "std::stoll({0})", "0LL", "toText({0})")),
        (TypeKind::Boolean, TypeBinding::scalar("bool", "({0} == \"true\")", "false", "toText({0})")),
        (TypeKind::Character, TypeBinding::scalar("char", "{0}[0]", "' '", "toText({0})")),
        (TypeKind::String, TypeBinding::scalar("std::string", "{0}", "\"\"", "{0}")),
        (TypeKind::Array, TypeBinding::composite("std::vector<{0}>", "{0}", "{}")),
        (TypeKind::Map, TypeBinding::composite("std::unordered_map<std::string, {0}>", "toMap({0})", "{}")),
        (TypeKind::Set, TypeBinding::composite("std::unordered_set<{0}>", "toSet({0})", "{}")),
    ]
}

fn csharp() -> [Row; 10] {
    [
        (TypeKind::Integer, TypeBinding::scalar("int", "int.Parse({0})", "0", "{0}.ToString()")),
        (
            TypeKind::Float,
            TypeBinding::scalar(
                "float",
                "float.Parse({0}, CultureInfo.InvariantCulture)",
                "0f",
                "{0}.ToString(CultureInfo.InvariantCulture)",
            ),
        ),
        (
            TypeKind::Double,
            TypeBinding::scalar(
                "double",
                "double.Parse({0}, CultureInfo.InvariantCulture)",
                "0.0",
                "{0}.ToString(CultureInfo.InvariantCulture)",
            ),
        ),
        (TypeKind::Long, TypeBinding::scalar("long", "long.Parse({0})", "0L", "{0}.ToString()")),
        (
            TypeKind::Boolean,
            TypeBinding::scalar("bool", "bool.Parse({0})", "false", "({0} ? \"true\" : \"false\")"),
        ),
        (TypeKind::Character, TypeBinding::scalar("char", "{0}[0]", "' '", "{0}.ToString()")),
        (TypeKind::String, TypeBinding::scalar("string", "{0}", "\"\"", "{0}")),
        (TypeKind::Array, TypeBinding::composite("List<{0}>", "{0}.ToList()", "new List<{0}>()")),
        (
            TypeKind::Map,
            TypeBinding::composite(
                "Dictionary<string, {0}>",
                "{0}.ToDictionary(entry => entry.Key, entry => entry.Value)",
                "new Dictionary<string, {0}>()",
            ),
        ),
        (TypeKind::Set, TypeBinding::composite("HashSet<{0}>", "{0}.ToHashSet()", "new HashSet<{0}>()")),
    ]
}

fn php() -> [Row; 10] {
    [
        (TypeKind::Integer, TypeBinding::scalar("int", "intval({0})", "0", "strval({0})")),
        (TypeKind::Float, TypeBinding::scalar("float", "floatval({0})", "0.0", "strval({0})")),
        (TypeKind::Double, TypeBinding::scalar("float", "floatval({0})", "0.0", "strval({0})")),
        (TypeKind::Long, TypeBinding::scalar("int", "intval({0})", "0", "strval({0})")),
        (
            TypeKind::Boolean,
            TypeBinding::scalar("bool", "({0} === \"true\")", "false", "({0} ? \"true\" : \"false\")"),
        ),
        (TypeKind::Character, TypeBinding::scalar("string", "substr({0}, 0, 1)", "\"\"", "{0}")),
        (TypeKind::String, TypeBinding::scalar("string", "{0}", "\"\"", "{0}")),
        (TypeKind::Array, TypeBinding::composite("array", "{0}", "[]")),
        (TypeKind::Map, TypeBinding::composite("array", "array_column({0}, 1, 0)", "[]")),
        (TypeKind::Set, TypeBinding::composite("array", "array_values(array_unique({0}))", "[]")),
    ]
}

fn r() -> [Row; 10] {
    [
        (TypeKind::Integer, TypeBinding::scalar("integer", "as.integer({0})", "0L", "as.character({0})")),
        (TypeKind::Float, TypeBinding::scalar("numeric", "as.numeric({0})", "0", "as.character({0})")),
        (TypeKind::Double, TypeBinding::scalar("numeric", "as.numeric({0})", "0", "as.character({0})")),
        (
            TypeKind::Long,
            TypeBinding::scalar("integer", "as.numeric({0})", "0", "format({0}, scientific = FALSE)"),
        ),
        (
            TypeKind::Boolean,
            TypeBinding::scalar("logical", "({0} == \"true\")", "FALSE", "tolower(as.character({0}))"),
        ),
        (TypeKind::Character, TypeBinding::scalar("character", "substr({0}, 1, 1)", "\"\"", "{0}")),
        (TypeKind::String, TypeBinding::scalar("character", "{0}", "\"\"", "{0}")),
        (TypeKind::Array, TypeBinding::composite("{0} vector", "{0}", "c()")),
        (TypeKind::Map, TypeBinding::composite("named {0} list", "{0}", "list()")),
        (TypeKind::Set, TypeBinding::composite("unique {0} vector", "unique({0})", "c()")),
    ]
}

fn swift() -> [Row; 10] {
    [
        (TypeKind::Integer, TypeBinding::scalar("Int", "Int({0})!", "0", "String(describing: {0})")),
        (TypeKind::Float, TypeBinding::scalar("Float", "Float({0})!", "0", "String(describing: {0})")),
        (TypeKind::Double, TypeBinding::scalar("Double", "Double({0})!", "0", "String(describing: {0})")),
        (TypeKind::Long, TypeBinding::scalar("Int64", "Int64({0})!", "0", "String(describing: {0})")),
        (TypeKind::Boolean, TypeBinding::scalar("Bool", "({0} == \"true\")", "false", "String(describing: {0})")),
        (TypeKind::Character, TypeBinding::scalar("Character", "{0}.first!", "\" \"", "String({0})")),
        (TypeKind::String, TypeBinding::scalar("String", "String({0})", "\"\"", "{0}")),
        (TypeKind::Array, TypeBinding::composite("[{0}]", "{0}", "[]")),
        (
            TypeKind::Map,
            TypeBinding::composite("[String: {0}]", "Dictionary({0}, uniquingKeysWith: { _, last in last })", "[:]"),
        ),
        (TypeKind::Set, TypeBinding::composite("Set<{0}>", "Set({0})", "[]")),
    ]
}

fn go() -> [Row; 10] {
    [
        (TypeKind::Integer, TypeBinding::scalar("int", "parseInt({0})", "0", "fmt.Sprint({0})")),
        (TypeKind::Float, TypeBinding::scalar("float32", "parseFloat32({0})", "0", "fmt.Sprint({0})")),
        (TypeKind::Double, TypeBinding::scalar("float64", "parseFloat64({0})", "0", "fmt.Sprint({0})")),
        (TypeKind::Long, TypeBinding::scalar("int64", "parseInt64({0})", "0", "fmt.Sprint({0})")),
        (TypeKind::Boolean, TypeBinding::scalar("bool", "({0} == \"true\")", "false", "fmt.Sprint({0})")),
        (TypeKind::Character, TypeBinding::scalar("rune", "parseRune({0})", "0", "string({0})")),
        (TypeKind::String, TypeBinding::scalar("string", "{0}", "\"\"", "{0}")),
        (TypeKind::Array, TypeBinding::composite("[]{0}", "{0}", "nil")),
        (TypeKind::Map, TypeBinding::composite("map[string]{0}", "{0}", "nil")),
        (TypeKind::Set, TypeBinding::composite("map[{0}]bool", "toSet({0})", "nil")),
    ]
}
