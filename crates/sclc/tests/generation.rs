//! End-to-end generation across every backend

use pretty_assertions::assert_eq;
use scl_toolchain::backend::{BackendRegistry, EmitContext, EmitMode, GenerateOptions};
use scl_toolchain::{ErrorKind, ParsedScl, TargetLanguage, TypeRegistry, parse};

const PROGRAMS: &[&str] = &[
    "integer -> return",
    "integer->a\ninteger->b\ninteger->return",
    "array -> integer nums 4\ninteger -> target\narray -> integer return",
    "map -> string labels\nset -> character seen 3\ndouble -> weight\nlong -> count\nboolean -> return",
    "# every scalar\nfloat -> f\ndouble -> d\nlong -> l\nboolean -> b\ncharacter -> c\nstring -> s\nmap -> long return",
];

/// Parameters between the first `(` and its matching `)`
fn count_params(signature: &str) -> usize {
    let Some(start) = signature.find('(') else {
        return 0;
    };
    let mut depth = 0usize;
    let mut commas = 0;
    let mut empty = true;
    for c in signature[start + 1..].chars() {
        match c {
            '(' | '[' | '<' | '{' => depth += 1,
            ')' if depth == 0 => break,
            ')' | ']' | '>' | '}' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => commas += 1,
            _ => {}
        }
        if !c.is_whitespace() {
            empty = false;
        }
    }
    if empty { 0 } else { commas + 1 }
}

fn setup() -> (TypeRegistry, BackendRegistry) {
    (TypeRegistry::standard().unwrap(), BackendRegistry::standard())
}

#[test]
fn stub_has_one_parameter_per_input_in_order() {
    let (registry, backends) = setup();
    for source in PROGRAMS {
        let parsed = parse(source).unwrap();
        for language in TargetLanguage::ALL {
            let backend = backends.get(language).unwrap();
            let ctx = EmitContext::new(&parsed, &registry, language, EmitMode::Harness);
            let signature = backend.signature(&ctx).unwrap();
            assert_eq!(
                count_params(&signature),
                parsed.inputs.len(),
                "{} / {}: {}",
                language,
                source,
                signature
            );

            let mut last = 0;
            for input in &parsed.inputs {
                let position = signature[last..]
                    .find(input.name.as_str())
                    .map(|offset| offset + last)
                    .unwrap_or_else(|| panic!("{} missing {} in {}", language, input.name, signature));
                last = position + input.name.len();
            }

            let code = backends
                .generate(&parsed, &registry, language, GenerateOptions::default())
                .unwrap();
            assert!(code.contains(&signature), "{}", language);
        }
    }
}

#[test]
fn generation_is_deterministic() {
    let (registry, backends) = setup();
    for source in PROGRAMS {
        let parsed = parse(source).unwrap();
        for language in TargetLanguage::ALL {
            for stub_only in [false, true] {
                let options = GenerateOptions { stub_only };
                let first = backends.generate(&parsed, &registry, language, options).unwrap();
                let second = backends.generate(&parsed, &registry, language, options).unwrap();
                assert_eq!(first, second);
            }
        }
    }
}

#[test]
fn stub_only_omits_the_harness() {
    let (registry, backends) = setup();
    let parsed = parse(PROGRAMS[2]).unwrap();
    for language in TargetLanguage::ALL {
        let full = backends
            .generate(&parsed, &registry, language, GenerateOptions::default())
            .unwrap();
        let stub = backends
            .generate(&parsed, &registry, language, GenerateOptions { stub_only: true })
            .unwrap();
        assert!(stub.len() < full.len(), "{}", language);
        assert!(!stub.contains("inputData") && !stub.contains("input_data"), "{}", language);
    }
}

#[test]
fn scenario_a_python_two_integers() {
    let (registry, backends) = setup();
    let parsed = parse("integer->a\ninteger->b\ninteger->return").unwrap();
    let code = backends
        .generate(&parsed, &registry, TargetLanguage::Python, GenerateOptions::default())
        .unwrap();
    assert!(code.contains("def execute(a: int, b: int) -> int:\n"));
    assert!(code.contains("a = int(input_data[0])\n"));
    assert!(code.contains("b = int(input_data[1])\n"));
}

#[test]
fn scenario_b_array_and_target() {
    let (registry, backends) = setup();
    let parsed: ParsedScl = parse("array->integer nums 4\ninteger->target\ninteger->return").unwrap();
    assert_eq!(parsed.inputs[0].size, Some(4));

    let expectations = [
        (TargetLanguage::Python, "nums = [int(token) for token in input_data[0].split(\",\") if token]"),
        (TargetLanguage::Python, "target = int(input_data[1])"),
        (
            TargetLanguage::Go,
            "nums := mapTokens(inputData[0], func(token string) int { return parseInt(token) })",
        ),
        (TargetLanguage::R, "nums <- as.integer(splitTokens(input_data[1]))"),
        (TargetLanguage::Cpp, "int target = std::stoi(inputData[1]);"),
    ];
    for (language, line) in expectations {
        let code = backends
            .generate(&parsed, &registry, language, GenerateOptions::default())
            .unwrap();
        assert!(code.contains(line), "{} lacks `{}`:\n{}", language, line, code);
    }
}

#[test]
fn scenario_c_missing_arrow() {
    let err = parse("integer a").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Syntax);
    assert_eq!(err.context().unwrap().line, 1);
    assert!(err.to_string().contains("line 1"));
}

#[test]
fn name_errors() {
    assert_eq!(
        parse("integer -> x\nfloat -> x\ninteger -> return").unwrap_err().kind(),
        ErrorKind::DuplicateName
    );
    for word in ["def", "func", "String", "echo", "execute"] {
        let source = format!("integer -> {}\ninteger -> return", word);
        assert_eq!(parse(&source).unwrap_err().kind(), ErrorKind::ReservedWord, "{}", word);
    }
}
