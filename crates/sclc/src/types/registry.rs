//! Type bindings and the validated registry that serves them

use std::collections::HashMap;

use log::warn;

use super::{AbstractType, ScalarType, TargetLanguage, TypeKind};
use crate::common::{CompileError, CompileResult};

/// Placeholder substituted by [`fill`]
const PLACEHOLDER: &str = "{0}";

/// Substitute `value` for every `{0}` in a binding template
pub fn fill(template: &str, value: &str) -> String {
    template.replace(PLACEHOLDER, value)
}

/// How a value of a type is turned into its printed form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputRule {
    /// Template over the value expression yielding the language's string form
    Format(&'static str),
    /// Elements (or `key:value` pairs) joined on one line
    Joined { delimiter: &'static str },
}

/// Binding of one abstract type in one target language.
///
/// For scalars `parse` is a template over the raw token expression. For
/// composites `native` and `default` are templates over the element's generic
/// name, and `parse` is a template over an expression yielding the parsed
/// elements (or key/value pairs for maps) that collects them into the
/// container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeBinding {
    pub native: &'static str,
    /// Name used when the scalar appears as a generic argument, if it differs
    pub generic: Option<&'static str>,
    pub parse: &'static str,
    pub default: &'static str,
    pub output: OutputRule,
}

impl TypeBinding {
    pub const fn scalar(
        native: &'static str,
        parse: &'static str,
        default: &'static str,
        format: &'static str,
    ) -> Self {
        Self {
            native,
            generic: None,
            parse,
            default,
            output: OutputRule::Format(format),
        }
    }

    pub const fn boxed(mut self, generic: &'static str) -> Self {
        self.generic = Some(generic);
        self
    }

    pub const fn composite(native: &'static str, parse: &'static str, default: &'static str) -> Self {
        Self {
            native,
            generic: None,
            parse,
            default,
            output: OutputRule::Joined { delimiter: "," },
        }
    }

    pub fn generic_name(&self) -> &'static str {
        self.generic.unwrap_or(self.native)
    }
}

/// Options controlling registry construction
#[derive(Debug, Clone, Copy, Default)]
pub struct RegistryOptions {
    /// Substitute the integer binding for missing scalar bindings instead of
    /// failing. Compatibility mode for generators that silently defaulted
    /// unrecognized element types to `int`.
    pub lenient_fallback: bool,
}

/// Single source of truth for type bindings.
///
/// Construction validates that every [`TypeKind`] has a binding for every
/// supported language, so generation never meets a gap at runtime.
#[derive(Debug, Clone)]
pub struct TypeRegistry {
    bindings: HashMap<(TypeKind, TargetLanguage), TypeBinding>,
    languages: Vec<TargetLanguage>,
    options: RegistryOptions,
}

impl TypeRegistry {
    /// The built-in registry covering every [`TargetLanguage`]
    pub fn standard() -> CompileResult<Self> {
        Self::with_options(RegistryOptions::default())
    }

    pub fn with_options(options: RegistryOptions) -> CompileResult<Self> {
        Self::from_bindings(super::table::standard_bindings(), &TargetLanguage::ALL, options)
    }

    /// Build a registry from explicit bindings, validating completeness
    pub fn from_bindings(
        bindings: impl IntoIterator<Item = (TypeKind, TargetLanguage, TypeBinding)>,
        languages: &[TargetLanguage],
        options: RegistryOptions,
    ) -> CompileResult<Self> {
        let registry = Self {
            bindings: bindings
                .into_iter()
                .map(|(kind, language, binding)| ((kind, language), binding))
                .collect(),
            languages: languages.to_vec(),
            options,
        };
        registry.validate()?;
        Ok(registry)
    }

    fn validate(&self) -> CompileResult<()> {
        for &language in &self.languages {
            for kind in TypeKind::ALL {
                if self.bindings.contains_key(&(kind, language)) {
                    continue;
                }
                // Lenient mode only needs the fallback target itself
                let tolerated = self.options.lenient_fallback
                    && !kind.is_composite()
                    && self.bindings.contains_key(&(TypeKind::Integer, language));
                if !tolerated {
                    return Err(CompileError::missing_binding(kind.name(), language.id()));
                }
            }
        }
        Ok(())
    }

    pub fn languages(&self) -> &[TargetLanguage] {
        &self.languages
    }

    pub fn options(&self) -> RegistryOptions {
        self.options
    }

    pub fn lookup(&self, kind: TypeKind, language: TargetLanguage) -> CompileResult<&TypeBinding> {
        if let Some(binding) = self.bindings.get(&(kind, language)) {
            return Ok(binding);
        }
        if self.options.lenient_fallback && !kind.is_composite() {
            if let Some(binding) = self.bindings.get(&(TypeKind::Integer, language)) {
                warn!("no {} binding for `{}`; falling back to integer", language, kind);
                return Ok(binding);
            }
        }
        Err(CompileError::missing_binding(kind.name(), language.id()))
    }

    pub fn scalar(&self, scalar: ScalarType, language: TargetLanguage) -> CompileResult<&TypeBinding> {
        self.lookup(scalar.kind(), language)
    }

    /// Native type name, with composite templates resolved
    pub fn native(&self, ty: &AbstractType, language: TargetLanguage) -> CompileResult<String> {
        let binding = self.lookup(ty.kind(), language)?;
        match ty.element() {
            Some(element) => {
                let generic = self.scalar(element, language)?.generic_name();
                Ok(fill(binding.native, generic))
            }
            None => Ok(binding.native.to_string()),
        }
    }

    /// Element type name as used inside generic containers
    pub fn generic(&self, scalar: ScalarType, language: TargetLanguage) -> CompileResult<&'static str> {
        Ok(self.scalar(scalar, language)?.generic_name())
    }

    pub fn default_value(&self, ty: &AbstractType, language: TargetLanguage) -> CompileResult<String> {
        let binding = self.lookup(ty.kind(), language)?;
        match ty.element() {
            Some(element) => Ok(fill(binding.default, self.generic(element, language)?)),
            None => Ok(binding.default.to_string()),
        }
    }

    /// Expression converting the raw token expression into the scalar
    pub fn parse_expr(&self, scalar: ScalarType, language: TargetLanguage, token: &str) -> CompileResult<String> {
        Ok(fill(self.scalar(scalar, language)?.parse, token))
    }

    /// Expression collecting a sequence of parsed elements into the container
    pub fn collect_expr(&self, ty: &AbstractType, language: TargetLanguage, sequence: &str) -> CompileResult<String> {
        Ok(fill(self.lookup(ty.kind(), language)?.parse, sequence))
    }

    /// Expression rendering a scalar value as a string
    pub fn format_expr(&self, scalar: ScalarType, language: TargetLanguage, value: &str) -> CompileResult<String> {
        match self.scalar(scalar, language)?.output {
            OutputRule::Format(template) => Ok(fill(template, value)),
            OutputRule::Joined { .. } => Ok(value.to_string()),
        }
    }

    /// Delimiter used when printing a composite of this type
    pub fn delimiter(&self, ty: &AbstractType, language: TargetLanguage) -> CompileResult<&'static str> {
        match self.lookup(ty.kind(), language)?.output {
            OutputRule::Joined { delimiter } => Ok(delimiter),
            OutputRule::Format(_) => Ok(","),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::ErrorKind;

    fn integer_only() -> Vec<(TypeKind, TargetLanguage, TypeBinding)> {
        vec![(
            TypeKind::Integer,
            TargetLanguage::Python,
            TypeBinding::scalar("int", "int({0})", "0", "str({0})"),
        )]
    }

    #[test]
    fn test_standard_registry_is_complete() {
        let registry = TypeRegistry::standard().unwrap();
        for language in TargetLanguage::ALL {
            for kind in TypeKind::ALL {
                assert!(registry.lookup(kind, language).is_ok(), "{} / {}", kind, language);
            }
        }
    }

    #[test]
    fn test_incomplete_registry_fails_eagerly() {
        let err = TypeRegistry::from_bindings(
            integer_only(),
            &[TargetLanguage::Python],
            RegistryOptions::default(),
        )
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingBinding);
    }

    #[test]
    fn test_lenient_fallback_uses_integer() {
        let mut bindings = integer_only();
        for kind in [TypeKind::Array, TypeKind::Map, TypeKind::Set] {
            bindings.push((kind, TargetLanguage::Python, TypeBinding::composite("List[{0}]", "[{0}]", "[]")));
        }
        let registry = TypeRegistry::from_bindings(
            bindings,
            &[TargetLanguage::Python],
            RegistryOptions { lenient_fallback: true },
        )
        .unwrap();

        let binding = registry.lookup(TypeKind::Double, TargetLanguage::Python).unwrap();
        assert_eq!(binding.native, "int");
        assert_eq!(
            registry.native(&AbstractType::Array(ScalarType::Boolean), TargetLanguage::Python).unwrap(),
            "List[int]"
        );
    }

    #[test]
    fn test_composite_native_uses_generic_name() {
        let registry = TypeRegistry::standard().unwrap();
        let ty = AbstractType::Array(ScalarType::Integer);
        assert_eq!(registry.native(&ty, TargetLanguage::Java).unwrap(), "ArrayList<Integer>");
        assert_eq!(registry.native(&ty, TargetLanguage::Python).unwrap(), "List[int]");
        assert_eq!(registry.native(&ty, TargetLanguage::Go).unwrap(), "[]int");
    }

    #[test]
    fn test_parse_and_format_templates() {
        let registry = TypeRegistry::standard().unwrap();
        assert_eq!(
            registry.parse_expr(ScalarType::Integer, TargetLanguage::Python, "input_data[0]").unwrap(),
            "int(input_data[0])"
        );
        assert_eq!(
            registry.format_expr(ScalarType::Boolean, TargetLanguage::Java, "result").unwrap(),
            "String.valueOf(result)"
        );
    }
}
