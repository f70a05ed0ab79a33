//! Typed intermediate representation of an SCL program
//!
//! Built once by the frontend and read-only afterwards; every backend and
//! the materializer consume the same `ParsedScl`.

use std::fmt;

use crate::types::AbstractType;

/// One positional parameter of `execute`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputDeclaration {
    pub name: String,
    pub ty: AbstractType,
    /// Declared element count; informational, never checked against input
    pub size: Option<u64>,
}

impl InputDeclaration {
    pub fn new(name: impl Into<String>, ty: AbstractType, size: Option<u64>) -> Self {
        Self {
            name: name.into(),
            ty,
            size,
        }
    }

    pub fn is_composite(&self) -> bool {
        self.ty.is_composite()
    }
}

/// The return type of `execute`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReturnDeclaration {
    pub ty: AbstractType,
}

/// A validated SCL program
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedScl {
    pub inputs: Vec<InputDeclaration>,
    pub return_type: ReturnDeclaration,
}

impl ParsedScl {
    pub fn new(inputs: Vec<InputDeclaration>, return_type: ReturnDeclaration) -> Self {
        Self { inputs, return_type }
    }

    pub fn input(&self, name: &str) -> Option<&InputDeclaration> {
        self.inputs.iter().find(|input| input.name == name)
    }

    pub fn returns(&self) -> &AbstractType {
        &self.return_type.ty
    }
}

impl fmt::Display for ParsedScl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "execute(")?;
        for (index, input) in self.inputs.iter().enumerate() {
            write!(f, "    #{} {}: {}", index, input.name, input.ty)?;
            if let Some(size) = input.size {
                write!(f, " [size {}]", size)?;
            }
            writeln!(f)?;
        }
        write!(f, ") -> {}", self.return_type.ty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ScalarType;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_display_dump() {
        let parsed = ParsedScl::new(
            vec![
                InputDeclaration::new("nums", AbstractType::Array(ScalarType::Integer), Some(4)),
                InputDeclaration::new("target", AbstractType::Scalar(ScalarType::Integer), None),
            ],
            ReturnDeclaration {
                ty: AbstractType::Scalar(ScalarType::Boolean),
            },
        );
        assert_eq!(
            parsed.to_string(),
            "execute(\n    #0 nums: array<integer> [size 4]\n    #1 target: integer\n) -> boolean"
        );
        assert!(parsed.input("nums").unwrap().is_composite());
    }
}
