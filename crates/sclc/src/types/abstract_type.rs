//! Abstract (language-independent) SCL types

use std::fmt;

/// Scalar SCL types; the only types a composite may contain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarType {
    Integer,
    Float,
    Double,
    Long,
    Boolean,
    Character,
    String,
}

impl ScalarType {
    pub const ALL: [ScalarType; 7] = [
        ScalarType::Integer,
        ScalarType::Float,
        ScalarType::Double,
        ScalarType::Long,
        ScalarType::Boolean,
        ScalarType::Character,
        ScalarType::String,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ScalarType::Integer => "integer",
            ScalarType::Float => "float",
            ScalarType::Double => "double",
            ScalarType::Long => "long",
            ScalarType::Boolean => "boolean",
            ScalarType::Character => "character",
            ScalarType::String => "string",
        }
    }

    pub fn kind(self) -> TypeKind {
        match self {
            ScalarType::Integer => TypeKind::Integer,
            ScalarType::Float => TypeKind::Float,
            ScalarType::Double => TypeKind::Double,
            ScalarType::Long => TypeKind::Long,
            ScalarType::Boolean => TypeKind::Boolean,
            ScalarType::Character => TypeKind::Character,
            ScalarType::String => TypeKind::String,
        }
    }

    pub fn is_numeric(self) -> bool {
        matches!(
            self,
            ScalarType::Integer | ScalarType::Float | ScalarType::Double | ScalarType::Long
        )
    }
}

impl fmt::Display for ScalarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Every registered type name, scalar or composite
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeKind {
    Integer,
    Float,
    Double,
    Long,
    Boolean,
    Character,
    String,
    Array,
    Map,
    Set,
}

impl TypeKind {
    pub const ALL: [TypeKind; 10] = [
        TypeKind::Integer,
        TypeKind::Float,
        TypeKind::Double,
        TypeKind::Long,
        TypeKind::Boolean,
        TypeKind::Character,
        TypeKind::String,
        TypeKind::Array,
        TypeKind::Map,
        TypeKind::Set,
    ];

    /// Resolve a type token. Matching is case-insensitive and accepts
    /// `char` as an alias of `character`.
    pub fn from_token(token: &str) -> Option<Self> {
        match token.to_ascii_lowercase().as_str() {
            "integer" => Some(TypeKind::Integer),
            "float" => Some(TypeKind::Float),
            "double" => Some(TypeKind::Double),
            "long" => Some(TypeKind::Long),
            "boolean" => Some(TypeKind::Boolean),
            "character" | "char" => Some(TypeKind::Character),
            "string" => Some(TypeKind::String),
            "array" => Some(TypeKind::Array),
            "map" => Some(TypeKind::Map),
            "set" => Some(TypeKind::Set),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            TypeKind::Array => "array",
            TypeKind::Map => "map",
            TypeKind::Set => "set",
            other => other.scalar().map_or("", ScalarType::name),
        }
    }

    pub fn is_composite(self) -> bool {
        matches!(self, TypeKind::Array | TypeKind::Map | TypeKind::Set)
    }

    /// The scalar this kind names, if it is not a composite
    pub fn scalar(self) -> Option<ScalarType> {
        match self {
            TypeKind::Integer => Some(ScalarType::Integer),
            TypeKind::Float => Some(ScalarType::Float),
            TypeKind::Double => Some(ScalarType::Double),
            TypeKind::Long => Some(ScalarType::Long),
            TypeKind::Boolean => Some(ScalarType::Boolean),
            TypeKind::Character => Some(ScalarType::Character),
            TypeKind::String => Some(ScalarType::String),
            TypeKind::Array | TypeKind::Map | TypeKind::Set => None,
        }
    }
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A fully resolved SCL type. Composites carry a scalar element type; nesting
/// is not representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AbstractType {
    Scalar(ScalarType),
    Array(ScalarType),
    Map(ScalarType),
    Set(ScalarType),
}

impl AbstractType {
    /// Build a composite from its kind and element type
    pub fn composite(kind: TypeKind, element: ScalarType) -> Option<Self> {
        match kind {
            TypeKind::Array => Some(AbstractType::Array(element)),
            TypeKind::Map => Some(AbstractType::Map(element)),
            TypeKind::Set => Some(AbstractType::Set(element)),
            _ => None,
        }
    }

    pub fn kind(&self) -> TypeKind {
        match self {
            AbstractType::Scalar(scalar) => scalar.kind(),
            AbstractType::Array(_) => TypeKind::Array,
            AbstractType::Map(_) => TypeKind::Map,
            AbstractType::Set(_) => TypeKind::Set,
        }
    }

    pub fn element(&self) -> Option<ScalarType> {
        match self {
            AbstractType::Scalar(_) => None,
            AbstractType::Array(e) | AbstractType::Map(e) | AbstractType::Set(e) => Some(*e),
        }
    }

    pub fn is_composite(&self) -> bool {
        !matches!(self, AbstractType::Scalar(_))
    }
}

impl fmt::Display for AbstractType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AbstractType::Scalar(scalar) => write!(f, "{}", scalar),
            other => match other.element() {
                Some(element) => write!(f, "{}<{}>", other.kind(), element),
                None => write!(f, "{}", other.kind()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_tokens() {
        assert_eq!(TypeKind::from_token("integer"), Some(TypeKind::Integer));
        assert_eq!(TypeKind::from_token("Integer"), Some(TypeKind::Integer));
        assert_eq!(TypeKind::from_token("char"), Some(TypeKind::Character));
        assert_eq!(TypeKind::from_token("set"), Some(TypeKind::Set));
        assert_eq!(TypeKind::from_token("int"), None);
        assert_eq!(TypeKind::from_token("return"), None);
    }

    #[test]
    fn test_composite_display() {
        assert_eq!(AbstractType::Array(ScalarType::Integer).to_string(), "array<integer>");
        assert_eq!(AbstractType::Scalar(ScalarType::Long).to_string(), "long");
        assert_eq!(AbstractType::Map(ScalarType::String).kind(), TypeKind::Map);
    }

    #[test]
    fn test_kind_scalar_roundtrip() {
        for scalar in ScalarType::ALL {
            assert_eq!(scalar.kind().scalar(), Some(scalar));
        }
        assert!(TypeKind::Array.scalar().is_none());
    }
}
