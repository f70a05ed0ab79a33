//! Test-case values decoded against their declared SCL types

use scl_toolchain::{AbstractType, ScalarType};
use serde_json::Value;

/// Separator of composite tokens and of joined output
pub const DELIMITER: &str = ",";

/// Separator between a map entry's key and value
pub const ENTRY_SEPARATOR: char = ':';

#[derive(Debug, Clone, PartialEq)]
pub enum ScalarValue {
    Int(i64),
    Real(f64),
    Bool(bool),
    Char(char),
    Text(String),
}

/// A decoded input value, ready to be rendered as a target-language literal
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Scalar(ScalarValue),
    /// Array or set elements in order; set elements are unique
    Sequence(Vec<ScalarValue>),
    /// Map entries in order, keys unique
    Entries(Vec<(String, ScalarValue)>),
}

impl Literal {
    /// Element count of a composite, 1 for scalars
    pub fn len(&self) -> usize {
        match self {
            Self::Scalar(_) => 1,
            Self::Sequence(values) => values.len(),
            Self::Entries(entries) => entries.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Decode `value` as a literal of type `ty`
pub fn decode(ty: &AbstractType, value: &Value) -> Result<Literal, String> {
    match ty {
        AbstractType::Scalar(scalar) => decode_scalar(*scalar, value).map(Literal::Scalar),
        AbstractType::Array(element) => sequence(*element, value).map(Literal::Sequence),
        AbstractType::Set(element) => {
            let mut unique = Vec::new();
            for item in sequence(*element, value)? {
                if !unique.contains(&item) {
                    unique.push(item);
                }
            }
            Ok(Literal::Sequence(unique))
        }
        AbstractType::Map(element) => {
            let mut decoded: Vec<(String, ScalarValue)> = Vec::new();
            for (key, item) in entries(value)? {
                let item = decode_scalar(*element, &item).map_err(|e| format!("entry `{}`: {}", key, e))?;
                match decoded.iter_mut().find(|(existing, _)| *existing == key) {
                    Some(slot) => slot.1 = item,
                    None => decoded.push((key, item)),
                }
            }
            Ok(Literal::Entries(decoded))
        }
    }
}

fn decode_scalar(scalar: ScalarType, value: &Value) -> Result<ScalarValue, String> {
    let text = match value {
        Value::String(text) => Some(text.trim()),
        _ => None,
    };
    match scalar {
        ScalarType::Integer | ScalarType::Long => {
            let int = value
                .as_i64()
                .or_else(|| text.and_then(|t| t.parse().ok()))
                .ok_or_else(|| format!("expected an integer, found {}", value))?;
            // `integer` binds to a 32-bit type in several languages
            if scalar == ScalarType::Integer && i32::try_from(int).is_err() {
                return Err(format!("{} does not fit a 32-bit integer", int));
            }
            Ok(ScalarValue::Int(int))
        }
        ScalarType::Float | ScalarType::Double => value
            .as_f64()
            .or_else(|| text.and_then(|t| t.parse().ok()))
            .filter(|v: &f64| v.is_finite())
            .map(ScalarValue::Real)
            .ok_or_else(|| format!("expected a number, found {}", value)),
        ScalarType::Boolean => match (value, text) {
            (Value::Bool(b), _) => Ok(ScalarValue::Bool(*b)),
            (_, Some("true")) => Ok(ScalarValue::Bool(true)),
            (_, Some("false")) => Ok(ScalarValue::Bool(false)),
            _ => Err(format!("expected a boolean, found {}", value)),
        },
        ScalarType::Character => match value {
            Value::String(text) => text
                .chars()
                .next()
                .map(ScalarValue::Char)
                .ok_or_else(|| "expected a character, found an empty string".to_string()),
            _ => Err(format!("expected a character, found {}", value)),
        },
        ScalarType::String => match value {
            Value::String(text) => Ok(ScalarValue::Text(text.clone())),
            Value::Array(_) | Value::Object(_) | Value::Null => Err(format!("expected a string, found {}", value)),
            other => Ok(ScalarValue::Text(other.to_string())),
        },
    }
}

/// Elements of an array or set value: a JSON array, a JSON array encoded
/// as text, or comma-joined tokens (empty tokens skipped)
fn sequence(element: ScalarType, value: &Value) -> Result<Vec<ScalarValue>, String> {
    let items = match value {
        Value::Array(items) => items.clone(),
        Value::String(text) => match serde_json::from_str::<Value>(text.trim()) {
            Ok(Value::Array(items)) => items,
            _ => split(text).map(|token| Value::String(token.to_string())).collect(),
        },
        other => return Err(format!("expected a list, found {}", other)),
    };
    items
        .iter()
        .enumerate()
        .map(|(index, item)| decode_scalar(element, item).map_err(|e| format!("element {}: {}", index, e)))
        .collect()
}

/// Entries of a map value: a JSON object (possibly encoded as text) or
/// comma-joined `key:value` tokens
fn entries(value: &Value) -> Result<Vec<(String, Value)>, String> {
    let object = match value {
        Value::Object(object) => object.clone(),
        Value::String(text) => match serde_json::from_str::<Value>(text.trim()) {
            Ok(Value::Object(object)) => object,
            _ => {
                return split(text)
                    .map(|token| {
                        token
                            .split_once(ENTRY_SEPARATOR)
                            .map(|(key, item)| (key.to_string(), Value::String(item.to_string())))
                            .ok_or_else(|| format!("map entry `{}` lacks `{}`", token, ENTRY_SEPARATOR))
                    })
                    .collect();
            }
        },
        other => return Err(format!("expected a map, found {}", other)),
    };
    Ok(object.into_iter().collect())
}

fn split(text: &str) -> impl Iterator<Item = &str> {
    text.split(DELIMITER).filter(|token| !token.is_empty())
}

/// Bring a stored expected output for a `returns` result into the
/// harness's output format. Composites accept JSON lists and objects,
/// possibly encoded as text; non-string scalars accept a quoted JSON
/// string. A string result is compared verbatim.
pub fn normalize_expected(returns: &AbstractType, value: &Value) -> String {
    match (returns, value) {
        (_, Value::Null) => String::new(),
        (AbstractType::Scalar(ScalarType::String), Value::String(text)) => text.clone(),
        (AbstractType::Scalar(_), Value::String(text)) => match serde_json::from_str::<Value>(text.trim()) {
            Ok(Value::String(inner)) => inner,
            _ => text.clone(),
        },
        (_, Value::String(text)) => match serde_json::from_str::<Value>(text.trim()) {
            Ok(parsed @ (Value::Array(_) | Value::Object(_))) => joined(&parsed),
            _ => text.clone(),
        },
        (_, other) => joined(other),
    }
}

fn joined(value: &Value) -> String {
    match value {
        Value::Array(items) => items.iter().map(joined).collect::<Vec<_>>().join(DELIMITER),
        Value::Object(object) => object
            .iter()
            .map(|(key, item)| format!("{}{}{}", key, ENTRY_SEPARATOR, joined(item)))
            .collect::<Vec<_>>()
            .join(DELIMITER),
        Value::String(text) => text.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_array_from_json_and_text() {
        let ty = AbstractType::Array(ScalarType::Integer);
        let expected = Literal::Sequence(vec![ScalarValue::Int(3), ScalarValue::Int(2), ScalarValue::Int(4)]);
        assert_eq!(decode(&ty, &json!([3, 2, 4])).unwrap(), expected);
        assert_eq!(decode(&ty, &json!("[3, 2, 4]")).unwrap(), expected);
        assert_eq!(decode(&ty, &json!("3,,2,4,")).unwrap(), expected);
        assert_eq!(decode(&ty, &json!("")).unwrap(), Literal::Sequence(vec![]));
    }

    #[test]
    fn test_set_drops_duplicates_in_order() {
        let ty = AbstractType::Set(ScalarType::String);
        assert_eq!(
            decode(&ty, &json!(["b", "a", "b"])).unwrap(),
            Literal::Sequence(vec![ScalarValue::Text("b".into()), ScalarValue::Text("a".into())])
        );
    }

    #[test]
    fn test_map_entries() {
        let ty = AbstractType::Map(ScalarType::Double);
        assert_eq!(
            decode(&ty, &json!("a:1.5,b:2,a:3")).unwrap(),
            Literal::Entries(vec![("a".into(), ScalarValue::Real(3.0)), ("b".into(), ScalarValue::Real(2.0))])
        );
        assert_eq!(
            decode(&ty, &json!({"x": 0.5})).unwrap(),
            Literal::Entries(vec![("x".into(), ScalarValue::Real(0.5))])
        );
        assert!(decode(&ty, &json!("a=1")).is_err());
    }

    #[test]
    fn test_scalars() {
        let int = AbstractType::Scalar(ScalarType::Integer);
        assert_eq!(decode(&int, &json!(" 7 ")).unwrap(), Literal::Scalar(ScalarValue::Int(7)));
        assert!(decode(&int, &json!(1.5)).is_err());

        let boolean = AbstractType::Scalar(ScalarType::Boolean);
        assert_eq!(decode(&boolean, &json!("true")).unwrap(), Literal::Scalar(ScalarValue::Bool(true)));
        assert!(decode(&boolean, &json!(1)).is_err());

        let character = AbstractType::Scalar(ScalarType::Character);
        assert_eq!(decode(&character, &json!("xyz")).unwrap(), Literal::Scalar(ScalarValue::Char('x')));
        assert!(decode(&character, &json!("")).is_err());

        let string = AbstractType::Scalar(ScalarType::String);
        assert_eq!(decode(&string, &json!(12)).unwrap(), Literal::Scalar(ScalarValue::Text("12".into())));
    }

    #[test]
    fn test_integer_range() {
        let int = AbstractType::Scalar(ScalarType::Integer);
        assert_eq!(
            decode(&int, &json!(2147483647)).unwrap(),
            Literal::Scalar(ScalarValue::Int(2147483647))
        );
        assert!(decode(&int, &json!(3000000000_i64)).is_err());
        assert!(decode(&int, &json!("-2147483649")).is_err());
        assert!(decode(&AbstractType::Array(ScalarType::Integer), &json!([1, 3000000000_i64])).is_err());

        let long = AbstractType::Scalar(ScalarType::Long);
        assert_eq!(
            decode(&long, &json!(3000000000_i64)).unwrap(),
            Literal::Scalar(ScalarValue::Int(3000000000))
        );
    }

    #[test]
    fn test_expected_normalisation() {
        let array = AbstractType::Array(ScalarType::Integer);
        let map = AbstractType::Map(ScalarType::Integer);
        let int = AbstractType::Scalar(ScalarType::Integer);
        let boolean = AbstractType::Scalar(ScalarType::Boolean);
        assert_eq!(normalize_expected(&array, &json!("[0, 1]")), "0,1");
        assert_eq!(normalize_expected(&array, &json!([0, 1])), "0,1");
        assert_eq!(normalize_expected(&array, &json!("0,1")), "0,1");
        assert_eq!(normalize_expected(&map, &json!("{\"a\": 1}")), "a:1");
        assert_eq!(normalize_expected(&int, &json!("\"42\"")), "42");
        assert_eq!(normalize_expected(&int, &json!(42)), "42");
        assert_eq!(normalize_expected(&boolean, &json!(true)), "true");
        assert_eq!(normalize_expected(&int, &Value::Null), "");
    }

    #[test]
    fn test_string_expected_is_verbatim() {
        let string = AbstractType::Scalar(ScalarType::String);
        assert_eq!(normalize_expected(&string, &json!("[]")), "[]");
        assert_eq!(normalize_expected(&string, &json!("{\"a\": 1}")), "{\"a\": 1}");
        assert_eq!(normalize_expected(&string, &json!("\"x\"")), "\"x\"");
        assert_eq!(normalize_expected(&string, &json!("abc")), "abc");
        assert_eq!(normalize_expected(&string, &json!(12)), "12");
    }
}
