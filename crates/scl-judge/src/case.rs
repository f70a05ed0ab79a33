//! Stored test cases

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::JudgeResult;

/// One test case as stored alongside a problem
///
/// `input` holds one value per declared SCL input, either as JSON
/// (`[3, 2, 4]`) or as the harness's comma-joined text (`"3,2,4"`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestCase {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub input: Vec<Value>,
    #[serde(default)]
    pub output: Value,
    #[serde(rename = "isSample", default)]
    pub is_sample: bool,
}

impl TestCase {
    pub fn new(id: impl Into<String>, input: Vec<Value>, output: Value) -> Self {
        Self {
            id: id.into(),
            input,
            output,
            is_sample: false,
        }
    }

    pub fn sample(mut self) -> Self {
        self.is_sample = true;
        self
    }
}

/// Parse a JSON array of test cases
pub fn parse_cases(json: &str) -> JudgeResult<Vec<TestCase>> {
    Ok(serde_json::from_str(json)?)
}

pub fn load_cases(path: &Path) -> JudgeResult<Vec<TestCase>> {
    parse_cases(&fs::read_to_string(path)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_stored_field_names() {
        let cases = parse_cases(
            r#"[{"_id": "c1", "input": [[3, 2, 4], 6], "output": "[1, 2]", "isSample": true},
                {"input": ["1,2"]}]"#,
        )
        .unwrap();

        assert_eq!(cases[0].id, "c1");
        assert_eq!(cases[0].input, vec![json!([3, 2, 4]), json!(6)]);
        assert_eq!(cases[0].output, json!("[1, 2]"));
        assert!(cases[0].is_sample);

        assert_eq!(cases[1].id, "");
        assert_eq!(cases[1].output, Value::Null);
        assert!(!cases[1].is_sample);
    }

    #[test]
    fn test_rejects_non_array() {
        assert!(parse_cases(r#"{"_id": "c1"}"#).is_err());
    }
}
