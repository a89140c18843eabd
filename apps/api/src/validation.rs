//! Field-level request validation shared by the JSON endpoints.
//!
//! Bodies are parsed as loose JSON first so that every problem can be reported
//! with the offending field path instead of a single deserialization error.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One validation failure: which field and what was wrong with it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    pub path: String,
    pub message: String,
}

impl Issue {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Parses a raw request body into a JSON object.
pub fn parse_object(body: &[u8]) -> Result<Map<String, Value>, Vec<Issue>> {
    let value: Value = serde_json::from_slice(body)
        .map_err(|e| vec![Issue::new("", format!("Malformed JSON body: {e}"))])?;

    match value {
        Value::Object(map) => Ok(map),
        other => Err(vec![Issue::new(
            "",
            format!("Expected object, received {}", type_name(&other)),
        )]),
    }
}

/// Reads a required string field, recording an issue when it is missing,
/// not a string, or shorter than `min_len` characters.
pub fn required_string(
    obj: &Map<String, Value>,
    key: &str,
    min_len: usize,
    issues: &mut Vec<Issue>,
) -> Option<String> {
    match obj.get(key) {
        None => {
            issues.push(Issue::new(key, "Required"));
            None
        }
        Some(Value::String(s)) if s.chars().count() < min_len => {
            issues.push(Issue::new(
                key,
                format!("String must contain at least {min_len} character(s)"),
            ));
            None
        }
        Some(Value::String(s)) => Some(s.clone()),
        Some(other) => {
            issues.push(Issue::new(
                key,
                format!("Expected string, received {}", type_name(other)),
            ));
            None
        }
    }
}

/// Reads an optional string field. Absent and `null` both yield `None`.
pub fn optional_string(
    obj: &Map<String, Value>,
    key: &str,
    issues: &mut Vec<Issue>,
) -> Option<String> {
    match obj.get(key) {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s.clone()),
        Some(other) => {
            issues.push(Issue::new(
                key,
                format!("Expected string, received {}", type_name(other)),
            ));
            None
        }
    }
}

pub fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn obj(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_parse_object_rejects_malformed_json() {
        let issues = parse_object(b"{not json").unwrap_err();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].path, "");
        assert!(issues[0].message.starts_with("Malformed JSON body"));
    }

    #[test]
    fn test_parse_object_rejects_non_object() {
        let issues = parse_object(b"[1, 2]").unwrap_err();
        assert_eq!(issues[0].message, "Expected object, received array");
    }

    #[test]
    fn test_required_string_reports_missing_empty_and_wrong_type() {
        let body = obj(json!({ "empty": "", "number": 3, "ok": "fine" }));
        let mut issues = Vec::new();

        assert_eq!(required_string(&body, "missing", 1, &mut issues), None);
        assert_eq!(required_string(&body, "empty", 1, &mut issues), None);
        assert_eq!(required_string(&body, "number", 1, &mut issues), None);
        assert_eq!(
            required_string(&body, "ok", 1, &mut issues).as_deref(),
            Some("fine")
        );

        assert_eq!(
            issues,
            vec![
                Issue::new("missing", "Required"),
                Issue::new("empty", "String must contain at least 1 character(s)"),
                Issue::new("number", "Expected string, received number"),
            ]
        );
    }

    #[test]
    fn test_optional_string_treats_null_as_absent() {
        let body = obj(json!({ "a": null, "b": true, "c": "x" }));
        let mut issues = Vec::new();

        assert_eq!(optional_string(&body, "a", &mut issues), None);
        assert_eq!(optional_string(&body, "missing", &mut issues), None);
        assert_eq!(optional_string(&body, "b", &mut issues), None);
        assert_eq!(optional_string(&body, "c", &mut issues).as_deref(), Some("x"));
        assert_eq!(
            issues,
            vec![Issue::new("b", "Expected string, received boolean")]
        );
    }
}
