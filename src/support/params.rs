use rmcp::Error as McpError;
use rmcp::model::CallToolRequestParam;
use serde_json::Value;

use crate::error::Error;

fn argument<'a>(request: &'a CallToolRequestParam, param_name: &str) -> Option<&'a Value> {
    request
        .arguments
        .as_ref()
        .and_then(|args| args.get(param_name))
}

fn extraction_error(message: String) -> McpError {
    McpError::from(Error::ParameterExtraction(message))
}

/// Extract a required string parameter from the request
pub fn extract_required_string<'a>(
    request: &'a CallToolRequestParam,
    param_name: &str,
) -> Result<&'a str, McpError> {
    argument(request, param_name)
        .and_then(Value::as_str)
        .ok_or_else(|| {
            extraction_error(format!(
                "Missing required parameter: {param_name} (expected: string value)"
            ))
        })
}

/// Extract an optional string parameter from the request with a default value
pub fn extract_optional_string<'a>(
    request: &'a CallToolRequestParam,
    param_name: &str,
    default: &'a str,
) -> &'a str {
    argument(request, param_name)
        .and_then(Value::as_str)
        .unwrap_or(default)
}

/// Extract a required value that may arrive as a JSON string, number or boolean and
/// render it as query text
pub fn extract_required_scalar(
    request: &CallToolRequestParam,
    param_name: &str,
) -> Result<String, McpError> {
    match argument(request, param_name) {
        Some(Value::String(s)) => Ok(s.clone()),
        Some(Value::Number(n)) => Ok(n.to_string()),
        Some(Value::Bool(b)) => Ok(b.to_string()),
        Some(_) => Err(extraction_error(format!(
            "Invalid parameter '{param_name}' (expected: string, number or boolean)"
        ))),
        None => Err(extraction_error(format!(
            "Missing required parameter: {param_name}"
        ))),
    }
}

/// Extract a required year. Numeric strings such as `"2024"` are accepted.
pub fn extract_required_year(
    request: &CallToolRequestParam,
    param_name: &str,
) -> Result<i32, McpError> {
    let value = argument(request, param_name)
        .ok_or_else(|| extraction_error(format!("Missing required parameter: {param_name}")))?;

    let year = match value {
        Value::Number(n) => n.as_i64().and_then(|y| i32::try_from(y).ok()),
        Value::String(s) => s.trim().parse::<i32>().ok(),
        _ => None,
    };

    year.filter(|y| (1950..=9999).contains(y)).ok_or_else(|| {
        extraction_error(format!(
            "Invalid parameter '{param_name}' (expected: a season year from 1950 onwards)"
        ))
    })
}

/// Extract an optional string array parameter from the request
pub fn extract_optional_string_array(
    request: &CallToolRequestParam,
    param_name: &str,
) -> Result<Option<Vec<String>>, McpError> {
    match argument(request, param_name) {
        Some(Value::Array(arr)) => arr
            .iter()
            .enumerate()
            .map(|(index, item)| {
                item.as_str().map(String::from).ok_or_else(|| {
                    extraction_error(format!(
                        "Invalid item in '{param_name}' array at index {index} (expected: \
                         string value)"
                    ))
                })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Some),
        Some(Value::Null) | None => Ok(None),
        Some(_) => Err(extraction_error(format!(
            "Invalid parameter '{param_name}' (expected: array value)"
        ))),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;

    fn request(arguments: Value) -> CallToolRequestParam {
        CallToolRequestParam {
            name:      "test_tool".into(),
            arguments: arguments.as_object().cloned(),
        }
    }

    #[test]
    fn test_required_string_present() {
        let req = request(json!({"endpoint": "laps"}));
        assert_eq!(extract_required_string(&req, "endpoint").unwrap(), "laps");
    }

    #[test]
    fn test_required_string_missing_or_wrong_type() {
        let req = request(json!({"endpoint": 7}));
        assert!(extract_required_string(&req, "endpoint").is_err());
        assert!(extract_required_string(&req, "filter_name").is_err());
    }

    #[test]
    fn test_optional_string_default() {
        let req = request(json!({}));
        assert_eq!(extract_optional_string(&req, "operator", "="), "=");
    }

    #[test]
    fn test_scalar_accepts_numbers_and_booleans() {
        let req = request(json!({"a": 44, "b": true, "c": "latest", "d": [1]}));
        assert_eq!(extract_required_scalar(&req, "a").unwrap(), "44");
        assert_eq!(extract_required_scalar(&req, "b").unwrap(), "true");
        assert_eq!(extract_required_scalar(&req, "c").unwrap(), "latest");
        assert!(extract_required_scalar(&req, "d").is_err());
    }

    #[test]
    fn test_year_from_number_or_string() {
        let req = request(json!({"n": 2024, "s": "2021", "bad": "soon", "old": 1901}));
        assert_eq!(extract_required_year(&req, "n").unwrap(), 2024);
        assert_eq!(extract_required_year(&req, "s").unwrap(), 2021);
        assert!(extract_required_year(&req, "bad").is_err());
        assert!(extract_required_year(&req, "old").is_err());
    }

    #[test]
    fn test_string_array_rejects_non_strings() {
        let req = request(json!({"ok": ["a&", "b&"], "bad": ["a&", 2], "scalar": "a&"}));
        assert_eq!(
            extract_optional_string_array(&req, "ok").unwrap(),
            Some(vec!["a&".to_string(), "b&".to_string()])
        );
        assert!(extract_optional_string_array(&req, "bad").is_err());
        assert!(extract_optional_string_array(&req, "scalar").is_err());
        assert_eq!(extract_optional_string_array(&req, "missing").unwrap(), None);
    }
}
