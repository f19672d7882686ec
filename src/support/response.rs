//! The `{status, message, data}` envelope every tool replies with.
//!
//! An error-status envelope is still a successful MCP call, so the agent can read the
//! message and retry. Protocol-level failures go through `rmcp::Error` instead.

use rmcp::model::{CallToolResult, Content};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Success,
    Error,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonResponse {
    pub status:  ResponseStatus,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data:    Option<Value>,
}

impl JsonResponse {
    pub fn new(status: ResponseStatus, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            data: None,
        }
    }

    /// Attach a payload. A payload that fails to serialize is stored as `null`.
    #[must_use]
    pub fn with_data(mut self, data: impl Serialize) -> Self {
        self.data = Some(serde_json::to_value(data).unwrap_or(Value::Null));
        self
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| {
            r#"{"status":"error","message":"Failed to serialize response"}"#.to_string()
        })
    }

    pub fn into_tool_result(self) -> CallToolResult {
        CallToolResult::success(vec![Content::text(self.to_json())])
    }
}

pub fn success_json_response(message: impl Into<String>, data: impl Serialize) -> CallToolResult {
    JsonResponse::new(ResponseStatus::Success, message)
        .with_data(data)
        .into_tool_result()
}

pub fn error_json_response(message: impl Into<String>, data: impl Serialize) -> CallToolResult {
    JsonResponse::new(ResponseStatus::Error, message)
        .with_data(data)
        .into_tool_result()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_success_envelope() {
        let response = JsonResponse::new(ResponseStatus::Success, "Found 13 endpoints")
            .with_data(json!({"endpoints": ["laps"]}));
        let value: Value = serde_json::from_str(&response.to_json()).unwrap();
        assert_eq!(value["status"], "success");
        assert_eq!(value["message"], "Found 13 endpoints");
        assert_eq!(value["data"]["endpoints"][0], "laps");
    }

    #[test]
    fn test_error_envelope_without_data_omits_field() {
        let response = JsonResponse::new(ResponseStatus::Error, "nope");
        let value: Value = serde_json::from_str(&response.to_json()).unwrap();
        assert_eq!(value["status"], "error");
        assert!(value.get("data").is_none());
    }
}
