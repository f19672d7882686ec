use rmcp::model::{CallToolResult, Tool};
use serde_json::json;

use crate::F1McpService;
use crate::constants::{DESC_GET_API_ENDPOINTS, JSON_FIELD_ENDPOINTS, TOOL_GET_API_ENDPOINTS};
use crate::support::response::success_json_response;
use crate::support::schema;

pub fn register_tool() -> Tool {
    Tool {
        name:         TOOL_GET_API_ENDPOINTS.into(),
        description:  DESC_GET_API_ENDPOINTS.into(),
        input_schema: schema::empty_object_schema(),
    }
}

pub fn handle(service: &F1McpService) -> CallToolResult {
    let endpoints = service.registry.list_all_endpoints();
    success_json_response(
        format!("Found {} endpoints", endpoints.len()),
        json!({ JSON_FIELD_ENDPOINTS: endpoints }),
    )
}
