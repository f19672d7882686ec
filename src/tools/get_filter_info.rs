use rmcp::Error as McpError;
use rmcp::model::{CallToolRequestParam, CallToolResult, Tool};
use serde_json::json;

use crate::F1McpService;
use crate::constants::{
    DESC_GET_FILTER_INFO, JSON_FIELD_FILTER_METADATA, JSON_FIELD_FILTER_NAME, PARAM_FILTER_NAME,
    TOOL_GET_FILTER_INFO,
};
use crate::support::params;
use crate::support::response::success_json_response;
use crate::support::schema::SchemaBuilder;

pub fn register_tool() -> Tool {
    Tool {
        name:         TOOL_GET_FILTER_INFO.into(),
        description:  DESC_GET_FILTER_INFO.into(),
        input_schema: SchemaBuilder::new()
            .add_string_property(PARAM_FILTER_NAME, "Filter name, e.g. 'compound'", true)
            .build(),
    }
}

/// Unknown filters are not an error: `filter_metadata` carries the "not found" text
pub fn handle(
    service: &F1McpService,
    request: &CallToolRequestParam,
) -> Result<CallToolResult, McpError> {
    let filter_name = params::extract_required_string(request, PARAM_FILTER_NAME)?.trim();
    let help = service.registry.filter_help(filter_name);
    let message = if service.registry.filter(filter_name).is_some() {
        format!("Filter '{filter_name}' found")
    } else {
        help.clone()
    };

    Ok(success_json_response(
        message,
        json!({
            JSON_FIELD_FILTER_NAME: filter_name,
            JSON_FIELD_FILTER_METADATA: help,
        }),
    ))
}
