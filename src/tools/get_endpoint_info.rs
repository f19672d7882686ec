use rmcp::Error as McpError;
use rmcp::model::{CallToolRequestParam, CallToolResult, Tool};
use serde_json::json;

use crate::F1McpService;
use crate::constants::{
    DESC_GET_ENDPOINT_INFO, JSON_FIELD_ENDPOINT, JSON_FIELD_ENDPOINT_FILTERS,
    JSON_FIELD_ENDPOINT_HELP, PARAM_ENDPOINT, TOOL_GET_ENDPOINT_INFO,
};
use crate::support::params;
use crate::support::response::success_json_response;
use crate::support::schema::SchemaBuilder;

pub fn register_tool() -> Tool {
    Tool {
        name:         TOOL_GET_ENDPOINT_INFO.into(),
        description:  DESC_GET_ENDPOINT_INFO.into(),
        input_schema: SchemaBuilder::new()
            .add_string_property(PARAM_ENDPOINT, "OpenF1 endpoint name, e.g. 'stints'", true)
            .build(),
    }
}

/// Unknown endpoints are not an error: they report an empty filter set
pub fn handle(
    service: &F1McpService,
    request: &CallToolRequestParam,
) -> Result<CallToolResult, McpError> {
    let endpoint = params::extract_required_string(request, PARAM_ENDPOINT)?.trim();
    let filters = service.registry.endpoint_filters(endpoint);

    Ok(success_json_response(
        format!("Endpoint '{endpoint}' supports {} filters", filters.len()),
        json!({
            JSON_FIELD_ENDPOINT: endpoint,
            JSON_FIELD_ENDPOINT_FILTERS: filters,
            JSON_FIELD_ENDPOINT_HELP: service.registry.endpoint_help(endpoint),
        }),
    ))
}
