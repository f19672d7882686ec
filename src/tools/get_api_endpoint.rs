use rmcp::Error as McpError;
use rmcp::model::{CallToolRequestParam, CallToolResult, Tool};
use serde_json::json;

use crate::F1McpService;
use crate::constants::{
    DESC_GET_API_ENDPOINT, JSON_FIELD_API_STRING, JSON_FIELD_ENDPOINT, JSON_FIELD_ENDPOINTS,
    JSON_FIELD_FILTER_METADATA, PARAM_ENDPOINT, TOOL_GET_API_ENDPOINT,
};
use crate::registry::openf1;
use crate::support::params;
use crate::support::response::{error_json_response, success_json_response};
use crate::support::schema::SchemaBuilder;

pub fn register_tool() -> Tool {
    Tool {
        name:         TOOL_GET_API_ENDPOINT.into(),
        description:  DESC_GET_API_ENDPOINT.into(),
        input_schema: SchemaBuilder::new()
            .add_string_property(PARAM_ENDPOINT, "OpenF1 endpoint name, e.g. 'laps'", true)
            .build(),
    }
}

pub fn handle(
    service: &F1McpService,
    request: &CallToolRequestParam,
) -> Result<CallToolResult, McpError> {
    let endpoint = params::extract_required_string(request, PARAM_ENDPOINT)?.trim();

    let api_string = service
        .registry
        .endpoint(endpoint)
        .and_then(|_| openf1::endpoint_url(&service.registry, endpoint));

    let Some(api_string) = api_string else {
        let available = service.registry.list_all_endpoints();
        return Ok(error_json_response(
            format!(
                "Unknown endpoint '{endpoint}'. Available endpoints: {}",
                available.join(", ")
            ),
            json!({ JSON_FIELD_ENDPOINTS: available }),
        ));
    };

    Ok(success_json_response(
        format!("Endpoint '{endpoint}' resolved"),
        json!({
            JSON_FIELD_ENDPOINT: endpoint,
            JSON_FIELD_API_STRING: api_string,
            JSON_FIELD_FILTER_METADATA: service.registry.endpoint_filters(endpoint),
        }),
    ))
}
