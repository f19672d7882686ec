use rmcp::Error as McpError;
use rmcp::model::{CallToolRequestParam, CallToolResult, Tool};
use serde_json::json;
use tracing::info;

use crate::F1McpService;
use crate::constants::{DESC_SEND_REQUEST, JSON_FIELD_RESPONSE, PARAM_API_STRING, TOOL_SEND_REQUEST};
use crate::http_client;
use crate::support::params;
use crate::support::response::success_json_response;
use crate::support::schema::SchemaBuilder;

pub fn register_tool() -> Tool {
    Tool {
        name:         TOOL_SEND_REQUEST.into(),
        description:  DESC_SEND_REQUEST.into(),
        input_schema: SchemaBuilder::new()
            .add_string_property(PARAM_API_STRING, "Fully assembled OpenF1 request URL", true)
            .build(),
    }
}

pub async fn handle(
    service: &F1McpService,
    request: &CallToolRequestParam,
) -> Result<CallToolResult, McpError> {
    let api_string = params::extract_required_string(request, PARAM_API_STRING)?.trim();
    info!(url = api_string, "Sending OpenF1 request");

    let body = http_client::send_request(&service.client, api_string).await?;
    let message = body.as_array().map_or_else(
        || "Request succeeded".to_string(),
        |records| format!("Request returned {} records", records.len()),
    );

    Ok(success_json_response(
        message,
        json!({ JSON_FIELD_RESPONSE: body }),
    ))
}
