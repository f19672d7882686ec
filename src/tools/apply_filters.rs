use rmcp::Error as McpError;
use rmcp::model::{CallToolRequestParam, CallToolResult, Tool};
use serde_json::json;

use crate::constants::{
    DESC_APPLY_FILTERS, JSON_FIELD_API_STRING, PARAM_API_STRING, PARAM_FILTERS,
    TOOL_APPLY_FILTERS,
};
use crate::query;
use crate::support::params;
use crate::support::response::success_json_response;
use crate::support::schema::SchemaBuilder;

pub fn register_tool() -> Tool {
    Tool {
        name:         TOOL_APPLY_FILTERS.into(),
        description:  DESC_APPLY_FILTERS.into(),
        input_schema: SchemaBuilder::new()
            .add_string_property(
                PARAM_API_STRING,
                "Request URL root from get_api_endpoint, e.g. https://api.openf1.org/v1/laps?",
                true,
            )
            .add_string_array_property(
                PARAM_FILTERS,
                "Filter fragments from get_filter_string",
                false,
            )
            .build(),
    }
}

pub fn handle(request: &CallToolRequestParam) -> Result<CallToolResult, McpError> {
    let api_string = params::extract_required_string(request, PARAM_API_STRING)?;
    let filters = params::extract_optional_string_array(request, PARAM_FILTERS)?.unwrap_or_default();

    let url = query::apply_filters(api_string, &filters);

    Ok(success_json_response(
        format!("Applied {} filters", filters.len()),
        json!({ JSON_FIELD_API_STRING: url }),
    ))
}
