use rmcp::Error as McpError;
use rmcp::model::{CallToolRequestParam, CallToolResult, Tool};
use serde_json::json;

use crate::constants::{
    DESC_GET_FILTER_STRING, JSON_FIELD_FILTER_STRING, PARAM_FILTER_NAME, PARAM_FILTER_VALUE,
    PARAM_OPERATOR, TOOL_GET_FILTER_STRING,
};
use crate::error::Error;
use crate::query::{self, DEFAULT_OPERATOR, OPERATORS};
use crate::support::params;
use crate::support::response::success_json_response;
use crate::support::schema::SchemaBuilder;

pub fn register_tool() -> Tool {
    Tool {
        name:         TOOL_GET_FILTER_STRING.into(),
        description:  DESC_GET_FILTER_STRING.into(),
        input_schema: SchemaBuilder::new()
            .add_string_property(PARAM_FILTER_NAME, "Filter name, e.g. 'driver_number'", true)
            .add_scalar_property(PARAM_FILTER_VALUE, "Value to filter on, e.g. 44", true)
            .add_enum_property(
                PARAM_OPERATOR,
                "Comparison operator",
                &OPERATORS,
                Some(DEFAULT_OPERATOR),
                false,
            )
            .build(),
    }
}

pub fn handle(request: &CallToolRequestParam) -> Result<CallToolResult, McpError> {
    let filter_name = params::extract_required_string(request, PARAM_FILTER_NAME)?.trim();
    let filter_value = params::extract_required_scalar(request, PARAM_FILTER_VALUE)?;
    let operator = params::extract_optional_string(request, PARAM_OPERATOR, DEFAULT_OPERATOR);

    if !OPERATORS.iter().any(|candidate| *candidate == operator) {
        return Err(Error::ParameterExtraction(format!(
            "Invalid operator '{operator}' (expected one of: {})",
            OPERATORS.join(", ")
        ))
        .into());
    }

    let fragment = query::filter_string(filter_name, &filter_value, operator);

    Ok(success_json_response(
        format!("Built filter fragment {fragment}"),
        json!({ JSON_FIELD_FILTER_STRING: fragment }),
    ))
}
