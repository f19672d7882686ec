use rmcp::Error as McpError;
use rmcp::model::{CallToolRequestParam, CallToolResult, Tool};
use serde_json::json;

use crate::F1McpService;
use crate::championship;
use crate::constants::{
    DESC_CONSTRUCTOR_STANDINGS, JSON_FIELD_STANDING, PARAM_CONSTRUCTOR_NAME, PARAM_YEAR,
    TOOL_CONSTRUCTOR_STANDINGS,
};
use crate::support::params;
use crate::support::response::success_json_response;
use crate::support::schema::SchemaBuilder;

pub fn register_tool() -> Tool {
    Tool {
        name:         TOOL_CONSTRUCTOR_STANDINGS.into(),
        description:  DESC_CONSTRUCTOR_STANDINGS.into(),
        input_schema: SchemaBuilder::new()
            .add_integer_property(PARAM_YEAR, "Season year, e.g. 2021", true)
            .add_string_property(PARAM_CONSTRUCTOR_NAME, "Team name, e.g. 'Mercedes'", true)
            .build(),
    }
}

pub async fn handle(
    service: &F1McpService,
    request: &CallToolRequestParam,
) -> Result<CallToolResult, McpError> {
    let year = params::extract_required_year(request, PARAM_YEAR)?;
    let constructor_name =
        params::extract_required_string(request, PARAM_CONSTRUCTOR_NAME)?.trim();

    let standing = championship::constructor_championship_standings(
        &service.client,
        &service.config,
        year,
        constructor_name,
    )
    .await?;

    Ok(success_json_response(
        standing.clone(),
        json!({ JSON_FIELD_STANDING: standing }),
    ))
}
