use rmcp::Error as McpError;
use rmcp::model::{CallToolRequestParam, CallToolResult, Tool};
use serde_json::json;

use crate::F1McpService;
use crate::championship;
use crate::constants::{
    DESC_DRIVER_STANDINGS, JSON_FIELD_STANDING, PARAM_DRIVER_NAME, PARAM_YEAR,
    TOOL_DRIVER_STANDINGS,
};
use crate::support::params;
use crate::support::response::success_json_response;
use crate::support::schema::SchemaBuilder;

pub fn register_tool() -> Tool {
    Tool {
        name:         TOOL_DRIVER_STANDINGS.into(),
        description:  DESC_DRIVER_STANDINGS.into(),
        input_schema: SchemaBuilder::new()
            .add_integer_property(PARAM_YEAR, "Season year, e.g. 2021", true)
            .add_string_property(
                PARAM_DRIVER_NAME,
                "Driver's full name, e.g. 'Lewis Hamilton'",
                true,
            )
            .build(),
    }
}

pub async fn handle(
    service: &F1McpService,
    request: &CallToolRequestParam,
) -> Result<CallToolResult, McpError> {
    let year = params::extract_required_year(request, PARAM_YEAR)?;
    let driver_name = params::extract_required_string(request, PARAM_DRIVER_NAME)?.trim();

    let standing = championship::driver_championship_standings(
        &service.client,
        &service.config,
        year,
        driver_name,
    )
    .await?;

    Ok(success_json_response(
        standing.clone(),
        json!({ JSON_FIELD_STANDING: standing }),
    ))
}
