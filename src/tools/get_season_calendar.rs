use rmcp::Error as McpError;
use rmcp::model::{CallToolRequestParam, CallToolResult, Tool};
use serde_json::json;

use crate::F1McpService;
use crate::championship;
use crate::constants::{DESC_SEASON_CALENDAR, JSON_FIELD_CALENDAR, PARAM_YEAR, TOOL_SEASON_CALENDAR};
use crate::support::params;
use crate::support::response::success_json_response;
use crate::support::schema::SchemaBuilder;

pub fn register_tool() -> Tool {
    Tool {
        name:         TOOL_SEASON_CALENDAR.into(),
        description:  DESC_SEASON_CALENDAR.into(),
        input_schema: SchemaBuilder::new()
            .add_integer_property(PARAM_YEAR, "Season year, e.g. 2024", true)
            .build(),
    }
}

pub async fn handle(
    service: &F1McpService,
    request: &CallToolRequestParam,
) -> Result<CallToolResult, McpError> {
    let year = params::extract_required_year(request, PARAM_YEAR)?;
    let calendar = championship::season_calendar(&service.client, &service.config, year).await?;

    Ok(success_json_response(
        format!("Race calendar for {year}"),
        json!({ JSON_FIELD_CALENDAR: calendar }),
    ))
}
