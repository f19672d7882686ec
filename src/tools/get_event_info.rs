use rmcp::Error as McpError;
use rmcp::model::{CallToolRequestParam, CallToolResult, Tool};
use serde_json::json;

use crate::F1McpService;
use crate::championship::{self, EventFormat, Lookup, RoundSelector};
use crate::constants::{
    DESC_EVENT_INFO, JSON_FIELD_EVENT, PARAM_FORMAT, PARAM_ROUND, PARAM_YEAR, TOOL_EVENT_INFO,
};
use crate::support::params;
use crate::support::response::{error_json_response, success_json_response};
use crate::support::schema::SchemaBuilder;

pub fn register_tool() -> Tool {
    Tool {
        name:         TOOL_EVENT_INFO.into(),
        description:  DESC_EVENT_INFO.into(),
        input_schema: SchemaBuilder::new()
            .add_integer_property(PARAM_YEAR, "Season year, e.g. 2024", true)
            .add_scalar_property(
                PARAM_ROUND,
                "Round number, or part of the Grand Prix name, locality or country",
                true,
            )
            .add_enum_property(
                PARAM_FORMAT,
                "'human' for one calendar line, 'llm' for key: value lines",
                &["human", "llm"],
                Some("human"),
                false,
            )
            .build(),
    }
}

pub async fn handle(
    service: &F1McpService,
    request: &CallToolRequestParam,
) -> Result<CallToolResult, McpError> {
    let year = params::extract_required_year(request, PARAM_YEAR)?;
    let selector = RoundSelector::parse(&params::extract_required_scalar(request, PARAM_ROUND)?)?;
    let format = params::extract_optional_string(request, PARAM_FORMAT, "human")
        .parse::<EventFormat>()?;

    let lookup =
        championship::event_info(&service.client, &service.config, year, &selector, format)
            .await?;

    Ok(match lookup {
        Lookup::Found(event) => success_json_response(
            format!("Event info for {selector} of {year}"),
            json!({ JSON_FIELD_EVENT: event }),
        ),
        Lookup::Missing(reason) => error_json_response(reason, json!({ PARAM_YEAR: year })),
    })
}
