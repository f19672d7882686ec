use rmcp::Error as McpError;
use rmcp::model::{CallToolRequestParam, CallToolResult, Tool};
use serde_json::json;

use crate::F1McpService;
use crate::championship::{self, Lookup, RoundSelector, SessionType};
use crate::constants::{
    DESC_SESSION_RESULTS, JSON_FIELD_RESULTS, PARAM_ROUND, PARAM_SESSION_TYPE, PARAM_YEAR,
    TOOL_SESSION_RESULTS,
};
use crate::support::params;
use crate::support::response::{error_json_response, success_json_response};
use crate::support::schema::SchemaBuilder;

pub fn register_tool() -> Tool {
    Tool {
        name:         TOOL_SESSION_RESULTS.into(),
        description:  DESC_SESSION_RESULTS.into(),
        input_schema: SchemaBuilder::new()
            .add_integer_property(PARAM_YEAR, "Season year, e.g. 2024", true)
            .add_scalar_property(
                PARAM_ROUND,
                "Round number, or part of the Grand Prix name, locality or country",
                true,
            )
            .add_enum_property(
                PARAM_SESSION_TYPE,
                "Session to classify",
                &["race", "sprint", "qualifying"],
                Some("race"),
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
    let session = params::extract_optional_string(request, PARAM_SESSION_TYPE, "race")
        .parse::<SessionType>()?;

    let lookup =
        championship::session_results(&service.client, &service.config, year, &selector, session)
            .await?;

    Ok(match lookup {
        Lookup::Found(results) => success_json_response(
            format!("{} results for {selector} of {year}", session.as_str()),
            json!({ JSON_FIELD_RESULTS: results }),
        ),
        Lookup::Missing(reason) => error_json_response(
            reason,
            json!({ PARAM_YEAR: year, PARAM_SESSION_TYPE: session.as_str() }),
        ),
    })
}
