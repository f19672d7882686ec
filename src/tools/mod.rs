use rmcp::Error as McpError;
use rmcp::model::{CallToolRequestParam, CallToolResult, ListToolsResult};
use tracing::debug;

use crate::F1McpService;
use crate::constants::{
    TOOL_APPLY_FILTERS, TOOL_CONSTRUCTOR_STANDINGS, TOOL_DRIVER_STANDINGS, TOOL_EVENT_INFO,
    TOOL_GET_API_ENDPOINT, TOOL_GET_API_ENDPOINTS, TOOL_GET_ENDPOINT_INFO, TOOL_GET_FILTER_INFO,
    TOOL_GET_FILTER_STRING, TOOL_SEASON_CALENDAR, TOOL_SEND_REQUEST, TOOL_SESSION_RESULTS,
};

mod apply_filters;
mod constructor_championship_standings;
mod driver_championship_standings;
mod get_api_endpoint;
mod get_api_endpoints;
mod get_endpoint_info;
mod get_event_info;
mod get_filter_info;
mod get_filter_string;
mod get_season_calendar;
mod get_session_results;
mod send_request;

pub fn register_tools() -> ListToolsResult {
    let tools = vec![
        get_api_endpoints::register_tool(),
        get_api_endpoint::register_tool(),
        get_endpoint_info::register_tool(),
        get_filter_info::register_tool(),
        get_filter_string::register_tool(),
        apply_filters::register_tool(),
        send_request::register_tool(),
        driver_championship_standings::register_tool(),
        constructor_championship_standings::register_tool(),
        get_season_calendar::register_tool(),
        get_event_info::register_tool(),
        get_session_results::register_tool(),
    ];

    ListToolsResult {
        next_cursor: None,
        tools,
    }
}

pub async fn handle_tool_call(
    service: &F1McpService,
    request: &CallToolRequestParam,
) -> Result<CallToolResult, McpError> {
    debug!(tool = %request.name, "Handling tool call");

    match request.name.as_ref() {
        TOOL_GET_API_ENDPOINTS => Ok(get_api_endpoints::handle(service)),
        TOOL_GET_API_ENDPOINT => get_api_endpoint::handle(service, request),
        TOOL_GET_ENDPOINT_INFO => get_endpoint_info::handle(service, request),
        TOOL_GET_FILTER_INFO => get_filter_info::handle(service, request),
        TOOL_GET_FILTER_STRING => get_filter_string::handle(request),
        TOOL_APPLY_FILTERS => apply_filters::handle(request),
        TOOL_SEND_REQUEST => send_request::handle(service, request).await,
        TOOL_DRIVER_STANDINGS => driver_championship_standings::handle(service, request).await,
        TOOL_CONSTRUCTOR_STANDINGS => {
            constructor_championship_standings::handle(service, request).await
        }
        TOOL_SEASON_CALENDAR => get_season_calendar::handle(service, request).await,
        TOOL_EVENT_INFO => get_event_info::handle(service, request).await,
        TOOL_SESSION_RESULTS => get_session_results::handle(service, request).await,
        _ => Err(McpError::invalid_params(
            format!("Unknown tool: {}", request.name),
            None,
        )),
    }
}
