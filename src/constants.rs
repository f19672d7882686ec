// This file contains constants for the MCP server and cross-cutting concerns

// Macro to include help text files
macro_rules! include_help_text {
    ($file:expr) => {
        include_str!(concat!("../help_text/", $file))
    };
}

// Server info
pub const F1_MCP_INFO: &str = include_help_text!("f1_mcp_info.txt");

// Configuration environment variables
pub const ENV_OPENF1_BASE_URL: &str = "F1_MCP_OPENF1_BASE_URL";
pub const ENV_ERGAST_BASE_URL: &str = "F1_MCP_ERGAST_BASE_URL";
pub const ENV_REQUEST_TIMEOUT_SECS: &str = "F1_MCP_REQUEST_TIMEOUT_SECS";
pub const ENV_CONNECT_TIMEOUT_SECS: &str = "F1_MCP_CONNECT_TIMEOUT_SECS";
pub const ENV_LOG_DIR: &str = "F1_MCP_LOG_DIR";
pub const ENV_LOG_LEVEL: &str = "F1_MCP_LOG_LEVEL";
pub const ENV_REFERENCE_TIME: &str = "F1_MCP_REFERENCE_TIME";

// Configuration defaults
pub const DEFAULT_OPENF1_BASE_URL: &str = "https://api.openf1.org/v1/";
pub const DEFAULT_ERGAST_BASE_URL: &str = "https://api.jolpi.ca/ergast/f1/";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 5;
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const LOG_DIR_NAME: &str = "f1_mcp";
pub const LOG_FILE_PREFIX: &str = "f1_mcp";
pub const MAX_LOG_FILES: usize = 10;

// Parameter name constants
pub const PARAM_ENDPOINT: &str = "endpoint";
pub const PARAM_FILTER_NAME: &str = "filter_name";
pub const PARAM_FILTER_VALUE: &str = "filter_value";
pub const PARAM_OPERATOR: &str = "operator";
pub const PARAM_API_STRING: &str = "api_string";
pub const PARAM_FILTERS: &str = "filters";
pub const PARAM_YEAR: &str = "year";
pub const PARAM_DRIVER_NAME: &str = "driver_name";
pub const PARAM_CONSTRUCTOR_NAME: &str = "constructor_name";
pub const PARAM_TASK: &str = "task";
pub const PARAM_ROUND: &str = "round";
pub const PARAM_FORMAT: &str = "format";
pub const PARAM_SESSION_TYPE: &str = "session_type";

// Response field constants
pub const JSON_FIELD_ENDPOINTS: &str = "endpoints";
pub const JSON_FIELD_ENDPOINT: &str = "endpoint";
pub const JSON_FIELD_API_STRING: &str = "api_string";
pub const JSON_FIELD_FILTER_METADATA: &str = "filter_metadata";
pub const JSON_FIELD_ENDPOINT_FILTERS: &str = "endpoint_filters";
pub const JSON_FIELD_ENDPOINT_HELP: &str = "endpoint_help";
pub const JSON_FIELD_FILTER_NAME: &str = "filter_name";
pub const JSON_FIELD_FILTER_STRING: &str = "filter_string";
pub const JSON_FIELD_RESPONSE: &str = "response";
pub const JSON_FIELD_STANDING: &str = "standing";
pub const JSON_FIELD_CALENDAR: &str = "calendar";
pub const JSON_FIELD_EVENT: &str = "event";
pub const JSON_FIELD_RESULTS: &str = "results";

// OpenF1 tool descriptions
pub const DESC_GET_API_ENDPOINTS: &str = include_help_text!("openf1_tools/get_api_endpoints.txt");
pub const DESC_GET_API_ENDPOINT: &str = include_help_text!("openf1_tools/get_api_endpoint.txt");
pub const DESC_GET_ENDPOINT_INFO: &str = include_help_text!("openf1_tools/get_endpoint_info.txt");
pub const DESC_GET_FILTER_INFO: &str = include_help_text!("openf1_tools/get_filter_info.txt");
pub const DESC_GET_FILTER_STRING: &str = include_help_text!("openf1_tools/get_filter_string.txt");
pub const DESC_APPLY_FILTERS: &str = include_help_text!("openf1_tools/apply_filters.txt");
pub const DESC_SEND_REQUEST: &str = include_help_text!("openf1_tools/send_request.txt");

// Championship tool descriptions
pub const DESC_DRIVER_STANDINGS: &str =
    include_help_text!("championship_tools/driver_championship_standings.txt");
pub const DESC_CONSTRUCTOR_STANDINGS: &str =
    include_help_text!("championship_tools/constructor_championship_standings.txt");
pub const DESC_SEASON_CALENDAR: &str =
    include_help_text!("championship_tools/get_season_calendar.txt");
pub const DESC_EVENT_INFO: &str = include_help_text!("championship_tools/get_event_info.txt");
pub const DESC_SESSION_RESULTS: &str =
    include_help_text!("championship_tools/get_session_results.txt");

// Tool name constants
pub const TOOL_GET_API_ENDPOINTS: &str = "get_api_endpoints";
pub const TOOL_GET_API_ENDPOINT: &str = "get_api_endpoint";
pub const TOOL_GET_ENDPOINT_INFO: &str = "get_endpoint_info";
pub const TOOL_GET_FILTER_INFO: &str = "get_filter_info";
pub const TOOL_GET_FILTER_STRING: &str = "get_filter_string";
pub const TOOL_APPLY_FILTERS: &str = "apply_filters";
pub const TOOL_SEND_REQUEST: &str = "send_request";
pub const TOOL_DRIVER_STANDINGS: &str = "driver_championship_standings";
pub const TOOL_CONSTRUCTOR_STANDINGS: &str = "constructor_championship_standings";
pub const TOOL_SEASON_CALENDAR: &str = "get_season_calendar";
pub const TOOL_EVENT_INFO: &str = "get_event_info";
pub const TOOL_SESSION_RESULTS: &str = "get_session_results";

// Prompt names
pub const PROMPT_F1_ASSISTANT: &str = "f1-assistant";
pub const PROMPT_F1_ASSISTANT_TEXT: &str = include_help_text!("prompts/f1_assistant.txt");
