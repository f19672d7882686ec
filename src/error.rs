use rmcp::Error as McpError;
use thiserror::Error;

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, Error>;

// Internal error types for detailed error categorization
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid filter definition: {0}")]
    InvalidFilter(String),

    #[error("Invalid endpoint definition: {0}")]
    InvalidEndpoint(String),

    #[error(
        "Configuration error: filter '{filter}' not defined (endpoint '{endpoint}'). Use \
         define_filter() first."
    )]
    UndeclaredFilter { endpoint: String, filter: String },

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Request to {url} failed: {message}")]
    Request { url: String, message: String },

    #[error("Failed to decode response from {url}: {message}")]
    Decode { url: String, message: String },

    #[error("Parameter extraction failed: {0}")]
    ParameterExtraction(String),

    #[error("Logging setup failed: {0}")]
    Logging(String),
}

// Conversion to McpError for API boundaries
impl From<Error> for McpError {
    fn from(err: Error) -> Self {
        match err {
            Error::ParameterExtraction(_) => Self::invalid_params(err.to_string(), None),
            Error::Request { .. }
            | Error::Decode { .. }
            | Error::InvalidFilter(_)
            | Error::InvalidEndpoint(_)
            | Error::UndeclaredFilter { .. }
            | Error::Configuration(_)
            | Error::Logging(_) => Self::internal_error(err.to_string(), None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_undeclared_filter_names_missing_filter() {
        let err = Error::UndeclaredFilter {
            endpoint: "laps".to_string(),
            filter:   "tyre_colour".to_string(),
        };
        let message = err.to_string();
        assert!(message.starts_with("Configuration error"));
        assert!(message.contains("'tyre_colour'"));
        assert!(message.contains("'laps'"));
    }

    #[test]
    fn test_upstream_failures_map_to_internal_error() {
        let err = Error::Request {
            url:     "https://api.openf1.org/v1/laps?".to_string(),
            message: "HTTP 503: Service Unavailable".to_string(),
        };
        let mcp: McpError = err.into();
        assert_eq!(mcp.code, rmcp::model::ErrorCode::INTERNAL_ERROR);
        assert!(mcp.message.contains("HTTP 503"));

        let err = Error::Decode {
            url:     "https://api.openf1.org/v1/laps?".to_string(),
            message: "expected value at line 1 column 1".to_string(),
        };
        let mcp: McpError = err.into();
        assert_eq!(mcp.code, rmcp::model::ErrorCode::INTERNAL_ERROR);
    }

    #[test]
    fn test_parameter_errors_map_to_invalid_params() {
        let mcp: McpError = Error::ParameterExtraction("Missing required parameter: year".to_string()).into();
        assert_eq!(mcp.code, rmcp::model::ErrorCode::INVALID_PARAMS);
    }

    #[test]
    fn test_configuration_errors_map_to_internal_error() {
        let mcp: McpError = Error::Configuration("bad base url".to_string()).into();
        assert_eq!(mcp.code, rmcp::model::ErrorCode::INTERNAL_ERROR);
    }
}
