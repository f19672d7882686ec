//! Query string assembly for OpenF1 requests.
//!
//! Both helpers are purely syntactic and never consult the registry.

/// Operator used when a caller does not supply one
pub const DEFAULT_OPERATOR: &str = "=";

/// Operators the OpenF1 API understands
pub const OPERATORS: [&str; 5] = ["=", ">", "<", ">=", "<="];

/// Format a single `name<operator>value&` fragment
pub fn filter_string(filter_name: &str, filter_value: &str, operator: &str) -> String {
    format!("{filter_name}{operator}{filter_value}&")
}

/// Append fragments to an endpoint URL and strip the trailing `&`
pub fn apply_filters<I, S>(api_string: &str, filters: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut url = api_string.to_string();
    for fragment in filters {
        url.push_str(fragment.as_ref());
    }
    url.trim_end_matches('&').to_string()
}
