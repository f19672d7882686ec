//! Filter specifications for OpenF1 query parameters.
//!
//! A filter is a named query parameter that one or more endpoints accept. Each filter
//! declares how it compares ([`FilterKind`]) and what it compares against
//! ([`ValueType`]). Help text and example fragments are derived from those two
//! attributes and never from live data.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

const EXAMPLE_STRING: &str = "example_value";
const EXAMPLE_INTEGER: &str = "42";
const EXAMPLE_DATETIME_START: &str = "2024-01-01T00:00:00Z";
const EXAMPLE_DATETIME_LATER: &str = "2024-01-01T10:30:00Z";
const EXAMPLE_DATETIME_END: &str = "2024-12-31T00:00:00Z";

/// How a filter compares values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterKind {
    /// Exact match only
    Equality,
    /// `>`, `<`, `>=`, `<=` and `=`
    Comparison,
}

impl FilterKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Equality => "equality",
            Self::Comparison => "comparison",
        }
    }
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "equality" => Ok(Self::Equality),
            "comparison" => Ok(Self::Comparison),
            other => Err(Error::InvalidFilter(format!(
                "Unknown filter kind '{other}'. Expected 'equality' or 'comparison'"
            ))),
        }
    }
}

/// Type of the value a filter compares against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
    String,
    Integer,
    Datetime,
    /// `true`/`false` filters, always compared by equality
    #[serde(alias = "binary")]
    Boolean,
}

impl ValueType {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Integer => "integer",
            Self::Datetime => "datetime",
            Self::Boolean => "boolean",
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ValueType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "string" => Ok(Self::String),
            "integer" => Ok(Self::Integer),
            "datetime" => Ok(Self::Datetime),
            "boolean" | "binary" => Ok(Self::Boolean),
            other => Err(Error::InvalidFilter(format!(
                "Unknown value type '{other}'. Expected one of: string, integer, datetime, boolean"
            ))),
        }
    }
}

/// Specification for an API filter parameter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSpec {
    pub name:           String,
    pub kind:           FilterKind,
    pub value_type:     ValueType,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description:    String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowed_values: Option<Vec<String>>,
}

impl FilterSpec {
    pub fn new(name: impl Into<String>, kind: FilterKind, value_type: ValueType) -> Self {
        Self {
            name: name.into(),
            kind,
            value_type,
            description: String::new(),
            allowed_values: None,
        }
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Restrict the filter to an ordered set of values. An empty list leaves the filter
    /// unrestricted.
    #[must_use]
    pub fn allowed_values<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: ToString,
    {
        let values: Vec<String> = values.into_iter().map(|v| v.to_string()).collect();
        self.allowed_values = if values.is_empty() {
            None
        } else {
            Some(values)
        };
        self
    }

    /// Whether the filter only supports exact matches. Boolean filters are always
    /// equality filters whatever their declared kind.
    pub fn is_equality(&self) -> bool {
        self.value_type == ValueType::Boolean || self.kind == FilterKind::Equality
    }

    /// Generate example query fragments for this filter
    pub fn query_examples(&self) -> Vec<String> {
        let name = &self.name;

        if self.value_type == ValueType::Boolean {
            return vec![format!("{name}=true"), format!("{name}=false")];
        }

        match self.kind {
            FilterKind::Equality => {
                if let Some(values) = &self.allowed_values {
                    return values
                        .iter()
                        .take(2)
                        .map(|value| format!("{name}={value}"))
                        .collect();
                }
                match self.value_type {
                    ValueType::String => vec![format!("{name}={EXAMPLE_STRING}")],
                    ValueType::Integer => vec![format!("{name}={EXAMPLE_INTEGER}")],
                    ValueType::Datetime => vec![
                        format!("{name}={EXAMPLE_DATETIME_START}"),
                        format!("{name}={EXAMPLE_DATETIME_LATER}"),
                    ],
                    ValueType::Boolean => Vec::new(),
                }
            }
            FilterKind::Comparison => match self.value_type {
                ValueType::Integer => vec![format!("{name}>=10"), format!("{name}<100")],
                ValueType::Datetime => vec![
                    format!("{name}>={EXAMPLE_DATETIME_START}"),
                    format!("{name}<{EXAMPLE_DATETIME_END}"),
                ],
                // Lexicographic bounds
                ValueType::String => vec![format!("{name}>M"), format!("{name}<Z")],
                ValueType::Boolean => Vec::new(),
            },
        }
    }

    /// Render the help block for this filter
    pub fn help_text(&self) -> String {
        let mut text = format!(
            "Filter: {}\n  Type: {} ({})\n",
            self.name, self.kind, self.value_type
        );

        if !self.description.is_empty() {
            text.push_str(&format!("  Description: {}\n", self.description));
        }

        if let Some(values) = &self.allowed_values {
            text.push_str(&format!("  Allowed values: {}\n", values.join(", ")));
        }

        let examples = self.query_examples();
        if !examples.is_empty() {
            text.push_str(&format!("  Examples: {}", examples.join(", ")));
        }

        text
    }
}
