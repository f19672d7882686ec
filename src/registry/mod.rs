//! Endpoint and filter registry for the OpenF1 API.
//!
//! The registry has two phases. A [`RegistryBuilder`] accepts filter definitions and
//! endpoint registrations and rejects anything malformed. [`RegistryBuilder::build`]
//! consumes the builder and returns a frozen [`EndpointRegistry`] that only answers
//! queries, so it can be shared freely across request handlers.
//!
//! Registration is strict and lookups are permissive. Referencing an undeclared filter
//! while registering an endpoint is a startup error, while querying an unknown endpoint
//! or filter yields an empty result or a "not found" message.

use std::collections::{BTreeMap, BTreeSet};

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, warn};

use crate::error::{Error, Result};

mod filter;
pub mod openf1;

pub use filter::{FilterKind, FilterSpec, ValueType};

static IDENTIFIER_PATTERN: Lazy<std::result::Result<Regex, regex::Error>> =
    Lazy::new(|| Regex::new(r"^[a-z][a-z0-9_]*$"));

// A pattern that fails to compile rejects every name
fn validate_identifier(name: &str) -> std::result::Result<(), String> {
    if name.is_empty() {
        return Err("name must not be empty".to_string());
    }
    let pattern = IDENTIFIER_PATTERN
        .as_ref()
        .map_err(|e| format!("identifier pattern failed to compile: {e}"))?;
    if pattern.is_match(name) {
        Ok(())
    } else {
        Err(format!(
            "'{name}' must be a lowercase identifier (letters, digits and underscores)"
        ))
    }
}

/// An endpoint and the names of the filters it accepts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointDescriptor {
    pub name:              String,
    pub supported_filters: BTreeSet<String>,
}

/// Build-phase view of the registry
#[derive(Debug)]
pub struct RegistryBuilder {
    base_url:  String,
    filters:   BTreeMap<String, FilterSpec>,
    endpoints: BTreeMap<String, EndpointDescriptor>,
}

impl RegistryBuilder {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url:  base_url.into(),
            filters:   BTreeMap::new(),
            endpoints: BTreeMap::new(),
        }
    }

    /// Define a filter that endpoints can reference.
    ///
    /// Redefining an existing name overwrites it. A redefinition with different
    /// attributes is logged as a warning.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidFilter`] if the name is not a valid identifier or if a
    /// comparison filter declares allowed values.
    pub fn define_filter(&mut self, spec: FilterSpec) -> Result<&mut Self> {
        validate_identifier(&spec.name).map_err(Error::InvalidFilter)?;

        if spec.allowed_values.is_some() && !spec.is_equality() {
            return Err(Error::InvalidFilter(format!(
                "'{}' is a comparison filter; allowed values only apply to equality filters",
                spec.name
            )));
        }

        match self.filters.get(&spec.name) {
            Some(existing) if *existing == spec => {
                debug!(filter = %spec.name, "Filter redefined with identical attributes");
            }
            Some(existing) => {
                warn!(
                    filter = %spec.name,
                    previous_kind = %existing.kind,
                    previous_type = %existing.value_type,
                    kind = %spec.kind,
                    value_type = %spec.value_type,
                    "Overwriting existing filter definition"
                );
            }
            None => {}
        }

        self.filters.insert(spec.name.clone(), spec);
        Ok(self)
    }

    /// Register an endpoint with its supported filters.
    ///
    /// Every filter must already be defined. Nothing is stored unless all of them
    /// resolve. Duplicate filter names collapse.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidEndpoint`] for an invalid endpoint name and
    /// [`Error::UndeclaredFilter`] naming the first filter that is not defined.
    pub fn register_endpoint(&mut self, name: &str, filter_names: &[&str]) -> Result<&mut Self> {
        validate_identifier(name).map_err(Error::InvalidEndpoint)?;

        if let Some(missing) = filter_names
            .iter()
            .find(|filter| !self.filters.contains_key(**filter))
        {
            return Err(Error::UndeclaredFilter {
                endpoint: name.to_string(),
                filter:   (*missing).to_string(),
            });
        }

        let supported_filters: BTreeSet<String> =
            filter_names.iter().map(|f| (*f).to_string()).collect();

        debug!(
            endpoint = name,
            filters = supported_filters.len(),
            "Registered endpoint"
        );

        self.endpoints.insert(
            name.to_string(),
            EndpointDescriptor {
                name: name.to_string(),
                supported_filters,
            },
        );
        Ok(self)
    }

    /// Finish the build phase
    pub fn build(self) -> EndpointRegistry {
        EndpointRegistry {
            base_url:  self.base_url,
            filters:   self.filters,
            endpoints: self.endpoints,
        }
    }
}

/// Frozen, query-only registry of endpoints and filters
#[derive(Debug)]
pub struct EndpointRegistry {
    base_url:  String,
    filters:   BTreeMap<String, FilterSpec>,
    endpoints: BTreeMap<String, EndpointDescriptor>,
}

impl EndpointRegistry {
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn filter(&self, name: &str) -> Option<&FilterSpec> {
        self.filters.get(name)
    }

    pub fn endpoint(&self, name: &str) -> Option<&EndpointDescriptor> {
        self.endpoints.get(name)
    }

    /// Filters supported by an endpoint, keyed by name. Unknown endpoints have none.
    pub fn endpoint_filters(&self, endpoint: &str) -> BTreeMap<&str, &FilterSpec> {
        self.endpoints
            .get(endpoint)
            .map(|descriptor| {
                descriptor
                    .supported_filters
                    .iter()
                    .filter_map(|name| {
                        self.filters
                            .get(name)
                            .map(|spec| (name.as_str(), spec))
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn filter_help(&self, filter_name: &str) -> String {
        self.filters.get(filter_name).map_or_else(
            || format!("Filter '{filter_name}' not found."),
            FilterSpec::help_text,
        )
    }

    /// Help text for every filter an endpoint supports, sorted by filter name
    pub fn endpoint_help(&self, endpoint: &str) -> String {
        let filters = self.endpoint_filters(endpoint);
        if filters.is_empty() {
            return format!("Endpoint '{endpoint}' has no registered filters.");
        }

        let mut text = format!(
            "API Endpoint: {}{endpoint}\nSupported filters ({}):\n\n",
            self.base_url,
            filters.len()
        );
        let blocks: Vec<String> = filters.values().map(|spec| spec.help_text()).collect();
        text.push_str(&blocks.join("\n\n"));
        text
    }

    pub fn list_all_endpoints(&self) -> Vec<&str> {
        self.endpoints.keys().map(String::as_str).collect()
    }

    pub fn list_all_filters(&self) -> Vec<&str> {
        self.filters.keys().map(String::as_str).collect()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;

    const BASE_URL: &str = "https://api.openf1.org/v1/";

    fn builder_with_filters() -> RegistryBuilder {
        let mut builder = RegistryBuilder::new(BASE_URL);
        builder
            .define_filter(FilterSpec::new(
                "driver_number",
                FilterKind::Equality,
                ValueType::Integer,
            ))
            .unwrap()
            .define_filter(
                FilterSpec::new("session_key", FilterKind::Equality, ValueType::String)
                    .description("The unique identifier for the session."),
            )
            .unwrap()
            .define_filter(FilterSpec::new(
                "lap_duration",
                FilterKind::Comparison,
                ValueType::Integer,
            ))
            .unwrap();
        builder
    }

    #[test]
    fn test_endpoint_filters_resolve_to_specs() {
        let mut builder = builder_with_filters();
        builder
            .register_endpoint("drivers", &["driver_number"])
            .unwrap();
        let registry = builder.build();

        let filters = registry.endpoint_filters("drivers");
        assert_eq!(filters.len(), 1);
        assert_eq!(filters["driver_number"].value_type, ValueType::Integer);
        assert!(
            registry
                .filter_help("driver_number")
                .contains("driver_number=42")
        );
    }

    #[test]
    fn test_duplicate_filter_names_collapse() {
        let mut builder = builder_with_filters();
        builder
            .register_endpoint(
                "laps",
                &["lap_duration", "driver_number", "lap_duration", "session_key"],
            )
            .unwrap();
        let registry = builder.build();

        let names: Vec<&str> = registry.endpoint_filters("laps").into_keys().collect();
        assert_eq!(names, vec!["driver_number", "lap_duration", "session_key"]);
    }

    #[test]
    fn test_undeclared_filter_rejects_whole_endpoint() {
        let mut builder = builder_with_filters();
        let err = builder
            .register_endpoint("x", &["driver_number", "undeclared_filter"])
            .unwrap_err();

        match err {
            Error::UndeclaredFilter { endpoint, filter } => {
                assert_eq!(endpoint, "x");
                assert_eq!(filter, "undeclared_filter");
            }
            other => panic!("unexpected error: {other}"),
        }

        let registry = builder.build();
        assert!(registry.endpoint("x").is_none());
        assert!(registry.list_all_endpoints().is_empty());
    }

    #[test]
    fn test_endpoint_without_filters_is_listed_but_has_no_help() {
        let mut builder = builder_with_filters();
        builder.register_endpoint("team_radio", &[]).unwrap();
        let registry = builder.build();

        assert_eq!(registry.list_all_endpoints(), vec!["team_radio"]);
        assert_eq!(
            registry.endpoint_help("team_radio"),
            "Endpoint 'team_radio' has no registered filters."
        );
    }

    #[test]
    fn test_unknown_lookups_are_permissive() {
        let registry = builder_with_filters().build();

        assert!(registry.endpoint_filters("unknown_endpoint").is_empty());
        assert_eq!(
            registry.endpoint_help("unknown_endpoint"),
            "Endpoint 'unknown_endpoint' has no registered filters."
        );
        assert_eq!(
            registry.filter_help("tyre_colour"),
            "Filter 'tyre_colour' not found."
        );
    }

    #[test]
    fn test_endpoint_help_lists_filters_alphabetically() {
        let mut builder = builder_with_filters();
        builder
            .register_endpoint("laps", &["session_key", "lap_duration", "driver_number"])
            .unwrap();
        let registry = builder.build();

        let help = registry.endpoint_help("laps");
        assert!(help.starts_with("API Endpoint: https://api.openf1.org/v1/laps\n"));
        assert!(help.contains("Supported filters (3):"));

        let driver = help.find("Filter: driver_number").unwrap();
        let lap = help.find("Filter: lap_duration").unwrap();
        let session = help.find("Filter: session_key").unwrap();
        assert!(driver < lap && lap < session);
        assert!(!help.ends_with('\n'));
    }

    #[test]
    fn test_lists_are_sorted_and_unique() {
        let mut builder = builder_with_filters();
        builder
            .register_endpoint("weather", &["session_key"])
            .unwrap()
            .register_endpoint("car_data", &["driver_number"])
            .unwrap()
            .register_endpoint("laps", &["lap_duration"])
            .unwrap()
            .register_endpoint("car_data", &["driver_number", "session_key"])
            .unwrap();
        let registry = builder.build();

        assert_eq!(
            registry.list_all_endpoints(),
            vec!["car_data", "laps", "weather"]
        );
        assert_eq!(
            registry.list_all_filters(),
            vec!["driver_number", "lap_duration", "session_key"]
        );
    }

    #[test]
    fn test_identical_redefinition_is_a_no_op() {
        let mut builder = builder_with_filters();
        let before = builder.filters.clone();
        builder
            .define_filter(FilterSpec::new(
                "driver_number",
                FilterKind::Equality,
                ValueType::Integer,
            ))
            .unwrap();
        assert_eq!(builder.filters, before);
    }

    #[test]
    fn test_redefinition_overwrites() {
        let mut builder = builder_with_filters();
        builder
            .define_filter(FilterSpec::new(
                "driver_number",
                FilterKind::Comparison,
                ValueType::Integer,
            ))
            .unwrap();
        let registry = builder.build();
        assert_eq!(
            registry.filter("driver_number").map(|f| f.kind),
            Some(FilterKind::Comparison)
        );
    }

    #[test]
    fn test_malformed_definitions_fail_fast() {
        let mut builder = RegistryBuilder::new(BASE_URL);

        let empty = builder.define_filter(FilterSpec::new(
            "",
            FilterKind::Equality,
            ValueType::String,
        ));
        assert!(matches!(empty, Err(Error::InvalidFilter(_))));

        let spaced = builder.define_filter(FilterSpec::new(
            "lap number",
            FilterKind::Equality,
            ValueType::Integer,
        ));
        assert!(matches!(spaced, Err(Error::InvalidFilter(_))));

        let restricted_comparison = builder.define_filter(
            FilterSpec::new("position", FilterKind::Comparison, ValueType::Integer)
                .allowed_values(1..=3),
        );
        assert!(matches!(restricted_comparison, Err(Error::InvalidFilter(_))));

        let endpoint = builder.register_endpoint("", &[]);
        assert!(matches!(endpoint, Err(Error::InvalidEndpoint(_))));

        assert!(builder.build().list_all_filters().is_empty());
    }

    #[test]
    fn test_identifier_pattern_compiles_and_validates() {
        assert!(IDENTIFIER_PATTERN.is_ok());
        assert!(validate_identifier("driver_number").is_ok());
        assert!(validate_identifier("q3").is_ok());
        for bad in ["Driver", "1st_lap", "lap-number", "lap number", "_x"] {
            assert!(validate_identifier(bad).is_err(), "{bad} should be rejected");
        }
    }

    #[test]
    fn test_help_contains_name_kind_and_type_for_every_filter() {
        let registry = builder_with_filters().build();
        for name in registry.list_all_filters() {
            let spec = registry.filter(name).expect("listed filter must resolve");
            let help = registry.filter_help(name);
            assert!(help.contains(&spec.name));
            assert!(help.contains(spec.kind.as_str()));
            assert!(help.contains(spec.value_type.as_str()));
        }
    }
}
