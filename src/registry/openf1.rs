//! The OpenF1 catalogue: every filter the API accepts, the endpoints that use them and
//! the relative path of each endpoint.

use super::{EndpointRegistry, FilterKind, FilterSpec, RegistryBuilder, ValueType};
use crate::error::Result;

/// Relative request path for each endpoint, appended to the registry base URL
const ENDPOINT_PATHS: &[(&str, &str)] = &[
    ("car_data", "car_data?"),
    ("drivers", "drivers?"),
    ("intervals", "intervals?"),
    ("laps", "laps?"),
    ("location", "location?"),
    ("meetings", "meetings?"),
    ("pit", "pit?"),
    ("position", "position?"),
    ("race_control", "race_control?"),
    ("sessions", "sessions?"),
    ("stints", "stints?"),
    ("team_radio", "team_radio?"),
    ("weather", "weather?"),
];

const TYRE_COMPOUNDS: [&str; 5] = ["SOFT", "MEDIUM", "HARD", "INTERMEDIATE", "WET"];
const RACE_CONTROL_CATEGORIES: [&str; 4] = ["CarEvent", "Drs", "Flag", "SafetyCar"];
const FLAGS: [&str; 7] = [
    "Green",
    "Yellow",
    "Red",
    "Black",
    "White",
    "Blue",
    "Checkered",
];
const MAX_POSITION: u8 = 20;

/// Look up the relative path of an endpoint
pub fn endpoint_path(endpoint: &str) -> Option<&'static str> {
    ENDPOINT_PATHS
        .iter()
        .find(|(name, _)| *name == endpoint)
        .map(|(_, path)| *path)
}

/// Full request root for an endpoint (`base_url` + relative path)
pub fn endpoint_url(registry: &EndpointRegistry, endpoint: &str) -> Option<String> {
    endpoint_path(endpoint).map(|path| format!("{}{path}", registry.base_url()))
}

fn equality(name: &str, value_type: ValueType, description: &str) -> FilterSpec {
    FilterSpec::new(name, FilterKind::Equality, value_type).description(description)
}

fn comparison(name: &str, value_type: ValueType, description: &str) -> FilterSpec {
    FilterSpec::new(name, FilterKind::Comparison, value_type).description(description)
}

/// Build the frozen OpenF1 registry
///
/// # Errors
///
/// Fails if the catalogue references a filter it does not define.
pub fn build_registry(base_url: &str) -> Result<EndpointRegistry> {
    use ValueType::{Boolean, Datetime, Integer, String};

    let mut builder = RegistryBuilder::new(base_url);

    builder
        .define_filter(comparison(
            "date",
            Datetime,
            "The UTC date and time, in ISO 8601 format.",
        ))?
        .define_filter(equality(
            "driver_number",
            Integer,
            "The unique number assigned to an F1 driver",
        ))?
        .define_filter(equality(
            "meeting_key",
            String,
            "The unique identifier for the meeting. Use 'latest' to identify the latest or \
             current meeting.",
        ))?
        .define_filter(equality(
            "session_key",
            String,
            "The unique identifier for the session. Use 'latest' to identify the latest or \
             current session.",
        ))?
        .define_filter(comparison(
            "speed",
            Integer,
            "Velocity of the car in km/h.",
        ))?;

    // Drivers
    builder
        .define_filter(equality(
            "country_code",
            String,
            "A code that uniquely identifies the country.",
        ))?
        .define_filter(equality(
            "first_name",
            String,
            "The first name of the driver.",
        ))?
        .define_filter(equality(
            "last_name",
            String,
            "The last name of the driver.",
        ))?
        .define_filter(equality(
            "full_name",
            String,
            "The full name of the driver.",
        ))?
        .define_filter(equality(
            "name_acronym",
            String,
            "Three-letter acronym of the driver's name.",
        ))?
        .define_filter(equality(
            "team_name",
            String,
            "The name of the driver's team.",
        ))?;

    // Intervals and laps
    builder
        .define_filter(comparison(
            "gap_to_leader",
            Integer,
            "The time gap to the race leader in seconds, +1 LAP if lapped, or null for the \
             race leader.",
        ))?
        .define_filter(comparison(
            "interval",
            Integer,
            "The time gap to the car ahead in seconds, +1 LAP if lapped, or null for the \
             race leader.",
        ))?
        .define_filter(comparison(
            "date_start",
            Datetime,
            "The UTC starting date and time, in ISO 8601 format.",
        ))?
        .define_filter(comparison(
            "date_end",
            Datetime,
            "The UTC ending date and time, in ISO 8601 format.",
        ))?
        .define_filter(equality(
            "is_pit_out_lap",
            Boolean,
            "A boolean value indicating whether the lap is an out lap from the pit (true if \
             it is, false otherwise).",
        ))?
        .define_filter(comparison(
            "lap_duration",
            Integer,
            "The total time taken, in seconds, to complete the entire lap.",
        ))?
        .define_filter(equality(
            "lap_number",
            Integer,
            "The sequential number of the lap within the session (starts at 1).",
        ))?;

    // Meetings and sessions
    builder
        .define_filter(equality(
            "circuit_key",
            String,
            "The unique identifier for the circuit where the event takes place.",
        ))?
        .define_filter(equality(
            "circuit_short_name",
            String,
            "The short or common name of the circuit where the event takes place.",
        ))?
        .define_filter(equality(
            "country_key",
            String,
            "The unique identifier for the country where the event takes place.",
        ))?
        .define_filter(equality(
            "country_name",
            String,
            "The name of the country where the event takes place.",
        ))?
        .define_filter(equality(
            "location",
            String,
            "The city or geographical location where the event takes place.",
        ))?
        .define_filter(equality(
            "meeting_name",
            String,
            "The name of the meeting.",
        ))?
        .define_filter(equality(
            "meeting_official_name",
            String,
            "The official name of the meeting.",
        ))?
        .define_filter(equality("year", Integer, "The year of the event."))?
        .define_filter(equality(
            "session_name",
            String,
            "The name of the session (Practice 1, Qualifying, Race, ...).",
        ))?
        .define_filter(equality(
            "session_type",
            String,
            "The type of the session (Practice, Qualifying, Race, ...).",
        ))?;

    // Pit, position and race control
    builder
        .define_filter(comparison(
            "pit_duration",
            Integer,
            "The time spent in the pit, from entering to leaving the pit lane, in seconds.",
        ))?
        .define_filter(
            equality(
                "position",
                Integer,
                "Position of the driver (starts at 1).",
            )
            .allowed_values(1..=MAX_POSITION),
        )?
        .define_filter(
            equality(
                "category",
                String,
                "The category of the event (CarEvent, Drs, Flag, SafetyCar)",
            )
            .allowed_values(RACE_CONTROL_CATEGORIES),
        )?
        .define_filter(
            equality("flag", String, "The flag displayed to the drivers.").allowed_values(FLAGS),
        )?
        .define_filter(equality(
            "message",
            String,
            "Description of the event or action.",
        ))?;

    // Stints
    builder
        .define_filter(
            equality(
                "compound",
                String,
                "The specific compound of tyre used during the stint (SOFT, MEDIUM, HARD, ...).",
            )
            .allowed_values(TYRE_COMPOUNDS),
        )?
        .define_filter(comparison(
            "lap_end",
            Integer,
            "Number of the last completed lap in this stint.",
        ))?
        .define_filter(comparison(
            "lap_start",
            Integer,
            "Number of the initial lap in this stint (starts at 1).",
        ))?
        .define_filter(equality(
            "stint_number",
            Integer,
            "The sequential number of the stint within the session (starts at 1).",
        ))?
        .define_filter(comparison(
            "tyre_age_at_start",
            Integer,
            "The age of the tyres at the start of the stint, in laps completed.",
        ))?;

    // Weather
    builder
        .define_filter(comparison(
            "air_temperature",
            Integer,
            "Air temperature (°C).",
        ))?
        .define_filter(comparison("humidity", Integer, "Humidity percentage."))?
        .define_filter(comparison("pressure", Integer, "Air pressure (mbar)."))?
        .define_filter(comparison(
            "rainfall",
            Integer,
            "Whether there is rainfall.",
        ))?
        .define_filter(comparison(
            "track_temperature",
            Integer,
            "Track temperature (°C).",
        ))?
        .define_filter(comparison(
            "wind_direction",
            Integer,
            "Wind direction (°), from 0° to 359°.",
        ))?
        .define_filter(comparison("wind_speed", Integer, "Wind speed (m/s)."))?;

    builder
        .register_endpoint(
            "car_data",
            &["date", "driver_number", "meeting_key", "session_key", "speed"],
        )?
        .register_endpoint(
            "drivers",
            &[
                "session_key",
                "meeting_key",
                "country_code",
                "driver_number",
                "first_name",
                "last_name",
                "full_name",
                "name_acronym",
                "team_name",
            ],
        )?
        .register_endpoint(
            "intervals",
            &[
                "date",
                "driver_number",
                "meeting_key",
                "session_key",
                "gap_to_leader",
                "interval",
            ],
        )?
        .register_endpoint(
            "laps",
            &[
                "date_start",
                "driver_number",
                "meeting_key",
                "session_key",
                "lap_duration",
                "lap_number",
                "is_pit_out_lap",
            ],
        )?
        .register_endpoint(
            "location",
            &["date", "driver_number", "meeting_key", "session_key"],
        )?
        .register_endpoint(
            "meetings",
            &[
                "circuit_key",
                "circuit_short_name",
                "country_code",
                "country_key",
                "country_name",
                "date_start",
                "location",
                "meeting_key",
                "meeting_name",
                "meeting_official_name",
                "year",
            ],
        )?
        .register_endpoint(
            "pit",
            &[
                "date",
                "driver_number",
                "lap_number",
                "meeting_key",
                "session_key",
                "pit_duration",
            ],
        )?
        .register_endpoint(
            "position",
            &["date", "driver_number", "meeting_key", "session_key", "position"],
        )?
        .register_endpoint(
            "race_control",
            &[
                "category",
                "date",
                "driver_number",
                "meeting_key",
                "session_key",
                "flag",
                "message",
                "lap_number",
            ],
        )?
        .register_endpoint(
            "sessions",
            &[
                "circuit_key",
                "circuit_short_name",
                "country_code",
                "country_key",
                "country_name",
                "date_start",
                "date_end",
                "location",
                "session_name",
                "session_type",
                "session_key",
                "meeting_key",
                "year",
            ],
        )?
        .register_endpoint(
            "stints",
            &[
                "compound",
                "driver_number",
                "lap_end",
                "lap_start",
                "meeting_key",
                "session_key",
                "stint_number",
                "tyre_age_at_start",
            ],
        )?
        .register_endpoint(
            "team_radio",
            &["date", "driver_number", "meeting_key", "session_key"],
        )?
        .register_endpoint(
            "weather",
            &[
                "air_temperature",
                "date",
                "humidity",
                "pressure",
                "rainfall",
                "track_temperature",
                "wind_direction",
                "wind_speed",
                "meeting_key",
                "session_key",
            ],
        )?;

    Ok(builder.build())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    const BASE_URL: &str = "https://api.openf1.org/v1/";

    #[test]
    fn test_catalogue_builds() {
        let registry = build_registry(BASE_URL).unwrap();
        assert_eq!(registry.list_all_endpoints().len(), ENDPOINT_PATHS.len());
        assert_eq!(registry.list_all_filters().len(), 45);
    }

    #[test]
    fn test_every_registered_endpoint_has_a_path() {
        let registry = build_registry(BASE_URL).unwrap();
        for endpoint in registry.list_all_endpoints() {
            assert!(
                endpoint_path(endpoint).is_some(),
                "no path for endpoint {endpoint}"
            );
        }
    }

    #[test]
    fn test_endpoint_url_joins_base_and_path() {
        let registry = build_registry(BASE_URL).unwrap();
        assert_eq!(
            endpoint_url(&registry, "laps").as_deref(),
            Some("https://api.openf1.org/v1/laps?")
        );
        assert!(endpoint_url(&registry, "tyres").is_none());
    }

    #[test]
    fn test_compound_examples_use_first_two_compounds() {
        let registry = build_registry(BASE_URL).unwrap();
        let compound = registry.filter("compound").expect("compound is defined");
        assert_eq!(
            compound.query_examples(),
            vec!["compound=SOFT", "compound=MEDIUM"]
        );
    }

    #[test]
    fn test_position_allows_first_twenty_places() {
        let registry = build_registry(BASE_URL).unwrap();
        let position = registry.filter("position").expect("position is defined");
        let allowed = position.allowed_values.as_ref().expect("restricted");
        assert_eq!(allowed.len(), 20);
        assert_eq!(allowed.first().map(String::as_str), Some("1"));
        assert_eq!(allowed.last().map(String::as_str), Some("20"));
    }

    #[test]
    fn test_laps_help_mentions_boolean_filter() {
        let registry = build_registry(BASE_URL).unwrap();
        let help = registry.endpoint_help("laps");
        assert!(help.starts_with("API Endpoint: https://api.openf1.org/v1/laps"));
        assert!(help.contains("Supported filters (7):"));
        assert!(help.contains("is_pit_out_lap=true, is_pit_out_lap=false"));
    }
}
