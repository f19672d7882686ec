//! Wire types for the Ergast-compatible championship API.
//!
//! Only the fields the lookups read are modelled. Ergast encodes every number as a
//! string.

use serde::Deserialize;

/// Result page size. Large enough for a full grid or a full calendar.
pub const PAGE_LIMIT: u32 = 100;

pub fn driver_standings_url(base_url: &str, year: i32) -> String {
    format!("{base_url}{year}/driverStandings.json?limit={PAGE_LIMIT}")
}

pub fn constructor_standings_url(base_url: &str, year: i32) -> String {
    format!("{base_url}{year}/constructorStandings.json?limit={PAGE_LIMIT}")
}

pub fn season_url(base_url: &str, year: i32) -> String {
    format!("{base_url}{year}.json?limit={PAGE_LIMIT}")
}

pub fn round_url(base_url: &str, year: i32, round: u32) -> String {
    format!("{base_url}{year}/{round}.json")
}

/// `resource` is `results`, `sprint` or `qualifying`
pub fn session_results_url(base_url: &str, year: i32, round: u32, resource: &str) -> String {
    format!("{base_url}{year}/{round}/{resource}.json?limit={PAGE_LIMIT}")
}

#[derive(Debug, Deserialize)]
pub struct ErgastResponse<T> {
    #[serde(rename = "MRData")]
    pub data: T,
}

#[derive(Debug, Deserialize)]
pub struct StandingsData {
    #[serde(rename = "StandingsTable")]
    pub standings_table: StandingsTable,
}

#[derive(Debug, Deserialize)]
pub struct StandingsTable {
    #[serde(rename = "StandingsLists", default)]
    pub standings_lists: Vec<StandingsList>,
}

#[derive(Debug, Deserialize)]
pub struct StandingsList {
    #[serde(rename = "DriverStandings", default)]
    pub driver_standings:      Vec<DriverStanding>,
    #[serde(rename = "ConstructorStandings", default)]
    pub constructor_standings: Vec<ConstructorStanding>,
}

/// Position, points and wins shared by driver and constructor standings
#[derive(Debug, Deserialize)]
pub struct StandingFields {
    /// Missing for unclassified entries
    #[serde(default)]
    pub position: Option<String>,
    pub points:   String,
    pub wins:     String,
}

#[derive(Debug, Deserialize)]
pub struct DriverStanding {
    #[serde(flatten)]
    pub standing: StandingFields,
    #[serde(rename = "Driver")]
    pub driver:   Driver,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Driver {
    pub given_name:  String,
    pub family_name: String,
    /// Three-letter abbreviation, absent for older seasons
    #[serde(default)]
    pub code:        Option<String>,
}

impl Driver {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.given_name, self.family_name)
    }
}

#[derive(Debug, Deserialize)]
pub struct ConstructorStanding {
    #[serde(flatten)]
    pub standing:    StandingFields,
    #[serde(rename = "Constructor")]
    pub constructor: Constructor,
}

#[derive(Debug, Deserialize)]
pub struct Constructor {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct RaceData {
    #[serde(rename = "RaceTable")]
    pub race_table: RaceTable,
}

#[derive(Debug, Deserialize)]
pub struct RaceTable {
    #[serde(rename = "Races", default)]
    pub races: Vec<Race>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Race {
    pub round:              String,
    pub race_name:          String,
    #[serde(rename = "Circuit")]
    pub circuit:            Circuit,
    pub date:               String,
    #[serde(default)]
    pub time:               Option<String>,
    #[serde(rename = "FirstPractice", default)]
    pub first_practice:     Option<SessionDate>,
    #[serde(rename = "SecondPractice", default)]
    pub second_practice:    Option<SessionDate>,
    #[serde(rename = "ThirdPractice", default)]
    pub third_practice:     Option<SessionDate>,
    #[serde(rename = "SprintQualifying", alias = "SprintShootout", default)]
    pub sprint_qualifying:  Option<SessionDate>,
    #[serde(rename = "Sprint", default)]
    pub sprint:             Option<SessionDate>,
    #[serde(rename = "Qualifying", default)]
    pub qualifying:         Option<SessionDate>,
    #[serde(rename = "Results", default)]
    pub results:            Vec<RaceResult>,
    #[serde(rename = "SprintResults", default)]
    pub sprint_results:     Vec<RaceResult>,
    #[serde(rename = "QualifyingResults", default)]
    pub qualifying_results: Vec<QualifyingResult>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Circuit {
    #[serde(default)]
    pub circuit_name: String,
    #[serde(rename = "Location")]
    pub location:     Location,
}

#[derive(Debug, Deserialize)]
pub struct Location {
    pub locality: String,
    pub country:  String,
}

#[derive(Debug, Deserialize)]
pub struct SessionDate {
    pub date: String,
    #[serde(default)]
    pub time: Option<String>,
}

/// One classified entry of a race or sprint
#[derive(Debug, Deserialize)]
pub struct RaceResult {
    pub number:   String,
    pub position: String,
    pub points:   String,
    pub grid:     String,
    pub status:   String,
    #[serde(rename = "Driver")]
    pub driver:   Driver,
}

#[derive(Debug, Deserialize)]
pub struct QualifyingResult {
    pub number:   String,
    pub position: String,
    #[serde(rename = "Driver")]
    pub driver:   Driver,
    #[serde(rename = "Q1", default)]
    pub q1:       Option<String>,
    #[serde(rename = "Q2", default)]
    pub q2:       Option<String>,
    #[serde(rename = "Q3", default)]
    pub q3:       Option<String>,
}
