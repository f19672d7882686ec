//! Championship standings, season calendar, event and session result lookups.
//!
//! Data comes from an Ergast-compatible API. Lookups fetch one page, then hand the
//! decoded payload to pure formatters so the wording can be tested without a network.
//! Rounds can be addressed by number or by a fragment of the Grand Prix name,
//! locality or country.
//! Standings are phrased in the present tense for the current season ("is", "are")
//! and in the past tense otherwise, where "current" follows [`Config::now`].

pub mod ergast;

use std::fmt;
use std::str::FromStr;

use chrono::Datelike;
use reqwest::Client;
use tracing::debug;

use self::ergast::{ErgastResponse, Race, RaceData, RaceResult, StandingFields, StandingsData};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::http_client;

/// Outcome of a lookup that may legitimately find nothing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    Found(String),
    /// Explains what was missing
    Missing(String),
}

/// A round addressed by number or by name
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundSelector {
    Number(u32),
    Name(String),
}

impl RoundSelector {
    /// Numeric text selects by number, anything else by name
    pub fn parse(raw: &str) -> Result<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(Error::ParameterExtraction(
                "round must be a round number or a Grand Prix name".to_string(),
            ));
        }
        Ok(raw
            .parse::<u32>()
            .map_or_else(|_| Self::Name(raw.to_string()), Self::Number))
    }

    fn matches(&self, race: &Race) -> bool {
        match self {
            Self::Number(number) => race.round.trim().parse::<u32>().ok() == Some(*number),
            Self::Name(name) => {
                let needle = name.to_lowercase();
                [
                    race.race_name.as_str(),
                    race.circuit.location.locality.as_str(),
                    race.circuit.location.country.as_str(),
                ]
                .iter()
                .any(|field| field.to_lowercase().contains(&needle))
            }
        }
    }
}

impl fmt::Display for RoundSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(number) => write!(f, "round {number}"),
            Self::Name(name) => write!(f, "'{name}'"),
        }
    }
}

/// How `get_event_info` renders an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventFormat {
    /// One calendar line
    Human,
    /// `key: value` lines for an agent to parse
    Llm,
}

impl FromStr for EventFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "human" => Ok(Self::Human),
            "llm" => Ok(Self::Llm),
            other => Err(Error::ParameterExtraction(format!(
                "Unknown format '{other}'. Expected 'human' or 'llm'"
            ))),
        }
    }
}

/// Sessions with published classifications
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionType {
    Race,
    Sprint,
    Qualifying,
}

impl SessionType {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Race => "race",
            Self::Sprint => "sprint",
            Self::Qualifying => "qualifying",
        }
    }

    const fn resource(self) -> &'static str {
        match self {
            Self::Race => "results",
            Self::Sprint => "sprint",
            Self::Qualifying => "qualifying",
        }
    }
}

impl FromStr for SessionType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "race" | "r" => Ok(Self::Race),
            "sprint" | "s" => Ok(Self::Sprint),
            "qualifying" | "q" => Ok(Self::Qualifying),
            other => Err(Error::ParameterExtraction(format!(
                "Unknown session type '{other}'. Expected 'race', 'sprint' or 'qualifying'"
            ))),
        }
    }
}

/// English ordinal for a championship position
pub fn ordinal(position: u32) -> String {
    let suffix = match (position % 10, position % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{position}{suffix}")
}

pub fn not_found_message(name: &str) -> String {
    format!("Could not find stats for {name}")
}

// Ergast sends "437" or "12.5"; display without a trailing ".0"
fn format_points(raw: &str) -> String {
    raw.trim()
        .parse::<f64>()
        .map_or_else(|_| raw.to_string(), |points| points.to_string())
}

fn names_match(candidate: &str, requested: &str) -> bool {
    candidate.trim().to_lowercase() == requested.trim().to_lowercase()
}

fn describe_standing(name: &str, verb: &str, standing: &StandingFields) -> String {
    let place = standing
        .position
        .as_deref()
        .and_then(|position| position.trim().parse::<u32>().ok())
        .map_or_else(|| "unclassified".to_string(), ordinal);

    format!(
        "{name} {verb} {place} with {} points and {} wins",
        format_points(&standing.points),
        standing.wins.trim()
    )
}

/// Sentence describing one driver's final (or current) championship standing
pub fn driver_standing_summary(
    standings: &StandingsData,
    year: i32,
    current_year: i32,
    driver_name: &str,
) -> String {
    let verb = if year == current_year { "is" } else { "was" };

    standings
        .standings_table
        .standings_lists
        .first()
        .and_then(|list| {
            list.driver_standings
                .iter()
                .find(|entry| names_match(&entry.driver.full_name(), driver_name))
        })
        .map_or_else(
            || not_found_message(driver_name),
            |entry| describe_standing(&entry.driver.full_name(), verb, &entry.standing),
        )
}

/// Sentence describing one constructor's championship standing
pub fn constructor_standing_summary(
    standings: &StandingsData,
    year: i32,
    current_year: i32,
    constructor_name: &str,
) -> String {
    let verb = if year == current_year { "are" } else { "were" };

    standings
        .standings_table
        .standings_lists
        .first()
        .and_then(|list| {
            list.constructor_standings
                .iter()
                .find(|entry| names_match(&entry.constructor.name, constructor_name))
        })
        .map_or_else(
            || not_found_message(constructor_name),
            |entry| describe_standing(&entry.constructor.name, verb, &entry.standing),
        )
}

/// One line per round, prefixed with a header
pub fn season_calendar_summary(races: &RaceData, year: i32) -> String {
    let rounds = &races.race_table.races;
    if rounds.is_empty() {
        return format!("No rounds found for the {year} season");
    }

    let lines = rounds.iter().map(event_line).collect::<Vec<_>>();

    format!("Season calendar:\n{}", lines.join("\n"))
}

/// `Round <n> : <name> - <locality>, <country> (<first day> - <race day>)`
pub fn event_line(race: &Race) -> String {
    let first_day = race
        .first_practice
        .as_ref()
        .map_or(race.date.as_str(), |session| session.date.as_str());
    format!(
        "Round {} : {} - {}, {} ({first_day} - {})",
        race.round,
        race.race_name,
        race.circuit.location.locality,
        race.circuit.location.country,
        race.date
    )
}

fn session_time(date: &str, time: Option<&str>) -> String {
    time.map_or_else(|| date.to_string(), |time| format!("{date} {time}"))
}

/// Event fields as `key: value` lines, sessions in weekend order
pub fn event_details(race: &Race) -> String {
    let mut lines = vec![
        format!("Round: {}", race.round),
        format!("Event name: {}", race.race_name),
    ];
    if !race.circuit.circuit_name.is_empty() {
        lines.push(format!("Circuit: {}", race.circuit.circuit_name));
    }
    lines.push(format!("Location: {}", race.circuit.location.locality));
    lines.push(format!("Country: {}", race.circuit.location.country));

    let sessions = [
        ("First practice", &race.first_practice),
        ("Second practice", &race.second_practice),
        ("Third practice", &race.third_practice),
        ("Sprint qualifying", &race.sprint_qualifying),
        ("Sprint", &race.sprint),
        ("Qualifying", &race.qualifying),
    ];
    for (label, session) in sessions {
        if let Some(session) = session {
            lines.push(format!(
                "{label}: {}",
                session_time(&session.date, session.time.as_deref())
            ));
        }
    }
    lines.push(format!(
        "Race: {}",
        session_time(&race.date, race.time.as_deref())
    ));

    format!("Event info:\n{}", lines.join("\n"))
}

fn driver_label(driver: &ergast::Driver, number: &str) -> String {
    match driver.code.as_deref() {
        Some(code) => format!("{} ({code} • {number})", driver.full_name()),
        None => format!("{} (#{number})", driver.full_name()),
    }
}

fn classification_rows(results: &[RaceResult]) -> Vec<String> {
    results
        .iter()
        .map(|entry| {
            format!(
                "{} | {} | {} | {} | {}",
                entry.position,
                driver_label(&entry.driver, &entry.number),
                format_points(&entry.points),
                entry.grid,
                entry.status
            )
        })
        .collect()
}

/// Pipe-separated classification of one session, `None` if it has no results
pub fn session_results_table(race: &Race, session: SessionType) -> Option<String> {
    let (header, rows) = match session {
        SessionType::Race => (
            "Pos | Name | Points | Grid Pos | Status",
            classification_rows(&race.results),
        ),
        SessionType::Sprint => (
            "Pos | Name | Points | Grid Pos | Status",
            classification_rows(&race.sprint_results),
        ),
        SessionType::Qualifying => (
            "Pos | Name | Q1 | Q2 | Q3",
            race.qualifying_results
                .iter()
                .map(|entry| {
                    format!(
                        "{} | {} | {} | {} | {}",
                        entry.position,
                        driver_label(&entry.driver, &entry.number),
                        entry.q1.as_deref().unwrap_or("-"),
                        entry.q2.as_deref().unwrap_or("-"),
                        entry.q3.as_deref().unwrap_or("-")
                    )
                })
                .collect(),
        ),
    };

    if rows.is_empty() {
        return None;
    }
    Some(format!(
        "{} {} {}\n{header}\n{}",
        race.race_name,
        race.date.get(..4).unwrap_or_default(),
        session.as_str(),
        rows.join("\n")
    ))
}

fn missing_round(year: i32, selector: &RoundSelector) -> Lookup {
    Lookup::Missing(format!("No {selector} found in the {year} season"))
}

/// Fetch the driver standings for `year` and describe `driver_name`'s place
///
/// # Errors
///
/// Returns an error if the request fails or the payload cannot be decoded.
pub async fn driver_championship_standings(
    client: &Client,
    config: &Config,
    year: i32,
    driver_name: &str,
) -> Result<String> {
    let url = ergast::driver_standings_url(&config.ergast_base_url, year);
    let response: ErgastResponse<StandingsData> = http_client::fetch(client, &url).await?;
    debug!(year, driver_name, "Fetched driver standings");
    Ok(driver_standing_summary(
        &response.data,
        year,
        config.now().year(),
        driver_name,
    ))
}

/// Fetch the constructor standings for `year` and describe `constructor_name`'s place
///
/// # Errors
///
/// Returns an error if the request fails or the payload cannot be decoded.
pub async fn constructor_championship_standings(
    client: &Client,
    config: &Config,
    year: i32,
    constructor_name: &str,
) -> Result<String> {
    let url = ergast::constructor_standings_url(&config.ergast_base_url, year);
    let response: ErgastResponse<StandingsData> = http_client::fetch(client, &url).await?;
    debug!(year, constructor_name, "Fetched constructor standings");
    Ok(constructor_standing_summary(
        &response.data,
        year,
        config.now().year(),
        constructor_name,
    ))
}

/// Fetch and format the race calendar for `year`
///
/// # Errors
///
/// Returns an error if the request fails or the payload cannot be decoded.
pub async fn season_calendar(client: &Client, config: &Config, year: i32) -> Result<String> {
    let url = ergast::season_url(&config.ergast_base_url, year);
    let response: ErgastResponse<RaceData> = http_client::fetch(client, &url).await?;
    debug!(year, rounds = response.data.race_table.races.len(), "Fetched season calendar");
    Ok(season_calendar_summary(&response.data, year))
}

async fn fetch_races(client: &Client, url: &str) -> Result<Vec<Race>> {
    let response: ErgastResponse<RaceData> = http_client::fetch(client, url).await?;
    Ok(response.data.race_table.races)
}

/// Fetch the races `selector` could refer to: one round by number, the season by name
async fn candidate_races(
    client: &Client,
    config: &Config,
    year: i32,
    selector: &RoundSelector,
) -> Result<Vec<Race>> {
    let url = match selector {
        RoundSelector::Number(round) => ergast::round_url(&config.ergast_base_url, year, *round),
        RoundSelector::Name(_) => ergast::season_url(&config.ergast_base_url, year),
    };
    fetch_races(client, &url).await
}

/// Describe one event of a season
///
/// # Errors
///
/// Returns an error if the request fails or the payload cannot be decoded.
pub async fn event_info(
    client: &Client,
    config: &Config,
    year: i32,
    selector: &RoundSelector,
    format: EventFormat,
) -> Result<Lookup> {
    let races = candidate_races(client, config, year, selector).await?;
    debug!(year, %selector, candidates = races.len(), "Fetched event candidates");

    Ok(races
        .iter()
        .find(|race| selector.matches(race))
        .map_or_else(
            || missing_round(year, selector),
            |race| {
                Lookup::Found(match format {
                    EventFormat::Human => event_line(race),
                    EventFormat::Llm => event_details(race),
                })
            },
        ))
}

/// Fetch the classification of one session
///
/// # Errors
///
/// Returns an error if a request fails or a payload cannot be decoded.
pub async fn session_results(
    client: &Client,
    config: &Config,
    year: i32,
    selector: &RoundSelector,
    session: SessionType,
) -> Result<Lookup> {
    let round = match selector {
        RoundSelector::Number(round) => *round,
        RoundSelector::Name(_) => {
            let races = candidate_races(client, config, year, selector).await?;
            let round = races
                .iter()
                .find(|race| selector.matches(race))
                .and_then(|race| race.round.trim().parse::<u32>().ok());
            match round {
                Some(round) => round,
                None => return Ok(missing_round(year, selector)),
            }
        }
    };

    let url = ergast::session_results_url(&config.ergast_base_url, year, round, session.resource());
    let races = fetch_races(client, &url).await?;
    debug!(year, round, session = session.as_str(), "Fetched session results");

    Ok(races
        .first()
        .and_then(|race| session_results_table(race, session))
        .map_or_else(
            || {
                Lookup::Missing(format!(
                    "No {} results for round {round} of {year}. The event may not have \
                     included a {} session.",
                    session.as_str(),
                    session.as_str()
                ))
            },
            Lookup::Found,
        ))
}
