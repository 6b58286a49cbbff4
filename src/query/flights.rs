//! Flight search options

use super::{non_empty, QueryError, SearchParams};
use crate::airports;
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// "JFK to LAX", "from paris to rome", "SFO -> SEA"
static ROUTE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^\s*(?:from\s+)?(.+?)\s+(?:to|->|-)\s+(.+?)\s*$").expect("valid regex")
});

/// Date format accepted for outbound and return dates
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Most passengers a single booking can carry
pub const MAX_ADULTS: u8 = 9;

/// Trip type
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum FlightType {
    #[default]
    RoundTrip,
    OneWay,
}

impl FlightType {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().replace(['-', ' '], "_").as_str() {
            "round_trip" | "roundtrip" | "1" => Some(Self::RoundTrip),
            "one_way" | "oneway" | "2" => Some(Self::OneWay),
            _ => None,
        }
    }

    /// Numeric code used by the flights provider
    pub fn code(&self) -> u8 {
        match self {
            Self::RoundTrip => 1,
            Self::OneWay => 2,
        }
    }
}

/// Cabin class
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum TravelClass {
    #[default]
    Economy,
    PremiumEconomy,
    Business,
    First,
}

impl TravelClass {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().replace(['-', ' '], "_").as_str() {
            "economy" | "1" => Some(Self::Economy),
            "premium_economy" | "premium" | "2" => Some(Self::PremiumEconomy),
            "business" | "3" => Some(Self::Business),
            "first" | "4" => Some(Self::First),
            _ => None,
        }
    }

    /// Numeric code used by the flights provider
    pub fn code(&self) -> u8 {
        match self {
            Self::Economy => 1,
            Self::PremiumEconomy => 2,
            Self::Business => 3,
            Self::First => 4,
        }
    }
}

/// Validated flight search options
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FlightOptions {
    /// Departure IATA code
    pub departure_id: String,
    /// Arrival IATA code
    pub arrival_id: String,
    pub outbound_date: NaiveDate,
    /// Present only for round trips
    pub return_date: Option<NaiveDate>,
    pub flight_type: FlightType,
    pub travel_class: TravelClass,
    pub adults: u8,
}

impl FlightOptions {
    /// Validate the flight parameters of a request.
    ///
    /// `query` is the already-trimmed search text, used as a "from to" route
    /// when no explicit airports are given.
    pub fn from_params(
        params: &SearchParams,
        query: &str,
        today: NaiveDate,
    ) -> Result<Self, QueryError> {
        let route = split_route(query);

        let departure_text = non_empty(&params.departure_id)
            .map(str::to_string)
            .or_else(|| route.as_ref().map(|(from, _)| from.clone()))
            .ok_or(QueryError::MissingAirport("departure"))?;
        let arrival_text = non_empty(&params.arrival_id)
            .map(str::to_string)
            .or_else(|| route.as_ref().map(|(_, to)| to.clone()))
            .ok_or(QueryError::MissingAirport("arrival"))?;

        let departure_id = airports::resolve(&departure_text)
            .ok_or_else(|| QueryError::UnknownAirport(departure_text.clone()))?;
        let arrival_id = airports::resolve(&arrival_text)
            .ok_or_else(|| QueryError::UnknownAirport(arrival_text.clone()))?;

        if departure_id == arrival_id {
            return Err(QueryError::SameAirports(departure_id));
        }

        let flight_type = match non_empty(&params.flight_type) {
            Some(value) => FlightType::parse(value)
                .ok_or_else(|| QueryError::InvalidFlightType(value.to_string()))?,
            None => FlightType::default(),
        };

        let travel_class = match non_empty(&params.travel_class) {
            Some(value) => TravelClass::parse(value)
                .ok_or_else(|| QueryError::InvalidTravelClass(value.to_string()))?,
            None => TravelClass::default(),
        };

        let adults = match non_empty(&params.adults) {
            Some(value) => match value.parse::<u8>() {
                Ok(n) if (1..=MAX_ADULTS).contains(&n) => n,
                _ => return Err(QueryError::InvalidAdults(value.to_string())),
            },
            None => 1,
        };

        let outbound_date = parse_date("outbound_date", &params.outbound_date)?
            .ok_or(QueryError::MissingDate("outbound_date"))?;
        if outbound_date < today {
            return Err(QueryError::DateInPast {
                field: "outbound_date",
                date: outbound_date,
            });
        }

        let return_date = match flight_type {
            FlightType::OneWay => None,
            FlightType::RoundTrip => {
                let return_date = parse_date("return_date", &params.return_date)?
                    .ok_or(QueryError::MissingDate("return_date"))?;
                if return_date < outbound_date {
                    return Err(QueryError::ReturnBeforeOutbound {
                        outbound: outbound_date,
                        return_date,
                    });
                }
                Some(return_date)
            }
        };

        Ok(Self {
            departure_id,
            arrival_id,
            outbound_date,
            return_date,
            flight_type,
            travel_class,
            adults,
        })
    }
}

/// Split "X to Y" into its two ends
fn split_route(query: &str) -> Option<(String, String)> {
    ROUTE_RE
        .captures(query)
        .map(|cap| (cap[1].trim().to_string(), cap[2].trim().to_string()))
}

fn parse_date(field: &'static str, value: &Option<String>) -> Result<Option<NaiveDate>, QueryError> {
    match non_empty(value) {
        Some(raw) => NaiveDate::parse_from_str(raw, DATE_FORMAT)
            .map(Some)
            .map_err(|_| QueryError::InvalidDate {
                field,
                value: raw.to_string(),
            }),
        None => Ok(None),
    }
}
