//! Query validation module
//!
//! Turns the raw, stringly-typed parameters of `GET /api/search` into a
//! typed [`SearchQuery`]. Every rejection here is a client error and maps
//! to HTTP 400.

mod category;
mod flights;

pub use category::SearchCategory;
pub use flights::{FlightOptions, FlightType, TravelClass, DATE_FORMAT, MAX_ADULTS};

use crate::config::SearchSettings;
use crate::search::SearchQuery;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Longest query text forwarded to a provider
pub const MAX_QUERY_LENGTH: usize = 500;

/// Zoom used for map searches when none is given
pub const DEFAULT_ZOOM: u8 = 14;

/// Errors for rejected search parameters
#[derive(Debug, Clone, Error, PartialEq)]
pub enum QueryError {
    #[error("Search query is required")]
    MissingQuery,

    #[error("Search query is too long (max {0} characters)")]
    QueryTooLong(usize),

    #[error("Invalid search type: {0}")]
    InvalidCategory(String),

    #[error("Invalid page number: {0}")]
    InvalidPage(String),

    #[error("Page must be between 1 and {max}")]
    PageOutOfRange { max: u32 },

    #[error("Invalid coordinates: {0}")]
    InvalidCoordinates(String),

    #[error("Invalid zoom level: {0} (expected 3-21)")]
    InvalidZoom(String),

    #[error("Missing {0} airport")]
    MissingAirport(&'static str),

    #[error("Could not find an airport matching \"{0}\"")]
    UnknownAirport(String),

    #[error("Departure and arrival airports are the same ({0})")]
    SameAirports(String),

    #[error("{0} is required")]
    MissingDate(&'static str),

    #[error("Invalid {field}: {value} (expected YYYY-MM-DD)")]
    InvalidDate { field: &'static str, value: String },

    #[error("{field} {date} is in the past")]
    DateInPast { field: &'static str, date: NaiveDate },

    #[error("Return date {return_date} is before outbound date {outbound}")]
    ReturnBeforeOutbound {
        outbound: NaiveDate,
        return_date: NaiveDate,
    },

    #[error("Invalid flight type: {0} (expected round_trip or one_way)")]
    InvalidFlightType(String),

    #[error("Invalid travel class: {0}")]
    InvalidTravelClass(String),

    #[error("Invalid number of adults: {0} (expected 1-9)")]
    InvalidAdults(String),
}

/// Raw query parameters of `GET /api/search`.
///
/// Everything is a string so that malformed values produce a JSON 400
/// from [`SearchParams::validate`] rather than an extractor rejection.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SearchParams {
    /// Search query
    pub q: Option<String>,
    /// Result category
    #[serde(rename = "type")]
    pub search_type: Option<String>,
    /// Page number (1-indexed)
    pub page: Option<String>,

    // Maps
    pub lat: Option<String>,
    pub lng: Option<String>,
    pub zoom: Option<String>,

    // Flights
    pub departure_id: Option<String>,
    pub arrival_id: Option<String>,
    pub outbound_date: Option<String>,
    pub return_date: Option<String>,
    pub flight_type: Option<String>,
    pub travel_class: Option<String>,
    pub adults: Option<String>,
}

/// Map viewport options
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MapsOptions {
    /// Center of the search area, if the client knows it
    pub center: Option<(f64, f64)>,
    pub zoom: u8,
}

impl Default for MapsOptions {
    fn default() -> Self {
        Self {
            center: None,
            zoom: DEFAULT_ZOOM,
        }
    }
}

impl SearchParams {
    /// Create parameters for a plain query
    pub fn new(q: impl Into<String>) -> Self {
        Self {
            q: Some(q.into()),
            ..Default::default()
        }
    }

    /// Set the category
    pub fn with_type(mut self, category: impl Into<String>) -> Self {
        self.search_type = Some(category.into());
        self
    }

    /// Set the page
    pub fn with_page(mut self, page: impl Into<String>) -> Self {
        self.page = Some(page.into());
        self
    }

    /// Validate against the configured limits.
    ///
    /// `today` anchors the "not in the past" check on flight dates.
    pub fn validate(
        &self,
        limits: &SearchSettings,
        today: NaiveDate,
    ) -> Result<SearchQuery, QueryError> {
        let query = non_empty(&self.q).ok_or(QueryError::MissingQuery)?;
        if query.chars().count() > MAX_QUERY_LENGTH {
            return Err(QueryError::QueryTooLong(MAX_QUERY_LENGTH));
        }

        let category = match non_empty(&self.search_type) {
            Some(value) => value.parse::<SearchCategory>().map_err(QueryError::InvalidCategory)?,
            None => limits.default_category.parse().unwrap_or_default(),
        };

        let page = match non_empty(&self.page) {
            Some(value) => value
                .parse::<u32>()
                .map_err(|_| QueryError::InvalidPage(value.to_string()))?,
            None => 1,
        };
        if page == 0 || page > limits.max_pages {
            return Err(QueryError::PageOutOfRange {
                max: limits.max_pages,
            });
        }

        let mut search_query = SearchQuery::new(query, category).with_page(page);

        match category {
            SearchCategory::Maps => {
                search_query.maps = Some(self.maps_options()?);
            }
            SearchCategory::Flights => {
                search_query.flights = Some(FlightOptions::from_params(self, query, today)?);
            }
            _ => {}
        }

        Ok(search_query)
    }

    fn maps_options(&self) -> Result<MapsOptions, QueryError> {
        let center = match (non_empty(&self.lat), non_empty(&self.lng)) {
            (None, None) => None,
            (Some(lat), Some(lng)) => Some(parse_coordinates(lat, lng)?),
            (Some(_), None) => {
                return Err(QueryError::InvalidCoordinates(
                    "lng is required when lat is given".to_string(),
                ))
            }
            (None, Some(_)) => {
                return Err(QueryError::InvalidCoordinates(
                    "lat is required when lng is given".to_string(),
                ))
            }
        };

        let zoom = match non_empty(&self.zoom) {
            Some(value) => match value.parse::<u8>() {
                Ok(z) if (3..=21).contains(&z) => z,
                _ => return Err(QueryError::InvalidZoom(value.to_string())),
            },
            None => DEFAULT_ZOOM,
        };

        Ok(MapsOptions { center, zoom })
    }
}

fn parse_coordinates(lat: &str, lng: &str) -> Result<(f64, f64), QueryError> {
    let latitude: f64 = lat
        .parse()
        .map_err(|_| QueryError::InvalidCoordinates(format!("lat {}", lat)))?;
    let longitude: f64 = lng
        .parse()
        .map_err(|_| QueryError::InvalidCoordinates(format!("lng {}", lng)))?;

    if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
        return Err(QueryError::InvalidCoordinates(format!("lat {} out of range", lat)));
    }
    if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
        return Err(QueryError::InvalidCoordinates(format!("lng {} out of range", lng)));
    }

    Ok((latitude, longitude))
}

/// Trimmed value of an optional parameter, `None` when absent or blank
pub(crate) fn non_empty(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
}
