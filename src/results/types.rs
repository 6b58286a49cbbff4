//! Result type definitions

use serde::{Deserialize, Serialize};
use url::Url;

/// A single normalized search result.
///
/// No provider fills every field; each one populates the subset its
/// upstream API knows about and the rest stay `None` (and are left out of
/// the JSON).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SearchResult {
    /// 1-based position across the whole result set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<u32>,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snippet: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub displayed_link: Option<String>,
    /// Publisher, store or channel
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    /// Full size image, for image results
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub favicon: Option<String>,
    /// Video length
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,

    // Shopping and places
    /// Display price, e.g. "$19.99" or "$$"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extracted_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reviews: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    /// Business type, e.g. "Coffee shop"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub place_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hours: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,

    // Category specific detail records
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flight: Option<FlightDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub book: Option<BookDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quote: Option<QuoteDetails>,
}

impl SearchResult {
    /// Create a new result with a title
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    /// Set the link
    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }

    /// Set the snippet
    pub fn with_snippet(mut self, snippet: impl Into<String>) -> Self {
        self.snippet = Some(snippet.into());
        self
    }

    /// Set the position
    pub fn with_position(mut self, position: u32) -> Self {
        self.position = Some(position);
        self
    }

    /// Get the hostname from the link
    pub fn hostname(&self) -> Option<String> {
        self.link
            .as_deref()
            .and_then(|link| Url::parse(link).ok())
            .and_then(|url| url.host_str().map(|h| h.trim_start_matches("www.").to_string()))
    }
}

/// Geographic position of a place
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// One flight itinerary (possibly with layovers)
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FlightDetails {
    /// Legs of the itinerary, in order
    pub segments: Vec<FlightSegment>,
    #[serde(default)]
    pub layovers: Vec<Layover>,
    /// Total travel time in minutes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_duration: Option<u32>,
    /// Price in the search currency
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    /// Provider trip label, e.g. "Round trip"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trip_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub airline_logo: Option<String>,
    /// Emissions in grams
    #[serde(skip_serializing_if = "Option::is_none")]
    pub carbon_emissions: Option<u64>,
    /// Whether the provider ranked this among the best options
    pub best: bool,
}

impl FlightDetails {
    /// Number of stops between origin and destination
    pub fn stops(&self) -> usize {
        self.segments.len().saturating_sub(1)
    }
}

/// One leg of a flight
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FlightSegment {
    pub departure_airport: AirportTime,
    pub arrival_airport: AirportTime,
    /// Leg duration in minutes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub airline: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flight_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub airplane: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub travel_class: Option<String>,
}

/// Airport and local time at one end of a leg
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AirportTime {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
}

/// Connection between two legs
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Layover {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Layover duration in minutes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    #[serde(default)]
    pub overnight: bool,
}

/// Book catalog metadata
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct BookDetails {
    #[serde(default)]
    pub authors: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_publish_year: Option<i32>,
    #[serde(default)]
    pub publishers: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub isbn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_count: Option<u32>,
    #[serde(default)]
    pub subjects: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edition_count: Option<u32>,
}

/// Stock quote or symbol match
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct QuoteDetails {
    pub symbol: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub change: Option<f64>,
    /// Change in percent, e.g. 1.25 for +1.25%
    #[serde(skip_serializing_if = "Option::is_none")]
    pub change_percent: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub high: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub low: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_close: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latest_trading_day: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    /// Listing region, e.g. "United States"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    /// Instrument type, e.g. "Equity"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instrument_type: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sparse_serialization() {
        let result = SearchResult::new("Rust")
            .with_link("https://www.rust-lang.org/")
            .with_position(1);
        let json = serde_json::to_value(&result).unwrap();
        let obj = json.as_object().unwrap();

        assert_eq!(obj.len(), 3);
        assert_eq!(obj["title"], "Rust");
        assert_eq!(obj["link"], "https://www.rust-lang.org/");
        assert_eq!(obj["position"], 1);
    }

    #[test]
    fn test_hostname() {
        let result = SearchResult::new("Rust").with_link("https://www.rust-lang.org/learn");
        assert_eq!(result.hostname().as_deref(), Some("rust-lang.org"));
        assert_eq!(SearchResult::new("no link").hostname(), None);
    }

    #[test]
    fn test_flight_stops() {
        let mut flight = FlightDetails::default();
        assert_eq!(flight.stops(), 0);
        flight.segments = vec![FlightSegment::default(), FlightSegment::default()];
        assert_eq!(flight.stops(), 1);
    }
}
