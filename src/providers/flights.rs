//! SerpApi Google Flights provider
//!
//! Google Flights returns every itinerary at once, split into "best" and
//! "other" flights. Both lists are merged and paged locally.

use super::error::ProviderError;
use super::serpapi::{decode, SerpMetadata, SERPAPI_URL};
use super::traits::*;
use crate::config::ProviderConfig;
use crate::query::{FlightOptions, FlightType, SearchCategory, DATE_FORMAT};
use crate::results::{AirportTime, FlightDetails, FlightSegment, Layover, SearchResult};
use crate::search::SearchQuery;
use serde::Deserialize;

const PAGE_SIZE: u32 = 10;

/// Prices are requested in this currency
const CURRENCY: &str = "USD";

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct FlightsResponse {
    search_metadata: SerpMetadata,
    best_flights: Vec<Itinerary>,
    other_flights: Vec<Itinerary>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Itinerary {
    flights: Vec<Leg>,
    layovers: Vec<RawLayover>,
    total_duration: Option<u32>,
    carbon_emissions: Option<Emissions>,
    price: Option<f64>,
    #[serde(rename = "type")]
    trip_type: Option<String>,
    airline_logo: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Leg {
    departure_airport: RawAirport,
    arrival_airport: RawAirport,
    duration: Option<u32>,
    airline: Option<String>,
    airline_logo: Option<String>,
    flight_number: Option<String>,
    airplane: Option<String>,
    travel_class: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawAirport {
    name: Option<String>,
    id: Option<String>,
    time: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawLayover {
    name: Option<String>,
    id: Option<String>,
    duration: Option<u32>,
    overnight: bool,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Emissions {
    this_flight: Option<u64>,
}

impl From<RawAirport> for AirportTime {
    fn from(raw: RawAirport) -> Self {
        Self {
            name: raw.name,
            id: raw.id,
            time: raw.time,
        }
    }
}

/// Format minutes as "5h 30m"
pub fn format_duration(minutes: u32) -> String {
    match (minutes / 60, minutes % 60) {
        (0, m) => format!("{}m", m),
        (h, 0) => format!("{}h", h),
        (h, m) => format!("{}h {}m", h, m),
    }
}

/// "Nonstop", "1 stop", "2 stops"
pub fn format_stops(stops: usize) -> String {
    match stops {
        0 => "Nonstop".to_string(),
        1 => "1 stop".to_string(),
        n => format!("{} stops", n),
    }
}

impl Itinerary {
    fn into_result(self, best: bool, link: Option<&str>) -> SearchResult {
        let airline_logo = self
            .airline_logo
            .or_else(|| self.flights.first().and_then(|leg| leg.airline_logo.clone()));

        let segments: Vec<FlightSegment> = self
            .flights
            .into_iter()
            .map(|leg| FlightSegment {
                departure_airport: leg.departure_airport.into(),
                arrival_airport: leg.arrival_airport.into(),
                duration: leg.duration,
                airline: leg.airline,
                flight_number: leg.flight_number,
                airplane: leg.airplane,
                travel_class: leg.travel_class,
            })
            .collect();

        let details = FlightDetails {
            segments,
            layovers: self
                .layovers
                .into_iter()
                .map(|l| Layover {
                    name: l.name,
                    id: l.id,
                    duration: l.duration,
                    overnight: l.overnight,
                })
                .collect(),
            total_duration: self.total_duration,
            price: self.price,
            trip_type: self.trip_type,
            airline_logo,
            carbon_emissions: self.carbon_emissions.and_then(|e| e.this_flight),
            best,
        };

        SearchResult {
            title: flight_title(&details),
            link: link.map(str::to_string),
            snippet: Some(flight_snippet(&details)),
            price: details.price.map(|p| format!("${:.0}", p)),
            extracted_price: details.price,
            thumbnail: details.airline_logo.clone(),
            flight: Some(details),
            ..Default::default()
        }
    }
}

/// "Delta, KLM: JFK → AMS"
fn flight_title(details: &FlightDetails) -> String {
    let mut airlines: Vec<&str> = Vec::new();
    for airline in details.segments.iter().filter_map(|s| s.airline.as_deref()) {
        if !airlines.contains(&airline) {
            airlines.push(airline);
        }
    }

    let from = details
        .segments
        .first()
        .and_then(|s| s.departure_airport.id.as_deref())
        .unwrap_or("?");
    let to = details
        .segments
        .last()
        .and_then(|s| s.arrival_airport.id.as_deref())
        .unwrap_or("?");

    if airlines.is_empty() {
        format!("{} → {}", from, to)
    } else {
        format!("{}: {} → {}", airlines.join(", "), from, to)
    }
}

/// "1 stop · 7h 5m · 08:00 - 15:05"
fn flight_snippet(details: &FlightDetails) -> String {
    let mut parts = vec![format_stops(details.stops())];
    if let Some(total) = details.total_duration {
        parts.push(format_duration(total));
    }
    let departs = details
        .segments
        .first()
        .and_then(|s| s.departure_airport.time.as_deref());
    let arrives = details
        .segments
        .last()
        .and_then(|s| s.arrival_airport.time.as_deref());
    if let (Some(departs), Some(arrives)) = (departs, arrives) {
        parts.push(format!("{} - {}", clock(departs), clock(arrives)));
    }
    parts.join(" · ")
}

/// Time of day from "2025-06-01 08:00"
fn clock(timestamp: &str) -> &str {
    timestamp.rsplit(' ').next().unwrap_or(timestamp)
}

/// Flight search
pub struct SerpApiFlights {
    base_url: String,
    api_key: Option<String>,
}

impl SerpApiFlights {
    pub fn new() -> Self {
        Self {
            base_url: SERPAPI_URL.to_string(),
            api_key: None,
        }
    }

    fn options<'a>(&self, query: &'a SearchQuery) -> Result<&'a FlightOptions, ProviderError> {
        query
            .flights
            .as_ref()
            .ok_or_else(|| ProviderError::BadRequest("Flight search requires departure and arrival airports".to_string()))
    }
}

impl Default for SerpApiFlights {
    fn default() -> Self {
        Self::new()
    }
}

impl Provider for SerpApiFlights {
    fn name(&self) -> &str {
        "serpapi_flights"
    }

    fn about(&self) -> ProviderAbout {
        ProviderAbout::new()
            .website("https://serpapi.com/google-flights-api")
            .api_key_required(true)
    }

    fn categories(&self) -> Vec<SearchCategory> {
        vec![SearchCategory::Flights]
    }

    fn results_per_page(&self, _category: SearchCategory) -> u32 {
        PAGE_SIZE
    }

    fn init(&mut self, config: &ProviderConfig) -> anyhow::Result<()> {
        if let Some(ref url) = config.base_url {
            self.base_url = url.clone();
        }
        self.api_key = config.api_key.clone();
        Ok(())
    }

    fn validate(&self, config: &ProviderConfig) -> anyhow::Result<()> {
        check_key(&self.about(), config)
    }

    fn request(&self, query: &SearchQuery) -> Result<ProviderRequest, ProviderError> {
        let options = self.options(query)?;
        let api_key = require_key(self.name(), &self.api_key)?;

        let mut request = ProviderRequest::get(&self.base_url)
            .param("engine", "google_flights")
            .param("departure_id", &options.departure_id)
            .param("arrival_id", &options.arrival_id)
            .param("outbound_date", options.outbound_date.format(DATE_FORMAT))
            .param("type", options.flight_type.code())
            .param("travel_class", options.travel_class.code())
            .param("adults", options.adults)
            .param("currency", CURRENCY)
            .param("hl", "en")
            .param("api_key", api_key);

        if options.flight_type == FlightType::RoundTrip {
            if let Some(return_date) = options.return_date {
                request = request.param("return_date", return_date.format(DATE_FORMAT));
            }
        }

        Ok(request)
    }

    fn response(
        &self,
        query: &SearchQuery,
        response: ProviderResponse,
    ) -> Result<ProviderResults, ProviderError> {
        let raw: FlightsResponse = match decode(self.name(), response)? {
            Some(raw) => raw,
            None => return Ok(ProviderResults::new().total(Some(0))),
        };
        let took = raw.search_metadata.total_time_taken;
        let link = raw.search_metadata.google_flights_url;

        let itineraries: Vec<(bool, Itinerary)> = raw
            .best_flights
            .into_iter()
            .map(|i| (true, i))
            .chain(raw.other_flights.into_iter().map(|i| (false, i)))
            .filter(|(_, i)| !i.flights.is_empty())
            .collect();
        let total = itineraries.len() as u64;

        let skip = ((query.page.max(1) - 1) * PAGE_SIZE) as usize;
        let results = itineraries
            .into_iter()
            .skip(skip)
            .take(PAGE_SIZE as usize)
            .map(|(best, itinerary)| itinerary.into_result(best, link.as_deref()))
            .collect();

        Ok(ProviderResults::with_results(results)
            .total(Some(total))
            .took(took))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::TravelClass;
    use chrono::NaiveDate;
    use std::collections::HashMap;

    fn provider() -> SerpApiFlights {
        let mut flights = SerpApiFlights::new();
        flights
            .init(&ProviderConfig {
                api_key: Some("test-key".to_string()),
                ..Default::default()
            })
            .unwrap();
        flights
    }

    fn query(flight_type: FlightType) -> SearchQuery {
        let return_date = match flight_type {
            FlightType::RoundTrip => NaiveDate::from_ymd_opt(2030, 6, 8),
            FlightType::OneWay => None,
        };
        SearchQuery::new("JFK to LAX", SearchCategory::Flights).with_flights(FlightOptions {
            departure_id: "JFK".to_string(),
            arrival_id: "LAX".to_string(),
            outbound_date: NaiveDate::from_ymd_opt(2030, 6, 1).unwrap(),
            return_date,
            flight_type,
            travel_class: TravelClass::Business,
            adults: 2,
        })
    }

    fn leg(from: &str, to: &str, airline: &str, departs: &str, arrives: &str) -> serde_json::Value {
        serde_json::json!({
            "departure_airport": { "name": from, "id": from, "time": departs },
            "arrival_airport": { "name": to, "id": to, "time": arrives },
            "duration": 180,
            "airline": airline,
            "flight_number": "XX 1",
            "travel_class": "Business"
        })
    }

    fn itinerary(price: f64) -> serde_json::Value {
        serde_json::json!({
            "flights": [leg("JFK", "LAX", "Delta", "2030-06-01 08:00", "2030-06-01 11:00")],
            "total_duration": 360,
            "price": price,
            "type": "Round trip"
        })
    }

    fn response(body: serde_json::Value) -> ProviderResponse {
        ProviderResponse {
            status: 200,
            headers: HashMap::new(),
            text: body.to_string(),
            url: SERPAPI_URL.to_string(),
        }
    }

    #[test]
    fn test_durations() {
        assert_eq!(format_duration(45), "45m");
        assert_eq!(format_duration(120), "2h");
        assert_eq!(format_duration(425), "7h 5m");
        assert_eq!(format_stops(0), "Nonstop");
        assert_eq!(format_stops(1), "1 stop");
        assert_eq!(format_stops(3), "3 stops");
    }

    #[test]
    fn test_round_trip_request() {
        let request = provider().request(&query(FlightType::RoundTrip)).unwrap();
        assert_eq!(request.params["engine"], "google_flights");
        assert_eq!(request.params["departure_id"], "JFK");
        assert_eq!(request.params["arrival_id"], "LAX");
        assert_eq!(request.params["outbound_date"], "2030-06-01");
        assert_eq!(request.params["return_date"], "2030-06-08");
        assert_eq!(request.params["type"], "1");
        assert_eq!(request.params["travel_class"], "3");
        assert_eq!(request.params["adults"], "2");
        assert_eq!(request.params["currency"], "USD");
    }

    #[test]
    fn test_one_way_request() {
        let request = provider().request(&query(FlightType::OneWay)).unwrap();
        assert_eq!(request.params["type"], "2");
        assert!(!request.params.contains_key("return_date"));
    }

    #[test]
    fn test_requires_itinerary() {
        let bare = SearchQuery::new("somewhere", SearchCategory::Flights);
        let err = provider().request(&bare).unwrap_err();
        assert_eq!(err.status_code(), 400);
    }

    #[test]
    fn test_merges_and_normalizes() {
        let body = serde_json::json!({
            "search_metadata": {
                "total_time_taken": 3.4,
                "google_flights_url": "https://www.google.com/travel/flights?tfs=abc"
            },
            "best_flights": [{
                "flights": [
                    leg("JFK", "ORD", "United", "2030-06-01 08:00", "2030-06-01 10:00"),
                    leg("ORD", "LAX", "United", "2030-06-01 11:05", "2030-06-01 13:05")
                ],
                "layovers": [{ "name": "O'Hare", "id": "ORD", "duration": 65 }],
                "total_duration": 425,
                "carbon_emissions": { "this_flight": 350000 },
                "price": 452.0,
                "airline_logo": "https://www.gstatic.com/flights/airline_logos/70px/UA.png"
            }],
            "other_flights": [itinerary(610.0)]
        });
        let results = provider()
            .response(&query(FlightType::RoundTrip), response(body))
            .unwrap();

        assert_eq!(results.total_results, Some(2));
        assert_eq!(results.time_taken, Some(3.4));

        let best = &results.results[0];
        assert_eq!(best.title, "United: JFK → LAX");
        assert_eq!(best.snippet.as_deref(), Some("1 stop · 7h 5m · 08:00 - 13:05"));
        assert_eq!(best.price.as_deref(), Some("$452"));
        assert_eq!(
            best.link.as_deref(),
            Some("https://www.google.com/travel/flights?tfs=abc")
        );
        let details = best.flight.as_ref().unwrap();
        assert!(details.best);
        assert_eq!(details.layovers[0].duration, Some(65));
        assert_eq!(details.carbon_emissions, Some(350000));

        let other = &results.results[1];
        assert!(!other.flight.as_ref().unwrap().best);
        assert_eq!(other.snippet.as_deref(), Some("Nonstop · 6h · 08:00 - 11:00"));
    }

    #[test]
    fn test_local_pagination() {
        let others: Vec<_> = (0..23).map(|i| itinerary(100.0 + i as f64)).collect();
        let body = serde_json::json!({ "other_flights": others });

        let page3 = query(FlightType::RoundTrip).with_page(3);
        let results = provider().response(&page3, response(body.clone())).unwrap();
        assert_eq!(results.total_results, Some(23));
        assert_eq!(results.results.len(), 3);
        assert_eq!(results.results[0].extracted_price, Some(120.0));

        let page4 = query(FlightType::RoundTrip).with_page(4);
        let results = provider().response(&page4, response(body)).unwrap();
        assert!(results.is_empty());
    }
}
