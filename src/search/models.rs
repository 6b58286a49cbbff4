//! Search query and related data models

use crate::query::{FlightOptions, MapsOptions, SearchCategory};
use serde::{Deserialize, Serialize};

/// Validated search query, ready to hand to a provider
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchQuery {
    /// The search query string
    pub query: String,
    /// Category, which selects the provider
    pub category: SearchCategory,
    /// Page number (1-indexed)
    pub page: u32,
    /// Map viewport, for maps searches
    pub maps: Option<MapsOptions>,
    /// Itinerary, for flights searches
    pub flights: Option<FlightOptions>,
}

impl SearchQuery {
    /// Create a first-page query in a category
    pub fn new(query: impl Into<String>, category: SearchCategory) -> Self {
        Self {
            query: query.into(),
            category,
            page: 1,
            maps: None,
            flights: None,
        }
    }

    /// Create a simple web query
    pub fn simple(query: impl Into<String>) -> Self {
        Self::new(query, SearchCategory::Web)
    }

    /// Set page number
    pub fn with_page(mut self, page: u32) -> Self {
        self.page = page.max(1);
        self
    }

    /// Set map viewport
    pub fn with_maps(mut self, maps: MapsOptions) -> Self {
        self.maps = Some(maps);
        self
    }

    /// Set itinerary
    pub fn with_flights(mut self, flights: FlightOptions) -> Self {
        self.flights = Some(flights);
        self
    }

    /// Check if query is empty
    pub fn is_empty(&self) -> bool {
        self.query.trim().is_empty()
    }
}
