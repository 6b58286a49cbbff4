//! SerpApi Google Maps provider

use super::error::ProviderError;
use super::serpapi::{decode, SerpMetadata, SERPAPI_URL};
use super::traits::*;
use crate::config::ProviderConfig;
use crate::query::SearchCategory;
use crate::results::{Coordinates, SearchResult};
use crate::search::SearchQuery;
use serde::Deserialize;

/// google_maps pages are fixed at 20 places
const PAGE_SIZE: u32 = 20;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct MapsResponse {
    search_metadata: SerpMetadata,
    local_results: Vec<Place>,
    /// Set instead of `local_results` when the query names one place
    place_results: Option<Place>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Place {
    title: String,
    place_id: Option<String>,
    address: Option<String>,
    phone: Option<String>,
    website: Option<String>,
    rating: Option<f64>,
    reviews: Option<u64>,
    #[serde(rename = "type")]
    place_type: Option<String>,
    price: Option<String>,
    open_state: Option<String>,
    description: Option<String>,
    thumbnail: Option<String>,
    gps_coordinates: Option<Gps>,
}

#[derive(Debug, Default, Deserialize)]
struct Gps {
    latitude: f64,
    longitude: f64,
}

impl Place {
    fn into_result(self) -> SearchResult {
        let link = self.website.clone().or_else(|| {
            self.place_id.as_ref().map(|id| {
                format!(
                    "https://www.google.com/maps/place/?q=place_id:{}",
                    urlencoding::encode(id)
                )
            })
        });

        SearchResult {
            title: self.title,
            link,
            snippet: self.description,
            address: self.address,
            phone: self.phone,
            website: self.website,
            rating: self.rating,
            reviews: self.reviews,
            place_type: self.place_type,
            price: self.price,
            hours: self.open_state,
            thumbnail: self.thumbnail,
            coordinates: self.gps_coordinates.map(|gps| Coordinates {
                latitude: gps.latitude,
                longitude: gps.longitude,
            }),
            ..Default::default()
        }
    }
}

/// Local business and place search
pub struct SerpApiMaps {
    base_url: String,
    api_key: Option<String>,
}

impl SerpApiMaps {
    pub fn new() -> Self {
        Self {
            base_url: SERPAPI_URL.to_string(),
            api_key: None,
        }
    }
}

impl Default for SerpApiMaps {
    fn default() -> Self {
        Self::new()
    }
}

impl Provider for SerpApiMaps {
    fn name(&self) -> &str {
        "serpapi_maps"
    }

    fn about(&self) -> ProviderAbout {
        ProviderAbout::new()
            .website("https://serpapi.com/google-maps-api")
            .api_key_required(true)
    }

    fn categories(&self) -> Vec<SearchCategory> {
        vec![SearchCategory::Maps]
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
        let api_key = require_key(self.name(), &self.api_key)?;
        let maps = query.maps.unwrap_or_default();

        let mut request = ProviderRequest::get(&self.base_url)
            .param("engine", "google_maps")
            .param("type", "search")
            .param("q", &query.query)
            .param("api_key", api_key)
            .param("hl", "en")
            .param("start", (query.page.max(1) - 1) * PAGE_SIZE);

        if let Some((lat, lng)) = maps.center {
            request = request.param("ll", format!("@{},{},{}z", lat, lng, maps.zoom));
        }

        Ok(request)
    }

    fn response(
        &self,
        _query: &SearchQuery,
        response: ProviderResponse,
    ) -> Result<ProviderResults, ProviderError> {
        let raw: MapsResponse = match decode(self.name(), response)? {
            Some(raw) => raw,
            None => return Ok(ProviderResults::new()),
        };
        let took = raw.search_metadata.total_time_taken;

        let places = if raw.local_results.is_empty() {
            raw.place_results.into_iter().collect()
        } else {
            raw.local_results
        };

        let results = places
            .into_iter()
            .filter(|p| !p.title.trim().is_empty())
            .map(Place::into_result)
            .collect();

        Ok(ProviderResults::with_results(results).took(took))
    }
}
