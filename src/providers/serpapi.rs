//! SerpApi general search provider
//!
//! Serves the web, images, videos, news and shopping categories through
//! SerpApi's Google engines. The maps and flights providers share the
//! envelope handling in this module.

use super::error::ProviderError;
use super::traits::*;
use crate::config::ProviderConfig;
use crate::query::SearchCategory;
use crate::results::SearchResult;
use crate::search::SearchQuery;
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Default SerpApi endpoint
pub const SERPAPI_URL: &str = "https://serpapi.com/search.json";

/// Results per page for the paginated Google engines
const PAGE_SIZE: u32 = 10;

/// google_images returns this many per `ijn` page
const IMAGES_PAGE_SIZE: u32 = 100;

/// Timing information SerpApi attaches to every response
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(super) struct SerpMetadata {
    pub total_time_taken: Option<f64>,
    pub google_flights_url: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SearchInformation {
    total_results: Option<u64>,
}

/// Decode a SerpApi JSON body.
///
/// SerpApi reports "Google hasn't returned any results" as an `error`
/// field; that is an empty page, not a failure, and yields `Ok(None)`.
pub(super) fn decode<T: DeserializeOwned>(
    provider: &str,
    response: ProviderResponse,
) -> Result<Option<T>, ProviderError> {
    let response = response.error_for_status(provider)?;
    let value: serde_json::Value =
        serde_json::from_str(&response.text).map_err(|e| ProviderError::parse(provider, e))?;

    if let Some(message) = value.get("error").and_then(|e| e.as_str()) {
        if is_empty_result_message(message) {
            return Ok(None);
        }
        return Err(ProviderError::from_message(provider, message));
    }

    serde_json::from_value(value)
        .map(Some)
        .map_err(|e| ProviderError::parse(provider, e))
}

fn is_empty_result_message(message: &str) -> bool {
    let lower = message.to_lowercase();
    lower.contains("hasn't returned any results") || lower.contains("no results")
}

/// Raw SerpApi Google response; only the array for the requested engine is populated
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct GoogleResponse {
    search_metadata: SerpMetadata,
    search_information: SearchInformation,
    organic_results: Vec<OrganicResult>,
    images_results: Vec<ImageResult>,
    video_results: Vec<VideoResult>,
    news_results: Vec<NewsResult>,
    shopping_results: Vec<ShoppingResult>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct OrganicResult {
    title: String,
    link: Option<String>,
    snippet: Option<String>,
    displayed_link: Option<String>,
    date: Option<String>,
    favicon: Option<String>,
    thumbnail: Option<String>,
    source: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ImageResult {
    title: String,
    link: Option<String>,
    original: Option<String>,
    thumbnail: Option<String>,
    source: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct VideoResult {
    title: String,
    link: Option<String>,
    snippet: Option<String>,
    displayed_link: Option<String>,
    thumbnail: Option<String>,
    duration: Option<String>,
    date: Option<String>,
    source: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct NewsResult {
    title: String,
    link: Option<String>,
    snippet: Option<String>,
    source: Option<String>,
    date: Option<String>,
    thumbnail: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ShoppingResult {
    title: String,
    link: Option<String>,
    product_link: Option<String>,
    price: Option<String>,
    extracted_price: Option<f64>,
    source: Option<String>,
    rating: Option<f64>,
    reviews: Option<u64>,
    thumbnail: Option<String>,
    delivery: Option<String>,
}

/// SerpApi Google search provider
pub struct SerpApi {
    base_url: String,
    api_key: Option<String>,
}

impl SerpApi {
    pub fn new() -> Self {
        Self {
            base_url: SERPAPI_URL.to_string(),
            api_key: None,
        }
    }

    fn normalize(&self, category: SearchCategory, raw: GoogleResponse) -> Vec<SearchResult> {
        match category {
            SearchCategory::Images => raw
                .images_results
                .into_iter()
                .map(|r| SearchResult {
                    title: r.title,
                    link: r.link,
                    thumbnail: r.thumbnail,
                    image: r.original,
                    source: r.source,
                    ..Default::default()
                })
                .collect(),
            SearchCategory::Videos => raw
                .video_results
                .into_iter()
                .map(|r| SearchResult {
                    title: r.title,
                    link: r.link,
                    snippet: r.snippet,
                    displayed_link: r.displayed_link,
                    thumbnail: r.thumbnail,
                    duration: r.duration,
                    date: r.date,
                    source: r.source,
                    ..Default::default()
                })
                .collect(),
            SearchCategory::News => raw
                .news_results
                .into_iter()
                .map(|r| SearchResult {
                    title: r.title,
                    link: r.link,
                    snippet: r.snippet,
                    source: r.source,
                    date: r.date,
                    thumbnail: r.thumbnail,
                    ..Default::default()
                })
                .collect(),
            SearchCategory::Shopping => raw
                .shopping_results
                .into_iter()
                .map(|r| SearchResult {
                    title: r.title,
                    link: r.link.or(r.product_link),
                    snippet: r.delivery,
                    price: r.price,
                    extracted_price: r.extracted_price,
                    source: r.source,
                    rating: r.rating,
                    reviews: r.reviews,
                    thumbnail: r.thumbnail,
                    ..Default::default()
                })
                .collect(),
            _ => raw
                .organic_results
                .into_iter()
                .map(|r| SearchResult {
                    title: r.title,
                    link: r.link,
                    snippet: r.snippet,
                    displayed_link: r.displayed_link,
                    date: r.date,
                    favicon: r.favicon,
                    thumbnail: r.thumbnail,
                    source: r.source,
                    ..Default::default()
                })
                .collect(),
        }
    }
}

impl Default for SerpApi {
    fn default() -> Self {
        Self::new()
    }
}

impl Provider for SerpApi {
    fn name(&self) -> &str {
        "serpapi"
    }

    fn about(&self) -> ProviderAbout {
        ProviderAbout::new()
            .website("https://serpapi.com")
            .api_key_required(true)
    }

    fn categories(&self) -> Vec<SearchCategory> {
        vec![
            SearchCategory::Web,
            SearchCategory::Images,
            SearchCategory::Videos,
            SearchCategory::News,
            SearchCategory::Shopping,
        ]
    }

    fn results_per_page(&self, category: SearchCategory) -> u32 {
        match category {
            SearchCategory::Images => IMAGES_PAGE_SIZE,
            _ => PAGE_SIZE,
        }
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
        let offset = (query.page.max(1) - 1) * PAGE_SIZE;

        let mut request = ProviderRequest::get(&self.base_url)
            .param("q", &query.query)
            .param("api_key", api_key)
            .param("hl", "en")
            .param("gl", "us");

        request = match query.category {
            SearchCategory::Images => request
                .param("engine", "google_images")
                .param("ijn", query.page.max(1) - 1),
            SearchCategory::Videos => request
                .param("engine", "google_videos")
                .param("start", offset),
            SearchCategory::News => request
                .param("engine", "google")
                .param("tbm", "nws")
                .param("start", offset),
            SearchCategory::Shopping => request
                .param("engine", "google_shopping")
                .param("start", offset)
                .param("num", PAGE_SIZE),
            SearchCategory::Web => request
                .param("engine", "google")
                .param("start", offset)
                .param("num", PAGE_SIZE),
            other => return Err(ProviderError::Unavailable(other)),
        };

        Ok(request)
    }

    fn response(
        &self,
        query: &SearchQuery,
        response: ProviderResponse,
    ) -> Result<ProviderResults, ProviderError> {
        let raw: GoogleResponse = match decode(self.name(), response)? {
            Some(raw) => raw,
            None => return Ok(ProviderResults::new()),
        };

        let total = match query.category {
            SearchCategory::Web | SearchCategory::News | SearchCategory::Videos => {
                raw.search_information.total_results
            }
            _ => None,
        };
        let took = raw.search_metadata.total_time_taken;

        let mut results = self.normalize(query.category, raw);
        results.retain(|r| !r.title.trim().is_empty());
        for result in results.iter_mut() {
            if result.displayed_link.is_none() && result.source.is_none() {
                result.displayed_link = result.hostname();
            }
        }

        Ok(ProviderResults::with_results(results).total(total).took(took))
    }
}
