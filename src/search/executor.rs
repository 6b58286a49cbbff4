//! Search execution: one query, one provider, one normalized page

use super::models::SearchQuery;
use crate::network::HttpClient;
use crate::providers::{ProviderError, ProviderRegistry};
use crate::results::{Pagination, SearchMetadata, SearchResponse};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::time::timeout;
use tracing::{debug, info, warn};

/// Search executor that routes a query to the provider for its category
pub struct Search {
    /// HTTP client for making requests
    client: HttpClient,
    /// Provider registry
    registry: Arc<ProviderRegistry>,
    /// Default timeout
    default_timeout: Duration,
    /// Maximum timeout
    max_timeout: Duration,
    /// Highest page number reported in pagination
    max_pages: u32,
}

impl Search {
    /// Create a new search executor
    pub fn new(client: HttpClient, registry: Arc<ProviderRegistry>) -> Self {
        Self {
            client,
            registry,
            default_timeout: Duration::from_secs(10),
            max_timeout: Duration::from_secs(30),
            max_pages: 10,
        }
    }

    /// Set default timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.default_timeout = timeout;
        self
    }

    /// Set maximum timeout
    pub fn with_max_timeout(mut self, timeout: Duration) -> Self {
        self.max_timeout = timeout;
        self
    }

    /// Set the page cap
    pub fn with_max_pages(mut self, max_pages: u32) -> Self {
        self.max_pages = max_pages.max(1);
        self
    }

    pub fn registry(&self) -> &ProviderRegistry {
        &self.registry
    }

    /// Run a validated query against its category's provider
    pub async fn execute(&self, query: &SearchQuery) -> Result<SearchResponse, ProviderError> {
        let provider = self
            .registry
            .for_category(query.category)
            .ok_or(ProviderError::Unavailable(query.category))?;
        let name = provider.name().to_string();
        let start = Instant::now();

        let provider_timeout = Duration::from_secs_f64(self.registry.get_timeout(
            &name,
            self.default_timeout.as_secs_f64(),
            self.max_timeout.as_secs_f64(),
        ));

        debug!(
            "Searching {} for {} results with timeout {:?}",
            name, query.category, provider_timeout
        );

        let request = provider.request(query)?;

        let response = match timeout(
            provider_timeout,
            self.client
                .execute_with_timeout(&name, request, provider_timeout),
        )
        .await
        {
            Ok(Ok(response)) => response,
            Ok(Err(e)) => {
                warn!("{} request failed: {}", name, e);
                return Err(e);
            }
            Err(_) => {
                warn!("{} timed out after {:?}", name, provider_timeout);
                return Err(ProviderError::Timeout { provider: name });
            }
        };

        let mut results = provider.response(query, response).map_err(|e| {
            warn!("{} returned an error: {}", name, e);
            e
        })?;

        let per_page = provider.results_per_page(query.category);
        let offset = (query.page.max(1) - 1) * per_page;
        for (i, result) in results.results.iter_mut().enumerate() {
            result.position = Some(offset + i as u32 + 1);
        }

        let elapsed = start.elapsed().as_secs_f64();
        let time_taken = results.time_taken.unwrap_or(elapsed);

        let metadata = SearchMetadata::new(
            query.category,
            Pagination {
                current_page: query.page,
                results_per_page: per_page,
                max_pages: self.max_pages,
            },
            results.total_results,
            results.results.len(),
            time_taken,
        );

        info!(
            "{} search '{}' page {} via {}: {} results in {:.2}s",
            query.category,
            query.query,
            query.page,
            name,
            results.results.len(),
            elapsed
        );

        Ok(SearchResponse::new(results.results, metadata))
    }
}
