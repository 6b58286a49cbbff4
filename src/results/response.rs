//! Response envelope and pagination math

use super::types::SearchResult;
use crate::query::SearchCategory;
use serde::{Deserialize, Serialize};

/// Metadata returned alongside every page of results
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchMetadata {
    /// Provider-reported total, or an estimate when the provider reports none
    pub total_results: u64,
    /// Seconds the search took, for display
    pub time_taken_displayed: f64,
    pub search_type: SearchCategory,
    pub current_page: u32,
    pub total_pages: u32,
    pub has_next_page: bool,
    pub has_prev_page: bool,
    pub results_per_page: u32,
}

/// Inputs to the pagination computation
#[derive(Debug, Clone, Copy)]
pub struct Pagination {
    pub current_page: u32,
    pub results_per_page: u32,
    pub max_pages: u32,
}

impl Pagination {
    /// Compute `(total_results, total_pages)`.
    ///
    /// With a known total the page count is `ceil(total / per_page)`. Without
    /// one, the total is what has been seen so far and a full page implies
    /// there is at least one more. Either way the page count is capped at
    /// `max_pages`, and never drops below the current page while it still
    /// has results.
    pub fn totals(&self, reported_total: Option<u64>, returned: usize) -> (u64, u32) {
        let per_page = self.results_per_page.max(1) as u64;
        let page = self.current_page.max(1);
        let returned = returned as u64;

        let (total_results, pages) = match reported_total {
            Some(total) => {
                // Providers sometimes report fewer than they just returned
                let seen = (page as u64 - 1) * per_page + returned;
                let total = total.max(seen);
                (total, total.div_ceil(per_page))
            }
            None => {
                let seen = (page as u64 - 1) * per_page + returned;
                let pages = if returned == 0 {
                    page as u64 - 1
                } else if returned >= per_page {
                    page as u64 + 1
                } else {
                    page as u64
                };
                (seen, pages)
            }
        };

        let pages = pages.min(self.max_pages as u64) as u32;
        (total_results, pages)
    }
}

impl SearchMetadata {
    /// Build the metadata for one page of results
    pub fn new(
        search_type: SearchCategory,
        pagination: Pagination,
        reported_total: Option<u64>,
        returned: usize,
        time_taken: f64,
    ) -> Self {
        let (total_results, total_pages) = pagination.totals(reported_total, returned);
        let current_page = pagination.current_page.max(1);

        Self {
            total_results,
            time_taken_displayed: (time_taken * 100.0).round() / 100.0,
            search_type,
            current_page,
            total_pages,
            has_next_page: current_page < total_pages,
            has_prev_page: current_page > 1,
            results_per_page: pagination.results_per_page,
        }
    }
}

/// Body of a successful `GET /api/search`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub results: Vec<SearchResult>,
    pub search_metadata: SearchMetadata,
    pub search_type: SearchCategory,
}

impl SearchResponse {
    pub fn new(results: Vec<SearchResult>, search_metadata: SearchMetadata) -> Self {
        let search_type = search_metadata.search_type;
        Self {
            results,
            search_metadata,
            search_type,
        }
    }

    pub fn result_count(&self) -> usize {
        self.results.len()
    }
}
