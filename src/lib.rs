//! SearchDeck: a search aggregator
//!
//! Serves a browser UI and a `GET /api/search` endpoint that forwards each
//! query to the provider responsible for its category (web, images, videos,
//! news, shopping, maps, books, flights or finance) and returns the results
//! in one normalized, paginated JSON shape.

pub mod airports;
pub mod config;
pub mod network;
pub mod providers;
pub mod query;
pub mod results;
pub mod search;
pub mod web;

pub use config::Settings;
pub use providers::{Provider, ProviderError};
pub use results::{SearchResponse, SearchResult};
pub use search::{Search, SearchQuery};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
