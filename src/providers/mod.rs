//! Upstream search providers
//!
//! Defines the Provider trait and a registry mapping each category to the
//! provider that serves it.

mod error;
mod loader;
mod registry;
mod traits;

pub mod alphavantage;
pub mod flights;
pub mod maps;
pub mod openlibrary;
pub mod serpapi;

pub use alphavantage::AlphaVantage;
pub use error::ProviderError;
pub use flights::SerpApiFlights;
pub use loader::ProviderLoader;
pub use maps::SerpApiMaps;
pub use openlibrary::OpenLibrary;
pub use registry::ProviderRegistry;
pub use serpapi::SerpApi;
pub use traits::*;
