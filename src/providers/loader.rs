//! Provider loader for initializing providers from configuration

use super::registry::ProviderRegistry;
use super::traits::Provider;
use super::{alphavantage, flights, maps, openlibrary, serpapi};
use crate::config::{ProviderConfig, Settings};
use anyhow::Result;
use std::sync::Arc;
use tracing::{info, warn};

/// Loader for initializing providers from configuration
pub struct ProviderLoader;

impl ProviderLoader {
    /// Load every enabled provider from settings.
    ///
    /// A provider without its API key is still registered so that searches
    /// in its categories fail with a clear error instead of "unavailable".
    pub fn load(settings: &Settings) -> Result<ProviderRegistry> {
        let mut registry = ProviderRegistry::new();

        for (name, config) in settings.providers.all() {
            if config.disabled {
                info!("Skipping disabled provider: {}", name);
                continue;
            }

            match Self::create_provider(name, config) {
                Ok(provider) => {
                    let categories: Vec<&str> =
                        provider.categories().iter().map(|c| c.as_str()).collect();
                    info!("Loaded provider: {} ({})", name, categories.join(", "));
                    registry.register(provider, config.clone());
                }
                Err(e) => {
                    warn!("Failed to load provider {}: {}", name, e);
                }
            }
        }

        info!("Loaded {} providers", registry.len());
        Ok(registry)
    }

    /// Create a provider instance by name
    fn create_provider(name: &str, config: &ProviderConfig) -> Result<Arc<dyn Provider>> {
        let mut provider: Box<dyn Provider> = match name {
            "serpapi" => Box::new(serpapi::SerpApi::new()),
            "serpapi_maps" => Box::new(maps::SerpApiMaps::new()),
            "serpapi_flights" => Box::new(flights::SerpApiFlights::new()),
            "openlibrary" => Box::new(openlibrary::OpenLibrary::new()),
            "alphavantage" => Box::new(alphavantage::AlphaVantage::new()),
            _ => {
                return Err(anyhow::anyhow!("Unknown provider: {}", name));
            }
        };

        provider.init(config)?;

        if let Err(e) = provider.validate(config) {
            warn!("Provider {} is misconfigured: {}", name, e);
        }

        Ok(Arc::from(provider))
    }

    /// Get list of available provider names
    pub fn available_providers() -> Vec<&'static str> {
        vec![
            "serpapi",
            "serpapi_maps",
            "serpapi_flights",
            "openlibrary",
            "alphavantage",
        ]
    }
}
