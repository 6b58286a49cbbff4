//! Application state shared across handlers

use crate::config::Settings;
use crate::network::HttpClient;
use crate::providers::ProviderRegistry;
use crate::search::Search;
use std::sync::Arc;
use std::time::Duration;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Global settings
    pub settings: Arc<Settings>,
    /// Search executor, which owns the provider registry
    pub search: Arc<Search>,
    /// Template renderer
    pub templates: Arc<super::Templates>,
}

impl AppState {
    /// Create new application state
    pub fn new(
        settings: Settings,
        registry: ProviderRegistry,
        client: HttpClient,
    ) -> anyhow::Result<Self> {
        let search = Search::new(client, Arc::new(registry))
            .with_timeout(Duration::from_secs_f64(settings.outgoing.request_timeout))
            .with_max_timeout(Duration::from_secs_f64(
                settings.outgoing.max_request_timeout,
            ))
            .with_max_pages(settings.search.max_pages);

        Ok(Self {
            settings: Arc::new(settings),
            search: Arc::new(search),
            templates: Arc::new(super::Templates::new()?),
        })
    }

    /// Get instance name
    pub fn instance_name(&self) -> &str {
        &self.settings.general.instance_name
    }

    /// Check if instance is public
    pub fn is_public(&self) -> bool {
        self.settings.server.public_instance
    }
}
