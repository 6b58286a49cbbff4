//! Settings structures for SearchDeck configuration

use anyhow::{ensure, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Main settings structure matching settings.yml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub general: GeneralSettings,
    pub server: ServerSettings,
    pub outgoing: OutgoingSettings,
    pub search: SearchSettings,
    pub providers: ProvidersSettings,
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let settings: Settings = serde_yaml::from_str(&content)?;
        Ok(settings)
    }

    /// Merge with environment variables
    pub fn merge_env(&mut self) {
        if let Ok(val) = std::env::var("SEARCHDECK_DEBUG") {
            self.general.debug = matches!(val.trim().to_lowercase().as_str(), "1" | "true" | "yes");
        }
        if let Ok(val) = std::env::var("SEARCHDECK_PORT") {
            if let Ok(port) = val.parse() {
                self.server.port = port;
            }
        }
        if let Ok(val) = std::env::var("SEARCHDECK_BIND_ADDRESS") {
            self.server.bind_address = val;
        }
        if let Ok(val) = std::env::var("SEARCHDECK_BASE_URL") {
            self.server.base_url = Some(val);
        }

        // One SerpApi key serves the general, maps and flights providers
        if let Ok(key) = std::env::var("SERPAPI_API_KEY") {
            if !key.trim().is_empty() {
                let key = key.trim().to_string();
                self.providers.serpapi.api_key = Some(key.clone());
                self.providers.serpapi_maps.api_key = Some(key.clone());
                self.providers.serpapi_flights.api_key = Some(key);
            }
        }
        if let Ok(key) = std::env::var("ALPHAVANTAGE_API_KEY") {
            if !key.trim().is_empty() {
                self.providers.alphavantage.api_key = Some(key.trim().to_string());
            }
        }
    }

    /// Reject values that would panic or misbehave once turned into durations
    pub fn validate(&self) -> Result<()> {
        let positive = |secs: f64| secs.is_finite() && secs > 0.0;

        ensure!(
            positive(self.outgoing.request_timeout),
            "outgoing.request_timeout must be a positive number of seconds, got {}",
            self.outgoing.request_timeout
        );
        ensure!(
            positive(self.outgoing.max_request_timeout),
            "outgoing.max_request_timeout must be a positive number of seconds, got {}",
            self.outgoing.max_request_timeout
        );
        for (name, config) in self.providers.all() {
            if let Some(timeout) = config.timeout {
                ensure!(
                    positive(timeout),
                    "providers.{}.timeout must be a positive number of seconds, got {}",
                    name,
                    timeout
                );
            }
        }
        Ok(())
    }

    /// Get provider config by name
    pub fn get_provider(&self, name: &str) -> Option<&ProviderConfig> {
        self.providers
            .all()
            .into_iter()
            .find(|(provider, _)| *provider == name)
            .map(|(_, config)| config)
    }
}

/// General settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralSettings {
    /// Enable debug logging
    pub debug: bool,
    /// Instance name displayed in UI
    pub instance_name: String,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            debug: false,
            instance_name: "SearchDeck".to_string(),
        }
    }
}

/// Server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// Server port
    pub port: u16,
    /// Bind address
    pub bind_address: String,
    /// Base URL for the instance
    pub base_url: Option<String>,
    /// Allow crawlers on the landing page
    pub public_instance: bool,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            port: 3000,
            bind_address: "127.0.0.1".to_string(),
            base_url: None,
            public_instance: false,
        }
    }
}

/// Search behavior settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchSettings {
    /// Category used when the request names none
    pub default_category: String,
    /// Highest page a client may request
    pub max_pages: u32,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            default_category: "web".to_string(),
            max_pages: 10,
        }
    }
}

/// Outgoing request settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutgoingSettings {
    /// Default request timeout in seconds
    pub request_timeout: f64,
    /// Upper bound for any per-provider timeout
    pub max_request_timeout: f64,
    /// User agent sent to providers
    pub useragent: String,
    /// Pool max idle connections per host
    pub pool_maxsize: usize,
    /// Verify SSL certificates
    pub verify_ssl: bool,
    /// Proxy settings
    pub proxies: ProxySettings,
    /// Extra headers to send
    pub extra_headers: HashMap<String, String>,
}

impl Default for OutgoingSettings {
    fn default() -> Self {
        Self {
            request_timeout: 10.0,
            max_request_timeout: 30.0,
            useragent: format!("SearchDeck/{}", env!("CARGO_PKG_VERSION")),
            pool_maxsize: 20,
            verify_ssl: true,
            proxies: ProxySettings::default(),
            extra_headers: HashMap::new(),
        }
    }
}

/// Proxy settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProxySettings {
    pub http: Option<String>,
    pub https: Option<String>,
    pub all: Option<String>,
}

/// Per-provider configuration, one entry per upstream API
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProvidersSettings {
    pub serpapi: ProviderConfig,
    pub serpapi_maps: ProviderConfig,
    pub serpapi_flights: ProviderConfig,
    pub openlibrary: ProviderConfig,
    pub alphavantage: ProviderConfig,
}

impl ProvidersSettings {
    /// All provider configs keyed by provider name, in load order
    pub fn all(&self) -> Vec<(&'static str, &ProviderConfig)> {
        vec![
            ("serpapi", &self.serpapi),
            ("serpapi_maps", &self.serpapi_maps),
            ("serpapi_flights", &self.serpapi_flights),
            ("openlibrary", &self.openlibrary),
            ("alphavantage", &self.alphavantage),
        ]
    }
}

/// Individual provider configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    /// Override for the provider's endpoint
    pub base_url: Option<String>,
    /// API key if required
    pub api_key: Option<String>,
    /// Custom timeout for this provider
    pub timeout: Option<f64>,
    /// Whether provider is disabled
    pub disabled: bool,
}
