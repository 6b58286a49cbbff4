//! Provider registry: routes each category to the provider that serves it

use super::traits::Provider;
use crate::config::ProviderConfig;
use crate::query::SearchCategory;
use std::collections::HashMap;
use std::sync::Arc;

/// Registry of loaded providers
pub struct ProviderRegistry {
    /// Providers by name
    providers: HashMap<String, Arc<dyn Provider>>,
    /// Provider name serving each category
    categories: HashMap<SearchCategory, String>,
    /// Provider configurations
    configs: HashMap<String, ProviderConfig>,
}

impl ProviderRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            providers: HashMap::new(),
            categories: HashMap::new(),
            configs: HashMap::new(),
        }
    }

    /// Register a provider. A later provider for the same category replaces
    /// the earlier one.
    pub fn register(&mut self, provider: Arc<dyn Provider>, config: ProviderConfig) {
        let name = provider.name().to_string();

        for category in provider.categories() {
            self.categories.insert(category, name.clone());
        }

        self.providers.insert(name.clone(), provider);
        self.configs.insert(name, config);
    }

    /// Get a provider by name
    pub fn get(&self, name: &str) -> Option<&Arc<dyn Provider>> {
        self.providers.get(name)
    }

    /// Get the provider for a category
    pub fn for_category(&self, category: SearchCategory) -> Option<&Arc<dyn Provider>> {
        self.categories
            .get(&category)
            .and_then(|name| self.providers.get(name))
    }

    /// Get provider config
    pub fn get_config(&self, name: &str) -> Option<&ProviderConfig> {
        self.configs.get(name)
    }

    /// Categories that have a provider, in display order
    pub fn available_categories(&self) -> Vec<SearchCategory> {
        SearchCategory::ALL
            .iter()
            .copied()
            .filter(|c| self.categories.contains_key(c))
            .collect()
    }

    /// Get all provider names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.providers.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }

    /// Check if a provider exists
    pub fn contains(&self, name: &str) -> bool {
        self.providers.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    /// Effective timeout in seconds: the provider override if set, capped at `max`
    pub fn get_timeout(&self, name: &str, default: f64, max: f64) -> f64 {
        self.configs
            .get(name)
            .and_then(|c| c.timeout)
            .filter(|t| *t > 0.0)
            .unwrap_or(default)
            .min(max)
    }
}

impl Default for ProviderRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::{OpenLibrary, SerpApi};

    #[test]
    fn test_registry() {
        let mut registry = ProviderRegistry::new();
        registry.register(Arc::new(SerpApi::new()), ProviderConfig::default());
        registry.register(
            Arc::new(OpenLibrary::new()),
            ProviderConfig {
                timeout: Some(5.0),
                ..Default::default()
            },
        );

        assert!(registry.contains("serpapi"));
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.names(), vec!["openlibrary", "serpapi"]);
        assert_eq!(
            registry.for_category(SearchCategory::Images).map(|p| p.name()),
            Some("serpapi")
        );
        assert_eq!(
            registry.for_category(SearchCategory::Books).map(|p| p.name()),
            Some("openlibrary")
        );
        assert!(registry.for_category(SearchCategory::Flights).is_none());
        assert_eq!(
            registry.available_categories(),
            vec![
                SearchCategory::Web,
                SearchCategory::Images,
                SearchCategory::Videos,
                SearchCategory::News,
                SearchCategory::Shopping,
                SearchCategory::Books,
            ]
        );
    }

    #[test]
    fn test_timeouts() {
        let mut registry = ProviderRegistry::new();
        registry.register(
            Arc::new(OpenLibrary::new()),
            ProviderConfig {
                timeout: Some(60.0),
                ..Default::default()
            },
        );
        registry.register(Arc::new(SerpApi::new()), ProviderConfig::default());

        assert_eq!(registry.get_timeout("serpapi", 10.0, 30.0), 10.0);
        assert_eq!(registry.get_timeout("openlibrary", 10.0, 30.0), 30.0);
        assert_eq!(registry.get_timeout("unknown", 10.0, 30.0), 10.0);
    }
}
