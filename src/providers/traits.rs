//! Provider traits and types

use super::error::ProviderError;
use crate::config::ProviderConfig;
use crate::query::SearchCategory;
use crate::results::SearchResult;
use crate::search::SearchQuery;
use std::collections::HashMap;

/// Normalized outcome of one provider call
#[derive(Debug, Clone, Default)]
pub struct ProviderResults {
    /// Results for the requested page
    pub results: Vec<SearchResult>,
    /// Total number of results (if the provider reports it)
    pub total_results: Option<u64>,
    /// Seconds the provider says the search took
    pub time_taken: Option<f64>,
}

impl ProviderResults {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_results(results: Vec<SearchResult>) -> Self {
        Self {
            results,
            ..Default::default()
        }
    }

    pub fn total(mut self, total: Option<u64>) -> Self {
        self.total_results = total;
        self
    }

    pub fn took(mut self, seconds: Option<f64>) -> Self {
        self.time_taken = seconds;
        self
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

/// HTTP GET request to be made for a provider
#[derive(Debug, Clone)]
pub struct ProviderRequest {
    /// URL to request
    pub url: String,
    /// Request headers
    pub headers: HashMap<String, String>,
    /// Query parameters
    pub params: HashMap<String, String>,
}

impl ProviderRequest {
    /// Create a GET request
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            headers: HashMap::new(),
            params: HashMap::new(),
        }
    }

    /// Add a header
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Add a query parameter
    pub fn param(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.params.insert(key.into(), value.to_string());
        self
    }
}

/// HTTP response from a provider request
#[derive(Debug)]
pub struct ProviderResponse {
    /// HTTP status code
    pub status: u16,
    /// Response headers
    pub headers: HashMap<String, String>,
    /// Response body as text
    pub text: String,
    /// Response URL (after redirects)
    pub url: String,
}

impl ProviderResponse {
    /// Parse response as JSON
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> serde_json::Result<T> {
        serde_json::from_str(&self.text)
    }

    /// Check if response is successful (2xx)
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Error text from a JSON body (`error`, `message` or `Error Message`)
    pub fn error_message(&self) -> Option<String> {
        let value: serde_json::Value = serde_json::from_str(&self.text).ok()?;
        ["error", "message", "Error Message"]
            .iter()
            .find_map(|key| value.get(*key).and_then(|v| v.as_str()))
            .map(|s| s.to_string())
    }

    /// Fail with the mapped error unless the status is 2xx
    pub fn error_for_status(self, provider: &str) -> Result<Self, ProviderError> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(ProviderError::from_status(
                provider,
                self.status,
                self.error_message(),
            ))
        }
    }
}

/// Main provider trait that every upstream API adapter implements
pub trait Provider: Send + Sync {
    /// Provider name
    fn name(&self) -> &str;

    /// Short description of the provider
    fn about(&self) -> ProviderAbout {
        ProviderAbout::default()
    }

    /// Categories this provider serves
    fn categories(&self) -> Vec<SearchCategory>;

    /// Number of results per page for a category
    fn results_per_page(&self, _category: SearchCategory) -> u32 {
        10
    }

    /// Build the HTTP request for a search
    fn request(&self, query: &SearchQuery) -> Result<ProviderRequest, ProviderError>;

    /// Normalize the HTTP response into results
    fn response(
        &self,
        query: &SearchQuery,
        response: ProviderResponse,
    ) -> Result<ProviderResults, ProviderError>;

    /// Optional initialization (called once on startup)
    fn init(&mut self, _config: &ProviderConfig) -> anyhow::Result<()> {
        Ok(())
    }

    /// Optional validation of configuration
    fn validate(&self, _config: &ProviderConfig) -> anyhow::Result<()> {
        Ok(())
    }
}

/// Provider metadata
#[derive(Debug, Clone, Default)]
pub struct ProviderAbout {
    /// Website URL
    pub website: Option<String>,
    /// Whether an API key is required
    pub require_api_key: bool,
}

impl ProviderAbout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn website(mut self, url: impl Into<String>) -> Self {
        self.website = Some(url.into());
        self
    }

    pub fn api_key_required(mut self, required: bool) -> Self {
        self.require_api_key = required;
        self
    }
}

/// Fetch the configured API key or fail with the "not configured" error
pub(crate) fn require_key<'a>(
    provider: &str,
    key: &'a Option<String>,
) -> Result<&'a str, ProviderError> {
    key.as_deref()
        .filter(|k| !k.trim().is_empty())
        .ok_or_else(|| ProviderError::MissingApiKey {
            provider: provider.to_string(),
        })
}

/// Shared validation: warn-worthy when a key is required but absent
pub(crate) fn check_key(about: &ProviderAbout, config: &ProviderConfig) -> anyhow::Result<()> {
    if about.require_api_key && config.api_key.as_deref().map_or(true, |k| k.trim().is_empty()) {
        anyhow::bail!("no API key configured");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(status: u16, text: &str) -> ProviderResponse {
        ProviderResponse {
            status,
            headers: HashMap::new(),
            text: text.to_string(),
            url: "https://example.com".to_string(),
        }
    }

    #[test]
    fn test_request_builder() {
        let request = ProviderRequest::get("https://example.com/search")
            .param("q", "rust")
            .param("page", 2)
            .header("Accept", "application/json");
        assert_eq!(request.params["q"], "rust");
        assert_eq!(request.params["page"], "2");
        assert_eq!(request.headers["Accept"], "application/json");
    }

    #[test]
    fn test_error_message_extraction() {
        assert_eq!(
            response(401, r#"{"error":"Invalid API key."}"#).error_message().as_deref(),
            Some("Invalid API key.")
        );
        assert_eq!(response(500, "<html>oops</html>").error_message(), None);
    }

    #[test]
    fn test_error_for_status() {
        assert!(response(200, "{}").error_for_status("x").is_ok());
        let err = response(429, r#"{"error":"slow down"}"#)
            .error_for_status("x")
            .unwrap_err();
        assert_eq!(err, ProviderError::RateLimited("slow down".to_string()));
    }

    #[test]
    fn test_require_key() {
        assert!(require_key("serpapi", &Some("abc".to_string())).is_ok());
        assert!(matches!(
            require_key("serpapi", &Some("  ".to_string())),
            Err(ProviderError::MissingApiKey { .. })
        ));
        assert!(require_key("serpapi", &None).is_err());
    }
}
