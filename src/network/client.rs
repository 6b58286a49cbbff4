//! HTTP client for making requests to upstream providers

use crate::config::OutgoingSettings;
use crate::providers::{ProviderError, ProviderRequest, ProviderResponse};
use anyhow::Result;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Response};
use std::collections::HashMap;
use std::time::Duration;
use tracing::debug;

/// Shared HTTP client configured from the `outgoing` settings
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    default_timeout: Duration,
}

impl HttpClient {
    /// Create a new HTTP client with default settings
    pub fn new() -> Result<Self> {
        Self::with_settings(&OutgoingSettings::default())
    }

    /// Create a new HTTP client with custom settings
    pub fn with_settings(settings: &OutgoingSettings) -> Result<Self> {
        let mut headers = HeaderMap::new();
        for (key, value) in &settings.extra_headers {
            headers.insert(
                HeaderName::from_bytes(key.as_bytes())?,
                HeaderValue::from_str(value)?,
            );
        }

        let mut builder = Client::builder()
            .timeout(Duration::from_secs_f64(settings.request_timeout))
            .pool_max_idle_per_host(settings.pool_maxsize)
            .user_agent(&settings.useragent)
            .default_headers(headers)
            .gzip(true)
            .brotli(true);

        // SSL verification
        if !settings.verify_ssl {
            builder = builder.danger_accept_invalid_certs(true);
        }

        // Proxy settings
        if let Some(ref proxy_url) = settings.proxies.all {
            builder = builder.proxy(reqwest::Proxy::all(proxy_url)?);
        } else {
            if let Some(ref http) = settings.proxies.http {
                builder = builder.proxy(reqwest::Proxy::http(http)?);
            }
            if let Some(ref https) = settings.proxies.https {
                builder = builder.proxy(reqwest::Proxy::https(https)?);
            }
        }

        let client = builder.build()?;

        Ok(Self {
            client,
            default_timeout: Duration::from_secs_f64(settings.request_timeout),
        })
    }

    /// Execute a provider request
    pub async fn execute(
        &self,
        provider: &str,
        request: ProviderRequest,
    ) -> Result<ProviderResponse, ProviderError> {
        self.execute_with_timeout(provider, request, self.default_timeout)
            .await
    }

    /// Execute a provider request with custom timeout
    pub async fn execute_with_timeout(
        &self,
        provider: &str,
        request: ProviderRequest,
        timeout: Duration,
    ) -> Result<ProviderResponse, ProviderError> {
        let mut req_builder = self
            .client
            .get(&request.url)
            .timeout(timeout)
            .header("Accept", "application/json");

        for (key, value) in &request.headers {
            req_builder = req_builder.header(key, value);
        }

        if !request.params.is_empty() {
            req_builder = req_builder.query(&request.params);
        }

        debug!("GET {} via {}", request.url, provider);

        let response = req_builder
            .send()
            .await
            .map_err(|e| Self::map_error(provider, e))?;

        Self::parse_response(provider, response).await
    }

    fn map_error(provider: &str, err: reqwest::Error) -> ProviderError {
        if err.is_timeout() {
            ProviderError::Timeout {
                provider: provider.to_string(),
            }
        } else {
            ProviderError::Network {
                provider: provider.to_string(),
                message: err.to_string(),
            }
        }
    }

    /// Parse response into ProviderResponse
    async fn parse_response(
        provider: &str,
        response: Response,
    ) -> Result<ProviderResponse, ProviderError> {
        let status = response.status().as_u16();
        let url = response.url().to_string();

        let mut headers = HashMap::new();
        for (key, value) in response.headers() {
            if let Ok(v) = value.to_str() {
                headers.insert(key.to_string(), v.to_string());
            }
        }

        let text = response
            .text()
            .await
            .map_err(|e| Self::map_error(provider, e))?;

        Ok(ProviderResponse {
            status,
            headers,
            text,
            url,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_client_creation() {
        assert!(HttpClient::new().is_ok());
    }

    #[tokio::test]
    async fn test_bad_extra_header() {
        let mut settings = OutgoingSettings::default();
        settings
            .extra_headers
            .insert("bad header".to_string(), "x".to_string());
        assert!(HttpClient::with_settings(&settings).is_err());
    }

    #[tokio::test]
    async fn test_sends_params_and_headers() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search.json"))
            .and(query_param("q", "rust lang"))
            .and(header("X-Test", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"ok":true}"#))
            .mount(&server)
            .await;

        let request = ProviderRequest::get(format!("{}/search.json", server.uri()))
            .param("q", "rust lang")
            .header("X-Test", "1");
        let response = HttpClient::new()
            .unwrap()
            .execute("test", request)
            .await
            .unwrap();

        assert_eq!(response.status, 200);
        assert_eq!(response.text, r#"{"ok":true}"#);
    }

    #[tokio::test]
    async fn test_timeout_maps_to_timeout() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_millis(500)))
            .mount(&server)
            .await;

        let err = HttpClient::new()
            .unwrap()
            .execute_with_timeout(
                "slow",
                ProviderRequest::get(server.uri()),
                Duration::from_millis(50),
            )
            .await
            .unwrap_err();

        assert_eq!(
            err,
            ProviderError::Timeout {
                provider: "slow".to_string()
            }
        );
        assert_eq!(err.status_code(), 408);
    }

    #[tokio::test]
    async fn test_unreachable_is_network_error() {
        let err = HttpClient::new()
            .unwrap()
            .execute("down", ProviderRequest::get("http://127.0.0.1:1/"))
            .await
            .unwrap_err();
        assert!(matches!(err, ProviderError::Network { .. }));
    }
}
