//! Provider failure types
//!
//! Every failure maps onto one of the HTTP statuses the search endpoint
//! reports: 400, 401, 408, 429 or 500.

use crate::query::SearchCategory;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProviderError {
    #[error("{provider} API key is not configured")]
    MissingApiKey { provider: String },

    #[error("No provider is available for {0} searches")]
    Unavailable(SearchCategory),

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("Request to {provider} timed out")]
    Timeout { provider: String },

    #[error("{0}")]
    RateLimited(String),

    #[error("{provider} returned HTTP {status}: {message}")]
    Upstream {
        provider: String,
        status: u16,
        message: String,
    },

    #[error("Failed to reach {provider}: {message}")]
    Network { provider: String, message: String },

    #[error("Failed to parse {provider} response: {message}")]
    Parse { provider: String, message: String },
}

impl ProviderError {
    /// HTTP status the search endpoint answers with
    pub fn status_code(&self) -> u16 {
        match self {
            Self::BadRequest(_) => 400,
            Self::Unauthorized(_) => 401,
            Self::Timeout { .. } => 408,
            Self::RateLimited(_) => 429,
            Self::MissingApiKey { .. }
            | Self::Unavailable(_)
            | Self::Upstream { .. }
            | Self::Network { .. }
            | Self::Parse { .. } => 500,
        }
    }

    /// Map a failed upstream HTTP status (and its message, if the body had one)
    pub fn from_status(provider: &str, status: u16, message: Option<String>) -> Self {
        match status {
            400 | 404 | 422 => Self::BadRequest(
                message.unwrap_or_else(|| format!("{} rejected the request", provider)),
            ),
            401 | 403 => Self::Unauthorized(
                message.unwrap_or_else(|| format!("{} rejected the API key", provider)),
            ),
            408 | 504 => Self::Timeout {
                provider: provider.to_string(),
            },
            429 => Self::RateLimited(
                message.unwrap_or_else(|| format!("{} rate limit exceeded", provider)),
            ),
            _ => Self::Upstream {
                provider: provider.to_string(),
                status,
                message: message.unwrap_or_else(|| "unexpected response".to_string()),
            },
        }
    }

    /// Classify an error message a provider returned with a success status
    pub fn from_message(provider: &str, message: impl Into<String>) -> Self {
        let message = message.into();
        let lower = message.to_lowercase();

        // Quota notices often mention the key too, so they are checked first
        if lower.contains("run out of searches")
            || lower.contains("rate limit")
            || lower.contains("too many requests")
            || lower.contains("call frequency")
            || lower.contains("requests per")
        {
            Self::RateLimited(message)
        } else if lower.contains("api key") || lower.contains("apikey") || lower.contains("api_key") {
            Self::Unauthorized(message)
        } else if lower.contains("timed out") || lower.contains("timeout") {
            Self::Timeout {
                provider: provider.to_string(),
            }
        } else {
            Self::Upstream {
                provider: provider.to_string(),
                status: 200,
                message,
            }
        }
    }

    pub fn parse(provider: &str, err: impl std::fmt::Display) -> Self {
        Self::Parse {
            provider: provider.to_string(),
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (400, 400),
            (401, 401),
            (403, 401),
            (408, 408),
            (429, 429),
            (500, 500),
            (502, 500),
            (503, 500),
        ];
        for (upstream, expected) in cases {
            assert_eq!(
                ProviderError::from_status("serpapi", upstream, None).status_code(),
                expected,
                "upstream {}",
                upstream
            );
        }
    }

    #[test]
    fn test_status_keeps_message() {
        let err = ProviderError::from_status("serpapi", 401, Some("Invalid API key.".to_string()));
        assert_eq!(err, ProviderError::Unauthorized("Invalid API key.".to_string()));
        assert_eq!(err.to_string(), "Invalid API key.");
    }

    #[test]
    fn test_message_classification() {
        assert_eq!(
            ProviderError::from_message("serpapi", "Invalid API key. Your API key should be here")
                .status_code(),
            401
        );
        assert_eq!(
            ProviderError::from_message("serpapi", "Your account has run out of searches.")
                .status_code(),
            429
        );
        assert_eq!(
            ProviderError::from_message("alphavantage", "Our standard API rate limit is 25 requests per day.")
                .status_code(),
            429
        );
        assert_eq!(
            ProviderError::from_message(
                "alphavantage",
                "We have detected your API key as ABC123 and our standard API rate limit is 25 requests per day."
            )
            .status_code(),
            429
        );
        assert_eq!(
            ProviderError::from_message("serpapi", "Something odd happened").status_code(),
            500
        );
    }

    #[test]
    fn test_internal_errors_are_500() {
        assert_eq!(
            ProviderError::MissingApiKey {
                provider: "serpapi".to_string()
            }
            .status_code(),
            500
        );
        assert_eq!(ProviderError::Unavailable(SearchCategory::Maps).status_code(), 500);
        assert_eq!(ProviderError::parse("openlibrary", "eof").status_code(), 500);
    }
}
