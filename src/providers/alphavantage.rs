//! Alpha Vantage finance provider
//!
//! Ticker-looking queries ("AAPL", "$msft", "BRK.B") get a live quote;
//! anything else is treated as a company name and searched for matching
//! symbols.

use super::error::ProviderError;
use super::traits::*;
use crate::config::ProviderConfig;
use crate::query::SearchCategory;
use crate::results::{QuoteDetails, SearchResult};
use crate::search::SearchQuery;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use std::collections::HashMap;

pub const ALPHAVANTAGE_URL: &str = "https://www.alphavantage.co/query";

const PAGE_SIZE: u32 = 10;

static TICKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z]{1,5}(?:[.\-][A-Za-z]{1,2})?$").expect("valid regex"));

/// What a finance query asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FinanceLookup {
    /// Live quote for a ticker symbol
    Quote(String),
    /// Symbol search by keywords
    Search(String),
}

impl FinanceLookup {
    pub fn from_query(query: &str) -> Self {
        let query = query.trim();
        let (dollar, bare) = match query.strip_prefix('$') {
            Some(rest) => (true, rest.trim()),
            None => (false, query),
        };

        let uppercase = bare.chars().all(|c| !c.is_ascii_lowercase());
        if TICKER.is_match(bare) && (dollar || uppercase) {
            Self::Quote(bare.to_ascii_uppercase())
        } else {
            Self::Search(bare.to_string())
        }
    }
}

/// Alpha Vantage reports every number as a string
fn number(fields: &HashMap<String, String>, key: &str) -> Option<f64> {
    fields
        .get(key)
        .and_then(|v| v.trim().trim_end_matches('%').parse().ok())
}

fn text(fields: &HashMap<String, String>, key: &str) -> Option<String> {
    fields.get(key).filter(|v| !v.is_empty()).cloned()
}

fn quote_link(symbol: &str) -> String {
    format!("https://finance.yahoo.com/quote/{}", urlencoding::encode(symbol))
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct AlphaResponse {
    #[serde(rename = "Global Quote")]
    global_quote: Option<HashMap<String, String>>,
    #[serde(rename = "bestMatches")]
    best_matches: Option<Vec<HashMap<String, String>>>,
    #[serde(rename = "Error Message")]
    error_message: Option<String>,
    #[serde(rename = "Note")]
    note: Option<String>,
    #[serde(rename = "Information")]
    information: Option<String>,
}

fn quote_result(fields: &HashMap<String, String>) -> Option<SearchResult> {
    let symbol = text(fields, "01. symbol")?;
    let quote = QuoteDetails {
        symbol: symbol.clone(),
        name: None,
        price: number(fields, "05. price"),
        change: number(fields, "09. change"),
        change_percent: number(fields, "10. change percent"),
        open: number(fields, "02. open"),
        high: number(fields, "03. high"),
        low: number(fields, "04. low"),
        previous_close: number(fields, "08. previous close"),
        volume: fields.get("06. volume").and_then(|v| v.trim().parse().ok()),
        latest_trading_day: text(fields, "07. latest trading day"),
        currency: Some("USD".to_string()),
        region: None,
        instrument_type: None,
    };

    let snippet = match (quote.price, quote.change, quote.change_percent) {
        (Some(price), Some(change), Some(percent)) => {
            format!("{:.2} USD ({:+.2}, {:+.2}%)", price, change, percent)
        }
        (Some(price), _, _) => format!("{:.2} USD", price),
        _ => "No price available".to_string(),
    };

    Some(SearchResult {
        title: symbol.clone(),
        link: Some(quote_link(&symbol)),
        snippet: Some(snippet),
        date: quote.latest_trading_day.clone(),
        price: quote.price.map(|p| format!("${:.2}", p)),
        extracted_price: quote.price,
        quote: Some(quote),
        ..Default::default()
    })
}

fn match_result(fields: &HashMap<String, String>) -> Option<SearchResult> {
    let symbol = text(fields, "1. symbol")?;
    let name = text(fields, "2. name");
    let quote = QuoteDetails {
        symbol: symbol.clone(),
        name: name.clone(),
        currency: text(fields, "8. currency"),
        region: text(fields, "4. region"),
        instrument_type: text(fields, "3. type"),
        ..Default::default()
    };

    let snippet = [&quote.instrument_type, &quote.region, &quote.currency]
        .iter()
        .filter_map(|v| v.as_deref())
        .collect::<Vec<_>>()
        .join(" · ");

    Some(SearchResult {
        title: match name {
            Some(name) => format!("{} ({})", name, symbol),
            None => symbol.clone(),
        },
        link: Some(quote_link(&symbol)),
        snippet: (!snippet.is_empty()).then_some(snippet),
        source: quote.region.clone(),
        quote: Some(quote),
        ..Default::default()
    })
}

pub struct AlphaVantage {
    base_url: String,
    api_key: Option<String>,
}

impl AlphaVantage {
    pub fn new() -> Self {
        Self {
            base_url: ALPHAVANTAGE_URL.to_string(),
            api_key: None,
        }
    }

    fn check_body(&self, raw: &AlphaResponse) -> Result<(), ProviderError> {
        if let Some(ref message) = raw.error_message {
            let lower = message.to_lowercase();
            return Err(if lower.contains("apikey") || lower.contains("api key") {
                ProviderError::Unauthorized(message.clone())
            } else {
                ProviderError::BadRequest(message.clone())
            });
        }

        // Throttling and key problems arrive as informational notes
        if let Some(message) = raw.note.as_ref().or(raw.information.as_ref()) {
            if raw.global_quote.is_none() && raw.best_matches.is_none() {
                return Err(match ProviderError::from_message(self.name(), message.as_str()) {
                    ProviderError::Upstream { message, .. } => ProviderError::RateLimited(message),
                    other => other,
                });
            }
        }

        Ok(())
    }
}

impl Default for AlphaVantage {
    fn default() -> Self {
        Self::new()
    }
}

impl Provider for AlphaVantage {
    fn name(&self) -> &str {
        "alphavantage"
    }

    fn about(&self) -> ProviderAbout {
        ProviderAbout::new()
            .website("https://www.alphavantage.co")
            .api_key_required(true)
    }

    fn categories(&self) -> Vec<SearchCategory> {
        vec![SearchCategory::Finance]
    }

    fn init(&mut self, config: &ProviderConfig) -> anyhow::Result<()> {
        if let Some(ref url) = config.base_url {
            self.base_url = url.clone();
        }
        self.api_key = config.api_key.clone();
        Ok(())
    }

    fn validate(&self, config: &ProviderConfig) -> anyhow::Result<()> {
        check_key(&self.about(), config)
    }

    fn request(&self, query: &SearchQuery) -> Result<ProviderRequest, ProviderError> {
        let api_key = require_key(self.name(), &self.api_key)?;
        let request = ProviderRequest::get(&self.base_url).param("apikey", api_key);

        Ok(match FinanceLookup::from_query(&query.query) {
            FinanceLookup::Quote(symbol) => request
                .param("function", "GLOBAL_QUOTE")
                .param("symbol", symbol),
            FinanceLookup::Search(keywords) => request
                .param("function", "SYMBOL_SEARCH")
                .param("keywords", keywords),
        })
    }

    fn response(
        &self,
        query: &SearchQuery,
        response: ProviderResponse,
    ) -> Result<ProviderResults, ProviderError> {
        let response = response.error_for_status(self.name())?;
        let raw: AlphaResponse = response
            .json()
            .map_err(|e| ProviderError::parse(self.name(), e))?;
        self.check_body(&raw)?;

        let all: Vec<SearchResult> = match (raw.global_quote, raw.best_matches) {
            (Some(quote), _) => quote_result(&quote).into_iter().collect(),
            (None, Some(matches)) => matches.iter().filter_map(match_result).collect(),
            (None, None) => Vec::new(),
        };
        let total = all.len() as u64;

        let skip = ((query.page.max(1) - 1) * PAGE_SIZE) as usize;
        let results = all.into_iter().skip(skip).take(PAGE_SIZE as usize).collect();

        Ok(ProviderResults::with_results(results).total(Some(total)))
    }
}
