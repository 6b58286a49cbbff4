//! Open Library book search
//!
//! Free catalog API, no key required.

use super::error::ProviderError;
use super::traits::*;
use crate::config::ProviderConfig;
use crate::query::SearchCategory;
use crate::results::{BookDetails, SearchResult};
use crate::search::SearchQuery;
use serde::Deserialize;

pub const OPENLIBRARY_URL: &str = "https://openlibrary.org";

const PAGE_SIZE: u32 = 10;

/// Subjects kept per book
const MAX_SUBJECTS: usize = 5;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SearchJson {
    #[serde(rename = "numFound")]
    num_found: u64,
    docs: Vec<Doc>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Doc {
    key: Option<String>,
    title: String,
    subtitle: Option<String>,
    author_name: Vec<String>,
    first_publish_year: Option<i32>,
    publisher: Vec<String>,
    isbn: Vec<String>,
    cover_i: Option<i64>,
    number_of_pages_median: Option<u32>,
    subject: Vec<String>,
    edition_count: Option<u32>,
}

pub struct OpenLibrary {
    base_url: String,
}

impl OpenLibrary {
    pub fn new() -> Self {
        Self {
            base_url: OPENLIBRARY_URL.to_string(),
        }
    }

    fn doc_to_result(&self, doc: Doc) -> SearchResult {
        let link = doc
            .key
            .as_ref()
            .map(|key| format!("{}{}", OPENLIBRARY_URL, key));
        let cover_url = doc
            .cover_i
            .filter(|id| *id > 0)
            .map(|id| format!("https://covers.openlibrary.org/b/id/{}-M.jpg", id));

        let mut snippet = Vec::new();
        if !doc.author_name.is_empty() {
            snippet.push(format!("by {}", doc.author_name.join(", ")));
        }
        if let Some(year) = doc.first_publish_year {
            snippet.push(format!("first published {}", year));
        }
        if let Some(editions) = doc.edition_count {
            snippet.push(format!(
                "{} edition{}",
                editions,
                if editions == 1 { "" } else { "s" }
            ));
        }

        let title = match doc.subtitle {
            Some(subtitle) if !subtitle.is_empty() => format!("{}: {}", doc.title, subtitle),
            _ => doc.title,
        };

        SearchResult {
            title,
            link,
            snippet: (!snippet.is_empty()).then(|| snippet.join(" · ")),
            source: doc.publisher.first().cloned(),
            thumbnail: cover_url.clone(),
            book: Some(BookDetails {
                authors: doc.author_name,
                first_publish_year: doc.first_publish_year,
                publishers: doc.publisher,
                isbn: doc.isbn.into_iter().next(),
                cover_url,
                page_count: doc.number_of_pages_median,
                subjects: doc.subject.into_iter().take(MAX_SUBJECTS).collect(),
                edition_count: doc.edition_count,
            }),
            ..Default::default()
        }
    }
}

impl Default for OpenLibrary {
    fn default() -> Self {
        Self::new()
    }
}

impl Provider for OpenLibrary {
    fn name(&self) -> &str {
        "openlibrary"
    }

    fn about(&self) -> ProviderAbout {
        ProviderAbout::new().website("https://openlibrary.org")
    }

    fn categories(&self) -> Vec<SearchCategory> {
        vec![SearchCategory::Books]
    }

    fn init(&mut self, config: &ProviderConfig) -> anyhow::Result<()> {
        if let Some(ref url) = config.base_url {
            self.base_url = url.trim_end_matches('/').to_string();
        }
        Ok(())
    }

    fn request(&self, query: &SearchQuery) -> Result<ProviderRequest, ProviderError> {
        Ok(ProviderRequest::get(format!("{}/search.json", self.base_url))
            .param("q", &query.query)
            .param("page", query.page.max(1))
            .param("limit", PAGE_SIZE)
            .header("Accept", "application/json"))
    }

    fn response(
        &self,
        _query: &SearchQuery,
        response: ProviderResponse,
    ) -> Result<ProviderResults, ProviderError> {
        let response = response.error_for_status(self.name())?;
        let json: SearchJson = response
            .json()
            .map_err(|e| ProviderError::parse(self.name(), e))?;

        let results = json
            .docs
            .into_iter()
            .filter(|doc| !doc.title.trim().is_empty())
            .map(|doc| self.doc_to_result(doc))
            .collect();

        Ok(ProviderResults::with_results(results).total(Some(json.num_found)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn response(status: u16, body: &str) -> ProviderResponse {
        ProviderResponse {
            status,
            headers: HashMap::new(),
            text: body.to_string(),
            url: OPENLIBRARY_URL.to_string(),
        }
    }

    #[test]
    fn test_request() {
        let query = SearchQuery::new("dune", SearchCategory::Books).with_page(2);
        let request = OpenLibrary::new().request(&query).unwrap();

        assert_eq!(request.url, "https://openlibrary.org/search.json");
        assert_eq!(request.params["q"], "dune");
        assert_eq!(request.params["page"], "2");
        assert_eq!(request.params["limit"], "10");
    }

    #[test]
    fn test_base_url_override() {
        let mut provider = OpenLibrary::new();
        provider
            .init(&ProviderConfig {
                base_url: Some("http://127.0.0.1:9000/".to_string()),
                ..Default::default()
            })
            .unwrap();
        let request = provider
            .request(&SearchQuery::new("dune", SearchCategory::Books))
            .unwrap();
        assert_eq!(request.url, "http://127.0.0.1:9000/search.json");
    }

    #[test]
    fn test_response() {
        let body = serde_json::json!({
            "numFound": 1342,
            "docs": [
                {
                    "key": "/works/OL893415W",
                    "title": "Dune",
                    "author_name": ["Frank Herbert"],
                    "first_publish_year": 1965,
                    "publisher": ["Chilton Books", "Ace"],
                    "isbn": ["9780441013593", "0441013597"],
                    "cover_i": 11481354,
                    "number_of_pages_median": 604,
                    "subject": ["Science fiction", "Dune (Imaginary place)", "Fiction", "Ecology", "Deserts", "Religion"],
                    "edition_count": 120
                },
                { "key": "/works/OL1W", "title": "Dune Messiah", "subtitle": "Book two" }
            ]
        });
        let results = OpenLibrary::new()
            .response(
                &SearchQuery::new("dune", SearchCategory::Books),
                response(200, &body.to_string()),
            )
            .unwrap();

        assert_eq!(results.total_results, Some(1342));
        assert_eq!(results.results.len(), 2);

        let dune = &results.results[0];
        assert_eq!(dune.link.as_deref(), Some("https://openlibrary.org/works/OL893415W"));
        assert_eq!(
            dune.snippet.as_deref(),
            Some("by Frank Herbert · first published 1965 · 120 editions")
        );
        let book = dune.book.as_ref().unwrap();
        assert_eq!(book.isbn.as_deref(), Some("9780441013593"));
        assert_eq!(
            book.cover_url.as_deref(),
            Some("https://covers.openlibrary.org/b/id/11481354-M.jpg")
        );
        assert_eq!(book.page_count, Some(604));
        assert_eq!(book.subjects.len(), 5);

        let messiah = &results.results[1];
        assert_eq!(messiah.title, "Dune Messiah: Book two");
        assert_eq!(messiah.snippet, None);
        assert_eq!(messiah.thumbnail, None);
    }

    #[test]
    fn test_upstream_failure() {
        let err = OpenLibrary::new()
            .response(
                &SearchQuery::new("dune", SearchCategory::Books),
                response(503, "Service Unavailable"),
            )
            .unwrap_err();
        assert_eq!(err.status_code(), 500);
    }
}
