// Test mocks for the analysis pipeline.
//
// One mock per collaborator seam:
// - FixedModel (TextSignalModel) : constant probability
// - MockFetcher (ArticleFetcher) : HashMap-based URL→text
// - MockSearch (NewsSearch) : canned response or error, records queries

use std::collections::HashMap;
use std::sync::Mutex;

use anyhow::{bail, Result};
use async_trait::async_trait;
use newsapi_client::{ArticleSource, NewsApiError, NewsArticle, SearchResponse};

use crate::fetcher::ArticleFetcher;
use crate::model::TextSignalModel;
use crate::signals::NewsSearch;

// ---------------------------------------------------------------------------
// FixedModel
// ---------------------------------------------------------------------------

pub struct FixedModel(pub f64);

impl TextSignalModel for FixedModel {
    fn probability(&self, _text: &str) -> f64 {
        self.0
    }

    fn name(&self) -> &str {
        "fixed"
    }
}

// ---------------------------------------------------------------------------
// MockFetcher
// ---------------------------------------------------------------------------

/// Returns `Err` for unregistered URLs.
pub struct MockFetcher {
    pages: HashMap<String, String>,
}

impl MockFetcher {
    pub fn new() -> Self {
        Self {
            pages: HashMap::new(),
        }
    }

    pub fn on_page(mut self, url: &str, text: &str) -> Self {
        self.pages.insert(url.to_string(), text.to_string());
        self
    }
}

impl Default for MockFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ArticleFetcher for MockFetcher {
    async fn fetch(&self, url: &str) -> Result<String> {
        match self.pages.get(url) {
            Some(text) => Ok(text.clone()),
            None => bail!("MockFetcher: no page registered for {url}"),
        }
    }

    fn name(&self) -> &str {
        "mock"
    }
}

// ---------------------------------------------------------------------------
// MockSearch
// ---------------------------------------------------------------------------

pub struct MockSearch {
    response: Option<SearchResponse>,
    error: Mutex<Option<NewsApiError>>,
    queries: Mutex<Vec<String>>,
}

impl MockSearch {
    pub fn responding(response: SearchResponse) -> Self {
        Self {
            response: Some(response),
            error: Mutex::new(None),
            queries: Mutex::new(Vec::new()),
        }
    }

    /// Fails the first call with `err`, later calls with a network error.
    pub fn failing(err: NewsApiError) -> Self {
        Self {
            response: None,
            error: Mutex::new(Some(err)),
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl NewsSearch for MockSearch {
    async fn search(&self, query: &str) -> newsapi_client::Result<SearchResponse> {
        self.queries.lock().unwrap().push(query.to_string());
        if let Some(resp) = &self.response {
            return Ok(resp.clone());
        }
        let err = self.error.lock().unwrap().take();
        Err(err.unwrap_or_else(|| NewsApiError::Network("mock search exhausted".to_string())))
    }
}

// ---------------------------------------------------------------------------
// Builders
// ---------------------------------------------------------------------------

pub fn news_article(source_name: &str, url: &str) -> NewsArticle {
    NewsArticle {
        source: ArticleSource {
            id: None,
            name: source_name.to_string(),
        },
        url: url.to_string(),
        title: None,
    }
}

pub fn ok_response(articles: Vec<NewsArticle>) -> SearchResponse {
    SearchResponse {
        status: "ok".to_string(),
        total_results: Some(articles.len() as u64),
        articles: Some(articles),
        code: None,
        message: None,
    }
}
