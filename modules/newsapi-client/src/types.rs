use serde::{Deserialize, Serialize};

/// Query parameters for the `/v2/everything` endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct EverythingQuery {
    pub q: String,
    pub language: String,
}

impl EverythingQuery {
    pub fn english(q: impl Into<String>) -> Self {
        Self {
            q: q.into(),
            language: "en".to_string(),
        }
    }
}

/// Envelope returned by every NewsAPI endpoint.
///
/// `articles` is only present on success; error envelopes carry `code` and
/// `message` instead.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    pub status: String,
    #[serde(rename = "totalResults")]
    pub total_results: Option<u64>,
    pub articles: Option<Vec<NewsArticle>>,
    pub code: Option<String>,
    pub message: Option<String>,
}

impl SearchResponse {
    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}

/// A single article hit. `source.name` and `url` are required: an article
/// without them fails to deserialize.
#[derive(Debug, Clone, Deserialize)]
pub struct NewsArticle {
    pub source: ArticleSource,
    pub url: String,
    pub title: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ArticleSource {
    pub id: Option<String>,
    pub name: String,
}
