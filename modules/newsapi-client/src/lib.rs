pub mod error;
pub mod types;

pub use error::{NewsApiError, Result};
pub use types::{ArticleSource, EverythingQuery, NewsArticle, SearchResponse};

use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://newsapi.org";

/// Hard upper bound on a single search round-trip.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

pub struct NewsApiClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl NewsApiClient {
    pub fn new(api_key: &str) -> Result<Self> {
        Self::with_options(api_key, DEFAULT_BASE_URL, DEFAULT_TIMEOUT)
    }

    pub fn with_options(api_key: &str, base_url: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Search every indexed article. Returns the parsed envelope as-is; callers
    /// decide what a non-`ok` status means for them.
    pub async fn everything(&self, query: &EverythingQuery) -> Result<SearchResponse> {
        let url = format!("{}/v2/everything", self.base_url);
        tracing::debug!(q = %query.q, language = %query.language, "NewsAPI search");

        let resp = self
            .client
            .get(&url)
            .header("X-Api-Key", &self.api_key)
            .query(query)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(NewsApiError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = resp.text().await?;
        let parsed: SearchResponse = serde_json::from_str(&body)?;
        tracing::debug!(
            status = %parsed.status,
            total = parsed.total_results.unwrap_or_default(),
            "NewsAPI search complete"
        );
        Ok(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let client =
            NewsApiClient::with_options("key", "http://localhost:9999/", DEFAULT_TIMEOUT).unwrap();
        assert_eq!(client.base_url(), "http://localhost:9999");
    }

    #[tokio::test]
    async fn unreachable_host_is_a_network_error() {
        // Port 9 (discard) on loopback is closed on any sane test host.
        let client = NewsApiClient::with_options(
            "key",
            "http://127.0.0.1:9",
            Duration::from_millis(500),
        )
        .unwrap();
        let err = client
            .everything(&EverythingQuery::english("anything"))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            NewsApiError::Network(_) | NewsApiError::Timeout
        ));
    }
}
