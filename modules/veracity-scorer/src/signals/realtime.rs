//! Real-time cross-verification against a news-search index.
//!
//! The article's leading claim is sent as one search query; the more hits
//! come from trusted outlets, the higher the score. Every failure mode
//! (no credential, transport error, bad status, malformed payload) surfaces
//! as [`Verification::Unavailable`], which scores as neutral.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use newsapi_client::{EverythingQuery, NewsApiClient, NewsApiError, NewsArticle, SearchResponse};
use serde::Serialize;
use tracing::{info, warn};

use veracity_common::{
    contains_any, Config, VeracityError, NEUTRAL_SCORE, TRUSTED_DOMAINS, TRUSTED_SOURCES,
};

/// Max characters of the leading sentence sent as the query.
pub const CLAIM_MAX_CHARS: usize = 100;

pub const SEARCH_TIMEOUT: Duration = Duration::from_secs(5);

// --- NewsSearch seam ---

#[async_trait]
pub trait NewsSearch: Send + Sync {
    /// English-language search for `query`.
    async fn search(&self, query: &str) -> newsapi_client::Result<SearchResponse>;
}

#[async_trait]
impl NewsSearch for NewsApiClient {
    async fn search(&self, query: &str) -> newsapi_client::Result<SearchResponse> {
        self.everything(&EverythingQuery::english(query)).await
    }
}

// --- Verification result ---

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum UnavailableReason {
    NoCredential,
    Transport { message: String },
    HttpStatus { status: u16 },
    NotOk { status: String },
    Malformed { message: String },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Verification {
    Corroborated { trusted_matches: usize, score: f64 },
    Unavailable { reason: UnavailableReason },
}

impl Verification {
    fn unavailable(reason: UnavailableReason) -> Self {
        Verification::Unavailable { reason }
    }

    /// Realtime signal value; `Unavailable` is neutral.
    pub fn score(&self) -> f64 {
        match self {
            Verification::Corroborated { score, .. } => *score,
            Verification::Unavailable { .. } => NEUTRAL_SCORE,
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, Verification::Corroborated { .. })
    }
}

impl From<NewsApiError> for UnavailableReason {
    fn from(err: NewsApiError) -> Self {
        match err {
            NewsApiError::Api { status, .. } => UnavailableReason::HttpStatus { status },
            NewsApiError::Parse(message) => UnavailableReason::Malformed { message },
            other => UnavailableReason::Transport {
                message: other.to_string(),
            },
        }
    }
}

// --- Scoring helpers ---

/// Leading sentence of the article (up to the first `.`), truncated to
/// [`CLAIM_MAX_CHARS`] characters.
pub fn claim_fragment(text: &str) -> String {
    let first = text.split('.').next().unwrap_or_default().trim();
    first.chars().take(CLAIM_MAX_CHARS).collect()
}

/// Outlet name first, article URL as fallback.
pub fn is_trusted_article(article: &NewsArticle) -> bool {
    let name = article.source.name.to_lowercase();
    if contains_any(&name, TRUSTED_SOURCES) {
        return true;
    }
    let url = article.url.to_lowercase();
    contains_any(&url, TRUSTED_DOMAINS)
}

/// Step function from trusted-hit count to score. Never reaches 0 or 1: one
/// search query is weak evidence either way.
pub fn corroboration_score(trusted_matches: usize) -> f64 {
    match trusted_matches {
        0 => 0.2,
        1 => 0.4,
        2 => 0.6,
        _ => 0.8,
    }
}

// --- Verifier ---

pub struct RealtimeVerifier {
    search: Option<Arc<dyn NewsSearch>>,
}

impl RealtimeVerifier {
    pub fn new(search: Arc<dyn NewsSearch>) -> Self {
        Self {
            search: Some(search),
        }
    }

    /// Verifier with no credential: always neutral, never touches the network.
    pub fn disabled() -> Self {
        Self { search: None }
    }

    pub fn from_config(config: &Config) -> veracity_common::Result<Self> {
        match config.news_api_key.as_deref() {
            Some(key) => {
                let client =
                    NewsApiClient::with_options(key, &config.news_api_base_url, SEARCH_TIMEOUT)
                        .map_err(|e| VeracityError::Config(format!("news search client: {e}")))?;
                info!(base_url = %config.news_api_base_url, "Realtime verification enabled");
                Ok(Self::new(Arc::new(client)))
            }
            None => {
                info!("NEWS_API_KEY not set, realtime verification will stay neutral");
                Ok(Self::disabled())
            }
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.search.is_some()
    }

    pub async fn verify(&self, text: &str) -> Verification {
        let Some(search) = self.search.as_ref() else {
            return Verification::unavailable(UnavailableReason::NoCredential);
        };

        let claim = claim_fragment(text);
        let response = match search.search(&claim).await {
            Ok(r) => r,
            Err(e) => {
                warn!(error = %e, "Realtime search failed, using neutral score");
                return Verification::unavailable(e.into());
            }
        };

        if !response.is_ok() {
            warn!(
                status = %response.status,
                code = response.code.as_deref().unwrap_or(""),
                "Realtime search returned non-ok status"
            );
            return Verification::unavailable(UnavailableReason::NotOk {
                status: response.status,
            });
        }

        let Some(articles) = response.articles else {
            warn!("Realtime search response has no articles field");
            return Verification::unavailable(UnavailableReason::Malformed {
                message: "missing articles".to_string(),
            });
        };

        let trusted_matches = articles.iter().filter(|a| is_trusted_article(a)).count();
        let score = corroboration_score(trusted_matches);
        info!(
            claim = %claim,
            returned = articles.len(),
            trusted_matches,
            score,
            "Realtime verification complete"
        );

        Verification::Corroborated {
            trusted_matches,
            score,
        }
    }

    pub async fn score(&self, text: &str) -> f64 {
        self.verify(text).await.score()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{news_article, ok_response, MockSearch};

    #[test]
    fn claim_stops_at_first_period() {
        assert_eq!(
            claim_fragment("Markets rallied today. Analysts were surprised."),
            "Markets rallied today"
        );
    }

    #[test]
    fn claim_is_truncated_by_characters() {
        let text = "é".repeat(250);
        let claim = claim_fragment(&text);
        assert_eq!(claim.chars().count(), CLAIM_MAX_CHARS);
    }

    #[test]
    fn corroboration_steps() {
        assert_eq!(corroboration_score(0), 0.2);
        assert_eq!(corroboration_score(1), 0.4);
        assert_eq!(corroboration_score(2), 0.6);
        assert_eq!(corroboration_score(3), 0.8);
        assert_eq!(corroboration_score(40), 0.8);
    }

    #[test]
    fn trusted_by_name_or_url() {
        assert!(is_trusted_article(&news_article("BBC News", "https://x.example/a")));
        assert!(is_trusted_article(&news_article("Wire", "https://www.Reuters.com/a")));
        assert!(!is_trusted_article(&news_article("Daily Blog", "https://blog.example/a")));
    }

    #[tokio::test]
    async fn no_credential_is_always_neutral() {
        let verifier = RealtimeVerifier::disabled();
        for text in ["", "Anything at all.", "sources said reportedly"] {
            let v = verifier.verify(text).await;
            assert_eq!(
                v,
                Verification::Unavailable {
                    reason: UnavailableReason::NoCredential
                }
            );
            assert_eq!(v.score(), 0.5);
        }
    }

    #[tokio::test]
    async fn counts_trusted_articles() {
        let search = MockSearch::responding(ok_response(vec![
            news_article("BBC News", "https://www.bbc.com/1"),
            news_article("The Hindu", "https://www.thehindu.com/2"),
            news_article("Random", "https://random.example/3"),
        ]));
        let verifier = RealtimeVerifier::new(Arc::new(search));
        let v = verifier.verify("Parliament passed the bill. More later.").await;
        assert_eq!(
            v,
            Verification::Corroborated {
                trusted_matches: 2,
                score: 0.6
            }
        );
    }

    #[tokio::test]
    async fn query_is_the_claim_fragment() {
        let search = Arc::new(MockSearch::responding(ok_response(vec![])));
        let verifier = RealtimeVerifier::new(search.clone());
        let v = verifier.verify("Parliament passed the bill. More later.").await;
        assert_eq!(v.score(), 0.2);
        assert_eq!(search.queries(), vec!["Parliament passed the bill".to_string()]);
    }

    #[tokio::test]
    async fn non_ok_status_is_neutral() {
        let mut resp = ok_response(vec![news_article("BBC", "https://bbc.com")]);
        resp.status = "error".to_string();
        let verifier = RealtimeVerifier::new(Arc::new(MockSearch::responding(resp)));
        let v = verifier.verify("claim").await;
        assert!(!v.is_available());
        assert_eq!(v.score(), 0.5);
    }

    #[tokio::test]
    async fn missing_articles_is_neutral() {
        let mut resp = ok_response(vec![]);
        resp.articles = None;
        let verifier = RealtimeVerifier::new(Arc::new(MockSearch::responding(resp)));
        assert_eq!(verifier.score("claim").await, 0.5);
    }

    #[tokio::test]
    async fn transport_and_parse_failures_are_neutral() {
        for err in [
            NewsApiError::Timeout,
            NewsApiError::Parse("eof".into()),
            NewsApiError::Api {
                status: 426,
                message: "upgrade".into(),
            },
        ] {
            let verifier = RealtimeVerifier::new(Arc::new(MockSearch::failing(err)));
            assert_eq!(verifier.score("claim").await, 0.5);
        }
    }
}
