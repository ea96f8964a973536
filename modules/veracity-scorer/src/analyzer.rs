//! End-to-end analysis of one article: resolve input, compute the four
//! signals, fuse, summarize.

use std::sync::Arc;

use serde::Serialize;
use tracing::{info, warn};

use veracity_common::{
    Article, ArticleInput, Classification, Config, FusionResult, Result, VeracityError,
};

use crate::fetcher::{ArticleFetcher, HttpArticleFetcher};
use crate::fusion::{fuse_signals, SignalInputs};
use crate::model::{TextSignalModel, TfidfLogisticModel};
use crate::signals::{fact_check::fact_check, source_score, RealtimeVerifier, Verification};
use crate::summary::summarize;

#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub article_url: Option<String>,
    pub result: FusionResult,
    pub realtime: Verification,
    pub fact_matches: Vec<&'static str>,
    /// Present for TRUE and UNCERTAIN articles only.
    pub summary: Option<String>,
}

impl AnalysisReport {
    pub fn classification(&self) -> Classification {
        self.result.classification
    }
}

pub struct Analyzer {
    model: Arc<dyn TextSignalModel>,
    fetcher: Arc<dyn ArticleFetcher>,
    verifier: RealtimeVerifier,
}

impl Analyzer {
    pub fn new(
        model: Arc<dyn TextSignalModel>,
        fetcher: Arc<dyn ArticleFetcher>,
        verifier: RealtimeVerifier,
    ) -> Self {
        Self {
            model,
            fetcher,
            verifier,
        }
    }

    /// Production wiring: model artifact from `MODEL_PATH`, HTTP retrieval,
    /// NewsAPI verification when a key is configured.
    pub fn from_config(config: &Config) -> Result<Self> {
        let model = TfidfLogisticModel::load(&config.model_path)?;
        let fetcher = HttpArticleFetcher::new()?;
        let verifier = RealtimeVerifier::from_config(config)?;
        Ok(Self::new(Arc::new(model), Arc::new(fetcher), verifier))
    }

    /// Turn raw input into an article with non-empty text. A URL always
    /// wins over pasted text.
    pub async fn resolve(&self, input: &ArticleInput) -> Result<Article> {
        if let Some(url) = input.url() {
            let text = self.fetcher.fetch(url).await.map_err(|e| {
                warn!(url, fetcher = self.fetcher.name(), error = %e, "Article retrieval failed");
                VeracityError::Retrieval {
                    url: url.to_string(),
                    message: format!("{e:#}"),
                }
            })?;

            let text = text.trim();
            if text.is_empty() {
                warn!(url, "Retrieved article is empty");
                return Err(VeracityError::EmptyArticle {
                    url: url.to_string(),
                });
            }

            return Ok(Article {
                url: Some(url.to_string()),
                text: text.to_string(),
            });
        }

        match input.pasted_text() {
            Some(text) => Ok(Article {
                url: None,
                text: text.to_string(),
            }),
            None => Err(VeracityError::MissingInput),
        }
    }

    /// Score an already-resolved article. Never fails: unavailable signals
    /// have been absorbed by the time fusion runs.
    pub async fn score(&self, article: &Article) -> AnalysisReport {
        let ml = self.model.probability(&article.text);
        let source = source_score(article.url.as_deref());
        let fact = fact_check(&article.text);
        let realtime = self.verifier.verify(&article.text).await;

        let result = fuse_signals(&SignalInputs {
            ml,
            source,
            fact: fact.score,
            realtime: realtime.clone(),
        });

        info!(
            url = article.url.as_deref().unwrap_or("<pasted>"),
            model = self.model.name(),
            ml = result.components.ml_score,
            source = ?result.components.source_score.value(),
            fact = result.components.fact_score,
            realtime = result.components.realtime_score,
            final_score = result.final_score,
            classification = %result.classification,
            "Article analyzed"
        );

        let summary = match result.classification {
            Classification::Fake => None,
            _ => Some(summarize(&article.text)),
        };

        AnalysisReport {
            article_url: article.url.clone(),
            result,
            realtime,
            fact_matches: fact.matched,
            summary,
        }
    }

    pub async fn analyze(&self, input: &ArticleInput) -> Result<AnalysisReport> {
        let article = self.resolve(input).await?;
        Ok(self.score(&article).await)
    }
}
