use std::time::Duration;

use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use spider_transformations::transformation::content::{
    transform_content_input, ReturnFormat, TransformConfig, TransformInput,
};
use tracing::{info, warn};

// --- ArticleFetcher trait ---

/// Retrieves the readable text of an article. An empty string means the
/// page had no extractable content.
#[async_trait]
pub trait ArticleFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<String>;
    fn name(&self) -> &str;
}

// --- Plain HTTP + Readability fetcher ---

const FETCH_TIMEOUT: Duration = Duration::from_secs(10);
const USER_AGENT: &str = "Mozilla/5.0";

pub struct HttpArticleFetcher {
    client: reqwest::Client,
}

impl HttpArticleFetcher {
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(FETCH_TIMEOUT)
            .user_agent(USER_AGENT)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self { client })
    }
}

/// Readability main-content extraction to plain text.
pub fn html_to_text(html: &[u8], url: Option<&str>) -> String {
    let parsed_url = url.and_then(|u| url::Url::parse(u).ok());
    let config = TransformConfig {
        readability: true,
        main_content: true,
        return_format: ReturnFormat::Text,
        filter_images: true,
        filter_svg: true,
        clean_html: true,
    };
    let input = TransformInput {
        url: parsed_url.as_ref(),
        content: html,
        screenshot_bytes: None,
        encoding: None,
        selector_config: None,
        ignore_tags: None,
    };

    transform_content_input(input, &config)
}

#[async_trait]
impl ArticleFetcher for HttpArticleFetcher {
    async fn fetch(&self, url: &str) -> Result<String> {
        info!(url, fetcher = "http", "Fetching article");

        let resp = self
            .client
            .get(url)
            .send()
            .await
            .context("Article request failed")?;

        let status = resp.status();
        if !status.is_success() {
            bail!("Article request returned HTTP {}", status.as_u16());
        }

        let html = resp.bytes().await.context("Failed to read article body")?;
        if html.is_empty() {
            warn!(url, fetcher = "http", "Empty HTML response");
            return Ok(String::new());
        }

        let text = html_to_text(&html, Some(url));
        let text = text.trim();
        if text.is_empty() {
            warn!(url, fetcher = "http", "Empty content after Readability extraction");
            return Ok(String::new());
        }

        info!(url, fetcher = "http", bytes = text.len(), "Fetched article");
        Ok(text.to_string())
    }

    fn name(&self) -> &str {
        "http"
    }
}

