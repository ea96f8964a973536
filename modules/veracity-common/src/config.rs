use std::env;
use std::path::PathBuf;

use crate::error::{Result, VeracityError};

pub const DEFAULT_NEWS_API_BASE_URL: &str = "https://newsapi.org";
pub const DEFAULT_MODEL_PATH: &str = "fake_news_model.json";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    // Realtime verification. Absent means a permanently neutral realtime signal.
    pub news_api_key: Option<String>,
    pub news_api_base_url: String,

    // Text signal model artifact
    pub model_path: PathBuf,

    // Web server
    pub web_host: String,
    pub web_port: u16,
}

impl Config {
    /// Load configuration from the environment, reading `.env` first if present.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let web_port = env::var("WEB_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .map_err(|_| VeracityError::Config("WEB_PORT must be a number".to_string()))?;

        let config = Self {
            news_api_key: optional_env("NEWS_API_KEY"),
            news_api_base_url: optional_env("NEWS_API_BASE_URL")
                .unwrap_or_else(|| DEFAULT_NEWS_API_BASE_URL.to_string()),
            model_path: optional_env("MODEL_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_MODEL_PATH)),
            web_host: env::var("WEB_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            web_port,
        };

        config.log_keys();
        Ok(config)
    }

    pub fn log_keys(&self) {
        tracing::info!("Config loaded:");
        tracing::info!("  NEWS_API_KEY: {}", preview_opt(&self.news_api_key));
        tracing::info!("  NEWS_API_BASE_URL: {}", self.news_api_base_url);
        tracing::info!("  MODEL_PATH: {}", self.model_path.display());
        tracing::info!("  WEB: {}:{}", self.web_host, self.web_port);
    }
}

/// Treats empty values the same as unset ones.
fn optional_env(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn preview(val: &str) -> String {
    let n = val.chars().count().min(5);
    let head: String = val.chars().take(n).collect();
    format!("{}...({} chars)", head, val.chars().count())
}

fn preview_opt(val: &Option<String>) -> String {
    match val {
        Some(v) if !v.is_empty() => preview(v),
        _ => "<not set>".to_string(),
    }
}
