//! Configuration for the stock-insight pipeline

use crate::error::{InsightError, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

const DEFAULT_MODEL: &str = "llama-3.3-70b-versatile";
const DEFAULT_PRICE_RANGE: &str = "6mo";
const DEFAULT_NEWS_WINDOW_DAYS: i64 = 7;
const DEFAULT_ARTICLE_LIMIT: usize = 5;

/// Configuration for one analysis run
///
/// Both API keys are required; a missing key is a startup error, not a
/// runtime fallback.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsightConfig {
    /// NewsAPI key
    pub news_api_key: String,

    /// Groq API key
    pub groq_api_key: String,

    /// LLM model identifier used for summarization
    pub model: String,

    /// Price history range (Yahoo-style, e.g. "6mo", "1y")
    pub price_range: String,

    /// News search window in days, ending now
    pub news_window_days: i64,

    /// Maximum number of articles shown on the dashboard
    pub article_limit: usize,

    /// Request timeout duration
    pub request_timeout: Duration,
}

impl InsightConfig {
    /// Create a new configuration builder
    pub fn builder() -> InsightConfigBuilder {
        InsightConfigBuilder::default()
    }

    /// Build a configuration entirely from the environment
    ///
    /// Reads `NEWS_API_KEY` and `GROQ_API_KEY` (both required) and
    /// `GROQ_MODEL` (optional).
    pub fn from_env() -> Result<Self> {
        Self::builder().with_env_keys().build()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.news_api_key.is_empty() {
            return Err(InsightError::ConfigError(
                "NewsAPI key is required (set NEWS_API_KEY)".to_string(),
            ));
        }

        if self.groq_api_key.is_empty() {
            return Err(InsightError::ConfigError(
                "Groq API key is required (set GROQ_API_KEY)".to_string(),
            ));
        }

        if self.news_window_days <= 0 {
            return Err(InsightError::ConfigError(
                "news_window_days must be positive".to_string(),
            ));
        }

        Ok(())
    }
}

/// Builder for InsightConfig
#[derive(Debug, Default)]
pub struct InsightConfigBuilder {
    news_api_key: Option<String>,
    groq_api_key: Option<String>,
    model: Option<String>,
    price_range: Option<String>,
    news_window_days: Option<i64>,
    article_limit: Option<usize>,
    request_timeout: Option<Duration>,
}

impl InsightConfigBuilder {
    /// Set the NewsAPI key
    pub fn news_api_key(mut self, key: impl Into<String>) -> Self {
        self.news_api_key = Some(key.into());
        self
    }

    /// Set the Groq API key
    pub fn groq_api_key(mut self, key: impl Into<String>) -> Self {
        self.groq_api_key = Some(key.into());
        self
    }

    /// Set the summarization model
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Set the price history range
    pub fn price_range(mut self, range: impl Into<String>) -> Self {
        self.price_range = Some(range.into());
        self
    }

    /// Set the news search window in days
    pub fn news_window_days(mut self, days: i64) -> Self {
        self.news_window_days = Some(days);
        self
    }

    /// Set the maximum number of rendered articles
    pub fn article_limit(mut self, limit: usize) -> Self {
        self.article_limit = Some(limit);
        self
    }

    /// Set the request timeout
    pub fn request_timeout(mut self, duration: Duration) -> Self {
        self.request_timeout = Some(duration);
        self
    }

    /// Load API keys and model from the environment
    ///
    /// Reads `NEWS_API_KEY`, `GROQ_API_KEY`, and `GROQ_MODEL`. Values set
    /// explicitly on the builder take precedence.
    pub fn with_env_keys(mut self) -> Self {
        if self.news_api_key.is_none() {
            if let Ok(key) = std::env::var("NEWS_API_KEY") {
                self.news_api_key = Some(key);
            }
        }
        if self.groq_api_key.is_none() {
            if let Ok(key) = std::env::var("GROQ_API_KEY") {
                self.groq_api_key = Some(key);
            }
        }
        if self.model.is_none() {
            if let Ok(model) = std::env::var("GROQ_MODEL") {
                self.model = Some(model);
            }
        }
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<InsightConfig> {
        let config = InsightConfig {
            news_api_key: self.news_api_key.unwrap_or_default(),
            groq_api_key: self.groq_api_key.unwrap_or_default(),
            model: self.model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            price_range: self
                .price_range
                .unwrap_or_else(|| DEFAULT_PRICE_RANGE.to_string()),
            news_window_days: self.news_window_days.unwrap_or(DEFAULT_NEWS_WINDOW_DAYS),
            article_limit: self.article_limit.unwrap_or(DEFAULT_ARTICLE_LIMIT),
            request_timeout: self.request_timeout.unwrap_or(Duration::from_secs(30)),
        };

        config.validate()?;
        Ok(config)
    }
}
