//! Error types for the stock-insight pipeline

use thiserror::Error;

/// Errors from price fetching, news fetching, and summarization
#[derive(Debug, Error)]
pub enum InsightError {
    /// API request failed
    #[error("API error: {0}")]
    ApiError(String),

    /// Invalid stock symbol or price range provided
    #[error("Invalid symbol: {0}")]
    InvalidSymbol(String),

    /// Data not available for the requested symbol
    #[error("Data not available for {symbol}: {reason}")]
    DataUnavailable {
        symbol: String,
        reason: String,
    },

    /// Network or HTTP error
    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    /// JSON parsing error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Yahoo Finance API error
    #[error("Yahoo Finance error: {0}")]
    YahooFinanceError(String),

    /// NewsAPI error
    #[error("NewsAPI error: {0}")]
    NewsApiError(String),

    /// LLM provider error
    #[error("LLM error: {0}")]
    LlmError(#[from] insight_llm::LLMError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

/// Result type alias for stock-insight operations
pub type Result<T> = std::result::Result<T, InsightError>;
