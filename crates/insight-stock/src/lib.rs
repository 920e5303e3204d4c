//! Stock financials and analyst news analysis
//!
//! This crate fetches a stock's recent price history and news coverage,
//! filters the news for articles that actually mention the company, asks an
//! LLM to summarize what analysts are saying, and renders the result as a
//! text dashboard. The pipeline is four steps run strictly in sequence per
//! user request:
//!
//! 1. Price history from Yahoo Finance ([`api::YahooFinanceClient`])
//! 2. Recent articles from NewsAPI ([`api::NewsApiClient`])
//! 3. Local relevance filter ([`news::filter_relevant`])
//! 4. One-shot LLM summary ([`summarizer::Summarizer`])
//!
//! # Example
//!
//! ```rust,ignore
//! use insight_stock::{AnalysisPipeline, InsightConfig};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = InsightConfig::from_env()?;
//!     let range = config.price_range.clone();
//!     let limit = config.article_limit;
//!
//!     let pipeline = AnalysisPipeline::from_config(config)?;
//!     let report = pipeline.run("NVDA", "Nvidia").await?;
//!     println!("{}", insight_stock::render_dashboard(&report, &range, limit));
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod news;
pub mod pipeline;
pub mod render;
pub mod summarizer;

// Re-export main types for convenience
pub use api::{Article, NewsApiClient, PricePoint, PriceSeries, YahooFinanceClient};
pub use config::InsightConfig;
pub use error::{InsightError, Result};
pub use news::filter_relevant;
pub use pipeline::{AnalysisPipeline, AnalysisReport};
pub use render::{render_chart, render_dashboard};
pub use summarizer::{Summarizer, Summary};
