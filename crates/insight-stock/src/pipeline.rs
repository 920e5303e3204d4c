//! The analysis pipeline: prices, news, filter, summary

use crate::api::{
    Article, NewsApiClient, NewsProvider, PriceProvider, PriceSeries, YahooFinanceClient,
};
use crate::config::InsightConfig;
use crate::error::Result;
use crate::news::filter_relevant;
use crate::summarizer::{Summarizer, Summary};
use chrono::Utc;
use insight_llm::providers::GroqProvider;
use std::sync::Arc;
use tracing::info;

/// Everything one dashboard render needs
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisReport {
    pub ticker: String,
    pub company_name: String,
    pub prices: PriceSeries,
    /// Relevance-filtered articles in provider order
    pub articles: Vec<Article>,
    pub summary: Summary,
}

/// Runs the four pipeline steps in sequence for one user request
///
/// Each run is independent; nothing is carried between invocations. A
/// failing price or news fetch aborts the run with an error, while an empty
/// filtered article list is a normal outcome.
pub struct AnalysisPipeline<P, N> {
    prices: P,
    news: N,
    summarizer: Summarizer,
    config: InsightConfig,
}

impl AnalysisPipeline<YahooFinanceClient, NewsApiClient> {
    /// Wire up the production providers from a validated configuration
    pub fn from_config(config: InsightConfig) -> Result<Self> {
        let news = NewsApiClient::new(&config.news_api_key, config.request_timeout)?;
        let provider = GroqProvider::new(&config.groq_api_key)?;
        let summarizer = Summarizer::new(Arc::new(provider), &config.model);

        Ok(Self {
            prices: YahooFinanceClient::new(),
            news,
            summarizer,
            config,
        })
    }
}

impl<P: PriceProvider, N: NewsProvider> AnalysisPipeline<P, N> {
    /// Create a pipeline over explicit providers
    pub fn new(prices: P, news: N, summarizer: Summarizer, config: InsightConfig) -> Self {
        Self {
            prices,
            news,
            summarizer,
            config,
        }
    }

    /// Run the full pipeline for one ticker/company pair
    pub async fn run(&self, ticker: &str, company_name: &str) -> Result<AnalysisReport> {
        info!("Analyzing {ticker} ({company_name})");

        let prices = self
            .prices
            .price_history(ticker, &self.config.price_range)
            .await?;

        let to = Utc::now().date_naive();
        let from = to - chrono::Duration::days(self.config.news_window_days);
        let fetched = self.news.recent_articles(company_name, from, to).await?;

        let articles = filter_relevant(fetched, company_name);
        info!("{} relevant articles after filtering", articles.len());

        let summary = self.summarizer.summarize(&articles).await?;

        Ok(AnalysisReport {
            ticker: ticker.to_string(),
            company_name: company_name.to_string(),
            prices,
            articles,
            summary,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ArticleSource, MockNewsProvider, MockPriceProvider, PricePoint};
    use async_trait::async_trait;
    use insight_llm::{
        CompletionRequest, CompletionResponse, LLMProvider, Message, StopReason, TokenUsage,
    };
    use mockall::mock;

    mock! {
        Llm {}

        #[async_trait]
        impl LLMProvider for Llm {
            async fn complete(
                &self,
                request: CompletionRequest,
            ) -> insight_llm::Result<CompletionResponse>;

            fn name(&self) -> &str;
        }
    }

    fn test_config() -> InsightConfig {
        InsightConfig::builder()
            .news_api_key("news_key")
            .groq_api_key("gsk_key")
            .build()
            .unwrap()
    }

    fn series() -> PriceSeries {
        let day = |d| chrono::NaiveDate::from_ymd_opt(2024, 1, d).unwrap();
        PriceSeries::from_points(
            "NVDA",
            vec![
                PricePoint { date: day(1), close: 100.0 },
                PricePoint { date: day(2), close: 105.0 },
            ],
        )
    }

    fn articles() -> Vec<Article> {
        vec![
            Article {
                title: Some("Nvidia beats estimates".to_string()),
                description: Some("Nvidia Q3 results".to_string()),
                source: ArticleSource { name: Some("X".to_string()) },
                published_at: Some("2024-01-01".to_string()),
                url: Some("u".to_string()),
            },
            Article {
                title: Some("Market roundup".to_string()),
                description: Some(String::new()),
                source: ArticleSource { name: Some("X".to_string()) },
                published_at: Some("2024-01-01".to_string()),
                url: Some("u".to_string()),
            },
        ]
    }

    fn pipeline(runs: usize) -> AnalysisPipeline<MockPriceProvider, MockNewsProvider> {
        let mut prices = MockPriceProvider::new();
        prices
            .expect_price_history()
            .times(runs)
            .returning(|_, _| Ok(series()));

        let mut news = MockNewsProvider::new();
        news.expect_recent_articles()
            .times(runs)
            .returning(|_, _, _| Ok(articles()));

        let mut llm = MockLlm::new();
        llm.expect_name().return_const("mock".to_string());
        llm.expect_complete()
            .times(runs)
            .returning(|_| {
                Ok(CompletionResponse {
                    message: Message::assistant("Summary text."),
                    stop_reason: StopReason::EndTurn,
                    usage: TokenUsage { input_tokens: 1, output_tokens: 1 },
                })
            });

        let summarizer = Summarizer::new(Arc::new(llm), "llama-3.3-70b-versatile");
        AnalysisPipeline::new(prices, news, summarizer, test_config())
    }

    #[tokio::test]
    async fn test_run_filters_and_summarizes() {
        let report = pipeline(1).run("NVDA", "Nvidia").await.unwrap();

        assert_eq!(report.ticker, "NVDA");
        assert_eq!(report.prices.len(), 2);
        // The non-mentioning article was filtered out
        assert_eq!(report.articles.len(), 1);
        assert_eq!(report.articles[0].title(), "Nvidia beats estimates");
        assert_eq!(report.summary, Summary::Text("Summary text.".to_string()));
    }

    #[tokio::test]
    async fn test_reruns_are_identical() {
        let pipeline = pipeline(2);

        let first = pipeline.run("NVDA", "Nvidia").await.unwrap();
        let second = pipeline.run("NVDA", "Nvidia").await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_no_relevant_articles_is_ok_not_error() {
        let mut prices = MockPriceProvider::new();
        prices.expect_price_history().returning(|_, _| Ok(series()));

        let mut news = MockNewsProvider::new();
        news.expect_recent_articles().returning(|_, _, _| Ok(vec![]));

        // Summarizer must not call out for an empty list
        let llm = MockLlm::new();
        let summarizer = Summarizer::new(Arc::new(llm), "llama-3.3-70b-versatile");

        let pipeline = AnalysisPipeline::new(prices, news, summarizer, test_config());
        let report = pipeline.run("NVDA", "Nvidia").await.unwrap();

        assert!(report.articles.is_empty());
        assert_eq!(report.summary, Summary::NoArticles);
    }

    #[tokio::test]
    async fn test_news_failure_aborts_run() {
        let mut prices = MockPriceProvider::new();
        prices.expect_price_history().returning(|_, _| Ok(series()));

        let mut news = MockNewsProvider::new();
        news.expect_recent_articles().returning(|_, _, _| {
            Err(crate::error::InsightError::NewsApiError("boom".to_string()))
        });

        let llm = MockLlm::new();
        let summarizer = Summarizer::new(Arc::new(llm), "llama-3.3-70b-versatile");

        let pipeline = AnalysisPipeline::new(prices, news, summarizer, test_config());
        let result = pipeline.run("NVDA", "Nvidia").await;
        assert!(result.is_err());
    }
}
