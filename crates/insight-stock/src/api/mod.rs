//! External data-provider clients and the trait seams over them

pub mod newsapi;
pub mod yahoo;

pub use newsapi::{Article, ArticleSource, NewsApiClient};
pub use yahoo::{PricePoint, PriceSeries, YahooFinanceClient};

use crate::error::Result;
use async_trait::async_trait;
use chrono::NaiveDate;

#[cfg(test)]
use mockall::automock;

/// Source of daily closing-price history
#[cfg_attr(test, automock)]
#[async_trait]
pub trait PriceProvider: Send + Sync {
    /// Fetch the closing-price series for a symbol over a Yahoo-style range
    async fn price_history(&self, symbol: &str, range: &str) -> Result<PriceSeries>;
}

/// Source of recent news coverage
#[cfg_attr(test, automock)]
#[async_trait]
pub trait NewsProvider: Send + Sync {
    /// Fetch articles mentioning the company name published in [from, to]
    async fn recent_articles(
        &self,
        company_name: &str,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<Article>>;
}

#[async_trait]
impl PriceProvider for YahooFinanceClient {
    async fn price_history(&self, symbol: &str, range: &str) -> Result<PriceSeries> {
        YahooFinanceClient::price_history(self, symbol, range).await
    }
}

#[async_trait]
impl NewsProvider for NewsApiClient {
    async fn recent_articles(
        &self,
        company_name: &str,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<Article>> {
        self.everything(company_name, from, to).await
    }
}
