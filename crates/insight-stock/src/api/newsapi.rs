//! NewsAPI client (<https://newsapi.org>)

use crate::error::{InsightError, Result};
use chrono::NaiveDate;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

const NEWSAPI_BASE: &str = "https://newsapi.org/v2";

/// Article source metadata
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ArticleSource {
    #[serde(default)]
    pub name: Option<String>,
}

/// One article from the news provider
///
/// NewsAPI routinely returns null for any of these fields, so every one is
/// optional on the wire; accessors substitute the empty string.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub source: ArticleSource,
    #[serde(default)]
    pub published_at: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

impl Article {
    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or("")
    }

    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }

    pub fn source_name(&self) -> &str {
        self.source.name.as_deref().unwrap_or("")
    }

    pub fn published_at(&self) -> &str {
        self.published_at.as_deref().unwrap_or("")
    }

    pub fn url(&self) -> &str {
        self.url.as_deref().unwrap_or("")
    }
}

#[derive(Debug, Deserialize)]
struct EverythingResponse {
    #[serde(default)]
    articles: Vec<Article>,
}

/// Quote a company name for an exact-phrase NewsAPI query
pub(crate) fn exact_phrase(company_name: &str) -> String {
    format!("\"{company_name}\"")
}

/// NewsAPI client
pub struct NewsApiClient {
    client: Client,
    api_key: String,
}

impl NewsApiClient {
    /// Create a new NewsAPI client
    pub fn new(api_key: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            api_key: api_key.into(),
        })
    }

    /// Search `/v2/everything` for English articles mentioning the company
    /// name as an exact phrase, published in [from, to], sorted by relevancy
    pub async fn everything(
        &self,
        company_name: &str,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<Article>> {
        let url = format!("{NEWSAPI_BASE}/everything");

        let response = self
            .client
            .get(&url)
            .query(&[
                ("q", exact_phrase(company_name).as_str()),
                ("apiKey", self.api_key.as_str()),
                ("language", "en"),
                ("sortBy", "relevancy"),
                ("from", &from.format("%Y-%m-%d").to_string()),
                ("to", &to.format("%Y-%m-%d").to_string()),
            ])
            .send()
            .await
            .map_err(|e| InsightError::NewsApiError(format!("Request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(InsightError::NewsApiError(format!(
                "API error {status}: {body}"
            )));
        }

        let parsed: EverythingResponse = response
            .json()
            .await
            .map_err(|e| InsightError::NewsApiError(format!("Failed to parse response: {e}")))?;

        debug!(
            "NewsAPI returned {} articles for {company_name}",
            parsed.articles.len()
        );

        Ok(parsed.articles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_phrase() {
        assert_eq!(exact_phrase("Nvidia"), "\"Nvidia\"");
        assert_eq!(exact_phrase("Berkshire Hathaway"), "\"Berkshire Hathaway\"");
    }

    #[test]
    fn test_parse_everything_response() {
        let body = r#"{
            "status": "ok",
            "totalResults": 1,
            "articles": [
                {
                    "source": {"id": null, "name": "X"},
                    "author": "someone",
                    "title": "Nvidia beats estimates",
                    "description": "Nvidia Q3 results",
                    "url": "https://example.com/a",
                    "publishedAt": "2024-01-01T12:00:00Z"
                }
            ]
        }"#;

        let parsed: EverythingResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.articles.len(), 1);

        let article = &parsed.articles[0];
        assert_eq!(article.title(), "Nvidia beats estimates");
        assert_eq!(article.source_name(), "X");
        assert_eq!(article.published_at(), "2024-01-01T12:00:00Z");
    }

    #[test]
    fn test_parse_response_with_missing_fields() {
        // Articles array absent entirely
        let parsed: EverythingResponse = serde_json::from_str(r#"{"status": "ok"}"#).unwrap();
        assert!(parsed.articles.is_empty());

        // Null fields substitute empty strings
        let body = r#"{
            "articles": [
                {"source": {"name": null}, "title": null, "description": null, "url": null, "publishedAt": null}
            ]
        }"#;
        let parsed: EverythingResponse = serde_json::from_str(body).unwrap();
        let article = &parsed.articles[0];
        assert_eq!(article.title(), "");
        assert_eq!(article.description(), "");
        assert_eq!(article.source_name(), "");
        assert_eq!(article.url(), "");
    }

    #[tokio::test]
    #[ignore] // Requires network access and NEWS_API_KEY
    async fn test_everything() {
        let key = std::env::var("NEWS_API_KEY").unwrap();
        let client = NewsApiClient::new(key, Duration::from_secs(30)).unwrap();

        let to = chrono::Utc::now().date_naive();
        let from = to - chrono::Duration::days(7);
        let articles = client.everything("Nvidia", from, to).await.unwrap();
        assert!(!articles.is_empty());
    }
}
