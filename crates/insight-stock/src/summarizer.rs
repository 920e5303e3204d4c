//! LLM summarization of filtered news coverage

use crate::api::Article;
use crate::error::Result;
use insight_llm::{CompletionRequest, LLMProvider, Message};
use std::fmt;
use std::sync::Arc;
use tracing::debug;

const SUMMARY_INSTRUCTION: &str =
    "Summarize the following articles discussing the performance of the stock:";
const NO_ARTICLES_TEXT: &str = "No analyst-related articles found.";
const MAX_SUMMARY_TOKENS: usize = 1024;

/// Outcome of a summarization run
///
/// An empty article list is a normal outcome, not an error, and is kept
/// distinct from generated text so callers can branch on it instead of
/// matching display strings. Provider failures are plain `Err`s from
/// [`Summarizer::summarize`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Summary {
    /// Nothing to summarize; no LLM call was made
    NoArticles,
    /// Generated summary text, trimmed
    Text(String),
}

impl Summary {
    pub fn text(&self) -> &str {
        match self {
            Self::NoArticles => NO_ARTICLES_TEXT,
            Self::Text(text) => text,
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

/// Build the single-turn summarization prompt: one `Title:`/`Description:`
/// block per article, blocks separated by newline, prefixed with the fixed
/// instruction
fn build_prompt(articles: &[Article]) -> String {
    let combined = articles
        .iter()
        .map(|a| format!("Title: {}\nDescription: {}", a.title(), a.description()))
        .collect::<Vec<_>>()
        .join("\n");

    format!("{SUMMARY_INSTRUCTION}\n\n{combined}")
}

/// Summarizes filtered articles through an LLM provider
pub struct Summarizer {
    provider: Arc<dyn LLMProvider>,
    model: String,
}

impl Summarizer {
    /// Create a summarizer over a provider and model identifier
    pub fn new(provider: Arc<dyn LLMProvider>, model: impl Into<String>) -> Self {
        Self {
            provider,
            model: model.into(),
        }
    }

    /// Summarize the given articles with one non-streaming completion
    ///
    /// Returns `Summary::NoArticles` immediately for an empty list; any
    /// provider failure propagates as an error.
    pub async fn summarize(&self, articles: &[Article]) -> Result<Summary> {
        if articles.is_empty() {
            return Ok(Summary::NoArticles);
        }

        let prompt = build_prompt(articles);
        debug!(
            "Requesting summary of {} articles from {}",
            articles.len(),
            self.provider.name()
        );

        let request = CompletionRequest::builder(&self.model)
            .add_message(Message::user(prompt))
            .max_tokens(MAX_SUMMARY_TOKENS)
            .build();

        let response = self.provider.complete(request).await?;

        Ok(Summary::Text(response.message.text().trim().to_string()))
    }
}
