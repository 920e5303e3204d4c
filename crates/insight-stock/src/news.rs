//! Local relevance filtering of fetched news

use crate::api::Article;

/// Keep articles that actually mention the company name
///
/// The upstream search over-matches, so an article survives only if the
/// lower-cased company name is a substring of its lower-cased
/// title+description (missing fields count as empty). Provider relevance
/// order is preserved.
pub fn filter_relevant(articles: Vec<Article>, company_name: &str) -> Vec<Article> {
    let needle = company_name.to_lowercase();

    articles
        .into_iter()
        .filter(|article| {
            let haystack = format!("{}{}", article.title(), article.description()).to_lowercase();
            haystack.contains(&needle)
        })
        .collect()
}
