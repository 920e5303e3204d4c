//! Text dashboard assembly: chart panel, article panel, summary panel

use crate::pipeline::AnalysisReport;
use crate::render::chart::render_chart;
use comfy_table::{ContentArrangement, Table, presets::UTF8_FULL};

const CHART_WIDTH: usize = 60;
const CHART_HEIGHT: usize = 12;
const TITLE_WIDTH: usize = 48;

/// Human label for a Yahoo-style range string
fn range_label(range: &str) -> String {
    match range {
        "1mo" => "Last Month".to_string(),
        "3mo" => "Last 3 Months".to_string(),
        "6mo" => "Last 6 Months".to_string(),
        "1y" => "Last Year".to_string(),
        _ => format!("Last {range}"),
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{cut}…")
}

/// Render the full dashboard for one analysis run
///
/// Three panels in the order the user reads them: price chart, relevant
/// articles (up to `article_limit`), summary. When no relevant articles
/// survived the filter, the article and summary panels collapse into a
/// single notice.
pub fn render_dashboard(report: &AnalysisReport, range: &str, article_limit: usize) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "📈 {} Stock Price ({})\n\n",
        report.ticker,
        range_label(range)
    ));
    out.push_str(&render_chart(&report.prices, CHART_WIDTH, CHART_HEIGHT));

    if let Some(last) = report.prices.last() {
        let change = report.prices.change_pct().unwrap_or(0.0);
        out.push_str(&format!(
            "\nLast {:.2} | High {:.2} | Low {:.2} | Change {change:+.2}%\n",
            last.close,
            report.prices.high().unwrap_or(0.0),
            report.prices.low().unwrap_or(0.0),
        ));
    }

    out.push_str(&format!("\n📰 Analyst-Related News: {}\n\n", report.company_name));

    if report.articles.is_empty() {
        out.push_str(&format!(
            "⚠️ No relevant articles found for {}.\n",
            report.company_name
        ));
        return out;
    }

    out.push_str(&format!(
        "Found {} relevant analyst articles.\n\n",
        report.articles.len()
    ));

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Title", "Source", "Published", "Link"]);

    for article in report.articles.iter().take(article_limit) {
        table.add_row(vec![
            truncate(article.title(), TITLE_WIDTH),
            article.source_name().to_string(),
            article.published_at().to_string(),
            article.url().to_string(),
        ]);
    }

    out.push_str(&format!("{table}\n"));

    out.push_str("\n💡 Summary of Analyst Findings\n\n");
    out.push_str(report.summary.text());
    out.push('\n');

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{Article, ArticleSource, PricePoint, PriceSeries};
    use crate::summarizer::Summary;
    use chrono::NaiveDate;

    fn article(title: &str) -> Article {
        Article {
            title: Some(title.to_string()),
            description: Some(String::new()),
            source: ArticleSource {
                name: Some("Reuters".to_string()),
            },
            published_at: Some("2024-01-01T12:00:00Z".to_string()),
            url: Some("https://example.com/a".to_string()),
        }
    }

    fn report(articles: Vec<Article>, summary: Summary) -> AnalysisReport {
        let day = |d| NaiveDate::from_ymd_opt(2024, 1, d).unwrap();
        AnalysisReport {
            ticker: "NVDA".to_string(),
            company_name: "Nvidia".to_string(),
            prices: PriceSeries::from_points(
                "NVDA",
                vec![
                    PricePoint { date: day(1), close: 100.0 },
                    PricePoint { date: day(2), close: 110.0 },
                ],
            ),
            articles,
            summary,
        }
    }

    #[test]
    fn test_full_dashboard_sections() {
        let report = report(
            vec![article("Nvidia beats estimates")],
            Summary::Text("All good.".to_string()),
        );
        let out = render_dashboard(&report, "6mo", 5);

        assert!(out.contains("NVDA Stock Price (Last 6 Months)"));
        assert!(out.contains("Found 1 relevant analyst articles."));
        assert!(out.contains("Nvidia beats estimates"));
        assert!(out.contains("Reuters"));
        assert!(out.contains("Summary of Analyst Findings"));
        assert!(out.contains("All good."));
    }

    #[test]
    fn test_article_limit_applied() {
        let articles: Vec<_> = (0..8).map(|i| article(&format!("Nvidia story {i}"))).collect();
        let report = report(articles, Summary::Text("s".to_string()));
        let out = render_dashboard(&report, "6mo", 5);

        assert!(out.contains("Nvidia story 4"));
        assert!(!out.contains("Nvidia story 5"));
        // The count line still reports everything that passed the filter
        assert!(out.contains("Found 8 relevant analyst articles."));
    }

    #[test]
    fn test_no_articles_notice_replaces_panels() {
        let report = report(vec![], Summary::NoArticles);
        let out = render_dashboard(&report, "6mo", 5);

        assert!(out.contains("No relevant articles found for Nvidia."));
        assert!(!out.contains("Summary of Analyst Findings"));
    }

    #[test]
    fn test_stat_line() {
        let report = report(vec![], Summary::NoArticles);
        let out = render_dashboard(&report, "6mo", 5);

        assert!(out.contains("Last 110.00"));
        assert!(out.contains("Change +10.00%"));
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        let long = "x".repeat(60);
        let cut = truncate(&long, 48);
        assert_eq!(cut.chars().count(), 48);
        assert!(cut.ends_with('…'));
    }
}
