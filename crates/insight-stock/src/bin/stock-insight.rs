//! Stock Insight CLI
//!
//! Fetches price history and analyst news for a stock, summarizes the news
//! via Groq, and prints a text dashboard.
//!
//! # Usage
//!
//! ```bash
//! # Set up environment variables
//! export NEWS_API_KEY="..."
//! export GROQ_API_KEY="gsk_..."
//!
//! # One-shot analysis (defaults: NVDA / Nvidia)
//! cargo run --bin stock-insight -p insight-stock
//!
//! # Another stock
//! cargo run --bin stock-insight -p insight-stock -- --ticker AAPL --company Apple
//!
//! # Interactive: one "TICKER Company Name" request per line
//! cargo run --bin stock-insight -p insight-stock -- --interactive
//! ```

use clap::Parser;
use insight_stock::{AnalysisPipeline, InsightConfig};
use std::io::{self, BufRead, Write};

#[derive(Parser, Debug)]
#[command(name = "stock-insight")]
#[command(about = "Stock financials and analyst news analyzer", long_about = None)]
struct Args {
    /// Stock ticker symbol (e.g. AAPL)
    #[arg(short, long, default_value = "NVDA")]
    ticker: String,

    /// Company name used for the news search (e.g. Apple)
    #[arg(short, long, default_value = "Nvidia")]
    company: String,

    /// Price history range (1mo, 3mo, 6mo, 1y, ...)
    #[arg(short, long)]
    range: Option<String>,

    /// Read "TICKER Company Name" lines from stdin and analyze each
    #[arg(short, long)]
    interactive: bool,
}

async fn analyze_once(
    pipeline: &AnalysisPipeline<
        insight_stock::YahooFinanceClient,
        insight_stock::NewsApiClient,
    >,
    range: &str,
    article_limit: usize,
    ticker: &str,
    company: &str,
) -> anyhow::Result<()> {
    let report = pipeline.run(ticker, company).await?;
    println!("{}", insight_stock::render_dashboard(&report, range, article_limit));
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    insight_utils::init_tracing();

    let args = Args::parse();

    // Missing API keys are a startup error
    let mut builder = InsightConfig::builder().with_env_keys();
    if let Some(range) = &args.range {
        builder = builder.price_range(range);
    }
    let config = builder.build()?;

    let range = config.price_range.clone();
    let article_limit = config.article_limit;
    let pipeline = AnalysisPipeline::from_config(config)?;

    if !args.interactive {
        return analyze_once(&pipeline, &range, article_limit, &args.ticker, &args.company)
            .await;
    }

    println!("stock-insight interactive mode");
    println!("Enter \"TICKER Company Name\" per line (e.g. \"NVDA Nvidia\"), or \"exit\".\n");

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("> ");
        stdout.flush()?;

        let mut input = String::new();
        match stdin.lock().read_line(&mut input) {
            Ok(0) => {
                // EOF
                println!("\nGoodbye!");
                break;
            }
            Ok(_) => {}
            Err(e) => {
                eprintln!("Error reading input: {e}");
                continue;
            }
        }

        let input = input.trim();
        if input.is_empty() {
            continue;
        }
        if input == "exit" || input == "quit" {
            println!("Goodbye!");
            break;
        }

        let Some((ticker, company)) = input.split_once(char::is_whitespace) else {
            eprintln!("Expected \"TICKER Company Name\", got: {input}");
            continue;
        };

        // Each request re-runs the full pipeline; nothing carries over
        if let Err(e) =
            analyze_once(&pipeline, &range, article_limit, ticker, company.trim()).await
        {
            eprintln!("Error: {e}\n");
        }
    }

    Ok(())
}
