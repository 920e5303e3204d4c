//! Yahoo Finance API client

use crate::error::{InsightError, Result};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use yahoo_finance_api as yahoo;

/// One trading day on the chart
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub close: f64,
}

/// Daily closing-price history for one symbol, date-ascending with one
/// point per trading day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceSeries {
    pub symbol: String,
    pub points: Vec<PricePoint>,
}

impl PriceSeries {
    /// Build a series from raw (date, close) pairs
    ///
    /// Sorts ascending by date and keeps the first close seen for a date, so
    /// the result is strictly date-ordered regardless of provider quirks.
    pub fn from_points(symbol: impl Into<String>, mut points: Vec<PricePoint>) -> Self {
        points.sort_by_key(|p| p.date);
        points.dedup_by_key(|p| p.date);

        Self {
            symbol: symbol.into(),
            points,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Closing prices in date order
    pub fn closes(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.close)
    }

    pub fn first(&self) -> Option<&PricePoint> {
        self.points.first()
    }

    pub fn last(&self) -> Option<&PricePoint> {
        self.points.last()
    }

    /// Lowest close over the series
    pub fn low(&self) -> Option<f64> {
        self.closes().reduce(f64::min)
    }

    /// Highest close over the series
    pub fn high(&self) -> Option<f64> {
        self.closes().reduce(f64::max)
    }

    /// Percentage change from the first close to the last
    pub fn change_pct(&self) -> Option<f64> {
        let first = self.first()?.close;
        let last = self.last()?.close;
        if first == 0.0 {
            return None;
        }
        Some((last - first) / first * 100.0)
    }
}

/// Resolve a Yahoo-style range string to a concrete [start, end] window
/// ending now
pub(crate) fn range_window(range: &str) -> Result<(DateTime<Utc>, DateTime<Utc>)> {
    let end = Utc::now();
    let start = match range {
        "5d" => end - chrono::Duration::days(5),
        "1mo" => end - chrono::Duration::days(30),
        "3mo" => end - chrono::Duration::days(90),
        "6mo" => end - chrono::Duration::days(180),
        "1y" => end - chrono::Duration::days(365),
        "2y" => end - chrono::Duration::days(730),
        "5y" => end - chrono::Duration::days(1825),
        _ => {
            return Err(InsightError::InvalidSymbol(format!(
                "Invalid range: {range}"
            )));
        }
    };
    Ok((start, end))
}

/// Yahoo Finance API client
pub struct YahooFinanceClient {}

impl YahooFinanceClient {
    /// Create a new Yahoo Finance client
    pub fn new() -> Self {
        Self {}
    }

    /// Fetch the daily closing-price series for a symbol over a range
    /// (e.g. "6mo")
    pub async fn price_history(&self, symbol: &str, range: &str) -> Result<PriceSeries> {
        let (start, end) = range_window(range)?;
        self.price_history_between(symbol, start, end).await
    }

    /// Fetch the daily closing-price series for a symbol between two instants
    pub async fn price_history_between(
        &self,
        symbol: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<PriceSeries> {
        let provider = yahoo::YahooConnector::new()
            .map_err(|e| InsightError::YahooFinanceError(e.to_string()))?;

        // Convert chrono DateTime to time OffsetDateTime
        let start_odt = OffsetDateTime::from_unix_timestamp(start.timestamp())
            .map_err(|e| InsightError::YahooFinanceError(format!("Invalid start timestamp: {e}")))?;
        let end_odt = OffsetDateTime::from_unix_timestamp(end.timestamp())
            .map_err(|e| InsightError::YahooFinanceError(format!("Invalid end timestamp: {e}")))?;

        let response = provider
            .get_quote_history(symbol, start_odt, end_odt)
            .await
            .map_err(|e| InsightError::YahooFinanceError(e.to_string()))?;

        let quotes = response
            .quotes()
            .map_err(|e| InsightError::YahooFinanceError(e.to_string()))?;

        let points = quotes
            .iter()
            .map(|q| PricePoint {
                date: DateTime::from_timestamp(q.timestamp as i64, 0)
                    .unwrap_or_else(Utc::now)
                    .date_naive(),
                close: q.close,
            })
            .collect();

        Ok(PriceSeries::from_points(symbol, points))
    }
}

impl Default for YahooFinanceClient {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for YahooFinanceClient {
    fn clone(&self) -> Self {
        Self::new()
    }
}
