//! Terminal line chart for closing prices

use crate::api::PriceSeries;

const POINT: char = '•';
const FILL: char = '·';

/// Render a closing-price line chart as text
///
/// The series is resampled to `width` columns; the y axis is labeled with
/// prices to 2 decimals at the top, middle, and bottom, and the x axis with
/// the first and last dates.
pub fn render_chart(series: &PriceSeries, width: usize, height: usize) -> String {
    let width = width.max(10);
    let height = height.max(3);

    if series.is_empty() {
        return "(no price data)".to_string();
    }

    let closes: Vec<f64> = series.closes().collect();
    let low = series.low().unwrap_or(0.0);
    let high = series.high().unwrap_or(0.0);
    let span = if high > low { high - low } else { 1.0 };

    // Nearest-sample resampling onto the column grid
    let columns: Vec<f64> = (0..width)
        .map(|c| {
            let idx = if width == 1 {
                0
            } else {
                c * (closes.len() - 1) / (width - 1)
            };
            closes[idx]
        })
        .collect();

    let mut grid = vec![vec![' '; width]; height];
    let mut prev_level: Option<usize> = None;
    for (col, &value) in columns.iter().enumerate() {
        let level = ((value - low) / span * (height - 1) as f64).round() as usize;

        // Bridge vertical gaps between neighboring columns so steep moves
        // still read as a line
        if let Some(prev) = prev_level {
            let (lo, hi) = if prev < level { (prev, level) } else { (level, prev) };
            for l in lo..=hi {
                grid[height - 1 - l][col] = FILL;
            }
        }
        grid[height - 1 - level][col] = POINT;
        prev_level = Some(level);
    }

    let top_label = format!("{high:.2}");
    let mid_label = format!("{:.2}", low + span / 2.0);
    let bottom_label = format!("{low:.2}");
    let gutter = top_label
        .len()
        .max(mid_label.len())
        .max(bottom_label.len());

    let mut out = String::new();
    for (row, cells) in grid.iter().enumerate() {
        let label = if row == 0 {
            top_label.as_str()
        } else if row == height / 2 {
            mid_label.as_str()
        } else if row == height - 1 {
            bottom_label.as_str()
        } else {
            ""
        };

        out.push_str(&format!("{label:>gutter$} ┤"));
        out.extend(cells.iter());
        out.push('\n');
    }

    out.push_str(&format!("{:>gutter$} └{}\n", "", "─".repeat(width)));

    if let (Some(first), Some(last)) = (series.first(), series.last()) {
        let first_date = first.date.to_string();
        let last_date = last.date.to_string();
        let pad = width.saturating_sub(first_date.len() + last_date.len());
        out.push_str(&format!(
            "{:>gutter$}  {first_date}{}{last_date}\n",
            "",
            " ".repeat(pad)
        ));
    }

    out
}
