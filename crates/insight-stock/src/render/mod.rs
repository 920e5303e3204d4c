//! Dashboard rendering

pub mod chart;
pub mod dashboard;

pub use chart::render_chart;
pub use dashboard::render_dashboard;
