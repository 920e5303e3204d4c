//! Shared utilities for stock-insight
//!
//! This crate provides common functionality used across the stock-insight
//! workspace, currently logging setup.

pub mod logging;

pub use logging::init_tracing;
