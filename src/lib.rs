//! Pool Analytics
//!
//! Chart-ready series and summary statistics for a DEX protocol's
//! liquidity, volume, fee and pool composition feeds.
//!
//! This crate provides the core implementation for the
//! `pool-analytics` CLI tool.
//!
//! ## Getting Started
//!
//! ```bash
//! pool-analytics series --feed fees --days 7 --percentage --output fees.json
//! pool-analytics liquidity --output liquidity.json
//! ```
//!
//! The transformer itself is pure and can be used directly:
//!
//! ```
//! use pool_analytics::aggregator::{normalize_series, LabelKind, Mode};
//! use pool_analytics::parser::RawRecord;
//!
//! let records = vec![RawRecord::new(0, [("swap", 1.0), ("margin", 3.0)])];
//! let points = normalize_series(&records, Mode::Percentage, LabelKind::Timestamp);
//! assert_eq!(points[0].values["margin"], 75.0);
//! ```

pub mod aggregator;
pub mod commands;
pub mod feed;
pub mod output;
pub mod parser;
pub mod utils;
