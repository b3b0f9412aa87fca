//! Transformation of feed records into chart-ready series.
//!
//! This module turns parsed records into:
//! - Normalized points (raw amounts or percentage shares)
//! - Hourly liquidity buckets (last sample wins)
//! - Summary statistics and hour-of-day totals

pub mod buckets;
pub mod series;
pub mod stats;

// Re-export main types and functions
pub use buckets::{bucket_start, merge_buckets, merge_hourly_buckets, LiquidityBucket};
pub use series::{
    normalize_fields, normalize_record, normalize_series, supply_series, ChartLabel, LabelKind,
    Mode, NormalizedPoint, SupplyPoint,
};
pub use stats::{hour_of_day, summary_stats, HourBucket, SummaryStats};
