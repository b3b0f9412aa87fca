//! Merge liquidity samples into fixed-width time buckets.
//!
//! Only the last emitted bucket is compared against each sample, so a sample
//! landing in the current bucket replaces it (last sample wins) and any other
//! sample opens a new bucket.

use crate::parser::schema::LiquiditySample;
use crate::utils::config::SECONDS_IN_HOUR;
use log::{debug, warn};
use serde::Serialize;

/// One bucket of the liquidity series
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LiquidityBucket {
    /// Bucket start (unix seconds)
    pub timestamp: i64,

    /// Pool AUM in USD
    pub aum: f64,

    /// LP token supply
    pub supply: f64,

    /// `aum / supply`
    pub price: f64,
}

impl LiquidityBucket {
    fn from_sample(sample: &LiquiditySample, timestamp: i64) -> Self {
        Self {
            timestamp,
            aum: sample.aum,
            supply: sample.supply,
            price: sample.aum / sample.supply,
        }
    }
}

/// Floor a timestamp to the start of its bucket
pub fn bucket_start(timestamp: i64, width: i64) -> i64 {
    timestamp.div_euclid(width) * width
}

/// Merge samples into buckets of `width` seconds
pub fn merge_buckets(samples: &[LiquiditySample], width: i64) -> Vec<LiquidityBucket> {
    let mut buckets: Vec<LiquidityBucket> = Vec::new();

    for sample in samples {
        let timestamp = bucket_start(sample.timestamp, width);
        let bucket = LiquidityBucket::from_sample(sample, timestamp);

        match buckets.last().map(|last| last.timestamp) {
            Some(last) if last == timestamp => {
                let end = buckets.len() - 1;
                buckets[end] = bucket;
            }
            Some(last) => {
                if timestamp < last {
                    warn!("Sample at {} is older than bucket {}", sample.timestamp, last);
                }
                buckets.push(bucket);
            }
            None => buckets.push(bucket),
        }
    }

    debug!("Merged {} samples into {} buckets", samples.len(), buckets.len());

    buckets
}

/// Merge samples into hourly buckets
///
/// **Public** - entry point for the liquidity series
///
/// # Arguments
/// * `samples` - Decoded samples, ascending by timestamp
///
/// # Returns
/// One bucket per hour that has samples. The last sample of an hour wins and
/// `price` is `aum / supply`.
///
/// # Example
/// ```ignore
/// let samples = decode_liquidity(&raw_samples, FIXED_POINT_DECIMALS)?;
/// let buckets = merge_hourly_buckets(&samples);
/// ```
pub fn merge_hourly_buckets(samples: &[LiquiditySample]) -> Vec<LiquidityBucket> {
    merge_buckets(samples, SECONDS_IN_HOUR)
}
