//! Input record definitions for the analytics feeds.
//!
//! The REST feed returns either `{timestamp, metrics}` records, records with
//! named per-category fields, or `{hour, metrics}` rows. The indexer returns
//! liquidity samples with every number encoded as a string.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// A timestamped set of category amounts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawRecord {
    /// Unix seconds
    pub timestamp: i64,

    /// Amount per category; a missing or null `metrics` is an empty mapping
    #[serde(default, deserialize_with = "null_as_empty")]
    pub metrics: BTreeMap<String, f64>,
}

impl RawRecord {
    pub fn new<K: Into<String>>(timestamp: i64, metrics: impl IntoIterator<Item = (K, f64)>) -> Self {
        Self {
            timestamp,
            metrics: metrics.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }

    /// Sum of all category amounts
    pub fn total(&self) -> f64 {
        sum_metrics(&self.metrics)
    }
}

/// A row of the hour-of-day feed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourRecord {
    /// Hour label, 0-23
    pub hour: u8,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub metrics: BTreeMap<String, f64>,
}

impl HourRecord {
    pub fn total(&self) -> f64 {
        sum_metrics(&self.metrics)
    }
}

/// A record whose categories are top-level named fields (e.g. per-token USD amounts)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FieldRecord {
    pub timestamp: i64,

    #[serde(flatten)]
    pub fields: serde_json::Map<String, serde_json::Value>,
}

impl FieldRecord {
    /// Numeric value of a named field; missing or non-numeric counts as 0
    pub fn field(&self, name: &str) -> f64 {
        self.fields
            .get(name)
            .and_then(serde_json::Value::as_f64)
            .unwrap_or(0.0)
    }

    /// Select the given fields as the metrics of a [`RawRecord`]
    pub fn to_raw_record(&self, keys: &[&str]) -> RawRecord {
        RawRecord::new(self.timestamp, keys.iter().map(|key| (*key, self.field(key))))
    }
}

/// Liquidity sample as returned by the indexer (numbers as strings)
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawLiquiditySample {
    /// Unix seconds, as a string or a number
    pub timestamp: serde_json::Value,

    /// Pool AUM, 18-decimal fixed point
    pub aum_in_usdg: String,

    /// LP token supply, 18-decimal fixed point
    pub glp_supply: String,
}

/// Decoded liquidity sample
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LiquiditySample {
    pub timestamp: i64,
    pub aum: f64,
    pub supply: f64,
}

impl LiquiditySample {
    pub fn new(timestamp: i64, aum: f64, supply: f64) -> Self {
        Self { timestamp, aum, supply }
    }
}

fn sum_metrics(metrics: &BTreeMap<String, f64>) -> f64 {
    metrics.values().fold(0.0, |sum, value| sum + value)
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<BTreeMap<String, f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<BTreeMap<String, f64>>::deserialize(deserializer)?.unwrap_or_default())
}
