//! Normalize metric records into chart-ready points.
//!
//! Every record becomes exactly one point. In percentage mode each category is
//! replaced by its share of the record total and `all` is pinned to 100; a
//! zero total yields non-finite shares, which are kept as-is.

use crate::parser::schema::{FieldRecord, RawRecord};
use chrono::{DateTime, Utc};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Value display mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Raw,
    Percentage,
}

impl Mode {
    pub fn from_percentage_flag(percentage: bool) -> Self {
        if percentage {
            Mode::Percentage
        } else {
            Mode::Raw
        }
    }
}

/// Which kind of label a series carries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelKind {
    Date,
    Timestamp,
}

/// X-axis label of a point
///
/// Serialized as a single `date` or `timestamp` key on the point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartLabel {
    /// Calendar instant
    Date(DateTime<Utc>),
    /// Raw unix seconds
    Timestamp(i64),
}

impl ChartLabel {
    /// Build a label for `timestamp` (unix seconds)
    ///
    /// A timestamp outside chrono's range cannot become a date and is kept as
    /// a raw timestamp.
    pub fn new(kind: LabelKind, timestamp: i64) -> Self {
        match kind {
            LabelKind::Timestamp => ChartLabel::Timestamp(timestamp),
            LabelKind::Date => match timestamp
                .checked_mul(1000)
                .and_then(DateTime::<Utc>::from_timestamp_millis)
            {
                Some(date) => ChartLabel::Date(date),
                None => {
                    warn!("Timestamp {} is out of calendar range", timestamp);
                    ChartLabel::Timestamp(timestamp)
                }
            },
        }
    }
}

/// Keys a point writes itself; categories with these names are dropped
pub const RESERVED_KEYS: [&str; 3] = ["all", "date", "timestamp"];

/// A normalized chart point
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedPoint {
    #[serde(flatten)]
    pub label: ChartLabel,

    /// Value per category (raw amount or share in percent), never a reserved key
    #[serde(flatten)]
    pub values: BTreeMap<String, f64>,

    /// Record total, or 100 in percentage mode
    pub all: f64,
}

/// Supply and implied price of the pool's stable token
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SupplyPoint {
    #[serde(flatten)]
    pub label: ChartLabel,

    /// Token supply
    pub value: f64,

    /// Pool value divided by supply
    pub price: f64,
}

/// Normalize one record
///
/// A category named like a reserved key still counts towards the total but
/// gets no column of its own.
pub fn normalize_record(record: &RawRecord, mode: Mode, kind: LabelKind) -> NormalizedPoint {
    let total = record.total();

    let values = record
        .metrics
        .iter()
        .filter(|(category, _)| {
            let reserved = RESERVED_KEYS.contains(&category.as_str());
            if reserved {
                warn!("Category '{}' at {} clashes with a point key", category, record.timestamp);
            }
            !reserved
        })
        .map(|(category, value)| {
            let value = match mode {
                Mode::Raw => *value,
                Mode::Percentage => value / total * 100.0,
            };
            (category.clone(), value)
        })
        .collect();

    NormalizedPoint {
        label: ChartLabel::new(kind, record.timestamp),
        values,
        all: match mode {
            Mode::Raw => total,
            Mode::Percentage => 100.0,
        },
    }
}

/// Normalize a series, one point per record, order preserved
///
/// **Public** - main entry point of the transformer
///
/// # Arguments
/// * `records` - Records in feed order
/// * `mode` - Raw amounts or percentage shares
/// * `kind` - Label written on each point
///
/// # Returns
/// One point per record. In percentage mode `all` is 100 and a zero total
/// gives non-finite shares.
///
/// # Example
/// ```ignore
/// let records = parse_records(&payload)?;
/// let points = normalize_series(&records, Mode::Percentage, Feed::Fees.label_kind());
/// ```
pub fn normalize_series(records: &[RawRecord], mode: Mode, kind: LabelKind) -> Vec<NormalizedPoint> {
    debug!("Normalizing {} records ({:?} mode)", records.len(), mode);

    records
        .iter()
        .map(|record| normalize_record(record, mode, kind))
        .collect()
}

/// Normalize records whose categories are named fields
pub fn normalize_fields(
    records: &[FieldRecord],
    keys: &[&str],
    mode: Mode,
    kind: LabelKind,
) -> Vec<NormalizedPoint> {
    let raw: Vec<RawRecord> = records.iter().map(|r| r.to_raw_record(keys)).collect();
    normalize_series(&raw, mode, kind)
}

/// Build the supply series from pool stats records
///
/// # Arguments
/// * `records` - Pool stats records
/// * `tokens` - Fields summed into the pool value
/// * `supply_field` - Field holding the token supply
pub fn supply_series(records: &[FieldRecord], tokens: &[&str], supply_field: &str) -> Vec<SupplyPoint> {
    records
        .iter()
        .map(|record| {
            let pool_value = record.to_raw_record(tokens).total();
            let supply = record.field(supply_field);
            SupplyPoint {
                label: ChartLabel::new(LabelKind::Date, record.timestamp),
                value: supply,
                price: pool_value / supply,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn record(timestamp: i64, metrics: &[(&str, f64)]) -> RawRecord {
        RawRecord::new(timestamp, metrics.iter().copied())
    }

    #[test]
    fn test_raw_mode_passes_values_through() {
        let point = normalize_record(
            &record(86400, &[("swap", 30.0), ("margin", 70.0)]),
            Mode::Raw,
            LabelKind::Date,
        );

        assert_eq!(point.values["swap"], 30.0);
        assert_eq!(point.values["margin"], 70.0);
        assert_eq!(point.all, 100.0);
        assert_eq!(
            point.label,
            ChartLabel::Date(Utc.with_ymd_and_hms(1970, 1, 2, 0, 0, 0).unwrap())
        );
    }

    #[test]
    fn test_percentage_mode_shares() {
        let point = normalize_record(
            &record(0, &[("swap", 1.0), ("margin", 3.0)]),
            Mode::Percentage,
            LabelKind::Timestamp,
        );

        assert_eq!(point.values["swap"], 25.0);
        assert_eq!(point.values["margin"], 75.0);
        assert_eq!(point.all, 100.0);
        assert_eq!(point.label, ChartLabel::Timestamp(0));
    }

    #[test]
    fn test_percentage_mode_zero_total_is_not_finite() {
        let point = normalize_record(
            &record(0, &[("swap", 0.0), ("margin", 0.0)]),
            Mode::Percentage,
            LabelKind::Date,
        );

        assert!(point.values["swap"].is_nan());
        assert!(point.values["margin"].is_nan());
        assert_eq!(point.all, 100.0);
    }

    #[test]
    fn test_empty_metrics() {
        let point = normalize_record(&record(5, &[]), Mode::Raw, LabelKind::Timestamp);
        assert!(point.values.is_empty());
        assert_eq!(point.all, 0.0);
    }

    #[test]
    fn test_out_of_range_date_falls_back() {
        assert_eq!(
            ChartLabel::new(LabelKind::Date, i64::MAX),
            ChartLabel::Timestamp(i64::MAX)
        );
    }

    #[test]
    fn test_point_serialization() {
        let point = normalize_record(&record(60, &[("fees", 2.5)]), Mode::Raw, LabelKind::Timestamp);
        let json = serde_json::to_value(&point).unwrap();
        assert_eq!(json, serde_json::json!({ "timestamp": 60, "fees": 2.5, "all": 2.5 }));
    }

    #[test]
    fn test_reserved_category_names_are_not_duplicated() {
        let point = normalize_record(
            &record(0, &[("all", 5.0), ("swap", 5.0), ("timestamp", 1.0)]),
            Mode::Raw,
            LabelKind::Timestamp,
        );
        assert_eq!(point.values.len(), 1);

        let json = serde_json::to_string(&point).unwrap();
        assert_eq!(json.matches("\"all\"").count(), 1);
        assert_eq!(json.matches("\"timestamp\"").count(), 1);
        assert_eq!(
            serde_json::from_str::<serde_json::Value>(&json).unwrap(),
            serde_json::json!({ "timestamp": 0, "swap": 5.0, "all": 11.0 })
        );
    }

    #[test]
    fn test_supply_series_price() {
        let stats: FieldRecord = serde_json::from_value(serde_json::json!({
            "timestamp": 0,
            "BTC": 150.0,
            "ETH": 50.0,
            "usdgSupply": 100.0
        }))
        .unwrap();

        let points = supply_series(&[stats], &["BTC", "ETH"], "usdgSupply");
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].value, 100.0);
        assert_eq!(points[0].price, 2.0);
    }
}
