use pool_analytics::aggregator::{
    hour_of_day, merge_hourly_buckets, normalize_series, summary_stats, ChartLabel, LabelKind,
    LiquidityBucket, Mode, NormalizedPoint,
};
use pool_analytics::parser::{HourRecord, LiquiditySample, RawRecord};
use pretty_assertions::assert_eq;
use std::collections::BTreeMap;

fn sample_records() -> Vec<RawRecord> {
    vec![
        RawRecord::new(1_624_406_400, [("swap", 120.5), ("margin", 80.0), ("mint", 10.25)]),
        RawRecord::new(1_624_492_800, [("swap", 0.0), ("liquidation", 42.0)]),
        RawRecord::new(1_624_579_200, Vec::<(&str, f64)>::new()),
        RawRecord::new(1_624_665_600, [("burn", 3.0), ("swap", 7.0)]),
    ]
}

fn category_sum(point: &NormalizedPoint) -> f64 {
    point.values.values().sum()
}

#[test]
fn test_raw_mode_all_is_category_sum() {
    let records = sample_records();
    let points = normalize_series(&records, Mode::Raw, LabelKind::Date);

    assert_eq!(points.len(), records.len());
    for point in &points {
        assert!((point.all - category_sum(point)).abs() < 1e-9);
    }
}

#[test]
fn test_percentage_mode_shares_sum_to_100() {
    let records: Vec<RawRecord> = sample_records()
        .into_iter()
        .filter(|r| r.total() > 0.0)
        .collect();
    let points = normalize_series(&records, Mode::Percentage, LabelKind::Date);

    for point in &points {
        assert_eq!(point.all, 100.0);
        assert!((category_sum(point) - 100.0).abs() < 1e-9);
    }
}

#[test]
fn test_output_preserves_order_and_labels() {
    let records = sample_records();

    let by_timestamp = normalize_series(&records, Mode::Raw, LabelKind::Timestamp);
    let labels: Vec<ChartLabel> = by_timestamp.iter().map(|p| p.label).collect();
    let expected: Vec<ChartLabel> = records
        .iter()
        .map(|r| ChartLabel::Timestamp(r.timestamp))
        .collect();
    assert_eq!(labels, expected);

    let by_date = normalize_series(&records, Mode::Raw, LabelKind::Date);
    match by_date[0].label {
        ChartLabel::Date(date) => assert_eq!(date.timestamp(), 1_624_406_400),
        other => panic!("expected a date label, got {:?}", other),
    }
}

#[test]
fn test_transform_is_idempotent() {
    let mut records = sample_records();
    records.push(RawRecord::new(1_624_752_000, [("swap", 0.0)]));

    for mode in [Mode::Raw, Mode::Percentage] {
        let first = normalize_series(&records, mode, LabelKind::Date);
        let second = normalize_series(&records, mode, LabelKind::Date);

        assert_eq!(first.len(), second.len());
        for (a, b) in first.iter().zip(&second) {
            assert_eq!(a.label, b.label);
            assert_eq!(a.all.to_bits(), b.all.to_bits());
            let a_bits: BTreeMap<&String, u64> = a.values.iter().map(|(k, v)| (k, v.to_bits())).collect();
            let b_bits: BTreeMap<&String, u64> = b.values.iter().map(|(k, v)| (k, v.to_bits())).collect();
            assert_eq!(a_bits, b_bits);
        }
    }
}

#[test]
fn test_bucket_merge_last_sample_wins() {
    let samples = [
        LiquiditySample::new(3601, 1.0, 2.0),
        LiquiditySample::new(3650, 5.0, 2.0),
    ];

    let buckets = merge_hourly_buckets(&samples);

    assert_eq!(
        buckets,
        vec![LiquidityBucket {
            timestamp: 3600,
            aum: 5.0,
            supply: 2.0,
            price: 2.5,
        }]
    );
}

#[test]
fn test_bucket_merge_distinct_hours() {
    let samples = [
        LiquiditySample::new(3601, 1.0, 1.0),
        LiquiditySample::new(3700, 2.0, 1.0),
        LiquiditySample::new(7300, 3.0, 1.0),
        LiquiditySample::new(14_500, 4.0, 2.0),
        LiquiditySample::new(14_999, 6.0, 2.0),
    ];

    let buckets = merge_hourly_buckets(&samples);

    assert_eq!(buckets.len(), 3);
    let timestamps: Vec<i64> = buckets.iter().map(|b| b.timestamp).collect();
    assert_eq!(timestamps, vec![3600, 7200, 14_400]);
    assert!(timestamps.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(buckets[0].aum, 2.0);
    assert_eq!(buckets[2].price, 3.0);
}

#[test]
fn test_bucket_merge_empty() {
    assert!(merge_hourly_buckets(&[]).is_empty());
}

#[test]
fn test_summary_stats_empty_is_absent() {
    assert_eq!(summary_stats(&[]), None);
}

#[test]
fn test_summary_stats_uniform_records() {
    let records: Vec<RawRecord> = (0..10)
        .map(|i| RawRecord::new(i * 86_400, [("swap", 60.0), ("margin", 40.0)]))
        .collect();

    let stats = summary_stats(&records).unwrap();

    assert_eq!(stats.today, 100.0);
    assert_eq!(stats.last_7_days, 700.0);
}

#[test]
fn test_summary_stats_missing_metrics_count_as_zero() {
    let records = vec![
        RawRecord::new(0, [("swap", 5.0)]),
        RawRecord::new(86_400, Vec::<(&str, f64)>::new()),
    ];

    let stats = summary_stats(&records).unwrap();

    assert_eq!(stats.today, 0.0);
    assert_eq!(stats.last_7_days, 5.0);
}

#[test]
fn test_hour_of_day_one_row_per_record() {
    let records = vec![
        HourRecord {
            hour: 0,
            metrics: BTreeMap::from([("swap".to_string(), 1.0), ("margin".to_string(), 2.0)]),
        },
        HourRecord {
            hour: 0,
            metrics: BTreeMap::new(),
        },
    ];

    let rows = hour_of_day(&records);

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].value, 3.0);
    assert_eq!(rows[1].value, 0.0);
}
