use pool_analytics::parser::{
    decode_liquidity, parse_field_records, parse_hour_records, parse_records, LiquiditySample,
    RawLiquiditySample,
};
use serde_json::json;

#[test]
fn test_parse_fee_feed() {
    let payload = json!([
        { "timestamp": 1624406400, "metrics": { "swap": 10.5, "margin": 4.5 } },
        { "timestamp": 1624492800 },
        { "timestamp": 1624579200, "metrics": null }
    ]);

    let records = parse_records(&payload).unwrap();

    assert_eq!(records.len(), 3);
    assert_eq!(records[0].total(), 15.0);
    assert!(records[1].metrics.is_empty());
    assert!(records[2].metrics.is_empty());
}

#[test]
fn test_parse_hour_feed() {
    let payload = json!([
        { "hour": 0, "metrics": { "swap": 1.0 } },
        { "hour": 23 },
        { "hour": 24, "metrics": { "swap": 9.0 } },
        { "hour": 300, "metrics": {} }
    ]);

    let records = parse_hour_records(&payload).unwrap();

    // hours past 23 are not hours of a day and are skipped
    assert_eq!(records.len(), 2);
    assert_eq!(records[1].hour, 23);
}

#[test]
fn test_parse_pool_stats_feed() {
    let payload = json!([
        {
            "timestamp": 1624406400,
            "BTC": 1000.0,
            "BNB": 500.0,
            "USDT": 250.0,
            "usdgSupply": 1700.0,
            "note": "ignored"
        }
    ]);

    let records = parse_field_records(&payload).unwrap();
    let raw = records[0].to_raw_record(&["BTC", "BNB", "USDT", "USDC"]);

    assert_eq!(raw.total(), 1750.0);
    assert_eq!(raw.metrics["USDC"], 0.0);
    assert_eq!(records[0].field("usdgSupply"), 1700.0);
    assert_eq!(records[0].field("note"), 0.0);
}

#[test]
fn test_decode_indexer_samples() {
    let samples: Vec<RawLiquiditySample> = serde_json::from_value(json!([
        {
            "timestamp": "1630000000",
            "aumInUsdg": "5000000000000000000000000",
            "glpSupply": "4000000000000000000000000"
        },
        {
            "timestamp": 1630000100,
            "aumInUsdg": "0",
            "glpSupply": "0"
        }
    ]))
    .unwrap();

    let decoded = decode_liquidity(&samples, 18).unwrap();

    assert_eq!(
        decoded,
        vec![
            LiquiditySample::new(1_630_000_000, 5_000_000.0, 4_000_000.0),
            LiquiditySample::new(1_630_000_100, 0.0, 0.0),
        ]
    );
}

#[test]
fn test_decode_all_samples_invalid() {
    let samples: Vec<RawLiquiditySample> = serde_json::from_value(json!([
        { "timestamp": "x", "aumInUsdg": "1", "glpSupply": "1" }
    ]))
    .unwrap();

    assert!(decode_liquidity(&samples, 18).is_err());
}
