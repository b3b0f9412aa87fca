//! Decoding of raw feed payloads into typed records.
//!
//! Rows that fail to decode are logged and skipped; a payload is rejected only
//! when it is not an array or when none of its rows decode.

use super::schema::{FieldRecord, HourRecord, LiquiditySample, RawLiquiditySample, RawRecord};
use crate::utils::config::HOURS_IN_DAY;
use crate::utils::error::ParseError;
use log::{debug, warn};
use serde::de::DeserializeOwned;

/// Parse a `{timestamp, metrics}` feed payload
pub fn parse_records(payload: &serde_json::Value) -> Result<Vec<RawRecord>, ParseError> {
    parse_rows(payload, "metric record")
}

/// Parse an hour-of-day feed payload
///
/// Rows whose hour is not in 0-23 are skipped like undecodable rows.
pub fn parse_hour_records(payload: &serde_json::Value) -> Result<Vec<HourRecord>, ParseError> {
    parse_rows_with(payload, "hour record", |record: &HourRecord| {
        if record.hour < HOURS_IN_DAY {
            Ok(())
        } else {
            Err(format!("hour {} is out of range", record.hour))
        }
    })
}

/// Parse a feed payload whose categories are named fields
pub fn parse_field_records(payload: &serde_json::Value) -> Result<Vec<FieldRecord>, ParseError> {
    parse_rows(payload, "field record")
}

/// Parse an array payload row by row
///
/// **Private** - shared by the public parse functions
fn parse_rows<T: DeserializeOwned>(
    payload: &serde_json::Value,
    what: &str,
) -> Result<Vec<T>, ParseError> {
    parse_rows_with(payload, what, |_| Ok(()))
}

/// Parse an array payload row by row, dropping rows that fail `check`
fn parse_rows_with<T, F>(payload: &serde_json::Value, what: &str, check: F) -> Result<Vec<T>, ParseError>
where
    T: DeserializeOwned,
    F: Fn(&T) -> Result<(), String>,
{
    let rows = payload.as_array().ok_or_else(|| {
        ParseError::InvalidFormat(format!("Expected a JSON array of {}s", what))
    })?;

    let mut records = Vec::with_capacity(rows.len());

    for (index, row) in rows.iter().enumerate() {
        match T::deserialize(row) {
            Ok(record) => match check(&record) {
                Ok(()) => records.push(record),
                Err(reason) => warn!("Skipping {} {}: {}", what, index, reason),
            },
            Err(e) => warn!("Skipping {} {}: {}", what, index, e),
        }
    }

    if records.is_empty() && !rows.is_empty() {
        return Err(ParseError::InvalidFormat(format!(
            "All {} {}s failed to parse",
            rows.len(),
            what
        )));
    }

    debug!("Parsed {} of {} {}s", records.len(), rows.len(), what);

    Ok(records)
}

/// Decode indexer liquidity samples
///
/// Amounts are scaled down by `10^decimals`. Undecodable samples are skipped.
pub fn decode_liquidity(
    samples: &[RawLiquiditySample],
    decimals: u32,
) -> Result<Vec<LiquiditySample>, ParseError> {
    let mut decoded = Vec::with_capacity(samples.len());

    for (index, sample) in samples.iter().enumerate() {
        match decode_sample(sample, decimals) {
            Ok(sample) => decoded.push(sample),
            Err(e) => warn!("Skipping liquidity sample {}: {}", index, e),
        }
    }

    if decoded.is_empty() && !samples.is_empty() {
        return Err(ParseError::InvalidFormat(
            "All liquidity samples failed to decode".to_string(),
        ));
    }

    Ok(decoded)
}

fn decode_sample(sample: &RawLiquiditySample, decimals: u32) -> Result<LiquiditySample, ParseError> {
    Ok(LiquiditySample {
        timestamp: parse_timestamp(&sample.timestamp)?,
        aum: parse_fixed_point(&sample.aum_in_usdg, decimals)?,
        supply: parse_fixed_point(&sample.glp_supply, decimals)?,
    })
}

/// Parse a unix timestamp given as a JSON number or a decimal string
pub fn parse_timestamp(value: &serde_json::Value) -> Result<i64, ParseError> {
    if let Some(n) = value.as_i64() {
        Ok(n)
    } else if let Some(s) = value.as_str() {
        s.trim()
            .parse::<i64>()
            .map_err(|e| ParseError::InvalidNumber(format!("Invalid timestamp '{}': {}", s, e)))
    } else {
        Err(ParseError::InvalidFormat(format!(
            "Expected number or string timestamp, found {}",
            value
        )))
    }
}

/// Convert a fixed-point integer string to a float
///
/// The integer and fractional parts are split exactly before conversion so
/// large amounts keep their whole-unit precision. Strings that are not plain
/// integers (e.g. exponent notation) fall back to float parsing. At most one
/// leading minus is accepted and the result is always finite.
pub fn parse_fixed_point(value: &str, decimals: u32) -> Result<f64, ParseError> {
    let value = value.trim();
    let (negative, digits) = match value.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, value),
    };

    if negative && digits.starts_with(['-', '+']) {
        return Err(ParseError::InvalidNumber(format!(
            "Invalid fixed-point value '{}': repeated sign",
            value
        )));
    }

    let scaled = match (digits.parse::<u128>(), 10u128.checked_pow(decimals)) {
        (Ok(raw), Some(scale)) => (raw / scale) as f64 + (raw % scale) as f64 / scale as f64,
        _ => {
            let raw = digits.parse::<f64>().map_err(|e| {
                ParseError::InvalidNumber(format!("Invalid fixed-point value '{}': {}", value, e))
            })?;
            let scaled = raw / 10f64.powi(decimals as i32);
            if !scaled.is_finite() {
                return Err(ParseError::InvalidNumber(format!(
                    "Fixed-point value '{}' is not finite",
                    value
                )));
            }
            scaled
        }
    };

    Ok(if negative { -scaled } else { scaled })
}
