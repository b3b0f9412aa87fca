//! Feed payload parsing and input record definitions.
//!
//! This module handles:
//! - Decoding REST feed arrays into typed records
//! - Decoding indexer liquidity samples (fixed-point strings)

pub mod records;
pub mod schema;

// Re-export main types
pub use records::{
    decode_liquidity, parse_field_records, parse_fixed_point, parse_hour_records, parse_records,
    parse_timestamp,
};
pub use schema::{FieldRecord, HourRecord, LiquiditySample, RawLiquiditySample, RawRecord};
