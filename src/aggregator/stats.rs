//! Summary statistics and hour-of-day totals.

use crate::parser::schema::{HourRecord, RawRecord};
use crate::utils::config::STATS_WINDOW;
use serde::{Deserialize, Serialize};

/// Latest and trailing-window totals of a series
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SummaryStats {
    /// Total of the last record
    pub today: f64,

    /// Sum of totals over the trailing window
    #[serde(rename = "last7days")]
    pub last_7_days: f64,
}

impl SummaryStats {
    pub fn summary(&self) -> String {
        format!("Today: {:.2} | Last 7 days: {:.2}", self.today, self.last_7_days)
    }
}

/// Compute summary stats
///
/// # Arguments
/// * `records` - Series records, ascending by timestamp
///
/// # Returns
/// `today` is the total of the last record and `last_7_days` the sum over the
/// last seven records. `None` for an empty series: no stats are available,
/// which is different from stats of zero.
///
/// # Example
/// ```ignore
/// let records = parse_records(&payload)?;
/// if let Some(stats) = summary_stats(&records) {
///     println!("{}", stats.summary());
/// }
/// ```
pub fn summary_stats(records: &[RawRecord]) -> Option<SummaryStats> {
    let last = records.last()?;
    let window = &records[records.len().saturating_sub(STATS_WINDOW)..];

    Some(SummaryStats {
        today: last.total(),
        last_7_days: window.iter().fold(0.0, |sum, record| sum + record.total()),
    })
}

/// Total for one hour-of-day row
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HourBucket {
    pub hour: u8,
    pub value: f64,
}

/// Reduce hour-of-day rows to their totals
///
/// One output row per input row; rows sharing an hour are not merged.
pub fn hour_of_day(records: &[HourRecord]) -> Vec<HourBucket> {
    records
        .iter()
        .map(|record| HourBucket {
            hour: record.hour,
            value: record.total(),
        })
        .collect()
}
