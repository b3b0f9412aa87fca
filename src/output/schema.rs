//! Output JSON schema for chart documents.
//!
//! Schema is versioned to allow future evolution.

use crate::aggregator::{Mode, SummaryStats};
use crate::utils::config::SCHEMA_VERSION;
use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Top-level chart document written to JSON
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartDocument<T> {
    /// Schema version for compatibility checking
    pub version: String,

    /// Name of the series (feed name or `liquidity`)
    pub series: String,

    /// Display mode the points were computed in
    pub mode: Mode,

    /// Timestamp when the document was generated
    pub generated_at: String,

    /// Today / last 7 days, when the series has them
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stats: Option<SummaryStats>,

    /// Chart points
    pub points: Vec<T>,
}

impl<T> ChartDocument<T> {
    pub fn new(series: impl Into<String>, mode: Mode, points: Vec<T>) -> Self {
        Self {
            version: SCHEMA_VERSION.to_string(),
            series: series.into(),
            mode,
            generated_at: Utc::now().to_rfc3339(),
            stats: None,
            points,
        }
    }

    pub fn with_stats(mut self, stats: Option<SummaryStats>) -> Self {
        self.stats = stats;
        self
    }
}
