use crate::feed::{Feed, QueryParams};
use crate::utils::config::{DEFAULT_API_URL, DEFAULT_GRAPH_URL, DEFAULT_RANGE_DAYS, SECONDS_IN_DAY};
use anyhow::{anyhow, bail, Result};
use std::path::PathBuf;

/// Arguments for the series command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct SeriesArgs {
    /// Stats API base URL
    pub api_url: String,

    /// Feed to fetch
    pub feed: Feed,

    /// Range start (unix seconds); defaults to `days` before `to`
    pub from: Option<i64>,

    /// Range end (unix seconds); defaults to now
    pub to: Option<i64>,

    /// Range length in days when `from` is not given
    pub days: i64,

    /// Show each category as a share of the total
    pub percentage: bool,

    /// Output path for the chart JSON
    pub output: PathBuf,

    /// Print stats to stdout
    pub print_summary: bool,
}

impl Default for SeriesArgs {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            feed: Feed::Volume,
            from: None,
            to: None,
            days: DEFAULT_RANGE_DAYS,
            percentage: false,
            output: PathBuf::from("chart.json"),
            print_summary: false,
        }
    }
}

impl SeriesArgs {
    /// Resolve the request range against `now`
    ///
    /// Fails when the range is empty or reversed, or when `days` reaches
    /// past the representable timestamps.
    pub fn query_params(&self, now: i64) -> Result<QueryParams> {
        let to = self.to.unwrap_or(now);
        let from = match self.from {
            Some(from) => from,
            None => self
                .days
                .checked_mul(SECONDS_IN_DAY)
                .and_then(|range| to.checked_sub(range))
                .ok_or_else(|| anyhow!("range of {} days before {} is out of bounds", self.days, to))?,
        };

        if from >= to {
            bail!("from ({}) must be before to ({})", from, to);
        }

        Ok(QueryParams::new(from, to))
    }
}

/// Arguments for the liquidity command
#[derive(Debug, Clone)]
pub struct LiquidityArgs {
    /// GraphQL indexer endpoint
    pub graph_url: String,

    /// Output path for the chart JSON
    pub output: PathBuf,

    /// Print the latest bucket to stdout
    pub print_summary: bool,
}

impl Default for LiquidityArgs {
    fn default() -> Self {
        Self {
            graph_url: DEFAULT_GRAPH_URL.to_string(),
            output: PathBuf::from("liquidity.json"),
            print_summary: false,
        }
    }
}
