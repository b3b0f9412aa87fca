//! Request and response types for the analytics feeds.
//!
//! The REST feed takes `period`, `from` and `to` query parameters; the
//! indexer speaks plain GraphQL over HTTP POST.

use crate::aggregator::LabelKind;
use crate::parser::schema::RawLiquiditySample;
use crate::utils::config::{HOURLY_RANGE_LIMIT, SECONDS_IN_DAY, SECONDS_IN_HOUR};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Resolution of the fetched series
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    Hourly,
    Daily,
}

impl Period {
    pub fn seconds(self) -> i64 {
        match self {
            Period::Hourly => SECONDS_IN_HOUR,
            Period::Daily => SECONDS_IN_DAY,
        }
    }

    /// Hourly for ranges up to three days, daily otherwise
    pub fn for_range(from: i64, to: i64) -> Self {
        if to.saturating_sub(from) <= HOURLY_RANGE_LIMIT {
            Period::Hourly
        } else {
            Period::Daily
        }
    }
}

/// Query parameters of a REST feed request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryParams {
    pub period: Period,
    pub from: i64,
    pub to: i64,
}

impl QueryParams {
    /// Parameters for `[from, to]` with the period picked from the range length
    pub fn new(from: i64, to: i64) -> Self {
        Self {
            period: Period::for_range(from, to),
            from,
            to,
        }
    }

    pub fn to_pairs(&self) -> [(&'static str, String); 3] {
        [
            ("period", self.period.seconds().to_string()),
            ("from", self.from.to_string()),
            ("to", self.to.to_string()),
        ]
    }
}

/// REST feeds exposed by the stats API
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feed {
    Volume,
    Fees,
    SwapSources,
    Users,
    PoolStats,
    /// Stable-token supply and price, derived from the pool stats feed
    Supply,
    VolumeByHour,
}

impl Feed {
    pub const ALL: [Feed; 7] = [
        Feed::Volume,
        Feed::Fees,
        Feed::SwapSources,
        Feed::Users,
        Feed::PoolStats,
        Feed::Supply,
        Feed::VolumeByHour,
    ];

    /// Path relative to the API base URL
    pub fn path(self) -> &'static str {
        match self {
            Feed::Volume => "api/volume",
            Feed::Fees => "api/fees",
            Feed::SwapSources => "api/swapSources",
            Feed::Users => "api/users",
            Feed::PoolStats | Feed::Supply => "api/poolStats",
            Feed::VolumeByHour => "api/volumeByHour",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Feed::Volume => "volume",
            Feed::Fees => "fees",
            Feed::SwapSources => "swap-sources",
            Feed::Users => "users",
            Feed::PoolStats => "pool-stats",
            Feed::Supply => "supply",
            Feed::VolumeByHour => "volume-by-hour",
        }
    }

    // Volume charts are keyed by the raw timestamp
    pub fn label_kind(self) -> LabelKind {
        match self {
            Feed::Volume => LabelKind::Timestamp,
            _ => LabelKind::Date,
        }
    }

    /// Whether the feed gets today / last 7 days stats
    pub fn has_stats(self) -> bool {
        matches!(self, Feed::Volume | Feed::Fees)
    }
}

impl fmt::Display for Feed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Feed {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Feed::ALL
            .iter()
            .copied()
            .find(|feed| feed.name() == s)
            .ok_or_else(|| {
                let names: Vec<&str> = Feed::ALL.iter().map(|f| f.name()).collect();
                format!("unknown feed '{}' (expected one of: {})", s, names.join(", "))
            })
    }
}

/// GraphQL request body
#[derive(Debug, Clone, Serialize)]
pub struct GraphQlRequest {
    pub query: String,
}

impl GraphQlRequest {
    /// Query for liquidity samples ordered by timestamp
    pub fn liquidity(first: usize) -> Self {
        Self {
            query: format!(
                "{{ addLiquidities(first: {} orderBy: timestamp) {{ timestamp aumInUsdg glpSupply }} }}",
                first
            ),
        }
    }
}

/// GraphQL response envelope
#[derive(Debug, Deserialize)]
pub struct GraphQlResponse<T> {
    // Missing `Option` fields deserialize to `None`
    pub data: Option<T>,
    pub errors: Option<Vec<GraphQlError>>,
}

/// GraphQL error object
#[derive(Debug, Deserialize)]
pub struct GraphQlError {
    pub message: String,
}

/// `data` payload of the liquidity query
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiquidityData {
    pub add_liquidities: Vec<RawLiquiditySample>,
}
