//! Configuration and constants for the CLI.

use std::time::Duration;

/// Default timeout for feed requests
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Current chart document schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

pub const SECONDS_IN_HOUR: i64 = 3_600;
pub const SECONDS_IN_DAY: i64 = 86_400;
pub const HOURS_IN_DAY: u8 = 24;

/// Ranges up to this length are fetched at hourly resolution
pub const HOURLY_RANGE_LIMIT: i64 = 3 * SECONDS_IN_DAY;

/// Range used when no explicit `--from` is given
pub const DEFAULT_RANGE_DAYS: i64 = 30;

/// Number of trailing records summed into `last7days`
pub const STATS_WINDOW: usize = 7;

/// Indexer amounts are 18-decimal fixed point
pub const FIXED_POINT_DECIMALS: u32 = 18;

/// Page size of the liquidity query
pub const GRAPH_PAGE_SIZE: usize = 1000;

// Named fields of the pool stats feed
pub const POOL_TOKENS: &[&str] = &["BTC", "BNB", "USDT", "USDC", "ETH", "BUSD"];
pub const USER_FIELDS: &[&str] = &["margin", "swap"];
pub const SUPPLY_FIELD: &str = "usdgSupply";

pub const DEFAULT_API_URL: &str = "http://localhost:3113";
pub const DEFAULT_GRAPH_URL: &str = "https://api.thegraph.com/subgraphs/name/gkrasulya/gmx";
