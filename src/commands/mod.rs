//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.

pub mod liquidity;
pub mod models;
pub mod series;
pub mod utils;

// Re-export main command functions
pub use liquidity::{execute_liquidity, validate_liquidity_args};
pub use models::{LiquidityArgs, SeriesArgs};
pub use series::{build_and_write, execute_series, validate_series_args};
pub use utils::{display_version, validate_chart_file};
