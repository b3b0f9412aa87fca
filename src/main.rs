//! Pool Analytics CLI
//!
//! Fetches DEX analytics feeds and writes chart-ready JSON series.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use pool_analytics::commands::{
    display_version, execute_liquidity, execute_series, validate_chart_file,
    validate_liquidity_args, validate_series_args, LiquidityArgs, SeriesArgs,
};
use pool_analytics::feed::Feed;
use pool_analytics::utils::config::{DEFAULT_API_URL, DEFAULT_GRAPH_URL};

/// Pool Analytics - chart series for DEX liquidity, volume and fees
#[derive(Parser, Debug)]
#[command(name = "pool-analytics")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Fetch a stats API feed and write its chart series
    Series {
        /// Feed name (volume, fees, swap-sources, users, pool-stats, supply, volume-by-hour)
        #[arg(short, long)]
        feed: Feed,

        /// Stats API base URL
        #[arg(long, env = "POOL_ANALYTICS_API_URL", default_value = DEFAULT_API_URL)]
        api_url: String,

        /// Range start (unix seconds)
        #[arg(long)]
        from: Option<i64>,

        /// Range end (unix seconds), defaults to now
        #[arg(long)]
        to: Option<i64>,

        /// Range length in days when --from is omitted
        #[arg(long, default_value = "30")]
        days: i64,

        /// Show each category as a share of the period total
        #[arg(short, long)]
        percentage: bool,

        /// Output path for the chart JSON
        #[arg(short, long, default_value = "chart.json")]
        output: PathBuf,

        /// Print stats to stdout
        #[arg(long)]
        summary: bool,
    },

    /// Query the indexer and write the hourly liquidity series
    Liquidity {
        /// GraphQL indexer endpoint
        #[arg(long, env = "POOL_ANALYTICS_GRAPH_URL", default_value = DEFAULT_GRAPH_URL)]
        graph_url: String,

        /// Output path for the chart JSON
        #[arg(short, long, default_value = "liquidity.json")]
        output: PathBuf,

        /// Print the latest bucket to stdout
        #[arg(long)]
        summary: bool,
    },

    /// Validate a chart JSON file
    Validate {
        /// Path to chart JSON file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute command
    match cli.command {
        Commands::Series {
            feed,
            api_url,
            from,
            to,
            days,
            percentage,
            output,
            summary,
        } => {
            let args = SeriesArgs {
                api_url,
                feed,
                from,
                to,
                days,
                percentage,
                output,
                print_summary: summary,
            };

            validate_series_args(&args)?;
            execute_series(args)?;
        }

        Commands::Liquidity {
            graph_url,
            output,
            summary,
        } => {
            let args = LiquidityArgs {
                graph_url,
                output,
                print_summary: summary,
            };

            validate_liquidity_args(&args)?;
            execute_liquidity(args)?;
        }

        Commands::Validate { file } => {
            validate_chart_file(file)?;
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
