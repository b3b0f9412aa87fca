//! Liquidity command implementation.
//!
//! Queries the indexer for liquidity samples, decodes the fixed-point
//! amounts, merges them into hourly buckets and writes the chart document.

use super::models::LiquidityArgs;
use super::utils::validate_url;
use crate::aggregator::{merge_hourly_buckets, LiquidityBucket, Mode};
use crate::feed::GraphClient;
use crate::output::{write_chart, ChartDocument};
use crate::parser::decode_liquidity;
use crate::utils::config::FIXED_POINT_DECIMALS;
use anyhow::{Context, Result};
use log::info;
use std::time::Instant;

/// Execute the liquidity command
///
/// **Public** - main entry point called from main.rs
pub fn execute_liquidity(args: LiquidityArgs) -> Result<()> {
    let start_time = Instant::now();

    info!("Indexer endpoint: {}", args.graph_url);

    // Step 1: Fetch samples
    info!("Step 1/3: Querying liquidity samples...");
    let client = GraphClient::new(&args.graph_url).context("Failed to create indexer client")?;
    let raw_samples = client
        .fetch_liquidity()
        .context("Failed to fetch liquidity samples")?;

    // Step 2: Decode and bucket
    info!("Step 2/3: Merging {} samples into hourly buckets...", raw_samples.len());
    let samples = decode_liquidity(&raw_samples, FIXED_POINT_DECIMALS)
        .context("Failed to decode liquidity samples")?;
    let buckets = merge_hourly_buckets(&samples);

    // Step 3: Write
    info!("Step 3/3: Writing chart ({} buckets)...", buckets.len());
    let document = ChartDocument::new("liquidity", Mode::Raw, buckets);
    write_chart(&document, &args.output).context("Failed to write chart JSON")?;

    info!("✓ Chart written to: {}", args.output.display());

    if args.print_summary {
        print_latest(document.points.last());
    }

    let elapsed = start_time.elapsed();
    info!("Liquidity completed in {:.2}s", elapsed.as_secs_f64());

    Ok(())
}

fn print_latest(latest: Option<&LiquidityBucket>) {
    println!("\n{}", "=".repeat(60));
    println!("LIQUIDITY");
    println!("{}", "=".repeat(60));
    match latest {
        Some(bucket) => {
            println!("Hour:   {}", bucket.timestamp);
            println!("AUM:    {:.2}", bucket.aum);
            println!("Supply: {:.2}", bucket.supply);
            println!("Price:  {:.4}", bucket.price);
        }
        None => println!("No samples"),
    }
    println!("{}", "=".repeat(60));
}

/// Validate liquidity arguments
pub fn validate_liquidity_args(args: &LiquidityArgs) -> Result<()> {
    validate_url(&args.graph_url, "Indexer URL")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_liquidity_args() {
        assert!(validate_liquidity_args(&LiquidityArgs::default()).is_ok());

        let args = LiquidityArgs {
            graph_url: String::new(),
            ..Default::default()
        };
        assert!(validate_liquidity_args(&args).is_err());
    }
}
