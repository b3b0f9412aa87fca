//! Series command implementation.
//!
//! The series command:
//! 1. Fetches a feed from the stats API
//! 2. Parses and transforms it into chart points
//! 3. Writes the chart document

use super::models::SeriesArgs;
use super::utils::validate_url;
use crate::aggregator::{
    hour_of_day, normalize_fields, normalize_series, summary_stats, supply_series, Mode,
};
use crate::feed::{Feed, RestClient};
use crate::output::{write_chart, ChartDocument};
use crate::parser::{parse_field_records, parse_hour_records, parse_records};
use crate::utils::config::{POOL_TOKENS, SUPPLY_FIELD, USER_FIELDS};
use anyhow::{Context, Result};
use chrono::Utc;
use log::{debug, info};
use serde::Serialize;
use std::time::Instant;

/// Execute the series command
///
/// **Public** - main entry point called from main.rs
pub fn execute_series(args: SeriesArgs) -> Result<()> {
    let start_time = Instant::now();
    let params = args.query_params(Utc::now().timestamp())?;

    info!(
        "Starting {} series from {} to {} (period {}s)",
        args.feed,
        params.from,
        params.to,
        params.period.seconds()
    );

    // Step 1: Fetch
    info!("Step 1/3: Fetching feed...");
    let client = RestClient::new(&args.api_url).context("Failed to create API client")?;
    let payload = client
        .fetch(args.feed, &params)
        .with_context(|| format!("Failed to fetch {} feed", args.feed))?;

    // Steps 2 and 3: Transform and write
    info!("Step 2/3: Transforming records...");
    build_and_write(&args, &payload)?;

    let elapsed = start_time.elapsed();
    info!("Series completed in {:.2}s", elapsed.as_secs_f64());

    Ok(())
}

/// Transform a fetched payload and write the chart document
///
/// **Public** - split from execute_series so payloads can be replayed
pub fn build_and_write(args: &SeriesArgs, payload: &serde_json::Value) -> Result<()> {
    let mode = Mode::from_percentage_flag(args.percentage);
    let feed = args.feed;

    match feed {
        Feed::Volume | Feed::Fees | Feed::SwapSources => {
            let records = parse_records(payload).context("Failed to parse metric records")?;
            debug!("Parsed {} records", records.len());

            let stats = if feed.has_stats() {
                summary_stats(&records)
            } else {
                None
            };
            let points = normalize_series(&records, mode, feed.label_kind());
            let document = ChartDocument::new(feed.name(), mode, points).with_stats(stats);
            finish(args, &document)
        }
        Feed::Users | Feed::PoolStats => {
            let records = parse_field_records(payload).context("Failed to parse field records")?;
            let keys = if feed == Feed::Users { USER_FIELDS } else { POOL_TOKENS };

            let points = normalize_fields(&records, keys, mode, feed.label_kind());
            finish(args, &ChartDocument::new(feed.name(), mode, points))
        }
        Feed::Supply => {
            let records = parse_field_records(payload).context("Failed to parse pool stats")?;

            let points = supply_series(&records, POOL_TOKENS, SUPPLY_FIELD);
            finish(args, &ChartDocument::new(feed.name(), Mode::Raw, points))
        }
        Feed::VolumeByHour => {
            let records = parse_hour_records(payload).context("Failed to parse hour records")?;

            let points = hour_of_day(&records);
            finish(args, &ChartDocument::new(feed.name(), Mode::Raw, points))
        }
    }
}

/// Write the document and print the summary
///
/// **Private** - internal helper for build_and_write
fn finish<T: Serialize>(args: &SeriesArgs, document: &ChartDocument<T>) -> Result<()> {
    info!("Step 3/3: Writing chart ({} points)...", document.points.len());

    write_chart(document, &args.output).context("Failed to write chart JSON")?;

    info!("✓ Chart written to: {}", args.output.display());

    if args.print_summary {
        println!("\n{}", "=".repeat(60));
        println!("{} ({:?})", document.series.to_uppercase(), document.mode);
        println!("{}", "=".repeat(60));
        println!("Points: {}", document.points.len());
        match &document.stats {
            Some(stats) => println!("{}", stats.summary()),
            None if args.feed.has_stats() => println!("No stats available"),
            None => {}
        }
        println!("{}", "=".repeat(60));
    }

    Ok(())
}

/// Validate series arguments
///
/// **Public** - can be called before execute_series for early validation
pub fn validate_series_args(args: &SeriesArgs) -> Result<()> {
    validate_url(&args.api_url, "API URL")?;

    if args.days <= 0 {
        anyhow::bail!("days must be greater than 0");
    }

    // Defaults resolve against now, the same way execute_series does
    args.query_params(Utc::now().timestamp())?;

    Ok(())
}
