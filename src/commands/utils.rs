use crate::output::read_chart;
use crate::utils::config::SCHEMA_VERSION;
use anyhow::Result;
use std::path::PathBuf;

/// Check that a URL is non-empty and uses http(s)
pub fn validate_url(url: &str, what: &str) -> Result<()> {
    if url.is_empty() {
        anyhow::bail!("{} cannot be empty", what);
    }

    if !url.starts_with("http://") && !url.starts_with("https://") {
        anyhow::bail!("{} must start with http:// or https://", what);
    }

    Ok(())
}

/// Validate a chart JSON file
pub fn validate_chart_file(file_path: PathBuf) -> Result<()> {
    println!("Validating chart: {}", file_path.display());

    let chart = read_chart(&file_path)?;

    println!("✓ Valid chart JSON");
    println!("  Version: {}", chart.version);
    println!("  Series: {}", chart.series);
    println!("  Mode: {:?}", chart.mode);
    println!("  Points: {}", chart.points.len());
    if let Some(stats) = chart.stats {
        println!("  {}", stats.summary());
    }
    println!("  Generated: {}", chart.generated_at);

    Ok(())
}

/// Display version information
pub fn display_version() {
    println!("Pool Analytics v{}", env!("CARGO_PKG_VERSION"));
    println!("Chart Schema: v{}", SCHEMA_VERSION);
    println!();
    println!("Chart-ready series from DEX liquidity, volume and fee feeds.");
}
