//! JSON chart document writer.
//!
//! Non-finite values (percentage shares of a zero total, prices at zero
//! supply) are written as `null`.

use super::schema::ChartDocument;
use super::validate_path;
use crate::utils::error::OutputError;
use log::{debug, info};
use serde::Serialize;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Write a chart document to a JSON file
///
/// **Public** - main entry point for JSON output
///
/// # Arguments
/// * `document` - Chart document to write
/// * `output_path` - Path to output JSON file
///
/// # Returns
/// Ok if file written successfully
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::SerializationFailed` - JSON serialization error
/// * `OutputError::InvalidPath` - Path cannot be created or is invalid
///
/// # Example
/// ```ignore
/// let document = ChartDocument::new("fees", Mode::Raw, points).with_stats(stats);
/// write_chart(&document, "fees.json")?;
/// ```
pub fn write_chart<T: Serialize>(
    document: &ChartDocument<T>,
    output_path: impl AsRef<Path>,
) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing {} chart to: {}", document.series, output_path.display());

    validate_path(output_path)?;

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            debug!("Creating parent directories: {}", parent.display());
            std::fs::create_dir_all(parent).map_err(|e| {
                OutputError::InvalidPath(format!(
                    "Cannot create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    let file = File::create(output_path)?;
    serde_json::to_writer_pretty(BufWriter::new(file), document)?;

    info!(
        "Chart written successfully ({} points, {} bytes)",
        document.points.len(),
        std::fs::metadata(output_path).map(|m| m.len()).unwrap_or(0)
    );

    Ok(())
}

/// Read a chart document from a JSON file
///
/// Points are kept as untyped JSON; the reader only needs the header.
pub fn read_chart(input_path: impl AsRef<Path>) -> Result<ChartDocument<serde_json::Value>, OutputError> {
    let input_path = input_path.as_ref();

    debug!("Reading chart from: {}", input_path.display());

    let file = File::open(input_path)?;
    let document: ChartDocument<serde_json::Value> = serde_json::from_reader(file)?;

    debug!(
        "Chart loaded: version {}, series {}",
        document.version, document.series
    );

    Ok(document)
}
