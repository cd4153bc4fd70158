//! JSON output writer.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use tracing::debug;

use crate::config::OutputConfig;
use crate::core::models::CleanedDataset;
use crate::error::Result;

/// Writes the cleaned dataset to a JSON file.
///
/// # Format
/// ```json
/// {
///   "name": "Chat",
///   "type": "personal_chat",
///   "messages": [
///     {"id": 1, "date": "2024-01-01T00:00:00", "from": "Alice", "text": "Hello"}
///   ]
/// }
/// ```
pub fn write_json(
    dataset: &CleanedDataset,
    output_path: impl AsRef<Path>,
    config: &OutputConfig,
) -> Result<()> {
    let output_path = output_path.as_ref();
    let json = to_json(dataset, config)?;
    let mut file = File::create(output_path)?;
    file.write_all(json.as_bytes())?;
    debug!(path = %output_path.display(), bytes = json.len(), "wrote cleaned dataset");
    Ok(())
}

/// Converts the cleaned dataset to a JSON string.
///
/// Same format as `write_json`, but returns a String instead of writing to file.
pub fn to_json(dataset: &CleanedDataset, config: &OutputConfig) -> Result<String> {
    let json = if config.pretty {
        serde_json::to_string_pretty(dataset)?
    } else {
        serde_json::to_string(dataset)?
    };
    Ok(json)
}
